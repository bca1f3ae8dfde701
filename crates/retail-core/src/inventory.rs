//! Inventory snapshot and reconciliation.
//!
//! A pre-sales snapshot is drawn for every catalog product, then the
//! partition's sales are aggregated per product and folded in as negative
//! `units_sold`, yielding the final stock that gets persisted.

use std::collections::HashMap;

use rand::Rng;

use crate::{
  partition::Partition,
  record::{InventoryRecord, Product, Transaction},
};

/// Pre-sales stock per product, iterated in catalog order.
#[derive(Debug, Clone, Default)]
pub struct PreSalesInventory {
  records: Vec<InventoryRecord>,
  index:   HashMap<String, usize>,
}

impl PreSalesInventory {
  /// Draw a baseline for every product in `catalog`.
  ///
  /// `in_stock` and `new_product` are uniform in `[2000, 7000]`,
  /// `returned_product` in `[-2000, 0]`, and `units_sold` starts at zero.
  pub fn draw<R: Rng + ?Sized>(
    catalog: &[Product],
    partition: &Partition,
    rng: &mut R,
  ) -> Self {
    let mut snapshot = Self::default();
    for product in catalog {
      let mut record = InventoryRecord {
        inventory_date:   partition.date,
        inventory_hour:   partition.hour_label(),
        product_id:       product.product_id.clone(),
        in_stock:         rng.random_range(2000..=7000),
        new_product:      rng.random_range(2000..=7000),
        returned_product: rng.random_range(-2000..=0),
        units_sold:       0,
        final_stock:      0,
      };
      record.recompute_final_stock();
      snapshot.insert(record);
    }
    snapshot
  }

  /// Add or replace the record for its product id, keeping first-insertion
  /// order.
  pub fn insert(&mut self, record: InventoryRecord) {
    match self.index.get(&record.product_id) {
      Some(&i) => self.records[i] = record,
      None => {
        self.index.insert(record.product_id.clone(), self.records.len());
        self.records.push(record);
      }
    }
  }

  pub fn get(&self, product_id: &str) -> Option<&InventoryRecord> {
    self.index.get(product_id).map(|&i| &self.records[i])
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Fold `sales` into the snapshot and return the final records.
  ///
  /// Products without sales keep `units_sold = 0`. Sales for products absent
  /// from the snapshot are logged and otherwise ignored.
  pub fn reconcile(mut self, sales: &[Transaction]) -> Vec<InventoryRecord> {
    for (product_id, sold) in units_sold_by_product(sales) {
      match self.index.get(product_id) {
        Some(&i) => self.records[i].units_sold = -sold,
        None => {
          tracing::warn!(product_id, sold, "sales reference a product with no inventory");
        }
      }
    }
    for record in &mut self.records {
      record.recompute_final_stock();
    }
    self.records
  }
}

/// Total units sold per product id.
pub fn units_sold_by_product(sales: &[Transaction]) -> HashMap<&str, i64> {
  let mut totals: HashMap<&str, i64> = HashMap::new();
  for sale in sales {
    *totals.entry(sale.product_id.as_str()).or_default() += i64::from(sale.units_sold);
  }
  totals
}
