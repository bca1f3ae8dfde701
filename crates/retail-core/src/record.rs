//! Row types for the three datasets.
//!
//! Each struct lists its fields in the column order of the CSV it is written
//! to. Records are built once by a generator and never mutated afterwards,
//! with the single exception of [`InventoryRecord`], which the reconciler
//! folds sales into before it is persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// One product of a partition's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub ingestion_date: NaiveDate,
  /// Zero-padded hour label; absent for daily partitions.
  pub ingestion_hour: Option<String>,
  /// `PROD_0001`, `PROD_0002`, … unique within the partition.
  pub product_id:     String,
  pub product_name:   String,
  pub category_id:    String,
  pub category_name:  String,
  pub brand:          String,
  pub description:    String,
  pub unit_price:     Decimal,
  pub supplier_name:  String,
  /// Comma-separated tags, stored exactly as written to the CSV column.
  pub tags:           String,
}

impl Product {
  /// Individual tags, whatever separator spacing the catalog used.
  pub fn tag_list(&self) -> Vec<&str> {
    self.tags.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
  }
}

// ─── Sales ───────────────────────────────────────────────────────────────────

/// A single sale of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
  pub transaction_date:  NaiveDate,
  pub transaction_hour:  Option<String>,
  pub transaction_id:    String,
  pub customer_id:       String,
  pub order_country:     String,
  /// Foreign reference into the partition's catalog.
  pub product_id:        String,
  /// Copied from the referenced product when the sale is generated.
  pub unit_price:        Decimal,
  pub units_sold:        u32,
  /// Either zero or a whole percentage between 5% and 20%.
  pub discount_applied:  Decimal,
  pub total_amount_paid: Decimal,
}

impl Transaction {
  /// `unit_price * (1 - discount_applied) * units_sold`, normalised.
  pub fn amount_due(
    unit_price: Decimal,
    discount_applied: Decimal,
    units_sold: u32,
  ) -> Decimal {
    (unit_price * (Decimal::ONE - discount_applied) * Decimal::from(units_sold))
      .normalize()
  }
}

// ─── Inventory ───────────────────────────────────────────────────────────────

/// Stock movements for one product over one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
  pub inventory_date:   NaiveDate,
  pub inventory_hour:   Option<String>,
  pub product_id:       String,
  pub in_stock:         i64,
  /// Replenishment received during the partition.
  pub new_product:      i64,
  /// Returns written off; never positive.
  pub returned_product: i64,
  /// Negated sum of units sold; never positive.
  pub units_sold:       i64,
  pub final_stock:      i64,
}

impl InventoryRecord {
  /// Re-derive `final_stock` from the four movement columns.
  pub fn recompute_final_stock(&mut self) {
    self.final_stock =
      self.in_stock + self.new_product + self.returned_product + self.units_sold;
  }
}
