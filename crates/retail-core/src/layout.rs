//! Object keys for each dataset of a partition.
//!
//! Hourly partitions use Hive-style directories:
//!
//! ```text
//! product_catalog/date=2025-01-01/hour=13/product_catalog_for_2025-01-01-13.csv
//! sales_data/date=2025-01-01/hour=13/sales_data_for_2025-01-01-13.csv
//! inventory_data/date=2025-01-01/hour=13/inventory_data_for_2025-01-01-13.csv
//! ```
//!
//! Daily partitions are flat: `sales_data/sales_data_for_2025-01-01.csv`.

use std::fmt;

use crate::partition::Partition;

/// One of the three datasets written per partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
  Catalog,
  Sales,
  Inventory,
}

impl Dataset {
  /// Top-level directory of the dataset.
  pub fn prefix(&self) -> &'static str {
    match self {
      Self::Catalog => "product_catalog",
      Self::Sales => "sales_data",
      Self::Inventory => "inventory_data",
    }
  }
}

impl fmt::Display for Dataset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Catalog => "catalog",
      Self::Sales => "sales",
      Self::Inventory => "inventory",
    })
  }
}

/// Maps `(dataset, partition)` to an object key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectLayout {
  /// Name inventory files `sales_data_for_…` as older buckets do.
  pub legacy_inventory_stem: bool,
}

impl ObjectLayout {
  fn stem(&self, dataset: Dataset) -> &'static str {
    match dataset {
      Dataset::Inventory if self.legacy_inventory_stem => "sales_data",
      other => other.prefix(),
    }
  }

  pub fn key(&self, dataset: Dataset, partition: &Partition) -> String {
    let prefix = dataset.prefix();
    let stem = self.stem(dataset);
    let date = partition.date_label();
    match partition.hour_label() {
      Some(hour) => {
        format!("{prefix}/date={date}/hour={hour}/{stem}_for_{date}-{hour}.csv")
      }
      None => format!("{prefix}/{stem}_for_{date}.csv"),
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn hour() -> Partition {
    Partition::hourly(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 7)
  }

  #[test]
  fn hourly_keys() {
    let layout = ObjectLayout::default();
    assert_eq!(
      layout.key(Dataset::Catalog, &hour()),
      "product_catalog/date=2025-01-01/hour=07/product_catalog_for_2025-01-01-07.csv"
    );
    assert_eq!(
      layout.key(Dataset::Sales, &hour()),
      "sales_data/date=2025-01-01/hour=07/sales_data_for_2025-01-01-07.csv"
    );
    assert_eq!(
      layout.key(Dataset::Inventory, &hour()),
      "inventory_data/date=2025-01-01/hour=07/inventory_data_for_2025-01-01-07.csv"
    );
  }

  #[test]
  fn legacy_inventory_reuses_sales_stem() {
    let layout = ObjectLayout { legacy_inventory_stem: true };
    assert_eq!(
      layout.key(Dataset::Inventory, &hour()),
      "inventory_data/date=2025-01-01/hour=07/sales_data_for_2025-01-01-07.csv"
    );
  }

  #[test]
  fn daily_keys_are_flat() {
    let day = Partition::daily(hour().date);
    let layout = ObjectLayout::default();
    assert_eq!(
      layout.key(Dataset::Catalog, &day),
      "product_catalog/product_catalog_for_2025-01-01.csv"
    );
    assert_eq!(layout.key(Dataset::Sales, &day), "sales_data/sales_data_for_2025-01-01.csv");
  }
}
