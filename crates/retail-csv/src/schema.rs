//! Arrow schemas for the three datasets, in CSV column order.

use std::sync::Arc;

use arrow_schema::{DataType, Field, FieldRef};
use retail_core::record::{InventoryRecord, Product, Transaction};
use serde::{Serialize, de::DeserializeOwned};

/// A row type with a fixed CSV layout.
pub trait CsvRecord: Serialize + DeserializeOwned {
  /// Columns in output order. Names must match the serde field names.
  fn fields() -> Vec<FieldRef>;
}

fn text(name: &str) -> FieldRef { Arc::new(Field::new(name, DataType::Utf8, false)) }

/// Hour columns are empty for daily partitions.
fn hour(name: &str) -> FieldRef { Arc::new(Field::new(name, DataType::Utf8, true)) }

fn int(name: &str) -> FieldRef { Arc::new(Field::new(name, DataType::Int64, false)) }

impl CsvRecord for Product {
  fn fields() -> Vec<FieldRef> {
    vec![
      text("ingestion_date"),
      hour("ingestion_hour"),
      text("product_id"),
      text("product_name"),
      text("category_id"),
      text("category_name"),
      text("brand"),
      text("description"),
      // Decimals travel as their exact text.
      text("unit_price"),
      text("supplier_name"),
      text("tags"),
    ]
  }
}

impl CsvRecord for Transaction {
  fn fields() -> Vec<FieldRef> {
    vec![
      text("transaction_date"),
      hour("transaction_hour"),
      text("transaction_id"),
      text("customer_id"),
      text("order_country"),
      text("product_id"),
      text("unit_price"),
      Arc::new(Field::new("units_sold", DataType::UInt32, false)),
      text("discount_applied"),
      text("total_amount_paid"),
    ]
  }
}

impl CsvRecord for InventoryRecord {
  fn fields() -> Vec<FieldRef> {
    vec![
      text("inventory_date"),
      hour("inventory_hour"),
      text("product_id"),
      int("in_stock"),
      int("new_product"),
      int("returned_product"),
      int("units_sold"),
      int("final_stock"),
    ]
  }
}
