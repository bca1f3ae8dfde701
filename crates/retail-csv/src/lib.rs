//! CSV codec for the retail datasets.
//!
//! Records go through an Arrow [`RecordBatch`] on their way to and from CSV
//! text, so every dataset has one declared schema ([`CsvRecord::fields`])
//! that fixes column order and types. Output always starts with a header
//! row.
//!
//! [`RecordBatch`]: https://docs.rs/arrow-array/latest/arrow_array/struct.RecordBatch.html
//!
//! # Quick start
//!
//! ```no_run
//! use retail_core::record::Product;
//!
//! let products: Vec<Product> = Vec::new();
//! let csv = retail_csv::encode(&products).unwrap();
//! let back: Vec<Product> = retail_csv::decode(&csv).unwrap();
//! assert_eq!(back, products);
//! ```

pub mod error;
mod schema;

use std::{io::Cursor, sync::Arc};

use arrow_csv::{ReaderBuilder, WriterBuilder};
use arrow_schema::Schema;

pub use error::{Error, Result};
pub use schema::CsvRecord;

/// Serialise `records` as CSV text with a header row.
pub fn encode<T: CsvRecord>(records: &[T]) -> Result<String> {
  let batch = serde_arrow::to_record_batch(&T::fields(), &records)?;
  let mut writer = WriterBuilder::new().with_header(true).build(Vec::new());
  writer.write(&batch)?;
  Ok(String::from_utf8(writer.into_inner())?)
}

/// Parse CSV text (header row first) back into records.
pub fn decode<T: CsvRecord>(text: &str) -> Result<Vec<T>> {
  let schema = Arc::new(Schema::new(T::fields()));
  let reader = ReaderBuilder::new(schema)
    .with_header(true)
    .build(Cursor::new(text.as_bytes()))?;

  let mut records = Vec::new();
  for batch in reader {
    let batch = batch?;
    records.extend(serde_arrow::from_record_batch::<Vec<T>>(&batch)?);
  }
  Ok(records)
}
