//! Generator configuration, read once at process start.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::{Error, Result};

/// An inclusive `[min, max]` range of product counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountRange {
  pub min: u32,
  pub max: u32,
}

impl Default for CountRange {
  fn default() -> Self { Self { min: 50, max: 100 } }
}

/// Settings shared by both generators, deserialised from the `[generator]`
/// table of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
  /// Where objects are written: `memory://`, `file:///dir`, `gs://bucket`
  /// or `s3://bucket`, optionally followed by a key prefix.
  pub storage_url:           String,
  /// Zone in which "now" and calendar days are resolved.
  #[serde(default = "default_timezone")]
  pub timezone:              Tz,
  #[serde(default)]
  pub product_count:         CountRange,
  /// How many days before the horizon the backfill starts.
  #[serde(default = "default_start_offset_days")]
  pub start_offset_days:     u64,
  /// Fixed first date; overrides `start_offset_days`.
  #[serde(default)]
  pub start_date:            Option<NaiveDate>,
  /// Seed for reproducible runs; drawn from the OS when absent.
  #[serde(default)]
  pub seed:                  Option<u64>,
  /// Name hourly inventory objects `sales_data_for_…`.
  #[serde(default)]
  pub legacy_inventory_stem: bool,
}

fn default_timezone() -> Tz { chrono_tz::America::Los_Angeles }

fn default_start_offset_days() -> u64 { 2 }

impl GeneratorConfig {
  /// A configuration with every optional field at its default.
  pub fn new(storage_url: impl Into<String>) -> Self {
    Self {
      storage_url:           storage_url.into(),
      timezone:              default_timezone(),
      product_count:         CountRange::default(),
      start_offset_days:     default_start_offset_days(),
      start_date:            None,
      seed:                  None,
      legacy_inventory_stem: false,
    }
  }

  /// Reject settings no run could satisfy.
  pub fn validate(&self) -> Result<()> {
    let CountRange { min, max } = self.product_count;
    if min == 0 {
      return Err(Error::Config("product_count.min must be at least 1".into()));
    }
    if min > max {
      return Err(Error::Config(format!(
        "product_count.min ({min}) is greater than product_count.max ({max})"
      )));
    }
    if self.storage_url.trim().is_empty() {
      return Err(Error::Config("storage_url is empty".into()));
    }
    Ok(())
  }
}
