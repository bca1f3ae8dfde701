//! Per-run state: the horizon, the owed partitions and the run's RNG.
//!
//! A context is resolved from a clock value at the start of every run, so a
//! long-lived server never works from a stale "today".

use std::{fmt, str::FromStr};

use chrono::{DateTime, Days, NaiveDate, TimeDelta, Timelike, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use retail_core::{
  archetype::{Archetype, archetypes},
  catalog::{random_catalog, static_catalog},
  layout::{Dataset, ObjectLayout},
  partition::{Horizon, Partition, daily_partitions, dates_between, hourly_partitions},
  record::Product,
  sales::SalesProfile,
};

use crate::{Error, Result, config::GeneratorConfig};

// ─── Generator ───────────────────────────────────────────────────────────────

/// The two feeds this service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
  /// Static catalog, sales and inventory per `(date, hour)`.
  Hourly,
  /// Random catalog and small-basket sales per date.
  Daily,
}

impl Generator {
  pub fn sales_profile(&self) -> SalesProfile {
    match self {
      Self::Hourly => SalesProfile::HOURLY,
      Self::Daily => SalesProfile::DAILY,
    }
  }

  /// Datasets written per partition, in gate order.
  pub fn datasets(&self) -> &'static [Dataset] {
    match self {
      Self::Hourly => &[Dataset::Catalog, Dataset::Sales, Dataset::Inventory],
      Self::Daily => &[Dataset::Catalog, Dataset::Sales],
    }
  }
}

impl fmt::Display for Generator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Hourly => "hourly",
      Self::Daily => "daily",
    })
  }
}

impl FromStr for Generator {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "hourly" => Ok(Self::Hourly),
      "daily" => Ok(Self::Daily),
      _ => Err(Error::UnknownGenerator(s.to_owned())),
    }
  }
}

// ─── Run context ─────────────────────────────────────────────────────────────

/// Everything one run needs besides the store.
#[derive(Debug)]
pub struct RunContext {
  pub generator:     Generator,
  pub horizon:       Horizon,
  /// Owed partitions, ascending.
  pub partitions:    Vec<Partition>,
  /// Catalog size used for every partition of the run.
  pub product_count: usize,
  pub layout:        ObjectLayout,
  archetypes:        Vec<Archetype>,
  rng:               ChaCha8Rng,
}

impl RunContext {
  /// Resolve the horizon and owed partitions as of `now`.
  pub fn resolve(
    generator: Generator,
    config: &GeneratorConfig,
    now: DateTime<Utc>,
  ) -> Self {
    let local = now.with_timezone(&config.timezone);
    let horizon = match generator {
      Generator::Hourly => {
        let last_full = local - TimeDelta::hours(1);
        Horizon { date: last_full.date_naive(), hour: last_full.hour() as u8 }
      }
      Generator::Daily => Horizon {
        date: local.date_naive().pred_opt().unwrap_or(NaiveDate::MIN),
        hour: 23,
      },
    };

    let start = config.start_date.unwrap_or_else(|| {
      horizon
        .date
        .checked_sub_days(Days::new(config.start_offset_days))
        .unwrap_or(NaiveDate::MIN)
    });
    let dates = dates_between(start, horizon.date);
    let partitions = match generator {
      Generator::Hourly => hourly_partitions(&dates, &horizon),
      Generator::Daily => daily_partitions(&dates),
    };

    let mut rng = match config.seed {
      Some(seed) => ChaCha8Rng::seed_from_u64(seed),
      None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let range = config.product_count;
    let product_count = rng.random_range(range.min..=range.max.max(range.min)) as usize;

    Self {
      generator,
      horizon,
      partitions,
      product_count,
      layout: ObjectLayout { legacy_inventory_stem: config.legacy_inventory_stem },
      archetypes: archetypes(),
      rng,
    }
  }

  /// A fresh catalog for `partition` in the generator's catalog mode.
  pub fn generate_catalog(&mut self, partition: &Partition) -> Result<Vec<Product>> {
    Ok(match self.generator {
      Generator::Hourly => static_catalog(self.product_count, &self.archetypes, partition)?,
      Generator::Daily => random_catalog(self.product_count, partition, &mut self.rng),
    })
  }

  pub fn rng(&mut self) -> &mut ChaCha8Rng { &mut self.rng }

  pub fn key(&self, dataset: Dataset, partition: &Partition) -> String {
    self.layout.key(dataset, partition)
  }
}
