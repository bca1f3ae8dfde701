//! Partition-aware generation and backfill.
//!
//! A run resolves "now" in the configured timezone, enumerates every
//! partition from the configured start through the last complete hour (or
//! day), and fills in whatever datasets are missing from the bucket. Reruns
//! are cheap: a partition whose objects all exist costs one existence check
//! per dataset.
//!
//! ```no_run
//! # async fn demo() -> retail_backfill::Result<()> {
//! use retail_backfill::{Generator, GeneratorConfig, run};
//! use retail_store_object::ObjectBlobStore;
//!
//! let config = GeneratorConfig::new("memory://");
//! let store = ObjectBlobStore::in_memory();
//! let report = run(&store, Generator::Hourly, &config, chrono::Utc::now()).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod report;

pub use config::{CountRange, GeneratorConfig};
pub use context::{Generator, RunContext};
pub use error::{Error, Result};
pub use orchestrator::{run, run_with};
pub use report::{GateOutcome, RunReport};

#[cfg(test)]
mod tests;
