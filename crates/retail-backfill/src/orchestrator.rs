//! The per-partition gate machine.
//!
//! Every owed partition is visited in ascending order and its datasets are
//! resolved in the fixed order catalog → sales → inventory. A gate whose
//! object already exists is skipped. Inputs a later gate needs (the catalog,
//! the partition's sales) come from this run when it produced them and are
//! otherwise read back from storage, so partially written partitions are
//! completed consistently with what is already there.
//!
//! Storage and codec failures abort the run. Objects written before the
//! failure stay in place; the next run picks up from them.

use chrono::{DateTime, Utc};
use retail_core::{
  inventory::PreSalesInventory,
  layout::Dataset,
  partition::Partition,
  record::{Product, Transaction},
  sales::generate_sales,
  store::BlobStore,
};
use retail_csv::CsvRecord;

use crate::{
  Error, Result,
  config::GeneratorConfig,
  context::{Generator, RunContext},
  report::{GateOutcome, RunReport},
};

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> Error {
  Error::Store(Box::new(e))
}

/// Run `generator` against `store` as of `now`.
pub async fn run<S: BlobStore>(
  store: &S,
  generator: Generator,
  config: &GeneratorConfig,
  now: DateTime<Utc>,
) -> Result<RunReport> {
  let mut ctx = RunContext::resolve(generator, config, now);
  run_with(store, &mut ctx).await
}

/// Run an already-resolved context. Exposed so callers can inspect or adjust
/// the context first.
pub async fn run_with<S: BlobStore>(store: &S, ctx: &mut RunContext) -> Result<RunReport> {
  tracing::info!(
    generator = %ctx.generator,
    horizon_date = %ctx.horizon.date,
    horizon_hour = ctx.horizon.hour,
    partitions = ctx.partitions.len(),
    product_count = ctx.product_count,
    "starting run"
  );

  let mut report = RunReport::new(ctx.generator);
  let partitions = ctx.partitions.clone();
  for partition in &partitions {
    process_partition(store, ctx, partition, &mut report).await?;
    report.partitions += 1;
  }

  tracing::info!(
    partitions = report.partitions,
    uploaded = report.uploaded(),
    skipped = report.skipped(),
    blocked = report.blocked(),
    "run finished"
  );
  Ok(report)
}

// ─── Partition ───────────────────────────────────────────────────────────────

/// Inputs produced or loaded while resolving one partition's gates.
#[derive(Default)]
struct PartitionState {
  catalog: Option<Vec<Product>>,
  sales:   Option<Vec<Transaction>>,
}

async fn process_partition<S: BlobStore>(
  store: &S,
  ctx: &mut RunContext,
  partition: &Partition,
  report: &mut RunReport,
) -> Result<()> {
  let mut state = PartitionState::default();
  for &dataset in ctx.generator.datasets() {
    let key = ctx.key(dataset, partition);
    let outcome = if store.exists(&key).await.map_err(store_err)? {
      tracing::info!(%partition, %dataset, %key, "exists, skipping");
      GateOutcome::Skipped
    } else {
      tracing::info!(%partition, %dataset, %key, "missing, generating");
      open_gate(store, ctx, partition, dataset, &key, &mut state).await?
    };
    if outcome == GateOutcome::Uploaded {
      tracing::info!(%partition, %dataset, %key, "uploaded");
    }
    report.record(partition, dataset, key, outcome);
  }
  Ok(())
}

/// Generate and write one missing dataset.
async fn open_gate<S: BlobStore>(
  store: &S,
  ctx: &mut RunContext,
  partition: &Partition,
  dataset: Dataset,
  key: &str,
  state: &mut PartitionState,
) -> Result<GateOutcome> {
  match dataset {
    Dataset::Catalog => {
      let catalog = ctx.generate_catalog(partition)?;
      upload(store, key, &catalog).await?;
      state.catalog = Some(catalog);
    }

    Dataset::Sales => {
      let Some(catalog) = load_catalog(store, ctx, partition, &mut state.catalog).await? else {
        return Ok(GateOutcome::Blocked);
      };
      let profile = ctx.generator.sales_profile();
      let sales = generate_sales(catalog, partition, &profile, ctx.rng())?;
      upload(store, key, &sales).await?;
      state.sales = Some(sales);
    }

    Dataset::Inventory => {
      if state.sales.is_none() {
        let sales_key = ctx.key(Dataset::Sales, partition);
        state.sales = load(store, &sales_key).await?;
        if state.sales.is_none() {
          tracing::warn!(%partition, key = %sales_key, "sales unavailable, inventory blocked");
          return Ok(GateOutcome::Blocked);
        }
      }
      let Some(catalog) = load_catalog(store, ctx, partition, &mut state.catalog).await? else {
        return Ok(GateOutcome::Blocked);
      };
      let snapshot = PreSalesInventory::draw(catalog, partition, ctx.rng());
      let sales = state.sales.as_deref().unwrap_or_default();
      let records = snapshot.reconcile(sales);
      upload(store, key, &records).await?;
    }
  }
  Ok(GateOutcome::Uploaded)
}

/// The partition's catalog: from this run if generated here, else read back
/// from storage. `None` when the stored object is gone.
async fn load_catalog<'s, S: BlobStore>(
  store: &S,
  ctx: &RunContext,
  partition: &Partition,
  slot: &'s mut Option<Vec<Product>>,
) -> Result<Option<&'s [Product]>> {
  if slot.is_none() {
    let key = ctx.key(Dataset::Catalog, partition);
    *slot = load(store, &key).await?;
    match slot {
      Some(products) => {
        tracing::debug!(%partition, %key, products = products.len(), "catalog reloaded");
      }
      None => tracing::warn!(%partition, %key, "catalog unavailable, dependent gate blocked"),
    }
  }
  Ok(slot.as_deref())
}

async fn load<S: BlobStore, T: CsvRecord>(store: &S, key: &str) -> Result<Option<Vec<T>>> {
  match store.get(key).await.map_err(store_err)? {
    Some(text) => Ok(Some(retail_csv::decode(&text)?)),
    None => Ok(None),
  }
}

async fn upload<S: BlobStore, T: CsvRecord>(store: &S, key: &str, records: &[T]) -> Result<()> {
  let body = retail_csv::encode(records)?;
  store.put_csv(key, body).await.map_err(store_err)
}
