//! End-to-end runs against an in-memory bucket.

use std::{
  collections::{HashMap, HashSet},
  io,
};

use chrono::{DateTime, NaiveDate, Utc};
use retail_core::{
  layout::{Dataset, ObjectLayout},
  partition::Partition,
  record::{InventoryRecord, Product, Transaction},
  store::BlobStore,
};
use retail_store_object::ObjectBlobStore;

use crate::{CountRange, Error, GateOutcome, Generator, GeneratorConfig, run};

/// 10:30 in Los Angeles; the hourly horizon is 2025-01-10 09:00.
fn now() -> DateTime<Utc> {
  DateTime::parse_from_rfc3339("2025-01-10T18:30:00Z").unwrap().with_timezone(&Utc)
}

fn date(s: &str) -> NaiveDate { NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap() }

/// Today only, a handful of products, fixed seed.
fn config() -> GeneratorConfig {
  let mut config = GeneratorConfig::new("memory://");
  config.start_offset_days = 0;
  config.product_count = CountRange { min: 6, max: 6 };
  config.seed = Some(7);
  config
}

fn key(dataset: Dataset, partition: &Partition) -> String {
  ObjectLayout::default().key(dataset, partition)
}

async fn read<T: retail_csv::CsvRecord>(store: &ObjectBlobStore, key: &str) -> Vec<T> {
  let text = store.get(key).await.unwrap().unwrap_or_else(|| panic!("{key} missing"));
  retail_csv::decode(&text).unwrap()
}

// ─── Hourly ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn hourly_run_fills_every_partition() {
  let store = ObjectBlobStore::in_memory();
  let report = run(&store, Generator::Hourly, &config(), now()).await.unwrap();

  assert_eq!(report.partitions, 10);
  assert_eq!(report.uploaded(), 30);
  assert_eq!(report.skipped(), 0);
  assert_eq!(report.blocked(), 0);

  for hour in 0..=9 {
    let p = Partition::hourly(date("2025-01-10"), hour);
    for dataset in [Dataset::Catalog, Dataset::Sales, Dataset::Inventory] {
      assert!(store.exists(&key(dataset, &p)).await.unwrap(), "{dataset} {p}");
    }
  }
  let future = Partition::hourly(date("2025-01-10"), 10);
  assert!(!store.exists(&key(Dataset::Catalog, &future)).await.unwrap());
}

#[tokio::test]
async fn second_run_uploads_nothing() {
  let store = ObjectBlobStore::in_memory();
  run(&store, Generator::Hourly, &config(), now()).await.unwrap();

  let mut other_seed = config();
  other_seed.seed = Some(8);
  let report = run(&store, Generator::Hourly, &other_seed, now()).await.unwrap();

  assert_eq!(report.uploaded(), 0);
  assert_eq!(report.skipped(), 30);
  assert_eq!(report.uploaded_keys().count(), 0);
}

#[tokio::test]
async fn later_run_only_adds_new_hours() {
  let store = ObjectBlobStore::in_memory();
  run(&store, Generator::Hourly, &config(), now()).await.unwrap();

  let two_hours_later = now() + chrono::TimeDelta::hours(2);
  let report = run(&store, Generator::Hourly, &config(), two_hours_later).await.unwrap();

  assert_eq!(report.partitions, 12);
  assert_eq!(report.uploaded(), 6);
  let uploaded: Vec<_> = report.uploaded_keys().collect();
  assert!(uploaded.iter().all(|k| k.contains("hour=10") || k.contains("hour=11")), "{uploaded:?}");
}

#[tokio::test]
async fn partition_data_is_correlated() {
  let store = ObjectBlobStore::in_memory();
  run(&store, Generator::Hourly, &config(), now()).await.unwrap();
  let p = Partition::hourly(date("2025-01-10"), 3);

  let catalog: Vec<Product> = read(&store, &key(Dataset::Catalog, &p)).await;
  let sales: Vec<Transaction> = read(&store, &key(Dataset::Sales, &p)).await;
  let inventory: Vec<InventoryRecord> = read(&store, &key(Dataset::Inventory, &p)).await;

  assert_eq!(catalog.len(), 6);
  let prices: HashMap<_, _> = catalog.iter().map(|p| (p.product_id.clone(), p.unit_price)).collect();
  for t in &sales {
    assert_eq!(prices.get(&t.product_id), Some(&t.unit_price));
    assert_eq!(t.transaction_hour.as_deref(), Some("03"));
  }

  let mut sold: HashMap<String, i64> = HashMap::new();
  for t in &sales {
    *sold.entry(t.product_id.clone()).or_default() += i64::from(t.units_sold);
  }
  let ids: Vec<_> = inventory.iter().map(|r| r.product_id.as_str()).collect();
  let catalog_ids: Vec<_> = catalog.iter().map(|p| p.product_id.as_str()).collect();
  assert_eq!(ids, catalog_ids);
  for r in &inventory {
    assert_eq!(r.units_sold, -sold.get(&r.product_id).copied().unwrap_or(0));
    assert_eq!(r.final_stock, r.in_stock + r.new_product + r.returned_product + r.units_sold);
  }
}

#[tokio::test]
async fn existing_catalog_is_reloaded_for_sales_and_inventory() {
  let store = ObjectBlobStore::in_memory();
  let p = Partition::hourly(date("2025-01-10"), 0);

  // A catalog written by an earlier, interrupted run with a different size.
  let earlier =
    retail_core::catalog::static_catalog(2, &retail_core::archetype::archetypes(), &p).unwrap();
  store
    .put_csv(&key(Dataset::Catalog, &p), retail_csv::encode(&earlier).unwrap())
    .await
    .unwrap();

  let report = run(&store, Generator::Hourly, &config(), now()).await.unwrap();
  let gate = report
    .gates
    .iter()
    .find(|g| g.partition == p && g.dataset == Dataset::Catalog)
    .unwrap();
  assert_eq!(gate.outcome, GateOutcome::Skipped);
  assert_eq!(report.uploaded(), 29);

  let sales: Vec<Transaction> = read(&store, &key(Dataset::Sales, &p)).await;
  let allowed: HashSet<_> = ["PROD_0001", "PROD_0002"].into_iter().collect();
  assert!(sales.iter().all(|t| allowed.contains(t.product_id.as_str())));

  let inventory: Vec<InventoryRecord> = read(&store, &key(Dataset::Inventory, &p)).await;
  assert_eq!(inventory.len(), 2);
}

#[tokio::test]
async fn existing_sales_are_reloaded_for_inventory() {
  let store = ObjectBlobStore::in_memory();
  run(&store, Generator::Hourly, &config(), now()).await.unwrap();

  let p = Partition::hourly(date("2025-01-10"), 5);
  let inventory_key = key(Dataset::Inventory, &p);
  let sales: Vec<Transaction> = read(&store, &key(Dataset::Sales, &p)).await;

  // Drop only the inventory object by rebuilding the bucket without it.
  let rebuilt = ObjectBlobStore::in_memory();
  for hour in 0..=9 {
    let q = Partition::hourly(date("2025-01-10"), hour);
    for dataset in [Dataset::Catalog, Dataset::Sales, Dataset::Inventory] {
      let k = key(dataset, &q);
      if k != inventory_key {
        let body = store.get(&k).await.unwrap().unwrap();
        rebuilt.put_csv(&k, body).await.unwrap();
      }
    }
  }

  let report = run(&rebuilt, Generator::Hourly, &config(), now()).await.unwrap();
  assert_eq!(report.uploaded_keys().collect::<Vec<_>>(), [inventory_key.as_str()]);

  let inventory: Vec<InventoryRecord> = read(&rebuilt, &inventory_key).await;
  let total_sold: i64 = sales.iter().map(|t| i64::from(t.units_sold)).sum();
  assert_eq!(inventory.iter().map(|r| -r.units_sold).sum::<i64>(), total_sold);
}

#[tokio::test]
async fn legacy_stem_names_inventory_after_sales() {
  let store = ObjectBlobStore::in_memory();
  let mut config = config();
  config.legacy_inventory_stem = true;
  run(&store, Generator::Hourly, &config, now()).await.unwrap();

  assert!(
    store
      .exists("inventory_data/date=2025-01-10/hour=00/sales_data_for_2025-01-10-00.csv")
      .await
      .unwrap()
  );
}

#[tokio::test]
async fn same_seed_same_data() {
  let a = ObjectBlobStore::in_memory();
  let b = ObjectBlobStore::in_memory();
  run(&a, Generator::Hourly, &config(), now()).await.unwrap();
  run(&b, Generator::Hourly, &config(), now()).await.unwrap();

  let k = key(Dataset::Sales, &Partition::hourly(date("2025-01-10"), 9));
  assert_eq!(a.get(&k).await.unwrap(), b.get(&k).await.unwrap());
}

#[tokio::test]
async fn nothing_owed_is_a_successful_empty_run() {
  let store = ObjectBlobStore::in_memory();
  let mut config = config();
  config.start_date = Some(date("2030-01-01"));
  let report = run(&store, Generator::Hourly, &config, now()).await.unwrap();
  assert_eq!(report.partitions, 0);
  assert_eq!(report.gates.len(), 0);
}

// ─── Daily ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn daily_run_writes_flat_catalog_and_sales() {
  let store = ObjectBlobStore::in_memory();
  let mut config = config();
  config.start_offset_days = 2;
  let report = run(&store, Generator::Daily, &config, now()).await.unwrap();

  assert_eq!(report.partitions, 3);
  assert_eq!(report.uploaded(), 6);
  for day in ["2025-01-07", "2025-01-08", "2025-01-09"] {
    let p = Partition::daily(date(day));
    let sales: Vec<Transaction> = read(&store, &key(Dataset::Sales, &p)).await;
    assert!(sales.iter().all(|t| t.transaction_hour.is_none() && t.units_sold <= 10));
    let catalog: Vec<Product> = read(&store, &key(Dataset::Catalog, &p)).await;
    assert_eq!(catalog.len(), 6);
  }
  assert!(!store.exists(&key(Dataset::Sales, &Partition::daily(date("2025-01-10")))).await.unwrap());
}

// ─── Blocked gates ───────────────────────────────────────────────────────────

/// Claims every catalog exists but can never read one back.
struct VanishingCatalogs(ObjectBlobStore);

impl BlobStore for VanishingCatalogs {
  type Error = retail_store_object::Error;

  async fn exists(&self, key: &str) -> Result<bool, Self::Error> {
    if key.starts_with("product_catalog/") {
      return Ok(true);
    }
    self.0.exists(key).await
  }

  async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
    if key.starts_with("product_catalog/") {
      return Ok(None);
    }
    self.0.get(key).await
  }

  async fn put_csv(&self, key: &str, body: String) -> Result<(), Self::Error> {
    self.0.put_csv(key, body).await
  }
}

#[tokio::test]
async fn missing_catalog_blocks_dependents_without_failing() {
  let store = VanishingCatalogs(ObjectBlobStore::in_memory());
  let report = run(&store, Generator::Hourly, &config(), now()).await.unwrap();

  assert_eq!(report.partitions, 10);
  assert_eq!(report.skipped(), 10);
  assert_eq!(report.blocked(), 20);
  assert_eq!(report.uploaded(), 0);
}

// ─── Failed runs ─────────────────────────────────────────────────────────────

/// Refuses one upload and passes everything else through.
struct FailingUpload {
  inner:   ObjectBlobStore,
  refused: String,
}

impl BlobStore for FailingUpload {
  type Error = io::Error;

  async fn exists(&self, key: &str) -> Result<bool, io::Error> {
    self.inner.exists(key).await.map_err(io::Error::other)
  }

  async fn get(&self, key: &str) -> Result<Option<String>, io::Error> {
    self.inner.get(key).await.map_err(io::Error::other)
  }

  async fn put_csv(&self, key: &str, body: String) -> Result<(), io::Error> {
    if key == self.refused {
      return Err(io::Error::new(io::ErrorKind::BrokenPipe, "upload interrupted"));
    }
    self.inner.put_csv(key, body).await.map_err(io::Error::other)
  }
}

#[tokio::test]
async fn failed_upload_aborts_run_and_next_run_finishes_the_partition() {
  let inner = ObjectBlobStore::in_memory();
  let broken = Partition::hourly(date("2025-01-10"), 3);
  let store = FailingUpload { inner: inner.clone(), refused: key(Dataset::Sales, &broken) };

  let err = run(&store, Generator::Hourly, &config(), now()).await.unwrap_err();
  assert!(matches!(err, Error::Store(_)), "{err}");

  // Everything written before the failure stays.
  for hour in 0..=2 {
    let p = Partition::hourly(date("2025-01-10"), hour);
    for dataset in [Dataset::Catalog, Dataset::Sales, Dataset::Inventory] {
      assert!(inner.exists(&key(dataset, &p)).await.unwrap(), "{dataset} {p}");
    }
  }
  assert!(inner.exists(&key(Dataset::Catalog, &broken)).await.unwrap());
  assert!(!inner.exists(&key(Dataset::Sales, &broken)).await.unwrap());
  assert!(!inner.exists(&key(Dataset::Inventory, &broken)).await.unwrap());
  assert!(
    !inner
      .exists(&key(Dataset::Catalog, &Partition::hourly(date("2025-01-10"), 4)))
      .await
      .unwrap()
  );

  let report = run(&inner, Generator::Hourly, &config(), now()).await.unwrap();
  assert_eq!(report.skipped(), 10);
  assert_eq!(report.uploaded(), 20);
  let uploaded: Vec<_> = report.uploaded_keys().collect();
  assert!(!uploaded.contains(&key(Dataset::Catalog, &broken).as_str()));
  assert!(uploaded.contains(&key(Dataset::Sales, &broken).as_str()));
  assert!(uploaded.contains(&key(Dataset::Inventory, &broken).as_str()));

  // The completed partition's sales reference the catalog written before the failure.
  let catalog: Vec<Product> = read(&inner, &key(Dataset::Catalog, &broken)).await;
  let ids: HashSet<_> = catalog.iter().map(|p| p.product_id.clone()).collect();
  let sales: Vec<Transaction> = read(&inner, &key(Dataset::Sales, &broken)).await;
  assert!(sales.iter().all(|t| ids.contains(&t.product_id)));
}
