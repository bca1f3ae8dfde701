//! HTTP trigger for the retail data generators.
//!
//! Each generator gets one route. A request carries no parameters: it runs
//! the generator to completion against the configured bucket and answers
//! with a plain-text status line.

pub mod error;

pub use error::Error;

use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use retail_backfill::{Generator, GeneratorConfig};
use retail_core::store::BlobStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `retail-gen.toml` and `RETAIL__*`
/// environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:      String,
  #[serde(default = "default_port")]
  pub port:      u16,
  pub generator: GeneratorConfig,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 8080 }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub config: Arc<GeneratorConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), config: self.config.clone() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the trigger router. `POST` and `GET` both start a run so that
/// scheduler pings work without a body.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: BlobStore + 'static,
{
  Router::new()
    .route("/generate/hourly", get(hourly::<S>).post(hourly::<S>))
    .route("/generate/daily",  get(daily::<S>).post(daily::<S>))
    .route("/healthz",         get(|| async { "ok" }))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn hourly<S: BlobStore + 'static>(
  State(state): State<AppState<S>>,
) -> Result<String, Error> {
  trigger(&state, Generator::Hourly).await
}

async fn daily<S: BlobStore + 'static>(
  State(state): State<AppState<S>>,
) -> Result<String, Error> {
  trigger(&state, Generator::Daily).await
}

/// Run `generator` once, as of the current wall-clock time.
pub async fn trigger<S: BlobStore>(
  state: &AppState<S>,
  generator: Generator,
) -> Result<String, Error> {
  let report =
    retail_backfill::run(&*state.store, generator, &state.config, chrono::Utc::now()).await?;
  Ok(format!("Data generated and uploaded successfully ({report})"))
}
