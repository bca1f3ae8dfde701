//! retail-gen binary.
//!
//! Reads `retail-gen.toml` (or the path given with `--config`), overlays
//! `RETAIL__*` environment variables, opens the configured bucket and either
//! serves the HTTP trigger or performs a single run.
//!
//! ```text
//! retail-gen                      # serve
//! retail-gen run hourly           # one run, non-zero exit on failure
//! RETAIL__GENERATOR__SEED=42 retail-gen run daily
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use retail_backfill::Generator;
use retail_server::{AppState, ServerConfig};
use retail_store_object::ObjectBlobStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Synthetic retail data generator")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "retail-gen.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the HTTP trigger (the default).
  Serve,
  /// Run one generator once and exit.
  Run {
    /// `hourly` or `daily`.
    generator: Generator,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("RETAIL").separator("__"))
    .build()
    .context("failed to read configuration")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;
  server_cfg.generator.validate().context("invalid generator configuration")?;

  let store = ObjectBlobStore::from_url(&server_cfg.generator.storage_url)
    .with_context(|| format!("failed to open {}", server_cfg.generator.storage_url))?;

  let state = AppState {
    store:  Arc::new(store),
    config: Arc::new(server_cfg.generator.clone()),
  };

  match cli.command.unwrap_or(Command::Serve) {
    Command::Run { generator } => {
      let message = retail_server::trigger(&state, generator)
        .await
        .with_context(|| format!("{generator} run failed"))?;
      println!("{message}");
    }

    Command::Serve => {
      let app = retail_server::router(state);
      let address = format!("{}:{}", server_cfg.host, server_cfg.port);

      tracing::info!("Listening on http://{address}");
      let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

      axum::serve(listener, app).await.context("server error")?;
    }
  }

  Ok(())
}
