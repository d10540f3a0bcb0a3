//! ofivote server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), binds the CSV
//! vote store, and serves the poll API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use ofivote_api::{AppState, ServerConfig};
use ofivote_core::board::Board;
use ofivote_store_csv::CsvStore;

#[derive(Parser)]
#[command(author, version, about = "Office-attendance poll server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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

  // Load configuration: file first, then OFIVOTE_* environment overrides.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("OFIVOTE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = CsvStore::new(
    server_cfg.votes_path.clone(),
    server_cfg.marker_path.clone(),
  );

  let state = AppState {
    board:     Board::new(Arc::new(store)),
    directory: Arc::new(server_cfg.directory()),
  };

  let app = ofivote_api::router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
