//! wardwatch server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite database, bootstraps it, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p wardwatch-server -- --reset --init-only
//! ```

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use chrono::Utc;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use wardwatch_core::{bootstrap::BootstrapOptions, store::OpsStore};
use wardwatch_server::ServerConfig;
use wardwatch_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Wardwatch hospital operations server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Bootstrap the database and exit without serving.
  #[arg(long)]
  init_only: bool,

  /// Delete the database file before opening it.
  #[arg(long)]
  reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", ServerConfig::DEFAULT_HOST)?
    .set_default("port", i64::from(ServerConfig::DEFAULT_PORT))?
    .set_default("database_path", ServerConfig::DEFAULT_DATABASE_PATH)?
    .set_default("seed_sample_data", true)?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("WARDWATCH"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let database_path = expand_tilde(&server_cfg.database_path);

  if cli.reset {
    remove_database(&database_path)?;
  }

  // Open and bootstrap the store before accepting connections.
  let store = SqliteStore::open(&database_path)
    .await
    .with_context(|| format!("failed to open database at {database_path:?}"))?;

  let bootstrapped = store
    .bootstrap(BootstrapOptions {
      seed_sample_data: server_cfg.seed_sample_data,
      today:            Utc::now().date_naive(),
    })
    .await;
  match &bootstrapped {
    Ok(outcome) if !outcome.is_populated() => {
      tracing::warn!("database holds no staff; enable seed_sample_data or POST /api/admin/init");
    }
    Ok(_) => {}
    Err(e) => tracing::warn!("database bootstrap failed, serving anyway: {e}"),
  }

  if cli.init_only {
    let outcome = bootstrapped.context("failed to bootstrap database")?;
    tracing::info!(?outcome, "database ready at {database_path:?}");
    return Ok(());
  }

  let app = wardwatch_server::app(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Remove the database file and its WAL side files. A missing file is fine.
fn remove_database(path: &Path) -> anyhow::Result<()> {
  let mut files = vec![path.to_path_buf()];
  for suffix in ["-wal", "-shm"] {
    let mut side = path.as_os_str().to_owned();
    side.push(suffix);
    files.push(PathBuf::from(side));
  }

  for file in files {
    match std::fs::remove_file(&file) {
      Ok(()) => tracing::info!("removed {file:?}"),
      Err(e) if e.kind() == ErrorKind::NotFound => {}
      Err(e) => return Err(e).with_context(|| format!("failed to remove {file:?}")),
    }
  }
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
