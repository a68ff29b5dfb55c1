//! HTTP server assembly for Wardwatch.
//!
//! Mounts the JSON API under `/api` with request tracing. The binary in
//! `main.rs` owns configuration, bootstrap, and the listener.

use std::{path::PathBuf, sync::Arc};

use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use wardwatch_core::store::OpsStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, layered from defaults, `config.toml`, and
/// `WARDWATCH_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub database_path:    PathBuf,
  /// Seed the sample data set into an empty database at start-up.
  pub seed_sample_data: bool,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 5000;
  pub const DEFAULT_DATABASE_PATH: &'static str = "wardwatch.db";

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router for `store`.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: OpsStore + 'static,
{
  Router::new()
    .nest("/api", wardwatch_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests;
