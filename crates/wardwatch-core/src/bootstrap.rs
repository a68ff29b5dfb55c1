//! Start-up initialisation: create the schema when it is missing, seed the
//! sample data when the tables are empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct BootstrapOptions {
  /// Insert the sample data set when the store is empty.
  pub seed_sample_data: bool,
  /// Anchor for every relative date in the sample data.
  pub today:            NaiveDate,
}

/// What [`OpsStore::bootstrap`](crate::store::OpsStore::bootstrap) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapOutcome {
  /// Tables were missing; the schema was created and the sample data seeded.
  CreatedAndSeeded,
  /// Tables were missing; the schema was created, seeding is disabled.
  Created,
  /// Tables existed but held no staff; the sample data was seeded.
  Seeded,
  /// Tables existed but held no staff and seeding is disabled.
  Empty,
  /// Nothing to do.
  AlreadyPopulated,
}

impl BootstrapOutcome {
  /// Whether the store holds data after the bootstrap.
  pub fn is_populated(self) -> bool {
    matches!(self, Self::CreatedAndSeeded | Self::Seeded | Self::AlreadyPopulated)
  }
}

/// Snapshot served by the database debug endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseStatus {
  pub tables_exist:         bool,
  pub tables_found:         Vec<String>,
  pub staff_count:          i64,
  pub beds_count:           i64,
  pub needs_initialization: bool,
}
