//! The `VoteStore` trait and the in-memory reference implementation.
//!
//! The trait is implemented by storage backends (e.g. `ofivote-store-csv`).
//! Higher layers (`ofivote-api`, the rollover) depend on this abstraction,
//! not on any concrete backend.

use std::{
  convert::Infallible,
  future::Future,
  sync::{Arc, Mutex},
};

use chrono::NaiveDate;

use crate::vote::Vote;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a vote-table backend.
///
/// The persistence model is load-entire-table / save-entire-table: every
/// mutation is a full read-modify-write cycle with no row-level updates.
/// There is no locking discipline — deployments assume at most one writer.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait VoteStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the entire vote table. Backends treat a missing or unreadable
  /// table as empty — readers never see a storage error.
  fn load(&self)
  -> impl Future<Output = Result<Vec<Vote>, Self::Error>> + Send + '_;

  /// Persist the full table, replacing prior content in a single durable
  /// write.
  fn save(
    &self,
    table: Vec<Vote>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Read the rollover marker: the Monday of the most recent week for which
  /// rollover has already run. `None` if it has never run (or the marker is
  /// unreadable — re-running rollover is safe).
  fn load_marker(
    &self,
  ) -> impl Future<Output = Result<Option<NaiveDate>, Self::Error>> + Send + '_;

  /// Overwrite the rollover marker.
  fn save_marker(
    &self,
    monday: NaiveDate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// An infallible in-memory [`VoteStore`] — the test substitute for the file
/// backend, also usable for embedding.
///
/// Cloning is cheap — clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
  table:  Vec<Vote>,
  marker: Option<NaiveDate>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
    self.inner.lock().expect("memory store mutex poisoned")
  }
}

impl VoteStore for MemoryStore {
  type Error = Infallible;

  async fn load(&self) -> Result<Vec<Vote>, Infallible> {
    Ok(self.lock().table.clone())
  }

  async fn save(&self, table: Vec<Vote>) -> Result<(), Infallible> {
    self.lock().table = table;
    Ok(())
  }

  async fn load_marker(&self) -> Result<Option<NaiveDate>, Infallible> {
    Ok(self.lock().marker)
  }

  async fn save_marker(&self, monday: NaiveDate) -> Result<(), Infallible> {
    self.lock().marker = Some(monday);
    Ok(())
  }
}
