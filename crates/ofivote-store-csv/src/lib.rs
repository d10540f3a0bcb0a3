//! CSV file backend for the ofivote vote store.
//!
//! Persists the vote table as a flat CSV file and the rollover marker as a
//! single-line date file. All file access runs on the tokio blocking pool
//! so it never stalls the async runtime.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::CsvStore;
