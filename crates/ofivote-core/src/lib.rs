//! Core types and trait definitions for the ofivote attendance poll.
//!
//! This crate is deliberately free of HTTP and file-format dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod auth;
pub mod board;
pub mod calendar;
pub mod error;
pub mod rollover;
pub mod store;
pub mod vote;

pub use error::{Error, Result};
