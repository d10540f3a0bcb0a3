//! JSON API for the ofivote attendance poll.
//!
//! Exposes an axum [`Router`] backed by any [`ofivote_core::store::VoteStore`].
//! The interactive front-end is a thin client over these routes; TLS and
//! transport concerns are the caller's responsibility.

pub mod auth;
pub mod error;
pub mod login;
pub mod plan;
pub mod users;
pub mod weeks;

pub use error::ApiError;

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post, put},
};
use serde::Deserialize;

use ofivote_core::{
  auth::{Directory, User},
  board::Board,
  store::VoteStore,
};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` (plus
/// `OFIVOTE_*` environment overrides).
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  pub votes_path:      PathBuf,
  pub marker_path:     PathBuf,
  /// The single shared password gating access for all users.
  pub shared_password: String,
  /// `username → display full name`.
  pub users:           HashMap<String, String>,
}

impl ServerConfig {
  /// Build the static auth directory, sorted by username for a stable
  /// listing order.
  pub fn directory(&self) -> Directory {
    let mut users: Vec<User> = self
      .users
      .iter()
      .map(|(username, full_name)| User {
        username:  username.clone(),
        full_name: full_name.clone(),
      })
      .collect();
    users.sort_by(|a, b| a.username.cmp(&b.username));
    Directory::new(self.shared_password.clone(), users)
  }
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: VoteStore> {
  pub board:     Board<S>,
  pub directory: Arc<Directory>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: VoteStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/api/login", post(login::handler::<S>))
    .route("/api/weeks", get(weeks::handler::<S>))
    .route("/api/plan", put(plan::handler::<S>))
    .route("/api/users", get(users::handler::<S>))
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
