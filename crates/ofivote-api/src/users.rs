//! Handler for `GET /api/users` — the static directory listing.

use axum::{Json, extract::State};

use ofivote_core::{auth::User, store::VoteStore};

use crate::{AppState, auth::Authenticated};

/// `GET /api/users`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Authenticated(_user): Authenticated,
) -> Json<Vec<User>>
where
  S: VoteStore + Clone + Send + Sync + 'static,
{
  Json(state.directory.all_users().to_vec())
}
