//! Handler for `POST /api/login`.

use axum::{Json, extract::State};
use serde::Deserialize;

use ofivote_core::{auth::User, store::VoteStore};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub username: String,
  pub password: String,
}

/// `POST /api/login` — body: `{"username":…,"password":…}`.
///
/// Returns the matched directory record, or a generic 401 that does not
/// reveal whether the username exists.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<User>, ApiError>
where
  S: VoteStore + Clone + Send + Sync + 'static,
{
  state
    .directory
    .verify(&body.username, &body.password)
    .cloned()
    .map(Json)
    .ok_or(ApiError::Unauthorized)
}
