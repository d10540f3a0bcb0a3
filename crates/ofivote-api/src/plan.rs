//! Handler for `PUT /api/plan` — save the caller's next-week selection.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use ofivote_core::{calendar::current_week_start, store::VoteStore, vote::Weekday};

use crate::{AppState, auth::Authenticated, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct PlanBody {
  pub days: Vec<Weekday>,
}

/// `PUT /api/plan` — body: `{"days":["Lunes","Miércoles",…]}`.
///
/// Replaces the authenticated user's next-week plan wholesale: previous
/// selections are cleared, then the submitted days are inserted. The rows
/// are keyed at *this* week's Monday and written under the directory's
/// stored spelling of the username.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Authenticated(user): Authenticated,
  Json(body): Json<PlanBody>,
) -> Result<StatusCode, ApiError>
where
  S: VoteStore + Clone + Send + Sync + 'static,
{
  let monday = current_week_start();
  state
    .board
    .replace_plan(monday, &user.username, &body.days)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::debug!(user = %user.username, days = body.days.len(), "plan saved");
  Ok(StatusCode::NO_CONTENT)
}
