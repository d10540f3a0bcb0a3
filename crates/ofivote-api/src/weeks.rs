//! Handler for `GET /api/weeks` — the two-pane week view.

use axum::{Json, extract::State};
use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

use ofivote_core::{
  board::WeekVotes,
  calendar::{date_for_weekday, format_week_range, week_start},
  rollover::rollover_if_due,
  store::VoteStore,
  vote::{Weekday, WeekKind},
};

use crate::{AppState, auth::Authenticated, error::ApiError};

#[derive(Debug, Serialize)]
pub struct DayView {
  pub day:   Weekday,
  pub date:  NaiveDate,
  pub users: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct WeekView {
  pub week_start: NaiveDate,
  pub label:      String,
  pub days:       Vec<DayView>,
}

#[derive(Debug, Serialize)]
pub struct WeeksResponse {
  pub current:     WeekView,
  pub next:        WeekView,
  pub rolled_over: bool,
}

fn week_view(display_monday: NaiveDate, votes: &WeekVotes) -> WeekView {
  WeekView {
    week_start: display_monday,
    label:      format_week_range(display_monday),
    days:       votes
      .iter()
      .map(|(day, users)| DayView {
        day,
        date: date_for_weekday(display_monday, day),
        users: users.to_vec(),
      })
      .collect(),
  }
}

/// `GET /api/weeks`
///
/// Runs the week rollover first (idempotent, so every page load may trigger
/// it), then returns the confirmed current week and the in-progress next
/// week. Both vote sets are keyed at this week's Monday; only the `next`
/// pane's display dates fall in the following calendar week.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Authenticated(_user): Authenticated,
) -> Result<Json<WeeksResponse>, ApiError>
where
  S: VoteStore + Clone + Send + Sync + 'static,
{
  let today = Local::now().date_naive();
  let rolled_over = rollover_if_due(state.board.store().as_ref(), today)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let monday = week_start(today);
  let current_votes = state
    .board
    .votes_for_week(monday, WeekKind::Current)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let next_votes = state
    .board
    .votes_for_week(monday, WeekKind::Next)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(WeeksResponse {
    current: week_view(monday, &current_votes),
    next: week_view(monday + Duration::days(7), &next_votes),
    rolled_over,
  }))
}
