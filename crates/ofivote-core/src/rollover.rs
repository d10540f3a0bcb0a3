//! Weekly rollover: promote the in-progress plan to "current" and discard
//! the week that just ended.
//!
//! A persisted marker records the Monday of the last week rolled over, so
//! the transition runs at most once per week no matter how often it is
//! triggered. Safe to call on every request.

use chrono::{Duration, NaiveDate};

use crate::{
  calendar::week_start,
  store::VoteStore,
  vote::WeekKind,
};

/// Roll the week over if it has not been done yet for the week containing
/// `today`. Returns `true` if a rollover ran, `false` if it was a no-op.
///
/// The transition, keyed at this week's Monday `m`:
///
/// 1. delete all `(m − 7 days, current)` rows — the week that just ended;
/// 2. relabel all `(m, next)` rows to `current`, `week_start` unchanged
///    (next-week votes are keyed by the Monday of the week they were cast
///    in, so after the weekend boundary they describe the week now
///    starting);
/// 3. persist the table in one write, then record the marker.
///
/// The marker is written only after the table save succeeds. A crash in
/// between re-runs steps 1–2 on the next call, which is harmless: both are
/// idempotent against the already-rolled table.
pub async fn rollover_if_due<S: VoteStore>(
  store: &S,
  today: NaiveDate,
) -> Result<bool, S::Error> {
  let monday = week_start(today);

  if store.load_marker().await? == Some(monday) {
    return Ok(false);
  }

  let mut table = store.load().await?;
  let last_monday = monday - Duration::days(7);

  table.retain(|v| !(v.week_start == last_monday && v.kind == WeekKind::Current));

  for row in &mut table {
    if row.week_start == monday && row.kind == WeekKind::Next {
      row.kind = WeekKind::Current;
    }
  }

  store.save(table).await?;
  store.save_marker(monday).await?;

  tracing::info!(week_start = %monday, "rolled week over");
  Ok(true)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;

  use crate::{
    board::Board,
    store::MemoryStore,
    vote::{Vote, Weekday},
  };

  fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
  }

  fn vote(week: NaiveDate, user: &str, day: Weekday, kind: WeekKind) -> Vote {
    Vote { week_start: week, user: user.to_string(), day, kind }
  }

  async fn seeded_store(rows: Vec<Vote>) -> MemoryStore {
    let store = MemoryStore::new();
    store.save(rows).await.unwrap();
    store
  }

  #[tokio::test]
  async fn promotes_next_and_drops_stale_current() {
    let last_week = monday() - Duration::days(7);
    let store = seeded_store(vec![
      vote(last_week, "ana", Weekday::Lunes, WeekKind::Current),
      vote(last_week, "luis", Weekday::Jueves, WeekKind::Current),
      vote(monday(), "ana", Weekday::Martes, WeekKind::Next),
    ])
    .await;

    // Trigger mid-week; the anchor is still this week's Monday.
    let wednesday = monday() + Duration::days(2);
    assert!(rollover_if_due(&store, wednesday).await.unwrap());

    let board = Board::new(Arc::new(store.clone()));
    let current = board
      .votes_for_week(monday(), WeekKind::Current)
      .await
      .unwrap();
    assert_eq!(current.users_for(Weekday::Martes), ["ana".to_string()]);

    // The stale current week is gone entirely.
    let stale = board
      .votes_for_week(last_week, WeekKind::Current)
      .await
      .unwrap();
    assert!(stale.iter().all(|(_, users)| users.is_empty()));

    // Nothing is left under Next at this key.
    let next = board.votes_for_week(monday(), WeekKind::Next).await.unwrap();
    assert!(next.iter().all(|(_, users)| users.is_empty()));

    assert_eq!(store.load_marker().await.unwrap(), Some(monday()));
  }

  #[tokio::test]
  async fn second_run_in_same_week_is_a_noop() {
    let store = seeded_store(vec![vote(
      monday(),
      "ana",
      Weekday::Lunes,
      WeekKind::Next,
    )])
    .await;

    assert!(rollover_if_due(&store, monday()).await.unwrap());
    let after_first = store.load().await.unwrap();

    assert!(!rollover_if_due(&store, monday()).await.unwrap());
    assert_eq!(store.load().await.unwrap(), after_first);
    assert_eq!(store.load_marker().await.unwrap(), Some(monday()));
  }

  #[tokio::test]
  async fn runs_when_marker_is_from_a_previous_week() {
    let store = seeded_store(vec![vote(
      monday(),
      "ana",
      Weekday::Viernes,
      WeekKind::Next,
    )])
    .await;
    store.save_marker(monday() - Duration::days(7)).await.unwrap();

    assert!(rollover_if_due(&store, monday()).await.unwrap());
    assert_eq!(store.load_marker().await.unwrap(), Some(monday()));
  }

  #[tokio::test]
  async fn leaves_unrelated_weeks_untouched() {
    let two_weeks_ago = monday() - Duration::days(14);
    let store = seeded_store(vec![
      // Only last week's `current` rows are discarded; older strays and
      // future-keyed rows pass through.
      vote(two_weeks_ago, "ana", Weekday::Lunes, WeekKind::Current),
      vote(monday() + Duration::days(7), "luis", Weekday::Lunes, WeekKind::Next),
    ])
    .await;

    rollover_if_due(&store, monday()).await.unwrap();

    let table = store.load().await.unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].week_start, two_weeks_ago);
    assert_eq!(table[1].kind, WeekKind::Next);
  }

  #[tokio::test]
  async fn empty_store_rolls_over_to_just_a_marker() {
    let store = MemoryStore::new();
    assert!(rollover_if_due(&store, monday()).await.unwrap());
    assert!(store.load().await.unwrap().is_empty());
    assert_eq!(store.load_marker().await.unwrap(), Some(monday()));
  }
}
