//! [`Board`] — the high-level vote operations over an injected store.
//!
//! Every operation is a full load-modify-save cycle over the backing table;
//! there is no partial update. Two operations racing between load and save
//! will clobber each other, which is accepted: deployments assume a single
//! writer.

use std::{collections::BTreeMap, sync::Arc};

use chrono::NaiveDate;
use serde::Serialize;
use strum::IntoEnumIterator as _;

use crate::{
  store::VoteStore,
  vote::{Vote, Weekday, WeekKind},
};

// ─── Week view ───────────────────────────────────────────────────────────────

/// Votes for one `(week, kind)` pair: each of the five weekdays mapped to
/// the ordered list of users who picked it. Always contains all five days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekVotes {
  days: BTreeMap<Weekday, Vec<String>>,
}

impl WeekVotes {
  fn empty() -> Self {
    let days = Weekday::iter().map(|d| (d, Vec::new())).collect();
    Self { days }
  }

  /// Users who picked `day`, in insertion order.
  pub fn users_for(&self, day: Weekday) -> &[String] {
    // Construction guarantees every weekday is present.
    &self.days[&day]
  }

  /// Days `user` picked (stored-username match, case-sensitive).
  pub fn days_for(&self, user: &str) -> Vec<Weekday> {
    Weekday::iter()
      .filter(|d| self.days[d].iter().any(|u| u == user))
      .collect()
  }

  /// Iterate days in calendar order with their user lists.
  pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
    self.days.iter().map(|(d, users)| (*d, users.as_slice()))
  }
}

// ─── Board ───────────────────────────────────────────────────────────────────

/// Vote operations bound to a [`VoteStore`] backend.
///
/// Cloning is cheap — the store is reference-counted.
#[derive(Debug, Clone)]
pub struct Board<S> {
  store: Arc<S>,
}

impl<S: VoteStore> Board<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &Arc<S> {
    &self.store
  }

  /// Votes for the week keyed at `monday` under `kind`.
  ///
  /// Weekdays nobody picked map to empty lists; the result always contains
  /// all five days. An empty (or unreadable) table yields the all-empty view.
  pub async fn votes_for_week(
    &self,
    monday: NaiveDate,
    kind: WeekKind,
  ) -> Result<WeekVotes, S::Error> {
    let table = self.store.load().await?;
    let mut votes = WeekVotes::empty();
    for row in table {
      if row.week_start == monday && row.kind == kind {
        // The map is pre-populated with all five days.
        if let Some(users) = votes.days.get_mut(&row.day) {
          users.push(row.user);
        }
      }
    }
    Ok(votes)
  }

  /// Append one vote row and persist the whole table.
  ///
  /// Duplicate `(week, user, day, kind)` rows are representable; callers
  /// avoid them by clearing first (see [`Board::replace_plan`]).
  pub async fn add_vote(
    &self,
    monday: NaiveDate,
    user: &str,
    day: Weekday,
    kind: WeekKind,
  ) -> Result<(), S::Error> {
    let mut table = self.store.load().await?;
    table.push(Vote {
      week_start: monday,
      user: user.to_string(),
      day,
      kind,
    });
    self.store.save(table).await
  }

  /// Remove all rows matching the full 4-tuple and persist.
  pub async fn remove_vote(
    &self,
    monday: NaiveDate,
    user: &str,
    day: Weekday,
    kind: WeekKind,
  ) -> Result<(), S::Error> {
    let mut table = self.store.load().await?;
    table.retain(|v| {
      !(v.week_start == monday && v.user == user && v.day == day && v.kind == kind)
    });
    self.store.save(table).await
  }

  /// Replace `user`'s next-week plan for the week keyed at `monday` with
  /// exactly `days`, in a single load-save cycle.
  ///
  /// This is the save action of the planning view: clear the user's `Next`
  /// rows, then insert the new selection.
  pub async fn replace_plan(
    &self,
    monday: NaiveDate,
    user: &str,
    days: &[Weekday],
  ) -> Result<(), S::Error> {
    let mut table = self.store.load().await?;
    table.retain(|v| {
      !(v.week_start == monday && v.user == user && v.kind == WeekKind::Next)
    });
    for &day in days {
      table.push(Vote {
        week_start: monday,
        user: user.to_string(),
        day,
        kind: WeekKind::Next,
      });
    }
    self.store.save(table).await
  }
}
