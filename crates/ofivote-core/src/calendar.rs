//! Pure week arithmetic: Monday anchors, weekday offsets, display labels.

use chrono::{Datelike as _, Duration, Local, NaiveDate};

use crate::vote::Weekday;

/// The Monday of the week containing `date`.
///
/// Weekday numbering is Monday = 0 … Sunday = 6; the offset is subtracted
/// in whole days.
pub fn week_start(date: NaiveDate) -> NaiveDate {
  date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The Monday of the week containing today (local time).
pub fn current_week_start() -> NaiveDate {
  week_start(Local::now().date_naive())
}

/// The concrete date of `day` within the week anchored at `monday`.
pub fn date_for_weekday(monday: NaiveDate, day: Weekday) -> NaiveDate {
  monday + Duration::days(day as i64)
}

/// Human-readable week range, Monday through Friday,
/// e.g. `"10/02/2026 - 14/02/2026"`.
pub fn format_week_range(monday: NaiveDate) -> String {
  let friday = monday + Duration::days(4);
  format!("{} - {}", monday.format("%d/%m/%Y"), friday.format("%d/%m/%Y"))
}
