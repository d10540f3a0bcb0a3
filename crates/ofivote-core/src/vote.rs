//! Vote — a single attendance fact.
//!
//! A vote records that a named user intends to be in the office on a given
//! weekday, in the week identified by `week_start`, under a given week kind.
//! There is no per-row update: mutation is always delete-and-reinsert, or
//! the bulk relabel performed by the weekly rollover.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The five office weekdays, displayed and persisted under their Spanish
/// names (`"Lunes"` … `"Viernes"`).
///
/// Variant order is calendar order; `day as i64` is the day's offset from
/// Monday.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumIter,
)]
pub enum Weekday {
  Lunes,
  Martes,
  #[serde(rename = "Miércoles")]
  #[strum(serialize = "Miércoles")]
  Miercoles,
  Jueves,
  Viernes,
}

impl FromStr for Weekday {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "Lunes" => Ok(Weekday::Lunes),
      "Martes" => Ok(Weekday::Martes),
      "Miércoles" => Ok(Weekday::Miercoles),
      "Jueves" => Ok(Weekday::Jueves),
      "Viernes" => Ok(Weekday::Viernes),
      other => Err(Error::InvalidWeekday(other.to_string())),
    }
  }
}

/// Distinguishes the read-only, already-happening week (`current`) from the
/// editable, upcoming week (`next`).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WeekKind {
  Current,
  Next,
}

impl FromStr for WeekKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "current" => Ok(WeekKind::Current),
      "next" => Ok(WeekKind::Next),
      other => Err(Error::InvalidWeekKind(other.to_string())),
    }
  }
}

/// One row of the persisted vote table.
///
/// The serde field names are the persisted CSV column headers.
///
/// Key convention: `Next`-kind votes are keyed by the Monday of the week in
/// which they were cast — they describe "the week after this key's week".
/// The rollover relabels them in place without touching `week_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
  /// Monday of the keying week, `YYYY-MM-DD` on the wire.
  #[serde(rename = "semana_inicio")]
  pub week_start: NaiveDate,
  /// Stored username, matched case-sensitively.
  #[serde(rename = "usuario")]
  pub user:       String,
  #[serde(rename = "dia")]
  pub day:        Weekday,
  #[serde(rename = "tipo_semana")]
  pub kind:       WeekKind,
}
