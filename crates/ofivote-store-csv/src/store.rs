//! [`CsvStore`] — the CSV file implementation of [`VoteStore`].

use std::{
  fs,
  path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tokio::task;

use ofivote_core::{store::VoteStore, vote::Vote};

use crate::{Error, Result};

/// A vote store backed by two plain files: the CSV vote table
/// (`semana_inicio,usuario,dia,tipo_semana`) and a single-line rollover
/// marker holding the `YYYY-MM-DD` Monday of the last rolled-over week.
///
/// Reads are forgiving: a missing or unparseable file is logged and treated
/// as empty, so readers always get a best-effort table. Writes go through a
/// temp file renamed over the target, making each save a single durable
/// step.
///
/// Cloning is cheap — the store only holds the two paths.
#[derive(Debug, Clone)]
pub struct CsvStore {
  votes_path:  PathBuf,
  marker_path: PathBuf,
}

impl CsvStore {
  pub fn new(votes_path: impl Into<PathBuf>, marker_path: impl Into<PathBuf>) -> Self {
    Self {
      votes_path:  votes_path.into(),
      marker_path: marker_path.into(),
    }
  }
}

// ─── Blocking file primitives ────────────────────────────────────────────────

fn read_table(path: &Path) -> Result<Vec<Vote>> {
  if !path.exists() {
    return Ok(Vec::new());
  }
  let mut reader = csv::Reader::from_path(path)?;
  let mut table = Vec::new();
  for row in reader.deserialize() {
    table.push(row?);
  }
  Ok(table)
}

const HEADER: [&str; 4] = ["semana_inicio", "usuario", "dia", "tipo_semana"];

/// Write `table` to a sibling temp file, then rename it over `path`.
fn write_table(path: &Path, table: &[Vote]) -> Result<()> {
  let tmp = tmp_path(path);
  {
    // `csv` only emits serde headers on the first serialized row, which
    // would leave an empty table as a headerless zero-byte file. Write the
    // header record ourselves and serialize rows without auto headers.
    let mut writer = csv::WriterBuilder::new()
      .has_headers(false)
      .from_path(&tmp)?;
    writer.write_record(HEADER)?;
    for row in table {
      writer.serialize(row)?;
    }
    writer.flush()?;
  }
  fs::rename(&tmp, path)?;
  Ok(())
}

fn read_marker(path: &Path) -> Result<Option<String>> {
  if !path.exists() {
    return Ok(None);
  }
  let contents = fs::read_to_string(path)?;
  Ok(Some(contents.trim().to_string()))
}

fn write_marker(path: &Path, monday: NaiveDate) -> Result<()> {
  let tmp = tmp_path(path);
  fs::write(&tmp, format!("{}\n", monday.format("%Y-%m-%d")))?;
  fs::rename(&tmp, path)?;
  Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
  let mut name = path.as_os_str().to_os_string();
  name.push(".tmp");
  PathBuf::from(name)
}

// ─── VoteStore impl ──────────────────────────────────────────────────────────

impl VoteStore for CsvStore {
  type Error = Error;

  async fn load(&self) -> Result<Vec<Vote>> {
    let path = self.votes_path.clone();
    let table = task::spawn_blocking(move || match read_table(&path) {
      Ok(table) => table,
      Err(e) => {
        tracing::warn!(
          path = %path.display(),
          error = %e,
          "vote table unreadable, treating as empty"
        );
        Vec::new()
      }
    })
    .await?;
    Ok(table)
  }

  async fn save(&self, table: Vec<Vote>) -> Result<()> {
    let path = self.votes_path.clone();
    task::spawn_blocking(move || write_table(&path, &table)).await?
  }

  async fn load_marker(&self) -> Result<Option<NaiveDate>> {
    let path = self.marker_path.clone();
    let raw = task::spawn_blocking(move || match read_marker(&path) {
      Ok(raw) => raw,
      Err(e) => {
        tracing::warn!(
          path = %path.display(),
          error = %e,
          "rollover marker unreadable, treating as absent"
        );
        None
      }
    })
    .await?;

    // A garbage marker also counts as absent: re-running rollover is safe.
    Ok(raw.and_then(|s| match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
      Ok(date) => Some(date),
      Err(e) => {
        tracing::warn!(marker = %s, error = %e, "rollover marker is not a date");
        None
      }
    }))
  }

  async fn save_marker(&self, monday: NaiveDate) -> Result<()> {
    let path = self.marker_path.clone();
    task::spawn_blocking(move || write_marker(&path, monday)).await?
  }
}
