//! Partition keys and the enumeration of partitions a run owes.
//!
//! Enumeration never fails: malformed or inverted date bounds are logged and
//! yield an empty list, which callers treat as "nothing to do".

use std::fmt;

use chrono::{Days, NaiveDate};

/// Calendar format shared by partition keys, object paths and CSV columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Partition key ───────────────────────────────────────────────────────────

/// A `(date, hour)` unit of generation and storage. Daily partitions carry no
/// hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Partition {
  pub date: NaiveDate,
  pub hour: Option<u8>,
}

impl Partition {
  pub fn daily(date: NaiveDate) -> Self { Self { date, hour: None } }

  pub fn hourly(date: NaiveDate, hour: u8) -> Self {
    Self { date, hour: Some(hour) }
  }

  /// `YYYY-MM-DD`.
  pub fn date_label(&self) -> String { self.date.format(DATE_FORMAT).to_string() }

  /// Zero-padded `HH`, or `None` for a daily partition.
  pub fn hour_label(&self) -> Option<String> {
    self.hour.map(|h| format!("{h:02}"))
  }
}

impl fmt::Display for Partition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.hour_label() {
      Some(hour) => write!(f, "{}-{hour}", self.date_label()),
      None => write!(f, "{}", self.date_label()),
    }
  }
}

// ─── Horizon ─────────────────────────────────────────────────────────────────

/// The latest fully-elapsed hour of a run. Nothing after it is owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
  pub date: NaiveDate,
  pub hour: u8,
}

impl Horizon {
  /// Whether `(date, hour)` has fully elapsed as of this horizon.
  pub fn covers(&self, date: NaiveDate, hour: u8) -> bool {
    date < self.date || (date == self.date && hour <= self.hour)
  }
}

// ─── Enumeration ─────────────────────────────────────────────────────────────

/// Inclusive, ascending list of dates between two `YYYY-MM-DD` strings.
///
/// Returns an empty list (and logs why) when either string does not parse.
pub fn date_range(start: &str, end: &str) -> Vec<NaiveDate> {
  let parsed = NaiveDate::parse_from_str(start, DATE_FORMAT)
    .and_then(|s| NaiveDate::parse_from_str(end, DATE_FORMAT).map(|e| (s, e)));
  match parsed {
    Ok((start, end)) => dates_between(start, end),
    Err(e) => {
      tracing::warn!(start, end, error = %e, "dates must be in YYYY-MM-DD format");
      Vec::new()
    }
  }
}

/// Inclusive, ascending list of dates from `start` through `end`.
///
/// Returns an empty list (and logs why) when `start` is after `end`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
  if start > end {
    tracing::warn!(%start, %end, "start date cannot be after end date");
    return Vec::new();
  }
  let mut dates = Vec::new();
  let mut current = Some(start);
  while let Some(date) = current.filter(|d| *d <= end) {
    dates.push(date);
    current = date.checked_add_days(Days::new(1));
  }
  dates
}

/// One partition per date.
pub fn daily_partitions(dates: &[NaiveDate]) -> Vec<Partition> {
  dates.iter().copied().map(Partition::daily).collect()
}

/// Every `(date, hour)` pair for `dates`, skipping hours past `horizon`.
pub fn hourly_partitions(dates: &[NaiveDate], horizon: &Horizon) -> Vec<Partition> {
  dates
    .iter()
    .flat_map(|&date| (0..24u8).map(move |hour| (date, hour)))
    .filter(|&(date, hour)| horizon.covers(date, hour))
    .map(|(date, hour)| Partition::hourly(date, hour))
    .collect()
}
