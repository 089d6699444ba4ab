//! Display range resolution for charts and exports.
//!
//! The default range covers today and the ten days before it; either bound
//! can be overridden with an explicit `YYYY-MM-DD` string.

use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate};

/// Calendar day format used everywhere: on the wire, in prompts and in labels.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How far back the default range reaches from today.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 10;

/// Inclusive display range for fetching and charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ChartRange {
    /// Default range for a given day: `[today - 10 days, today]`.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(DEFAULT_LOOKBACK_DAYS),
            end: today,
        }
    }

    /// Resolves user-supplied bounds against the defaults.
    ///
    /// Each bound falls back to its default independently, so giving only a
    /// start date keeps today as the end. Rejects ranges where the start is
    /// after the end.
    pub fn resolve(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Result<Self> {
        let default = Self::default_for(today);
        let start = match start {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)?,
            None => default.start,
        };
        let end = match end {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)?,
            None => default.end,
        };
        if start > end {
            bail!("start date {} is after end date {}", start, end);
        }
        Ok(Self { start, end })
    }
}
