//! Reshaping of sparse time records into a dense columnar matrix.
//!
//! This is the heart of the application: a list of (date, user, seconds)
//! records in arbitrary order becomes a matrix with one date column covering
//! every calendar day between the earliest and latest observed dates, plus
//! one column per user, zero-filled where a user has no record on a day.
//! That shape is what both the chart renderer and the exporters consume.
//!
//! The transform is a pure function of its input. All intermediate state
//! (the date→user→seconds table, the user set, the date bounds) is local to
//! one invocation, so re-running it for a new date range can never leak
//! entries from a previous fetch.

use crate::libs::record::Record;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Intermediate date → user → seconds mapping built during accumulation.
pub type TimeTable = HashMap<NaiveDate, HashMap<String, u64>>;

/// Inclusive span from the earliest to the latest observed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateRange {
    /// Number of calendar days in the range, both bounds inclusive.
    pub fn num_days(&self) -> usize {
        (self.max - self.min).num_days() as usize + 1
    }

    /// Every calendar day in the range, in order.
    ///
    /// Calendar-day increments, so month and year boundaries are handled by
    /// the date type rather than fixed 24h steps.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.min.iter_days().take(self.num_days())
    }
}

/// One user's seconds value per day of the date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserColumn {
    pub user: String,
    pub values: Vec<u64>,
}

/// The chart-ready columnar structure: one date column plus one column per
/// user, all of identical length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnarMatrix {
    /// The `x` column: every calendar day of the range, contiguous.
    pub dates: Vec<NaiveDate>,
    /// One column per user, values aligned with `dates`.
    pub columns: Vec<UserColumn>,
}

impl ColumnarMatrix {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Looks up the cell for a (date, user) pair, if both exist.
    pub fn value(&self, date: NaiveDate, user: &str) -> Option<u64> {
        let row = self.dates.iter().position(|&d| d == date)?;
        let column = self.columns.iter().find(|c| c.user == user)?;
        column.values.get(row).copied()
    }

    /// Largest seconds value anywhere in the matrix; 0 when empty.
    pub fn max_seconds(&self) -> u64 {
        self.columns
            .iter()
            .flat_map(|column| column.values.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Result of one reshape pass.
#[derive(Debug, Clone)]
pub struct Reshaped {
    pub matrix: ColumnarMatrix,
    /// Distinct users in order of first appearance in the input.
    pub users: Vec<String>,
    /// `None` for empty input.
    pub range: Option<DateRange>,
}

/// Reshapes a sparse record list into a dense columnar matrix.
///
/// Input order is irrelevant to the result except for duplicates: when two
/// records share a (date, user) pair the later one wins outright, values are
/// never summed. Empty input yields an empty matrix, not an error.
pub fn reshape(records: &[Record]) -> Reshaped {
    let mut users: Vec<String> = Vec::new();
    let mut table = TimeTable::new();
    let mut range: Option<DateRange> = None;

    for record in records {
        if !users.iter().any(|user| user == &record.user) {
            users.push(record.user.clone());
        }

        range = Some(match range {
            None => DateRange { min: record.date, max: record.date },
            Some(bounds) => DateRange {
                min: bounds.min.min(record.date),
                max: bounds.max.max(record.date),
            },
        });

        // Last write wins on duplicate (date, user) pairs.
        table.entry(record.date).or_default().insert(record.user.clone(), record.seconds);
    }

    let dates: Vec<NaiveDate> = match range {
        Some(bounds) => bounds.days().collect(),
        None => Vec::new(),
    };

    let columns = users
        .iter()
        .map(|user| UserColumn {
            user: user.clone(),
            values: dates
                .iter()
                .map(|day| table.get(day).and_then(|by_user| by_user.get(user)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    Reshaped {
        matrix: ColumnarMatrix { dates, columns },
        users,
        range,
    }
}
