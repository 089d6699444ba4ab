//! Wire format and validation for time records.
//!
//! The REST endpoint returns a JSON array where every element wraps the
//! actual payload in a `fields` envelope (a framework serialization
//! convention on the server side):
//!
//! ```json
//! [{ "fields": { "date": "2024-01-01", "user": "alice", "seconds": 30 } }]
//! ```
//!
//! The envelope is treated as opaque and unwrapped before use. Validation is
//! strict: one malformed record rejects the whole batch, because a chart
//! silently missing entries would mislead more than an error does.

use crate::libs::range::DATE_FORMAT;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// One (date, user, seconds) observation from the source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: NaiveDate,
    pub user: String,
    pub seconds: u64,
}

/// Envelope wrapping each record in the REST response.
#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    fields: RawFields,
}

/// Record payload as it appears on the wire, before validation.
#[derive(Debug, Deserialize)]
struct RawFields {
    date: String,
    user: String,
    seconds: i64,
}

/// Validation failures for a batch of records.
///
/// Every variant that concerns a single record carries its zero-based index
/// in the response array, so the offending entry can be located.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("response body is not a JSON array of records: {0}")]
    InvalidBatch(#[source] serde_json::Error),
    #[error("record {index} is malformed: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("record {index} has an invalid date {date:?} (expected YYYY-MM-DD)")]
    InvalidDate { index: usize, date: String },
    #[error("record {index} has negative seconds ({seconds})")]
    NegativeSeconds { index: usize, seconds: i64 },
}

/// Parses and validates a REST response body into records.
///
/// Rejects the whole batch on the first malformed record rather than
/// skipping it.
pub fn parse_records(body: &str) -> Result<Vec<Record>, RecordError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body).map_err(RecordError::InvalidBatch)?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let envelope: RecordEnvelope =
            serde_json::from_value(value).map_err(|source| RecordError::Malformed { index, source })?;
        let fields = envelope.fields;

        let date = NaiveDate::parse_from_str(&fields.date, DATE_FORMAT)
            .map_err(|_| RecordError::InvalidDate { index, date: fields.date.clone() })?;
        if fields.seconds < 0 {
            return Err(RecordError::NegativeSeconds { index, seconds: fields.seconds });
        }

        records.push(Record {
            date,
            user: fields.user,
            seconds: fields.seconds as u64,
        });
    }

    Ok(records)
}
