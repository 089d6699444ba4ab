//! Time records API client.
//!
//! Fetches the per-user daily time records that the chart and export
//! commands consume. One `GET` per invocation against the `rest/` endpoint
//! of the configured server, with the resolved date range passed as query
//! parameters so the server can scope the batch.
//!
//! ## Error behavior
//!
//! A timed-out request, a non-2xx status, and a malformed record in the
//! response body are all hard failures; nothing is retried and no partial
//! batch is ever returned.

use crate::libs::config::ServerConfig;
use crate::libs::range::{ChartRange, DATE_FORMAT};
use crate::libs::record::{parse_records, Record};
use crate::msg_debug;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

const RECORDS_URL: &str = "rest/";
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Failures of the record fetch itself (as opposed to the response body).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {timeout}s")]
    Timeout { url: String, timeout: u64 },
    #[error("server returned {status} for {url}")]
    Status { url: String, status: StatusCode },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the time records endpoint.
pub struct TimesApi {
    client: Client,
    config: ServerConfig,
}

impl TimesApi {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(FETCH_TIMEOUT_SECS)).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetches all time records for the given date range.
    pub async fn fetch(&self, range: &ChartRange) -> Result<Vec<Record>> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), RECORDS_URL);
        msg_debug!(format!("GET {} [{} .. {}]", url, range.start, range.end));

        let res = self
            .client
            .get(&url)
            .query(&[
                ("start-date", range.start.format(DATE_FORMAT).to_string()),
                ("end-date", range.end.format(DATE_FORMAT).to_string()),
            ])
            .send()
            .await
            .map_err(|err| classify(err, &url))?;

        if !res.status().is_success() {
            return Err(FetchError::Status { url, status: res.status() }.into());
        }

        let body = res.text().await.map_err(|err| classify(err, &url))?;
        Ok(parse_records(&body)?)
    }
}

fn classify(err: reqwest::Error, url: &str) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            timeout: FETCH_TIMEOUT_SECS,
        }
    } else {
        FetchError::Transport(err)
    }
}
