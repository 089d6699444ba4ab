//! # Timeplot - Per-User Time Charting
//!
//! A command-line utility for fetching per-user daily time records from a
//! REST endpoint and rendering them as a time-series chart.
//!
//! ## Features
//!
//! - **Record Fetching**: One-shot retrieval of time records over HTTP
//! - **Reshaping**: Dense columnar matrix (one date column, one column per user)
//! - **Chart Rendering**: SVG time-series chart with one line per user
//! - **Table View**: Terminal table of the reshaped matrix
//! - **Data Export**: Export the matrix to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeplot::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
