//! Chart command: the fetch → reshape → render flow.
//!
//! Resolves the display range (defaulting to today and the ten days before
//! it), fetches the records for that range, reshapes them into the columnar
//! matrix and renders the SVG chart. Changing the range simply means running
//! the command again: every invocation fetches and reshapes from scratch.

use crate::{
    api::times::TimesApi,
    libs::{chart, config::Config, messages::Message, range::ChartRange, reshape::reshape, view::View},
    msg_bail_anyhow, msg_debug, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Range start date (YYYY-MM-DD); defaults to ten days ago
    #[arg(long)]
    start_date: Option<String>,

    /// Range end date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    end_date: Option<String>,

    /// Output SVG file path
    #[arg(short, long, default_value = "timeplot.svg")]
    output: PathBuf,

    /// Also print the reshaped matrix as a table
    #[arg(long)]
    table: bool,
}

pub async fn cmd(chart_args: ChartArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(server) = config.server else {
        msg_bail_anyhow!(Message::ServerConfigNotFound);
    };

    let range = ChartRange::resolve(
        chart_args.start_date.as_deref(),
        chart_args.end_date.as_deref(),
        Utc::now().date_naive(),
    )?;

    let records = TimesApi::new(&server)?.fetch(&range).await?;
    msg_debug!(format!("{}", Message::RecordsFetched(records.len())));

    let reshaped = reshape(&records);
    if reshaped.matrix.is_empty() {
        msg_warning!(Message::NoRecordsInRange(range.start.to_string(), range.end.to_string()));
    }

    let caption = format!("Time per user, {} to {}", range.start, range.end);
    chart::render(&reshaped.matrix, &chart_args.output, &caption)?;
    msg_success!(Message::ChartSaved(chart_args.output.display().to_string()));

    if chart_args.table && !reshaped.matrix.is_empty() {
        msg_print!(Message::RecordsHeader(range.start.to_string(), range.end.to_string()), true);
        View::matrix(&reshaped.matrix)?;
    }

    Ok(())
}
