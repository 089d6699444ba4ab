//! Export command: fetch, reshape, and write the matrix to a file.

use crate::{
    api::times::TimesApi,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        range::ChartRange,
        reshape::reshape,
    },
    msg_bail_anyhow, msg_info,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Range start date (YYYY-MM-DD); defaults to ten days ago
    #[arg(long)]
    start_date: Option<String>,

    /// Range end date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    end_date: Option<String>,

    /// Output file path; a timestamped name is generated when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(export_args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(server) = config.server else {
        msg_bail_anyhow!(Message::ServerConfigNotFound);
    };

    let range = ChartRange::resolve(
        export_args.start_date.as_deref(),
        export_args.end_date.as_deref(),
        Utc::now().date_naive(),
    )?;

    msg_info!(Message::ExportingData("time records".to_string(), format!("{:?}", export_args.format)));

    let records = TimesApi::new(&server)?.fetch(&range).await?;
    let reshaped = reshape(&records);

    Exporter::new(export_args.format, export_args.output).export(&reshaped.matrix)?;
    Ok(())
}
