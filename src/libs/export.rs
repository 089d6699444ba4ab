//! Data export functionality for external analysis and backup.
//!
//! Writes the reshaped matrix to CSV, JSON, or Excel. CSV and Excel use a
//! tabular layout (date rows, user columns) mirroring the terminal table;
//! JSON preserves the columnar structure as-is.

use crate::libs::messages::Message;
use crate::libs::range::DATE_FORMAT;
use crate::libs::reshape::ColumnarMatrix;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON preserving the columnar structure.
    Json,
    /// Excel worksheet with a formatted header row.
    Excel,
}

/// Serializable mirror of the matrix for JSON output.
#[derive(Debug, Serialize)]
struct ExportMatrix {
    dates: Vec<String>,
    columns: Vec<ExportColumn>,
}

#[derive(Debug, Serialize)]
struct ExportColumn {
    user: String,
    values: Vec<u64>,
}

/// Export handler holding the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped default
    /// filename with the format-appropriate extension is generated.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("timeplot_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Writes the matrix in the configured format.
    pub fn export(&self, matrix: &ColumnarMatrix) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(matrix)?,
            ExportFormat::Json => self.export_json(matrix)?,
            ExportFormat::Excel => self.export_excel(matrix)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, matrix: &ColumnarMatrix) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        let mut header = vec!["Date".to_string()];
        header.extend(matrix.columns.iter().map(|column| column.user.clone()));
        wtr.write_record(&header)?;

        for (row_idx, date) in matrix.dates.iter().enumerate() {
            let mut row = vec![date.format(DATE_FORMAT).to_string()];
            for column in &matrix.columns {
                let value = column.values.get(row_idx).copied().unwrap_or(0);
                row.push(value.to_string());
            }
            wtr.write_record(&row)?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, matrix: &ColumnarMatrix) -> Result<()> {
        let export = ExportMatrix {
            dates: matrix.dates.iter().map(|date| date.format(DATE_FORMAT).to_string()).collect(),
            columns: matrix
                .columns
                .iter()
                .map(|column| ExportColumn {
                    user: column.user.clone(),
                    values: column.values.clone(),
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&export)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, matrix: &ColumnarMatrix) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Date", &header_format)?;
        for (col_idx, column) in matrix.columns.iter().enumerate() {
            worksheet.write_string_with_format(0, col_idx as u16 + 1, &column.user, &header_format)?;
        }

        for (row_idx, date) in matrix.dates.iter().enumerate() {
            let row = row_idx as u32 + 1;
            worksheet.write_string(row, 0, date.format(DATE_FORMAT).to_string())?;
            for (col_idx, column) in matrix.columns.iter().enumerate() {
                let value = column.values.get(row_idx).copied().unwrap_or(0);
                worksheet.write_number(row, col_idx as u16 + 1, value as f64)?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
