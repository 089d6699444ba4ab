use crate::libs::reshape::ColumnarMatrix;
use anyhow::Result;
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the matrix as a table: one row per day, one column per user.
    pub fn matrix(matrix: &ColumnarMatrix) -> Result<()> {
        let mut table = Table::new();

        let mut header = vec![Cell::new("DATE")];
        header.extend(matrix.columns.iter().map(|column| Cell::new(&column.user.to_uppercase())));
        table.add_row(Row::new(header));

        for (row_idx, date) in matrix.dates.iter().enumerate() {
            let mut cells = vec![Cell::new(&date.format("%Y-%m-%d").to_string())];
            for column in &matrix.columns {
                let value = column.values.get(row_idx).copied().unwrap_or(0);
                cells.push(Cell::new(&value.to_string()));
            }
            table.add_row(Row::new(cells));
        }
        table.printstd();

        Ok(())
    }
}
