//! Spreadsheet sink backed by rust_xlsxwriter

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Cell, TableWriter};

/// Worksheet name of the exported report
pub const SHEET_NAME: &str = "Player Stats";

/// Single-sheet `.xlsx` writer.
///
/// Cells are buffered in the worksheet and the file is written by `finish`.
pub struct XlsxTableWriter {
    path: PathBuf,
    worksheet: Worksheet,
    next_row: u32,
}

impl XlsxTableWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let mut worksheet = Worksheet::new();
        worksheet
            .set_name(SHEET_NAME)
            .context("Failed to name report worksheet")?;

        Ok(Self {
            path: path.to_path_buf(),
            worksheet,
            next_row: 0,
        })
    }

    fn write_cell(&mut self, col: u16, cell: &Cell) -> Result<()> {
        let row = self.next_row;
        match cell {
            Cell::Text(text) => {
                self.worksheet.write_string(row, col, text.as_str())?;
            }
            Cell::Number(value) => {
                self.worksheet.write_number(row, col, *value)?;
            }
            Cell::Integer(value) => {
                self.worksheet.write_number(row, col, *value as f64)?;
            }
            // left blank
            Cell::Empty => {}
        }
        Ok(())
    }
}

impl TableWriter for XlsxTableWriter {
    fn write_header(&mut self, labels: &[&str]) -> Result<()> {
        let cells: Vec<Cell> = labels.iter().map(|l| Cell::Text(l.to_string())).collect();
        self.write_row(&cells)
    }

    fn write_row(&mut self, cells: &[Cell]) -> Result<()> {
        for (col, cell) in cells.iter().enumerate() {
            let col = u16::try_from(col).context("Too many spreadsheet columns")?;
            self.write_cell(col, cell)
                .with_context(|| format!("Failed to write spreadsheet row {}", self.next_row))?;
        }
        self.next_row += 1;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }

        let mut workbook = Workbook::new();
        workbook.push_worksheet(self.worksheet);
        workbook
            .save(&self.path)
            .with_context(|| format!("Failed to write spreadsheet: {}", self.path.display()))?;

        log::info!("Spreadsheet written: {} ({} rows)", self.path.display(), self.next_row);
        Ok(())
    }
}
