//! Report sinks
//!
//! Both sinks consume the same sorted `PlayerStatRow` slice:
//! - `console`: fixed-width text table
//! - `xlsx`: single-sheet spreadsheet behind the `TableWriter` capability

pub mod console;
pub mod xlsx;

use anyhow::Result;
use ppg_core::{round_one_decimal, PlayerStatRow};

pub use console::write_console_table;
pub use xlsx::XlsxTableWriter;

/// Column labels of the exported sheet, in order
pub const SPREADSHEET_COLUMNS: [&str; 9] = [
    "Player",
    "Current Team",
    "PPG",
    "Std Dev",
    "CV",
    "10th Pctl",
    "20th Pctl",
    "30th Pctl",
    "Games",
];

/// One typed spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Integer(i64),
    Empty,
}

impl Cell {
    fn rounded(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, |v| Cell::Number(round_one_decimal(v)))
    }
}

/// Tabular output artifact: header, typed rows, then a single finalize.
///
/// Constructing the writer opens the artifact.
pub trait TableWriter {
    fn write_header(&mut self, labels: &[&str]) -> Result<()>;

    fn write_row(&mut self, cells: &[Cell]) -> Result<()>;

    /// Flush and close the artifact
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}

/// Spreadsheet cells for one report row
pub fn spreadsheet_cells(row: &PlayerStatRow) -> Vec<Cell> {
    vec![
        Cell::Text(row.player.clone()),
        row.team.clone().map_or(Cell::Empty, Cell::Text),
        Cell::rounded(Some(row.points_per_game)),
        Cell::rounded(Some(row.downside_deviation)),
        Cell::rounded(Some(row.coefficient_of_variation)),
        Cell::rounded(row.p10),
        Cell::rounded(row.p20),
        Cell::rounded(row.p30),
        Cell::Integer(i64::from(row.games_played)),
    ]
}

/// Write the header and every row, then finalize the artifact
pub fn write_table<W: TableWriter>(mut writer: W, rows: &[PlayerStatRow]) -> Result<()> {
    writer.write_header(&SPREADSHEET_COLUMNS)?;
    for row in rows {
        writer.write_row(&spreadsheet_cells(row))?;
    }
    writer.finish()
}
