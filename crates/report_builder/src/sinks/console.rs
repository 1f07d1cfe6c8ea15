//! Fixed-width console table

use ppg_core::PlayerStatRow;
use std::io::{self, Write};
use std::path::Path;

const SEPARATOR_WIDTH: usize = 90;
const MISSING: &str = "-";

/// Write the header, separator and one line per row to `out`
pub fn write_console_table<W: Write>(out: &mut W, rows: &[PlayerStatRow]) -> io::Result<()> {
    writeln!(
        out,
        "{:25}  {:5}  {:>5}  {:>6}  {:>4}  {:>5}  {:>5}  {:>5}  {:>5}",
        "Player", "Team", "PPG", "StdDev", "CV", "P10", "P20", "P30", "Games"
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    for row in rows {
        writeln!(
            out,
            "{:25}  {:5}  {:5.1}  {:6.1}  {:4.1}  {}  {}  {}  {:5}",
            row.player,
            row.team.as_deref().unwrap_or(MISSING),
            row.points_per_game,
            row.downside_deviation,
            row.coefficient_of_variation,
            pctl(row.p10),
            pctl(row.p20),
            pctl(row.p30),
            row.games_played
        )?;
    }

    Ok(())
}

/// Closing line naming the exported artifact
pub fn write_export_summary<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Data exported to {}", path.display())
}

fn pctl(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:5.1}", v),
        None => format!("{:>5}", MISSING),
    }
}
