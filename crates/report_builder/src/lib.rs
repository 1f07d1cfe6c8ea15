//! Report Builder Library
//!
//! Team game logs (TSV) → per-player aggregation → downside-risk statistics
//! → console table + `player_stats.xlsx`

pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod parser;
pub mod report;
pub mod sinks;

use anyhow::{Context, Result};
use ppg_core::PlayerStatRow;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::Path;

pub use aggregate::{aggregate_directory, Aggregation, Aggregator, PlayerTable};
pub use config::ReportConfig;
pub use discovery::{discover_team_files, is_team_log_name};
pub use parser::{GameLogReader, ParseStats};
pub use report::build_report;
pub use sinks::{write_console_table, Cell, TableWriter, XlsxTableWriter, SPREADSHEET_COLUMNS};

/// Version of the exported sheet layout
pub const REPORT_SCHEMA_VERSION: &str = "v1";

/// Run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Sheet layout version (e.g. "v1")
    pub schema_version: String,
    /// Ordered column labels of the sheet
    pub columns: Vec<String>,
    pub files_processed: usize,
    pub rows_read: u32,
    pub rows_parsed: u32,
    pub rows_skipped: u32,
    /// Report rows written (one per player)
    pub players: usize,
    pub output: String,
    /// SHA256 of the spreadsheet (hex)
    pub checksum: String,
    /// RFC3339
    pub created_at: String,
}

/// Run the whole report.
///
/// # Arguments
///
/// * `config` - input directory, output paths and ordering
/// * `console` - receives the fixed-width table and export summary
///
/// # Returns
///
/// Metadata describing the written spreadsheet
pub fn run_report<W: Write>(config: &ReportConfig, console: &mut W) -> Result<ReportMetadata> {
    // 1. Discover + aggregate
    let aggregation = aggregate_directory(&config.input_dir, config.sort_files)?;
    let files_processed = aggregation.files.len();
    let stats = aggregation.stats.clone();

    // 2. Per-player statistics, sorted
    let rows = build_report(aggregation.players);

    // 3. Sinks
    write_report(&rows, &config.output_path, console)?;

    // 4. Metadata
    let metadata = ReportMetadata {
        schema_version: REPORT_SCHEMA_VERSION.to_string(),
        columns: SPREADSHEET_COLUMNS.iter().map(|c| c.to_string()).collect(),
        files_processed,
        rows_read: stats.total_rows,
        rows_parsed: stats.parsed,
        rows_skipped: stats.skipped(),
        players: rows.len(),
        output: config.output_path.display().to_string(),
        checksum: sha256_file(&config.output_path)?,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    if let Some(path) = &config.metadata_path {
        save_metadata(path, &metadata)?;
    }

    Ok(metadata)
}

/// Send the rows to the console table and the spreadsheet
pub fn write_report<W: Write>(
    rows: &[PlayerStatRow],
    output_path: &Path,
    console: &mut W,
) -> Result<()> {
    write_console_table(console, rows).context("Failed to write console table")?;
    sinks::write_table(XlsxTableWriter::create(output_path)?, rows)?;
    sinks::console::write_export_summary(console, output_path)
        .context("Failed to write console summary")?;
    Ok(())
}

/// Check a written spreadsheet against an expected checksum
pub fn verify_artifact(path: &Path, expected_checksum: &str) -> Result<bool> {
    Ok(sha256_file(path)? == expected_checksum)
}

/// Write run metadata as pretty JSON
pub fn save_metadata(path: &Path, metadata: &ReportMetadata) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata).context("Failed to serialize metadata")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write metadata file: {}", path.display()))?;
    log::info!("Metadata saved to: {}", path.display());
    Ok(())
}

fn sha256_file(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read artifact: {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
