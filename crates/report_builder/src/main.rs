//! Report Builder CLI
//!
//! Team game logs → console table + player_stats.xlsx

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use report_builder::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
#[cfg(feature = "cli")]
use report_builder::ReportConfig;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "report_builder")]
#[command(about = "Build the player scoring consistency report from team game logs", long_about = None)]
struct Cli {
    /// Directory containing the team logs (ATL.txt, BOS.txt, ...)
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    dir: PathBuf,

    /// Output spreadsheet path
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    out: PathBuf,

    /// Output run metadata JSON file
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Fold team logs in directory order instead of by file name
    #[arg(long, default_value = "false")]
    unsorted: bool,
}

#[cfg(feature = "cli")]
impl Cli {
    fn into_config(self) -> ReportConfig {
        let mut config = ReportConfig::new(self.dir, self.out).with_sorted_files(!self.unsorted);
        if let Some(metadata) = self.metadata {
            config = config.with_metadata(metadata);
        }
        config
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    log::info!("Reading team logs from {}", config.input_dir.display());

    let stdout = std::io::stdout();
    let meta = report_builder::run_report(&config, &mut stdout.lock())?;

    log::info!(
        "Report done: {} players, {} files, {} rows skipped, checksum {}",
        meta.players,
        meta.files_processed,
        meta.rows_skipped,
        meta.checksum
    );

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("report_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
