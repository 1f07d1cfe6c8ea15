//! Run configuration
//!
//! `ReportConfig::default()` is the plain run: read `./Box scores by team`,
//! write `player_stats.xlsx` to the working directory.

use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "./Box scores by team";
pub const DEFAULT_OUTPUT_PATH: &str = "player_stats.xlsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory holding the team logs
    pub input_dir: PathBuf,
    /// Spreadsheet artifact path
    pub output_path: PathBuf,
    /// Optional run metadata JSON
    pub metadata_path: Option<PathBuf>,
    /// Fold team logs in file-name order
    pub sort_files: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            metadata_path: None,
            sort_files: true,
        }
    }
}

impl ReportConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_path = Some(path.into());
        self
    }

    pub fn with_sorted_files(mut self, sort_files: bool) -> Self {
        self.sort_files = sort_files;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_plain_run() {
        let config = ReportConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("./Box scores by team"));
        assert_eq!(config.output_path, PathBuf::from("player_stats.xlsx"));
        assert!(config.metadata_path.is_none());
        assert!(config.sort_files);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ReportConfig::new("logs", "out/report.xlsx")
            .with_metadata("out/report.json")
            .with_sorted_files(false);
        assert_eq!(config.input_dir, PathBuf::from("logs"));
        assert_eq!(config.metadata_path, Some(PathBuf::from("out/report.json")));
        assert!(!config.sort_files);
    }
}
