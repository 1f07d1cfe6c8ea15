//! Team log discovery
//!
//! A team log is any regular file whose name is exactly three characters
//! followed by `.txt` (`ATL.txt`, `BOS.txt`). The three leading characters are
//! not checked for being letters.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const TEAM_LOG_SUFFIX: &str = ".txt";

/// Full file-name length of a team log, suffix included
pub const TEAM_LOG_NAME_LEN: usize = 7;

pub fn is_team_log_name(name: &str) -> bool {
    name.ends_with(TEAM_LOG_SUFFIX) && name.chars().count() == TEAM_LOG_NAME_LEN
}

/// List the team logs in `dir`.
///
/// With `sorted` the result is in ascending file-name order; otherwise it
/// follows directory iteration order, which varies between filesystems.
pub fn discover_team_files(dir: &Path, sorted: bool) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to list input directory: {}", dir.display()))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::debug!("Ignoring non UTF-8 file name: {:?}", file_name);
            continue;
        };
        if !is_team_log_name(name) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            log::debug!("Ignoring non-file entry: {}", path.display());
            continue;
        }
        files.push(path);
    }

    if sorted {
        files.sort();
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_name_predicate() {
        assert!(is_team_log_name("ATL.txt"));
        assert!(is_team_log_name("123.txt"));
        assert!(is_team_log_name("a b.txt"));
        assert!(!is_team_log_name("ATLX.txt"));
        assert!(!is_team_log_name("AT.txt"));
        assert!(!is_team_log_name("ATL.csv"));
        assert!(!is_team_log_name("ATL.TXT"));
        assert!(!is_team_log_name("ABCDEFG"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // three characters, more than three bytes
        assert!(is_team_log_name("ÉTÉ.txt"));
    }

    #[test]
    fn test_discover_filters_and_sorts() -> Result<()> {
        let dir = TempDir::new()?;
        for name in ["NYK.txt", "ATL.txt", "ATLX.txt", "notes.md", "123.txt"] {
            fs::write(dir.path().join(name), "PLAYER\tPTS\tGAME DATE\tTEAM\n")?;
        }
        fs::create_dir(dir.path().join("DIR.txt"))?;

        let files = discover_team_files(dir.path(), true)?;
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect();

        assert_eq!(names, vec!["123.txt", "ATL.txt", "NYK.txt"]);
        Ok(())
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = discover_team_files(&missing, true).unwrap_err();
        assert!(err.to_string().contains("Failed to read input directory"));
    }
}
