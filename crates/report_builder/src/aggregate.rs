//! Per-player aggregation across every team log

use anyhow::Result;
use ppg_core::{GameRecord, PlayerState};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use crate::discovery::discover_team_files;
use crate::parser::{GameLogReader, ParseStats};

/// Player name → accumulated state
///
/// FxHashMap keeps iteration order stable across runs for the same input.
pub type PlayerTable = FxHashMap<String, PlayerState>;

/// Immutable result of one aggregation run
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub players: PlayerTable,
    /// Team logs in the order they were folded
    pub files: Vec<PathBuf>,
    pub stats: ParseStats,
}

/// Owns the player table while logs are being folded in
#[derive(Debug, Default)]
pub struct Aggregator {
    players: PlayerTable,
    files: Vec<PathBuf>,
    stats: ParseStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `player`, created empty on first access
    pub fn state_mut(&mut self, player: &str) -> &mut PlayerState {
        self.players.entry(player.to_owned()).or_default()
    }

    /// Fold one game into its player's state
    pub fn fold(&mut self, game: GameRecord) {
        self.state_mut(&game.player)
            .record_game(game.points, game.date, &game.team);
    }

    /// Parse one team log and fold every valid row.
    ///
    /// The file is closed before this returns.
    pub fn ingest_file(&mut self, path: &Path) -> Result<ParseStats> {
        let mut reader = GameLogReader::from_path(path)?;
        for game in reader.by_ref() {
            self.fold(game?);
        }
        let stats = reader.into_stats();

        log::info!(
            "{}: parsed {} rows (skipped: {}, total rows: {})",
            path.display(),
            stats.parsed,
            stats.skipped(),
            stats.total_rows
        );

        self.stats.merge(&stats);
        self.files.push(path.to_path_buf());
        Ok(stats)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn finish(self) -> Aggregation {
        Aggregation {
            players: self.players,
            files: self.files,
            stats: self.stats,
        }
    }
}

/// Discover and fold every team log under `dir`, one file at a time
pub fn aggregate_directory(dir: &Path, sort_files: bool) -> Result<Aggregation> {
    let files = discover_team_files(dir, sort_files)?;
    log::info!("Found {} team logs in {}", files.len(), dir.display());

    let mut aggregator = Aggregator::new();
    for path in &files {
        aggregator.ingest_file(path)?;
    }

    log::info!(
        "Aggregated {} players from {} rows",
        aggregator.player_count(),
        aggregator.stats().parsed
    );

    Ok(aggregator.finish())
}
