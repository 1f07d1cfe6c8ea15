//! # ppg_core - Per-Game Scoring Statistics
//!
//! Data model and pure statistics for player scoring reports:
//! - `GameRecord` validation from raw game-log columns
//! - `PlayerState` accumulation with most-recent-team tracking
//! - `PlayerStatRow` with PPG, downside deviation, CV and low-end percentiles

pub mod error;
pub mod models;
pub mod stats;

pub use error::RecordError;
pub use models::{GameRecord, PlayerStatRow, PlayerState, DATE_FORMAT, REPORT_PERCENTILES};
pub use stats::{coefficient_of_variation, lower_semideviation, mean, percentile, round_one_decimal};
