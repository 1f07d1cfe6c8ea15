//! Game-log records, per-player accumulation state and report rows.

use chrono::NaiveDate;

use crate::error::RecordError;
use crate::stats::{coefficient_of_variation, lower_semideviation, mean, percentile};

/// Game-log column holding the player name.
pub const COL_PLAYER: &str = "PLAYER";
/// Game-log column holding points scored.
pub const COL_POINTS: &str = "PTS";
/// Game-log column holding the game date.
pub const COL_GAME_DATE: &str = "GAME DATE";
/// Game-log column holding the player's team for that game.
pub const COL_TEAM: &str = "TEAM";

/// Date format of the `GAME DATE` column.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Percentile fractions reported per player (10th, 20th, 30th).
pub const REPORT_PERCENTILES: [f64; 3] = [0.10, 0.20, 0.30];

/// One validated row of a team game log.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub player: String,
    pub points: f64,
    pub date: NaiveDate,
    pub team: String,
}

impl GameRecord {
    /// Validate raw column values into a record.
    ///
    /// `None` and empty strings both count as missing. Points may carry
    /// surrounding whitespace but must be a finite decimal number.
    pub fn from_fields(
        player: Option<&str>,
        points: Option<&str>,
        date: Option<&str>,
        team: Option<&str>,
    ) -> Result<Self, RecordError> {
        let player = required(player, COL_PLAYER)?;
        let points_raw = required(points, COL_POINTS)?;
        let date_raw = required(date, COL_GAME_DATE)?;
        let team = required(team, COL_TEAM)?;

        let points = points_raw
            .trim()
            .parse::<f64>()
            .map_err(|_| RecordError::InvalidPoints(points_raw.to_string()))?;
        if !points.is_finite() {
            return Err(RecordError::NonFinitePoints(points_raw.to_string()));
        }

        if !has_date_shape(date_raw) {
            return Err(RecordError::InvalidDate(date_raw.to_string()));
        }
        let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
            .map_err(|_| RecordError::InvalidDate(date_raw.to_string()))?;

        Ok(Self {
            player: player.to_string(),
            points,
            date,
            team: team.to_string(),
        })
    }
}

/// `M/D/YYYY` with 1-2 digit month and day and a 4 digit year.
///
/// chrono's `%Y` also takes short or signed years and `%m` skips leading
/// whitespace, so the layout is checked before parsing.
fn has_date_shape(raw: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let mut parts = raw.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(month), Some(day), Some(year), None) => {
            digits(month, 1, 2) && digits(day, 1, 2) && digits(year, 4, 4)
        }
        _ => false,
    }
}

fn required<'a>(value: Option<&'a str>, column: &'static str) -> Result<&'a str, RecordError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RecordError::MissingField(column)),
    }
}

/// Accumulated history for one player across every team log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    /// Points per game in encounter order
    pub points: Vec<f64>,
    pub most_recent_date: Option<NaiveDate>,
    pub current_team: Option<String>,
}

impl PlayerState {
    /// Fold one game into the state.
    ///
    /// Points are always appended. Team and date move only on a strictly
    /// newer date, so the first team seen for the latest date wins.
    pub fn record_game(&mut self, points: f64, date: NaiveDate, team: &str) {
        self.points.push(points);

        let is_newer = match self.most_recent_date {
            None => true,
            Some(current) => date > current,
        };
        if is_newer {
            self.most_recent_date = Some(date);
            self.current_team = Some(team.to_string());
        }
    }

    pub fn games_played(&self) -> usize {
        self.points.len()
    }
}

/// Final statistics for one player, as shown in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatRow {
    pub player: String,
    pub team: Option<String>,
    pub points_per_game: f64,
    pub downside_deviation: f64,
    pub coefficient_of_variation: f64,
    pub p10: Option<f64>,
    pub p20: Option<f64>,
    pub p30: Option<f64>,
    pub games_played: u32,
}

impl PlayerStatRow {
    /// Compute the row for a player; `None` when no games were recorded.
    pub fn from_state(player: String, state: PlayerState) -> Option<Self> {
        let points_per_game = mean(&state.points)?;
        let downside_deviation = lower_semideviation(&state.points);
        let coefficient_of_variation =
            coefficient_of_variation(downside_deviation, points_per_game);

        let games_played = state.games_played() as u32;
        let mut sorted = state.points;
        sorted.sort_by(f64::total_cmp);
        let [p10, p20, p30] = REPORT_PERCENTILES.map(|p| percentile(&sorted, p));

        Some(Self {
            player,
            team: state.current_team,
            points_per_game,
            downside_deviation,
            coefficient_of_variation,
            p10,
            p20,
            p30,
            games_played,
        })
    }
}
