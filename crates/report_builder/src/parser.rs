//! Team game-log parser - tab-delimited box scores → GameRecord stream
//!
//! Each team file is a TSV export with a header row. Only four columns are
//! read (`PLAYER`, `PTS`, `GAME DATE`, `TEAM`); every other column is ignored.
//! Rows failing validation are dropped and counted, never reported as errors.

use anyhow::{Context, Result};
use csv::StringRecord;
use ppg_core::models::{COL_GAME_DATE, COL_PLAYER, COL_POINTS, COL_TEAM};
use ppg_core::{GameRecord, RecordError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Row counters for one or more parsed logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub skipped_missing: u32,
    pub skipped_points: u32,
    pub skipped_date: u32,
    pub skipped_encoding: u32,
}

impl ParseStats {
    pub fn skipped(&self) -> u32 {
        self.skipped_missing + self.skipped_points + self.skipped_date + self.skipped_encoding
    }

    /// Add another file's counters into this one
    pub fn merge(&mut self, other: &ParseStats) {
        self.total_rows += other.total_rows;
        self.parsed += other.parsed;
        self.skipped_missing += other.skipped_missing;
        self.skipped_points += other.skipped_points;
        self.skipped_date += other.skipped_date;
        self.skipped_encoding += other.skipped_encoding;
    }

    fn record_rejection(&mut self, err: &RecordError) {
        match err {
            RecordError::MissingField(_) => self.skipped_missing += 1,
            RecordError::InvalidPoints(_) | RecordError::NonFinitePoints(_) => {
                self.skipped_points += 1
            }
            RecordError::InvalidDate(_) => self.skipped_date += 1,
        }
    }
}

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ColumnIndex {
    player: Option<usize>,
    points: Option<usize>,
    date: Option<usize>,
    team: Option<usize>,
}

impl ColumnIndex {
    /// Later duplicates of a header name win, like a dict-per-row reader.
    fn from_headers(headers: &StringRecord) -> Self {
        let mut index = Self::default();
        for (i, name) in headers.iter().enumerate() {
            match name {
                COL_PLAYER => index.player = Some(i),
                COL_POINTS => index.points = Some(i),
                COL_GAME_DATE => index.date = Some(i),
                COL_TEAM => index.team = Some(i),
                _ => {}
            }
        }
        index
    }

    fn missing(&self) -> Vec<&'static str> {
        [
            (self.player, COL_PLAYER),
            (self.points, COL_POINTS),
            (self.date, COL_GAME_DATE),
            (self.team, COL_TEAM),
        ]
        .into_iter()
        .filter(|(idx, _)| idx.is_none())
        .map(|(_, name)| name)
        .collect()
    }
}

/// Lazy reader over one team log.
///
/// Yields `Ok(GameRecord)` for valid rows. An `Err` is yielded only for I/O
/// failures, which callers treat as fatal.
pub struct GameLogReader<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnIndex,
    record: StringRecord,
    stats: ParseStats,
    source: String,
}

impl GameLogReader<File> {
    /// Open a team log from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open team log: {}", path.display()))?;
        Self::from_reader(file, path.display().to_string())
    }
}

impl<R: Read> GameLogReader<R> {
    /// Wrap any byte source; `source` only labels log messages and errors
    pub fn from_reader(rdr: R, source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header row: {}", source))?;
        let columns = ColumnIndex::from_headers(headers);

        let missing = columns.missing();
        if !missing.is_empty() && !headers.is_empty() {
            log::warn!(
                "{}: header lacks column(s) {:?}, all rows will be skipped",
                source,
                missing
            );
        }

        Ok(Self {
            reader,
            columns,
            record: StringRecord::new(),
            stats: ParseStats::default(),
            source,
        })
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    fn field(&self, idx: Option<usize>) -> Option<&str> {
        idx.and_then(|i| self.record.get(i))
    }

    fn parse_current(&self) -> std::result::Result<GameRecord, RecordError> {
        GameRecord::from_fields(
            self.field(self.columns.player),
            self.field(self.columns.points),
            self.field(self.columns.date),
            self.field(self.columns.team),
        )
    }
}

impl<R: Read> Iterator for GameLogReader<R> {
    type Item = Result<GameRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    self.stats.total_rows += 1;
                    match self.parse_current() {
                        Ok(game) => {
                            self.stats.parsed += 1;
                            return Some(Ok(game));
                        }
                        Err(e) => {
                            log::debug!(
                                "{}: skipping row {} - {}",
                                self.source,
                                self.stats.total_rows,
                                e
                            );
                            self.stats.record_rejection(&e);
                        }
                    }
                }
                Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                    self.stats.total_rows += 1;
                    self.stats.skipped_encoding += 1;
                    log::warn!(
                        "{}: skipping row {} - not valid UTF-8",
                        self.source,
                        self.stats.total_rows
                    );
                }
                Err(e) => {
                    let err = anyhow::Error::new(e)
                        .context(format!("Failed to read team log: {}", self.source));
                    return Some(Err(err));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: &str = "SEASON\tPLAYER\tTEAM\tMATCH UP\tGAME DATE\tW/L\tMIN\tPTS\n";

    fn read_all(body: &str) -> (Vec<GameRecord>, ParseStats) {
        let text = format!("{HEADER}{body}");
        let mut reader = GameLogReader::from_reader(text.as_bytes(), "test.txt").unwrap();
        let games: Vec<GameRecord> = reader.by_ref().collect::<Result<_>>().unwrap();
        (games, reader.into_stats())
    }

    #[test]
    fn test_parses_valid_rows() {
        let (games, stats) = read_all(
            "2023-24\tTrae Young\tATL\tATL vs. BOS\t01/05/2024\tW\t36\t31\n\
             2023-24\tDejounte Murray\tATL\tATL vs. BOS\t01/05/2024\tW\t35\t22.5\n",
        );

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].player, "Trae Young");
        assert_eq!(games[0].points, 31.0);
        assert_eq!(games[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(games[1].points, 22.5);
        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.parsed, 2);
        assert_eq!(stats.skipped(), 0);
    }

    #[test]
    fn test_skips_malformed_rows_and_counts_reason() {
        let (games, stats) = read_all(
            "2023-24\t\tATL\tx\t01/05/2024\tW\t36\t31\n\
             2023-24\tA\tATL\tx\t01/05/2024\tW\t36\tDNP\n\
             2023-24\tB\tATL\tx\t2024-01-05\tW\t36\t12\n\
             2023-24\tC\tATL\tx\t01/06/2024\tW\t36\t-1\n\
             2023-24\tD\tATL\n",
        );

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].player, "C");
        assert_eq!(games[0].points, -1.0);
        assert_eq!(stats.total_rows, 5);
        assert_eq!(stats.parsed, 1);
        assert_eq!(stats.skipped_missing, 2);
        assert_eq!(stats.skipped_points, 1);
        assert_eq!(stats.skipped_date, 1);
    }

    #[test]
    fn test_two_digit_year_row_is_skipped() {
        let (games, stats) = read_all(
            "2023-24\tA\tATL\tx\t01/05/24\tW\t36\t40\n\
             2023-24\tA\tATL\tx\t01/06/2024\tW\t36\t10\n",
        );

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].points, 10.0);
        assert_eq!(stats.skipped_date, 1);
    }

    #[test]
    fn test_missing_required_header_skips_everything() {
        let text = "PLAYER\tTEAM\tPTS\nA\tATL\t10\n";
        let mut reader = GameLogReader::from_reader(text.as_bytes(), "nodate.txt").unwrap();
        assert!(reader.next().is_none());
        assert_eq!(reader.stats().skipped_missing, 1);
    }

    #[test]
    fn test_header_bom_and_column_order() {
        let text = "\u{feff}PLAYER\tPTS\tGAME DATE\tTEAM\nA\t7\t3/9/2024\tMIA\n";
        let mut reader = GameLogReader::from_reader(text.as_bytes(), "bom.txt").unwrap();
        let game = reader.next().unwrap().unwrap();
        assert_eq!(game.player, "A");
        assert_eq!(game.team, "MIA");
        assert_eq!(game.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let mut bytes = b"PLAYER\tPTS\tGAME DATE\tTEAM\n".to_vec();
        bytes.extend_from_slice(b"Bad\xff\t1\t01/01/2024\tATL\n");
        bytes.extend_from_slice(b"Good\t2\t01/01/2024\tATL\n");

        let mut reader = GameLogReader::from_reader(bytes.as_slice(), "enc.txt").unwrap();
        let games: Vec<GameRecord> = reader.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].player, "Good");
        assert_eq!(reader.stats().skipped_encoding, 1);
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let mut reader = GameLogReader::from_reader(&b""[..], "empty.txt").unwrap();
        assert!(reader.next().is_none());
        assert_eq!(reader.stats().total_rows, 0);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = ParseStats {
            total_rows: 3,
            parsed: 2,
            skipped_date: 1,
            ..Default::default()
        };
        total.merge(&ParseStats {
            total_rows: 2,
            parsed: 1,
            skipped_points: 1,
            ..Default::default()
        });
        assert_eq!(total.total_rows, 5);
        assert_eq!(total.parsed, 3);
        assert_eq!(total.skipped(), 2);
    }
}
