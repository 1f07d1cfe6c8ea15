use thiserror::Error;

/// Why a game-log row was rejected.
///
/// Rejections are recoverable: the row is dropped and ingest continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing value for column {0}")]
    MissingField(&'static str),

    #[error("invalid points value: '{0}'")]
    InvalidPoints(String),

    #[error("points value is not finite: '{0}'")]
    NonFinitePoints(String),

    #[error("invalid game date (expected MM/DD/YYYY): '{0}'")]
    InvalidDate(String),
}

impl RecordError {
    /// Column the rejection was raised for.
    pub fn column(&self) -> &'static str {
        match self {
            RecordError::MissingField(column) => column,
            RecordError::InvalidPoints(_) | RecordError::NonFinitePoints(_) => "PTS",
            RecordError::InvalidDate(_) => "GAME DATE",
        }
    }
}
