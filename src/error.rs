//! Error types for the NBA shots CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShotsError>;


/// Category of a shot filter validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterErrorKind {
    /// The raw value does not parse as its expected type.
    Format,
    /// The value parses but falls outside its valid domain.
    Range,
    /// Two individually valid fields violate an ordering invariant.
    Ordering,
}

/// Validation failure for a single shot search parameter.
///
/// Every variant names the offending field using the request parameter
/// name (`player_id`, `start_time_left`, ...), so callers can map it
/// straight back to the input that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid {field}: {value:?} ({reason})")]
    Format {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field} out of range: {value} is not within [{min}, {max}]")]
    Range {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{start_field} ({start}) must not come after {end_field} ({end})")]
    Ordering {
        start_field: &'static str,
        start: String,
        end_field: &'static str,
        end: String,
    },
}

impl FilterError {
    /// The request parameter that failed validation.
    ///
    /// Ordering errors report the start field of the pair.
    pub fn field(&self) -> &'static str {
        match self {
            FilterError::Format { field, .. } | FilterError::Range { field, .. } => field,
            FilterError::Ordering { start_field, .. } => start_field,
        }
    }

    pub fn kind(&self) -> FilterErrorKind {
        match self {
            FilterError::Format { .. } => FilterErrorKind::Format,
            FilterError::Range { .. } => FilterErrorKind::Range,
            FilterError::Ordering { .. } => FilterErrorKind::Ordering,
        }
    }
}

/// Failure to turn a `M:SS` string into seconds left in a quarter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockTimeError {
    #[error("expected M:SS with minutes 0-12 and seconds 00-59, got {0:?}")]
    Format(String),

    #[error("time left out of bounds, should be [0, 720], got {0}")]
    OutOfRange(u32),
}

impl ClockTimeError {
    /// Attach the request field name, producing a [`FilterError`].
    pub fn for_field(self, field: &'static str) -> FilterError {
        match self {
            ClockTimeError::Format(value) => FilterError::Format {
                field,
                reason: ClockTimeError::Format(value.clone()).to_string(),
                value,
            },
            ClockTimeError::OutOfRange(secs) => FilterError::Range {
                field,
                value: i64::from(secs),
                min: 0,
                max: i64::from(crate::cli::types::time::SECS_PER_QUARTER),
            },
        }
    }
}

/// Failure while reading shot CSV files.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("CSV read failed for {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{path} line {line}: invalid {column} value {value:?}")]
    InvalidValue {
        path: String,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("Unknown team abbreviation: {0}")]
    UnknownTeam(String),
}

#[derive(Error, Debug)]
pub enum ShotsError {
    #[error("Invalid shot filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Ingest failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database path not provided, {env_var} not set and no data directory available")]
    MissingDatabasePath { env_var: String },

    #[error("Database already contains data, rerun with --force to replace it")]
    DatabaseNotEmpty,

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
