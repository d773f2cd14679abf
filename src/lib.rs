//! NBA Shot Search Library
//!
//! Turns loosely-typed shot search parameters into a validated filter and a
//! parameterized SQL query over a local SQLite store of NBA shot chart data.
//!
//! ## Features
//!
//! - **Filter Validation**: Comma separated id lists, ISO dates, home/away
//!   location and `M:SS` clock windows, rejected with field-specific errors
//! - **Query Building**: One WHERE term per populated field, every value bound
//!   through a numbered `$n` placeholder
//! - **CSV Ingest**: Parallel parsing of season shot files into normalized
//!   player, team, season, game and shot tables
//! - **Lookups**: Players, teams, seasons and games by id or listing
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_shots::{RawShotParams, ShotQuery, ShotSearchFilter};
//!
//! # fn example() -> nba_shots::Result<()> {
//! let raw = RawShotParams {
//!     player_id: Some("977".to_string()),
//!     start_time_left: Some("5:00".to_string()),
//!     ..Default::default()
//! };
//!
//! let filter = ShotSearchFilter::from_raw(&raw)?;
//! let query = ShotQuery::build(&filter);
//! assert_eq!(query.where_clause(), "player_id = $1 AND total_time_left_secs <= $2");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point every command at one database without passing `--db`:
//! ```bash
//! export NBA_SHOTS_DB=/data/nba/shots.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod filters;
pub mod ingest;
pub mod query;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{GameId, PlayerId, TeamId},
    location::GameLocation,
    time::ClockTime,
};
pub use error::{ClockTimeError, FilterError, FilterErrorKind, Result, ShotsError};
pub use filters::{RawShotParams, ShotSearchFilter};
pub use query::{QueryArg, ShotQuery};
pub use storage::schema::DB_PATH_ENV_VAR;
