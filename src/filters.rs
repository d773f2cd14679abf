//! Shot search filters.
//!
//! [`RawShotParams`] carries the untrusted string inputs exactly as they
//! arrive (query-string values or CLI flags). [`ShotSearchFilter::from_raw`]
//! parses and validates them into a [`ShotSearchFilter`], which is the only
//! input the query builder accepts.
//!
//! Validation runs in two phases: every field is parsed on its own first
//! (format and range errors), then the cross-field ordering invariants are
//! checked (date range and clock window).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{location::GameLocation, time::ClockTime},
    error::FilterError,
};

#[cfg(test)]
mod tests;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated shot search parameters.
///
/// Field names match the request parameter names. Multi-valued fields are
/// comma-joined (`"1,2,3"`), dates are `YYYY-MM-DD`, clock times are `M:SS`.
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShotParams {
    pub player_id: Option<String>,
    pub team_id: Option<String>,
    pub season: Option<String>,
    pub opposing_team_id: Option<String>,
    pub start_game_date: Option<String>,
    pub end_game_date: Option<String>,
    pub game_location: Option<String>,
    pub quarter: Option<String>,
    pub start_time_left: Option<String>,
    pub end_time_left: Option<String>,
}

/// Validated shot search filter.
///
/// Every field is optional and independently settable. Id sets are kept
/// ordered so the rendered query text is reproducible.
///
/// # Examples
///
/// ```rust
/// use nba_shots::{RawShotParams, ShotSearchFilter};
///
/// let raw = RawShotParams {
///     player_id: Some("23".to_string()),
///     opposing_team_id: Some("2,1".to_string()),
///     ..RawShotParams::default()
/// };
/// let filter = ShotSearchFilter::from_raw(&raw).unwrap();
/// assert_eq!(filter.opposing_team_ids.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotSearchFilter {
    pub player_ids: BTreeSet<i64>,
    pub team_ids: BTreeSet<i64>,
    pub season_years: BTreeSet<i64>,
    pub opposing_team_ids: BTreeSet<i64>,
    pub start_game_date: Option<NaiveDate>,
    pub end_game_date: Option<NaiveDate>,
    pub game_location: Option<GameLocation>,
    pub quarters: BTreeSet<i64>,
    pub start_time_left: Option<ClockTime>,
    pub end_time_left: Option<ClockTime>,
}

impl ShotSearchFilter {
    /// Parse and validate raw parameters.
    ///
    /// Fails on the first malformed field; no partially-populated filter is
    /// ever returned.
    pub fn from_raw(raw: &RawShotParams) -> Result<Self, FilterError> {
        let filter = Self {
            player_ids: parse_id_list("player_id", raw.player_id.as_deref())?,
            team_ids: parse_id_list("team_id", raw.team_id.as_deref())?,
            season_years: parse_id_list("season", raw.season.as_deref())?,
            opposing_team_ids: parse_id_list(
                "opposing_team_id",
                raw.opposing_team_id.as_deref(),
            )?,
            start_game_date: parse_date("start_game_date", raw.start_game_date.as_deref())?,
            end_game_date: parse_date("end_game_date", raw.end_game_date.as_deref())?,
            game_location: non_empty(raw.game_location.as_deref())
                .and_then(GameLocation::from_token),
            quarters: parse_id_list("quarter", raw.quarter.as_deref())?,
            start_time_left: parse_clock("start_time_left", raw.start_time_left.as_deref())?,
            end_time_left: parse_clock("end_time_left", raw.end_time_left.as_deref())?,
        };

        filter.validate()?;
        Ok(filter)
    }

    /// Check the cross-field invariants.
    ///
    /// Start date must not be after end date, and the clock window's end
    /// must not have more time left than its start.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let (Some(start), Some(end)) = (self.start_game_date, self.end_game_date) {
            if start > end {
                return Err(FilterError::Ordering {
                    start_field: "start_game_date",
                    start: start.format(DATE_FORMAT).to_string(),
                    end_field: "end_game_date",
                    end: end.format(DATE_FORMAT).to_string(),
                });
            }
        }

        if let (Some(start), Some(end)) = (self.start_time_left, self.end_time_left) {
            if end > start {
                return Err(FilterError::Ordering {
                    start_field: "start_time_left",
                    start: start.to_string(),
                    end_field: "end_time_left",
                    end: end.to_string(),
                });
            }
        }

        Ok(())
    }

    /// True when no field is set, i.e. the filter matches every shot.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn with_player_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.player_ids.extend(ids);
        self
    }

    pub fn with_team_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.team_ids.extend(ids);
        self
    }

    pub fn with_season_years(mut self, years: impl IntoIterator<Item = i64>) -> Self {
        self.season_years.extend(years);
        self
    }

    pub fn with_opposing_team_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.opposing_team_ids.extend(ids);
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_game_date = start;
        self.end_game_date = end;
        self
    }

    pub fn with_location(mut self, location: GameLocation) -> Self {
        self.game_location = Some(location);
        self
    }

    pub fn with_quarters(mut self, quarters: impl IntoIterator<Item = i64>) -> Self {
        self.quarters.extend(quarters);
        self
    }

    pub fn with_time_left(mut self, start: Option<ClockTime>, end: Option<ClockTime>) -> Self {
        self.start_time_left = start;
        self.end_time_left = end;
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a comma-separated integer list. One bad token fails the field.
pub fn parse_id_list(field: &'static str, value: Option<&str>) -> Result<BTreeSet<i64>, FilterError> {
    let Some(value) = non_empty(value) else {
        return Ok(BTreeSet::new());
    };

    value
        .split(',')
        .map(|token| {
            token.trim().parse::<i64>().map_err(|e| FilterError::Format {
                field,
                value: value.to_string(),
                reason: format!("{:?} is not an integer: {}", token, e),
            })
        })
        .collect()
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, FilterError> {
    non_empty(value)
        .map(|v| {
            NaiveDate::parse_from_str(v.trim(), DATE_FORMAT).map_err(|e| FilterError::Format {
                field,
                value: v.to_string(),
                reason: format!("expected YYYY-MM-DD: {}", e),
            })
        })
        .transpose()
}

fn parse_clock(field: &'static str, value: Option<&str>) -> Result<Option<ClockTime>, FilterError> {
    non_empty(value)
        .map(|v| v.trim().parse::<ClockTime>().map_err(|e| e.for_field(field)))
        .transpose()
}
