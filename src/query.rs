//! Parameterized SQL construction for shot searches.
//!
//! [`ShotQuery`] walks a validated [`ShotSearchFilter`] in a fixed field
//! order and emits one WHERE term per populated field. Every user value
//! goes into the argument vector behind a numbered `$n` placeholder; the
//! query text only ever contains column names, operators and placeholders.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use rusqlite::types::{ToSql, ToSqlOutput};

use crate::filters::ShotSearchFilter;


/// Fixed column list of every shot search result row.
pub const SHOT_COLUMNS: &str = "id, loc_x, loc_y, shot_made, shot_type";

/// A value bound to one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryArg {
    Int(i64),
    Date(NaiveDate),
}

impl From<i64> for QueryArg {
    fn from(v: i64) -> Self {
        QueryArg::Int(v)
    }
}

impl From<u32> for QueryArg {
    fn from(v: u32) -> Self {
        QueryArg::Int(i64::from(v))
    }
}

impl From<NaiveDate> for QueryArg {
    fn from(v: NaiveDate) -> Self {
        QueryArg::Date(v)
    }
}

impl fmt::Display for QueryArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryArg::Int(v) => write!(f, "{}", v),
            QueryArg::Date(d) => write!(f, "{}", d.format(crate::filters::DATE_FORMAT)),
        }
    }
}

impl ToSql for QueryArg {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            QueryArg::Int(v) => v.to_sql(),
            QueryArg::Date(d) => d.to_sql(),
        }
    }
}

/// Working state of one shot search: WHERE terms, their arguments and the
/// placeholder counter.
///
/// Built fresh per search and consumed once. The Nth argument always
/// belongs to placeholder `$N`.
///
/// # Examples
///
/// ```rust
/// use nba_shots::{QueryArg, ShotQuery, ShotSearchFilter};
///
/// let filter = ShotSearchFilter::default()
///     .with_player_ids([23])
///     .with_team_ids([14])
///     .with_opposing_team_ids([1, 2]);
/// let query = ShotQuery::build(&filter);
///
/// assert_eq!(
///     query.where_clause(),
///     "player_id = $1 AND team_id = $2 AND \
///      ((home_team_id = team_id AND away_team_id IN ($3, $4)) OR \
///      (away_team_id = team_id AND home_team_id IN ($5, $6)))"
/// );
/// assert_eq!(query.args(), [23, 14, 1, 2, 1, 2].map(QueryArg::Int));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShotQuery {
    where_conditions: Vec<String>,
    args: Vec<QueryArg>,
    arg_count: usize,
}

impl ShotQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit every term for `filter` in the fixed field order.
    ///
    /// # Panics
    ///
    /// Panics if `filter` fails [`ShotSearchFilter::validate`]: a reversed
    /// date or clock window would otherwise silently match nothing.
    pub fn build(filter: &ShotSearchFilter) -> Self {
        if let Err(e) = filter.validate() {
            panic!("invalid filter reached the query builder: {}", e);
        }

        let mut q = Self::new();
        q.push_id_term("player_id", &filter.player_ids);
        q.push_id_term("team_id", &filter.team_ids);
        q.push_id_term("season_year", &filter.season_years);
        q.push_opponent_term(&filter.opposing_team_ids);

        if let Some(start) = filter.start_game_date {
            q.push_comparison("game_date", ">=", start);
        }
        if let Some(end) = filter.end_game_date {
            q.push_comparison("game_date", "<=", end);
        }

        if let Some(location) = filter.game_location {
            q.where_conditions
                .push(format!("team_id = {}", location.team_column()));
        }

        q.push_id_term("qtr", &filter.quarters);

        // The clock counts down: the window's start has more time left than
        // its end, so start bounds from above and end bounds from below.
        if let Some(start) = filter.start_time_left {
            q.push_comparison("total_time_left_secs", "<=", start.as_secs());
        }
        if let Some(end) = filter.end_time_left {
            q.push_comparison("total_time_left_secs", ">=", end.as_secs());
        }

        q
    }

    fn next_placeholder(&mut self, arg: QueryArg) -> String {
        self.arg_count += 1;
        self.args.push(arg);
        format!("${}", self.arg_count)
    }

    fn push_comparison(&mut self, column: &str, op: &str, arg: impl Into<QueryArg>) {
        let placeholder = self.next_placeholder(arg.into());
        self.where_conditions
            .push(format!("{} {} {}", column, op, placeholder));
    }

    /// Render `column = $n` or `column IN ($n, ...)` and bind the ids in
    /// ascending order. Returns `None` for an empty set.
    pub fn id_condition(&mut self, column: &str, ids: &BTreeSet<i64>) -> Option<String> {
        match ids.len() {
            0 => None,
            1 => {
                let id = *ids.first()?;
                let placeholder = self.next_placeholder(QueryArg::Int(id));
                Some(format!("{} = {}", column, placeholder))
            }
            _ => {
                let placeholders: Vec<String> = ids
                    .iter()
                    .map(|&id| self.next_placeholder(QueryArg::Int(id)))
                    .collect();
                Some(format!("{} IN ({})", column, placeholders.join(", ")))
            }
        }
    }

    fn push_id_term(&mut self, column: &str, ids: &BTreeSet<i64>) {
        if let Some(cond) = self.id_condition(column, ids) {
            self.where_conditions.push(cond);
        }
    }

    /// Shots by the row's team against any of `opponents`, whichever side
    /// of the court the row's team was on. Each branch binds its own copy
    /// of the opponent ids.
    fn push_opponent_term(&mut self, opponents: &BTreeSet<i64>) {
        let Some(away) = self.id_condition("away_team_id", opponents) else {
            return;
        };
        let Some(home) = self.id_condition("home_team_id", opponents) else {
            return;
        };
        self.where_conditions.push(format!(
            "((home_team_id = team_id AND {}) OR (away_team_id = team_id AND {}))",
            away, home
        ));
    }

    pub fn where_conditions(&self) -> &[String] {
        &self.where_conditions
    }

    /// The WHERE terms joined with `AND`, without the keyword. Empty when
    /// no term was emitted.
    pub fn where_clause(&self) -> String {
        self.where_conditions.join(" AND ")
    }

    /// Full query text. Omits `WHERE` entirely when there are no terms.
    pub fn query_string(&self) -> String {
        self.assert_in_lockstep();

        let mut query = format!("SELECT {} FROM shot", SHOT_COLUMNS);
        if !self.where_conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.where_clause());
        }
        query
    }

    pub fn args(&self) -> &[QueryArg] {
        &self.args
    }

    /// Number of placeholders emitted so far.
    pub fn arg_count(&self) -> usize {
        self.arg_count
    }

    /// Consume the plan into `(query text, args, placeholder count)`.
    pub fn into_parts(self) -> (String, Vec<QueryArg>, usize) {
        let query = self.query_string();
        (query, self.args, self.arg_count)
    }

    /// Placeholder drift is a programming error, never bad input.
    fn assert_in_lockstep(&self) {
        assert_eq!(
            self.arg_count,
            self.args.len(),
            "placeholder count and argument vector out of sync"
        );
    }
}

/// Count the `$n` placeholders in rendered query text.
pub fn count_placeholders(query: &str) -> usize {
    query
        .split('$')
        .skip(1)
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .count()
}
