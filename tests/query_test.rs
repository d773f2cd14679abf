//! Integration tests for filter validation and query building

use chrono::NaiveDate;
use nba_shots::{
    ClockTime, FilterError, FilterErrorKind, GameLocation, QueryArg, RawShotParams, ShotQuery,
    ShotSearchFilter,
};

fn raw() -> RawShotParams {
    RawShotParams::default()
}

#[test]
fn test_empty_params_select_everything() {
    let filter = ShotSearchFilter::from_raw(&raw()).unwrap();
    assert!(filter.is_empty());

    let (query, args, count) = ShotQuery::build(&filter).into_parts();
    assert_eq!(query, "SELECT id, loc_x, loc_y, shot_made, shot_type FROM shot");
    assert!(args.is_empty());
    assert_eq!(count, 0);
}

#[test]
fn test_player_team_opponent_example() {
    let params = RawShotParams {
        player_id: Some("23".to_string()),
        team_id: Some("14".to_string()),
        opposing_team_id: Some("2,1".to_string()),
        ..raw()
    };
    let filter = ShotSearchFilter::from_raw(&params).unwrap();
    let (query, args, count) = ShotQuery::build(&filter).into_parts();

    assert_eq!(
        query,
        "SELECT id, loc_x, loc_y, shot_made, shot_type FROM shot WHERE \
         player_id = $1 AND team_id = $2 AND \
         ((home_team_id = team_id AND away_team_id IN ($3, $4)) OR \
         (away_team_id = team_id AND home_team_id IN ($5, $6)))"
    );
    assert_eq!(
        args,
        vec![
            QueryArg::Int(23),
            QueryArg::Int(14),
            QueryArg::Int(1),
            QueryArg::Int(2),
            QueryArg::Int(1),
            QueryArg::Int(2),
        ]
    );
    assert_eq!(count, 6);
}

#[test]
fn test_full_filter_field_order() {
    let params = RawShotParams {
        player_id: Some("977".to_string()),
        team_id: Some("1610612747".to_string()),
        season: Some("2004,2003".to_string()),
        opposing_team_id: Some("1610612757".to_string()),
        start_game_date: Some("2003-10-28".to_string()),
        end_game_date: Some("2004-04-14".to_string()),
        game_location: Some("Away".to_string()),
        quarter: Some("4".to_string()),
        start_time_left: Some("5:00".to_string()),
        end_time_left: Some("0:00".to_string()),
    };
    let filter = ShotSearchFilter::from_raw(&params).unwrap();
    let query = ShotQuery::build(&filter);

    assert_eq!(
        query.where_conditions(),
        &[
            "player_id = $1",
            "team_id = $2",
            "season_year IN ($3, $4)",
            "((home_team_id = team_id AND away_team_id = $5) OR (away_team_id = team_id AND home_team_id = $6))",
            "game_date >= $7",
            "game_date <= $8",
            "team_id = away_team_id",
            "qtr = $9",
            "total_time_left_secs <= $10",
            "total_time_left_secs >= $11",
        ]
    );
    assert_eq!(query.arg_count(), 11);
    assert_eq!(query.args()[2], QueryArg::Int(2003));
    assert_eq!(
        query.args()[6],
        QueryArg::Date(NaiveDate::from_ymd_opt(2003, 10, 28).unwrap())
    );
    assert_eq!(query.args()[9], QueryArg::Int(300));
    assert_eq!(query.args()[10], QueryArg::Int(0));
}

#[test]
fn test_unknown_location_adds_no_term() {
    let params = RawShotParams {
        game_location: Some("neutral".to_string()),
        ..raw()
    };
    let filter = ShotSearchFilter::from_raw(&params).unwrap();
    assert_eq!(filter.game_location, None);
    assert!(ShotQuery::build(&filter).where_conditions().is_empty());
}

#[test]
fn test_end_date_alone_is_applied() {
    let params = RawShotParams {
        end_game_date: Some("2004-01-01".to_string()),
        ..raw()
    };
    let filter = ShotSearchFilter::from_raw(&params).unwrap();
    assert_eq!(ShotQuery::build(&filter).where_clause(), "game_date <= $1");
}

#[test]
fn test_validation_errors_name_the_field() {
    let cases = [
        (
            RawShotParams {
                quarter: Some("1,two".to_string()),
                ..raw()
            },
            "quarter",
            FilterErrorKind::Format,
        ),
        (
            RawShotParams {
                start_game_date: Some("04/14/2004".to_string()),
                ..raw()
            },
            "start_game_date",
            FilterErrorKind::Format,
        ),
        (
            RawShotParams {
                end_time_left: Some("12:30".to_string()),
                ..raw()
            },
            "end_time_left",
            FilterErrorKind::Range,
        ),
        (
            RawShotParams {
                start_game_date: Some("2004-02-01".to_string()),
                end_game_date: Some("2004-01-01".to_string()),
                ..raw()
            },
            "start_game_date",
            FilterErrorKind::Ordering,
        ),
        (
            RawShotParams {
                start_time_left: Some("1:00".to_string()),
                end_time_left: Some("2:00".to_string()),
                ..raw()
            },
            "start_time_left",
            FilterErrorKind::Ordering,
        ),
    ];

    for (params, field, kind) in cases {
        let err: FilterError = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.field(), field, "{err}");
        assert_eq!(err.kind(), kind, "{err}");
    }
}

#[test]
fn test_builder_matches_parsed_filter() {
    let params = RawShotParams {
        team_id: Some("14".to_string()),
        game_location: Some("home".to_string()),
        start_time_left: Some("12:00".to_string()),
        ..raw()
    };
    let parsed = ShotSearchFilter::from_raw(&params).unwrap();
    let built = ShotSearchFilter::default()
        .with_team_ids([14])
        .with_location(GameLocation::Home)
        .with_time_left(Some(ClockTime::QUARTER_START), None);

    assert_eq!(parsed, built);
    assert_eq!(
        ShotQuery::build(&built).where_clause(),
        "team_id = $1 AND team_id = home_team_id AND total_time_left_secs <= $2"
    );
}
