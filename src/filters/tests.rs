//! Unit tests for shot filter parsing and validation

use super::*;
use crate::error::FilterErrorKind;

fn raw() -> RawShotParams {
    RawShotParams::default()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
mod id_list_tests {
    use super::*;

    #[test]
    fn test_empty_params_give_empty_filter() {
        let filter = ShotSearchFilter::from_raw(&raw()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter, ShotSearchFilter::default());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let params = RawShotParams {
            player_id: Some(String::new()),
            start_game_date: Some("".to_string()),
            start_time_left: Some(" ".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_id_lists_are_deduplicated_and_sorted() {
        let params = RawShotParams {
            player_id: Some("30, 23,23,2544".to_string()),
            quarter: Some("4,1".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert_eq!(
            filter.player_ids.into_iter().collect::<Vec<_>>(),
            vec![23, 30, 2544]
        );
        assert_eq!(filter.quarters.into_iter().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_bad_token_fails_whole_field() {
        let params = RawShotParams {
            team_id: Some("1610612747,lakers".to_string()),
            ..raw()
        };
        let err = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.kind(), FilterErrorKind::Format);
        assert_eq!(err.field(), "team_id");
    }

    #[test]
    fn test_trailing_comma_is_format_error() {
        let params = RawShotParams {
            season: Some("2023,".to_string()),
            ..raw()
        };
        let err = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.field(), "season");
        assert_eq!(err.kind(), FilterErrorKind::Format);
    }

    #[test]
    fn test_opponent_ids_parsed() {
        let params = RawShotParams {
            opposing_team_id: Some("1610612738".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert!(filter.opposing_team_ids.contains(&1610612738));
    }
}

#[cfg(test)]
mod date_tests {
    use super::*;

    #[test]
    fn test_single_bound_leaves_other_unset() {
        let params = RawShotParams {
            end_game_date: Some("2024-01-01".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert_eq!(filter.start_game_date, None);
        assert_eq!(filter.end_game_date, Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_invalid_date_format() {
        let params = RawShotParams {
            start_game_date: Some("03-01-2024".to_string()),
            ..raw()
        };
        let err = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.field(), "start_game_date");
        assert_eq!(err.kind(), FilterErrorKind::Format);
    }

    #[test]
    fn test_start_after_end_rejected() {
        let params = RawShotParams {
            start_game_date: Some("2024-03-01".to_string()),
            end_game_date: Some("2024-01-01".to_string()),
            ..raw()
        };
        let err = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.kind(), FilterErrorKind::Ordering);
        assert_eq!(err.field(), "start_game_date");
        assert!(err.to_string().contains("2024-03-01"));
    }

    #[test]
    fn test_equal_dates_accepted() {
        let params = RawShotParams {
            start_game_date: Some("2024-03-01".to_string()),
            end_game_date: Some("2024-03-01".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert_eq!(filter.start_game_date, filter.end_game_date);
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_location_case_normalized() {
        let params = RawShotParams {
            game_location: Some("HoMe".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert_eq!(filter.game_location, Some(GameLocation::Home));
    }

    #[test]
    fn test_unknown_location_ignored() {
        let params = RawShotParams {
            game_location: Some("neutral".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert_eq!(filter.game_location, None);
    }
}

#[cfg(test)]
mod clock_tests {
    use super::*;

    #[test]
    fn test_clock_window_parsed() {
        let params = RawShotParams {
            start_time_left: Some("10:00".to_string()),
            end_time_left: Some("0:30".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert_eq!(filter.start_time_left.map(|t| t.as_secs()), Some(600));
        assert_eq!(filter.end_time_left.map(|t| t.as_secs()), Some(30));
    }

    #[test]
    fn test_zero_is_distinct_from_absent() {
        let params = RawShotParams {
            end_time_left: Some("0:00".to_string()),
            ..raw()
        };
        let filter = ShotSearchFilter::from_raw(&params).unwrap();
        assert_eq!(filter.start_time_left, None);
        assert_eq!(filter.end_time_left, Some(ClockTime::BUZZER));
    }

    #[test]
    fn test_clock_range_error_names_field() {
        let params = RawShotParams {
            start_time_left: Some("12:01".to_string()),
            ..raw()
        };
        let err = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.kind(), FilterErrorKind::Range);
        assert_eq!(err.field(), "start_time_left");
        assert_eq!(
            err,
            FilterError::Range {
                field: "start_time_left",
                value: 721,
                min: 0,
                max: 720,
            }
        );
    }

    #[test]
    fn test_clock_format_error_names_field() {
        let params = RawShotParams {
            end_time_left: Some("5:7".to_string()),
            ..raw()
        };
        let err = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.kind(), FilterErrorKind::Format);
        assert_eq!(err.field(), "end_time_left");
    }

    #[test]
    fn test_end_greater_than_start_rejected() {
        let params = RawShotParams {
            start_time_left: Some("0:30".to_string()),
            end_time_left: Some("10:00".to_string()),
            ..raw()
        };
        let err = ShotSearchFilter::from_raw(&params).unwrap_err();
        assert_eq!(err.kind(), FilterErrorKind::Ordering);
        assert_eq!(err.field(), "start_time_left");
    }

    #[test]
    fn test_equal_clock_bounds_accepted() {
        let params = RawShotParams {
            start_time_left: Some("2:00".to_string()),
            end_time_left: Some("2:00".to_string()),
            ..raw()
        };
        assert!(ShotSearchFilter::from_raw(&params).is_ok());
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_builder_validate_catches_reversed_window() {
        let filter = ShotSearchFilter::default().with_time_left(
            Some(ClockTime::from_secs(30).unwrap()),
            Some(ClockTime::from_secs(600).unwrap()),
        );
        assert!(filter.validate().is_err());

        let filter = ShotSearchFilter::default().with_time_left(
            Some(ClockTime::from_secs(600).unwrap()),
            Some(ClockTime::from_secs(30).unwrap()),
        );
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_builder_validate_catches_reversed_dates() {
        let filter = ShotSearchFilter::default()
            .with_date_range(Some(date(2024, 3, 1)), Some(date(2024, 1, 1)));
        assert_eq!(
            filter.validate().unwrap_err().kind(),
            FilterErrorKind::Ordering
        );
    }

    #[test]
    fn test_builder_is_not_empty() {
        let filter = ShotSearchFilter::default().with_location(GameLocation::Away);
        assert!(!filter.is_empty());
    }
}
