//! Integration tests for season selection.

use trendarr::core::seasons::select_season;
use trendarr::models::media::{SeasonState, SeasonStatus};

fn status(season: u16, state: SeasonState) -> SeasonStatus {
    SeasonStatus::new(season, state)
}

#[test]
fn test_first_unavailable_season_is_selected() {
    let statuses = vec![
        status(1, SeasonState::Available),
        status(2, SeasonState::RequestedOrProcessing),
        status(3, SeasonState::Unavailable),
    ];
    assert_eq!(select_season(&statuses), Some(3));
}

#[test]
fn test_all_seasons_covered_selects_nothing() {
    let statuses = vec![
        status(1, SeasonState::Available),
        status(2, SeasonState::Available),
        status(3, SeasonState::Available),
    ];
    assert_eq!(select_season(&statuses), None);

    let statuses = vec![
        status(1, SeasonState::RequestedOrProcessing),
        status(2, SeasonState::Available),
        status(3, SeasonState::RequestedOrProcessing),
    ];
    assert_eq!(select_season(&statuses), None);
}

#[test]
fn test_unknown_seasons_count_as_requestable() {
    // Nothing known about the show at all: start with season 1
    assert_eq!(select_season(&[]), Some(1));

    // Season 1 covered, season 2 unknown to the catalog
    let statuses = vec![status(1, SeasonState::Available)];
    assert_eq!(select_season(&statuses), Some(2));
}

#[test]
fn test_progression_stops_at_first_gap() {
    let statuses = vec![
        status(1, SeasonState::Unavailable),
        status(2, SeasonState::Unavailable),
    ];
    assert_eq!(select_season(&statuses), Some(1));
}

#[test]
fn test_seasons_beyond_three_are_not_attempted() {
    let statuses = vec![
        status(1, SeasonState::Available),
        status(2, SeasonState::Available),
        status(3, SeasonState::Available),
        status(4, SeasonState::Unavailable),
    ];
    assert_eq!(select_season(&statuses), None);
}
