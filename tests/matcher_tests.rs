//! Integration tests for title matching.

use chrono::NaiveDate;
use trendarr::core::matcher::{normalize_title, pick_candidate};
use trendarr::models::media::{MatchCandidate, MediaType};

fn candidate(id: u64, media_type: MediaType, title: &str, date: Option<&str>) -> MatchCandidate {
    MatchCandidate {
        catalog_id: id,
        media_type,
        title: title.to_string(),
        release_date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
    }
}

#[test]
fn test_normalize_title() {
    assert_eq!(normalize_title("The  Crown"), "the crown");
    assert_eq!(normalize_title("  Stranger\tThings  "), "stranger things");
    assert_eq!(normalize_title("WEDNESDAY"), "wednesday");
}

#[test]
fn test_exact_match_beats_newer_fuzzy_candidate() {
    let candidates = vec![
        candidate(10, MediaType::Movie, "Alpha Returns", Some("2024-06-01")),
        candidate(20, MediaType::Movie, "Alpha", Some("2010-01-01")),
    ];

    let picked = pick_candidate("Alpha", MediaType::Movie, &candidates).unwrap();
    assert_eq!(picked.catalog_id, 20);
}

#[test]
fn test_exact_match_is_case_and_whitespace_insensitive() {
    let candidates = vec![candidate(
        10,
        MediaType::Movie,
        "THE   GRAY MAN",
        Some("2022-07-15"),
    )];

    let picked = pick_candidate("The Gray Man", MediaType::Movie, &candidates).unwrap();
    assert_eq!(picked.catalog_id, 10);
}

#[test]
fn test_fallback_picks_most_recent_release() {
    let candidates = vec![
        candidate(10, MediaType::Movie, "Alpha: Part One", Some("2019-05-01")),
        candidate(20, MediaType::Movie, "Alpha: Part Two", Some("2023-05-01")),
        candidate(30, MediaType::Movie, "Alpha: Origins", None),
    ];

    let picked = pick_candidate("Alpha", MediaType::Movie, &candidates).unwrap();
    assert_eq!(picked.catalog_id, 20);
}

#[test]
fn test_duplicate_titles_tie_break_on_date_then_id() {
    // Remake is newer, so it wins the exact-title tie
    let candidates = vec![
        candidate(10, MediaType::Movie, "Alpha", Some("1990-01-01")),
        candidate(20, MediaType::Movie, "Alpha", Some("2021-01-01")),
    ];
    let picked = pick_candidate("Alpha", MediaType::Movie, &candidates).unwrap();
    assert_eq!(picked.catalog_id, 20);

    // Same date: lower catalog id wins, regardless of input order
    let candidates = vec![
        candidate(50, MediaType::Movie, "Alpha", Some("2021-01-01")),
        candidate(40, MediaType::Movie, "Alpha", Some("2021-01-01")),
    ];
    let picked = pick_candidate("Alpha", MediaType::Movie, &candidates).unwrap();
    assert_eq!(picked.catalog_id, 40);
}

#[test]
fn test_wrong_media_type_is_ignored() {
    let candidates = vec![
        candidate(10, MediaType::Tv, "Alpha", Some("2023-01-01")),
        candidate(20, MediaType::Movie, "Alpha Adjacent", Some("2015-01-01")),
    ];

    let picked = pick_candidate("Alpha", MediaType::Movie, &candidates).unwrap();
    assert_eq!(picked.catalog_id, 20);

    let tv_only = vec![candidate(10, MediaType::Tv, "Alpha", Some("2023-01-01"))];
    assert!(pick_candidate("Alpha", MediaType::Movie, &tv_only).is_none());
}

#[test]
fn test_empty_candidates_yield_no_match() {
    assert!(pick_candidate("Alpha", MediaType::Movie, &[]).is_none());
}
