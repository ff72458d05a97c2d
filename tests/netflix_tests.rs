//! Integration tests for top-10 TSV parsing.

use trendarr::models::media::MediaType;
use trendarr::services::netflix::parse_top10;

const HEADER: &str =
    "country_name\tcountry_iso2\tweek\tcategory\tweekly_rank\tshow_title\tseason_title";

fn row(country: &str, week: &str, category: &str, rank: u32, title: &str) -> String {
    format!("{}\tXX\t{}\t{}\t{}\t{}\t", country, week, category, rank, title)
}

fn tsv(rows: &[String]) -> String {
    let mut out = String::from(HEADER);
    for r in rows {
        out.push('\n');
        out.push_str(r);
    }
    out
}

#[test]
fn test_parses_latest_week_for_country() {
    let data = tsv(&[
        // Older week must be ignored
        row("United States", "2026-08-17", "Films", 1, "Old Movie"),
        row("United States", "2026-08-24", "Films", 2, "Beta"),
        row("United States", "2026-08-24", "Films", 1, "Alpha"),
        row("United States", "2026-08-24", "TV", 1, "Gamma"),
        // Other countries must be ignored
        row("France", "2026-08-24", "Films", 1, "Autre"),
    ]);

    let entries = parse_top10(&data, "United States").unwrap();

    // Movies first (rank order), then shows
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "Alpha");
    assert_eq!(entries[0].media_type, MediaType::Movie);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[1].title, "Beta");
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[2].title, "Gamma");
    assert_eq!(entries[2].media_type, MediaType::Tv);
    assert!(entries.iter().all(|e| e.country == "United States"));
}

#[test]
fn test_caps_each_category_at_ten() {
    let mut rows = Vec::new();
    for rank in 1..=12 {
        rows.push(row(
            "United States",
            "2026-08-24",
            "Films",
            rank,
            &format!("Movie {}", rank),
        ));
    }
    let entries = parse_top10(&tsv(&rows), "United States").unwrap();

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[9].title, "Movie 10");
}

#[test]
fn test_unparsable_rank_rows_are_skipped() {
    let data = tsv(&[
        row("United States", "2026-08-24", "Films", 1, "Alpha"),
        "United States\tXX\t2026-08-24\tFilms\tN/A\tBroken\t".to_string(),
    ]);

    let entries = parse_top10(&data, "United States").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Alpha");
}

#[test]
fn test_unknown_country_is_an_error() {
    let data = tsv(&[row("France", "2026-08-24", "Films", 1, "Autre")]);
    assert!(parse_top10(&data, "Atlantis").is_err());
}

#[test]
fn test_missing_column_is_an_error() {
    let data = "country_name\tweek\nUnited States\t2026-08-24";
    assert!(parse_top10(data, "United States").is_err());
}
