//! Integration tests for the SQLite store

use club_ftp::{
    storage::{MatchRow, Player},
    ClubDatabase, MatchStatRecord, Season, StatsSource,
};

fn match_row(player: &str, season: &str, minutes: u32) -> MatchRow {
    MatchRow {
        player: player.to_string(),
        season: season.to_string(),
        date: None,
        stats: MatchStatRecord {
            minutes,
            class: "MID".to_string(),
            ..Default::default()
        },
    }
}

#[test]
fn test_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("club.db");

    {
        let db = ClubDatabase::open(&path).unwrap();
        db.insert_match_stats(&match_row("Bo Lin", "2024/25", 90)).unwrap();
    }

    let db = ClubDatabase::open(&path).unwrap();
    let records = db.fetch_match_stats("Bo Lin", Some("2024/25")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].minutes, 90);
}

#[test]
fn test_season_filter_and_all_time() {
    let db = ClubDatabase::new_in_memory().unwrap();
    db.insert_match_stats(&match_row("Bo Lin", "2024/25", 90)).unwrap();
    db.insert_match_stats(&match_row("Bo Lin", "2023/24", 30)).unwrap();

    assert_eq!(db.fetch_match_stats("Bo Lin", Some("2024/25")).unwrap().len(), 1);
    assert_eq!(db.fetch_match_stats("Bo Lin", None).unwrap().len(), 2);
    assert!(db.fetch_match_stats("Bo Lin", Some("2022/23")).unwrap().is_empty());
    assert_eq!(db.seasons().unwrap(), ["2024/25", "2023/24"]);
}

#[test]
fn test_contributor_count_skips_ineligible() {
    let db = ClubDatabase::new_in_memory().unwrap();
    db.upsert_player(&Player {
        name: "Guest".to_string(),
        eligible: false,
    })
    .unwrap();
    db.insert_match_stats(&match_row("Guest", "2024/25", 90)).unwrap();
    db.insert_match_stats(&match_row("Bo Lin", "2024/25", 90)).unwrap();
    db.insert_match_stats(&match_row("Bo Lin", "2024/25", 60)).unwrap();

    assert_eq!(
        db.fetch_distinct_eligible_contributor_count(Some("2024/25")).unwrap(),
        1
    );
    assert_eq!(db.fetch_distinct_eligible_contributor_count(Some("2023/24")).unwrap(), 0);
}

#[test]
fn test_clear_all_data() {
    let db = ClubDatabase::new_in_memory().unwrap();
    db.insert_match_stats(&match_row("Bo Lin", "2024/25", 90)).unwrap();
    db.clear_all_data().unwrap();

    assert!(db.fetch_match_stats("Bo Lin", None).unwrap().is_empty());
    assert!(db.fetch_stored_totw(&Season::AllTime).unwrap().is_none());
    assert_eq!(db.fetch_distinct_eligible_contributor_count(None).unwrap(), 0);
}
