//! Integration tests for team of the week assembly over SQLite

use club_ftp::{
    compute_totw,
    storage::SeedDocument,
    totw::{StarMan, TotwAssembler},
    ClubDatabase, Position, Season, StatsSource, WeightTable,
};

const SEED: &str = r#"{
    "players": [
        { "name": "Trialist", "eligible": false }
    ],
    "matches": [
        { "player": "Chris Dale", "season": "2024/25", "date": "2024-09-07",
          "stats": { "min": 90, "cls": 1, "saves": 6, "class": "Goalkeeper" } },
        { "player": "Ada Kerr", "season": "2024/25", "date": "2024-09-07",
          "stats": { "min": 90, "g": 1, "conc": 2, "class": "DEF" } },
        { "player": "Bo Lin", "season": "2024/25", "date": "2024-09-07",
          "stats": { "min": 75, "a": 2, "y": 1, "mom": 1, "class": "MID" } },
        { "player": "Hal Munro", "season": "2024/25", "date": "2024-09-07",
          "stats": { "min": 90, "g": 2, "class": "FWD" } },
        { "player": "Hal Munro", "season": "2024/25", "date": "2024-09-14",
          "stats": { "min": 45, "class": "FWD" } },
        { "player": "Hal Munro", "season": "2023/24", "date": "2024-03-02",
          "stats": { "min": 90, "g": 1, "class": "FWD" } },
        { "player": "Finn Lowe", "season": "2024/25", "date": "2024-09-14",
          "stats": { "min": 20, "pm": 1, "class": "FWD" } },
        { "player": "Trialist", "season": "2024/25", "date": "2024-09-14",
          "stats": { "min": 90, "g": 3, "class": "FWD" } }
    ],
    "totw": [
        { "season": "2024/25", "formation": "4-4-2", "cachedScore": 999,
          "slotAssignments": {
              "GK": "Chris Dale", "DEF1": "Ada Kerr", "DEF2": "",
              "MID1": "Bo Lin", "FWD1": "Hal Munro", "FWD2": "Finn Lowe"
          } },
        { "season": "All Time", "formation": "3-5-2",
          "slotAssignments": { "FWD1": "Hal Munro", "GK": "Chris Dale" } }
    ]
}"#;

fn seeded_db() -> ClubDatabase {
    let db = ClubDatabase::new_in_memory().unwrap();
    let seed: SeedDocument = serde_json::from_str(SEED).unwrap();
    db.import_seed(&seed).unwrap();
    db
}

#[test]
fn test_season_team_end_to_end() {
    let db = seeded_db();
    let response = compute_totw(&db, &WeightTable::default(), &Season::new("2024/25")).unwrap();

    let slots: Vec<&str> = response.players.iter().map(|p| p.slot.as_str()).collect();
    assert_eq!(slots, ["GK", "DEF1", "MID1", "FWD1", "FWD2"]);

    let scores: Vec<i64> = response.players.iter().map(|p| p.ftp_score).collect();
    // GK 2+4+2, DEF 2+6-1, MID 2+6-1+3, FWD (2+8)+(1), FWD 1-2
    assert_eq!(scores, [8, 7, 10, 11, -1]);
    assert_eq!(response.players[0].position, Position::GK);

    let data = response.totw_data.unwrap();
    assert_eq!(data.totw_score, 35);
    assert_eq!(data.formation, "4-4-2");
    assert_eq!(
        data.star_man,
        Some(StarMan {
            name: "Hal Munro".to_string(),
            score: 11
        })
    );
    // Trialist is ineligible
    assert_eq!(data.player_count, 5);
}

#[test]
fn test_all_time_team_spans_seasons() {
    let db = seeded_db();
    let response = compute_totw(&db, &WeightTable::default(), &Season::AllTime).unwrap();

    let hal = response.players.iter().find(|p| p.name == "Hal Munro").unwrap();
    assert_eq!(hal.slot, "FWD1");
    assert_eq!(hal.ftp_score, 17);

    let data = response.totw_data.unwrap();
    assert_eq!(data.season, Season::AllTime);
    assert_eq!(data.totw_score, 25);
    assert_eq!(data.player_count, 5);
}

#[test]
fn test_missing_season_is_empty_response() {
    let db = seeded_db();
    let response = compute_totw(&db, &WeightTable::default(), &Season::new("1999/00")).unwrap();

    assert!(response.is_empty());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({ "totwData": null, "players": [] })
    );
}

#[test]
fn test_single_fetch_matches_default_concurrency() {
    let db = seeded_db();
    let weights = WeightTable::default();
    let season = Season::new("2024/25");

    let sequential = TotwAssembler::new(&db, &weights, 1).unwrap().compute(&season).unwrap();
    let parallel = TotwAssembler::new(&db, &weights, 8).unwrap().compute(&season).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_response_json_shape() {
    let db = seeded_db();
    let response = compute_totw(&db, &WeightTable::default(), &Season::new("2024/25")).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["totwData"]["totwScore"], 35);
    assert_eq!(json["totwData"]["starMan"]["name"], "Hal Munro");
    assert_eq!(json["totwData"]["playerCount"], 5);
    assert_eq!(json["players"][0]["slot"], "GK");
    assert_eq!(json["players"][0]["ftpScore"], 8);
}

#[test]
fn test_reimport_replaces_team() {
    let db = seeded_db();
    let mut seed: SeedDocument = serde_json::from_str(SEED).unwrap();
    seed.players.clear();
    seed.matches.clear();
    seed.totw.truncate(1);
    seed.totw[0].slot_assignments.remove("FWD2");
    db.import_seed(&seed).unwrap();

    let stored = db.fetch_stored_totw(&Season::new("2024/25")).unwrap().unwrap();
    assert_eq!(stored.player_for("FWD2"), None);

    let response = compute_totw(&db, &WeightTable::default(), &Season::new("2024/25")).unwrap();
    assert_eq!(response.totw_data.unwrap().totw_score, 36);
}

#[test]
fn test_importing_twice_keeps_scores() {
    let db = seeded_db();
    let seed: SeedDocument = serde_json::from_str(SEED).unwrap();
    db.import_seed(&seed).unwrap();

    let response = compute_totw(&db, &WeightTable::default(), &Season::new("2024/25")).unwrap();
    let scores: Vec<i64> = response.players.iter().map(|p| p.ftp_score).collect();
    assert_eq!(scores, [8, 7, 10, 11, -1]);
    assert_eq!(response.totw_data.unwrap().totw_score, 35);
}

#[test]
fn test_on_disk_store_matches_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let db = ClubDatabase::open(&dir.path().join("club.db")).unwrap();
    let seed: SeedDocument = serde_json::from_str(SEED).unwrap();
    db.import_seed(&seed).unwrap();

    let weights = WeightTable::default();
    let season = Season::new("2024/25");
    let on_disk = TotwAssembler::new(&db, &weights, 4).unwrap().compute(&season).unwrap();
    let in_memory = compute_totw(&seeded_db(), &weights, &season).unwrap();

    assert_eq!(on_disk, in_memory);
    assert!(db.idle_reader_count().unwrap() >= 1);
}
