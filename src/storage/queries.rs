//! Basic database query operations

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::{models::*, schema::ClubDatabase, source::StatsSource};
use crate::cli::types::Season;
use crate::scoring::types::MatchStatRecord;
use crate::totw::types::StoredTotw;
use crate::Result;

const MATCH_COLUMNS: &str = "minutes, man_of_the_match, goals, assists, goals_conceded,
     clean_sheets, yellow_cards, red_cards, saves, own_goals, penalties_scored,
     penalties_missed, penalties_conceded, penalties_saved, class";

impl ClubDatabase {
    /// Insert or update a player's eligibility
    pub fn upsert_player(&self, player: &Player) -> Result<()> {
        write_player(&*self.conn()?, player)
    }

    /// Insert one match row, registering the player as eligible if unknown.
    /// Returns the new row id.
    pub fn insert_match_stats(&self, row: &MatchRow) -> Result<i64> {
        let conn = self.conn()?;
        write_match_row(&conn, row)?;
        Ok(conn.last_insert_rowid())
    }

    /// Replace the stored team (formation, cached total and every slot) for a season
    pub fn upsert_totw(&self, stored: &StoredTotw) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        write_totw(&tx, stored)?;
        tx.commit()?;
        Ok(())
    }

    /// Write a whole seed document in one transaction.
    ///
    /// The seed is authoritative for every (player, season) it carries
    /// matches for: those rows are replaced, so importing the same document
    /// twice leaves the store unchanged. Any failure rolls the import back.
    pub fn import_seed(&self, seed: &SeedDocument) -> Result<ImportSummary> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        for player in &seed.players {
            write_player(&tx, player)?;
        }

        let scopes: BTreeSet<(&str, &str)> = seed
            .matches
            .iter()
            .map(|row| (row.player.as_str(), row.season.as_str()))
            .collect();
        for (player, season) in &scopes {
            tx.execute(
                "DELETE FROM match_stats WHERE player_name = ?1 AND season = ?2",
                params![player, season],
            )?;
        }
        for row in &seed.matches {
            write_match_row(&tx, row)?;
        }

        for stored in &seed.totw {
            write_totw(&tx, stored)?;
        }
        tx.commit()?;

        debug!(
            players = seed.players.len(),
            matches = seed.matches.len(),
            replaced_scopes = scopes.len(),
            totw = seed.totw.len(),
            "imported seed document"
        );
        Ok(ImportSummary {
            players: seed.players.len(),
            matches: seed.matches.len(),
            totw: seed.totw.len(),
        })
    }

    /// Clear all data from the database
    pub fn clear_all_data(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM totw_slots", [])?;
        conn.execute("DELETE FROM totw", [])?;
        conn.execute("DELETE FROM match_stats", [])?;
        conn.execute("DELETE FROM players", [])?;
        Ok(())
    }

    /// Seasons with any match data, newest label first
    pub fn seasons(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT DISTINCT season FROM match_stats ORDER BY season DESC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut seasons = Vec::new();
        for row in rows {
            seasons.push(row?);
        }
        Ok(seasons)
    }

    /// Helper to convert database row to MatchStatRecord
    pub(crate) fn row_to_match_record(row: &Row) -> rusqlite::Result<MatchStatRecord> {
        Ok(MatchStatRecord {
            minutes: row.get(0)?,
            man_of_the_match: row.get(1)?,
            goals: row.get(2)?,
            assists: row.get(3)?,
            goals_conceded: row.get(4)?,
            clean_sheets: row.get(5)?,
            yellow_cards: row.get(6)?,
            red_cards: row.get(7)?,
            saves: row.get(8)?,
            own_goals: row.get(9)?,
            penalties_scored: row.get(10)?,
            penalties_missed: row.get(11)?,
            penalties_conceded: row.get(12)?,
            penalties_saved: row.get(13)?,
            class: row.get(14)?,
        })
    }
}

fn write_player(conn: &Connection, player: &Player) -> Result<()> {
    conn.execute(
        "INSERT INTO players (name, eligible) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET eligible = excluded.eligible",
        params![player.name, player.eligible],
    )?;
    Ok(())
}

fn write_match_row(conn: &Connection, row: &MatchRow) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO players (name, eligible) VALUES (?1, 1)",
        params![row.player],
    )?;

    let s = &row.stats;
    conn.execute(
        &format!(
            "INSERT INTO match_stats (player_name, season, match_date, {MATCH_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)"
        ),
        params![
            row.player,
            row.season,
            row.date,
            s.minutes,
            s.man_of_the_match,
            s.goals,
            s.assists,
            s.goals_conceded,
            s.clean_sheets,
            s.yellow_cards,
            s.red_cards,
            s.saves,
            s.own_goals,
            s.penalties_scored,
            s.penalties_missed,
            s.penalties_conceded,
            s.penalties_saved,
            s.class,
        ],
    )?;
    Ok(())
}

fn write_totw(conn: &Connection, stored: &StoredTotw) -> Result<()> {
    let season = stored.season.as_str();
    conn.execute(
        "INSERT INTO totw (season, formation, cached_score) VALUES (?1, ?2, ?3)
         ON CONFLICT(season) DO UPDATE SET
            formation = excluded.formation,
            cached_score = excluded.cached_score",
        params![season, stored.formation, stored.cached_score],
    )?;
    conn.execute("DELETE FROM totw_slots WHERE season = ?1", params![season])?;
    for (slot, player) in &stored.slot_assignments {
        conn.execute(
            "INSERT INTO totw_slots (season, slot, player_name) VALUES (?1, ?2, ?3)",
            params![season, slot, player],
        )?;
    }
    Ok(())
}

impl StatsSource for ClubDatabase {
    fn fetch_stored_totw(&self, season: &Season) -> Result<Option<StoredTotw>> {
        self.with_reader(|conn| {
            let header: Option<(String, Option<i64>)> = conn
                .query_row(
                    "SELECT formation, cached_score FROM totw WHERE season = ?1",
                    params![season.as_str()],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let Some((formation, cached_score)) = header else {
                return Ok(None);
            };

            let mut stmt =
                conn.prepare("SELECT slot, player_name FROM totw_slots WHERE season = ?1")?;
            let rows = stmt.query_map(params![season.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;

            let mut slot_assignments = BTreeMap::new();
            for row in rows {
                let (slot, player) = row?;
                slot_assignments.insert(slot, player);
            }

            Ok(Some(StoredTotw {
                season: season.clone(),
                formation,
                slot_assignments,
                cached_score,
            }))
        })
    }

    fn fetch_match_stats(&self, player: &str, season: Option<&str>) -> Result<Vec<MatchStatRecord>> {
        self.with_reader(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MATCH_COLUMNS} FROM match_stats
                 WHERE player_name = ?1 AND (?2 IS NULL OR season = ?2)
                 ORDER BY match_date, id"
            ))?;
            let rows = stmt.query_map(params![player, season], Self::row_to_match_record)?;

            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
    }

    fn fetch_distinct_eligible_contributor_count(&self, season: Option<&str>) -> Result<u32> {
        self.with_reader(|conn| {
            let count = conn.query_row(
                "SELECT COUNT(DISTINCT m.player_name)
                 FROM match_stats m
                 JOIN players p ON p.name = m.player_name
                 WHERE p.eligible = 1 AND (?1 IS NULL OR m.season = ?1)",
                params![season],
                |row| row.get(0),
            )?;
            Ok(count)
        })
    }
}
