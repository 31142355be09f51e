use crate::cli::types::Position;
use crate::scoring::types::{AggregatedPlayerScore, FtpBreakdownEntry, MatchStatRecord, StatCategory};
use crate::scoring::weights::WeightTable;


/// Points for every category for one match, in `StatCategory::ALL` order.
///
/// Zero-point categories are still emitted, so the list always has one entry
/// per category and its points sum to the match total.
pub fn ftp_breakdown(record: &MatchStatRecord, weights: &WeightTable) -> Vec<FtpBreakdownEntry> {
    let position = record.position();
    StatCategory::ALL
        .iter()
        .map(|&category| {
            let value = category.value_of(record);
            FtpBreakdownEntry {
                category,
                value,
                points: weights.points_for(category, value, position),
            }
        })
        .collect()
}

/// Unrounded total for one match.
pub fn match_points(record: &MatchStatRecord, weights: &WeightTable) -> f64 {
    ftp_breakdown(record, weights).iter().map(|e| e.points).sum()
}

/// Totals are snapped to this many units per point before rounding, so
/// float drift from thirds and halves cannot pull an x.5 total below x.5.
const ROUNDING_UNITS: f64 = 1e9;

/// Round half up: 2.5 -> 3, -2.5 -> -2.
pub fn round_half_up(total: f64) -> i64 {
    let snapped = (total * ROUNDING_UNITS).round() / ROUNDING_UNITS;
    (snapped + 0.5).floor() as i64
}

/// Sum every category of every match, then round once.
pub fn aggregate_score(records: &[MatchStatRecord], weights: &WeightTable) -> i64 {
    let total: f64 = records.iter().map(|r| match_points(r, weights)).sum();
    round_half_up(total)
}

pub fn aggregate_player(
    name: &str,
    position: Position,
    records: &[MatchStatRecord],
    weights: &WeightTable,
) -> AggregatedPlayerScore {
    AggregatedPlayerScore {
        name: name.to_string(),
        position,
        ftp_score: aggregate_score(records, weights),
    }
}

/// Per-category totals across many matches, unrounded.
///
/// `round_half_up` of the summed points equals `aggregate_score` over the
/// same records.
pub fn season_breakdown(records: &[MatchStatRecord], weights: &WeightTable) -> Vec<FtpBreakdownEntry> {
    let mut totals: Vec<FtpBreakdownEntry> = StatCategory::ALL
        .iter()
        .map(|&category| FtpBreakdownEntry {
            category,
            value: 0.0,
            points: 0.0,
        })
        .collect();

    for record in records {
        for (total, entry) in totals.iter_mut().zip(ftp_breakdown(record, weights)) {
            total.value += entry.value;
            total.points += entry.points;
        }
    }
    totals
}
