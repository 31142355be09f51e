use crate::cli::types::Position;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;


/// Counts arrive as numbers, numeric strings, null, or not at all. Numbers
/// and strings share one rule: read as `f64`, round to the nearest whole
/// count. Anything negative, non-finite or unparseable becomes 0.
fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let value = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.map(count_from_f64).unwrap_or(0))
}

fn count_from_f64(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX
    value.round() as u32
}

/// Man of the match is set only by a literal `1` or `true`.
fn de_mom_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        _ => false,
    })
}

/// One player's statistics for one match.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatRecord {
    #[serde(alias = "min", default, deserialize_with = "de_count")]
    pub minutes: u32,
    #[serde(alias = "mom", default, deserialize_with = "de_mom_flag")]
    pub man_of_the_match: bool,
    #[serde(alias = "g", default, deserialize_with = "de_count")]
    pub goals: u32,
    #[serde(alias = "a", default, deserialize_with = "de_count")]
    pub assists: u32,
    #[serde(alias = "conc", default, deserialize_with = "de_count")]
    pub goals_conceded: u32,
    #[serde(alias = "cls", default, deserialize_with = "de_count")]
    pub clean_sheets: u32,
    #[serde(alias = "y", default, deserialize_with = "de_count")]
    pub yellow_cards: u32,
    #[serde(alias = "r", default, deserialize_with = "de_count")]
    pub red_cards: u32,
    #[serde(default, deserialize_with = "de_count")]
    pub saves: u32,
    #[serde(alias = "og", default, deserialize_with = "de_count")]
    pub own_goals: u32,
    #[serde(alias = "psc", default, deserialize_with = "de_count")]
    pub penalties_scored: u32,
    #[serde(alias = "pm", default, deserialize_with = "de_count")]
    pub penalties_missed: u32,
    #[serde(alias = "pco", default, deserialize_with = "de_count")]
    pub penalties_conceded: u32,
    #[serde(alias = "psv", default, deserialize_with = "de_count")]
    pub penalties_saved: u32,
    /// Free-form match position, e.g. "GK" or "Defender".
    #[serde(default)]
    pub class: String,
}

impl MatchStatRecord {
    pub fn position(&self) -> Position {
        Position::from_class(&self.class)
    }
}

/// Every scoring category, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatCategory {
    ManOfTheMatch,
    MinutesPlayed,
    GoalsScored,
    Assists,
    CleanSheets,
    GoalsConceded,
    YellowCards,
    RedCards,
    OwnGoals,
    PenaltiesMissed,
    PenaltiesScored,
    Saves,
    PenaltiesSaved,
}

impl StatCategory {
    pub const ALL: [StatCategory; 13] = [
        StatCategory::ManOfTheMatch,
        StatCategory::MinutesPlayed,
        StatCategory::GoalsScored,
        StatCategory::Assists,
        StatCategory::CleanSheets,
        StatCategory::GoalsConceded,
        StatCategory::YellowCards,
        StatCategory::RedCards,
        StatCategory::OwnGoals,
        StatCategory::PenaltiesMissed,
        StatCategory::PenaltiesScored,
        StatCategory::Saves,
        StatCategory::PenaltiesSaved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::ManOfTheMatch => "Man of the Match",
            StatCategory::MinutesPlayed => "Minutes played",
            StatCategory::GoalsScored => "Goals scored",
            StatCategory::Assists => "Assists",
            StatCategory::CleanSheets => "Clean Sheets",
            StatCategory::GoalsConceded => "Goals Conceded",
            StatCategory::YellowCards => "Yellow Cards",
            StatCategory::RedCards => "Red Cards",
            StatCategory::OwnGoals => "Own Goals",
            StatCategory::PenaltiesMissed => "Penalties Missed",
            StatCategory::PenaltiesScored => "Penalties Scored",
            StatCategory::Saves => "Saves",
            StatCategory::PenaltiesSaved => "Penalties Saved",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Raw statistic this category scores, as a number.
    pub fn value_of(&self, record: &MatchStatRecord) -> f64 {
        let v = match self {
            StatCategory::ManOfTheMatch => u32::from(record.man_of_the_match),
            StatCategory::MinutesPlayed => record.minutes,
            StatCategory::GoalsScored => record.goals,
            StatCategory::Assists => record.assists,
            StatCategory::CleanSheets => record.clean_sheets,
            StatCategory::GoalsConceded => record.goals_conceded,
            StatCategory::YellowCards => record.yellow_cards,
            StatCategory::RedCards => record.red_cards,
            StatCategory::OwnGoals => record.own_goals,
            StatCategory::PenaltiesMissed => record.penalties_missed,
            StatCategory::PenaltiesScored => record.penalties_scored,
            StatCategory::Saves => record.saves,
            StatCategory::PenaltiesSaved => record.penalties_saved,
        };
        f64::from(v)
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for StatCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for StatCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        StatCategory::from_label(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown stat category {raw:?}")))
    }
}

/// Points one category contributed for one match (or, summed, for many).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtpBreakdownEntry {
    pub category: StatCategory,
    /// Raw statistic value behind the points.
    pub value: f64,
    pub points: f64,
}

/// A player's rounded FTP total over whatever matches were aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPlayerScore {
    pub name: String,
    pub position: Position,
    pub ftp_score: i64,
}
