//! Scoring weight table.
//!
//! Point values live here and only here. A table is a versioned JSON
//! document; the built-in default is used when no file is configured.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::types::Position;
use crate::core::try_read_to_string;
use crate::error::{FtpError, Result};
use crate::scoring::types::StatCategory;

/// Per-position point values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPositionPoints")]
pub struct PositionPoints {
    pub gk: f64,
    pub def: f64,
    pub mid: f64,
    pub fwd: f64,
}

/// A single number applies to every position.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPositionPoints {
    Uniform(f64),
    Split { gk: f64, def: f64, mid: f64, fwd: f64 },
}

impl From<RawPositionPoints> for PositionPoints {
    fn from(raw: RawPositionPoints) -> Self {
        match raw {
            RawPositionPoints::Uniform(p) => Self::uniform(p),
            RawPositionPoints::Split { gk, def, mid, fwd } => Self { gk, def, mid, fwd },
        }
    }
}

impl PositionPoints {
    pub fn uniform(points: f64) -> Self {
        Self {
            gk: points,
            def: points,
            mid: points,
            fwd: points,
        }
    }

    pub fn get(&self, position: Position) -> f64 {
        match position {
            Position::GK => self.gk,
            Position::DEF => self.def,
            Position::MID => self.mid,
            Position::FWD => self.fwd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub min: f64,
    pub points: f64,
}

fn one() -> f64 {
    1.0
}

/// How one category turns a raw statistic into points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CategoryWeight {
    /// Awarded once when the statistic is non-zero.
    Flat { points: f64 },
    /// Highest tier whose `min` the value reaches.
    Tiered { tiers: Vec<Tier> },
    /// `value / per * points`, fractions kept.
    PerUnit {
        points: PositionPoints,
        #[serde(default = "one")]
        per: f64,
    },
}

impl CategoryWeight {
    pub fn points_for(&self, value: f64, position: Position) -> f64 {
        match self {
            CategoryWeight::Flat { points } => {
                if value > 0.0 {
                    *points
                } else {
                    0.0
                }
            }
            CategoryWeight::Tiered { tiers } => tiers
                .iter()
                .find(|t| value >= t.min)
                .map(|t| t.points)
                .unwrap_or(0.0),
            CategoryWeight::PerUnit { points, per } => value / per * points.get(position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub version: String,
    pub categories: BTreeMap<StatCategory, CategoryWeight>,
}

impl WeightTable {
    /// Weight for a category. Validated tables cover every category; an
    /// unvalidated gap scores zero.
    pub fn weight(&self, category: StatCategory) -> Option<&CategoryWeight> {
        self.categories.get(&category)
    }

    pub fn points_for(&self, category: StatCategory, value: f64, position: Position) -> f64 {
        self.weight(category)
            .map(|w| w.points_for(value, position))
            .unwrap_or(0.0)
    }

    /// Parse and validate a JSON table. Tiers are re-ordered highest first.
    pub fn from_json(s: &str) -> Result<Self> {
        let mut table: WeightTable = serde_json::from_str(s)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = try_read_to_string(path).ok_or_else(|| FtpError::InvalidWeights {
            message: format!("cannot read {}", path.display()),
        })?;
        let table = Self::from_json(&s)?;
        debug!(version = %table.version, path = %path.display(), "loaded weight table");
        Ok(table)
    }

    /// Load from `path` when given, otherwise the built-in table.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                info!("no weight table configured, using built-in default");
                Ok(Self::default())
            }
        }
    }

    fn validate(&mut self) -> Result<()> {
        if let Some(missing) = StatCategory::ALL
            .iter()
            .find(|c| !self.categories.contains_key(*c))
        {
            return Err(FtpError::InvalidWeights {
                message: format!("missing category {missing}"),
            });
        }

        for (category, weight) in self.categories.iter_mut() {
            match weight {
                CategoryWeight::PerUnit { per, .. } if *per <= 0.0 => {
                    return Err(FtpError::InvalidWeights {
                        message: format!("{category}: per must be positive"),
                    });
                }
                CategoryWeight::Tiered { tiers } => {
                    tiers.sort_by(|a, b| b.min.total_cmp(&a.min));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        use CategoryWeight::*;
        use StatCategory::*;

        let per_unit = |gk: f64, def: f64, mid: f64, fwd: f64, per: f64| PerUnit {
            points: PositionPoints { gk, def, mid, fwd },
            per,
        };
        let each = |p: f64| PerUnit {
            points: PositionPoints::uniform(p),
            per: 1.0,
        };

        let categories = BTreeMap::from([
            (ManOfTheMatch, Flat { points: 3.0 }),
            (
                MinutesPlayed,
                Tiered {
                    tiers: vec![
                        Tier {
                            min: 60.0,
                            points: 2.0,
                        },
                        Tier {
                            min: 1.0,
                            points: 1.0,
                        },
                    ],
                },
            ),
            (GoalsScored, per_unit(10.0, 6.0, 5.0, 4.0, 1.0)),
            (Assists, each(3.0)),
            (CleanSheets, per_unit(4.0, 4.0, 1.0, 0.0, 1.0)),
            (GoalsConceded, per_unit(-1.0, -1.0, 0.0, 0.0, 2.0)),
            (YellowCards, each(-1.0)),
            (RedCards, each(-3.0)),
            (OwnGoals, each(-2.0)),
            (PenaltiesMissed, each(-2.0)),
            (PenaltiesScored, each(5.0)),
            (Saves, per_unit(1.0, 0.0, 0.0, 0.0, 3.0)),
            (PenaltiesSaved, each(5.0)),
        ]);

        Self {
            version: "2024.1".to_string(),
            categories,
        }
    }
}
