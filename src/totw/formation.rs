//! Formation descriptors ("4-4-2") and the roster slots they produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::cli::types::Position;

pub const DEFAULT_FORMATION: FormationCounts = FormationCounts {
    def: 4,
    mid: 4,
    fwd: 2,
};

/// Largest outfield lines a stored team can field.
pub const MAX_DEF: u32 = 5;
pub const MAX_MID: u32 = 5;
pub const MAX_FWD: u32 = 3;

/// Outfield line counts. The goalkeeper is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationCounts {
    pub def: u32,
    pub mid: u32,
    pub fwd: u32,
}

/// A named roster position, e.g. `DEF3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub position: Position,
}

impl Slot {
    pub fn new(position: Position, index: Option<u32>) -> Self {
        let name = match index {
            Some(i) => format!("{position}{i}"),
            None => position.to_string(),
        };
        Self { name, position }
    }
}

impl FormationCounts {
    /// Parse `"D-M-F"`; extra parts are ignored. Anything unparseable, fewer
    /// than three parts, or a line outside 1..=5 DEF, 1..=5 MID, 1..=3 FWD
    /// yields 4-4-2.
    pub fn parse(descriptor: &str) -> Self {
        match Self::try_parse(descriptor) {
            Some(counts) => counts,
            None => {
                warn!(descriptor, "unusable formation, falling back to 4-4-2");
                DEFAULT_FORMATION
            }
        }
    }

    fn try_parse(descriptor: &str) -> Option<Self> {
        let parts: Vec<&str> = descriptor.split('-').collect();
        if parts.len() < 3 {
            return None;
        }
        let count = |s: &str, max: u32| {
            s.trim()
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=max).contains(n))
        };
        Some(Self {
            def: count(parts[0], MAX_DEF)?,
            mid: count(parts[1], MAX_MID)?,
            fwd: count(parts[2], MAX_FWD)?,
        })
    }

    /// Goalkeeper included.
    pub fn total_slots(&self) -> u32 {
        1 + self.def + self.mid + self.fwd
    }

    /// GK, then DEF1..n, MID1..n, FWD1..n.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(self.total_slots() as usize);
        slots.push(Slot::new(Position::GK, None));
        for (position, count) in [
            (Position::DEF, self.def),
            (Position::MID, self.mid),
            (Position::FWD, self.fwd),
        ] {
            slots.extend((1..=count).map(|i| Slot::new(position, Some(i))));
        }
        slots
    }
}

impl Default for FormationCounts {
    fn default() -> Self {
        DEFAULT_FORMATION
    }
}

impl fmt::Display for FormationCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.def, self.mid, self.fwd)
    }
}

/// Resolve a formation descriptor straight to its ordered slots.
pub fn resolve_slots(descriptor: &str) -> Vec<Slot> {
    FormationCounts::parse(descriptor).slots()
}
