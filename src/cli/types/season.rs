//! Season scope: one season label, or every season at once.

use crate::error::{FtpError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sentinel label that removes the season filter from every stats fetch.
pub const ALL_TIME: &str = "All Time";

/// Scope of a stats query.
///
/// Labels are not validated beyond recognising the [`ALL_TIME`] sentinel;
/// stored labels look like `"2024/25"`.
///
/// # Examples
///
/// ```rust
/// use club_ftp::Season;
///
/// let season: Season = "2024/25".parse().unwrap();
/// assert_eq!(season.filter(), Some("2024/25"));
///
/// let all: Season = "All Time".parse().unwrap();
/// assert_eq!(all.filter(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Season {
    Label(String),
    AllTime,
}

impl Season {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_TIME {
            Season::AllTime
        } else {
            Season::Label(label)
        }
    }

    /// Season filter for stats fetches; `None` means no filter.
    pub fn filter(&self) -> Option<&str> {
        match self {
            Season::Label(label) => Some(label),
            Season::AllTime => None,
        }
    }

    /// Key under which a stored TOTW is filed.
    pub fn as_str(&self) -> &str {
        match self {
            Season::Label(label) => label,
            Season::AllTime => ALL_TIME,
        }
    }

    pub fn is_all_time(&self) -> bool {
        matches!(self, Season::AllTime)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = FtpError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FtpError::MissingSeason);
        }
        Ok(Self::new(s))
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_time_sentinel() {
        let season: Season = ALL_TIME.parse().unwrap();
        assert!(season.is_all_time());
        assert_eq!(season.filter(), None);
        assert_eq!(season.to_string(), "All Time");
    }

    #[test]
    fn test_label_passes_through_unvalidated() {
        let season: Season = "2019/20".parse().unwrap();
        assert_eq!(season, Season::Label("2019/20".to_string()));

        // Only the sentinel is recognised; odd labels are still labels
        let odd: Season = "pre-season".parse().unwrap();
        assert_eq!(odd.filter(), Some("pre-season"));
    }

    #[test]
    fn test_empty_season_rejected() {
        assert!(matches!("".parse::<Season>(), Err(FtpError::MissingSeason)));
        assert!(matches!("   ".parse::<Season>(), Err(FtpError::MissingSeason)));
    }

    #[test]
    fn test_season_serde() {
        let json = serde_json::to_string(&Season::AllTime).unwrap();
        assert_eq!(json, "\"All Time\"");
        let parsed: Season = serde_json::from_str("\"2024/25\"").unwrap();
        assert_eq!(parsed.as_str(), "2024/25");
    }
}
