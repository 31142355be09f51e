//! Position buckets used for scoring and roster slots.

use crate::error::FtpError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player position bucket.
///
/// Every match record and every TOTW slot falls into exactly one of these.
/// The goalkeeper is the only bucket that accrues saves.
///
/// # Examples
///
/// ```rust
/// use club_ftp::Position;
///
/// assert_eq!(Position::from_class("Defender"), Position::DEF);
/// assert_eq!(Position::from_class("winger?"), Position::MID);
/// assert_eq!(Position::GK.to_string(), "GK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    /// Map a free-form match class onto a bucket.
    ///
    /// Unknown or empty classes score as midfielders.
    pub fn from_class(class: &str) -> Self {
        class.trim().parse().unwrap_or(Position::MID)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GK" | "G" | "GOALKEEPER" | "KEEPER" => Ok(Position::GK),
            "DEF" | "D" | "DEFENDER" => Ok(Position::DEF),
            "MID" | "M" | "MIDFIELDER" => Ok(Position::MID),
            "FWD" | "F" | "FORWARD" | "ST" | "STRIKER" => Ok(Position::FWD),
            _ => Err(FtpError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
