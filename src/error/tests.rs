//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod ftp_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ftp_error = FtpError::from(json_error);

        match ftp_error {
            FtpError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ftp_error = FtpError::from(io_error);

        match ftp_error {
            FtpError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::InvalidColumnType(
            0,
            "test_column".to_string(),
            rusqlite::types::Type::Null,
        );
        let ftp_error = FtpError::from(db_error);

        match ftp_error {
            FtpError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("seed file unreadable");
        let ftp_error = FtpError::from(anyhow_error);

        match ftp_error {
            FtpError::Storage { message } => {
                assert!(message.contains("seed file unreadable"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_missing_season_error() {
        let error = FtpError::MissingSeason;
        assert_eq!(error.to_string(), "Season not provided");
        assert_eq!(format!("{:?}", error), "MissingSeason");
    }

    #[test]
    fn test_invalid_weights_error() {
        let error = FtpError::InvalidWeights {
            message: "missing category Saves".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid weight table"));
        assert!(error_string.contains("Saves"));
    }

    #[test]
    fn test_invalid_config_error() {
        let error = FtpError::InvalidConfig {
            key: "CLUB_FTP_MAX_FETCHES".to_string(),
            message: "must be at least 1".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("CLUB_FTP_MAX_FETCHES"));
        assert!(error_string.contains("must be at least 1"));
    }

    #[test]
    fn test_invalid_position_error() {
        let error = FtpError::InvalidPosition {
            position: "sweeper".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid position: sweeper");
    }

    #[test]
    fn test_slot_fetch_error() {
        let error = FtpError::SlotFetch {
            slot: "MID2".to_string(),
            player: "Sam Carter".to_string(),
            message: "connection reset".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("MID2"));
        assert!(error_string.contains("Sam Carter"));
        assert!(error_string.contains("connection reset"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ftp_error = FtpError::from(io_error);

        let error_trait: &dyn std::error::Error = &ftp_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn failing() -> Result<String> {
            Err(FtpError::MissingSeason)
        }

        match failing().unwrap_err() {
            FtpError::MissingSeason => (),
            _ => panic!("Expected MissingSeason error"),
        }
    }
}
