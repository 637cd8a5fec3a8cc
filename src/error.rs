//! Error types and handling for `AirScan`

use thiserror::Error;

/// Main error type for the `AirScan` library
#[derive(Error, Debug)]
pub enum AirScanError {
    /// Malformed coordinate or reading value
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Resolver built without any reference points
    #[error("Reference set is empty")]
    EmptyReferenceSet,

    /// Season name outside the known seasons
    #[error("Unknown season: {season}")]
    UnknownSeason { season: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Location store errors
    #[error("Store error: {message}")]
    Store { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AirScanError {
    /// Create a new input validation error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new unknown season error
    pub fn unknown_season<S: Into<String>>(season: S) -> Self {
        Self::UnknownSeason {
            season: season.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AirScanError::InvalidInput { message } => format!("Invalid input: {message}"),
            AirScanError::EmptyReferenceSet => {
                "No known locations are configured. Location unknown.".to_string()
            }
            AirScanError::UnknownSeason { season } => {
                format!("Unknown season '{season}'. Use winter, spring, summer or monsoon.")
            }
            AirScanError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AirScanError::Store { .. } => {
                "Could not access the saved location. You may need to clear it.".to_string()
            }
            AirScanError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let input_err = AirScanError::invalid_input("latitude out of range");
        assert!(matches!(input_err, AirScanError::InvalidInput { .. }));

        let season_err = AirScanError::unknown_season("autumn");
        assert!(matches!(season_err, AirScanError::UnknownSeason { .. }));

        let store_err = AirScanError::store("keyspace closed");
        assert!(matches!(store_err, AirScanError::Store { .. }));
    }

    #[test]
    fn test_user_messages() {
        let input_err = AirScanError::invalid_input("aqi must be finite");
        assert!(input_err.user_message().contains("aqi must be finite"));

        let season_err = AirScanError::unknown_season("autumn");
        assert!(season_err.user_message().contains("autumn"));

        assert!(
            AirScanError::EmptyReferenceSet
                .user_message()
                .contains("Location unknown")
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AirScanError = io_err.into();
        assert!(matches!(err, AirScanError::Io { .. }));
    }
}
