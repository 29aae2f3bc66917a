//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to set up logging: {message}")]
    Logging { message: String },

    // ─────────────────────────────────────────────────────────────
    // Location Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Permission to access location was denied")]
    PermissionDenied,

    #[error("Location services are not supported on this platform")]
    LocationUnsupported,

    #[error("Location unavailable: {message}")]
    LocationUnavailable { message: String },

    // ─────────────────────────────────────────────────────────────
    // Station Feed Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Station feed request failed: {message}")]
    Feed { message: String },

    #[error("Station feed returned HTTP {status}")]
    FeedStatus { status: u16 },

    #[error("Station feed payload is invalid: {message}")]
    FeedPayload { message: String },

    // ─────────────────────────────────────────────────────────────
    // Dataset Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid coordinate value: {value:?}")]
    InvalidCoordinate { value: String },

    #[error("Duplicate metro station key: {key}")]
    DuplicateStationKey { key: String },

    #[error("Dataset error: {message}")]
    Dataset { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn location_unavailable(message: impl Into<String>) -> Self {
        Self::LocationUnavailable {
            message: message.into(),
        }
    }

    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed {
            message: message.into(),
        }
    }

    pub fn feed_payload(message: impl Into<String>) -> Self {
        Self::FeedPayload {
            message: message.into(),
        }
    }

    pub fn invalid_coordinate(value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            value: value.into(),
        }
    }

    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::feed("connection reset");
        assert_eq!(
            err.to_string(),
            "Station feed request failed: connection reset"
        );

        // The permission message is what the user sees in the status bar
        assert_eq!(
            Error::PermissionDenied.to_string(),
            "Permission to access location was denied"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_logging_error_names_cause() {
        let err = Error::logging("read-only file system");
        assert_eq!(
            err.to_string(),
            "Failed to set up logging: read-only file system"
        );
    }

    #[test]
    fn test_invalid_coordinate_quotes_value() {
        let err = Error::invalid_coordinate("25,04");
        assert!(err.to_string().contains("\"25,04\""));
    }
}
