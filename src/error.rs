//! Error types for coord-query

use std::fmt;
use std::io;

/// Result type for coord-query operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in coord-query operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// CSV read or write error
    Csv(csv::Error),

    /// No conversion route exists between the two systems
    UnsupportedConversion { from: String, to: String },

    /// Unrecognised coordinate system name
    UnknownSystem(String),

    /// Unrecognised map provider name
    UnknownProvider(String),

    /// Unrecognised display format name
    UnknownFormat(String),

    /// Coordinate outside the geodetic range or not finite
    InvalidCoordinate(String),

    /// Bad configuration value
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::UnsupportedConversion { from, to } => {
                write!(f, "Unsupported conversion: {} -> {}", from, to)
            }
            Error::UnknownSystem(name) => write!(f, "Unknown coordinate system: {}", name),
            Error::UnknownProvider(name) => write!(f, "Unknown map provider: {}", name),
            Error::UnknownFormat(name) => write!(f, "Unknown coordinate format: {}", name),
            Error::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_conversion_display() {
        let err = Error::UnsupportedConversion {
            from: "gcj02".to_string(),
            to: "nonexistent".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported conversion: gcj02 -> nonexistent");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_system() {
        let err = Error::UnknownSystem("utm".to_string());
        assert!(err.to_string().contains("utm"));
        assert!(std::error::Error::source(&err).is_none());
    }
}
