//! Error types and handling for the travel advisor

use thiserror::Error;

/// Main error type for the travel advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Search criteria or boundary input that cannot be used
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Fact file does not exist
    #[error("Fact file not found: {0}")]
    FileNotFound(String),

    /// Fact file could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AdvisorError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::InvalidInput { message } => message.clone(),
            AdvisorError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            AdvisorError::FileNotFound(path) => {
                format!("Destination file not found: {path}")
            }
            AdvisorError::Parse(message) => {
                format!("The destination file could not be read: {message}")
            }
            AdvisorError::Io { .. } => {
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
        let input_err = AdvisorError::invalid_input("budget is negative");
        assert!(matches!(input_err, AdvisorError::InvalidInput { .. }));

        let config_err = AdvisorError::config("bad level");
        assert!(matches!(config_err, AdvisorError::Config { .. }));

        let parse_err = AdvisorError::parse("unexpected token");
        assert!(matches!(parse_err, AdvisorError::Parse(_)));
    }

    #[test]
    fn test_user_messages() {
        let input_err = AdvisorError::invalid_input("Budget must be a positive number");
        assert_eq!(input_err.user_message(), "Budget must be a positive number");

        let config_err = AdvisorError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let missing = AdvisorError::FileNotFound("kb.json".to_string());
        assert!(missing.user_message().contains("kb.json"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let advisor_err: AdvisorError = io_err.into();
        assert!(matches!(advisor_err, AdvisorError::Io { .. }));
    }
}
