//! Error types for roster loading and rendering

/// Error types that can occur while preparing or printing a roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Configuration file could not be loaded, parsed or validated
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output could not be written
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RosterError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
