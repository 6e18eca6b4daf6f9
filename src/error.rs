use std::fmt;

/// Result type for Synapse operations
pub type Result<T> = std::result::Result<T, SynapseError>;

/// Main error type for the Synapse library.
///
/// Only persistence is recoverable: a missing or unreadable model file is
/// reported here so callers can fall back to fresh initialization. Malformed
/// configuration and dimension mismatches are caller errors and panic
/// immediately instead of surfacing through this type.
#[derive(Debug, Clone)]
pub enum SynapseError {
    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for SynapseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynapseError::IoError(msg) => write!(f, "IO error: {}", msg),
            SynapseError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SynapseError {}

// Conversion from std::io::Error
impl From<std::io::Error> for SynapseError {
    fn from(err: std::io::Error) -> Self {
        SynapseError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for SynapseError {
    fn from(err: bincode::Error) -> Self {
        SynapseError::SerializationError(err.to_string())
    }
}
