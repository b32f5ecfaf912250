//! Error types for iscp-state
//!
//! None of these escape [`ReceiverState::update`](crate::ReceiverState::update);
//! handlers log and absorb them. They surface only from construction and from
//! the artwork decoder seam.

use std::fmt;

use iscp_parser::ParseError;

/// Result type for iscp-state operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors that can occur inside the state core
#[derive(Debug)]
pub enum StateError {
    /// A structured payload could not be parsed
    Parse(ParseError),

    /// Artwork bytes could not be turned into an image
    ArtworkDecode(String),

    /// Artwork referenced by URL could not be fetched
    ArtworkFetch(String),

    /// Configuration rejected by validation
    InvalidConfig(String),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Parse(err) => write!(f, "Parse error: {}", err),
            StateError::ArtworkDecode(msg) => write!(f, "Artwork decode error: {}", msg),
            StateError::ArtworkFetch(msg) => write!(f, "Artwork fetch error: {}", msg),
            StateError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for StateError {
    fn from(err: ParseError) -> Self {
        StateError::Parse(err)
    }
}
