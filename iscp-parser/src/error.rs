//! Error types for ISCP payload parsing

use thiserror::Error;

/// Errors that can occur while parsing a structured ISCP payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// XML deserialization failed
    #[error("XML deserialization failed: {0}")]
    XmlDeserializationFailed(String),

    /// The XML was well formed but its content makes no sense
    #[error("Invalid XML structure: {0}")]
    InvalidXmlStructure(String),

    /// Missing required element
    #[error("Missing required element: {0}")]
    MissingRequiredElement(String),

    /// The receiver answered with a non-"ok" response status
    #[error("Receiver responded with status '{0}'")]
    ResponseStatus(String),
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
