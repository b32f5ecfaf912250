//! Common utilities shared across payload parsers
//!
//! - [`xml_decode`]: XML decoding helpers and custom deserializers

pub mod xml_decode;

pub use xml_decode::{parse, parse_hex_mask};
