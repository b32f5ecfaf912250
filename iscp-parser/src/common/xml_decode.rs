//! XML decoding helpers shared by the payload parsers.
//!
//! ISCP payloads are plain XML documents without namespaces, wrapped in a
//! `<response status="...">` element. Most values live in attributes.

use crate::error::{ParseError, ParseResult};
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;

/// Status value the receiver uses for a successful response.
pub const STATUS_OK: &str = "ok";

/// Parse an XML string into a deserializable type.
pub fn parse<T: DeserializeOwned>(xml: &str) -> ParseResult<T> {
    quick_xml::de::from_str(xml.trim())
        .map_err(|e| ParseError::XmlDeserializationFailed(e.to_string()))
}

/// Fail unless the response status is `"ok"` (case-insensitive).
pub fn ensure_ok(status: &str) -> ParseResult<()> {
    if status.eq_ignore_ascii_case(STATUS_OK) {
        Ok(())
    } else {
        Err(ParseError::ResponseStatus(status.to_string()))
    }
}

/// Deserialize a `"1"`/`"0"` style flag attribute.
///
/// Anything other than `"0"`, `"false"` or `"no"` counts as set.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(flag_value(&raw))
}

pub(crate) fn flag_value(raw: &str) -> bool {
    let raw = raw.trim();
    !(raw == "0" || raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("no"))
}

/// Parse a hexadecimal bit mask such as `"03"` or `"1F"`.
///
/// An empty mask means "no zones".
pub fn parse_hex_mask(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    u32::from_str_radix(raw, 16).ok()
}
