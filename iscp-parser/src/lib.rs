//! # iscp-parser
//!
//! XML parsing for the structured payloads an ISCP receiver sends: the
//! receiver information document used for capability discovery and the
//! navigation list snapshots.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use iscp_parser::{ReceiverInformation, XmlList};
//!
//! let info = ReceiverInformation::from_xml(payload)?;
//! for selector in info.selectors.iter().filter(|s| s.is_active_for_zone(0)) {
//!     println!("{} ({})", selector.name, selector.id);
//! }
//! ```

pub mod common;
pub mod error;
pub mod payloads;

pub use error::{ParseError, ParseResult};

pub use payloads::{ReceiverInformation, Selector, XmlList, XmlListEntry, Zone};
