//! Parsers for the structured payloads carried by ISCP messages
//!
//! - [`receiver_info`]: capability discovery (zones, selectors, services)
//! - [`xml_list`]: navigation list snapshots

pub mod receiver_info;
pub mod xml_list;

pub use receiver_info::{ReceiverInformation, Selector, Zone};
pub use xml_list::{XmlList, XmlListEntry};
