//! XML list snapshot payload parser
//!
//! The receiver delivers a whole navigation list at once:
//!
//! ```xml
//! <response status="ok">
//!   <items offset="0" totalitems="2">
//!     <item iconid="29" title="Music" selectable="1"/>
//!     <item iconid="36" title="Track 1" selectable="1"/>
//!   </items>
//! </response>
//! ```

use serde::{Deserialize, Serialize};

use crate::common::xml_decode;
use crate::error::{ParseError, ParseResult};

/// A parsed list snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlList {
    /// Index of the first item within the full list
    pub offset: u32,
    /// Number of items in the full list, which may exceed `items.len()`
    pub total_items: u32,
    pub items: Vec<XmlListEntry>,
}

/// One entry of a list snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlListEntry {
    /// Raw icon code, e.g. `"36"` for the currently playing entry
    pub icon_id: String,
    pub title: String,
    pub selectable: bool,
}

impl XmlList {
    /// Parse a list snapshot document.
    pub fn from_xml(xml: &str) -> ParseResult<Self> {
        let response: RawResponse = xml_decode::parse(xml)?;
        xml_decode::ensure_ok(&response.status)?;
        let items = response
            .items
            .ok_or_else(|| ParseError::MissingRequiredElement("items".to_string()))?;

        Ok(XmlList {
            offset: items.offset,
            total_items: items.total_items,
            items: items
                .items
                .into_iter()
                .map(|raw| XmlListEntry {
                    icon_id: raw.iconid,
                    title: raw.title,
                    selectable: raw.selectable,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename = "response")]
struct RawResponse {
    #[serde(rename = "@status", default)]
    status: String,
    #[serde(default)]
    items: Option<RawItems>,
}

#[derive(Debug, Deserialize)]
struct RawItems {
    #[serde(rename = "@offset", default)]
    offset: u32,
    #[serde(rename = "@totalitems", default)]
    total_items: u32,
    #[serde(rename = "item", default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(rename = "@iconid", default)]
    iconid: String,
    #[serde(rename = "@title", default)]
    title: String,
    #[serde(
        rename = "@selectable",
        default = "default_selectable",
        deserialize_with = "xml_decode::deserialize_flag"
    )]
    selectable: bool,
}

fn default_selectable() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items() {
        let xml = r#"<response status="ok"><items offset="0" totalitems="3"><item iconid="29" title="Music" selectable="1"/><item iconid="36" title="Track &amp; Field" selectable="1"/><item iconid="2d" title="Info" selectable="0"/></items></response>"#;
        let list = XmlList::from_xml(xml).unwrap();
        assert_eq!(list.total_items, 3);
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[1].title, "Track & Field");
        assert_eq!(list.items[1].icon_id, "36");
        assert!(!list.items[2].selectable);
    }

    #[test]
    fn test_empty_list() {
        let xml = r#"<response status="ok"><items offset="0" totalitems="0"></items></response>"#;
        let list = XmlList::from_xml(xml).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_selectable_defaults_to_true() {
        let xml = r#"<response status="ok"><items><item iconid="36" title="A"/></items></response>"#;
        let list = XmlList::from_xml(xml).unwrap();
        assert!(list.items[0].selectable);
    }

    #[test]
    fn test_missing_items() {
        let xml = r#"<response status="ok"></response>"#;
        assert!(matches!(
            XmlList::from_xml(xml),
            Err(ParseError::MissingRequiredElement(_))
        ));
    }
}
