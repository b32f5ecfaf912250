//! Receiver information (capability discovery) payload parser
//!
//! The receiver describes itself with a single XML document:
//!
//! ```xml
//! <response status="ok">
//!   <device id="TX-NR646">
//!     <brand>ONKYO</brand>
//!     <model>TX-NR646</model>
//!     <firmwareversion>1000-1000-1000-0010-0000</firmwareversion>
//!     <netservicelist count="1">
//!       <netservice id="0A" value="1" name="Spotify"/>
//!     </netservicelist>
//!     <zonelist count="2">
//!       <zone id="1" value="1" name="Main" volmax="80" volstep="0"/>
//!       <zone id="2" value="1" name="Zone2" volmax="80" volstep="0"/>
//!     </zonelist>
//!     <selectorlist count="1">
//!       <selector id="2B" value="1" name="NET" zone="03" iconid="2B"/>
//!     </selectorlist>
//!   </device>
//! </response>
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::xml_decode::{self, flag_value};
use crate::error::{ParseError, ParseResult};

/// Parsed receiver information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiverInformation {
    /// Device identifier (usually the model name)
    pub device_id: String,
    /// Simple textual device properties keyed by element name
    pub device_properties: BTreeMap<String, String>,
    /// Enabled network services, service id -> display name
    pub network_services: BTreeMap<String, String>,
    /// Enabled zones in declaration order
    pub zones: Vec<Zone>,
    /// Enabled input selectors in declaration order
    pub selectors: Vec<Selector>,
}

/// An independently controllable output zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub volume_max: u32,
    pub volume_step: u32,
}

/// A named input source, restricted to the zones in its bit mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    /// Input selector code, e.g. `"2B"` for NET
    pub id: String,
    pub name: String,
    pub icon_id: String,
    /// Bit `i` set means the selector is usable in zone index `i`
    pub zone_mask: u32,
}

impl Selector {
    /// Whether this selector can be used in the zone with the given index.
    pub fn is_active_for_zone(&self, zone: usize) -> bool {
        zone < 32 && (self.zone_mask >> zone) & 1 == 1
    }
}

impl ReceiverInformation {
    /// Parse a receiver information document.
    pub fn from_xml(xml: &str) -> ParseResult<Self> {
        let response: RawResponse = xml_decode::parse(xml)?;
        xml_decode::ensure_ok(&response.status)?;
        let device = response
            .device
            .ok_or_else(|| ParseError::MissingRequiredElement("device".to_string()))?;
        device.try_into()
    }
}

// ============================================================================
// Raw serde mapping
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename = "response")]
struct RawResponse {
    #[serde(rename = "@status", default)]
    status: String,
    #[serde(default)]
    device: Option<RawDevice>,
}

#[derive(Debug, Deserialize)]
struct RawDevice {
    #[serde(rename = "@id", default)]
    id: String,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    destination: Option<String>,
    #[serde(default)]
    productid: Option<String>,
    #[serde(default)]
    deviceserial: Option<String>,
    #[serde(default)]
    macaddress: Option<String>,
    #[serde(default)]
    modeliconurl: Option<String>,
    #[serde(default)]
    friendlyname: Option<String>,
    #[serde(default)]
    firmwareversion: Option<String>,
    #[serde(default)]
    netservicelist: Option<RawNetServiceList>,
    #[serde(default)]
    zonelist: Option<RawZoneList>,
    #[serde(default)]
    selectorlist: Option<RawSelectorList>,
}

#[derive(Debug, Deserialize)]
struct RawNetServiceList {
    #[serde(rename = "netservice", default)]
    services: Vec<RawNetService>,
}

#[derive(Debug, Deserialize)]
struct RawNetService {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@value", default)]
    value: String,
    #[serde(rename = "@name", default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawZoneList {
    #[serde(rename = "zone", default)]
    zones: Vec<RawZone>,
}

#[derive(Debug, Deserialize)]
struct RawZone {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@value", default)]
    value: String,
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@volmax", default)]
    volmax: Option<u32>,
    #[serde(rename = "@volstep", default)]
    volstep: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawSelectorList {
    #[serde(rename = "selector", default)]
    selectors: Vec<RawSelector>,
}

#[derive(Debug, Deserialize)]
struct RawSelector {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@value", default)]
    value: String,
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@zone", default)]
    zone: String,
    #[serde(rename = "@iconid", default)]
    iconid: String,
}

impl TryFrom<RawDevice> for ReceiverInformation {
    type Error = ParseError;

    fn try_from(device: RawDevice) -> ParseResult<Self> {
        let mut device_properties = BTreeMap::new();
        let properties = [
            ("brand", device.brand),
            ("category", device.category),
            ("year", device.year),
            ("model", device.model),
            ("destination", device.destination),
            ("productid", device.productid),
            ("deviceserial", device.deviceserial),
            ("macaddress", device.macaddress),
            ("modeliconurl", device.modeliconurl),
            ("friendlyname", device.friendlyname),
            ("firmwareversion", device.firmwareversion),
        ];
        for (key, value) in properties {
            if let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
                device_properties.insert(key.to_string(), value);
            }
        }

        let network_services = device
            .netservicelist
            .map(|list| list.services)
            .unwrap_or_default()
            .into_iter()
            .filter(|s| flag_value(&s.value))
            .map(|s| (s.id, s.name))
            .collect();

        let zones = device
            .zonelist
            .map(|list| list.zones)
            .unwrap_or_default()
            .into_iter()
            .filter(|z| flag_value(&z.value))
            .map(|z| Zone {
                id: z.id,
                name: z.name,
                volume_max: z.volmax.unwrap_or(0),
                volume_step: z.volstep.unwrap_or(0),
            })
            .collect();

        let mut selectors = Vec::new();
        for raw in device.selectorlist.map(|list| list.selectors).unwrap_or_default() {
            if !flag_value(&raw.value) {
                continue;
            }
            let zone_mask = xml_decode::parse_hex_mask(&raw.zone).ok_or_else(|| {
                ParseError::InvalidXmlStructure(format!(
                    "selector {} has invalid zone mask '{}'",
                    raw.id, raw.zone
                ))
            })?;
            selectors.push(Selector {
                id: raw.id,
                name: raw.name,
                icon_id: raw.iconid,
                zone_mask,
            });
        }

        Ok(ReceiverInformation {
            device_id: device.id,
            device_properties,
            network_services,
            zones,
            selectors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<response status="ok">
  <device id="TX-NR646">
    <brand>ONKYO</brand>
    <category>AV Receiver</category>
    <year>2016</year>
    <model>TX-NR646</model>
    <firmwareversion>1000-1000-1000-0010-0000</firmwareversion>
    <netservicelist count="3">
      <netservice id="0A" value="1" name="Spotify"/>
      <netservice id="0E" value="1" name="TuneIn Radio"/>
      <netservice id="12" value="0" name="Deezer"/>
    </netservicelist>
    <zonelist count="3">
      <zone id="1" value="1" name="Main" volmax="80" volstep="0"/>
      <zone id="2" value="1" name="Zone2" volmax="80" volstep="0"/>
      <zone id="3" value="0" name="Zone3" volmax="0" volstep="0"/>
    </zonelist>
    <selectorlist count="3">
      <selector id="10" value="1" name="BD/DVD" zone="01" iconid="10"/>
      <selector id="2B" value="1" name="NET" zone="03" iconid="2B"/>
      <selector id="22" value="0" name="PHONO" zone="01" iconid="22"/>
    </selectorlist>
  </device>
</response>"#;

    #[test]
    fn test_parse_device_properties() {
        let info = ReceiverInformation::from_xml(SAMPLE).unwrap();
        assert_eq!(info.device_id, "TX-NR646");
        assert_eq!(info.device_properties.get("brand"), Some(&"ONKYO".to_string()));
        assert_eq!(info.device_properties.get("year"), Some(&"2016".to_string()));
        assert!(info.device_properties.get("macaddress").is_none());
    }

    #[test]
    fn test_disabled_entries_are_dropped() {
        let info = ReceiverInformation::from_xml(SAMPLE).unwrap();
        assert_eq!(info.network_services.len(), 2);
        assert_eq!(info.network_services.get("0A"), Some(&"Spotify".to_string()));
        assert_eq!(info.zones.len(), 2);
        assert_eq!(info.selectors.len(), 2);
    }

    #[test]
    fn test_zone_attributes() {
        let info = ReceiverInformation::from_xml(SAMPLE).unwrap();
        let main = &info.zones[0];
        assert_eq!(main.name, "Main");
        assert_eq!(main.volume_max, 80);
        assert_eq!(main.volume_step, 0);
    }

    #[test]
    fn test_selector_zone_mask() {
        let info = ReceiverInformation::from_xml(SAMPLE).unwrap();
        let bd = &info.selectors[0];
        let net = &info.selectors[1];
        assert!(bd.is_active_for_zone(0));
        assert!(!bd.is_active_for_zone(1));
        assert!(net.is_active_for_zone(0));
        assert!(net.is_active_for_zone(1));
        assert!(!net.is_active_for_zone(40));
    }

    #[test]
    fn test_error_status() {
        let xml = r#"<response status="ng"></response>"#;
        assert_eq!(
            ReceiverInformation::from_xml(xml),
            Err(ParseError::ResponseStatus("ng".to_string()))
        );
    }

    #[test]
    fn test_missing_device() {
        let xml = r#"<response status="ok"></response>"#;
        assert!(matches!(
            ReceiverInformation::from_xml(xml),
            Err(ParseError::MissingRequiredElement(_))
        ));
    }

    #[test]
    fn test_invalid_zone_mask() {
        let xml = r#"<response status="ok"><device id="x"><selectorlist count="1"><selector id="2B" value="1" name="NET" zone="QQ" iconid="2B"/></selectorlist></device></response>"#;
        assert!(matches!(
            ReceiverInformation::from_xml(xml),
            Err(ParseError::InvalidXmlStructure(_))
        ));
    }
}
