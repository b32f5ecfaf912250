//! Common status and receiver information handlers

use tracing::{debug, info, warn};

use iscp_parser::ReceiverInformation;

use crate::compare::update_field;
use crate::model::{
    DigitalFilter, DimmerLevel, FirmwareStatus, InputType, ListeningMode, PowerStatus,
    SwitchStatus,
};
use crate::{ReceiverState, StateError};

/// Which on/off style setting a [`SwitchStatus`] message targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Switch {
    Muting,
    AutoPower,
    HdmiCec,
    SpeakerA,
    SpeakerB,
    GoogleCastAnalytics,
}

impl ReceiverState {
    pub(crate) fn process_power(&mut self, power: PowerStatus) -> bool {
        update_field(&mut self.common.power, power)
    }

    pub(crate) fn process_firmware(&mut self, status: FirmwareStatus) -> bool {
        update_field(&mut self.common.firmware, status)
    }

    pub(crate) fn process_dimmer(&mut self, level: DimmerLevel) -> bool {
        update_field(&mut self.common.dimmer, level)
    }

    pub(crate) fn process_digital_filter(&mut self, filter: DigitalFilter) -> bool {
        update_field(&mut self.common.digital_filter, filter)
    }

    pub(crate) fn process_listening_mode(&mut self, mode: ListeningMode) -> bool {
        update_field(&mut self.common.listening_mode, mode)
    }

    pub(crate) fn process_volume(&mut self, level: Option<u8>) -> bool {
        update_field(&mut self.common.volume, level)
    }

    pub(crate) fn process_switch(&mut self, switch: Switch, status: SwitchStatus) -> bool {
        let slot = match switch {
            Switch::Muting => &mut self.common.muting,
            Switch::AutoPower => &mut self.common.auto_power,
            Switch::HdmiCec => &mut self.common.hdmi_cec,
            Switch::SpeakerA => &mut self.common.speaker_a,
            Switch::SpeakerB => &mut self.common.speaker_b,
            Switch::GoogleCastAnalytics => &mut self.common.google_cast_analytics,
        };
        update_field(slot, status)
    }

    pub(crate) fn process_google_cast_version(&mut self, version: &str) -> bool {
        update_field(&mut self.common.google_cast_version, version.to_string())
    }

    pub(crate) fn process_privacy_policy(&mut self, code: &str) -> bool {
        update_field(&mut self.common.privacy_policy, code.to_string())
    }

    /// Input change; leaving a list-capable input invalidates both item lists
    pub(crate) fn process_input(&mut self, input: InputType) -> bool {
        let changed = update_field(&mut self.common.input, input);
        if !input.is_media_list() {
            self.navigation.clear_items();
        }
        changed
    }

    /// Replace discovered capabilities; a payload that fails to parse is ignored
    pub(crate) fn process_receiver_information(&mut self, xml: &str) -> bool {
        for chunk in chunks(xml, self.config.payload_log_chunk) {
            info!("{}", chunk);
        }

        let parsed = match ReceiverInformation::from_xml(xml).map_err(StateError::from) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Can not parse receiver information: {}", e);
                return false;
            }
        };

        let zone = self.active_zone;
        let selectors: Vec<_> = parsed
            .selectors
            .into_iter()
            .filter(|s| s.is_active_for_zone(zone))
            .collect();
        debug!(
            "Receiver {} reports {} zones, {} selectors for zone {}",
            parsed.device_id,
            parsed.zones.len(),
            selectors.len(),
            zone
        );

        self.receiver.raw = Some(xml.to_string());
        self.receiver.device_properties = parsed.device_properties;
        self.receiver.network_services = parsed.network_services;
        self.receiver.zones = parsed.zones;
        self.receiver.selectors = selectors;
        true
    }
}

/// Split `data` into slices of at most `size` characters
fn chunks(data: &str, size: usize) -> impl Iterator<Item = &str> {
    let size = size.max(1);
    let mut rest = data;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(head)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks() {
        let parts: Vec<_> = chunks("abcdefg", 3).collect();
        assert_eq!(parts, vec!["abc", "def", "g"]);
        assert_eq!(chunks("", 3).count(), 0);
        let parts: Vec<_> = chunks("äöüß", 2).collect();
        assert_eq!(parts, vec!["äö", "üß"]);
    }

    #[test]
    fn test_switch_targets_one_field() {
        let mut state = ReceiverState::new(0);
        assert!(state.process_switch(Switch::SpeakerB, SwitchStatus::On));
        assert_eq!(state.common().speaker_b, SwitchStatus::On);
        assert_eq!(state.common().speaker_a, SwitchStatus::None);
        assert!(!state.process_switch(Switch::SpeakerB, SwitchStatus::On));
    }

    #[test]
    fn test_bad_receiver_information_leaves_state() {
        let mut state = ReceiverState::new(0);
        assert!(!state.process_receiver_information(r#"<response status="ng"/>"#));
        assert!(state.receiver().raw.is_none());
        assert!(state.zones().is_empty());
    }
}
