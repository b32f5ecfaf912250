//! Common receiver status values

use serde::{Deserialize, Serialize};

/// Main power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PowerStatus {
    /// Network standby
    #[default]
    Standby,
    On,
    /// Every zone in standby
    AllStandby,
}

/// Firmware update state reported by the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FirmwareStatus {
    #[default]
    None,
    /// Installed firmware is current
    Actual,
    NewVersion,
    NewVersionNormal,
    NewVersionForce,
    UpdateStarted,
    UpdateCompleted,
}

/// Front panel dimmer level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DimmerLevel {
    #[default]
    None,
    Bright,
    Dim,
    Dark,
    ShutOff,
    BrightLedOff,
}

/// DAC digital filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DigitalFilter {
    #[default]
    None,
    Slow,
    Sharp,
    Short,
}

/// On/off style setting shared by muting, auto power, HDMI-CEC, the
/// speaker groups and Google Cast analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwitchStatus {
    /// Not reported yet
    #[default]
    None,
    Off,
    On,
    Toggle,
}

impl SwitchStatus {
    pub fn is_on(&self) -> bool {
        matches!(self, SwitchStatus::On)
    }
}

/// Listening mode code as reported by the receiver (`00`..`FF`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListeningMode(pub u8);

impl ListeningMode {
    /// Placeholder until the receiver reports a mode
    pub const NONE: ListeningMode = ListeningMode(0xFF);

    pub fn code(&self) -> u8 {
        self.0
    }

    /// Display name for the common modes
    pub fn name(&self) -> Option<&'static str> {
        let name = match self.0 {
            0x00 => "Stereo",
            0x01 => "Direct",
            0x02 => "Surround",
            0x03 => "Film",
            0x04 => "THX",
            0x05 => "Action",
            0x06 => "Musical",
            0x08 => "Orchestra",
            0x09 => "Unplugged",
            0x0A => "Studio-Mix",
            0x0B => "TV Logic",
            0x0C => "All Ch Stereo",
            0x0D => "Theater-Dimensional",
            0x0F => "Mono",
            0x11 => "Pure Audio",
            0x13 => "Full Mono",
            0x40 => "Straight Decode",
            0x80 => "Dolby Surround",
            _ => return None,
        };
        Some(name)
    }
}

impl Default for ListeningMode {
    fn default() -> Self {
        ListeningMode::NONE
    }
}

/// Privacy policy code before the receiver reports one
pub const PRIVACY_POLICY_NONE: &str = "000";

/// Google Cast version before the receiver reports one
pub const GOOGLE_CAST_VERSION_NONE: &str = "N/A";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PowerStatus::default(), PowerStatus::Standby);
        assert_eq!(SwitchStatus::default(), SwitchStatus::None);
        assert_eq!(ListeningMode::default(), ListeningMode::NONE);
    }

    #[test]
    fn test_listening_mode_name() {
        assert_eq!(ListeningMode(0x00).name(), Some("Stereo"));
        assert_eq!(ListeningMode::NONE.name(), None);
    }

    #[test]
    fn test_switch_is_on() {
        assert!(SwitchStatus::On.is_on());
        assert!(!SwitchStatus::Toggle.is_on());
    }
}
