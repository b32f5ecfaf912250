//! Owned state snapshot for readers outside the update loop

use serde::Serialize;

use iscp_parser::{Selector, Zone};

use crate::message::CustomPopup;
use crate::model::{InputType, PowerStatus};
use crate::navigation::NavigationState;
use crate::state::{CommonStatus, PlaybackStatus, ReceiverInfo, TrackMetadata};
use crate::ReceiverState;

/// A copy of the receiver state that can be read without holding the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub active_zone: usize,
    pub receiver: ReceiverInfo,
    pub common: CommonStatus,
    pub track: TrackMetadata,
    pub playback: PlaybackStatus,
    pub navigation: NavigationState,
    pub popup: Option<CustomPopup>,
}

impl StateSnapshot {
    pub(crate) fn capture(state: &ReceiverState) -> Self {
        Self {
            active_zone: state.active_zone,
            receiver: state.receiver.clone(),
            common: state.common.clone(),
            track: state.track.clone(),
            playback: state.playback.clone(),
            navigation: state.navigation.clone(),
            popup: state.popup.clone(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.common.power == PowerStatus::On
    }

    pub fn active_zone_info(&self) -> Option<&Zone> {
        self.receiver.zones.get(self.active_zone)
    }

    pub fn actual_selector(&self) -> Option<&Selector> {
        let code = self.common.input.code();
        self.receiver.selectors.iter().find(|s| s.id == code)
    }

    /// Compact view without item lists or artwork bytes
    pub fn summary(&self) -> StateSummary<'_> {
        StateSummary {
            power: &self.common.power,
            input: &self.common.input,
            volume: self.common.volume,
            title: &self.track.title,
            artist: &self.track.artist,
            album: &self.track.album,
            has_cover: self.track.cover.is_some(),
            media_items: self.navigation.media_items().len(),
            service_items: self.navigation.service_items().len(),
        }
    }
}

/// Compact view of a snapshot for status lines and logs
#[derive(Debug, Serialize)]
pub struct StateSummary<'a> {
    pub power: &'a PowerStatus,
    pub input: &'a InputType,
    pub volume: Option<u8>,
    pub title: &'a str,
    pub artist: &'a str,
    pub album: &'a str,
    pub has_cover: bool,
    pub media_items: usize,
    pub service_items: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = ReceiverState::new(0);
        state.update(&Message::TitleName("First".to_string()));
        let snapshot = state.snapshot();
        state.update(&Message::TitleName("Second".to_string()));

        assert_eq!(snapshot.track.title, "First");
        assert_eq!(state.track().title, "Second");
    }

    #[test]
    fn test_summary_serializes() {
        let mut state = ReceiverState::new(0);
        state.update(&Message::PowerStatus(PowerStatus::On));
        let snapshot = state.snapshot();
        assert!(snapshot.is_on());

        let json = serde_json::to_value(snapshot.summary()).unwrap();
        assert_eq!(json["power"], "On");
        assert_eq!(json["has_cover"], false);
    }
}
