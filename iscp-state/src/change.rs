//! Change classification
//!
//! Tells the presentation layer how much to redraw after a message.

use serde::Serialize;

use crate::message::MessageKind;

/// Category of change reported by [`ReceiverState::update`](crate::ReceiverState::update)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeType {
    /// Nothing observable changed
    None,
    /// Status, settings or track metadata
    Common,
    /// Only the playback position
    TimeSeek,
    /// Navigation context or item lists
    MediaItems,
    /// Zones, selectors and device properties
    ReceiverInfo,
}

impl ChangeType {
    /// Category a message kind falls into when its handler reports a change
    pub fn for_kind(kind: MessageKind) -> ChangeType {
        match kind {
            MessageKind::TimeInfo => ChangeType::TimeSeek,
            MessageKind::InputSelector
            | MessageKind::ListTitleInfo
            | MessageKind::XmlListInfo
            | MessageKind::ListInfo => ChangeType::MediaItems,
            MessageKind::ReceiverInformation => ChangeType::ReceiverInfo,
            _ => ChangeType::Common,
        }
    }

    /// Map a handler result onto its category
    pub fn classify(kind: MessageKind, changed: bool) -> ChangeType {
        if changed {
            Self::for_kind(kind)
        } else {
            ChangeType::None
        }
    }

    pub fn is_change(&self) -> bool {
        *self != ChangeType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ChangeType::classify(MessageKind::TimeInfo, true), ChangeType::TimeSeek);
        assert_eq!(ChangeType::classify(MessageKind::TimeInfo, false), ChangeType::None);
        assert_eq!(
            ChangeType::classify(MessageKind::InputSelector, true),
            ChangeType::MediaItems
        );
        assert_eq!(
            ChangeType::classify(MessageKind::ReceiverInformation, true),
            ChangeType::ReceiverInfo
        );
        assert_eq!(ChangeType::classify(MessageKind::CustomPopup, true), ChangeType::Common);
        assert_eq!(ChangeType::classify(MessageKind::JacketArt, true), ChangeType::Common);
    }

    #[test]
    fn test_is_change() {
        assert!(!ChangeType::None.is_change());
        assert!(ChangeType::Common.is_change());
    }
}
