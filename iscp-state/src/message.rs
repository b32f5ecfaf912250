//! Decoded ISCP messages consumed by the state core
//!
//! The transport/codec layer turns raw frames into [`Message`] values. The set
//! is closed: every receiver capability the core tracks has exactly one
//! variant, and dispatch over it is an exhaustive `match`.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::artwork::Artwork;
use crate::model::{
    DigitalFilter, DimmerLevel, Feed, FirmwareStatus, InformationType, InputType, LayerInfo,
    ListeningMode, MenuToggle, PlayStatus, PowerStatus, RepeatStatus, ServiceType, ShuffleStatus,
    SwitchStatus, UiType,
};

/// A single decoded message from the receiver
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PowerStatus(PowerStatus),
    FirmwareUpdate(FirmwareStatus),
    /// Raw receiver information (capability discovery) XML
    ReceiverInformation(String),
    InputSelector(InputType),
    DimmerLevel(DimmerLevel),
    DigitalFilter(DigitalFilter),
    AudioMuting(SwitchStatus),
    ListeningMode(ListeningMode),
    /// Master volume; `None` when the receiver reports no level
    MasterVolume(Option<u8>),
    AutoPower(SwitchStatus),
    HdmiCec(SwitchStatus),
    SpeakerA(SwitchStatus),
    SpeakerB(SwitchStatus),
    GoogleCastVersion(String),
    GoogleCastAnalytics(SwitchStatus),
    PrivacyPolicyStatus(String),
    JacketArt(JacketArt),
    AlbumName(String),
    ArtistName(String),
    TitleName(String),
    FileFormat(String),
    TimeInfo(TimeInfo),
    TrackInfo(TrackInfo),
    PlayStatus(PlayInfo),
    MenuStatus(MenuStatus),
    CustomPopup(CustomPopup),
    ListTitleInfo(ListTitleInfo),
    /// Raw XML list snapshot
    XmlListInfo(String),
    ListInfo(ListInfo),
}

/// Kind tag of a [`Message`], used for classification and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    PowerStatus,
    FirmwareUpdate,
    ReceiverInformation,
    InputSelector,
    DimmerLevel,
    DigitalFilter,
    AudioMuting,
    ListeningMode,
    MasterVolume,
    AutoPower,
    HdmiCec,
    SpeakerA,
    SpeakerB,
    GoogleCastVersion,
    GoogleCastAnalytics,
    PrivacyPolicyStatus,
    JacketArt,
    AlbumName,
    ArtistName,
    TitleName,
    FileFormat,
    TimeInfo,
    TrackInfo,
    PlayStatus,
    MenuStatus,
    CustomPopup,
    ListTitleInfo,
    XmlListInfo,
    ListInfo,
}

impl MessageKind {
    /// Three letter ISCP command code
    pub fn code(&self) -> &'static str {
        match self {
            MessageKind::PowerStatus => "PWR",
            MessageKind::FirmwareUpdate => "UPD",
            MessageKind::ReceiverInformation => "NRI",
            MessageKind::InputSelector => "SLI",
            MessageKind::DimmerLevel => "DIM",
            MessageKind::DigitalFilter => "DGF",
            MessageKind::AudioMuting => "AMT",
            MessageKind::ListeningMode => "LMD",
            MessageKind::MasterVolume => "MVL",
            MessageKind::AutoPower => "APD",
            MessageKind::HdmiCec => "CEC",
            MessageKind::SpeakerA => "SPA",
            MessageKind::SpeakerB => "SPB",
            MessageKind::GoogleCastVersion => "CCV",
            MessageKind::GoogleCastAnalytics => "CCA",
            MessageKind::PrivacyPolicyStatus => "NPU",
            MessageKind::JacketArt => "NJA",
            MessageKind::AlbumName => "NAL",
            MessageKind::ArtistName => "NAT",
            MessageKind::TitleName => "NTI",
            MessageKind::FileFormat => "NFI",
            MessageKind::TimeInfo => "NTM",
            MessageKind::TrackInfo => "NTR",
            MessageKind::PlayStatus => "NST",
            MessageKind::MenuStatus => "NMS",
            MessageKind::CustomPopup => "NCP",
            MessageKind::ListTitleInfo => "NLT",
            MessageKind::XmlListInfo => "NLA",
            MessageKind::ListInfo => "NLS",
        }
    }

    /// Kinds that arrive many times per second and are not logged on receipt
    pub fn is_high_frequency(&self) -> bool {
        matches!(self, MessageKind::TimeInfo | MessageKind::JacketArt)
    }
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::PowerStatus(_) => MessageKind::PowerStatus,
            Message::FirmwareUpdate(_) => MessageKind::FirmwareUpdate,
            Message::ReceiverInformation(_) => MessageKind::ReceiverInformation,
            Message::InputSelector(_) => MessageKind::InputSelector,
            Message::DimmerLevel(_) => MessageKind::DimmerLevel,
            Message::DigitalFilter(_) => MessageKind::DigitalFilter,
            Message::AudioMuting(_) => MessageKind::AudioMuting,
            Message::ListeningMode(_) => MessageKind::ListeningMode,
            Message::MasterVolume(_) => MessageKind::MasterVolume,
            Message::AutoPower(_) => MessageKind::AutoPower,
            Message::HdmiCec(_) => MessageKind::HdmiCec,
            Message::SpeakerA(_) => MessageKind::SpeakerA,
            Message::SpeakerB(_) => MessageKind::SpeakerB,
            Message::GoogleCastVersion(_) => MessageKind::GoogleCastVersion,
            Message::GoogleCastAnalytics(_) => MessageKind::GoogleCastAnalytics,
            Message::PrivacyPolicyStatus(_) => MessageKind::PrivacyPolicyStatus,
            Message::JacketArt(_) => MessageKind::JacketArt,
            Message::AlbumName(_) => MessageKind::AlbumName,
            Message::ArtistName(_) => MessageKind::ArtistName,
            Message::TitleName(_) => MessageKind::TitleName,
            Message::FileFormat(_) => MessageKind::FileFormat,
            Message::TimeInfo(_) => MessageKind::TimeInfo,
            Message::TrackInfo(_) => MessageKind::TrackInfo,
            Message::PlayStatus(_) => MessageKind::PlayStatus,
            Message::MenuStatus(_) => MessageKind::MenuStatus,
            Message::CustomPopup(_) => MessageKind::CustomPopup,
            Message::ListTitleInfo(_) => MessageKind::ListTitleInfo,
            Message::XmlListInfo(_) => MessageKind::XmlListInfo,
            Message::ListInfo(_) => MessageKind::ListInfo,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind().code())?;
        match self {
            Message::ReceiverInformation(xml) | Message::XmlListInfo(xml) => {
                write!(f, "<{} bytes of XML>", xml.len())
            }
            Message::GoogleCastVersion(s)
            | Message::PrivacyPolicyStatus(s)
            | Message::AlbumName(s)
            | Message::ArtistName(s)
            | Message::TitleName(s)
            | Message::FileFormat(s) => write!(f, "{:?}", s),
            Message::JacketArt(art) => write!(f, "{}", art),
            Message::PowerStatus(v) => write!(f, "{:?}", v),
            Message::FirmwareUpdate(v) => write!(f, "{:?}", v),
            Message::InputSelector(v) => write!(f, "{:?}", v),
            Message::DimmerLevel(v) => write!(f, "{:?}", v),
            Message::DigitalFilter(v) => write!(f, "{:?}", v),
            Message::AudioMuting(v)
            | Message::AutoPower(v)
            | Message::HdmiCec(v)
            | Message::SpeakerA(v)
            | Message::SpeakerB(v)
            | Message::GoogleCastAnalytics(v) => write!(f, "{:?}", v),
            Message::ListeningMode(v) => write!(f, "{:02X}", v.code()),
            Message::MasterVolume(Some(level)) => write!(f, "{}", level),
            Message::MasterVolume(None) => write!(f, "N/A"),
            Message::TimeInfo(v) => write!(f, "{}/{}", v.current, v.max),
            Message::TrackInfo(v) => write!(f, "{:?}/{:?}", v.current, v.max),
            Message::PlayStatus(v) => write!(f, "{:?}", v),
            Message::MenuStatus(v) => write!(f, "{:?}", v),
            Message::CustomPopup(v) => write!(f, "<{} bytes of XML>", v.xml.len()),
            Message::ListTitleInfo(v) => write!(f, "{:?}", v),
            Message::ListInfo(v) => write!(f, "{:?}", v),
        }
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Elapsed and total time of the current track, as displayed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeInfo {
    pub current: String,
    pub max: String,
}

impl TimeInfo {
    pub fn new(current: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            max: max.into(),
        }
    }
}

/// Position of the current track in the play list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackInfo {
    pub current: Option<u32>,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayInfo {
    pub play: PlayStatus,
    pub repeat: RepeatStatus,
    pub shuffle: ShuffleStatus,
}

/// Menu capabilities of the playing service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStatus {
    pub time_seek: MenuToggle,
    pub track_menu: MenuToggle,
    pub service_icon: ServiceType,
    pub positive_feed: Feed,
    pub negative_feed: Feed,
}

/// Popup descriptor; the XML body is interpreted by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomPopup {
    pub xml: String,
}

/// Navigation context and title bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTitleInfo {
    pub service_type: ServiceType,
    pub layer_info: LayerInfo,
    pub ui_type: UiType,
    pub title_bar: String,
    pub number_of_layers: u32,
    pub number_of_items: u32,
}

/// One incremental list line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInfo {
    pub information_type: InformationType,
    /// Line index within the visible list
    pub line_info: u32,
    pub listed_data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Bmp,
    Jpeg,
    /// Artwork is delivered as a URL
    Link,
    None,
}

/// Position of a fragment in the artwork stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketFlag {
    Start,
    Middle,
    End,
    /// Single packet without stream framing
    NotUsed,
}

/// Album artwork, either by reference or as a binary fragment
#[derive(Debug, Clone, PartialEq)]
pub enum JacketArt {
    Url(String),
    Fragment {
        image_type: ImageType,
        flag: PacketFlag,
        data: Bytes,
    },
    /// The receiver has no artwork for the current track
    Unavailable,
    /// Artwork fetched outside the message loop, fed back in
    Resolved(Option<Artwork>),
}

impl JacketArt {
    pub fn fragment(image_type: ImageType, flag: PacketFlag, data: impl Into<Bytes>) -> Self {
        JacketArt::Fragment {
            image_type,
            flag,
            data: data.into(),
        }
    }
}

impl fmt::Display for JacketArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JacketArt::Url(url) => write!(f, "url {}", url),
            JacketArt::Fragment {
                image_type,
                flag,
                data,
            } => write!(f, "{:?} {:?} ({} bytes)", image_type, flag, data.len()),
            JacketArt::Unavailable => write!(f, "no image"),
            JacketArt::Resolved(Some(art)) => write!(f, "resolved {:?}", art.format),
            JacketArt::Resolved(None) => write!(f, "resolved, empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_code() {
        let msg = Message::MasterVolume(Some(40));
        assert_eq!(msg.kind(), MessageKind::MasterVolume);
        assert_eq!(msg.kind().code(), "MVL");
        assert_eq!(msg.to_string(), "MVL 40");
    }

    #[test]
    fn test_high_frequency_kinds() {
        assert!(MessageKind::TimeInfo.is_high_frequency());
        assert!(MessageKind::JacketArt.is_high_frequency());
        assert!(!MessageKind::PowerStatus.is_high_frequency());
    }

    #[test]
    fn test_display_hides_payloads() {
        let msg = Message::ReceiverInformation("<response/>".to_string());
        assert_eq!(msg.to_string(), "NRI <11 bytes of XML>");

        let art = Message::JacketArt(JacketArt::fragment(
            ImageType::Jpeg,
            PacketFlag::Middle,
            vec![0u8; 16],
        ));
        assert_eq!(art.to_string(), "NJA Jpeg Middle (16 bytes)");
    }
}
