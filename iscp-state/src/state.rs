//! Receiver state store
//!
//! [`ReceiverState`] is the single long-lived snapshot of one zone session.
//! It is mutated only through [`ReceiverState::update`](crate::ReceiverState::update);
//! everything else here is read access.
//!
//! ```text
//! ReceiverState
//! ├── receiver:   ReceiverInfo     (zones, selectors, device properties)
//! ├── common:     CommonStatus     (power, volume, settings)
//! ├── track:      TrackMetadata    (album/artist/title, time, artwork)
//! ├── playback:   PlaybackStatus   (play/repeat/shuffle, menu capabilities)
//! ├── navigation: NavigationState  (context, media and service items)
//! ├── popup:      Option<CustomPopup>
//! └── artwork:    ArtworkAssembler (transient fragment buffer)
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use iscp_parser::{Selector, Zone};

use crate::artwork::{Artwork, ArtworkAssembler, ArtworkDecoder, RawArtworkDecoder};
use crate::config::{StateConfig, DEFAULT_ACTIVE_ZONE};
use crate::message::CustomPopup;
use crate::model::{
    DigitalFilter, DimmerLevel, Feed, FirmwareStatus, InputType, ListeningMode, MenuToggle,
    PlayStatus, PowerStatus, RepeatStatus, ServiceType, ShuffleStatus, SwitchStatus,
    GOOGLE_CAST_VERSION_NONE, PRIVACY_POLICY_NONE,
};
use crate::navigation::NavigationState;
use crate::snapshot::StateSnapshot;
use crate::Result;

/// Capabilities discovered from the receiver information payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReceiverInfo {
    /// Raw payload of the last successfully parsed discovery message
    pub raw: Option<String>,
    pub device_properties: BTreeMap<String, String>,
    /// Service id to name
    pub network_services: BTreeMap<String, String>,
    pub zones: Vec<Zone>,
    /// Selectors valid for the active zone
    pub selectors: Vec<Selector>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonStatus {
    pub power: PowerStatus,
    pub firmware: FirmwareStatus,
    pub input: InputType,
    pub dimmer: DimmerLevel,
    pub digital_filter: DigitalFilter,
    pub muting: SwitchStatus,
    pub listening_mode: ListeningMode,
    pub volume: Option<u8>,
    pub auto_power: SwitchStatus,
    pub hdmi_cec: SwitchStatus,
    pub speaker_a: SwitchStatus,
    pub speaker_b: SwitchStatus,
    pub google_cast_version: String,
    pub google_cast_analytics: SwitchStatus,
    pub privacy_policy: String,
}

impl Default for CommonStatus {
    fn default() -> Self {
        Self {
            power: PowerStatus::default(),
            firmware: FirmwareStatus::default(),
            input: InputType::default(),
            dimmer: DimmerLevel::default(),
            digital_filter: DigitalFilter::default(),
            muting: SwitchStatus::default(),
            listening_mode: ListeningMode::default(),
            volume: None,
            auto_power: SwitchStatus::default(),
            hdmi_cec: SwitchStatus::default(),
            speaker_a: SwitchStatus::default(),
            speaker_b: SwitchStatus::default(),
            google_cast_version: GOOGLE_CAST_VERSION_NONE.to_string(),
            google_cast_analytics: SwitchStatus::default(),
            privacy_policy: PRIVACY_POLICY_NONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackMetadata {
    pub album: String,
    pub artist: String,
    pub title: String,
    pub current_time: String,
    pub max_time: String,
    /// 1-based; absent until reported or derived
    pub current_track: Option<u32>,
    pub max_track: Option<u32>,
    pub file_format: String,
    pub cover: Option<Artwork>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackStatus {
    pub play: PlayStatus,
    pub repeat: RepeatStatus,
    pub shuffle: ShuffleStatus,
    pub time_seek: MenuToggle,
    pub track_menu: MenuToggle,
    pub positive_feed: Feed,
    pub negative_feed: Feed,
    /// Service that is currently playing
    pub service_icon: ServiceType,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self {
            play: PlayStatus::default(),
            repeat: RepeatStatus::default(),
            shuffle: ShuffleStatus::default(),
            time_seek: MenuToggle::Enable,
            track_menu: MenuToggle::Enable,
            positive_feed: Feed::default(),
            negative_feed: Feed::default(),
            service_icon: ServiceType::Unknown,
        }
    }
}

/// Aggregated state of one receiver zone session
pub struct ReceiverState {
    pub(crate) active_zone: usize,
    pub(crate) config: StateConfig,
    pub(crate) receiver: ReceiverInfo,
    pub(crate) common: CommonStatus,
    pub(crate) track: TrackMetadata,
    pub(crate) playback: PlaybackStatus,
    pub(crate) navigation: NavigationState,
    pub(crate) popup: Option<CustomPopup>,
    pub(crate) artwork: ArtworkAssembler,
}

impl ReceiverState {
    /// Create a state for `active_zone` with default configuration
    pub fn new(active_zone: usize) -> Self {
        let config = StateConfig::new().with_active_zone(active_zone);
        let decoder = Arc::new(RawArtworkDecoder::new(&config.decoder));
        Self::build(config, decoder)
    }

    /// Create a state from a validated configuration
    pub fn with_config(config: StateConfig) -> Result<Self> {
        config.validate()?;
        let decoder = Arc::new(RawArtworkDecoder::new(&config.decoder));
        Ok(Self::build(config, decoder))
    }

    /// Create a state with a custom artwork decoder
    pub fn with_decoder(config: StateConfig, decoder: Arc<dyn ArtworkDecoder>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, decoder))
    }

    fn build(config: StateConfig, decoder: Arc<dyn ArtworkDecoder>) -> Self {
        Self {
            active_zone: config.active_zone,
            config,
            receiver: ReceiverInfo::default(),
            common: CommonStatus::default(),
            track: TrackMetadata::default(),
            playback: PlaybackStatus::default(),
            navigation: NavigationState::default(),
            popup: None,
            artwork: ArtworkAssembler::new(decoder),
        }
    }

    // ========================================================================
    // Field access
    // ========================================================================

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    pub fn receiver(&self) -> &ReceiverInfo {
        &self.receiver
    }

    pub fn common(&self) -> &CommonStatus {
        &self.common
    }

    pub fn track(&self) -> &TrackMetadata {
        &self.track
    }

    pub fn playback(&self) -> &PlaybackStatus {
        &self.playback
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn popup(&self) -> Option<&CustomPopup> {
        self.popup.as_ref()
    }

    pub fn cover(&self) -> Option<&Artwork> {
        self.track.cover.as_ref()
    }

    /// Whether an artwork fragment stream is in progress
    pub fn is_assembling_artwork(&self) -> bool {
        self.artwork.is_assembling()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn zones(&self) -> &[Zone] {
        &self.receiver.zones
    }

    pub fn device_selectors(&self) -> &[Selector] {
        &self.receiver.selectors
    }

    pub fn active_zone(&self) -> usize {
        self.active_zone
    }

    /// Zone info of the active zone; `None` before discovery
    pub fn active_zone_info(&self) -> Option<&Zone> {
        self.receiver.zones.get(self.active_zone)
    }

    /// Whether this session controls a zone other than the main one
    pub fn is_extended_zone(&self) -> bool {
        self.active_zone < self.receiver.zones.len() && self.active_zone != DEFAULT_ACTIVE_ZONE
    }

    /// Selector matching the current input; `None` before discovery
    pub fn actual_selector(&self) -> Option<&Selector> {
        let code = self.common.input.code();
        self.receiver.selectors.iter().find(|s| s.id == code)
    }

    pub fn is_on(&self) -> bool {
        self.common.power == PowerStatus::On
    }

    pub fn is_playing(&self) -> bool {
        self.playback.play != PlayStatus::Stop
    }

    pub fn is_playback_mode(&self) -> bool {
        self.navigation.is_playback_mode()
    }

    pub fn is_menu_mode(&self) -> bool {
        self.navigation.is_menu_mode()
    }

    pub fn is_usb(&self) -> bool {
        self.navigation.is_usb()
    }

    pub fn is_top_layer(&self) -> bool {
        self.navigation.is_top_layer()
    }

    pub fn is_media_empty(&self) -> bool {
        self.navigation.is_media_empty()
    }

    pub fn list_info_consistent(&self) -> bool {
        self.navigation.list_info_consistent()
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(self)
    }
}

impl Default for ReceiverState {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_ZONE)
    }
}

impl fmt::Display for ReceiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}; activeZone={}", self.common.power, self.active_zone)
    }
}

impl fmt::Debug for ReceiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiverState")
            .field("active_zone", &self.active_zone)
            .field("common", &self.common)
            .field("track", &self.track)
            .field("playback", &self.playback)
            .field("navigation", &self.navigation)
            .field("popup", &self.popup)
            .field("artwork", &self.artwork)
            .finish_non_exhaustive()
    }
}
