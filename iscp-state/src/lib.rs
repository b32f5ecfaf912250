//! ISCP Receiver State
//!
//! State aggregation core for clients of Onkyo/Integra style receivers
//! speaking ISCP. A transport layer decodes frames into [`Message`]s; the
//! core folds each one into a single [`ReceiverState`] and reports what kind
//! of redraw it warrants.
//!
//! # Architecture
//!
//! ```text
//! Message → ReceiverState::update → handler ─┬─► ArtworkAssembler
//!                  │                          └─► NavigationState (list reconciliation)
//!                  ▼
//!             ChangeType (None / Common / TimeSeek / MediaItems / ReceiverInfo)
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use iscp_state::{ChangeType, Message, ReceiverState};
//!
//! let mut state = ReceiverState::new(0);
//!
//! for msg in decoded_messages {
//!     match state.update(&msg) {
//!         ChangeType::None => {}
//!         ChangeType::TimeSeek => redraw_progress(&state),
//!         ChangeType::MediaItems => redraw_list(state.navigation().media_items()),
//!         _ => redraw_all(&state),
//!     }
//! }
//! ```
//!
//! # Sharing Across Threads
//!
//! ```rust,ignore
//! use iscp_state::{SharedState, ReceiverState};
//!
//! let shared = SharedState::new(ReceiverState::new(0));
//! let session = shared.clone();
//! std::thread::spawn(move || {
//!     for msg in receiver_messages() {
//!         session.update(&msg);
//!     }
//! });
//!
//! let snapshot = shared.snapshot();
//! println!("{}", serde_json::to_string(&snapshot.summary())?);
//! ```

// Core modules
pub mod artwork;
pub mod change;
pub mod compare;
pub mod message;
pub mod model;
pub mod navigation;
pub mod snapshot;
pub mod state;

// Update handlers and dispatch
mod handlers;
mod router;

// Cross-thread access
pub mod shared;

// Configuration
pub mod config;

// Error types
pub mod error;

// Logging infrastructure
pub mod logging;

// ============================================================================
// Re-exports
// ============================================================================

pub use artwork::{
    Artwork, ArtworkAssembler, ArtworkDecoder, AssemblyOutcome, ImageFormat, RawArtworkDecoder,
};
pub use change::ChangeType;
pub use config::{DecoderConfig, StateConfig, DEFAULT_ACTIVE_ZONE};
pub use message::{
    CustomPopup, ImageType, JacketArt, ListInfo, ListTitleInfo, MenuStatus, Message, MessageKind,
    PacketFlag, PlayInfo, TimeInfo, TrackInfo,
};
pub use navigation::{track_from_list, NavigationState};
pub use shared::SharedState;
pub use snapshot::{StateSnapshot, StateSummary};
pub use state::{CommonStatus, PlaybackStatus, ReceiverInfo, ReceiverState, TrackMetadata};

// Parsed payload types that appear in the state
pub use iscp_parser::{Selector, Zone};

// ============================================================================
// Re-exports - Error types
// ============================================================================

pub use error::{Result, StateError};

// ============================================================================
// Re-exports - Logging
// ============================================================================

pub use logging::{init_logging, init_logging_from_env, init_silent, LoggingError, LoggingMode};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::change::ChangeType;
    pub use crate::message::{JacketArt, Message, MessageKind};
    pub use crate::model::{InputType, PlayStatus, PowerStatus, ServiceType, UiType};
    pub use crate::shared::SharedState;
    pub use crate::snapshot::StateSnapshot;
    pub use crate::state::ReceiverState;
}
