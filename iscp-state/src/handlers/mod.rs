//! Domain update handlers
//!
//! One `process_*` method per message kind. Each mutates its slice of the
//! [`ReceiverState`](crate::ReceiverState) and returns whether that slice
//! changed; classification happens in the router.

mod common;
mod navigation;
mod playback;
mod track;

pub(crate) use common::Switch;
pub(crate) use track::TrackText;
