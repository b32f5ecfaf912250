//! Playback and menu capability values

use serde::{Deserialize, Serialize};

/// Transport state of the current track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayStatus {
    #[default]
    Stop,
    Play,
    Pause,
    FastForward,
    FastReverse,
    /// End of file
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RepeatStatus {
    #[default]
    Off,
    All,
    Folder,
    Repeat1,
    Disable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShuffleStatus {
    #[default]
    Off,
    All,
    Album,
    Folder,
    Disable,
}

/// Whether a menu feature (time seek, track menu) is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuToggle {
    Enable,
    Disable,
}

impl MenuToggle {
    pub fn is_enabled(&self) -> bool {
        matches!(self, MenuToggle::Enable)
    }
}

/// Feedback button offered by the playing service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Feed {
    #[default]
    Disable,
    Like,
    DontLike,
    Love,
    Ban,
    Episode,
    Ratings,
    BanBlack,
    BanWhite,
    Favorite,
}
