//! Playback and menu status handlers

use crate::compare::update_field;
use crate::message::{MenuStatus, PlayInfo};
use crate::ReceiverState;

impl ReceiverState {
    pub(crate) fn process_play_status(&mut self, info: &PlayInfo) -> bool {
        let play = update_field(&mut self.playback.play, info.play);
        let repeat = update_field(&mut self.playback.repeat, info.repeat);
        let shuffle = update_field(&mut self.playback.shuffle, info.shuffle);
        play || repeat || shuffle
    }

    pub(crate) fn process_menu_status(&mut self, status: &MenuStatus) -> bool {
        let playback = &mut self.playback;
        // Non-short-circuit: every field is stored
        update_field(&mut playback.time_seek, status.time_seek)
            | update_field(&mut playback.track_menu, status.track_menu)
            | update_field(&mut playback.service_icon, status.service_icon)
            | update_field(&mut playback.positive_feed, status.positive_feed)
            | update_field(&mut playback.negative_feed, status.negative_feed)
    }
}
