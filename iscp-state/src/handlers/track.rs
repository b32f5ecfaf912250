//! Track metadata and artwork handlers

use crate::artwork::AssemblyOutcome;
use crate::compare::{update_field, update_optional};
use crate::message::{JacketArt, TimeInfo, TrackInfo};
use crate::ReceiverState;

/// Which text field of the track a message targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackText {
    Album,
    Artist,
    Title,
    FileFormat,
}

impl ReceiverState {
    pub(crate) fn process_track_text(&mut self, field: TrackText, value: &str) -> bool {
        let slot = match field {
            TrackText::Album => &mut self.track.album,
            TrackText::Artist => &mut self.track.artist,
            TrackText::Title => &mut self.track.title,
            TrackText::FileFormat => &mut self.track.file_format,
        };
        update_field(slot, value.to_string())
    }

    pub(crate) fn process_time_info(&mut self, time: &TimeInfo) -> bool {
        let current = update_field(&mut self.track.current_time, time.current.clone());
        let max = update_field(&mut self.track.max_time, time.max.clone());
        current || max
    }

    pub(crate) fn process_track_info(&mut self, info: &TrackInfo) -> bool {
        let current = update_optional(&mut self.track.current_track, info.current);
        let max = update_optional(&mut self.track.max_track, info.max);
        current || max
    }

    /// Feed artwork through the assembler; only finished artwork is a change
    pub(crate) fn process_jacket_art(&mut self, art: &JacketArt) -> bool {
        match self.artwork.process(art) {
            AssemblyOutcome::Complete(cover) => {
                self.track.cover = cover;
                true
            }
            AssemblyOutcome::Pending | AssemblyOutcome::Ignored => false,
        }
    }
}
