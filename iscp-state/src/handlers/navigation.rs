//! Navigation list and popup handlers

use tracing::{debug, info, warn};

use iscp_parser::XmlList;

use crate::message::{CustomPopup, ListInfo, ListTitleInfo};
use crate::model::ServiceType;
use crate::navigation::track_from_list;
use crate::{ReceiverState, StateError};

impl ReceiverState {
    pub(crate) fn process_popup(&mut self, popup: &CustomPopup) -> bool {
        self.popup = Some(popup.clone());
        true
    }

    pub(crate) fn process_list_title(&mut self, title: &ListTitleInfo) -> bool {
        self.navigation.apply_title_info(title)
    }

    pub(crate) fn process_list_line(&mut self, line: &ListInfo) -> bool {
        self.navigation.apply_list_line(line)
    }

    /// Replace media items from a list snapshot
    ///
    /// In the play queue the playing entry also fills in the track position
    /// when the receiver has not reported both indices.
    pub(crate) fn process_xml_list(&mut self, xml: &str) -> bool {
        let input = self.common.input;
        if !input.is_media_list() {
            self.navigation.clear_media_items();
            info!("List skipped: input {:?} is not a media list", input);
            return true;
        }

        let list = match XmlList::from_xml(xml).map_err(StateError::from) {
            Ok(list) => list,
            Err(e) => {
                self.navigation.clear_media_items();
                warn!("Can not parse media list: {}", e);
                return false;
            }
        };

        debug!(
            "Media list: {} of {} items from offset {}",
            list.items.len(),
            list.total_items,
            list.offset
        );
        self.navigation.replace_media_items(list);

        let in_play_queue = self.navigation.service_type() == Some(ServiceType::PlayQueue);
        if in_play_queue && (self.track.current_track.is_none() || self.track.max_track.is_none())
        {
            if let Some((current, max)) = track_from_list(self.navigation.media_items()) {
                debug!("Track {}/{} derived from play queue", current, max);
                self.track.current_track = Some(current);
                self.track.max_track = Some(max);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputType;

    #[test]
    fn test_popup_always_changes() {
        let mut state = ReceiverState::new(0);
        let popup = CustomPopup {
            xml: "<popup/>".to_string(),
        };
        assert!(state.process_popup(&popup));
        assert!(state.process_popup(&popup));
        assert_eq!(state.popup(), Some(&popup));
    }

    #[test]
    fn test_list_rejected_on_non_list_input() {
        let mut state = ReceiverState::new(0);
        state.process_input(InputType::Tv);
        assert!(state.process_xml_list("<response status=\"ok\"><items/></response>"));
        assert!(state.navigation().media_items().is_empty());
    }

    #[test]
    fn test_unparsable_list_clears_items() {
        let mut state = ReceiverState::new(0);
        state.process_input(InputType::Net);
        let xml = r#"<response status="ok"><items offset="0" totalitems="1">
            <item iconid="29" title="Folder" selectable="1"/></items></response>"#;
        assert!(state.process_xml_list(xml));
        assert_eq!(state.navigation().media_items().len(), 1);

        assert!(!state.process_xml_list(r#"<response status="error"/>"#));
        assert!(state.navigation().media_items().is_empty());
    }
}
