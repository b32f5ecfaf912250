//! Navigation state and list reconciliation
//!
//! Three independently timed messages describe the receiver's menu: the
//! title/context message, the XML list snapshot and incremental list lines.
//! [`NavigationState`] merges them into one media item list and one network
//! service list. The two lists are only ever cleared together.

use serde::Serialize;
use tracing::debug;

use iscp_parser::XmlList;

use crate::compare::{eq_ignore_case, update_field, update_optional};
use crate::message::{ListInfo, ListTitleInfo};
use crate::model::{
    Icon, InformationType, LayerInfo, NetworkServiceItem, ServiceType, UiType, XmlListItem,
};

/// What the receiver's navigation UI currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavigationState {
    service_type: Option<ServiceType>,
    layer_info: Option<LayerInfo>,
    ui_type: Option<UiType>,
    title_bar: String,
    number_of_layers: u32,
    number_of_items: u32,
    media_items: Vec<XmlListItem>,
    service_items: Vec<NetworkServiceItem>,
    /// Names announced by incremental lines in a USB context
    pending_names: Vec<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service currently selected for browsing (may differ from the playing one)
    pub fn service_type(&self) -> Option<ServiceType> {
        self.service_type
    }

    pub fn layer_info(&self) -> Option<LayerInfo> {
        self.layer_info
    }

    pub fn ui_type(&self) -> Option<UiType> {
        self.ui_type
    }

    pub fn title_bar(&self) -> &str {
        &self.title_bar
    }

    pub fn number_of_layers(&self) -> u32 {
        self.number_of_layers
    }

    pub fn number_of_items(&self) -> u32 {
        self.number_of_items
    }

    pub fn media_items(&self) -> &[XmlListItem] {
        &self.media_items
    }

    pub fn service_items(&self) -> &[NetworkServiceItem] {
        &self.service_items
    }

    pub fn pending_names(&self) -> &[String] {
        &self.pending_names
    }

    pub fn is_playback_mode(&self) -> bool {
        self.ui_type == Some(UiType::Playback)
    }

    pub fn is_menu_mode(&self) -> bool {
        self.ui_type == Some(UiType::Menu)
    }

    pub fn is_usb(&self) -> bool {
        matches!(
            self.service_type,
            Some(ServiceType::UsbFront) | Some(ServiceType::UsbRear)
        )
    }

    /// Whether the list shown is the top of a service hierarchy
    pub fn is_top_layer(&self) -> bool {
        if self.is_playback_mode() {
            return false;
        }

        match self.layer_info {
            Some(LayerInfo::NetTop) => self.service_type == Some(ServiceType::Net),
            Some(LayerInfo::ServiceTop) => {
                self.is_usb() || self.service_type == Some(ServiceType::Unknown)
            }
            _ => false,
        }
    }

    pub fn is_media_empty(&self) -> bool {
        self.media_items.is_empty() && self.service_items.is_empty()
    }

    /// Whether the USB pending names agree with the media list
    ///
    /// Trivially true while the list is unsized, unlayered or nothing is
    /// pending; otherwise some pending name must match a media item title.
    pub fn list_info_consistent(&self) -> bool {
        if self.number_of_items == 0 || self.number_of_layers == 0 || self.pending_names.is_empty()
        {
            return true;
        }

        self.pending_names.iter().any(|name| {
            self.media_items
                .iter()
                .any(|item| eq_ignore_case(&item.title, name))
        })
    }

    /// Drop media and service items together
    pub(crate) fn clear_items(&mut self) {
        self.media_items.clear();
        self.service_items.clear();
    }

    /// Drop media items only; used when a list snapshot is rejected
    pub(crate) fn clear_media_items(&mut self) {
        self.media_items.clear();
    }

    /// Apply a title/context message
    ///
    /// A new selected service or UI mode invalidates both item lists.
    pub(crate) fn apply_title_info(&mut self, info: &ListTitleInfo) -> bool {
        let mut changed = false;

        if update_optional(&mut self.service_type, Some(info.service_type)) {
            self.clear_items();
            changed = true;
        }
        changed |= update_optional(&mut self.layer_info, Some(info.layer_info));
        if update_optional(&mut self.ui_type, Some(info.ui_type)) {
            self.clear_items();
            changed = true;
        }
        changed |= update_field(&mut self.title_bar, info.title_bar.clone());
        changed |= update_field(&mut self.number_of_layers, info.number_of_layers);
        changed |= update_field(&mut self.number_of_items, info.number_of_items);

        changed
    }

    /// Replace media items wholesale with a parsed list snapshot
    pub(crate) fn replace_media_items(&mut self, list: XmlList) {
        let layers = self.number_of_layers;
        let offset = list.offset;
        self.media_items = list
            .items
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                // Ids clamp at u32::MAX for offsets near the end of the range
                let id = offset.saturating_add(u32::try_from(i).unwrap_or(u32::MAX));
                XmlListItem::from_entry(id, layers, entry)
            })
            .collect();
    }

    /// Apply one incremental list line; returns whether an entry was appended
    pub(crate) fn apply_list_line(&mut self, line: &ListInfo) -> bool {
        if line.information_type == InformationType::Cursor {
            self.pending_names.clear();
            return false;
        }

        if self.service_type == Some(ServiceType::Net) {
            self.add_service_item(&line.listed_data)
        } else if self.is_usb() {
            if !self.pending_names.contains(&line.listed_data) {
                self.pending_names.push(line.listed_data.clone());
            }
            false
        } else if self.is_menu_mode() {
            self.add_menu_item(line)
        } else {
            false
        }
    }

    fn add_service_item(&mut self, name: &str) -> bool {
        let known = self
            .service_items
            .iter()
            .any(|item| eq_ignore_case(item.name(), name));
        if known {
            return false;
        }

        match NetworkServiceItem::from_listed_name(name) {
            Some(item) => {
                self.service_items.push(item);
                true
            }
            None => {
                debug!("Unknown network service '{}' skipped", name);
                false
            }
        }
    }

    fn add_menu_item(&mut self, line: &ListInfo) -> bool {
        let known = self
            .media_items
            .iter()
            .any(|item| eq_ignore_case(&item.title, &line.listed_data));
        if known {
            return false;
        }

        self.media_items.push(XmlListItem::new(
            line.line_info,
            0,
            line.listed_data.clone(),
            Icon::Unknown,
            true,
        ));
        true
    }
}

/// Derive current/max track from the PLAY entry of a play queue listing
///
/// Returns the 1-based position of the first playing item and the list length.
pub fn track_from_list(items: &[XmlListItem]) -> Option<(u32, u32)> {
    items
        .iter()
        .position(XmlListItem::is_playing)
        .map(|i| (i as u32 + 1, items.len() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iscp_parser::XmlListEntry;

    fn title_info(service: ServiceType, ui: UiType) -> ListTitleInfo {
        ListTitleInfo {
            service_type: service,
            layer_info: LayerInfo::ServiceTop,
            ui_type: ui,
            title_bar: String::new(),
            number_of_layers: 1,
            number_of_items: 3,
        }
    }

    fn line(kind: InformationType, index: u32, data: &str) -> ListInfo {
        ListInfo {
            information_type: kind,
            line_info: index,
            listed_data: data.to_string(),
        }
    }

    #[test]
    fn test_service_change_clears_lists() {
        let mut nav = NavigationState::new();
        assert!(nav.apply_title_info(&title_info(ServiceType::Net, UiType::List)));
        assert!(nav.apply_list_line(&line(InformationType::Unicode, 0, "Spotify")));
        assert_eq!(nav.service_items().len(), 1);

        assert!(nav.apply_title_info(&title_info(ServiceType::Deezer, UiType::List)));
        assert!(nav.is_media_empty());
    }

    #[test]
    fn test_identical_title_info_is_silent() {
        let mut nav = NavigationState::new();
        let info = title_info(ServiceType::MusicServer, UiType::List);
        assert!(nav.apply_title_info(&info));
        assert!(!nav.apply_title_info(&info));
    }

    #[test]
    fn test_usb_names_are_pending_only() {
        let mut nav = NavigationState::new();
        nav.apply_title_info(&title_info(ServiceType::UsbFront, UiType::List));
        assert!(!nav.apply_list_line(&line(InformationType::Unicode, 0, "Music")));
        assert!(!nav.apply_list_line(&line(InformationType::Unicode, 1, "Music")));
        assert!(!nav.apply_list_line(&line(InformationType::Unicode, 2, "music")));
        assert_eq!(nav.pending_names(), &["Music".to_string(), "music".to_string()]);

        nav.apply_list_line(&line(InformationType::Cursor, 0, ""));
        assert!(nav.pending_names().is_empty());
    }

    #[test]
    fn test_menu_lines_dedup_case_insensitive() {
        let mut nav = NavigationState::new();
        nav.apply_title_info(&title_info(ServiceType::Spotify, UiType::Menu));
        assert!(nav.apply_list_line(&line(InformationType::Unicode, 0, "Add to Playlist")));
        assert!(!nav.apply_list_line(&line(InformationType::Unicode, 1, "ADD TO PLAYLIST")));

        let item = &nav.media_items()[0];
        assert_eq!(item.message_id, 0);
        assert_eq!(item.number_of_layers, 0);
        assert_eq!(item.icon, Icon::Unknown);
        assert!(item.selectable);
    }

    #[test]
    fn test_lines_outside_known_context_are_ignored() {
        let mut nav = NavigationState::new();
        nav.apply_title_info(&title_info(ServiceType::Tidal, UiType::List));
        assert!(!nav.apply_list_line(&line(InformationType::Ascii, 0, "Anything")));
        assert!(nav.is_media_empty());
    }

    #[test]
    fn test_replace_tags_layer_count() {
        let mut nav = NavigationState::new();
        let mut info = title_info(ServiceType::MusicServer, UiType::List);
        info.number_of_layers = 4;
        nav.apply_title_info(&info);

        nav.replace_media_items(XmlList {
            offset: 0,
            total_items: 1,
            items: vec![XmlListEntry {
                icon_id: "29".to_string(),
                title: "Albums".to_string(),
                selectable: true,
            }],
        });
        assert_eq!(nav.media_items()[0].number_of_layers, 4);
        assert_eq!(nav.media_items()[0].icon, Icon::Folder);
    }

    #[test]
    fn test_replace_with_offset_at_limit() {
        let entry = |title: &str| XmlListEntry {
            icon_id: "2D".to_string(),
            title: title.to_string(),
            selectable: true,
        };
        let mut nav = NavigationState::new();
        nav.replace_media_items(XmlList {
            offset: u32::MAX,
            total_items: 2,
            items: vec![entry("A"), entry("B")],
        });
        let ids: Vec<u32> = nav.media_items().iter().map(|item| item.message_id).collect();
        assert_eq!(ids, vec![u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_unsized_list_is_consistent_with_pending_names() {
        let mut nav = NavigationState::new();
        let mut info = title_info(ServiceType::UsbRear, UiType::List);
        info.number_of_items = 0;
        info.number_of_layers = 2;
        nav.apply_title_info(&info);
        nav.apply_list_line(&line(InformationType::Unicode, 0, "Nowhere"));
        assert_eq!(nav.pending_names().len(), 1);
        assert!(nav.list_info_consistent());
    }

    #[test]
    fn test_top_layer() {
        let mut nav = NavigationState::new();
        let mut info = title_info(ServiceType::Net, UiType::List);
        info.layer_info = LayerInfo::NetTop;
        nav.apply_title_info(&info);
        assert!(nav.is_top_layer());

        info.ui_type = UiType::Playback;
        nav.apply_title_info(&info);
        assert!(!nav.is_top_layer());

        let mut nav = NavigationState::new();
        nav.apply_title_info(&title_info(ServiceType::UsbRear, UiType::List));
        assert!(nav.is_top_layer());
    }

    #[test]
    fn test_track_from_list() {
        let items: Vec<XmlListItem> = ["2D", "2D", "36", "2D"]
            .iter()
            .enumerate()
            .map(|(i, icon)| XmlListItem::new(i as u32, 1, format!("t{}", i), Icon::from_code(icon), true))
            .collect();
        assert_eq!(track_from_list(&items), Some((3, 4)));
        assert_eq!(track_from_list(&items[..2]), None);
    }
}
