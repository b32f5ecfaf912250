//! Navigation model: services, layers, UI modes and list items

use serde::{Deserialize, Serialize};

use iscp_parser::XmlListEntry;

/// A network or local media service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceType {
    MusicServer,
    Favorite,
    Vtuner,
    SiriusXm,
    Pandora,
    Rhapsody,
    LastFm,
    Napster,
    Slacker,
    Mediafly,
    Spotify,
    Aupeo,
    Radiko,
    EOnkyo,
    TuneIn,
    Mp3Tunes,
    Simfy,
    HomeMedia,
    Deezer,
    IHeartRadio,
    Airplay,
    Tidal,
    OnkyoMusic,
    /// Currently queued / playing track list
    PlayQueue,
    Chromecast,
    FlareConnect,
    UsbFront,
    UsbRear,
    InternetRadio,
    Net,
    Bluetooth,
    #[default]
    Unknown,
}

impl ServiceType {
    const ALL: [ServiceType; 32] = [
        ServiceType::MusicServer,
        ServiceType::Favorite,
        ServiceType::Vtuner,
        ServiceType::SiriusXm,
        ServiceType::Pandora,
        ServiceType::Rhapsody,
        ServiceType::LastFm,
        ServiceType::Napster,
        ServiceType::Slacker,
        ServiceType::Mediafly,
        ServiceType::Spotify,
        ServiceType::Aupeo,
        ServiceType::Radiko,
        ServiceType::EOnkyo,
        ServiceType::TuneIn,
        ServiceType::Mp3Tunes,
        ServiceType::Simfy,
        ServiceType::HomeMedia,
        ServiceType::Deezer,
        ServiceType::IHeartRadio,
        ServiceType::Airplay,
        ServiceType::Tidal,
        ServiceType::OnkyoMusic,
        ServiceType::PlayQueue,
        ServiceType::Chromecast,
        ServiceType::FlareConnect,
        ServiceType::UsbFront,
        ServiceType::UsbRear,
        ServiceType::InternetRadio,
        ServiceType::Net,
        ServiceType::Bluetooth,
        ServiceType::Unknown,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::MusicServer => "00",
            ServiceType::Favorite => "01",
            ServiceType::Vtuner => "02",
            ServiceType::SiriusXm => "03",
            ServiceType::Pandora => "04",
            ServiceType::Rhapsody => "05",
            ServiceType::LastFm => "06",
            ServiceType::Napster => "07",
            ServiceType::Slacker => "08",
            ServiceType::Mediafly => "09",
            ServiceType::Spotify => "0A",
            ServiceType::Aupeo => "0B",
            ServiceType::Radiko => "0C",
            ServiceType::EOnkyo => "0D",
            ServiceType::TuneIn => "0E",
            ServiceType::Mp3Tunes => "0F",
            ServiceType::Simfy => "10",
            ServiceType::HomeMedia => "11",
            ServiceType::Deezer => "12",
            ServiceType::IHeartRadio => "13",
            ServiceType::Airplay => "18",
            ServiceType::Tidal => "1B",
            ServiceType::OnkyoMusic => "1C",
            ServiceType::PlayQueue => "1D",
            ServiceType::Chromecast => "40",
            ServiceType::FlareConnect => "43",
            ServiceType::UsbFront => "F0",
            ServiceType::UsbRear => "F1",
            ServiceType::InternetRadio => "F2",
            ServiceType::Net => "F3",
            ServiceType::Bluetooth => "F4",
            ServiceType::Unknown => "FF",
        }
    }

    /// Display name, also used by the receiver when it lists services
    pub fn name(&self) -> &'static str {
        match self {
            ServiceType::MusicServer => "Music Server",
            ServiceType::Favorite => "Favorite",
            ServiceType::Vtuner => "vTuner",
            ServiceType::SiriusXm => "SiriusXM",
            ServiceType::Pandora => "Pandora",
            ServiceType::Rhapsody => "Rhapsody",
            ServiceType::LastFm => "Last.fm",
            ServiceType::Napster => "Napster",
            ServiceType::Slacker => "Slacker",
            ServiceType::Mediafly => "Mediafly",
            ServiceType::Spotify => "Spotify",
            ServiceType::Aupeo => "AUPEO!",
            ServiceType::Radiko => "radiko.jp",
            ServiceType::EOnkyo => "e-onkyo",
            ServiceType::TuneIn => "TuneIn Radio",
            ServiceType::Mp3Tunes => "MP3tunes",
            ServiceType::Simfy => "Simfy",
            ServiceType::HomeMedia => "Home Media",
            ServiceType::Deezer => "Deezer",
            ServiceType::IHeartRadio => "iHeartRadio",
            ServiceType::Airplay => "AirPlay",
            ServiceType::Tidal => "TIDAL",
            ServiceType::OnkyoMusic => "onkyo music",
            ServiceType::PlayQueue => "Play Queue",
            ServiceType::Chromecast => "Chromecast built-in",
            ServiceType::FlareConnect => "FlareConnect",
            ServiceType::UsbFront => "USB Front",
            ServiceType::UsbRear => "USB Rear",
            ServiceType::InternetRadio => "Internet Radio",
            ServiceType::Net => "NET",
            ServiceType::Bluetooth => "Bluetooth",
            ServiceType::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> ServiceType {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or(ServiceType::Unknown)
    }

    /// Map a listed service name onto a known service (case-insensitive)
    pub fn from_name(name: &str) -> ServiceType {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .unwrap_or(ServiceType::Unknown)
    }
}

/// Depth of the current list within the menu hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerInfo {
    /// Top of the NET service list
    NetTop,
    /// Top of a single service
    ServiceTop,
    Under2ndLayer,
}

/// What the receiver's on-screen UI is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiType {
    List,
    Menu,
    Playback,
    Popup,
    Keyboard,
    MenuList,
}

/// Kind of an incremental list line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InformationType {
    Ascii,
    /// Cursor position information, carries no entry
    Cursor,
    Unicode,
}

/// Icon of a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Icon {
    #[default]
    Unknown,
    Usb,
    Folder,
    Music,
    Search,
    /// The entry that is currently playing
    Play,
    FolderPlay,
    Server,
}

impl Icon {
    pub fn from_code(code: &str) -> Icon {
        match code.trim().to_ascii_uppercase().as_str() {
            "31" => Icon::Usb,
            "29" => Icon::Folder,
            "2D" => Icon::Music,
            "2F" => Icon::Search,
            "36" => Icon::Play,
            "2E" => Icon::FolderPlay,
            "30" => Icon::Server,
            _ => Icon::Unknown,
        }
    }
}

/// One entry of the navigable media list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlListItem {
    /// Position of the entry in the list it came from
    pub message_id: u32,
    /// Layer count at the time the entry was received
    pub number_of_layers: u32,
    pub title: String,
    pub icon: Icon,
    pub selectable: bool,
}

impl XmlListItem {
    pub fn new(
        message_id: u32,
        number_of_layers: u32,
        title: impl Into<String>,
        icon: Icon,
        selectable: bool,
    ) -> Self {
        Self {
            message_id,
            number_of_layers,
            title: title.into(),
            icon,
            selectable,
        }
    }

    /// Build an item from a parsed list snapshot entry
    pub fn from_entry(message_id: u32, number_of_layers: u32, entry: XmlListEntry) -> Self {
        Self {
            message_id,
            number_of_layers,
            icon: Icon::from_code(&entry.icon_id),
            title: entry.title,
            selectable: entry.selectable,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.icon == Icon::Play
    }
}

/// A network service offered at the top of the NET list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkServiceItem {
    pub service: ServiceType,
}

impl NetworkServiceItem {
    /// Recognise a listed service name; `None` for unknown services
    pub fn from_listed_name(name: &str) -> Option<Self> {
        match ServiceType::from_name(name) {
            ServiceType::Unknown => None,
            service => Some(Self { service }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.service.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_from_name() {
        assert_eq!(ServiceType::from_name("spotify"), ServiceType::Spotify);
        assert_eq!(ServiceType::from_name("TuneIn Radio"), ServiceType::TuneIn);
        assert_eq!(ServiceType::from_name("Nonexistent"), ServiceType::Unknown);
    }

    #[test]
    fn test_service_code_round_trip() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_code(service.code()), service);
        }
    }

    #[test]
    fn test_service_default_is_unknown() {
        assert_eq!(ServiceType::default(), ServiceType::Unknown);
    }

    #[test]
    fn test_icon_codes() {
        assert_eq!(Icon::from_code("36"), Icon::Play);
        assert_eq!(Icon::from_code("2d"), Icon::Music);
        assert_eq!(Icon::from_code("--"), Icon::Unknown);
    }

    #[test]
    fn test_item_from_entry() {
        let entry = XmlListEntry {
            icon_id: "36".to_string(),
            title: "Song".to_string(),
            selectable: true,
        };
        let item = XmlListItem::from_entry(4, 3, entry);
        assert_eq!(item.message_id, 4);
        assert_eq!(item.number_of_layers, 3);
        assert!(item.is_playing());
    }

    #[test]
    fn test_network_service_recognition() {
        let item = NetworkServiceItem::from_listed_name("DEEZER").unwrap();
        assert_eq!(item.name(), "Deezer");
        assert!(NetworkServiceItem::from_listed_name("Mystery FM").is_none());
    }
}
