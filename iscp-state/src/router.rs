//! Message dispatch into the state store

use tracing::info;

use crate::change::ChangeType;
use crate::handlers::{Switch, TrackText};
use crate::message::Message;
use crate::ReceiverState;

impl ReceiverState {
    /// Fold one message into the state and report what changed
    ///
    /// Exactly one handler runs per message. Never fails: malformed payloads
    /// are logged and reported as [`ChangeType::None`].
    pub fn update(&mut self, msg: &Message) -> ChangeType {
        let kind = msg.kind();
        if !kind.is_high_frequency() {
            info!("<< {}", msg);
        }

        let changed = match msg {
            Message::PowerStatus(power) => self.process_power(*power),
            Message::FirmwareUpdate(status) => self.process_firmware(*status),
            Message::ReceiverInformation(xml) => self.process_receiver_information(xml),
            Message::InputSelector(input) => self.process_input(*input),
            Message::DimmerLevel(level) => self.process_dimmer(*level),
            Message::DigitalFilter(filter) => self.process_digital_filter(*filter),
            Message::AudioMuting(status) => self.process_switch(Switch::Muting, *status),
            Message::ListeningMode(mode) => self.process_listening_mode(*mode),
            Message::MasterVolume(level) => self.process_volume(*level),
            Message::AutoPower(status) => self.process_switch(Switch::AutoPower, *status),
            Message::HdmiCec(status) => self.process_switch(Switch::HdmiCec, *status),
            Message::SpeakerA(status) => self.process_switch(Switch::SpeakerA, *status),
            Message::SpeakerB(status) => self.process_switch(Switch::SpeakerB, *status),
            Message::GoogleCastVersion(version) => self.process_google_cast_version(version),
            Message::GoogleCastAnalytics(status) => {
                self.process_switch(Switch::GoogleCastAnalytics, *status)
            }
            Message::PrivacyPolicyStatus(code) => self.process_privacy_policy(code),
            Message::JacketArt(art) => self.process_jacket_art(art),
            Message::AlbumName(album) => self.process_track_text(TrackText::Album, album),
            Message::ArtistName(artist) => self.process_track_text(TrackText::Artist, artist),
            Message::TitleName(title) => self.process_track_text(TrackText::Title, title),
            Message::FileFormat(format) => self.process_track_text(TrackText::FileFormat, format),
            Message::TimeInfo(time) => self.process_time_info(time),
            Message::TrackInfo(track) => self.process_track_info(track),
            Message::PlayStatus(play) => self.process_play_status(play),
            Message::MenuStatus(status) => self.process_menu_status(status),
            Message::CustomPopup(popup) => self.process_popup(popup),
            Message::ListTitleInfo(title) => self.process_list_title(title),
            Message::XmlListInfo(xml) => self.process_xml_list(xml),
            Message::ListInfo(line) => self.process_list_line(line),
        };

        ChangeType::classify(kind, changed)
    }
}
