//! Model types for iscp-state

mod input;
mod navigation;
mod playback;
mod status;

pub use input::InputType;
pub use navigation::{
    Icon, InformationType, LayerInfo, NetworkServiceItem, ServiceType, UiType, XmlListItem,
};
pub use playback::{Feed, MenuToggle, PlayStatus, RepeatStatus, ShuffleStatus};
pub use status::{
    DigitalFilter, DimmerLevel, FirmwareStatus, ListeningMode, PowerStatus, SwitchStatus,
    GOOGLE_CAST_VERSION_NONE, PRIVACY_POLICY_NONE,
};
