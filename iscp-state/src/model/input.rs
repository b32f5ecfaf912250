//! Input selector values

use serde::{Deserialize, Serialize};

/// Input selected on the active zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputType {
    /// Not reported yet
    #[default]
    None,
    Video1,
    CblSat,
    Game,
    Aux1,
    Aux2,
    Pc,
    BdDvd,
    StrmBox,
    Tv,
    Tape1,
    Phono,
    Cd,
    Fm,
    Am,
    Tuner,
    MusicServer,
    InternetRadio,
    UsbFront,
    UsbRear,
    Net,
    UsbToggle,
    Airplay,
    Bluetooth,
    UniversalPort,
    Optical,
    Coaxial,
}

impl InputType {
    const ALL: [InputType; 26] = [
        InputType::Video1,
        InputType::CblSat,
        InputType::Game,
        InputType::Aux1,
        InputType::Aux2,
        InputType::Pc,
        InputType::BdDvd,
        InputType::StrmBox,
        InputType::Tv,
        InputType::Tape1,
        InputType::Phono,
        InputType::Cd,
        InputType::Fm,
        InputType::Am,
        InputType::Tuner,
        InputType::MusicServer,
        InputType::InternetRadio,
        InputType::UsbFront,
        InputType::UsbRear,
        InputType::Net,
        InputType::UsbToggle,
        InputType::Airplay,
        InputType::Bluetooth,
        InputType::UniversalPort,
        InputType::Optical,
        InputType::Coaxial,
    ];

    /// Selector code; matches the `id` of receiver selectors
    pub fn code(&self) -> &'static str {
        match self {
            InputType::None => "XX",
            InputType::Video1 => "00",
            InputType::CblSat => "01",
            InputType::Game => "02",
            InputType::Aux1 => "03",
            InputType::Aux2 => "04",
            InputType::Pc => "05",
            InputType::BdDvd => "10",
            InputType::StrmBox => "11",
            InputType::Tv => "12",
            InputType::Tape1 => "20",
            InputType::Phono => "22",
            InputType::Cd => "23",
            InputType::Fm => "24",
            InputType::Am => "25",
            InputType::Tuner => "26",
            InputType::MusicServer => "27",
            InputType::InternetRadio => "28",
            InputType::UsbFront => "29",
            InputType::UsbRear => "2A",
            InputType::Net => "2B",
            InputType::UsbToggle => "2C",
            InputType::Airplay => "2D",
            InputType::Bluetooth => "2E",
            InputType::UniversalPort => "40",
            InputType::Optical => "44",
            InputType::Coaxial => "45",
        }
    }

    /// Look up an input by selector code (case-insensitive)
    pub fn from_code(code: &str) -> InputType {
        Self::ALL
            .into_iter()
            .find(|input| input.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or(InputType::None)
    }

    /// Whether content on this input can be presented as an item list
    pub fn is_media_list(&self) -> bool {
        matches!(
            self,
            InputType::MusicServer
                | InputType::InternetRadio
                | InputType::UsbFront
                | InputType::UsbRear
                | InputType::Net
                | InputType::UsbToggle
        )
    }
}
