//! Trailer / truck equipment types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Equipment code reported for synthetic deadhead segments.
pub const DEADHEAD_CODE: &str = "DEADHEAD";

/// Error returned when parsing an unknown equipment code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown equipment code: {code}")]
pub struct InvalidEquipment {
    code: String,
}

/// Equipment a driver can haul with.
///
/// Request codes are the short codes drivers pick from (`V`, `R`, `RGN`...).
/// Load boards use a slightly different vocabulary for a few of them
/// (`RG`, `TK`, `CN`); both are accepted when parsing, and the request
/// code is what gets serialized.
///
/// # Examples
///
/// ```
/// use load_planner::domain::EquipmentType;
///
/// let rgn: EquipmentType = "RGN".parse().unwrap();
/// assert_eq!(rgn, "RG".parse().unwrap());
/// assert_eq!(rgn.code(), "RGN");
/// assert_eq!(rgn.board_code(), "RG");
///
/// assert!("XYZ".parse::<EquipmentType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EquipmentType {
    Van,
    BoxTruck,
    Flatbed,
    Reefer,
    StepDeck,
    DoubleDrop,
    Lowboy,
    Rgn,
    Tanker,
    AutoCarrier,
    Container,
    DumpTruck,
    HopperBottom,
    PowerOnly,
}

impl EquipmentType {
    /// Every equipment type, in request-code order.
    pub const ALL: [EquipmentType; 14] = [
        EquipmentType::Van,
        EquipmentType::BoxTruck,
        EquipmentType::Flatbed,
        EquipmentType::Reefer,
        EquipmentType::StepDeck,
        EquipmentType::DoubleDrop,
        EquipmentType::Lowboy,
        EquipmentType::Rgn,
        EquipmentType::Tanker,
        EquipmentType::AutoCarrier,
        EquipmentType::Container,
        EquipmentType::DumpTruck,
        EquipmentType::HopperBottom,
        EquipmentType::PowerOnly,
    ];

    /// The code drivers use when searching.
    pub fn code(self) -> &'static str {
        match self {
            EquipmentType::Van => "V",
            EquipmentType::BoxTruck => "SV",
            EquipmentType::Flatbed => "F",
            EquipmentType::Reefer => "R",
            EquipmentType::StepDeck => "SD",
            EquipmentType::DoubleDrop => "DD",
            EquipmentType::Lowboy => "LB",
            EquipmentType::Rgn => "RGN",
            EquipmentType::Tanker => "TNK",
            EquipmentType::AutoCarrier => "AC",
            EquipmentType::Container => "CONT",
            EquipmentType::DumpTruck => "DT",
            EquipmentType::HopperBottom => "HB",
            EquipmentType::PowerOnly => "PO",
        }
    }

    /// The code load boards use for this equipment.
    pub fn board_code(self) -> &'static str {
        match self {
            EquipmentType::Rgn => "RG",
            EquipmentType::Tanker => "TK",
            EquipmentType::Container => "CN",
            other => other.code(),
        }
    }
}

impl FromStr for EquipmentType {
    type Err = InvalidEquipment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        EquipmentType::ALL
            .into_iter()
            .find(|e| e.code() == upper || e.board_code() == upper)
            .ok_or(InvalidEquipment { code: s.to_string() })
    }
}

impl TryFrom<String> for EquipmentType {
    type Error = InvalidEquipment;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EquipmentType> for String {
    fn from(value: EquipmentType) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
