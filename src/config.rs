//! Configuration constants and domain defaults for document generation.

/// Maximum number of wells allowed in one blast block.
///
/// Temporary ceiling until the customer confirms the largest block volume
/// their loaders accept.
pub const MAX_WELLS_COUNT: u64 = 5000;

/// SOAP 1.1 envelope namespace, bound to the `x` prefix.
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Target-system namespace, bound to the `tem` prefix.
pub const TEMPURI_NS: &str = "http://tempuri.org/";

/// Fixed message identifier the MES endpoint expects on `mes_pmv`.
pub const MES_MESSAGE_ID: &str = "1022a282f6afb23b0f3b";

/// Source system identifier on `mes_pmv`.
pub const MES_SYSTEM_ID: &str = "MES";

/// Conversion factor: millimeters to meters (hole diameters are entered
/// in mm, the export schemas expect meters).
pub const MM_TO_M: f64 = 0.001;

/// Unit-of-measure code and label for depths.
pub const DEPTH_EOM_ID: &str = "006";
pub const DEPTH_EOM: &str = "м";

/// Unit-of-measure code and label for diameters.
pub const DIAMETER_EOM_ID: &str = "004";
pub const DIAMETER_EOM: &str = "мм";

/// Fixed planned subdrill carried on every MES hole.
pub const PLANNED_SUBDRILL: &str = "1";

/// Fixed explosive consumption ratio carried on every MES hole.
pub const EXPLOSIVE_RATIO_BY_WELL: &str = "1.252";

/// MES hole type code; the generator only ever produces explosive holes.
pub const HOLE_TYPE_CODE: &str = "Explosive";

/// Descriptive constants of a charge material entry. The generator always
/// loads the same explosive and the same initiation accessory; only the
/// mass amounts vary with the input.
pub struct MaterialDefaults {
    pub code: &'static str,
    pub short_name: &'static str,
    pub is_explosive: &'static str,
    pub density: &'static str,
    pub cup_density: &'static str,
}

/// Main explosive loaded into every hole.
pub const EXPLOSIVE: MaterialDefaults = MaterialDefaults {
    code: "1025160",
    short_name: "Вещество взрывчатое Березит Э-70",
    is_explosive: "true",
    density: "1200",
    cup_density: "0",
};

/// Initiation accessory (detonator) entry that precedes the explosive.
pub const DETONATOR: MaterialDefaults = MaterialDefaults {
    code: "1023292",
    short_name: "Детонатор Искра-Ш",
    is_explosive: "false",
    density: "1000",
    cup_density: "0",
};

/// Default amount carried by the detonator entry.
pub const DETONATOR_AMOUNT: &str = "0.75";

/// Micromine hole state label for freshly designed holes.
pub const MICROMINE_HOLE_TYPE: &str = "Запланировано";

/// Micromine interval type for the inert stemming column.
pub const STEMMING_INTERVAL_TYPE: &str = "Забойка";

/// Collar dip for vertical blast holes.
pub const COLLAR_DIP: f64 = -90.0;

/// Geomix charge accessory defaults.
pub const GEOMIX_EXPLOSIVE_TYPE: &str = "Гранулит М";
pub const GEOMIX_BOOSTER_TYPE: &str = "Патронит М-60";
pub const GEOMIX_DETONATOR_TYPE: &str = "Искра - Ш";

/// Explosive label used by the flat CSV blast project export.
pub const CSV_EXPLOSIVE_NAME: &str = "Тип ВВ 1";

use serde::{Deserialize, Serialize};

/// What the holes of this block are drilled through; selects the fixed
/// MES material name/code pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleMaterialType {
    #[default]
    Default,
    Ore,
    Overburden,
}

impl HoleMaterialType {
    /// Fixed MES labeling for this material type: `(name, code)`.
    pub fn mes_labeling(&self) -> (&'static str, &'static str) {
        match self {
            HoleMaterialType::Ore => ("Скважины руды", "1028255"),
            HoleMaterialType::Overburden => ("Скважины вскрыши", "1028251"),
            HoleMaterialType::Default => ("Взрывные скважины ВСДП", "1078066"),
        }
    }
}

/// Render a numeric value as the invariant decimal string every export
/// schema transmits. Normalizes negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(9.5), "9.5");
        assert_eq!(format_number(980.66), "980.66");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_mes_labeling() {
        assert_eq!(HoleMaterialType::Ore.mes_labeling().1, "1028255");
        assert_eq!(HoleMaterialType::Overburden.mes_labeling().1, "1028251");
        assert_eq!(HoleMaterialType::Default.mes_labeling().1, "1078066");
    }
}
