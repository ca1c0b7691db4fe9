use serde::Serialize;

/// IFC data types accepted in property declarations.
///
/// This is the closed set understood by the Revit IFC exporter for
/// user-defined property sets; anything else in a mapping file is rejected
/// at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IfcDataType {
    Area,
    Boolean,
    ClassificationReference,
    ColorTemperature,
    Count,
    Currency,
    ElectricalCurrent,
    ElectricalEfficacy,
    ElectricalVoltage,
    Force,
    Frequency,
    Identifier,
    Illuminance,
    Integer,
    Label,
    Length,
    Logical,
    LuminousFlux,
    LuminousIntensity,
    NormalisedRatio,
    PlaneAngle,
    PositiveLength,
    PositivePlaneAngle,
    PositiveRatio,
    Power,
    Pressure,
    Ratio,
    Real,
    Text,
    ThermalTransmittance,
    ThermodynamicTemperature,
    Volume,
    VolumetricFlowRate,
}

impl IfcDataType {
    pub const ALL: [IfcDataType; 33] = [
        IfcDataType::Area,
        IfcDataType::Boolean,
        IfcDataType::ClassificationReference,
        IfcDataType::ColorTemperature,
        IfcDataType::Count,
        IfcDataType::Currency,
        IfcDataType::ElectricalCurrent,
        IfcDataType::ElectricalEfficacy,
        IfcDataType::ElectricalVoltage,
        IfcDataType::Force,
        IfcDataType::Frequency,
        IfcDataType::Identifier,
        IfcDataType::Illuminance,
        IfcDataType::Integer,
        IfcDataType::Label,
        IfcDataType::Length,
        IfcDataType::Logical,
        IfcDataType::LuminousFlux,
        IfcDataType::LuminousIntensity,
        IfcDataType::NormalisedRatio,
        IfcDataType::PlaneAngle,
        IfcDataType::PositiveLength,
        IfcDataType::PositivePlaneAngle,
        IfcDataType::PositiveRatio,
        IfcDataType::Power,
        IfcDataType::Pressure,
        IfcDataType::Ratio,
        IfcDataType::Real,
        IfcDataType::Text,
        IfcDataType::ThermalTransmittance,
        IfcDataType::ThermodynamicTemperature,
        IfcDataType::Volume,
        IfcDataType::VolumetricFlowRate,
    ];

    /// Match a file token against the type set, case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(token))
    }

    /// Canonical spelling as written in mapping files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IfcDataType::Area => "Area",
            IfcDataType::Boolean => "Boolean",
            IfcDataType::ClassificationReference => "ClassificationReference",
            IfcDataType::ColorTemperature => "ColorTemperature",
            IfcDataType::Count => "Count",
            IfcDataType::Currency => "Currency",
            IfcDataType::ElectricalCurrent => "ElectricalCurrent",
            IfcDataType::ElectricalEfficacy => "ElectricalEfficacy",
            IfcDataType::ElectricalVoltage => "ElectricalVoltage",
            IfcDataType::Force => "Force",
            IfcDataType::Frequency => "Frequency",
            IfcDataType::Identifier => "Identifier",
            IfcDataType::Illuminance => "Illuminance",
            IfcDataType::Integer => "Integer",
            IfcDataType::Label => "Label",
            IfcDataType::Length => "Length",
            IfcDataType::Logical => "Logical",
            IfcDataType::LuminousFlux => "LuminousFlux",
            IfcDataType::LuminousIntensity => "LuminousIntensity",
            IfcDataType::NormalisedRatio => "NormalisedRatio",
            IfcDataType::PlaneAngle => "PlaneAngle",
            IfcDataType::PositiveLength => "PositiveLength",
            IfcDataType::PositivePlaneAngle => "PositivePlaneAngle",
            IfcDataType::PositiveRatio => "PositiveRatio",
            IfcDataType::Power => "Power",
            IfcDataType::Pressure => "Pressure",
            IfcDataType::Ratio => "Ratio",
            IfcDataType::Real => "Real",
            IfcDataType::Text => "Text",
            IfcDataType::ThermalTransmittance => "ThermalTransmittance",
            IfcDataType::ThermodynamicTemperature => "ThermodynamicTemperature",
            IfcDataType::Volume => "Volume",
            IfcDataType::VolumetricFlowRate => "VolumetricFlowRate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_matching_is_case_insensitive() {
        assert_eq!(IfcDataType::from_token("text"), Some(IfcDataType::Text));
        assert_eq!(IfcDataType::from_token("LENGTH"), Some(IfcDataType::Length));
        assert_eq!(
            IfcDataType::from_token("volumetricflowrate"),
            Some(IfcDataType::VolumetricFlowRate)
        );
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(IfcDataType::from_token("BogusType"), None);
        assert_eq!(IfcDataType::from_token(""), None);
    }

    #[test]
    fn every_canonical_spelling_round_trips() {
        for data_type in IfcDataType::ALL {
            assert_eq!(IfcDataType::from_token(data_type.as_str()), Some(data_type));
        }
    }
}
