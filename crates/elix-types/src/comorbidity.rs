//! Final comorbidity categories.
//!
//! This module provides the `Comorbidity` enum covering the categories that
//! remain after hierarchy resolution, each carrying its published uppercase
//! tag from the AHRQ/HCUP comorbidity software.

/// A final Elixhauser comorbidity category.
///
/// These are the categories a patient's resolved set is drawn from; the
/// hypertension combination groups from the diagnosis map never appear here
/// directly, they collapse into [`HypertensionCx`](Self::HypertensionCx)
/// (plus the conditions they imply) during hierarchy resolution.
///
/// Variants are declared in published tag order, so the derived `Ord` sorts
/// a resolved set the way the reference tables list it.
///
/// # Examples
///
/// ```
/// use elix_types::Comorbidity;
///
/// let cat = Comorbidity::from_tag("RENLFAIL");
/// assert_eq!(cat, Some(Comorbidity::RenalFailure));
/// assert_eq!(Comorbidity::RenalFailure.tag(), "RENLFAIL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comorbidity {
    /// Acquired immune deficiency syndrome (AIDS).
    Aids,
    /// Alcohol abuse (ALCOHOL).
    Alcohol,
    /// Deficiency anemia (ANEMDEF).
    DeficiencyAnemia,
    /// Rheumatoid arthritis / collagen vascular disease (ARTH).
    Arthritis,
    /// Chronic blood loss anemia (BLDLOSS).
    BloodLossAnemia,
    /// Congestive heart failure (CHF).
    HeartFailure,
    /// Chronic pulmonary disease (CHRNLUNG).
    ChronicPulmonary,
    /// Coagulopathy (COAG).
    Coagulopathy,
    /// Depression (DEPRESS).
    Depression,
    /// Diabetes, uncomplicated (DM).
    Diabetes,
    /// Diabetes with chronic complications (DMCX).
    DiabetesCx,
    /// Drug abuse (DRUG).
    DrugAbuse,
    /// Hypertension, uncomplicated (HTN).
    Hypertension,
    /// Hypertension with complications (HTNCX).
    HypertensionCx,
    /// Hypothyroidism (HYPOTHY).
    Hypothyroidism,
    /// Liver disease (LIVER).
    LiverDisease,
    /// Lymphoma (LYMPH).
    Lymphoma,
    /// Fluid and electrolyte disorders (LYTES).
    FluidElectrolyte,
    /// Metastatic cancer (METS).
    Metastasis,
    /// Other neurological disorders (NEURO).
    OtherNeuro,
    /// Obesity (OBESE).
    Obesity,
    /// Paralysis (PARA).
    Paralysis,
    /// Peripheral vascular disorders (PERIVASC).
    PeripheralVascular,
    /// Psychoses (PSYCH).
    Psychosis,
    /// Pulmonary circulation disorders (PULMCIRC).
    PulmonaryCirculation,
    /// Renal failure (RENLFAIL).
    RenalFailure,
    /// Solid tumor without metastasis (TUMOR).
    SolidTumor,
    /// Peptic ulcer disease excluding bleeding (ULCER).
    PepticUlcer,
    /// Valvular disease (VALVE).
    ValvularDisease,
    /// Weight loss (WGHTLOSS).
    WeightLoss,
}

impl Comorbidity {
    /// All final categories, in tag order.
    pub const ALL: [Comorbidity; 30] = [
        Self::Aids,
        Self::Alcohol,
        Self::DeficiencyAnemia,
        Self::Arthritis,
        Self::BloodLossAnemia,
        Self::HeartFailure,
        Self::ChronicPulmonary,
        Self::Coagulopathy,
        Self::Depression,
        Self::Diabetes,
        Self::DiabetesCx,
        Self::DrugAbuse,
        Self::Hypertension,
        Self::HypertensionCx,
        Self::Hypothyroidism,
        Self::LiverDisease,
        Self::Lymphoma,
        Self::FluidElectrolyte,
        Self::Metastasis,
        Self::OtherNeuro,
        Self::Obesity,
        Self::Paralysis,
        Self::PeripheralVascular,
        Self::Psychosis,
        Self::PulmonaryCirculation,
        Self::RenalFailure,
        Self::SolidTumor,
        Self::PepticUlcer,
        Self::ValvularDisease,
        Self::WeightLoss,
    ];

    /// Creates a Comorbidity from its published tag.
    ///
    /// Returns `None` if the tag doesn't match a known category.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AIDS" => Some(Self::Aids),
            "ALCOHOL" => Some(Self::Alcohol),
            "ANEMDEF" => Some(Self::DeficiencyAnemia),
            "ARTH" => Some(Self::Arthritis),
            "BLDLOSS" => Some(Self::BloodLossAnemia),
            "CHF" => Some(Self::HeartFailure),
            "CHRNLUNG" => Some(Self::ChronicPulmonary),
            "COAG" => Some(Self::Coagulopathy),
            "DEPRESS" => Some(Self::Depression),
            "DM" => Some(Self::Diabetes),
            "DMCX" => Some(Self::DiabetesCx),
            "DRUG" => Some(Self::DrugAbuse),
            "HTN" => Some(Self::Hypertension),
            "HTNCX" => Some(Self::HypertensionCx),
            "HYPOTHY" => Some(Self::Hypothyroidism),
            "LIVER" => Some(Self::LiverDisease),
            "LYMPH" => Some(Self::Lymphoma),
            "LYTES" => Some(Self::FluidElectrolyte),
            "METS" => Some(Self::Metastasis),
            "NEURO" => Some(Self::OtherNeuro),
            "OBESE" => Some(Self::Obesity),
            "PARA" => Some(Self::Paralysis),
            "PERIVASC" => Some(Self::PeripheralVascular),
            "PSYCH" => Some(Self::Psychosis),
            "PULMCIRC" => Some(Self::PulmonaryCirculation),
            "RENLFAIL" => Some(Self::RenalFailure),
            "TUMOR" => Some(Self::SolidTumor),
            "ULCER" => Some(Self::PepticUlcer),
            "VALVE" => Some(Self::ValvularDisease),
            "WGHTLOSS" => Some(Self::WeightLoss),
            _ => None,
        }
    }

    /// Returns the published tag for this category.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Aids => "AIDS",
            Self::Alcohol => "ALCOHOL",
            Self::DeficiencyAnemia => "ANEMDEF",
            Self::Arthritis => "ARTH",
            Self::BloodLossAnemia => "BLDLOSS",
            Self::HeartFailure => "CHF",
            Self::ChronicPulmonary => "CHRNLUNG",
            Self::Coagulopathy => "COAG",
            Self::Depression => "DEPRESS",
            Self::Diabetes => "DM",
            Self::DiabetesCx => "DMCX",
            Self::DrugAbuse => "DRUG",
            Self::Hypertension => "HTN",
            Self::HypertensionCx => "HTNCX",
            Self::Hypothyroidism => "HYPOTHY",
            Self::LiverDisease => "LIVER",
            Self::Lymphoma => "LYMPH",
            Self::FluidElectrolyte => "LYTES",
            Self::Metastasis => "METS",
            Self::OtherNeuro => "NEURO",
            Self::Obesity => "OBESE",
            Self::Paralysis => "PARA",
            Self::PeripheralVascular => "PERIVASC",
            Self::Psychosis => "PSYCH",
            Self::PulmonaryCirculation => "PULMCIRC",
            Self::RenalFailure => "RENLFAIL",
            Self::SolidTumor => "TUMOR",
            Self::PepticUlcer => "ULCER",
            Self::ValvularDisease => "VALVE",
            Self::WeightLoss => "WGHTLOSS",
        }
    }

    /// Returns the key used for weight-table lookup.
    ///
    /// Uncomplicated and complicated hypertension share the single published
    /// weight entry `HTN_C`; every other category scores under its own tag.
    pub fn weight_key(self) -> &'static str {
        match self {
            Self::Hypertension | Self::HypertensionCx => "HTN_C",
            other => other.tag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for cat in Comorbidity::ALL {
            assert_eq!(Comorbidity::from_tag(cat.tag()), Some(cat));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Comorbidity::from_tag("HHRWHRF"), None);
        assert_eq!(Comorbidity::from_tag("chf"), None);
        assert_eq!(Comorbidity::from_tag(""), None);
    }

    #[test]
    fn test_weight_key_collapses_hypertension() {
        assert_eq!(Comorbidity::Hypertension.weight_key(), "HTN_C");
        assert_eq!(Comorbidity::HypertensionCx.weight_key(), "HTN_C");
        assert_eq!(Comorbidity::HeartFailure.weight_key(), "CHF");
        assert_eq!(Comorbidity::WeightLoss.weight_key(), "WGHTLOSS");
    }

    #[test]
    fn test_all_is_complete_and_ordered() {
        assert_eq!(Comorbidity::ALL.len(), 30);
        let mut sorted = Comorbidity::ALL;
        sorted.sort();
        assert_eq!(sorted, Comorbidity::ALL);
    }
}
