//! Published comorbidity index weights.
//!
//! Point values from the AHRQ/HCUP comorbidity index publication covering
//! ICD-10-CM data years 2012-2015. The tables are keyed by weight key, not
//! category tag: uncomplicated and complicated hypertension share the single
//! `HTN_C` entry (see [`Comorbidity::weight_key`](crate::Comorbidity::weight_key)).
//!
//! Weight values are a data/versioning event, not a runtime parameter; a new
//! publication means a new release of this crate.
//!
//! # Examples
//!
//! ```
//! use elix_types::{weights, ScoringModel};
//!
//! assert_eq!(weights::weight(ScoringModel::Readmission, "METS"), Some(21));
//! assert_eq!(weights::weight(ScoringModel::Mortality, "DRUG"), Some(-7));
//! assert_eq!(weights::weight(ScoringModel::Mortality, "HTNCX"), None);
//! ```

use crate::ScoringModel;

/// Readmission-model weights, in published key order.
pub const READMISSION: &[(&str, i32)] = &[
    ("AIDS", 19),
    ("ALCOHOL", 6),
    ("ANEMDEF", 9),
    ("ARTH", 4),
    ("BLDLOSS", 3),
    ("CHF", 13),
    ("CHRNLUNG", 8),
    ("COAG", 7),
    ("DEPRESS", 4),
    ("DM", 6),
    ("DMCX", 9),
    ("DRUG", 14),
    ("HTN_C", -1),
    ("HYPOTHY", 0),
    ("LIVER", 10),
    ("LYMPH", 16),
    ("LYTES", 8),
    ("METS", 21),
    ("NEURO", 7),
    ("OBESE", -3),
    ("PARA", 6),
    ("PERIVASC", 4),
    ("PSYCH", 10),
    ("PULMCIRC", 5),
    ("RENLFAIL", 15),
    ("TUMOR", 15),
    ("ULCER", 0),
    ("VALVE", 0),
    ("WGHTLOSS", 10),
];

/// Mortality-model weights, in published key order.
pub const MORTALITY: &[(&str, i32)] = &[
    ("AIDS", 0),
    ("ALCOHOL", -1),
    ("ANEMDEF", -2),
    ("ARTH", 0),
    ("BLDLOSS", -3),
    ("CHF", 9),
    ("CHRNLUNG", 3),
    ("COAG", 11),
    ("DEPRESS", -5),
    ("DM", 0),
    ("DMCX", -3),
    ("DRUG", -7),
    ("HTN_C", -1),
    ("HYPOTHY", 0),
    ("LIVER", 4),
    ("LYMPH", 6),
    ("LYTES", 11),
    ("METS", 14),
    ("NEURO", 5),
    ("OBESE", -5),
    ("PARA", 5),
    ("PERIVASC", 3),
    ("PSYCH", -5),
    ("PULMCIRC", 6),
    ("RENLFAIL", 6),
    ("TUMOR", 7),
    ("ULCER", 0),
    ("VALVE", 0),
    ("WGHTLOSS", 9),
];

/// Returns the weight table for a scoring model.
pub fn table(model: ScoringModel) -> &'static [(&'static str, i32)] {
    match model {
        ScoringModel::Readmission => READMISSION,
        ScoringModel::Mortality => MORTALITY,
    }
}

/// Looks up the weight for a key under the given model.
///
/// Returns `None` if the key is not in the published table. Callers scoring a
/// resolved category set must treat that as an internal-consistency failure,
/// not as zero: it means the diagnosis map and the weight tables disagree on
/// the category vocabulary.
pub fn weight(model: ScoringModel, key: &str) -> Option<i32> {
    table(model)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, w)| w)
}
