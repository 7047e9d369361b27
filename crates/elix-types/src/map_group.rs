//! Raw diagnosis-map groups.
//!
//! This module provides the `MapGroup` enum, the value side of the diagnosis
//! prefix map before hierarchy resolution.

use crate::{Comorbidity, HypertensionGroup};

/// The raw group a diagnosis-map entry resolves to.
///
/// A map entry either names a final comorbidity directly, names a
/// hypertension combination group, or carries the `NONE` sentinel the
/// published table uses for codes it lists without assigning a comorbidity.
///
/// # Examples
///
/// ```
/// use elix_types::{Comorbidity, MapGroup};
///
/// let group = MapGroup::from_tag("CHF");
/// assert_eq!(group, Some(MapGroup::Comorbidity(Comorbidity::HeartFailure)));
///
/// assert_eq!(MapGroup::from_tag("NONE"), Some(MapGroup::Unmapped));
/// assert_eq!(MapGroup::from_tag("BOGUS"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapGroup {
    /// The entry names a final comorbidity category.
    Comorbidity(Comorbidity),
    /// The entry names a hypertension combination group.
    Hypertension(HypertensionGroup),
    /// The `NONE`/empty sentinel: the code is listed but carries no comorbidity.
    Unmapped,
}

impl MapGroup {
    /// Creates a MapGroup from a published tag.
    ///
    /// `"NONE"` and the empty string map to [`MapGroup::Unmapped`]. Returns
    /// `None` for tags outside the published vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.is_empty() || tag == "NONE" {
            return Some(Self::Unmapped);
        }
        if let Some(group) = HypertensionGroup::from_tag(tag) {
            return Some(Self::Hypertension(group));
        }
        Comorbidity::from_tag(tag).map(Self::Comorbidity)
    }

    /// Returns the published tag for this group.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Comorbidity(cat) => cat.tag(),
            Self::Hypertension(group) => group.tag(),
            Self::Unmapped => "NONE",
        }
    }

    /// Returns true if this group contributes nothing to scoring.
    pub fn is_unmapped(self) -> bool {
        matches!(self, Self::Unmapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_direct_category() {
        assert_eq!(
            MapGroup::from_tag("DMCX"),
            Some(MapGroup::Comorbidity(Comorbidity::DiabetesCx))
        );
    }

    #[test]
    fn test_from_tag_hypertension_group() {
        assert_eq!(
            MapGroup::from_tag("HRENWRF"),
            Some(MapGroup::Hypertension(HypertensionGroup::RenalWithFailure))
        );
    }

    #[test]
    fn test_from_tag_sentinels() {
        assert_eq!(MapGroup::from_tag("NONE"), Some(MapGroup::Unmapped));
        assert_eq!(MapGroup::from_tag(""), Some(MapGroup::Unmapped));
        assert!(MapGroup::Unmapped.is_unmapped());
    }

    #[test]
    fn test_tag_roundtrip() {
        for cat in Comorbidity::ALL {
            let group = MapGroup::Comorbidity(cat);
            assert_eq!(MapGroup::from_tag(group.tag()), Some(group));
        }
        for hg in HypertensionGroup::ALL {
            let group = MapGroup::Hypertension(hg);
            assert_eq!(MapGroup::from_tag(group.tag()), Some(group));
        }
        assert_eq!(MapGroup::Unmapped.tag(), "NONE");
    }
}
