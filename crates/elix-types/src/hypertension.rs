//! Hypertension combination groups.
//!
//! The diagnosis map labels complicated hypertension codes with combination
//! groups that record whether the code also documents heart failure or renal
//! failure. Hierarchy resolution collapses every group into
//! `Comorbidity::HypertensionCx` plus the conditions it implies.

/// A hypertension combination group from the diagnosis map.
///
/// These tags never appear in a resolved category set; they exist only as
/// intermediate map values.
///
/// # Examples
///
/// ```
/// use elix_types::HypertensionGroup;
///
/// let group = HypertensionGroup::from_tag("HTNWCHF").unwrap();
/// assert!(group.implies_heart_failure());
/// assert!(!group.implies_renal_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HypertensionGroup {
    /// Hypertension complicating pregnancy (HTNPREG).
    Pregnancy,
    /// Hypertensive heart disease without heart failure (HTNWOCHF).
    HeartWithoutChf,
    /// Hypertensive heart disease with heart failure (HTNWCHF).
    HeartWithChf,
    /// Hypertensive renal disease without renal failure (HRENWORF).
    RenalWithoutFailure,
    /// Hypertensive renal disease with renal failure (HRENWRF).
    RenalWithFailure,
    /// Hypertensive heart and renal disease, neither failure (HHRWOHRF).
    HeartRenalWithoutFailure,
    /// Hypertensive heart and renal disease with heart failure (HHRWCHF).
    HeartRenalWithChf,
    /// Hypertensive heart and renal disease with renal failure (HHRWRF).
    HeartRenalWithRenalFailure,
    /// Hypertensive heart and renal disease with both failures (HHRWHRF).
    HeartRenalWithBoth,
    /// Other hypertension in pregnancy (OHTNPREG).
    OtherPregnancy,
}

impl HypertensionGroup {
    /// All hypertension combination groups.
    pub const ALL: [HypertensionGroup; 10] = [
        Self::Pregnancy,
        Self::HeartWithoutChf,
        Self::HeartWithChf,
        Self::RenalWithoutFailure,
        Self::RenalWithFailure,
        Self::HeartRenalWithoutFailure,
        Self::HeartRenalWithChf,
        Self::HeartRenalWithRenalFailure,
        Self::HeartRenalWithBoth,
        Self::OtherPregnancy,
    ];

    /// Creates a HypertensionGroup from its published tag.
    ///
    /// Returns `None` if the tag doesn't match a known group.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "HTNPREG" => Some(Self::Pregnancy),
            "HTNWOCHF" => Some(Self::HeartWithoutChf),
            "HTNWCHF" => Some(Self::HeartWithChf),
            "HRENWORF" => Some(Self::RenalWithoutFailure),
            "HRENWRF" => Some(Self::RenalWithFailure),
            "HHRWOHRF" => Some(Self::HeartRenalWithoutFailure),
            "HHRWCHF" => Some(Self::HeartRenalWithChf),
            "HHRWRF" => Some(Self::HeartRenalWithRenalFailure),
            "HHRWHRF" => Some(Self::HeartRenalWithBoth),
            "OHTNPREG" => Some(Self::OtherPregnancy),
            _ => None,
        }
    }

    /// Returns the published tag for this group.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pregnancy => "HTNPREG",
            Self::HeartWithoutChf => "HTNWOCHF",
            Self::HeartWithChf => "HTNWCHF",
            Self::RenalWithoutFailure => "HRENWORF",
            Self::RenalWithFailure => "HRENWRF",
            Self::HeartRenalWithoutFailure => "HHRWOHRF",
            Self::HeartRenalWithChf => "HHRWCHF",
            Self::HeartRenalWithRenalFailure => "HHRWRF",
            Self::HeartRenalWithBoth => "HHRWHRF",
            Self::OtherPregnancy => "OHTNPREG",
        }
    }

    /// Returns true if this group documents congestive heart failure.
    pub fn implies_heart_failure(self) -> bool {
        matches!(
            self,
            Self::HeartWithChf | Self::HeartRenalWithChf | Self::HeartRenalWithBoth
        )
    }

    /// Returns true if this group documents renal failure.
    pub fn implies_renal_failure(self) -> bool {
        matches!(
            self,
            Self::RenalWithFailure | Self::HeartRenalWithRenalFailure | Self::HeartRenalWithBoth
        )
    }
}
