//! Scoring models and the per-patient score record.

use crate::Comorbidity;

/// The two published scoring models of the comorbidity index.
///
/// # Examples
///
/// ```
/// use elix_types::ScoringModel;
///
/// assert_eq!(ScoringModel::Readmission.as_str(), "readmission");
/// assert_eq!(ScoringModel::Mortality.as_str(), "mortality");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringModel {
    /// Risk of 30-day readmission.
    Readmission,
    /// Risk of in-hospital mortality.
    Mortality,
}

impl ScoringModel {
    /// Both scoring models.
    pub const ALL: [ScoringModel; 2] = [Self::Readmission, Self::Mortality];

    /// Returns the lowercase model name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Readmission => "readmission",
            Self::Mortality => "mortality",
        }
    }
}

impl std::fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The comorbidity index computed for one patient.
///
/// Owned by the caller; nothing is retained by the engine between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Resolved comorbidity categories, sorted in tag order, each at most once.
    pub categories: Vec<Comorbidity>,
    /// Sum of readmission weights over the resolved categories.
    pub readmission: i32,
    /// Sum of mortality weights over the resolved categories.
    pub mortality: i32,
}

impl ScoreResult {
    /// Returns true if no diagnosis code resolved to a comorbidity.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns true if the given category is present in the resolved set.
    pub fn has(&self, category: Comorbidity) -> bool {
        self.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_display() {
        assert_eq!(ScoringModel::Readmission.to_string(), "readmission");
        assert_eq!(ScoringModel::ALL.len(), 2);
    }

    #[test]
    fn test_score_result_helpers() {
        let empty = ScoreResult {
            categories: vec![],
            readmission: 0,
            mortality: 0,
        };
        assert!(empty.is_empty());
        assert!(!empty.has(Comorbidity::HeartFailure));

        let result = ScoreResult {
            categories: vec![Comorbidity::HeartFailure],
            readmission: 13,
            mortality: 9,
        };
        assert!(!result.is_empty());
        assert!(result.has(Comorbidity::HeartFailure));
        assert!(!result.has(Comorbidity::Diabetes));
    }
}
