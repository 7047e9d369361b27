//! Engine error types.

use elix_types::ScoringModel;
use thiserror::Error;

/// Errors that can occur while computing a comorbidity index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A resolved category has no entry in a weight table.
    ///
    /// This is an internal-consistency failure: the diagnosis map and the
    /// weight tables have drifted apart. The call must abort rather than
    /// score the category as zero.
    #[error("no {model} weight for category {category}: diagnosis map and weight table out of sync")]
    MissingWeight {
        /// Tag of the category without a weight.
        category: &'static str,
        /// The model whose table is missing the entry.
        model: ScoringModel,
    },
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_weight_names_category_and_model() {
        let err = EngineError::MissingWeight {
            category: "CHF",
            model: ScoringModel::Mortality,
        };
        let msg = err.to_string();
        assert!(msg.contains("CHF"));
        assert!(msg.contains("mortality"));
    }
}
