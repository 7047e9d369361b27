//! Weight summation over a resolved category set.

use std::collections::BTreeSet;

use elix_types::{weights, Comorbidity, ScoringModel};

use crate::error::{EngineError, EngineResult};

/// Sums the weights of a resolved category set under one model.
///
/// Both hypertension categories score through the shared `HTN_C` weight key.
/// A category without a weight entry aborts the call: the diagnosis map and
/// the weight tables no longer agree on the category vocabulary, and a
/// silent zero would corrupt every downstream score.
pub(crate) fn score(categories: &BTreeSet<Comorbidity>, model: ScoringModel) -> EngineResult<i32> {
    let mut total = 0;
    for category in categories {
        total += weights::weight(model, category.weight_key()).ok_or(EngineError::MissingWeight {
            category: category.tag(),
            model,
        })?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats<const N: usize>(set: [Comorbidity; N]) -> BTreeSet<Comorbidity> {
        set.into_iter().collect()
    }

    #[test]
    fn test_empty_set_scores_zero() {
        assert_eq!(score(&cats([]), ScoringModel::Readmission).unwrap(), 0);
        assert_eq!(score(&cats([]), ScoringModel::Mortality).unwrap(), 0);
    }

    #[test]
    fn test_single_category() {
        let set = cats([Comorbidity::HeartFailure]);
        assert_eq!(score(&set, ScoringModel::Readmission).unwrap(), 13);
        assert_eq!(score(&set, ScoringModel::Mortality).unwrap(), 9);
    }

    #[test]
    fn test_negative_weights_sum() {
        let set = cats([Comorbidity::Obesity, Comorbidity::Depression]);
        assert_eq!(score(&set, ScoringModel::Readmission).unwrap(), -3 + 4);
        assert_eq!(score(&set, ScoringModel::Mortality).unwrap(), -5 + -5);
    }

    #[test]
    fn test_hypertension_categories_use_shared_key() {
        assert_eq!(
            score(&cats([Comorbidity::Hypertension]), ScoringModel::Readmission).unwrap(),
            -1
        );
        assert_eq!(
            score(
                &cats([Comorbidity::HypertensionCx]),
                ScoringModel::Readmission
            )
            .unwrap(),
            -1
        );
    }

    #[test]
    fn test_every_category_scores_under_both_models() {
        let all = cats(Comorbidity::ALL);
        assert!(score(&all, ScoringModel::Readmission).is_ok());
        assert!(score(&all, ScoringModel::Mortality).is_ok());
    }
}
