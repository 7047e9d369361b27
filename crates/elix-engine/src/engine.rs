//! The scoring engine and its public entry points.

use std::collections::BTreeSet;

use elix_loader::DxMap;
use elix_types::{MapGroup, ScoreResult, ScoringModel};

use crate::error::EngineResult;
use crate::{hierarchy, normalize, scorer};

/// The Elixhauser comorbidity index engine.
///
/// Owns the diagnosis map (loaded and validated before construction) and
/// computes scores for one patient per call. All per-call state is local,
/// so a single engine serves any number of concurrent callers.
///
/// # Example
///
/// ```
/// use elix_engine::{Comorbidity, ElixhauserEngine};
/// use elix_loader::DxMap;
///
/// let map = DxMap::from_pairs([("I509", "CHF")]).unwrap();
/// let engine = ElixhauserEngine::new(map);
///
/// let result = engine.compute_index_one("I50.9").unwrap();
/// assert_eq!(result.categories, [Comorbidity::HeartFailure]);
/// assert_eq!(result.readmission, 13);
/// assert_eq!(result.mortality, 9);
/// ```
#[derive(Debug, Clone)]
pub struct ElixhauserEngine {
    map: DxMap,
}

impl ElixhauserEngine {
    /// Creates an engine over a loaded diagnosis map.
    ///
    /// Map loading is the fallible step; see [`DxMap::from_path`] and
    /// friends. An engine cannot exist without a usable map.
    pub fn new(map: DxMap) -> Self {
        Self { map }
    }

    /// Returns the diagnosis map this engine scores against.
    pub fn map(&self) -> &DxMap {
        &self.map
    }

    /// Computes the comorbidity index for one patient's diagnosis codes.
    ///
    /// The computation is pure and order-independent: permuting or
    /// duplicating input codes does not change the result. Codes that match
    /// no map prefix are dropped silently.
    ///
    /// # Errors
    /// Fails only on [`EngineError::MissingWeight`](crate::EngineError::MissingWeight),
    /// which signals that the diagnosis map and weight tables are out of sync.
    pub fn compute_index<I, S>(&self, codes: I) -> EngineResult<ScoreResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = normalize::normalize_all(codes);

        let groups: BTreeSet<MapGroup> = codes
            .iter()
            .filter_map(|code| {
                let group = self.map.lookup(code);
                if group.is_none() {
                    tracing::trace!(code = code.as_str(), "diagnosis code matched no prefix");
                }
                group
            })
            .filter(|group| !group.is_unmapped())
            .collect();

        let categories = hierarchy::resolve(groups);
        let readmission = scorer::score(&categories, ScoringModel::Readmission)?;
        let mortality = scorer::score(&categories, ScoringModel::Mortality)?;

        tracing::debug!(
            codes = codes.len(),
            categories = categories.len(),
            readmission,
            mortality,
            "computed comorbidity index"
        );

        Ok(ScoreResult {
            categories: categories.into_iter().collect(),
            readmission,
            mortality,
        })
    }

    /// Computes the comorbidity index for a single diagnosis code.
    pub fn compute_index_one(&self, code: &str) -> EngineResult<ScoreResult> {
        self.compute_index(std::iter::once(code))
    }

    /// Computes the comorbidity index for many patients.
    ///
    /// Each element of `patients` is one patient's code list. With the
    /// `parallel` feature (default) the patients are scored on the rayon
    /// thread pool; otherwise sequentially. Output order matches input
    /// order either way.
    #[cfg(feature = "parallel")]
    pub fn compute_batch<S: AsRef<str> + Sync>(
        &self,
        patients: &[Vec<S>],
    ) -> EngineResult<Vec<ScoreResult>> {
        use rayon::prelude::*;

        patients
            .par_iter()
            .map(|codes| self.compute_index(codes))
            .collect()
    }

    /// Computes the comorbidity index for many patients, sequentially.
    #[cfg(not(feature = "parallel"))]
    pub fn compute_batch<S: AsRef<str>>(
        &self,
        patients: &[Vec<S>],
    ) -> EngineResult<Vec<ScoreResult>> {
        patients
            .iter()
            .map(|codes| self.compute_index(codes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elix_types::Comorbidity;

    fn test_engine() -> ElixhauserEngine {
        let map = DxMap::from_pairs([
            ("I10", "HTN"),
            ("I509", "CHF"),
            ("E119", "DM"),
            ("E1122", "DMCX"),
            ("C7800", "METS"),
            ("C3490", "TUMOR"),
            ("I130", "HHRWCHF"),
            ("I132", "HHRWHRF"),
            ("Z7901", "NONE"),
        ])
        .unwrap();
        ElixhauserEngine::new(map)
    }

    #[test]
    fn test_single_chf_code() {
        let result = test_engine().compute_index(["I509"]).unwrap();
        assert_eq!(result.categories, [Comorbidity::HeartFailure]);
        assert_eq!(result.readmission, 13);
        assert_eq!(result.mortality, 9);
    }

    #[test]
    fn test_dmcx_suppresses_dm() {
        let result = test_engine().compute_index(["E119", "E1122"]).unwrap();
        assert_eq!(result.categories, [Comorbidity::DiabetesCx]);
        assert_eq!(result.readmission, 9);
        assert_eq!(result.mortality, -3);
    }

    #[test]
    fn test_messy_duplicates_match_clean_input() {
        let engine = test_engine();
        let clean = engine.compute_index(["I509"]).unwrap();
        let messy = engine.compute_index(["i50.9", " I509 "]).unwrap();
        assert_eq!(clean, messy);
    }

    #[test]
    fn test_empty_and_unmatched_inputs() {
        let engine = test_engine();

        let empty = engine.compute_index::<[&str; 0], _>([]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.readmission, 0);
        assert_eq!(empty.mortality, 0);

        let unmatched = engine.compute_index(["K2190"]).unwrap();
        assert_eq!(unmatched, empty);

        // Codes the table explicitly lists as NONE also score nothing.
        let none = engine.compute_index(["Z7901"]).unwrap();
        assert_eq!(none, empty);
    }

    #[test]
    fn test_hypertension_combo_expands() {
        let result = test_engine().compute_index(["I132"]).unwrap();
        assert_eq!(
            result.categories,
            [
                Comorbidity::HeartFailure,
                Comorbidity::HypertensionCx,
                Comorbidity::RenalFailure,
            ]
        );
        // HTN_C + CHF + RENLFAIL
        assert_eq!(result.readmission, -1 + 13 + 15);
        assert_eq!(result.mortality, -1 + 9 + 6);
    }

    #[test]
    fn test_htncx_suppresses_htn_end_to_end() {
        let result = test_engine().compute_index(["I10", "I130"]).unwrap();
        assert!(result.has(Comorbidity::HypertensionCx));
        assert!(!result.has(Comorbidity::Hypertension));
        assert!(result.has(Comorbidity::HeartFailure));
    }

    #[test]
    fn test_mets_suppresses_tumor_end_to_end() {
        let result = test_engine().compute_index(["C3490", "C7800"]).unwrap();
        assert_eq!(result.categories, [Comorbidity::Metastasis]);
        assert_eq!(result.readmission, 21);
    }

    #[test]
    fn test_order_independence() {
        let engine = test_engine();
        let forward = engine.compute_index(["I509", "E1122", "C7800"]).unwrap();
        let backward = engine.compute_index(["C7800", "E1122", "I509"]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_idempotence() {
        let engine = test_engine();
        let first = engine.compute_index(["I509", "E119"]).unwrap();
        let second = engine.compute_index(["I509", "E119"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_code_entry_point() {
        let engine = test_engine();
        assert_eq!(
            engine.compute_index_one("I509").unwrap(),
            engine.compute_index(["I509"]).unwrap()
        );
    }

    #[test]
    fn test_no_hypertension_group_in_output() {
        let engine = test_engine();
        let result = engine.compute_index(["I130", "I132", "I10"]).unwrap();
        for category in &result.categories {
            assert!(Comorbidity::ALL.contains(category));
        }
    }

    #[test]
    fn test_compute_batch_matches_individual_calls() {
        let engine = test_engine();
        let patients = vec![
            vec!["I509"],
            vec!["E119", "E1122"],
            vec![],
            vec!["I132", "C7800"],
        ];

        let batch = engine.compute_batch(&patients).unwrap();

        assert_eq!(batch.len(), patients.len());
        for (codes, result) in patients.iter().zip(&batch) {
            assert_eq!(&engine.compute_index(codes).unwrap(), result);
        }
    }
}
