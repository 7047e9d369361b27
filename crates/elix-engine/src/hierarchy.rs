//! Clinical hierarchy resolution.
//!
//! Collapses the raw group set resolved from a patient's diagnosis codes
//! into the final comorbidity set. Hypertension combination groups fold
//! into complicated hypertension plus the conditions they document, and a
//! more severe category suppresses its simpler counterpart.

use std::collections::BTreeSet;

use elix_types::{Comorbidity, MapGroup};

/// Resolves a set of raw map groups into the final category set.
///
/// Presence is binary, so the pass works on set membership:
///
/// 1. Direct groups insert their category.
/// 2. Every hypertension group inserts `HypertensionCx`; groups documenting
///    heart failure or renal failure insert those categories as well.
/// 3. Suppression: complicated hypertension suppresses uncomplicated
///    hypertension, metastatic cancer suppresses solid tumor, and
///    complicated diabetes suppresses uncomplicated diabetes.
///
/// `Unmapped` groups contribute nothing. The output never contains a
/// hypertension combination group, only final categories.
pub(crate) fn resolve<I>(groups: I) -> BTreeSet<Comorbidity>
where
    I: IntoIterator<Item = MapGroup>,
{
    let mut present = BTreeSet::new();

    for group in groups {
        match group {
            MapGroup::Comorbidity(category) => {
                present.insert(category);
            }
            MapGroup::Hypertension(htn) => {
                present.insert(Comorbidity::HypertensionCx);
                if htn.implies_heart_failure() {
                    present.insert(Comorbidity::HeartFailure);
                }
                if htn.implies_renal_failure() {
                    present.insert(Comorbidity::RenalFailure);
                }
            }
            MapGroup::Unmapped => {}
        }
    }

    // Severity suppression, after all groups are folded in. The three rules
    // are independent of one another.
    if present.contains(&Comorbidity::HypertensionCx) {
        present.remove(&Comorbidity::Hypertension);
    }
    if present.contains(&Comorbidity::Metastasis) {
        present.remove(&Comorbidity::SolidTumor);
    }
    if present.contains(&Comorbidity::DiabetesCx) {
        present.remove(&Comorbidity::Diabetes);
    }

    present
}
