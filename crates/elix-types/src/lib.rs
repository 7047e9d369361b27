//! # elix-types
//!
//! Type definitions for the Elixhauser comorbidity index.
//!
//! This crate provides the category vocabulary used when mapping ICD-10-CM
//! diagnosis codes to comorbidities: the final comorbidity categories, the
//! hypertension combination groups that collapse into them, and the published
//! readmission/mortality weight tables.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use elix_types::{Comorbidity, HypertensionGroup, MapGroup, ScoringModel, weights};
//!
//! // Parse a published category tag
//! let chf = Comorbidity::from_tag("CHF").unwrap();
//! assert_eq!(chf.tag(), "CHF");
//!
//! // Hypertension combination groups imply comorbid conditions
//! let group = HypertensionGroup::from_tag("HHRWHRF").unwrap();
//! assert!(group.implies_heart_failure());
//! assert!(group.implies_renal_failure());
//!
//! // Weight lookup uses the shared HTN_C key for both hypertension categories
//! let w = weights::weight(ScoringModel::Readmission, chf.weight_key());
//! assert_eq!(w, Some(13));
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! elix-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod comorbidity;
mod hypertension;
mod map_group;
mod score;
pub mod weights;

// Re-export all public types at crate root
pub use comorbidity::Comorbidity;
pub use hypertension::HypertensionGroup;
pub use map_group::MapGroup;
pub use score::{ScoreResult, ScoringModel};
