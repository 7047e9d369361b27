//! # elix-loader
//!
//! Loader for the ICD-10-CM diagnosis map of the Elixhauser comorbidity index.
//!
//! The map is an external, versioned reference dataset: a table from
//! diagnosis-code prefix to comorbidity group. This crate parses the two
//! representations of that dataset and exposes the in-memory [`DxMap`] store
//! the scoring engine queries:
//!
//! - the tab-separated artifact this project treats as canonical
//!   ([`ArtifactParser`]), and
//! - the `Value $RCOMFMT` block of the AHRQ/HCUP publication the artifact is
//!   regenerated from when a new table is released ([`comfmt`]).
//!
//! The store is built once at process start and never mutated afterwards, so
//! it can be shared by reference across any number of concurrent scoring
//! calls.

#![warn(missing_docs)]

pub mod comfmt;
mod parser;
mod store;
mod types;

pub use parser::{ArtifactParser, MapEntry, ARTIFACT_COLUMNS};
pub use store::{rebuild_artifact, DxMap};
pub use types::{MapError, MapResult};

// Re-export elix-types for convenience
pub use elix_types;
