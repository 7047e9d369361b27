//! # elix-engine
//!
//! Elixhauser comorbidity index scoring engine.
//!
//! Computes the readmission and mortality risk scores of the Elixhauser
//! comorbidity index from a patient's ICD-10-CM diagnosis codes. The
//! pipeline is a pure function over the in-memory diagnosis map:
//!
//! 1. normalize the input codes (trim, uppercase, strip periods, dedupe),
//! 2. resolve each code against the map by shortest-first prefix probing,
//! 3. collapse the raw group set through the clinical hierarchy,
//! 4. sum the published weights under both scoring models.
//!
//! ## Usage
//!
//! ```
//! use elix_engine::ElixhauserEngine;
//! use elix_loader::DxMap;
//!
//! let map = DxMap::from_pairs([("I509", "CHF"), ("E119", "DM")]).unwrap();
//! let engine = ElixhauserEngine::new(map);
//!
//! let result = engine.compute_index(["i50.9", "E119"]).unwrap();
//! assert_eq!(result.readmission, 13 + 6);
//! ```
//!
//! The engine holds no per-call state; one instance can serve any number of
//! concurrent callers. The `parallel` feature (default) adds a rayon-backed
//! [`ElixhauserEngine::compute_batch`] for scoring many patients at once.

#![warn(missing_docs)]

mod engine;
mod error;
mod hierarchy;
mod normalize;
mod scorer;

pub use engine::ElixhauserEngine;
pub use error::{EngineError, EngineResult};

// Re-export the vocabulary and loader crates for convenience
pub use elix_loader::{self, DxMap};
pub use elix_types::{self, Comorbidity, ScoreResult, ScoringModel};
