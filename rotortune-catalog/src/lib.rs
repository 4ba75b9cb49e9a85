//! Bundled Drone Class Catalogs
//!
//! ## Overview
//!
//! Class tables and presets are data, not code. This crate ships them as
//! JSON documents compiled in with `include_dir`, converts them into
//! [`rotortune_core`] types at one loading boundary, and keeps them in a
//! versioned [`CatalogRegistry`].
//!
//! ## Bundled Catalogs
//!
//! | catalog | classes | PID shape | weight ceilings | filter keys |
//! |---|---|---|---|---|
//! | `presets_v2` (default) | 8, 2.0"-10.0" | shared `{P, I, D}` | none | `gyro_cutoff`, `dterm_lowpass` |
//! | `analyzer_v1` | 6, 2.0"-10.0" | per axis | yes | `gyro_lpf2`, `dterm_lpf1`, `dyn_notch` |
//!
//! The two disagree on class boundaries and gains. Both are kept so either
//! can be selected by name; a corrected catalog can be loaded from a file
//! with [`CatalogRegistry::load_file`] and made the default.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "catalog": "presets",
//!   "version": "v2",
//!   "classes": [
//!     { "id": "micro", "size_range": [2.0, 2.5], "description": "Micro" }
//!   ],
//!   "baselines": {
//!     "micro": {
//!       "pid": { "P": 30, "I": 30, "D": 10 },
//!       "filter": { "gyro_cutoff": 250, "dterm_lowpass": 120 }
//!     }
//!   }
//! }
//! ```
//!
//! Classes may instead give `min_size`/`max_size`, an optional
//! `max_weight`, and inline `pid`/`filter`/`notes`. Filter keys may use any
//! alias known to [`FilterField`](rotortune_core::tuning::FilterField).
//!
//! A size is given one way only: `size_range` or `min_size`/`max_size`,
//! never both. A baseline, inline or under `baselines`, needs `pid` as soon
//! as any of `pid`/`filter`/`notes` is present; `filter` defaults to zero
//! cutoffs and no notch. Each PID term, axis and filter field may appear
//! once, under whichever alias.
//!
//! ## Usage Example
//!
//! ```rust
//! use rotortune_catalog::bundled_registry;
//! use rotortune_core::AdvisorRequest;
//!
//! let registry = bundled_registry().map_err(Clone::clone)?;
//! let advisor = registry.advisor(None)?;
//!
//! let analysis = advisor.analyze(&AdvisorRequest::from_preset("5_freestyle"));
//! assert_eq!(analysis.classification.class_id(), Some("freestyle"));
//! # Ok::<(), rotortune_catalog::LoadError>(())
//! ```

use rotortune_core::CatalogError;

pub mod documents;
pub mod normalize;
pub mod registry;
pub mod validation;

pub use registry::{CatalogMetadata, CatalogRegistry, CatalogSource, DEFAULT_CATALOG};
pub use validation::{CatalogIssue, CatalogReport, CatalogValidator, IssueType, Severity};

/// Catalog loading errors
///
/// These only occur while building reference data at startup.
#[derive(Debug, Clone, PartialEq, thiserror_no_std::Error)]
pub enum LoadError {
    #[error("Failed to parse document: {0}")]
    ParseError(String),

    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Catalog already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unknown field '{field}' in class '{class}'")]
    UnknownField { class: String, field: String },

    #[error("Missing field '{field}' in class '{class}'")]
    MissingField { class: String, field: String },

    #[error("Value of '{field}' out of range in class '{class}'")]
    BadValue { class: String, field: String },

    #[error("Field '{field}' given more than once in class '{class}'")]
    DuplicateField { class: String, field: String },

    #[error("Baseline for unknown class '{0}'")]
    OrphanBaseline(String),
}

lazy_static::lazy_static! {
    static ref BUNDLED: Result<CatalogRegistry, LoadError> = {
        let mut registry = CatalogRegistry::new();
        registry.load_defaults().map(|()| registry)
    };
}

/// Registry with every bundled catalog and preset, loaded on first use
///
/// A load failure is returned on every call rather than hidden.
pub fn bundled_registry() -> Result<&'static CatalogRegistry, &'static LoadError> {
    BUNDLED.as_ref()
}
