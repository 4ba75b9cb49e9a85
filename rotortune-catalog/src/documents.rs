//! Raw Catalog and Preset Documents
//!
//! These structs mirror the JSON on disk as closely as possible. Nothing
//! here interprets field names beyond what serde needs; vocabulary
//! differences are resolved in [`normalize`](crate::normalize).

use std::collections::BTreeMap;

use include_dir::{include_dir, Dir};
use serde::Deserialize;

/// Documents compiled into the crate
pub(crate) static BUNDLED_DATA: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Directory of bundled catalog documents, relative to [`BUNDLED_DATA`]
pub(crate) const CATALOG_DIR: &str = "catalogs";

/// Bundled preset document, relative to [`BUNDLED_DATA`]
pub(crate) const PRESET_FILE: &str = "presets.json";

/// One catalog document
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    /// Catalog family, e.g. `"presets"`
    pub catalog: String,

    /// Version tag, e.g. `"v2"`
    pub version: String,

    /// What this catalog is for
    #[serde(default)]
    pub description: Option<String>,

    /// Class entries in document order
    pub classes: Vec<ClassEntry>,

    /// Baselines keyed by class id, for documents that keep them apart from the classes
    #[serde(default)]
    pub baselines: BTreeMap<String, BaselineEntry>,
}

impl CatalogDocument {
    /// Registry name, e.g. `"presets_v2"`
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.catalog, self.version)
    }
}

/// One class as written
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    pub id: String,

    #[serde(default)]
    pub min_size: Option<f32>,

    #[serde(default)]
    pub max_size: Option<f32>,

    /// `[min, max]`; takes precedence over `min_size`/`max_size`
    #[serde(default)]
    pub size_range: Option<[f32; 2]>,

    #[serde(default)]
    pub max_weight: Option<f32>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub pid: Option<PidEntry>,

    #[serde(default)]
    pub filter: Option<FilterEntry>,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Baseline stored outside the class list
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaselineEntry {
    pub pid: Option<PidEntry>,

    #[serde(default)]
    pub filter: Option<FilterEntry>,

    #[serde(default)]
    pub notes: Option<String>,
}

/// PID gains in either stored shape
///
/// Keys are not interpreted here: `{"roll": {"p": ..}}` and `{"P": ..}`
/// both deserialize, and unknown keys are caught during normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PidEntry {
    /// Axis name to term name to gain
    PerAxis(BTreeMap<String, BTreeMap<String, u16>>),
    /// Term name to gain
    Shared(BTreeMap<String, u16>),
}

/// Filter key (any alias) to value; `null` disables a setting
pub type FilterEntry = BTreeMap<String, Option<u16>>;

/// Preset document
#[derive(Debug, Clone, Deserialize)]
pub struct PresetDocument {
    pub presets: BTreeMap<String, PresetEntry>,
}

/// One preset as written
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetEntry {
    #[serde(default, rename = "class")]
    pub class_id: Option<String>,

    #[serde(default)]
    pub size: Option<f32>,

    #[serde(default)]
    pub weight: Option<f32>,

    #[serde(default)]
    pub battery: Option<String>,

    #[serde(default)]
    pub prop_size: Option<f32>,

    #[serde(default)]
    pub pitch: Option<f32>,

    #[serde(default)]
    pub blades: Option<u8>,

    #[serde(default)]
    pub style: Option<String>,
}
