//! Catalog Registry for Version Management
//!
//! Holds every loaded catalog under its qualified name (`presets_v2`,
//! `analyzer_v1`, ...), tracks versions per catalog family and names one
//! catalog as the default. Catalogs are loaded once at startup and only
//! read afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rotortune_core::{ClassCatalog, PresetRegistry, TuningAdvisor};

use crate::documents::{CatalogDocument, PresetDocument, BUNDLED_DATA, CATALOG_DIR, PRESET_FILE};
use crate::normalize::{catalog_from_document, presets_from_document};
use crate::validation::{CatalogReport, CatalogValidator};
use crate::LoadError;

/// Catalog used when no other is requested
pub const DEFAULT_CATALOG: &str = "presets_v2";

/// Where a catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Compiled into the crate
    Bundled,
    /// Read from disk at runtime
    File(PathBuf),
    /// Registered directly by the caller
    Memory,
}

/// Catalog metadata for registry entries
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// Catalog family (e.g. "presets")
    pub name: String,

    /// Catalog version (e.g. "v1", "v2")
    pub version: String,

    /// Full qualified name (e.g. "presets_v2")
    pub qualified_name: String,

    /// What the catalog is for
    pub description: Option<String>,

    /// Where it was loaded from
    pub source: CatalogSource,
}

impl CatalogMetadata {
    /// Metadata derived from a qualified name such as `"presets_v2"`
    ///
    /// Only a trailing `_v<digits>` counts as a version; `"heavy_vtol"` is
    /// a plain name at version `v1`.
    pub fn from_qualified_name(qualified_name: &str, source: CatalogSource) -> Self {
        let split = qualified_name.rfind("_v").filter(|&pos| {
            let digits = &qualified_name[pos + 2..];
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        });
        let (name, version) = match split {
            Some(pos) => (&qualified_name[..pos], &qualified_name[pos + 1..]),
            None => (qualified_name, "v1"),
        };

        Self {
            name: name.to_string(),
            version: version.to_string(),
            qualified_name: qualified_name.to_string(),
            description: None,
            source,
        }
    }
}

/// Loaded catalogs plus the preset registry that goes with them
#[derive(Debug, Default)]
pub struct CatalogRegistry {
    /// Catalogs indexed by qualified name
    catalogs: BTreeMap<String, (ClassCatalog, CatalogMetadata)>,

    /// Version mappings (name -> [versions])
    versions: BTreeMap<String, Vec<String>>,

    /// Qualified name of the default catalog
    default: Option<String>,

    presets: PresetRegistry,
}

impl CatalogRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog with metadata
    ///
    /// The first catalog registered becomes the default until
    /// [`set_default`](Self::set_default) says otherwise.
    pub fn register_with_metadata(&mut self, catalog: ClassCatalog, metadata: CatalogMetadata) -> Result<(), LoadError> {
        let qualified_name = metadata.qualified_name.clone();
        if self.catalogs.contains_key(&qualified_name) {
            return Err(LoadError::AlreadyRegistered(qualified_name));
        }

        let report = CatalogValidator::default().validate(&catalog);
        report.log();

        log::debug!(
            "registered catalog {} ({} classes, {:?})",
            qualified_name,
            catalog.len(),
            metadata.source
        );

        self.versions
            .entry(metadata.name.clone())
            .or_default()
            .push(metadata.version.clone());
        if self.default.is_none() {
            self.default = Some(qualified_name.clone());
        }
        self.catalogs.insert(qualified_name, (catalog, metadata));

        Ok(())
    }

    /// Register a catalog under its own name
    pub fn register(&mut self, catalog: ClassCatalog) -> Result<(), LoadError> {
        let metadata = CatalogMetadata::from_qualified_name(catalog.name(), CatalogSource::Memory);
        self.register_with_metadata(catalog, metadata)
    }

    /// Get a catalog by qualified name
    pub fn get(&self, name: &str) -> Result<&ClassCatalog, LoadError> {
        self.catalogs
            .get(name)
            .map(|(catalog, _)| catalog)
            .ok_or_else(|| LoadError::NotFound(name.to_string()))
    }

    /// Get catalog metadata
    pub fn metadata(&self, name: &str) -> Result<&CatalogMetadata, LoadError> {
        self.catalogs
            .get(name)
            .map(|(_, metadata)| metadata)
            .ok_or_else(|| LoadError::NotFound(name.to_string()))
    }

    /// Get the latest version of a catalog family
    ///
    /// Versions compare by their numeric part, so `v10` is newer than `v9`.
    pub fn get_latest(&self, name: &str) -> Result<&ClassCatalog, LoadError> {
        let version = self
            .versions
            .get(name)
            .and_then(|versions| versions.iter().max_by_key(|v| version_number(v)))
            .ok_or_else(|| LoadError::NotFound(format!("No versions of {}", name)))?;

        self.get(&format!("{}_{}", name, version))
    }

    /// All registered versions of a catalog family, in registration order
    pub fn versions(&self, name: &str) -> Vec<String> {
        self.versions.get(name).cloned().unwrap_or_default()
    }

    /// Qualified names of every registered catalog
    pub fn catalog_names(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    /// Make a registered catalog the default
    ///
    /// Fails with [`LoadError::ValidationError`] when a registered preset
    /// names a class the catalog lacks; the previous default stays.
    pub fn set_default(&mut self, name: &str) -> Result<(), LoadError> {
        let catalog = self.get(name)?;
        let report = CatalogValidator::default().validate_presets(catalog, &self.presets);
        report.log();
        check_report(report)?;

        self.default = Some(name.to_string());
        Ok(())
    }

    /// The default catalog
    pub fn default_catalog(&self) -> Result<&ClassCatalog, LoadError> {
        let name = self
            .default
            .as_deref()
            .ok_or_else(|| LoadError::NotFound("default catalog".to_string()))?;
        self.get(name)
    }

    /// Presets registered alongside the catalogs
    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Replace the preset registry
    ///
    /// Presets naming a class missing from the default catalog are
    /// rejected when a default catalog exists.
    pub fn set_presets(&mut self, presets: PresetRegistry) -> Result<(), LoadError> {
        if let Ok(catalog) = self.default_catalog() {
            let report = CatalogValidator::default().validate_presets(catalog, &presets);
            report.log();
            check_report(report)?;
        }
        self.presets = presets;
        Ok(())
    }

    /// Advisor over a named catalog (or the default) and the registered presets
    pub fn advisor(&self, catalog: Option<&str>) -> Result<TuningAdvisor<'_>, LoadError> {
        let catalog = match catalog {
            Some(name) => self.get(name)?,
            None => self.default_catalog()?,
        };
        Ok(TuningAdvisor::new(catalog, &self.presets))
    }

    /// Parse a catalog document from JSON text and register it
    pub fn load_str(&mut self, json: &str, source: CatalogSource) -> Result<&ClassCatalog, LoadError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|err| LoadError::ParseError(err.to_string()))?;

        let mut metadata = CatalogMetadata::from_qualified_name(&document.qualified_name(), source);
        metadata.name = document.catalog.clone();
        metadata.version = document.version.clone();
        metadata.description = document.description.clone();

        let qualified_name = metadata.qualified_name.clone();
        let catalog = catalog_from_document(document)?;
        self.register_with_metadata(catalog, metadata)?;
        self.get(&qualified_name)
    }

    /// Load a catalog document from disk and register it
    ///
    /// This is how a corrected catalog replaces a bundled one without a
    /// rebuild: load it, then [`set_default`](Self::set_default) it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&ClassCatalog, LoadError> {
        let path = path.as_ref();
        let json = read(path)?;
        self.load_str(&json, CatalogSource::File(path.to_path_buf()))
    }

    /// Load a preset document from disk and make it the preset registry
    pub fn load_presets_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let json = read(path.as_ref())?;
        self.set_presets(parse_presets(&json)?)
    }

    /// Load all bundled catalogs and presets
    ///
    /// `presets_v2` becomes the default catalog.
    pub fn load_defaults(&mut self) -> Result<(), LoadError> {
        let catalogs = BUNDLED_DATA
            .get_dir(CATALOG_DIR)
            .ok_or_else(|| LoadError::NotFound(CATALOG_DIR.to_string()))?;

        for file in catalogs.files() {
            let json = file
                .contents_utf8()
                .ok_or_else(|| LoadError::ParseError(format!("{} is not UTF-8", file.path().display())))?;
            self.load_str(json, CatalogSource::Bundled)?;
        }

        self.set_default(DEFAULT_CATALOG)?;

        let presets = BUNDLED_DATA
            .get_file(PRESET_FILE)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| LoadError::NotFound(PRESET_FILE.to_string()))?;
        self.set_presets(parse_presets(presets)?)
    }
}

fn parse_presets(json: &str) -> Result<PresetRegistry, LoadError> {
    let document: PresetDocument = serde_json::from_str(json).map_err(|err| LoadError::ParseError(err.to_string()))?;
    presets_from_document(document)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|err| LoadError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

fn check_report(report: CatalogReport) -> Result<(), LoadError> {
    match report.errors.first() {
        Some(issue) => Err(LoadError::ValidationError(issue.message.clone())),
        None => Ok(()),
    }
}

fn version_number(version: &str) -> u32 {
    version.trim_start_matches('v').parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotortune_core::{ClassDefinition, Preset, SizeRange};

    fn catalog(name: &str) -> ClassCatalog {
        ClassCatalog::new(name, vec![ClassDefinition::new("only", SizeRange::new(2.0, 10.0), "")]).unwrap()
    }

    #[test]
    fn register_and_retrieve() {
        let mut registry = CatalogRegistry::new();
        registry.register(catalog("test_v1")).unwrap();

        assert_eq!(registry.get("test_v1").unwrap().name(), "test_v1");
        assert!(matches!(registry.get("test_v2"), Err(LoadError::NotFound(_))));
        assert_eq!(registry.default_catalog().unwrap().name(), "test_v1");
    }

    #[test]
    fn version_tracking() {
        let mut registry = CatalogRegistry::new();
        registry.register(catalog("test_v1")).unwrap();
        registry.register(catalog("test_v2")).unwrap();
        registry.register(catalog("test_v10")).unwrap();

        assert_eq!(registry.versions("test"), ["v1", "v2", "v10"]);
        assert_eq!(registry.get_latest("test").unwrap().name(), "test_v10");
        assert!(registry.get_latest("other").is_err());
    }

    #[test]
    fn duplicate_registration() {
        let mut registry = CatalogRegistry::new();
        registry.register(catalog("test_v1")).unwrap();
        assert!(matches!(registry.register(catalog("test_v1")), Err(LoadError::AlreadyRegistered(_))));
    }

    #[test]
    fn metadata_from_name() {
        let metadata = CatalogMetadata::from_qualified_name("analyzer_v1", CatalogSource::Bundled);
        assert_eq!(metadata.name, "analyzer");
        assert_eq!(metadata.version, "v1");

        let unversioned = CatalogMetadata::from_qualified_name("custom", CatalogSource::Memory);
        assert_eq!(unversioned.name, "custom");
        assert_eq!(unversioned.version, "v1");

        let vtol = CatalogMetadata::from_qualified_name("heavy_vtol", CatalogSource::Memory);
        assert_eq!(vtol.name, "heavy_vtol");
        assert_eq!(vtol.version, "v1");

        let versioned_vtol = CatalogMetadata::from_qualified_name("heavy_vtol_v3", CatalogSource::Memory);
        assert_eq!(versioned_vtol.name, "heavy_vtol");
        assert_eq!(versioned_vtol.version, "v3");

        let bare = CatalogMetadata::from_qualified_name("odd_v", CatalogSource::Memory);
        assert_eq!(bare.name, "odd_v");
        assert_eq!(bare.version, "v1");
    }

    #[test]
    fn presets_must_name_known_classes() {
        let mut registry = CatalogRegistry::new();
        registry.register(catalog("test_v1")).unwrap();

        let bad = PresetRegistry::new(vec![Preset { class_id: Some("missing".into()), ..Preset::named("p") }]).unwrap();
        assert!(matches!(registry.set_presets(bad), Err(LoadError::ValidationError(_))));
        assert!(registry.presets().is_empty());

        let good = PresetRegistry::new(vec![Preset { class_id: Some("only".into()), ..Preset::named("p") }]).unwrap();
        registry.set_presets(good).unwrap();
        assert_eq!(registry.presets().len(), 1);
    }

    #[test]
    fn default_must_cover_registered_presets() {
        let mut registry = CatalogRegistry::new();
        registry.load_defaults().unwrap();

        // bundled presets name mini, freestyle and heavy_5, which analyzer_v1 lacks
        assert!(matches!(registry.set_default("analyzer_v1"), Err(LoadError::ValidationError(_))));
        assert_eq!(registry.default_catalog().unwrap().name(), DEFAULT_CATALOG);
        assert!(matches!(registry.set_default("nope_v1"), Err(LoadError::NotFound(_))));

        registry.set_presets(PresetRegistry::empty()).unwrap();
        registry.set_default("analyzer_v1").unwrap();
        assert_eq!(registry.default_catalog().unwrap().name(), "analyzer_v1");
    }

    #[test]
    fn defaults_load() {
        let mut registry = CatalogRegistry::new();
        registry.load_defaults().unwrap();

        assert_eq!(registry.catalog_names().collect::<Vec<_>>(), ["analyzer_v1", "presets_v2"]);
        assert_eq!(registry.default_catalog().unwrap().name(), DEFAULT_CATALOG);
        assert_eq!(registry.metadata("analyzer_v1").unwrap().source, CatalogSource::Bundled);
        assert_eq!(registry.presets().len(), 10);
    }

    #[test]
    fn advisor_uses_requested_catalog() {
        let mut registry = CatalogRegistry::new();
        registry.load_defaults().unwrap();

        let advisor = registry.advisor(Some("analyzer_v1")).unwrap();
        assert_eq!(advisor.catalog().name(), "analyzer_v1");
        assert!(registry.advisor(Some("nope_v1")).is_err());
    }
}
