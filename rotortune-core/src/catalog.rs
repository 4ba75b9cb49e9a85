//! Drone Class Catalog
//!
//! ## Overview
//!
//! A [`ClassCatalog`] partitions the airframe size axis (inches) into named
//! drone classes. Each class may also cap the all-up weight and carries the
//! baseline PID/filter tuning suggested for that class.
//!
//! ```text
//!  2.0      2.5 2.6     3.0 3.1     3.5 3.6           4.5 4.6       5.5
//!   |-micro--|   |-whoop--|   |--cine--|   |----mini-----|   |-freestyle-| ...
//! ```
//!
//! ## Invariants
//!
//! Enforced by [`ClassCatalog::new`]:
//! - at least one class, so classification always has an answer
//! - unique class ids
//! - finite bounds with `min_size < max_size`
//! - weight ceilings, when present, are positive and finite
//!
//! Classes are held in ascending `min_size` order. The sort is stable, so
//! classes sharing a `min_size` keep their document order. Overlaps and gaps
//! are allowed here; the catalog crate reports them when loading documents.
//!
//! Catalogs are immutable once built and meant to be shared by reference.

use alloc::string::String;
use alloc::vec::Vec;

use crate::errors::CatalogError;
use crate::tuning::{AxisGains, FilterProfile, PidGains};

/// Inclusive size range in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeRange {
    /// Smallest frame in the class
    pub min: f32,
    /// Largest frame in the class
    pub max: f32,
}

impl SizeRange {
    /// Create a range; validity is checked when the catalog is built
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Inclusive containment
    pub fn contains(&self, size: f32) -> bool {
        self.min <= size && size <= self.max
    }

    /// Midpoint, used for nearest-class fallback
    pub fn center(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Stored PID baseline in either accepted shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselinePid {
    /// Separate gains for roll, pitch and yaw
    PerAxis(AxisGains),
    /// One triple for roll and pitch; yaw is derived
    Shared(PidGains),
}

impl BaselinePid {
    /// Expand to explicit per-axis gains
    pub fn axis_gains(&self) -> AxisGains {
        match self {
            Self::PerAxis(gains) => *gains,
            Self::Shared(triple) => AxisGains::from_shared(*triple),
        }
    }
}

/// Stored baseline for one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    /// PID gains as stored
    pub pid: BaselinePid,
    /// Filter settings, already normalized
    pub filter: FilterProfile,
    /// Tuning notes
    pub notes: Option<String>,
}

/// One drone class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    /// Unique key, e.g. `"freestyle"`
    pub id: String,
    /// Frame sizes covered
    pub size: SizeRange,
    /// Heaviest build in the class (grams); `None` is unbounded
    pub max_weight: Option<f32>,
    /// Human-readable description
    pub description: String,
    /// Baseline tuning, if the catalog provides one
    pub baseline: Option<Baseline>,
}

impl ClassDefinition {
    /// Class without a weight ceiling or baseline
    pub fn new(id: impl Into<String>, size: SizeRange, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size,
            max_weight: None,
            description: description.into(),
            baseline: None,
        }
    }

    /// Set the weight ceiling (grams)
    pub fn with_max_weight(mut self, max_weight: f32) -> Self {
        self.max_weight = Some(max_weight);
        self
    }

    /// Attach a baseline
    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Size range contains `size` and weight is under the ceiling
    pub fn accepts(&self, size: f32, weight: f32) -> bool {
        self.size.contains(size) && self.max_weight.map_or(true, |max| weight <= max)
    }

    /// Display summary
    pub fn summary(&self) -> ClassSummary {
        ClassSummary {
            id: self.id.clone(),
            description: self.description.clone(),
            size: self.size,
            max_weight: self.max_weight,
        }
    }

    fn check(&self) -> Result<(), CatalogError> {
        if !self.size.is_well_formed() {
            return Err(CatalogError::InvalidRange {
                id: self.id.clone(),
                min: self.size.min,
                max: self.size.max,
            });
        }

        if let Some(max_weight) = self.max_weight {
            if !(max_weight.is_finite() && max_weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    id: self.id.clone(),
                    max_weight,
                });
            }
        }

        Ok(())
    }
}

/// Enumeration entry for display and debugging
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassSummary {
    /// Class id
    pub id: String,
    /// Human-readable description
    pub description: String,
    /// Frame sizes covered
    pub size: SizeRange,
    /// Weight ceiling (grams)
    pub max_weight: Option<f32>,
}

/// Immutable, ordered set of drone classes
#[derive(Debug, Clone, PartialEq)]
pub struct ClassCatalog {
    name: String,
    classes: Vec<ClassDefinition>,
}

impl ClassCatalog {
    /// Build a catalog, enforcing its invariants
    pub fn new(name: impl Into<String>, mut classes: Vec<ClassDefinition>) -> Result<Self, CatalogError> {
        let name = name.into();

        if classes.is_empty() {
            return Err(CatalogError::Empty(name));
        }

        for (idx, class) in classes.iter().enumerate() {
            class.check()?;
            if classes[..idx].iter().any(|other| other.id == class.id) {
                return Err(CatalogError::DuplicateClass(class.id.clone()));
            }
        }

        classes.sort_by(|a, b| a.size.min.total_cmp(&b.size.min));

        Ok(Self { name, classes })
    }

    /// Catalog name, e.g. `"presets_v2"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a class by id
    pub fn get(&self, id: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|class| class.id == id)
    }

    /// Classes in ascending `min_size` order
    pub fn iter(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.iter()
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false: empty catalogs are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Smallest and largest size covered by any class
    pub fn span(&self) -> SizeRange {
        let min = self.classes.iter().map(|c| c.size.min).fold(f32::INFINITY, f32::min);
        let max = self.classes.iter().map(|c| c.size.max).fold(f32::NEG_INFINITY, f32::max);
        SizeRange::new(min, max)
    }

    /// Id, description, size range and weight ceiling of every class
    pub fn summaries(&self) -> Vec<ClassSummary> {
        self.classes.iter().map(ClassDefinition::summary).collect()
    }
}

impl<'a> IntoIterator for &'a ClassCatalog {
    type Item = &'a ClassDefinition;
    type IntoIter = core::slice::Iter<'a, ClassDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
