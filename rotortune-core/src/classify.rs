//! Drone Class Detection
//!
//! ## Algorithm
//!
//! 1. Walk the catalog in ascending `min_size` order and return the first
//!    class whose inclusive size range contains the frame size and whose
//!    weight ceiling (if any) is at least the build weight.
//! 2. If nothing matches, fall back to the class whose size-range center is
//!    closest to the frame size. Ties go to the class visited first.
//!
//! Step 2 always has an answer because catalogs are never empty, so any
//! finite `(size, weight)` is classified. Only non-numeric input (NaN,
//! infinity, unparsable text) is left unclassified, and that is reported
//! as a value rather than a failure:
//!
//! ```rust
//! # use rotortune_core::{ClassCatalog, ClassDefinition, SizeRange, Classifier, Classification};
//! let catalog = ClassCatalog::new("demo", vec![
//!     ClassDefinition::new("small", SizeRange::new(2.0, 3.0), "small"),
//!     ClassDefinition::new("large", SizeRange::new(5.0, 7.0), "large"),
//! ])?;
//! let classifier = Classifier::new(&catalog);
//!
//! assert_eq!(classifier.classify(2.5, 100.0).class_id(), Some("small"));
//! assert_eq!(classifier.classify(50.0, 100.0).class_id(), Some("large"));
//! assert!(!classifier.classify(f32::NAN, 100.0).is_classified());
//! # Ok::<(), rotortune_core::CatalogError>(())
//! ```

use alloc::string::String;

use crate::catalog::{ClassCatalog, ClassDefinition};
use crate::errors::{InputError, InputField};
use crate::traits::Validatable;

/// Outcome of classifying one airframe
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum Classification {
    /// A class range contains the size and its weight ceiling allows the build
    Matched {
        /// Matched class
        class_id: String,
    },
    /// No class matched; this is the class with the nearest size center
    Nearest {
        /// Fallback class
        class_id: String,
        /// Distance from the size to the class center (inches)
        distance: f32,
    },
    /// Input was not a number
    Unclassified {
        /// Which input could not be used
        reason: InputError,
    },
}

impl Classification {
    /// Class id for matched and fallback results
    pub fn class_id(&self) -> Option<&str> {
        match self {
            Self::Matched { class_id } | Self::Nearest { class_id, .. } => Some(class_id),
            Self::Unclassified { .. } => None,
        }
    }

    /// True unless the input was unusable
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unclassified { .. })
    }

    /// True only for an exact range match
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// Classifies airframes against a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a ClassCatalog,
}

impl<'a> Classifier<'a> {
    /// Classifier over `catalog`
    pub fn new(catalog: &'a ClassCatalog) -> Self {
        Self { catalog }
    }

    /// Classify a frame size (inches) and all-up weight (grams)
    pub fn classify(&self, size: f32, weight: f32) -> Classification {
        if !size.is_valid() {
            return Classification::Unclassified {
                reason: InputError::InvalidValue { field: InputField::Size },
            };
        }
        if !weight.is_valid() {
            return Classification::Unclassified {
                reason: InputError::InvalidValue { field: InputField::Weight },
            };
        }

        if let Some(class) = self.find_match(size, weight) {
            return Classification::Matched {
                class_id: class.id.clone(),
            };
        }

        match self.find_nearest(size) {
            Some((class, distance)) => {
                log_debug!(
                    "no class contains {}\" / {}g, nearest is {} ({} in from center)",
                    size, weight, class.id, distance
                );
                Classification::Nearest {
                    class_id: class.id.clone(),
                    distance,
                }
            }
            // Unreachable for catalogs built through ClassCatalog::new
            None => Classification::Unclassified {
                reason: InputError::InvalidValue { field: InputField::Size },
            },
        }
    }

    /// Classify raw text inputs, e.g. straight from a form
    ///
    /// Surrounding whitespace is ignored. Text that is not a real number
    /// leaves the airframe unclassified instead of guessing a class.
    pub fn classify_str(&self, size: &str, weight: &str) -> Classification {
        let size = match size.trim().parse::<f32>() {
            Ok(value) => value,
            Err(_) => {
                return Classification::Unclassified {
                    reason: InputError::InvalidValue { field: InputField::Size },
                }
            }
        };
        let weight = match weight.trim().parse::<f32>() {
            Ok(value) => value,
            Err(_) => {
                return Classification::Unclassified {
                    reason: InputError::InvalidValue { field: InputField::Weight },
                }
            }
        };

        self.classify(size, weight)
    }

    fn find_match(&self, size: f32, weight: f32) -> Option<&'a ClassDefinition> {
        self.catalog.iter().find(|class| class.accepts(size, weight))
    }

    fn find_nearest(&self, size: f32) -> Option<(&'a ClassDefinition, f32)> {
        let mut best: Option<(&'a ClassDefinition, f32)> = None;

        for class in self.catalog {
            let distance = libm::fabsf(class.size.center() - size);
            // Strict comparison keeps the first class on ties
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((class, distance));
            }
        }

        best
    }
}
