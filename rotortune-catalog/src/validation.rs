//! Catalog Consistency Checks
//!
//! [`ClassCatalog::new`](rotortune_core::ClassCatalog::new) only enforces
//! what classification needs to be total. The checks here look at the
//! catalog as a whole, and at presets against it, and report anything a
//! catalog author should look at:
//!
//! | issue | severity |
//! |---|---|
//! | size ranges overlap (first class in order wins) | warning |
//! | gap between ranges (nearest-center fallback applies) | info |
//! | catalog does not cover the expected size span | warning |
//! | class without a baseline (empty profile) | warning |
//! | preset names a class the catalog lacks | error |
//! | preset's own size and weight classify elsewhere | warning |

use rotortune_core::{ClassCatalog, Classifier, PresetRegistry, SizeRange};

/// Frame sizes a general-purpose catalog is expected to cover (inches)
pub const EXPECTED_SPAN: SizeRange = SizeRange::new(2.0, 10.0);

/// Runs whole-catalog checks
#[derive(Debug, Clone)]
pub struct CatalogValidator {
    expected_span: SizeRange,
}

impl Default for CatalogValidator {
    fn default() -> Self {
        Self {
            expected_span: EXPECTED_SPAN,
        }
    }
}

impl CatalogValidator {
    /// Validator expecting coverage of `expected_span`
    pub fn with_expected_span(expected_span: SizeRange) -> Self {
        Self { expected_span }
    }

    /// Check ranges, coverage and baselines
    pub fn validate(&self, catalog: &ClassCatalog) -> CatalogReport {
        let mut report = CatalogReport::new(catalog.name());

        self.check_ranges(catalog, &mut report);
        self.check_coverage(catalog, &mut report);

        for class in catalog {
            if class.baseline.is_none() {
                report.push(CatalogIssue {
                    issue_type: IssueType::MissingBaseline,
                    subject: class.id.clone(),
                    message: format!("class '{}' has no baseline", class.id),
                    severity: Severity::Warning,
                });
            }
        }

        report
    }

    /// Check presets against `catalog`
    pub fn validate_presets(&self, catalog: &ClassCatalog, presets: &PresetRegistry) -> CatalogReport {
        let mut report = CatalogReport::new(catalog.name());
        let classifier = Classifier::new(catalog);

        for preset in presets.iter() {
            let Some(class_id) = preset.class_id.as_deref() else {
                continue;
            };

            if catalog.get(class_id).is_none() {
                report.push(CatalogIssue {
                    issue_type: IssueType::UnknownPresetClass,
                    subject: preset.key.clone(),
                    message: format!("preset '{}' names unknown class '{}'", preset.key, class_id),
                    severity: Severity::Error,
                });
                continue;
            }

            if let (Some(size), Some(weight)) = (preset.size, preset.weight) {
                let classified = classifier.classify(size, weight);
                if classified.class_id() != Some(class_id) {
                    report.push(CatalogIssue {
                        issue_type: IssueType::PresetClassMismatch,
                        subject: preset.key.clone(),
                        message: format!(
                            "preset '{}' is written for '{}' but {}\" / {}g classifies as {:?}",
                            preset.key,
                            class_id,
                            size,
                            weight,
                            classified.class_id()
                        ),
                        severity: Severity::Warning,
                    });
                }
            }
        }

        report
    }

    fn check_ranges(&self, catalog: &ClassCatalog, report: &mut CatalogReport) {
        let mut covered: Option<(&str, f32)> = None;

        for class in catalog {
            if let Some((previous, reach)) = covered {
                if class.size.min <= reach {
                    report.push(CatalogIssue {
                        issue_type: IssueType::Overlap,
                        subject: class.id.clone(),
                        message: format!(
                            "'{}' starts at {}\" inside '{}' (up to {}\")",
                            class.id, class.size.min, previous, reach
                        ),
                        severity: Severity::Warning,
                    });
                } else {
                    report.push(CatalogIssue {
                        issue_type: IssueType::Gap,
                        subject: class.id.clone(),
                        message: format!("no class covers {}\" to {}\"", reach, class.size.min),
                        severity: Severity::Info,
                    });
                }
            }

            covered = match covered {
                Some((_, reach)) if reach >= class.size.max => covered,
                _ => Some((class.id.as_str(), class.size.max)),
            };
        }
    }

    fn check_coverage(&self, catalog: &ClassCatalog, report: &mut CatalogReport) {
        let span = catalog.span();
        if span.min > self.expected_span.min || span.max < self.expected_span.max {
            report.push(CatalogIssue {
                issue_type: IssueType::CoverageShort,
                subject: catalog.name().to_string(),
                message: format!(
                    "catalog covers {}\" to {}\", expected {}\" to {}\"",
                    span.min, span.max, self.expected_span.min, self.expected_span.max
                ),
                severity: Severity::Warning,
            });
        }
    }
}

/// Findings for one catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    /// Catalog the report is about
    pub catalog: String,

    /// Must be fixed before the catalog is used
    pub errors: Vec<CatalogIssue>,

    /// Should be reviewed
    pub warnings: Vec<CatalogIssue>,

    /// Informational
    pub info: Vec<CatalogIssue>,
}

impl CatalogReport {
    /// Create new empty report
    pub fn new(catalog: &str) -> Self {
        Self {
            catalog: catalog.to_string(),
            ..Self::default()
        }
    }

    /// No errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// File an issue by its severity
    pub fn push(&mut self, issue: CatalogIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Info => self.info.push(issue),
        }
    }

    /// Append every issue of `other`
    pub fn merge(&mut self, other: CatalogReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.info.extend(other.info);
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// Issues of one type, any severity
    pub fn of_type(&self, issue_type: IssueType) -> impl Iterator<Item = &CatalogIssue> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .chain(&self.info)
            .filter(move |issue| issue.issue_type == issue_type)
    }

    /// Send errors and warnings to the log
    pub fn log(&self) {
        for issue in &self.errors {
            log::error!("{}: {}", self.catalog, issue.message);
        }
        for issue in &self.warnings {
            log::warn!("{}: {}", self.catalog, issue.message);
        }
        for issue in &self.info {
            log::debug!("{}: {}", self.catalog, issue.message);
        }
    }
}

/// Individual finding
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Class id, preset key or catalog name the issue is about
    pub subject: String,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

/// Types of catalog issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Two size ranges share sizes
    Overlap,

    /// Sizes between two ranges belong to no class
    Gap,

    /// Catalog span is narrower than expected
    CoverageShort,

    /// Class has no baseline
    MissingBaseline,

    /// Preset refers to a class that does not exist
    UnknownPresetClass,

    /// Preset inputs classify into a different class
    PresetClassMismatch,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational only
    Info,

    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}
