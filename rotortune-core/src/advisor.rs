//! Request-Level Composition
//!
//! [`TuningAdvisor`] runs the whole flow for one request against borrowed
//! reference data:
//!
//! ```text
//! preset key + caller inputs
//!   -> effective inputs (preset wins, then defaults)
//!   -> plausibility warnings
//!   -> classification -> class baseline
//!   -> style suggestion
//!   -> descriptive metrics
//! ```
//!
//! The class baseline and the style suggestion are returned side by side,
//! never merged. Analysis is a pure function of the request: the same
//! request against the same data gives the same (and identically
//! serialized) result.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::ClassCatalog;
use crate::classify::{Classification, Classifier};
use crate::metrics::{self, BatterySpec, WeightClass};
use crate::presets::{DroneInputs, EffectiveInputs, PresetRegistry};
use crate::style::{style_tuning, StyleSuggestion, GENERAL_TIPS};
use crate::tuning::{TuningDeriver, TuningProfile};
use crate::validators::{validate_inputs, ValidationReport};

/// One analysis request
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdvisorRequest {
    /// Preset key; unknown keys are ignored
    pub preset: Option<String>,
    /// Caller-supplied inputs
    pub inputs: DroneInputs,
}

impl AdvisorRequest {
    /// Request built from a preset key alone
    pub fn from_preset(key: impl Into<String>) -> Self {
        Self {
            preset: Some(key.into()),
            inputs: DroneInputs::default(),
        }
    }
}

/// Everything computed for one request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    /// Inputs after preset override and defaults
    pub inputs: EffectiveInputs,
    /// Class resolved from size and weight
    pub classification: Classification,
    /// Baseline stored for that class; empty when none
    pub baseline: TuningProfile,
    /// Suggestion for the requested flight style
    pub style: StyleSuggestion,
    /// Plausibility warnings, in check order
    pub warnings: ValidationReport,
    /// Weight bucket
    pub weight_class: WeightClass,
    /// Parsed battery, when the description is recognizable
    pub battery: Option<BatterySpec>,
    /// Propeller label, e.g. `5.0x4.0 3-blade`
    pub propeller: String,
    /// Static thrust over weight
    pub thrust_to_weight: Option<f32>,
    /// Hover runtime estimate (minutes)
    pub runtime_minutes: Option<f32>,
    /// One-line summary of the build
    pub overview: String,
    /// General pre-flight tips followed by style tips
    pub tips: Vec<&'static str>,
}

/// Runs full analyses against a catalog and a preset registry
#[derive(Debug, Clone, Copy)]
pub struct TuningAdvisor<'a> {
    catalog: &'a ClassCatalog,
    presets: &'a PresetRegistry,
}

impl<'a> TuningAdvisor<'a> {
    /// Advisor over borrowed reference data
    pub fn new(catalog: &'a ClassCatalog, presets: &'a PresetRegistry) -> Self {
        Self { catalog, presets }
    }

    /// Catalog used for classification
    pub fn catalog(&self) -> &'a ClassCatalog {
        self.catalog
    }

    /// Analyze one request
    pub fn analyze(&self, request: &AdvisorRequest) -> Analysis {
        let inputs = self.presets.apply(request.preset.as_deref(), &request.inputs);
        let warnings = validate_inputs(&inputs);

        let classification = Classifier::new(self.catalog).classify(inputs.size, inputs.weight);
        if let Some(implied) = inputs.implied_class.as_deref() {
            if classification.class_id() != Some(implied) {
                log_debug!(
                    "preset {:?} implies class {}, inputs classify as {:?}",
                    inputs.preset, implied, classification.class_id()
                );
            }
        }
        let baseline = TuningDeriver::new(self.catalog).derive_for(&classification);

        let style = style_tuning(&inputs.style);

        let battery = BatterySpec::parse(&inputs.battery);
        if battery.is_none() {
            log_debug!("battery '{}' not recognized, skipping estimates", inputs.battery);
        }
        let thrust_to_weight = battery.as_ref().and_then(|battery| {
            metrics::thrust_to_weight(inputs.prop_size, inputs.pitch, inputs.blades, battery, inputs.weight)
        });
        let runtime_minutes = battery
            .as_ref()
            .and_then(|battery| metrics::estimate_runtime_minutes(battery, inputs.weight));

        let propeller = metrics::propeller_summary(inputs.prop_size, inputs.pitch, inputs.blades);
        let overview = format!(
            "{:.1}\" build, battery {}, style {}, props {}",
            inputs.size, inputs.battery, inputs.style, propeller
        );

        let tips = GENERAL_TIPS.iter().chain(style.tips).copied().collect();

        Analysis {
            weight_class: metrics::weight_class(inputs.size, inputs.weight),
            inputs,
            classification,
            baseline,
            style,
            warnings,
            battery,
            propeller,
            thrust_to_weight,
            runtime_minutes,
            overview,
            tips,
        }
    }
}
