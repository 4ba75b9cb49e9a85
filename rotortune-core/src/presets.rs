//! Preset Auto-Fill
//!
//! A preset is a named template for a common build ("5_freestyle",
//! "7_midlr", ...). Selecting one fills every input it defines.
//!
//! ## Override Direction
//!
//! Preset values take precedence over caller values. Choosing a template
//! makes its fields read-only for that request; the caller only supplies
//! what the preset leaves open. Fields neither side provides use the
//! defaults in [`constants::airframe`](crate::constants::airframe):
//!
//! | field | default |
//! |---|---|
//! | size | 5.0" |
//! | weight | 1.0 g |
//! | battery | "4S" |
//! | prop size | effective frame size |
//! | pitch | 4.0" |
//! | blades | 2 |
//! | style | "long_range" |
//!
//! ```rust
//! use rotortune_core::{apply_preset, DroneInputs, Preset};
//!
//! let preset = Preset { size: Some(5.0), ..Preset::named("5_freestyle") };
//! let caller = DroneInputs { size: Some(7.2), weight: Some(800.0), ..DroneInputs::default() };
//!
//! let inputs = apply_preset(Some(&preset), &caller);
//! assert_eq!(inputs.size, 5.0);
//! assert_eq!(inputs.weight, 800.0);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::airframe::{
    DEFAULT_BATTERY, DEFAULT_BLADES, DEFAULT_PITCH_IN, DEFAULT_SIZE_IN, DEFAULT_STYLE,
    DEFAULT_WEIGHT_G,
};
use crate::errors::CatalogError;

/// Named bundle of default inputs
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Preset {
    /// Lookup key, e.g. `"5_freestyle"`
    pub key: String,
    /// Class the preset was written for
    pub class_id: Option<String>,
    /// Frame size (inches)
    pub size: Option<f32>,
    /// All-up weight (grams)
    pub weight: Option<f32>,
    /// Battery description, e.g. `"4S"`
    pub battery: Option<String>,
    /// Propeller diameter (inches)
    pub prop_size: Option<f32>,
    /// Propeller pitch (inches)
    pub pitch: Option<f32>,
    /// Propeller blade count
    pub blades: Option<u8>,
    /// Flight style
    pub style: Option<String>,
}

impl Preset {
    /// Preset defining no fields yet
    pub fn named(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}

/// Inputs as supplied by the caller; any field may be missing
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DroneInputs {
    /// Frame size (inches)
    pub size: Option<f32>,
    /// All-up weight (grams)
    pub weight: Option<f32>,
    /// Battery description
    pub battery: Option<String>,
    /// Propeller diameter (inches)
    pub prop_size: Option<f32>,
    /// Propeller pitch (inches)
    pub pitch: Option<f32>,
    /// Propeller blade count
    pub blades: Option<u8>,
    /// Flight style
    pub style: Option<String>,
}

/// Fully resolved inputs for one request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectiveInputs {
    /// Frame size (inches)
    pub size: f32,
    /// All-up weight (grams)
    pub weight: f32,
    /// Battery description
    pub battery: String,
    /// Propeller diameter (inches)
    pub prop_size: f32,
    /// Propeller pitch (inches)
    pub pitch: f32,
    /// Propeller blade count
    pub blades: u8,
    /// Flight style
    pub style: String,
    /// Preset applied, if any
    pub preset: Option<String>,
    /// Class the applied preset was written for
    pub implied_class: Option<String>,
}

/// Merge a preset (if any) over caller inputs; preset fields win
pub fn apply_preset(preset: Option<&Preset>, caller: &DroneInputs) -> EffectiveInputs {
    let size = preset
        .and_then(|p| p.size)
        .or(caller.size)
        .unwrap_or(DEFAULT_SIZE_IN);

    EffectiveInputs {
        size,
        weight: preset
            .and_then(|p| p.weight)
            .or(caller.weight)
            .unwrap_or(DEFAULT_WEIGHT_G),
        battery: preset
            .and_then(|p| p.battery.clone())
            .or_else(|| caller.battery.clone())
            .unwrap_or_else(|| String::from(DEFAULT_BATTERY)),
        prop_size: preset
            .and_then(|p| p.prop_size)
            .or(caller.prop_size)
            .unwrap_or(size),
        pitch: preset
            .and_then(|p| p.pitch)
            .or(caller.pitch)
            .unwrap_or(DEFAULT_PITCH_IN),
        blades: preset
            .and_then(|p| p.blades)
            .or(caller.blades)
            .unwrap_or(DEFAULT_BLADES),
        style: preset
            .and_then(|p| p.style.clone())
            .or_else(|| caller.style.clone())
            .unwrap_or_else(|| String::from(DEFAULT_STYLE)),
        preset: preset.map(|p| p.key.clone()),
        implied_class: preset.and_then(|p| p.class_id.clone()),
    }
}

/// Read-only table of presets keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetRegistry {
    presets: BTreeMap<String, Preset>,
}

impl PresetRegistry {
    /// Registry with no presets
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry; keys must be unique
    pub fn new(presets: Vec<Preset>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for preset in presets {
            if map.contains_key(&preset.key) {
                return Err(CatalogError::DuplicatePreset(preset.key));
            }
            map.insert(preset.key.clone(), preset);
        }
        Ok(Self { presets: map })
    }

    /// Exact-key lookup
    pub fn resolve_preset(&self, key: &str) -> Option<&Preset> {
        let preset = self.presets.get(key);
        if preset.is_none() {
            log_debug!("unknown preset '{}', using caller inputs", key);
        }
        preset
    }

    /// Resolve `key` (if given) and merge it over `caller`
    ///
    /// An unknown key behaves like no preset at all.
    pub fn apply(&self, key: Option<&str>, caller: &DroneInputs) -> EffectiveInputs {
        let preset = key.and_then(|key| self.resolve_preset(key));
        apply_preset(preset, caller)
    }

    /// Preset keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Presets in key order
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    /// Number of presets
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True when no presets are registered
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn freestyle() -> Preset {
        Preset {
            class_id: Some("freestyle".into()),
            size: Some(5.0),
            weight: Some(750.0),
            battery: Some("4S".into()),
            prop_size: Some(5.0),
            pitch: Some(4.0),
            blades: Some(3),
            style: Some("freestyle".into()),
            ..Preset::named("5_freestyle")
        }
    }

    #[test]
    fn preset_overrides_caller() {
        let caller = DroneInputs {
            size: Some(7.2),
            weight: Some(1300.0),
            battery: Some("6S".into()),
            style: Some("racing".into()),
            ..DroneInputs::default()
        };

        let inputs = apply_preset(Some(&freestyle()), &caller);
        assert_eq!(inputs.size, 5.0);
        assert_eq!(inputs.weight, 750.0);
        assert_eq!(inputs.battery, "4S");
        assert_eq!(inputs.blades, 3);
        assert_eq!(inputs.style, "freestyle");
        assert_eq!(inputs.preset.as_deref(), Some("5_freestyle"));
        assert_eq!(inputs.implied_class.as_deref(), Some("freestyle"));
    }

    #[test]
    fn caller_fills_fields_the_preset_leaves_open() {
        let partial = Preset {
            size: Some(3.0),
            ..Preset::named("frame_only")
        };
        let caller = DroneInputs {
            size: Some(4.0),
            weight: Some(220.0),
            pitch: Some(2.5),
            ..DroneInputs::default()
        };

        let inputs = apply_preset(Some(&partial), &caller);
        assert_eq!(inputs.size, 3.0);
        assert_eq!(inputs.weight, 220.0);
        assert_eq!(inputs.pitch, 2.5);
        assert_eq!(inputs.prop_size, 3.0);
        assert_eq!(inputs.implied_class, None);
    }

    #[test]
    fn defaults_without_preset_or_caller() {
        let inputs = apply_preset(None, &DroneInputs::default());
        assert_eq!(inputs.size, DEFAULT_SIZE_IN);
        assert_eq!(inputs.weight, DEFAULT_WEIGHT_G);
        assert_eq!(inputs.battery, DEFAULT_BATTERY);
        assert_eq!(inputs.prop_size, DEFAULT_SIZE_IN);
        assert_eq!(inputs.pitch, DEFAULT_PITCH_IN);
        assert_eq!(inputs.blades, DEFAULT_BLADES);
        assert_eq!(inputs.style, DEFAULT_STYLE);
        assert_eq!(inputs.preset, None);
    }

    #[test]
    fn registry_lookup_is_exact() {
        let registry = PresetRegistry::new(vec![freestyle()]).expect("unique keys");
        assert!(registry.resolve_preset("5_freestyle").is_some());
        assert!(registry.resolve_preset("5_FREESTYLE").is_none());
        assert!(registry.resolve_preset("").is_none());
        assert_eq!(registry.keys().collect::<Vec<_>>(), ["5_freestyle"]);
    }

    #[test]
    fn unknown_key_uses_caller_inputs_unmodified() {
        let registry = PresetRegistry::new(vec![freestyle()]).expect("unique keys");
        let caller = DroneInputs {
            size: Some(7.2),
            ..DroneInputs::default()
        };

        let inputs = registry.apply(Some("9_unknown"), &caller);
        assert_eq!(inputs, apply_preset(None, &caller));
        assert_eq!(inputs.size, 7.2);
    }

    #[test]
    fn duplicate_keys_rejected() {
        let result = PresetRegistry::new(vec![freestyle(), freestyle()]);
        assert_eq!(result, Err(CatalogError::DuplicatePreset("5_freestyle".into())));
    }
}
