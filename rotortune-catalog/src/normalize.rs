//! Loading Boundary
//!
//! Turns raw documents into core types. Every stored field name passes
//! through the alias tables in [`rotortune_core::tuning::fields`] exactly
//! once, here; nothing downstream sees the document vocabulary.
//!
//! Two aliases landing on the same field (`P` and `p`, `roll` and `Roll`,
//! `gyro_lpf2` and `gyro_cutoff`) are rejected, as is a size given both as
//! `size_range` and as `min_size`/`max_size`.

use std::collections::BTreeMap;

use rotortune_core::tuning::{Axis, FilterField, PidTerm};
use rotortune_core::{
    AxisGains, Baseline, BaselinePid, ClassCatalog, ClassDefinition, FilterProfile, PidGains, Preset,
    PresetRegistry, SizeRange,
};

use crate::documents::{BaselineEntry, CatalogDocument, ClassEntry, FilterEntry, PidEntry, PresetDocument};
use crate::LoadError;

/// Build a catalog from a parsed document
///
/// The catalog is named after the document's qualified name.
pub fn catalog_from_document(document: CatalogDocument) -> Result<ClassCatalog, LoadError> {
    let name = document.qualified_name();
    let mut baselines = document.baselines;

    if let Some(orphan) = baselines.keys().find(|id| !document.classes.iter().any(|c| &c.id == *id)) {
        return Err(LoadError::OrphanBaseline(orphan.clone()));
    }

    let classes = document
        .classes
        .into_iter()
        .map(|entry| {
            let detached = baselines.remove(&entry.id);
            class_from_entry(entry, detached)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ClassCatalog::new(name, classes)?)
}

fn class_from_entry(entry: ClassEntry, detached: Option<BaselineEntry>) -> Result<ClassDefinition, LoadError> {
    let size = match (entry.size_range, entry.min_size, entry.max_size) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => return Err(duplicate(&entry.id, "size_range")),
        (Some([min, max]), None, None) | (None, Some(min), Some(max)) => SizeRange::new(min, max),
        (None, None, _) => return Err(missing(&entry.id, "min_size")),
        (None, Some(_), None) => return Err(missing(&entry.id, "max_size")),
    };

    let inline = if entry.pid.is_some() || entry.filter.is_some() || entry.notes.is_some() {
        Some(BaselineEntry {
            pid: entry.pid,
            filter: entry.filter,
            notes: entry.notes,
        })
    } else {
        None
    };

    let stored = match (inline, detached) {
        (Some(inline), Some(_)) => {
            log::warn!("class '{}' has an inline and a separate baseline; using the inline one", entry.id);
            Some(inline)
        }
        (inline, detached) => inline.or(detached),
    };

    let mut class = ClassDefinition::new(entry.id, size, entry.description);
    if let Some(max_weight) = entry.max_weight {
        class = class.with_max_weight(max_weight);
    }
    if let Some(stored) = stored {
        let baseline = baseline_from_entry(&class.id, stored)?;
        class = class.with_baseline(baseline);
    }

    Ok(class)
}

/// A stored baseline always needs `pid`; `filter` and `notes` alone are rejected.
fn baseline_from_entry(class_id: &str, entry: BaselineEntry) -> Result<Baseline, LoadError> {
    let pid = match entry.pid {
        Some(pid) => pid_from_entry(class_id, &pid)?,
        None => return Err(missing(class_id, "pid")),
    };

    let filter = match entry.filter {
        Some(filter) => filter_from_entry(class_id, &filter)?,
        None => FilterProfile::default(),
    };

    Ok(Baseline {
        pid,
        filter,
        notes: entry.notes,
    })
}

fn pid_from_entry(class_id: &str, entry: &PidEntry) -> Result<BaselinePid, LoadError> {
    match entry {
        PidEntry::Shared(terms) => Ok(BaselinePid::Shared(triple(class_id, terms)?)),
        PidEntry::PerAxis(axes) => {
            let mut gains = AxisGains::default();
            let mut seen = [false; 3];

            for (key, terms) in axes {
                let axis = Axis::from_key(key).ok_or_else(|| unknown(class_id, key))?;
                if seen[axis as usize] {
                    return Err(duplicate(class_id, axis.name()));
                }
                let slot = match axis {
                    Axis::Roll => &mut gains.roll,
                    Axis::Pitch => &mut gains.pitch,
                    Axis::Yaw => &mut gains.yaw,
                };
                *slot = triple(class_id, terms)?;
                seen[axis as usize] = true;
            }

            if let Some(axis) = Axis::ALL.iter().find(|axis| !seen[**axis as usize]) {
                return Err(missing(class_id, axis.name()));
            }

            Ok(BaselinePid::PerAxis(gains))
        }
    }
}

fn triple(class_id: &str, terms: &BTreeMap<String, u16>) -> Result<PidGains, LoadError> {
    let (mut p, mut i, mut d) = (None, None, None);

    for (key, value) in terms {
        let (slot, name) = match PidTerm::from_key(key) {
            Some(PidTerm::P) => (&mut p, "p"),
            Some(PidTerm::I) => (&mut i, "i"),
            Some(PidTerm::D) => (&mut d, "d"),
            None => return Err(unknown(class_id, key)),
        };
        if slot.replace(*value).is_some() {
            return Err(duplicate(class_id, name));
        }
    }

    Ok(PidGains::new(
        p.ok_or_else(|| missing(class_id, "p"))?,
        i.ok_or_else(|| missing(class_id, "i"))?,
        d.ok_or_else(|| missing(class_id, "d"))?,
    ))
}

fn filter_from_entry(class_id: &str, entry: &FilterEntry) -> Result<FilterProfile, LoadError> {
    let mut filter = FilterProfile::default();
    let mut seen = [false; 3];

    for (key, value) in entry {
        let field = FilterField::from_key(key).ok_or_else(|| unknown(class_id, key))?;
        if std::mem::replace(&mut seen[field as usize], true) {
            return Err(duplicate(class_id, field.canonical_name()));
        }
        match field {
            FilterField::GyroCutoff => filter.gyro_cutoff_hz = value.unwrap_or(0),
            FilterField::DtermCutoff => filter.dterm_cutoff_hz = value.unwrap_or(0),
            FilterField::NotchStages => {
                filter.notch_stages = value
                    .map(u8::try_from)
                    .transpose()
                    .map_err(|_| LoadError::BadValue {
                        class: class_id.to_string(),
                        field: field.canonical_name().to_string(),
                    })?;
            }
        }
    }

    Ok(filter)
}

/// Build a preset registry from a parsed document
pub fn presets_from_document(document: PresetDocument) -> Result<PresetRegistry, LoadError> {
    let presets = document
        .presets
        .into_iter()
        .map(|(key, entry)| Preset {
            key,
            class_id: entry.class_id,
            size: entry.size,
            weight: entry.weight,
            battery: entry.battery,
            prop_size: entry.prop_size,
            pitch: entry.pitch,
            blades: entry.blades,
            style: entry.style,
        })
        .collect();

    Ok(PresetRegistry::new(presets)?)
}

fn missing(class: &str, field: &str) -> LoadError {
    LoadError::MissingField {
        class: class.to_string(),
        field: field.to_string(),
    }
}

fn unknown(class: &str, field: &str) -> LoadError {
    LoadError::UnknownField {
        class: class.to_string(),
        field: field.to_string(),
    }
}

fn duplicate(class: &str, field: &str) -> LoadError {
    LoadError::DuplicateField {
        class: class.to_string(),
        field: field.to_string(),
    }
}
