//! Shared fixtures for integration tests
//!
//! The catalog mirrors the shape of the default bundled catalog (shared
//! P/I/D triples, no weight ceilings, 0.1" gaps between classes) without
//! depending on the catalog crate.

#![allow(dead_code)]

use rotortune_core::{
    Baseline, BaselinePid, ClassCatalog, ClassDefinition, FilterProfile, PidGains, Preset, PresetRegistry,
    SizeRange,
};

fn class(id: &str, min: f32, max: f32, pid: (u16, u16, u16), filter: (u16, u16)) -> ClassDefinition {
    ClassDefinition::new(id, SizeRange::new(min, max), id).with_baseline(Baseline {
        pid: BaselinePid::Shared(PidGains::new(pid.0, pid.1, pid.2)),
        filter: FilterProfile::new(filter.0, filter.1, None),
        notes: None,
    })
}

/// Eight shared-triple classes from 2.0" to 10.0"
pub fn shared_catalog() -> ClassCatalog {
    ClassCatalog::new(
        "shared_fixture",
        vec![
            class("micro", 2.0, 2.5, (30, 30, 10), (250, 120)),
            class("whoop", 2.6, 3.0, (34, 34, 14), (230, 110)),
            class("cine", 3.1, 3.5, (40, 40, 22), (170, 90)),
            class("mini", 3.6, 4.5, (40, 42, 24), (190, 100)),
            class("freestyle", 4.6, 5.5, (42, 45, 26), (200, 110)),
            class("heavy_5", 5.6, 6.0, (36, 40, 20), (160, 90)),
            class("mid_lr", 6.1, 7.5, (30, 34, 18), (140, 80)),
            class("long_range", 7.6, 10.0, (26, 30, 14), (120, 70)),
        ],
    )
    .expect("fixture catalog is valid")
}

/// A few presets covering both ends of the catalog
pub fn presets() -> PresetRegistry {
    PresetRegistry::new(vec![
        Preset {
            class_id: Some("freestyle".into()),
            size: Some(5.0),
            weight: Some(750.0),
            battery: Some("6S".into()),
            prop_size: Some(5.1),
            pitch: Some(3.6),
            blades: Some(3),
            style: Some("freestyle".into()),
            ..Preset::named("5_freestyle")
        },
        Preset {
            class_id: Some("long_range".into()),
            size: Some(10.0),
            weight: Some(2200.0),
            battery: Some("6S 5000mAh".into()),
            prop_size: Some(10.0),
            pitch: Some(4.5),
            blades: Some(2),
            style: Some("long_range".into()),
            ..Preset::named("10_lr")
        },
    ])
    .expect("unique preset keys")
}
