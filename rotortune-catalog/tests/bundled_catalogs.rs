//! Bundled catalogs and presets against the engine

use proptest::prelude::*;

use rotortune_catalog::{bundled_registry, CatalogRegistry, CatalogValidator, IssueType, DEFAULT_CATALOG};
use rotortune_core::{
    AdvisorRequest, Classification, Classifier, DroneInputs, FilterProfile, FlightStyle, PidGains, TuningDeriver,
};

fn registry() -> &'static CatalogRegistry {
    bundled_registry().expect("bundled data is valid")
}

#[test]
fn both_catalogs_load_and_validate() {
    let registry = registry();
    let validator = CatalogValidator::default();

    for name in ["presets_v2", "analyzer_v1"] {
        let catalog = registry.get(name).expect("bundled catalog");
        let report = validator.validate(catalog);

        assert!(report.is_valid(), "{}: {:?}", name, report.errors);
        assert_eq!(report.of_type(IssueType::Overlap).count(), 0, "{}", name);
        assert_eq!(report.of_type(IssueType::MissingBaseline).count(), 0, "{}", name);
        assert_eq!(report.of_type(IssueType::CoverageShort).count(), 0, "{}", name);
    }

    assert_eq!(registry.get("presets_v2").unwrap().len(), 8);
    assert_eq!(registry.get("analyzer_v1").unwrap().len(), 6);
    assert_eq!(registry.default_catalog().unwrap().name(), DEFAULT_CATALOG);
}

#[test]
fn every_preset_classifies_into_its_own_class() {
    let registry = registry();
    let catalog = registry.default_catalog().unwrap();
    let classifier = Classifier::new(catalog);

    let report = CatalogValidator::default().validate_presets(catalog, registry.presets());
    assert_eq!(report.total_issues(), 0, "{:?}", report.warnings);

    for preset in registry.presets().iter() {
        let class_id = preset.class_id.as_deref().expect("bundled presets name a class");
        let classification = classifier.classify(preset.size.unwrap(), preset.weight.unwrap());
        assert_eq!(
            classification,
            Classification::Matched { class_id: class_id.to_string() },
            "preset {}",
            preset.key
        );
    }
}

#[test]
fn default_catalog_baselines() {
    let catalog = registry().default_catalog().unwrap();
    let deriver = TuningDeriver::new(catalog);

    let micro = deriver.derive_baseline("micro");
    assert_eq!(micro.pid.roll, PidGains::new(30, 30, 10));
    assert_eq!(micro.pid.yaw, PidGains::new(18, 18, 0));
    assert_eq!(micro.filter, FilterProfile::new(250, 120, None));
    assert!(micro.notes.as_deref().unwrap_or_default().contains("high gyro cutoff"));

    let long_range = deriver.derive_baseline("long_range");
    assert_eq!(long_range.pid.pitch, PidGains::new(26, 30, 14));
    assert_eq!(long_range.pid.yaw, PidGains::new(15, 18, 0));

    assert!(deriver.derive_baseline("freestyle_5").is_empty());
}

#[test]
fn analyzer_catalog_keeps_per_axis_values_and_ceilings() {
    let catalog = registry().get("analyzer_v1").unwrap();
    let classifier = Classifier::new(catalog);
    let deriver = TuningDeriver::new(catalog);

    let cine = deriver.derive_baseline("cine");
    assert_eq!(cine.pid.yaw, PidGains::new(36, 42, 0));
    assert_eq!(cine.filter, FilterProfile::new(170, 100, Some(2)));

    assert!(classifier.classify(5.0, 1000.0).is_exact());
    assert_eq!(classifier.classify(5.0, 1000.0).class_id(), Some("freestyle_5"));

    // Over the 1200 g ceiling: nearest center is still freestyle_5, but not an exact match
    let heavy = classifier.classify(5.0, 1500.0);
    assert!(!heavy.is_exact());
    assert_eq!(heavy.class_id(), Some("freestyle_5"));
}

#[test]
fn boundary_gaps_fall_back_to_nearest() {
    let catalog = registry().default_catalog().unwrap();
    let classifier = Classifier::new(catalog);

    // Between freestyle (4.6-5.5, center 5.05) and heavy_5 (5.6-6.0, center 5.8)
    let result = classifier.classify(5.55, 800.0);
    assert!(!result.is_exact());
    assert_eq!(result.class_id(), Some("heavy_5"));

    assert_eq!(classifier.classify(0.5, 20.0).class_id(), Some("micro"));
    assert_eq!(classifier.classify(50.0, 20.0).class_id(), Some("long_range"));
}

#[test]
fn advisor_with_bundled_data() {
    let advisor = registry().advisor(None).unwrap();

    let analysis = advisor.analyze(&AdvisorRequest {
        preset: Some("5_freestyle".into()),
        inputs: DroneInputs {
            size: Some(7.2),
            style: Some("racing".into()),
            ..DroneInputs::default()
        },
    });
    assert_eq!(analysis.inputs.size, 5.0);
    assert_eq!(analysis.baseline.class_id, "freestyle");
    assert_eq!(analysis.style.style, FlightStyle::Freestyle);
    assert!(analysis.warnings.is_clean());

    // Preset styles outside the three buckets use the default bucket
    let analysis = advisor.analyze(&AdvisorRequest::from_preset("8_lr"));
    assert_eq!(analysis.style.style, FlightStyle::LongRange);
    assert_eq!(analysis.baseline.class_id, "long_range");
}

#[test]
fn serialized_output_is_byte_identical() {
    let advisor = registry().advisor(None).unwrap();
    let request = AdvisorRequest::from_preset("7_midlr");

    let first = serde_json::to_vec(&advisor.analyze(&request)).unwrap();
    let second = serde_json::to_vec(&advisor.analyze(&request)).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn bundled_catalogs_classify_every_finite_input(size in -5.0f32..50.0, weight in -100.0f32..10_000.0) {
        for name in ["presets_v2", "analyzer_v1"] {
            let catalog = registry().get(name).unwrap();
            let classification = Classifier::new(catalog).classify(size, weight);
            let profile = TuningDeriver::new(catalog).derive_for(&classification);

            prop_assert!(classification.is_classified());
            prop_assert!(!profile.is_empty());
            prop_assert_eq!(profile.pid.yaw.d, 0);
        }
    }
}
