//! Classify and Tune Example
//!
//! Builds a small catalog in code, classifies a few airframes and prints
//! the class baseline next to the style suggestion.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_classify_and_tune
//! ```

use rotortune_core::{
    style_tuning, AdvisorRequest, Baseline, BaselinePid, ClassCatalog, ClassDefinition, Classification,
    Classifier, DroneInputs, FilterProfile, PidGains, PresetRegistry, SizeRange, TuningAdvisor,
    TuningDeriver,
};

fn main() -> Result<(), rotortune_core::CatalogError> {
    println!("rotortune classify and tune example");
    println!("===================================\n");

    let catalog = ClassCatalog::new(
        "example",
        vec![
            ClassDefinition::new("whoop", SizeRange::new(2.6, 3.0), "tiny ducted").with_baseline(Baseline {
                pid: BaselinePid::Shared(PidGains::new(34, 34, 14)),
                filter: FilterProfile::new(230, 110, None),
                notes: Some("high gyro cutoff for small props".into()),
            }),
            ClassDefinition::new("freestyle", SizeRange::new(4.6, 5.5), "5 inch freestyle").with_baseline(
                Baseline {
                    pid: BaselinePid::Shared(PidGains::new(42, 45, 26)),
                    filter: FilterProfile::new(200, 110, None),
                    notes: None,
                },
            ),
        ],
    )?;

    let classifier = Classifier::new(&catalog);
    let deriver = TuningDeriver::new(&catalog);

    for (size, weight) in [(2.8, 45.0), (5.0, 680.0), (4.0, 300.0), (f32::NAN, 300.0)] {
        let classification = classifier.classify(size, weight);
        match &classification {
            Classification::Matched { class_id } => println!("{}\" / {}g -> {}", size, weight, class_id),
            Classification::Nearest { class_id, distance } => {
                println!("{}\" / {}g -> {} (nearest, {:.2}\" from center)", size, weight, class_id, distance)
            }
            Classification::Unclassified { reason } => println!("{}\" / {}g -> unclassified: {}", size, weight, reason),
        }

        let profile = deriver.derive_for(&classification);
        if !profile.is_empty() {
            let pid = profile.pid;
            println!(
                "  roll {}/{}/{}  pitch {}/{}/{}  yaw {}/{}/{}  gyro {} Hz  dterm {} Hz",
                pid.roll.p, pid.roll.i, pid.roll.d,
                pid.pitch.p, pid.pitch.i, pid.pitch.d,
                pid.yaw.p, pid.yaw.i, pid.yaw.d,
                profile.filter.gyro_cutoff_hz, profile.filter.dterm_cutoff_hz,
            );
        }
    }

    let racing = style_tuning("racing");
    println!("\nracing style: roll {:?}, tips {:?}", racing.pid.roll, racing.tips);

    // Whole request flow
    let presets = PresetRegistry::empty();
    let analysis = TuningAdvisor::new(&catalog, &presets).analyze(&AdvisorRequest {
        preset: None,
        inputs: DroneInputs {
            size: Some(5.0),
            weight: Some(720.0),
            battery: Some("6S 1100mAh".into()),
            blades: Some(3),
            style: Some("freestyle".into()),
            ..DroneInputs::default()
        },
    });

    println!("\n{}", analysis.overview);
    println!("  thrust/weight: {:?}", analysis.thrust_to_weight);
    println!("  runtime: {:?} min", analysis.runtime_minutes);
    for warning in analysis.warnings.warnings() {
        println!("  warning: {}", warning);
    }

    Ok(())
}
