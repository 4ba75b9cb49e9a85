//! Baseline derivation from catalog entries

use alloc::string::String;

use crate::catalog::ClassCatalog;
use crate::classify::Classification;

use super::TuningProfile;

/// Expands stored class baselines into full tuning profiles
#[derive(Debug, Clone, Copy)]
pub struct TuningDeriver<'a> {
    catalog: &'a ClassCatalog,
}

impl<'a> TuningDeriver<'a> {
    /// Deriver over `catalog`
    pub fn new(catalog: &'a ClassCatalog) -> Self {
        Self { catalog }
    }

    /// Baseline profile for a class id
    ///
    /// Unknown ids and classes without a stored baseline yield the empty
    /// profile (see [`TuningProfile::is_empty`]).
    pub fn derive_baseline(&self, class_id: &str) -> TuningProfile {
        let Some(class) = self.catalog.get(class_id) else {
            log_warn!("no class '{}' in catalog {}", class_id, self.catalog.name());
            return TuningProfile::empty(class_id);
        };

        let Some(baseline) = &class.baseline else {
            log_warn!("class '{}' has no baseline in catalog {}", class_id, self.catalog.name());
            return TuningProfile::empty(class_id);
        };

        TuningProfile {
            class_id: String::from(class_id),
            pid: baseline.pid.axis_gains(),
            filter: baseline.filter,
            notes: baseline.notes.clone(),
        }
    }

    /// Baseline for whatever class a classification resolved to
    pub fn derive_for(&self, classification: &Classification) -> TuningProfile {
        match classification.class_id() {
            Some(class_id) => self.derive_baseline(class_id),
            None => TuningProfile::empty(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture;
    use crate::classify::Classifier;
    use crate::tuning::{FilterProfile, PidGains};

    #[test]
    fn per_axis_baseline_is_used_as_is() {
        let catalog = fixture();
        let profile = TuningDeriver::new(&catalog).derive_baseline("small");

        assert_eq!(profile.class_id, "small");
        assert_eq!(profile.pid.roll, PidGains::new(30, 30, 10));
        assert_eq!(profile.pid.pitch, PidGains::new(31, 30, 10));
        assert_eq!(profile.pid.yaw, PidGains::new(28, 30, 0));
        assert_eq!(profile.filter, FilterProfile::new(250, 120, Some(2)));
        assert!(!profile.is_empty());
    }

    #[test]
    fn shared_triple_gets_detuned_yaw() {
        let catalog = fixture();
        let profile = TuningDeriver::new(&catalog).derive_baseline("mid");

        assert_eq!(profile.pid.roll, PidGains::new(42, 45, 26));
        assert_eq!(profile.pid.pitch, PidGains::new(42, 45, 26));
        assert_eq!(profile.pid.yaw, PidGains::new(25, 27, 0));
        assert_eq!(profile.filter.notch_stages, None);
        assert_eq!(profile.notes.as_deref(), Some("five"));
    }

    #[test]
    fn missing_baseline_and_unknown_class_are_empty() {
        let catalog = fixture();
        let deriver = TuningDeriver::new(&catalog);

        let no_baseline = deriver.derive_baseline("big");
        assert!(no_baseline.is_empty());
        assert_eq!(no_baseline.class_id, "big");

        let unknown = deriver.derive_baseline("does_not_exist");
        assert!(unknown.is_empty());
    }

    #[test]
    fn derive_for_classification() {
        let catalog = fixture();
        let classifier = Classifier::new(&catalog);
        let deriver = TuningDeriver::new(&catalog);

        let profile = deriver.derive_for(&classifier.classify(5.0, 700.0));
        assert_eq!(profile.class_id, "mid");

        let profile = deriver.derive_for(&classifier.classify(f32::NAN, 700.0));
        assert!(profile.is_empty());
    }

    #[test]
    fn derivation_is_repeatable() {
        let catalog = fixture();
        let deriver = TuningDeriver::new(&catalog);
        assert_eq!(deriver.derive_baseline("mid"), deriver.derive_baseline("mid"));
    }
}
