//! Whole-dataset load/save helpers

use riskledger_core::RiskDataset;

use crate::{StorageKey, Store};

/// Loads every collection, falling back per collection to the ones in
/// `fallback`.
pub fn load_dataset<S: Store>(store: &S, fallback: RiskDataset) -> RiskDataset {
    RiskDataset {
        threats: store.load(StorageKey::Threats, fallback.threats),
        impact_assessments: store.load(StorageKey::ImpactAssessments, fallback.impact_assessments),
        likelihood_assessments: store.load(
            StorageKey::LikelihoodAssessments,
            fallback.likelihood_assessments,
        ),
        risk_calculations: store.load(StorageKey::RiskCalculations, fallback.risk_calculations),
        countermeasures: store.load(StorageKey::Countermeasures, fallback.countermeasures),
    }
}

/// Mirrors every collection of the dataset to the store.
pub fn save_dataset<S: Store>(store: &S, dataset: &RiskDataset) {
    store.save(StorageKey::Threats, &dataset.threats);
    store.save(StorageKey::ImpactAssessments, &dataset.impact_assessments);
    store.save(
        StorageKey::LikelihoodAssessments,
        &dataset.likelihood_assessments,
    );
    store.save(StorageKey::RiskCalculations, &dataset.risk_calculations);
    store.save(StorageKey::Countermeasures, &dataset.countermeasures);
}

/// Removes every collection from the store.
pub fn clear_all<S: Store>(store: &S) {
    for key in StorageKey::ALL {
        store.remove(key);
    }
}
