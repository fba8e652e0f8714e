use riskledger_core::{ImpactAssessment, ImpactWeights, RiskDataset, Threat};
use riskledger_test::sample_threats;

use super::*;

#[test]
fn memory_round_trip_yields_equal_collection() {
    let store = MemoryStore::new();
    let threats = sample_threats();

    store.save(StorageKey::Threats, &threats);
    let loaded: Vec<Threat> = store.load(StorageKey::Threats, Vec::new());
    assert_eq!(loaded, threats);
}

#[test]
fn file_round_trip_yields_equal_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("blobs")).unwrap();
    let threats = sample_threats();

    store.save(StorageKey::Threats, &threats);
    let loaded: Vec<Threat> = store.load(StorageKey::Threats, Vec::new());
    assert_eq!(loaded, threats);
}

#[test]
fn missing_key_yields_fallback() {
    let store = MemoryStore::new();
    let fallback = sample_threats();
    let loaded: Vec<Threat> = store.load(StorageKey::Threats, fallback.clone());
    assert_eq!(loaded, fallback);
}

#[test]
fn corrupt_blob_yields_fallback_without_error() {
    let store = MemoryStore::new();
    store.put_raw(StorageKey::Threats, "{not json");

    let loaded: Vec<Threat> = store.load(StorageKey::Threats, Vec::new());
    assert!(loaded.is_empty());

    // The fallible variant surfaces the parse failure.
    let result: Result<Option<Vec<Threat>>, StoreError> = store.try_load(StorageKey::Threats);
    assert!(matches!(result, Err(StoreError::Json(_))));
}

#[test]
fn corrupt_file_yields_fallback_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    std::fs::write(
        store.dir().join(format!("{}.json", StorageKey::Threats.as_str())),
        "]]",
    )
    .unwrap();

    let loaded: Vec<Threat> = store.load(StorageKey::Threats, sample_threats());
    assert_eq!(loaded.len(), 2);
}

#[test]
fn save_overwrites_the_previous_blob() {
    let store = MemoryStore::new();
    store.save(StorageKey::Threats, &sample_threats());
    store.save(StorageKey::Threats, &sample_threats()[..1]);

    let loaded: Vec<Threat> = store.load(StorageKey::Threats, Vec::new());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "T001");
}

#[test]
fn remove_then_load_yields_fallback() {
    let store = MemoryStore::new();
    store.save(StorageKey::Threats, &sample_threats());
    store.remove(StorageKey::Threats);

    let loaded: Vec<Threat> = store.load(StorageKey::Threats, Vec::new());
    assert!(loaded.is_empty());
}

#[test]
fn dataset_round_trip() {
    let store = MemoryStore::new();
    let mut dataset = RiskDataset::new();
    dataset.threats = sample_threats();
    dataset.impact_assessments.push(ImpactAssessment::new(
        "T001",
        5,
        5,
        4,
        5,
        &ImpactWeights::default(),
    ));

    save_dataset(&store, &dataset);
    let loaded = load_dataset(&store, RiskDataset::new());
    assert_eq!(loaded, dataset);
}

#[test]
fn clear_all_empties_every_collection() {
    let store = MemoryStore::new();
    let mut dataset = RiskDataset::new();
    dataset.threats = sample_threats();
    save_dataset(&store, &dataset);

    clear_all(&store);
    let loaded = load_dataset(&store, RiskDataset::new());
    assert!(loaded.is_empty());
}

#[test]
fn each_key_maps_to_its_own_blob() {
    assert_eq!(StorageKey::ALL.len(), 5);
    let strings: Vec<&str> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
    let mut deduped = strings.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), strings.len());
    assert_eq!(StorageKey::Threats.as_str(), "risk-analysis-threats");
}
