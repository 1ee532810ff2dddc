//! Contract store tests - envelopes, bare contracts, listing

#[path = "../common/mod.rs"]
mod common;
use common::*;

use std::fs;

use component_contract::config::StorageConfig;
use component_contract::features::contract_store::{list_contracts, load_contract, ContractStore};
use component_contract::ContractError;
use pretty_assertions::assert_eq;

#[test]
fn store_roundtrips_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContractStore::new(dir.path());
    let contract = card_contract().build();

    let path = store
        .save(&contract, vec!["src/card.component.ts".to_string()])
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Card-20260115T093000.contract.json"
    );
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["hash"], "hash-Card");
    assert_eq!(raw["metadata"]["name"], "Card");
    assert_eq!(raw["metadata"]["sourcePaths"][0], "src/card.component.ts");

    assert_eq!(store.load(&path).unwrap(), contract);
}

#[test]
fn store_loads_bare_contract() {
    let dir = tempfile::tempdir().unwrap();
    let contract = card_contract().build();
    let path = dir.path().join("legacy.json");
    fs::write(&path, serde_json::to_string(&contract).unwrap()).unwrap();

    assert_eq!(load_contract(&path).unwrap(), contract);
}

#[test]
fn store_rejects_malformed_documents() {
    let dir = tempfile::tempdir().unwrap();
    let not_json = dir.path().join("a.contract.json");
    let wrong_shape = dir.path().join("b.contract.json");
    fs::write(&not_json, "{ nope").unwrap();
    fs::write(&wrong_shape, r#"{"name": "Card"}"#).unwrap();

    for path in [&not_json, &wrong_shape] {
        match load_contract(path) {
            Err(ContractError::MalformedContract { path: p, .. }) => assert_eq!(&p, path),
            other => panic!("expected MalformedContract, got {other:?}"),
        }
    }
    assert!(matches!(
        load_contract(dir.path().join("missing.contract.json")),
        Err(ContractError::MissingInput { .. })
    ));
}

#[test]
fn list_contracts_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContractStore::from_config(&StorageConfig {
        contracts_dir: dir.path().join("nested").display().to_string(),
        pretty: false,
    });
    let older = card_contract().build();
    let newer = card_contract()
        .generated_at(fixed_time() + chrono::Duration::days(1))
        .hash("v2")
        .build();
    store.save(&older, Vec::new()).unwrap();
    store.save(&newer, Vec::new()).unwrap();
    fs::write(store.root_dir().join("notes.json"), "{}").unwrap();
    fs::write(store.root_dir().join("broken.contract.json"), "[]").unwrap();

    let listed = list_contracts(dir.path()).unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].hash, "v2");
    assert_eq!(listed[1].hash, "hash-Card");
    assert_eq!(store.list().unwrap(), listed);
}

#[test]
fn list_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_contracts(dir.path().join("none")).unwrap().is_empty());
}

#[test]
fn same_second_saves_keep_both_contracts() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContractStore::new(dir.path());
    let first = card_contract().build();
    let second = card_contract().hash("v2").build();

    let p1 = store.save(&first, Vec::new()).unwrap();
    let p2 = store.save(&second, Vec::new()).unwrap();

    assert_ne!(p1, p2);
    assert_eq!(
        p2.file_name().unwrap().to_str().unwrap(),
        "Card-20260115T093000-2.contract.json"
    );
    assert_eq!(store.load(&p1).unwrap().meta.content_hash, "hash-Card");
    assert_eq!(store.load(&p2).unwrap().meta.content_hash, "v2");
    assert_eq!(store.list().unwrap().len(), 2);
}

#[cfg(unix)]
#[test]
fn list_skips_unreadable_directories() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = ContractStore::new(dir.path());
    store.save(&card_contract().build(), Vec::new()).unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("x.contract.json"), "{}").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let listed = list_contracts(dir.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let listed = listed.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].hash, "hash-Card");
}
