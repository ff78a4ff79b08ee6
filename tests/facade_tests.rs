//! Smoke tests through the `pactdb` facade re-exports.

use pactdb::{Executor, Output};
use pactdb_registry::testing::MemoryLedger;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn facade_exposes_full_invocation_surface() {
    let exec = Executor::new(MemoryLedger::new());
    exec.invoke("init", &strings(&["0"])).unwrap();
    exec.invoke(
        "init_contract",
        &strings(&[
            "C1", "2024-01-01", "2024-12-31", "NYC", "body", "P1", "P2", "Title",
        ]),
    )
    .unwrap();

    let out = exec.invoke("read", &strings(&["C1"])).unwrap();
    assert!(matches!(out, Output::Bytes(_)));

    let json: serde_json::Value = serde_json::from_slice(&out.into_bytes()).unwrap();
    assert_eq!(json["name"], "C1");
    assert_eq!(json["company2"], "P2");

    exec.invoke("delete", &strings(&["C1"])).unwrap();
    assert!(exec.registry().contract_ids().unwrap().is_empty());
}
