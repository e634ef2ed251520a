use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"id": 1, "name": "Wireless Mouse", "description": "Ergonomic mouse", "sku": "WM-100", "category_id": 1},
    {"id": 2, "name": "Mechanical Keyboard", "sku": "KB-200", "category_id": 1},
    {"id": 3, "name": "Desk Lamp", "sku": "DL-300", "category_id": 2}
]"#;

fn fixture() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("catalog.json");
    std::fs::write(&catalog, CATALOG).unwrap();
    (temp, catalog)
}

fn cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catalog-search").unwrap();
    cmd.current_dir(temp.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn query_json_ranks_fuzzy_match() {
    let (temp, catalog) = fixture();

    let output = cmd(&temp)
        .args(["query", catalog.to_str().unwrap(), "moose", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], 1);
    assert_eq!(results[0]["rank"], 1);
}

#[test]
fn query_respects_category() {
    let (temp, catalog) = fixture();

    cmd(&temp)
        .args(["query", catalog.to_str().unwrap(), "lamp", "--category", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn batch_reports_cache_hits() {
    let (temp, catalog) = fixture();
    let queries = temp.path().join("queries.txt");
    std::fs::write(&queries, "mouse\n# skipped\nkeybord\nMouse\n").unwrap();

    let output = cmd(&temp)
        .args(["batch", catalog.to_str().unwrap(), queries.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["queries"].as_array().unwrap().len(), 3);
    assert_eq!(report["queries"][1]["top"]["id"], 2);
    assert_eq!(report["queries"][2]["cached"], true);
    assert_eq!(report["cache"]["hits"], 1);
    assert_eq!(report["cache"]["entries"], 2);
}

#[test]
fn distance_prints_values() {
    let temp = TempDir::new().unwrap();

    cmd(&temp)
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 3"));
}

#[test]
fn missing_catalog_fails() {
    let temp = TempDir::new().unwrap();

    cmd(&temp)
        .args(["query", "absent.json", "mouse"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn invalid_config_weight_fails() {
    let (temp, catalog) = fixture();
    std::fs::write(temp.path().join(".catalog-search.toml"), "[search.weights]\nsku = -2.0\n").unwrap();

    cmd(&temp)
        .args(["query", catalog.to_str().unwrap(), "mouse"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("search.weights.sku"));
}
