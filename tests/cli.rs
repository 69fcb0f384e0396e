use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rigref::rigdef::ast::{Document, NodeRef, Section};
use rigref::rigdef::loader::{write_document, DocumentFormat};
use rigref::rigdef::testing::{beams, cinecam, numbered_nodes, sample_truck, wheel};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, document: &Document) -> PathBuf {
    let path = dir.path().join(name);
    let format = DocumentFormat::from_path(&path);
    fs::write(&path, write_document(document, format).unwrap()).unwrap();
    path
}

/// References node 3 by legacy position: the first generated wheel node
fn legacy_document() -> Document {
    Document::with_root(
        "legacy",
        vec![
            numbered_nodes(0..3),
            Section::Wheels(vec![wheel(2, (0, 1), 2)]),
            Section::Cinecam(vec![cinecam([0, 1, 2, 0, 1, 2, 0, 1])]),
            beams([(3u32, 0u32)]),
        ],
    )
}

#[test]
fn resolve_prints_canonical_document() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "truck.json", &sample_truck());

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("resolve").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"slot\": 10").and(predicate::str::contains("\"number\"").not()))
        .stderr(predicate::str::contains("0 error(s), 0 warning(s), 0 other"));
}

#[test]
fn resolve_reads_yaml_and_writes_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "truck.yaml", &sample_truck());

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("resolve").arg(&path).arg("--output").arg("yaml");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("name: sample-truck").and(predicate::str::contains("!slot 10")));
}

#[test]
fn resolve_reports_errors_with_exit_code() {
    let dir = TempDir::new().unwrap();
    let document = Document::with_root(
        "broken",
        vec![
            numbered_nodes(0..2),
            beams([(NodeRef::number(0), NodeRef::name("ghost"))]),
        ],
    );
    let path = write_fixture(&dir, "broken.json", &document);

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("resolve").arg(&path);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("\"unresolved\""))
        .stderr(
            predicate::str::contains("error: _Root_/beams: named node not found: \"ghost\"")
                .and(predicate::str::contains("1 error(s)")),
        );
}

#[test]
fn resolve_disabled_passes_document_through() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "truck.json", &sample_truck());

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("resolve").arg(&path).arg("--disable");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"number\": 9").and(predicate::str::contains("\"slot\"").not()));
}

#[test]
fn undefined_number_fails_by_default() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "legacy.json", &legacy_document());

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("resolve").arg(&path);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("\"unresolved\""))
        .stderr(
            predicate::str::contains("node number 3 is not defined")
                .and(predicate::str::contains("1 error(s), 0 warning(s)")),
        );
}

#[test]
fn config_file_turns_on_legacy_positions() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "legacy.json", &legacy_document());
    let config = dir.path().join("legacy.toml");
    fs::write(&config, "[resolver]\nlegacy_positional_numbers = true\n").unwrap();

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("resolve").arg(&path).arg("--config").arg(&config);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"unresolved\"").not())
        .stderr(
            predicate::str::contains("legacy position")
                .and(predicate::str::contains("0 error(s), 1 warning(s)")),
        );
}

#[test]
fn table_dumps_text() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "truck.json", &sample_truck());

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("table").arg(&path);
    cmd.assert().success().stdout(
        predicate::str::contains("module _Root_ (29 nodes)")
            .and(predicate::str::contains("#10   nodes-named     \"hitch\""))
            .and(predicate::str::contains("#28   wheels          tyre-b  ray 3")),
    );
}

#[test]
fn table_dumps_json() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "truck.json", &sample_truck());

    let output = cargo_bin_cmd!("rigref")
        .arg("table")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let modules = value.as_array().unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["module"], "_Root_");
    assert_eq!(modules[0]["nodes"].as_array().unwrap().len(), 29);
}

#[test]
fn table_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "truck.json", &sample_truck());

    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("table").arg(&path).arg("--format").arg("xml");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn missing_document_exits_with_two() {
    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("resolve").arg("/nonexistent/truck.json");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Error loading"));
}

#[test]
fn list_formats_names_builtins() {
    let mut cmd = cargo_bin_cmd!("rigref");
    cmd.arg("list-formats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text").and(predicate::str::contains("json")));
}
