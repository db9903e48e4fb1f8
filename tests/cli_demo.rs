use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn demo_prints_the_seeded_table() {
    let mut cmd = Command::cargo_bin("prodz").unwrap();
    cmd.arg("--demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mechanical Keyboard"))
        .stdout(predicate::str::contains("RGB Gaming Mouse"))
        .stdout(predicate::str::contains("Ultrawide Monitor"))
        .stdout(predicate::str::contains("101"));
}

#[test]
fn demo_json_is_parseable_and_ordered() {
    let mut cmd = Command::cargo_bin("prodz").unwrap();
    let output = cmd.arg("--demo").arg("--json").assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let products: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<i64> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [101, 102, 103]);
}

#[test]
fn demo_without_seed_reports_an_empty_catalog() {
    let mut cmd = Command::cargo_bin("prodz").unwrap();
    cmd.arg("--demo")
        .arg("--no-seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}
