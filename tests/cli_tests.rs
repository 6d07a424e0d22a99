//! Command-line behaviour tests

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("symptom-cluster").unwrap()
}

#[test]
fn test_identify_text_output() {
    cli()
        .args([
            "identify",
            "central obesity",
            "elevated blood pressure",
            "fatigue",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Metabolic Syndrome (MODERATE)"))
        .stdout(predicate::str::contains("Missing major:"))
        .stdout(predicate::str::contains("for educational purposes only"));
}

#[test]
fn test_identify_json_output() {
    let output = cli()
        .args(["identify", "fatigue", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 5);
    assert_eq!(matches[0]["cluster_id"], "heart-failure-syndrome");
    assert_eq!(matches[0]["confidence"], "moderate");
    assert!(json["disclaimer"].is_string());
}

#[test]
fn test_identify_limit_and_tsv() {
    let output = cli()
        .args(["identify", "fatigue", "-n", "2", "--format", "tsv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("rank\tcluster_id\tname\tconfidence"));
    assert!(lines[1].starts_with("1\theart-failure-syndrome\t"));
    assert!(lines[2].starts_with("2\tmigraine-syndrome\t"));
}

#[test]
fn test_identify_from_stdin() {
    cli()
        .args(["identify", "--symptoms-file", "-"])
        .write_stdin("orthopnea\nperipheral edema, dyspnea on exertion\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Heart Failure Syndrome (HIGH)"));
}

#[test]
fn test_identify_from_json_with_triggers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("symptoms.json");
    std::fs::write(
        &path,
        r#"{"symptoms": ["nausea", "photophobia"], "triggers": ["bright lights"]}"#,
    )
    .unwrap();

    cli()
        .args(["identify", "--input-json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Migraine ("))
        .stdout(predicate::str::contains("Matching triggers: bright lights"));
}

#[test]
fn test_identify_unrelated_symptom() {
    cli()
        .args(["identify", "xyzzy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Migraine (MODERATE)"))
        .stdout(predicate::str::contains("#2 Heart Failure Syndrome (MODERATE)"));

    cli()
        .args(["identify", "xyzzy", "--min-score", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching symptom clusters found."));
}

#[test]
fn test_identify_rejects_overlong_symptom() {
    let long = "a".repeat(201);
    cli()
        .args(["identify", long.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Symptom too long"));
}

#[test]
fn test_identify_rejects_bad_min_score() {
    cli()
        .args(["identify", "fatigue", "--min-score", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inclusion_floor"));
}

#[test]
fn test_explore_with_symptoms() {
    cli()
        .args(["explore", "migraine-syndrome", "nausea", "photophobia", "--level", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cluster: Migraine"))
        .stdout(predicate::str::contains("Your match: 65.0% (moderate confidence)"))
        .stdout(predicate::str::contains("Pathway:"));
}

#[test]
fn test_explore_with_triggers_only() {
    cli()
        .args([
            "explore",
            "migraine-syndrome",
            "--trigger",
            "stress",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("match_score\t0.0500"))
        .stdout(predicate::str::contains("confidence\tpossible"));
}

#[test]
fn test_explore_json() {
    let output = cli()
        .args(["explore", "metabolic-syndrome", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cluster"]["cluster_id"], "metabolic-syndrome");
    assert!(json["match_result"].is_null());
    assert_eq!(json["view_settings"]["animation_enabled"], true);
}

#[test]
fn test_explore_unknown_cluster() {
    cli()
        .args(["explore", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cluster 'does-not-exist' not found"));
}

#[test]
fn test_catalog_list() {
    cli()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Symptom Cluster Catalog (6 clusters)"))
        .stdout(predicate::str::contains("fibromyalgia-syndrome"));
}

#[test]
fn test_catalog_list_by_category() {
    cli()
        .args(["catalog", "list", "--category", "Neurologic", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migraine-syndrome"))
        .stdout(predicate::str::contains("fibromyalgia-syndrome").not());

    cli()
        .args(["catalog", "list", "--category", "astrology"])
        .assert()
        .failure();
}

#[test]
fn test_catalog_show() {
    cli()
        .args(["catalog", "show", "irritable-bowel-syndrome"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cluster: Irritable Bowel Syndrome"))
        .stdout(predicate::str::contains("Recurrent abdominal pain"));

    cli()
        .args(["catalog", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_catalog_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    cli()
        .args(["catalog", "export"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 6 clusters"));

    cli()
        .args(["catalog", "list", "--format", "json", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("chronic-fatigue-syndrome"));
}
