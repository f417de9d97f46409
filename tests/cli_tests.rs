//! End-to-end tests for the `bucket_sssp` and `fs_to_graph` binaries.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test fixture holding edge-list files in a temporary directory.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write edge list");
        path
    }
}

fn bucket_sssp() -> Command {
    Command::cargo_bin("bucket_sssp").expect("binary is built")
}

const DIAMOND: &str = "From,To,Length\nA,B,1\nA,C,2\nB,D,1\nC,D,0.5\n";

#[test]
fn test_missing_argument_prints_usage() {
    bucket_sssp()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument_prints_usage() {
    let fixture = Fixture::new();
    let input = fixture.write("diamond.csv", DIAMOND);

    bucket_sssp()
        .arg(&input)
        .arg("unexpected")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Passes").not());
}

#[test]
fn test_text_report() {
    let fixture = Fixture::new();
    let input = fixture.write("diamond.csv", DIAMOND);

    bucket_sssp()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Elapsed time:"))
        .stdout(predicate::str::contains("Passes: 2 (converged)"))
        .stdout(predicate::str::contains("A 0 [A]\n"))
        .stdout(predicate::str::contains("C 2 [A -> C]\n"))
        .stdout(predicate::str::contains("D 2 [A -> B -> D]\n"));
}

#[test]
fn test_json_report() {
    let fixture = Fixture::new();
    let input = fixture.write("diamond.csv", DIAMOND);

    let output = bucket_sssp()
        .arg(&input)
        .args(["--format", "json", "--verify", "--parallel"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "converged");
    assert_eq!(report["vertices"].as_array().unwrap().len(), 4);
    assert_eq!(report["vertices"][3]["name"], "D");
    assert_eq!(report["vertices"][3]["length"], 2.0);
    assert_eq!(report["vertices"][3]["path"], serde_json::json!(["A", "B", "D"]));
}

#[test]
fn test_stall_prints_partial_report_and_fails() {
    let fixture = Fixture::new();
    let input = fixture.write("stall.csv", "From,To,Length\nA,B,1\nC,D,1\nD,C,1\n");

    bucket_sssp()
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Passes: 2 (stalled)"))
        .stdout(predicate::str::contains("B 1 [A -> B]"))
        .stdout(predicate::str::contains("C unresolved"))
        .stderr(predicate::str::contains("Stalled after 2 passes"));
}

#[test]
fn test_multiple_sources_fail() {
    let fixture = Fixture::new();
    let input = fixture.write("two.csv", "From,To,Length\nA,B,1\nC,B,1\n");

    bucket_sssp()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only one vertex can have zero incoming edges"));
}

#[test]
fn test_bad_row_fails_unless_skipped() {
    let fixture = Fixture::new();
    let input = fixture.write("bad.csv", "From,To,Length\nA,B,1\nB,C,oops\n");

    bucket_sssp()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));

    bucket_sssp()
        .arg(&input)
        .arg("--skip-invalid")
        .assert()
        .success()
        .stdout(predicate::str::contains("B 1 [A -> B]"));
}

#[test]
fn test_early_exit_convergence_rule() {
    let fixture = Fixture::new();
    let input = fixture.write("diamond.csv", DIAMOND);

    bucket_sssp()
        .arg(&input)
        .args(["--convergence", "all-satisfied"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Passes: 1 (converged)"));
}

#[test]
fn test_fs_to_graph_output_feeds_bucket_sssp() {
    let tree = TempDir::new().unwrap();
    fs::create_dir_all(tree.path().join("a").join("b")).unwrap();

    let output = Command::cargo_bin("fs_to_graph")
        .unwrap()
        .arg(tree.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let csv = String::from_utf8(output.stdout).unwrap();
    assert!(csv.starts_with("From,To,Length\n"));
    assert_eq!(csv.lines().count(), 3);

    let fixture = Fixture::new();
    let input = fixture.write("tree.csv", &csv);
    bucket_sssp()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("(converged)"));
}
