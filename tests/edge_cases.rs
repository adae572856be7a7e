//! Edge case and error handling tests for matwiz


use assert_cmd::Command;
use harness::{TestDir, run_matwiz};
use predicates::prelude::*;

fn matwiz() -> Command {
    let mut cmd = Command::cargo_bin("matwiz").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Input Ending Early
// ============================================================================

#[test]
fn test_empty_stdin_fails_on_root() {
    matwiz()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "input ended while asking for matrix A0",
        ));
}

#[test]
fn test_stdin_ending_mid_tree_names_the_block() {
    let dir = TestDir::new();
    let (_stdout, stderr, success) = run_matwiz(dir.path(), &[], "n\ny\n2\nn\nn\n");
    assert!(!success, "should fail when input runs out");
    assert!(
        stderr.contains("input ended while asking for matrix A01"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_short_script_fails() {
    let dir = TestDir::new();
    let script = dir.add_file("answers.json", r#"[{"logstruc": true, "blocks": 3}, {}]"#);
    matwiz()
        .arg("--answers")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("matrix A01"));
}

// ============================================================================
// Bad Answer Files
// ============================================================================

#[test]
fn test_missing_answers_file() {
    let dir = TestDir::new();
    matwiz()
        .arg("--answers")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read answers"));
}

#[test]
fn test_malformed_answers_file() {
    let dir = TestDir::new();
    let script = dir.add_file("answers.json", "{\"symm\": ");
    matwiz()
        .arg("--answers")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed answers"));
}

#[test]
fn test_script_exceeding_block_limit() {
    let dir = TestDir::new();
    let script = dir.add_file("answers.json", r#"[{"logstruc": true, "blocks": 4}]"#);
    matwiz()
        .args(["--max-blocks", "3", "--answers"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be split into 4 blocks"));
}

#[test]
fn test_leftover_answers_warn_but_succeed() {
    let dir = TestDir::new();
    let script = dir.add_file("answers.json", "[{}, {}, {}]");
    matwiz()
        .args(["--color", "never", "--answers"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 matrix, 0 split"))
        .stderr(predicate::str::contains("answers left over"));
}

// ============================================================================
// Argument Validation
// ============================================================================

#[test]
fn test_max_blocks_above_encoding_rejected() {
    matwiz()
        .args(["--max-blocks", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 10"));
}

#[test]
fn test_max_blocks_zero_rejected() {
    matwiz().args(["--max-blocks", "0"]).assert().failure();
}

// ============================================================================
// Interactive Re-prompting
// ============================================================================

#[test]
fn test_out_of_range_block_count_is_reasked() {
    let dir = TestDir::new();
    // --max-blocks 2: "5" is refused, "2" accepted, then two leaves
    let input = "n\ny\n5\n2\nn\nn\nn\nn\n";
    let (stdout, stderr, success) =
        run_matwiz(dir.path(), &["--max-blocks", "2", "--color", "never"], input);
    assert!(success, "stderr: {}", stderr);
    assert!(stderr.contains("Please enter a number between 1 and 2."));
    assert!(stdout.contains("3 matrices, 1 split"));
}

#[test]
fn test_json_output_is_only_json() {
    let dir = TestDir::new();
    let (stdout, _stderr, success) = run_matwiz(dir.path(), &["--json"], "n\nn\n");
    assert!(success);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is pure JSON");
    assert_eq!(json["id"], "0");
    assert!(json.get("children").is_none());
}
