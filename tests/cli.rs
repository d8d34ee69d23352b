use std::fs;

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run(args: &[&str]) -> String {
    let output = Command::cargo_bin("even_triples")
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_sample_listing_by_default() {
    let expected = "\
Found 14 combinations:
[2, 3, 7]
[2, 4, 6]
[2, 6, 4]
[2, 7, 3]
[4, 1, 7]
[4, 2, 6]
[4, 3, 5]
[4, 5, 3]
[4, 6, 2]
[4, 7, 1]
[6, 1, 5]
[6, 2, 4]
[6, 4, 2]
[6, 5, 1]
";
    assert_eq!(run(&[]), expected);
}

#[test]
fn numbers_and_target_override_sample() {
    assert_eq!(
        run(&["--numbers", "2,2,8", "--target", "12"]),
        "Found 6 combinations:\n[2, 2, 8]\n[2, 8, 2]\n[2, 2, 8]\n[2, 8, 2]\n[8, 2, 2]\n[8, 2, 2]\n"
    );
}

#[test]
fn negative_values_on_command_line() {
    assert_eq!(
        run(&["--numbers", "-4,0,3,1", "--target", "-3"]),
        "Found 4 combinations:\n[-4, 0, 1]\n[-4, 1, 0]\n[0, -4, 1]\n[0, 1, -4]\n"
    );
}

#[test]
fn reads_instance_file_as_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("instance.json");
    fs::write(&path, r#"{"numbers": [6, 0, 2, 5], "target_sum": 8}"#).unwrap();

    let stdout = run(&["--instance", path.to_str().unwrap(), "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "target_sum": 8,
            "count": 6,
            "combinations": [[6, 0, 2], [6, 2, 0], [0, 6, 2], [0, 2, 6], [2, 6, 0], [2, 0, 6]],
        })
    );
}

#[test]
fn missing_instance_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let output = Command::cargo_bin("even_triples")
        .unwrap()
        .args(["--instance", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.json"));
}
