//! End-to-end tests running the `check-rtl-meaning` binary.

use std::path::Path;
use std::process::{Command, Output};

const DICT: &str =
    r#"{"Prefixes": {"pq_": "Placement Queue"}, "Suffixes": {"_req": "Request line"}}"#;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-rtl-meaning"))
        .args(args)
        .output()
        .expect("run binary")
}

fn write_dict(dir: &Path, contents: &str) {
    std::fs::write(dir.join("rtl_dictionary.json"), contents).expect("write fixture");
}

#[test]
fn test_no_arguments() {
    let output = run(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("***Error: No input arguments were specified."));
    // No lookup happened, so no dictionary read was attempted either.
    assert!(!stdout.contains("Trying to read"));
}

#[test]
fn test_prefix_hit() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dict(dir.path(), DICT);

    let output = run(&[
        "--path_to_dict",
        dir.path().to_str().expect("utf8 path"),
        "--prefix",
        "pq_",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("pq_: Placement Queue"));
}

#[test]
fn test_suffix_miss_names_value_and_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dict(dir.path(), DICT);

    let output = run(&[
        "--path_to_dict",
        dir.path().to_str().expect("utf8 path"),
        "--suffix",
        "_ack",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("suffix"));
    assert!(stdout.contains("_ack"));
    assert!(stdout.contains("rtl_dictionary.json"));
    assert!(!stdout.contains("_ack:"));
}

#[test]
fn test_combined_switches_all_fire() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dict(dir.path(), DICT);

    let output = run(&[
        "--path_to_dict",
        dir.path().to_str().expect("utf8 path"),
        "--prefix",
        "pq_",
        "--suffix",
        "_req",
        "--list_all",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("pq_: Placement Queue"));
    assert!(stdout.contains("_req: Request line"));
    assert!(stdout.contains("Prefixes"));
    assert!(stdout.contains("Suffixes"));
}

#[test]
fn test_empty_file_lists_builtin_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dict(dir.path(), "");

    let output = run(&[
        "--path_to_dict",
        dir.path().to_str().expect("utf8 path"),
        "--list_all",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("creating the dictionary from scratch"));
    for key in ["aref_", "mmu_", "_req", "_ctrl"] {
        assert!(stdout.contains(key), "builtin listing missing {key}");
    }
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run(&[
        "--path_to_dict",
        dir.path().to_str().expect("utf8 path"),
        "--prefix",
        "pq_",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("rtl_dictionary.json"));
}
