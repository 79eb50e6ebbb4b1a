//! Integration tests for CLI commands.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const DATASET: &str = "\
<http://ex.org/a> <http://ex.org/p> \"1\" .
<http://ex.org/a> <http://ex.org/p> \"2\" .
<http://ex.org/b> <http://ex.org/q> <http://ex.org/a> .
";

/// Runs the binary with `args` and captures its output.
fn trine(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trine"))
        .args(args)
        .output()
        .expect("run trine")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

fn sort_rows(text: &str, key: impl Fn(&[u64]) -> (u64, u64, u64)) -> String {
    let mut rows: Vec<Vec<u64>> = text
        .lines()
        .map(|l| l.split(' ').map(|f| f.parse().unwrap()).collect())
        .collect();
    rows.sort_by_key(|r| key(r));
    rows.iter()
        .map(|r| format!("{} {} {}\n", r[0], r[1], r[2]))
        .collect()
}

#[test]
fn test_run_then_stats() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let input = temp_dir.path().join("d.nq");
    fs::write(&input, DATASET).unwrap();

    let out = trine(&["run", path_arg(&input), "--quiet"]);
    assert!(
        out.status.success(),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );

    let mapped = fs::read_to_string(temp_dir.path().join("d.nq.mapped.unsorted")).unwrap();
    assert_eq!(mapped, "0 0 0\n0 0 1\n1 1 2\n");

    fs::write(
        temp_dir.path().join("d.nq.spo"),
        sort_rows(&mapped, |r| (r[0], r[1], r[2])),
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("d.nq.pos"),
        sort_rows(&mapped, |r| (r[1], r[2], r[0])),
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("d.nq.osp"),
        sort_rows(&mapped, |r| (r[2], r[0], r[1])),
    )
    .unwrap();

    let out = trine(&["stats", path_arg(&input), "--format", "json"]);
    assert!(
        out.status.success(),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["triples"], 3);
    assert_eq!(json["distinct_s"], 2);
    assert_eq!(json["distinct_p"], 2);
    assert_eq!(json["distinct_o"], 3);

    let stats = fs::read_to_string(temp_dir.path().join("d.nq.stats")).unwrap();
    assert_eq!(stats, "3\n2\n2\n3\n2\n3\n3\n");

    let out = trine(&["info", path_arg(&input), "--format", "json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["stats"]["triples"], 3);
}

#[test]
fn test_vocab_role_selection() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let input = temp_dir.path().join("d.nq");
    fs::write(&input, DATASET).unwrap();

    let out = trine(&["vocab", path_arg(&input), "-P", "--format", "json"]);
    assert!(
        out.status.success(),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["statements"], 3);
    assert_eq!(json["vocabularies"][0]["role"], "predicate");
    assert_eq!(json["vocabularies"][0]["terms"], 2);

    assert!(temp_dir.path().join("d.nq.predicates_vocab").exists());
    assert!(!temp_dir.path().join("d.nq.subjects_vocab").exists());
    assert!(!temp_dir.path().join("d.nq.objects_vocab").exists());
}

#[test]
fn test_malformed_input_exits_with_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let input = temp_dir.path().join("bad.nq");
    fs::write(&input, "<a <p> <o> .\n").unwrap();

    let out = trine(&["vocab", path_arg(&input), "--quiet"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("field boundary 1"));
    assert!(!temp_dir.path().join("bad.nq.subjects_vocab").exists());
}

#[test]
fn test_hashed_map_json_report() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let input = temp_dir.path().join("d.nq");
    fs::write(&input, DATASET).unwrap();

    let out = trine(&[
        "vocab",
        path_arg(&input),
        "--hash",
        "--threads",
        "2",
        "--quiet",
    ]);
    assert!(
        out.status.success(),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );

    let out = trine(&["map", path_arg(&input), "--hash", "--format", "json"]);
    assert!(
        out.status.success(),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["mapped"], 3);
    assert_eq!(json["unresolved_subjects"], 0);
}
