use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const HEADER: &str = "---\nconfig:\n  theme: default\n  layout: elk\n---\nclassDiagram\n";

fn fragz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fragz").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write_config(dir: &Path, json: &str) {
    fs::write(dir.join("fragz.json"), json).unwrap();
}

#[test]
fn test_merge_skips_missing_and_exits_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.mmd"), "%% a\nclass A\n").unwrap();
    fs::write(temp_dir.path().join("c.mmd"), "%% c\nclass C\nA --> C\n").unwrap();
    write_config(
        temp_dir.path(),
        r#"{ "fragment_names": ["a.mmd", "b.mmd", "c.mmd"], "output_path": "all.mmd" }"#,
    );

    fragz(temp_dir.path())
        .args(["merge", "--no-clipboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 of 3 fragments"))
        .stderr(predicate::str::contains("b.mmd: file not found, ignoring"));

    let merged = fs::read_to_string(temp_dir.path().join("all.mmd")).unwrap();
    assert_eq!(merged, format!("{HEADER}class A\n\nclass C\nA --> C\n\n"));
}

#[test]
fn test_all_missing_writes_header_with_one_diagnostic_each() {
    let temp_dir = tempfile::tempdir().unwrap();

    let assert = fragz(temp_dir.path())
        .args(["merge", "--no-clipboard", "x.mmd", "y.mmd", "z.mmd"])
        .assert()
        .success();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.matches("file not found, ignoring").count(), 3);

    let merged = fs::read_to_string(temp_dir.path().join("diagram.mmd")).unwrap();
    assert_eq!(merged, HEADER);
}

#[test]
fn test_rerun_overwrites_identically() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.mmd"), "h\nclass A\n").unwrap();
    fs::write(
        temp_dir.path().join("diagram.mmd"),
        "stale content that is long\n".repeat(20),
    )
    .unwrap();

    let run = || {
        fragz(temp_dir.path())
            .args(["merge", "--no-clipboard", "a.mmd"])
            .assert()
            .success();
        fs::read(temp_dir.path().join("diagram.mmd")).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(first, format!("{HEADER}class A\n\n").into_bytes());
}

#[test]
fn test_unwritable_output_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.mmd"), "h\nclass A\n").unwrap();

    fragz(temp_dir.path())
        .args(["merge", "--no-clipboard", "-o", "missing/dir/out.mmd", "a.mmd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to write output"));
}

#[test]
fn test_stdout_prints_document_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.mmd"), "h\nclass A\n").unwrap();

    fragz(temp_dir.path())
        .args(["merge", "--no-clipboard", "--stdout", "a.mmd", "gone.mmd"])
        .assert()
        .success()
        .stdout(format!("{HEADER}class A\n\n"))
        .stderr(predicate::str::contains("gone.mmd: file not found, ignoring"))
        .stderr(predicate::str::contains("Merged 1 of 2 fragments"));
}

#[test]
fn test_dir_flag_resolves_fragments_and_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work = temp_dir.path().join("diagrams");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("a.mmd"), "h\nclass A\n").unwrap();

    fragz(temp_dir.path())
        .args(["-C", "diagrams", "merge", "--no-clipboard", "a.mmd"])
        .assert()
        .success();

    assert!(work.join("diagram.mmd").exists());
    assert!(!temp_dir.path().join("diagram.mmd").exists());
}

#[test]
fn test_check_lists_presence_without_writing() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.mmd"), "h\nclass A\n").unwrap();

    fragz(temp_dir.path())
        .args(["check", "a.mmd", "b.mmd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok").and(predicate::str::contains("missing")))
        .stderr(predicate::str::contains("b.mmd: file not found"));

    assert!(!temp_dir.path().join("diagram.mmd").exists());
}

#[test]
fn test_init_then_config() {
    let temp_dir = tempfile::tempdir().unwrap();

    fragz(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(temp_dir.path().join("fragz.json").exists());

    fragz(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fragz(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("output_path = diagram.mmd"))
        .stdout(predicate::str::contains("| classDiagram"));
}

#[test]
fn test_broken_config_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), "{ nope");

    fragz(temp_dir.path())
        .args(["merge", "--no-clipboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unreadable_fragment_is_skipped_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.mmd"), "h\nclass A\n").unwrap();

    // A regular file per is_file() whose reads fail with EIO
    let assert = fragz(temp_dir.path())
        .args(["merge", "--no-clipboard", "a.mmd", "/proc/self/mem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 1 of 2 fragments"));

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("/proc/self/mem: cannot read ("));
    assert!(stderr.contains("), ignoring"));
    assert!(!stderr.contains("Error:"));

    let merged = fs::read_to_string(temp_dir.path().join("diagram.mmd")).unwrap();
    assert_eq!(merged, format!("{HEADER}class A\n\n"));
}

#[test]
fn test_write_failure_still_reports_missing_fragments() {
    let temp_dir = tempfile::tempdir().unwrap();

    fragz(temp_dir.path())
        .args(["merge", "--no-clipboard", "-o", "missing/dir/out.mmd", "gone.mmd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("gone.mmd: file not found, ignoring"))
        .stderr(predicate::str::contains("Error: Failed to write output"));
}
