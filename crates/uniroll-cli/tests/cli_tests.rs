//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn uniroll() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("uniroll").unwrap();
    cmd.env_remove("UNIROLL_DATA_FILE");
    cmd
}

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("students.data")
}

fn run_session(dir: &TempDir, stdin: &str) -> assert_cmd::assert::Assert {
    uniroll()
        .current_dir(dir.path())
        .arg("run")
        .arg("--data-file")
        .arg(data_file(dir))
        .write_stdin(stdin)
        .assert()
}

fn register_jane(dir: &TempDir) {
    run_session(
        dir,
        "S\nR\nJane Doe\njane.doe@university.com\nJanedoe123\nX\nX\n",
    )
    .success()
    .stdout(predicate::str::contains("Registration successful!"));
}

fn read_records(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn register_creates_record() {
    let dir = TempDir::new().unwrap();
    register_jane(&dir);

    let records = read_records(&data_file(&dir));
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["email"], "jane.doe@university.com");
    assert_eq!(records[0]["id"].as_str().unwrap().len(), 6);
}

#[test]
fn register_rejects_bad_email() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "S\nR\nJane\njane@gmail.com\nJanedoe123\nX\nX\n")
        .success()
        .stdout(predicate::str::contains(
            "ERROR: Invalid email format. Must end with @university.com",
        ));

    assert_eq!(read_records(&data_file(&dir)), serde_json::json!([]));
}

#[test]
fn register_twice_reports_duplicate() {
    let dir = TempDir::new().unwrap();
    register_jane(&dir);
    run_session(
        &dir,
        "S\nR\nJane Again\njane.doe@university.com\nJanedoe123\nX\nX\n",
    )
    .success()
    .stdout(predicate::str::contains("Student already exists!"));

    assert_eq!(read_records(&data_file(&dir)).as_array().unwrap().len(), 1);
}

#[test]
fn login_and_enrol() {
    let dir = TempDir::new().unwrap();
    register_jane(&dir);

    run_session(
        &dir,
        "S\nL\njane.doe@university.com\nJanedoe123\nE\nS\nX\nX\nX\n",
    )
    .success()
    .stdout(predicate::str::contains("Login successful!"))
    .stdout(predicate::str::contains("Enrolling in Subject-"))
    .stdout(predicate::str::contains(
        "You are now enrolled in 1 out of 4 subjects",
    ))
    .stdout(predicate::str::contains("Showing 1 subjects"));

    let records = read_records(&data_file(&dir));
    assert_eq!(records[0]["subjects"].as_array().unwrap().len(), 1);
}

#[test]
fn login_with_wrong_password() {
    let dir = TempDir::new().unwrap();
    register_jane(&dir);

    run_session(&dir, "S\nL\njane.doe@university.com\nWrong123\nX\nX\n")
        .success()
        .stdout(predicate::str::contains("ERROR: Invalid credentials!"));
}

#[test]
fn admin_clear_with_confirmation() {
    let dir = TempDir::new().unwrap();
    register_jane(&dir);

    run_session(&dir, "A\nC\ny\nX\nX\n")
        .success()
        .stdout(predicate::str::contains("Database cleared successfully!"));

    assert_eq!(read_records(&data_file(&dir)), serde_json::json!([]));
}

#[test]
fn admin_remove_unknown_student() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "A\nR\n123456\nX\nX\n")
        .success()
        .stdout(predicate::str::contains("ERROR: Student 123456 not found!"));
}

#[test]
fn invalid_top_level_option() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "Q\nX\n")
        .success()
        .stdout(predicate::str::contains("ERROR: Invalid option"))
        .stdout(predicate::str::contains("Thank You"));
}

#[test]
fn run_exits_cleanly_on_eof() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "").success();
    assert!(data_file(&dir).exists());
}

#[test]
fn show_empty_store() {
    let dir = TempDir::new().unwrap();
    uniroll()
        .arg("show")
        .arg("--data-file")
        .arg(data_file(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found"));
}

#[test]
fn show_does_not_create_missing_data_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("students.data");
    uniroll()
        .arg("show")
        .arg("--data-file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found"));
    assert!(!path.exists());
    assert!(!dir.path().join("nested").exists());

    uniroll()
        .arg("show")
        .arg("--format")
        .arg("json")
        .arg("--data-file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
    assert!(!path.exists());
}

#[test]
fn invalid_utf8_name_is_asked_again() {
    let dir = TempDir::new().unwrap();
    uniroll()
        .current_dir(dir.path())
        .arg("run")
        .arg("--data-file")
        .arg(data_file(&dir))
        .write_stdin(b"S\nR\n\xff\xfe\nJane\njane@university.com\nJanedoe123\nX\nX\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Input must be valid UTF-8"))
        .stdout(predicate::str::contains("Registration successful!"));

    let records = read_records(&data_file(&dir));
    assert_eq!(records[0]["name"], "Jane");
}

#[test]
fn show_lists_registered_students() {
    let dir = TempDir::new().unwrap();
    register_jane(&dir);

    uniroll()
        .arg("show")
        .arg("--data-file")
        .arg(data_file(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("1 student(s)"));

    uniroll()
        .arg("show")
        .arg("--format")
        .arg("json")
        .arg("--data-file")
        .arg(data_file(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\": \"jane.doe@university.com\""));
}

#[test]
fn show_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    uniroll()
        .arg("show")
        .arg("--format")
        .arg("xml")
        .arg("--data-file")
        .arg(data_file(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn show_corrupt_store_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(data_file(&dir), "{not json").unwrap();
    uniroll()
        .arg("show")
        .arg("--data-file")
        .arg(data_file(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open student store"));
}

#[test]
fn show_reads_data_file_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    let data = dir.path().join("records.json");
    std::fs::write(
        &config,
        format!("data_file = {:?}\n", data.to_string_lossy()),
    )
    .unwrap();

    uniroll()
        .arg("show")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found"));
    assert!(data.exists());
}

#[test]
fn missing_config_fails() {
    uniroll()
        .arg("show")
        .arg("--config")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    uniroll()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created uniroll.toml"))
        .stdout(predicate::str::contains("Created students.data"));

    assert!(dir.path().join("uniroll.toml").exists());
    assert!(dir.path().join("students.data").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    uniroll()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    uniroll()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    uniroll()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("University enrolment manager"));
}

#[test]
fn version_output() {
    uniroll()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uniroll"));
}
