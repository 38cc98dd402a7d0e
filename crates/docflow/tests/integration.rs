use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn dfl_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("dfl");
    path
}

fn store_file() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("documents.json");
    (tmp, file)
}

fn run_dfl(file: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = dfl_binary();
    let output = Command::new(&binary)
        .arg("--file")
        .arg(file.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run dfl binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn read_store(file: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(file).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_add_assigns_id_one_and_persists() {
    let (_tmp, file) = store_file();

    let (stdout, stderr, success) = run_dfl(&file, &["add", "Spec", "--description", "desc"]);
    assert!(success, "add failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Document #1 'Spec' created."));

    let store = read_store(&file);
    assert_eq!(store["next_id"], 2);
    let docs = store["documents"].as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["status"], "DRAFT");
    assert_eq!(docs[0]["description"], "desc");
    assert_eq!(docs[0]["history"].as_array().unwrap().len(), 1);
}

#[test]
fn test_add_empty_title_rejected() {
    let (_tmp, file) = store_file();

    let (_, stderr, success) = run_dfl(&file, &["add", ""]);
    assert!(!success);
    assert!(stderr.contains("title must not be empty"));
    assert!(!file.exists(), "rejected add must not create the store file");
}

#[test]
fn test_ids_continue_across_invocations() {
    let (_tmp, file) = store_file();

    run_dfl(&file, &["add", "First"]);
    run_dfl(&file, &["add", "Second"]);
    let (stdout, _, success) = run_dfl(&file, &["add", "Third"]);
    assert!(success);
    assert!(stdout.contains("Document #3"));
}

#[test]
fn test_list_empty_store() {
    let (_tmp, file) = store_file();

    let (stdout, _, success) = run_dfl(&file, &["list"]);
    assert!(success);
    assert!(stdout.contains("No documents found."));
}

#[test]
fn test_list_shows_documents_sorted_by_id() {
    let (_tmp, file) = store_file();

    run_dfl(&file, &["add", "Quarterly report"]);
    run_dfl(&file, &["add", "Travel policy"]);

    let (stdout, _, success) = run_dfl(&file, &["list"]);
    assert!(success);
    assert!(stdout.contains("Quarterly report"));
    assert!(stdout.contains("Travel policy"));
    assert!(stdout.contains("Draft"));
    let first = stdout.find("Quarterly report").unwrap();
    let second = stdout.find("Travel policy").unwrap();
    assert!(first < second);
}

#[test]
fn test_set_status_appends_to_history() {
    let (_tmp, file) = store_file();

    run_dfl(&file, &["add", "Spec"]);
    let (stdout, _, success) = run_dfl(&file, &["set-status", "1", "review", "--comment", "sent"]);
    assert!(success);
    assert!(stdout.contains("'In review'"));

    let (stdout, _, success) = run_dfl(&file, &["set-status", "1", "approved"]);
    assert!(success);
    assert!(stdout.contains("'Approved'"));

    let store = read_store(&file);
    let history = store["documents"][0]["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert!(history[1].as_str().unwrap().contains("(sent)"));
    let last = history[2].as_str().unwrap();
    assert!(last.contains("'Approved'"));
    assert!(!last.contains('('), "empty comment must leave no suffix");
}

#[test]
fn test_set_status_unknown_id_fails() {
    let (_tmp, file) = store_file();

    run_dfl(&file, &["add", "Spec"]);
    let (_, stderr, success) = run_dfl(&file, &["set-status", "999", "review"]);
    assert!(!success);
    assert!(stderr.contains("999"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_set_status_invalid_status_rejected() {
    let (_tmp, file) = store_file();

    run_dfl(&file, &["add", "Spec"]);
    let (_, stderr, success) = run_dfl(&file, &["set-status", "1", "pending"]);
    assert!(!success);
    assert!(stderr.contains("pending"));
}

#[test]
fn test_history_lists_numbered_entries() {
    let (_tmp, file) = store_file();

    run_dfl(&file, &["add", "Spec", "--description", "desc"]);
    run_dfl(&file, &["set-status", "1", "review", "--comment", "sent"]);

    let (stdout, _, success) = run_dfl(&file, &["history", "1"]);
    assert!(success);
    assert!(stdout.contains("History of 'Spec' (id 1)"));
    assert!(stdout.contains("Description: desc"));
    assert!(stdout.contains("Current status: In review"));
    assert!(stdout.contains("1. Document created ("));
    assert!(stdout.contains("2. Status changed from 'Draft' to 'In review' (sent)"));
}

#[test]
fn test_history_unknown_id_fails() {
    let (_tmp, file) = store_file();

    let (_, stderr, success) = run_dfl(&file, &["history", "42"]);
    assert!(!success);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_find_filters_by_status() {
    let (_tmp, file) = store_file();

    run_dfl(&file, &["add", "Kept draft"]);
    run_dfl(&file, &["add", "Under review"]);
    run_dfl(&file, &["set-status", "2", "review"]);

    let (stdout, _, success) = run_dfl(&file, &["find", "review"]);
    assert!(success);
    assert!(stdout.contains("Under review"));
    assert!(!stdout.contains("Kept draft"));

    let (stdout, _, success) = run_dfl(&file, &["find", "archived"]);
    assert!(success);
    assert!(stdout.contains("No documents with status 'Archived'."));
}

#[test]
fn test_corrupt_store_file_recovers() {
    let (_tmp, file) = store_file();
    fs::write(&file, "{ definitely not json").unwrap();

    let (stdout, stderr, success) = run_dfl(&file, &["list"]);
    assert!(success, "list failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("No documents found."));
    assert!(stderr.contains("starting with an empty store"));

    // The next mutation rewrites the file from scratch, ids restart at 1.
    let (stdout, _, success) = run_dfl(&file, &["add", "Fresh"]);
    assert!(success);
    assert!(stdout.contains("Document #1"));
    assert_eq!(read_store(&file)["next_id"], 2);
}
