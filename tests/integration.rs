use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn qalam_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("qalam");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let files_dir = root.join("files");
    fs::create_dir_all(files_dir.join("drafts")).unwrap();
    fs::write(
        files_dir.join("doc1.txt"),
        "the quick brown fox jumps over the lazy dog",
    )
    .unwrap();
    fs::write(
        files_dir.join("doc2.md"),
        "# Notes\n\nHello World Testing\n\nhello again",
    )
    .unwrap();
    fs::write(
        files_dir.join("quran.txt"),
        "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ",
    )
    .unwrap();
    fs::write(files_dir.join("report.pdf"), "fake pdf content").unwrap();
    fs::write(files_dir.join("drafts/fox.txt"), "a draft about a fox").unwrap();

    let config_content = format!(
        r#"[library]
root = "{}/files"
include_globs = ["**/*.md", "**/*.txt"]
exclude_globs = ["drafts/**"]
follow_symlinks = false

[paging]
page_size = 100
"#,
        root.display()
    );

    let config_path = config_dir.join("qalam.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_qalam(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = qalam_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .arg("--progress")
        .arg("off")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run qalam binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_list_imports_supported_files_only() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_qalam(&config_path, &["list"]);
    assert!(success, "list failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("doc1.txt"));
    assert!(stdout.contains("doc2.md"));
    assert!(stdout.contains("quran.txt"));
    assert!(!stdout.contains("report.pdf"));
    assert!(!stdout.contains("fox.txt"), "excluded draft was listed");
}

#[test]
fn test_search_reports_context() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_qalam(&config_path, &["search", "fox"]);
    assert!(success, "search failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("doc1.txt - brown fox..."));
    assert!(stdout.contains("1 match(es)"));
}

#[test]
fn test_search_case_insensitive_every_occurrence() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_qalam(&config_path, &["search", "HELLO", "--json"]);
    assert!(success);
    let results: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["document_name"], "doc2.md");
    assert_eq!(results[0]["context"], "Notes");
    assert_eq!(results[1]["context"], "Testing");
    assert_eq!(results[1]["keyword"], "HELLO");
}

#[test]
fn test_search_no_results() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_qalam(&config_path, &["search", "nonexistent"]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_search_short_keyword_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_qalam(&config_path, &["search", "ab"]);
    assert!(!success, "short keyword should fail");
    assert!(stderr.contains("invalid argument"));
}

#[test]
fn test_search_ignore_diacritics() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_qalam(&config_path, &["search", "الله"]);
    assert!(success);
    assert!(stdout.contains("No results."));

    let (stdout, _, success) =
        run_qalam(&config_path, &["search", "الله", "--ignore-diacritics"]);
    assert!(success);
    assert!(stdout.contains("quran.txt"));
}

#[test]
fn test_rank_and_score() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_qalam(&config_path, &["rank", "--json"]);
    assert!(success, "rank failed: stdout={}, stderr={}", stdout, stderr);
    let ranked: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let ranked = ranked.as_array().unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0]["name"], "quran.txt");

    let (stdout, _, success) = run_qalam(&config_path, &["score", "!@#$ 123"]);
    assert!(success);
    assert!(stdout.contains("corpus documents: 3"));
    assert!(stdout.contains("score: 0.000000"));
}

#[test]
fn test_hash_and_check() {
    let (tmp, config_path) = setup_test_env();
    let file = tmp.path().join("hello.txt");
    fs::write(&file, "Hello World").unwrap();
    let file_str = file.to_str().unwrap();

    let (stdout, _, success) = run_qalam(&config_path, &["hash", file_str]);
    assert!(success);
    assert!(stdout.starts_with("B10A8DB164E0754105B7A99BE72E3FE5"));

    let (stdout, _, success) = run_qalam(
        &config_path,
        &["check", file_str, "B10A8DB164E0754105B7A99BE72E3FE5"],
    );
    assert!(success);
    assert!(stdout.contains("unchanged"));

    fs::write(&file, "Hello World!").unwrap();
    let (stdout, _, success) = run_qalam(
        &config_path,
        &["check", file_str, "B10A8DB164E0754105B7A99BE72E3FE5"],
    );
    assert!(!success);
    assert!(stdout.contains("modified"));
}

#[test]
fn test_paginate_file() {
    let (tmp, config_path) = setup_test_env();
    let file = tmp.path().join("long.txt");
    fs::write(&file, "C".repeat(250)).unwrap();

    let (stdout, _, success) = run_qalam(&config_path, &["paginate", file.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("3 page(s) of 100 chars"));
    assert!(stdout.contains("--- Page 3 ---"));

    let (stdout, _, success) = run_qalam(
        &config_path,
        &["paginate", file.to_str().unwrap(), "--page-size", "50"],
    );
    assert!(success);
    assert!(stdout.contains("5 page(s) of 50 chars"));
}

#[test]
fn test_get_document() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_qalam(&config_path, &["get", "doc1.txt", "--json"]);
    assert!(success);
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["name"], "doc1.txt");
    assert_eq!(doc["pages"][0]["number"], 1);
    assert_eq!(
        doc["pages"][0]["text"],
        "the quick brown fox jumps over the lazy dog"
    );

    let (_, stderr, success) = run_qalam(&config_path, &["get", "missing.txt"]);
    assert!(!success);
    assert!(stderr.contains("document not found"));
}

#[test]
fn test_stats() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_qalam(&config_path, &["stats"]);
    assert!(success, "stats failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Documents:   3"));
    assert!(stdout.contains("doc1.txt"));
}

#[test]
fn test_invalid_config_rejected() {
    let (_tmp, config_path) = setup_test_env();
    fs::write(&config_path, "[paging]\npage_size = 0\n").unwrap();

    let (_, stderr, success) = run_qalam(&config_path, &["list"]);
    assert!(!success);
    assert!(stderr.contains("page_size"));
}
