//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Helper to get an sst command
pub fn sst() -> Command {
    Command::new(cargo::cargo_bin!("sst"))
}

/// Helper to create an initialized data directory in a temp directory
pub fn setup_data_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    sst().current_dir(tmp.path()).arg("init").assert().success();
    tmp
}

/// Helper to add a product, returning its assigned index
pub fn add_test_product(tmp: &TempDir, name: &str, category: &str) -> u32 {
    let output = sst()
        .current_dir(tmp.path())
        .args(["product", "add", "--name", name, "--category", category])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|l| l.split("(index ").nth(1))
        .and_then(|rest| rest.trim_end_matches(')').trim().parse().ok())
        .unwrap_or_default()
}

/// Helper to add a supplier quote with the standard 1/10/50 slabs
pub fn add_test_quote(tmp: &TempDir, index: u32, supplier: &str) {
    sst()
        .current_dir(tmp.path())
        .args([
            "source",
            "add",
            &index.to_string(),
            "--supplier",
            supplier,
            "--contact",
            "sales@example.com",
            "--delivery-days",
            "14",
            "--moq",
            "25",
            "--tier",
            "1:5",
            "--tier",
            "10:4",
            "--tier",
            "50:3",
        ])
        .assert()
        .success();
}

/// Helper to overwrite one of the data documents with raw text
pub fn write_document(tmp: &TempDir, name: &str, contents: &str) {
    fs::write(tmp.path().join(name), contents).unwrap();
}

/// Helper to read one of the data documents as text
pub fn read_document(tmp: &TempDir, name: &str) -> String {
    fs::read_to_string(tmp.path().join(name)).unwrap()
}
