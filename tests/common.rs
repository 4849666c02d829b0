// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn uplist_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("uplist"))
}

// Creates a file under `root`, creating parent directories as needed.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// Parses the binary's stdout and returns the "files" list.
#[allow(dead_code)]
pub fn files_from_json(stdout: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(stdout).expect("stdout is valid JSON");
    value["files"]
        .as_array()
        .expect("'files' is an array")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// Parses the binary's stdout and returns the "root" string.
#[allow(dead_code)]
pub fn root_from_json(stdout: &[u8]) -> String {
    let value: serde_json::Value = serde_json::from_slice(stdout).expect("stdout is valid JSON");
    value["root"].as_str().expect("'root' is a string").to_string()
}
