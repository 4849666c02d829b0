// tests/basic.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, files_from_json, root_from_json, uplist_cmd};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_no_rules_includes_everything() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "README.md", "readme");
    create_file(temp.path(), "src/main.py", "print('hi')");
    create_file(temp.path(), "build/artifact.o", "bin");
    create_file(temp.path(), ".hidden", "secret");

    let assert = uplist_cmd().arg(temp.path()).assert().success();
    let files = files_from_json(&assert.get_output().stdout);
    assert_eq!(
        files,
        vec![".hidden", "README.md", "build/artifact.o", "src/main.py"]
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_root_is_resolved_absolute() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a");

    let assert = uplist_cmd().arg(temp.path()).assert().success();
    let root = root_from_json(&assert.get_output().stdout);
    assert!(Path::new(&root).is_absolute());

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_is_sorted_by_byte_value() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Creation order deliberately scrambled; uppercase sorts before
    // lowercase in byte order.
    create_file(temp.path(), "zebra.txt", "z");
    create_file(temp.path(), "Alpha.txt", "A");
    create_file(temp.path(), "beta/inner.txt", "i");
    create_file(temp.path(), "alpha.txt", "a");

    let assert = uplist_cmd().arg(temp.path()).assert().success();
    let files = files_from_json(&assert.get_output().stdout);
    assert_eq!(
        files,
        vec!["Alpha.txt", "alpha.txt", "beta/inner.txt", "zebra.txt"]
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a/b.txt", "b");
    create_file(temp.path(), "c.txt", "c");
    create_file(temp.path(), ".uploaderignore", "[exclude_extension]\ntmp\n");

    let first = uplist_cmd().arg(temp.path()).assert().success();
    let second = uplist_cmd().arg(temp.path()).assert().success();
    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_stdout_is_single_json_document() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a");

    let assert = uplist_cmd().arg(temp.path()).assert().success();
    let stdout = &assert.get_output().stdout;
    let value: serde_json::Value = serde_json::from_slice(stdout)?;
    assert!(value.get("root").is_some());
    assert!(value.get("files").is_some());

    temp.close()?;
    Ok(())
}
