#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Copies a fixture into `dir`, since the table is written next to its input.
pub fn stage_fixture(dir: &TempDir, name: &str) -> PathBuf {
    let target = dir.path().join(name);
    fs::copy(data_path(name), &target).unwrap();
    target
}

/// Runs the orfcoord binary with the given input and map paths.
pub fn orfcoord(input: &Path, orf_map: &Path) -> assert_cmd::assert::Assert {
    Command::cargo_bin("orfcoord")
        .unwrap()
        .arg("--input_file")
        .arg(input)
        .arg("--orf_map_file")
        .arg(orf_map)
        .assert()
}
