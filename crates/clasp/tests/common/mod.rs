#![allow(dead_code, reason = "each integration test binary uses a subset")]
use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

/// Returns the directory containing HTML fixtures for integration tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file into a string.
pub fn load_fixture(name: &str) -> Result<String> {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).map_err(|error| anyhow!("Failed to read {}: {error}", path.display()))
}
