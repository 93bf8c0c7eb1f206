//! Shared fixtures for the binary tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".pokedex");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Point the catalog client at `base_url`.
    pub fn use_api(&self, base_url: &str) {
        let config = format!("api_base_url = \"{}\"\nrequest_timeout_secs = 5\n", base_url);
        fs::write(self.data_dir.join("config.toml"), config).expect("Failed to write config");
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pokedex").expect("Failed to find pokedex binary");
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .env_remove("RUST_LOG")
            .env_remove("POKEDEX_PATH");
        cmd
    }

    /// Run with `--format json` and parse stdout; panics when the command fails.
    pub fn json(&self, args: &[&str]) -> Value {
        let output = self
            .command()
            .args(["--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run pokedex");

        assert!(
            output.status.success(),
            "pokedex {:?} failed\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not a single JSON document")
    }
}

pub fn entry_names(page: &Value) -> Vec<String> {
    page["content"]["entries"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
