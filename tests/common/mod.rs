//! Common test infrastructure for Shadepick integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

use shadepick::assets::AssetLoader;
use shadepick::models::AppConfig;
use shadepick::output::OutputFormat;
use shadepick::services::{Session, SessionSummary};
use std::fs;
use tempfile::TempDir;

/// Output of a finished session
pub struct SessionRun {
    pub summary: SessionSummary,
    pub output: String,
    pub session: Session,
}

impl SessionRun {
    /// Output lines that are refresh or show records
    pub fn records(&self) -> Vec<&str> {
        self.output
            .lines()
            .filter(|line| !line.starts_with('!'))
            .collect()
    }

    /// Output lines that report command errors
    pub fn errors(&self) -> Vec<&str> {
        self.output
            .lines()
            .filter(|line| line.starts_with('!'))
            .collect()
    }
}

/// Run `script` in a session built from `config`
pub fn run_session(config: &AppConfig, format: OutputFormat, script: &str) -> SessionRun {
    let mut session = Session::new(config, format);
    let mut out = Vec::new();
    let summary = session
        .run(script.as_bytes(), &mut out)
        .expect("session I/O failed");
    SessionRun {
        summary,
        output: String::from_utf8(out).expect("session output is UTF-8"),
        session,
    }
}

/// Write `yaml` to a temporary config file and return a loader for it
///
/// Keep the returned directory alive for as long as the loader is used.
pub fn config_file(yaml: &str) -> (TempDir, AssetLoader) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    (dir, AssetLoader::new(Some(path)))
}
