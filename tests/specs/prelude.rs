//! Helpers shared by the CLI behavior tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::{Path, PathBuf};

/// Returns a Command configured to run the strmatch binary.
///
/// Inherited `STRMATCH_*` variables are cleared so the host environment
/// cannot leak a config file or log filter into a spec.
pub fn strmatch_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("strmatch"));
    cmd.env_remove("STRMATCH_CONFIG").env_remove("STRMATCH_LOG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parse stdout of a finished command as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

/// Scratch project directory that stops config discovery at its root.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Empty project with a `.git` marker and no strmatch.toml.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        std::fs::create_dir(dir.path().join(".git")).expect(".git should be created");
        Self { dir }
    }

    /// Project with the given strmatch.toml content.
    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.file("strmatch.toml", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("parent dirs should be created");
        }
        std::fs::write(path, content).expect("file should be written");
    }
}
