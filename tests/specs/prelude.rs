// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Every alias the built-in table provides, in order.
pub const BUILTIN_ALIASES: &[&str] = &[
    "all", "coverage", "watch", "verbose", "auth", "issues", "comments", "users", "stewards",
    "upload", "health",
];

/// Returns a Command running the testrun binary with config, logging, and
/// color variables cleared.
pub fn testrun_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("testrun"));
    cmd.env_remove("TESTRUN_CONFIG")
        .env_remove("TESTRUN_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A throwaway project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write testrun.toml.
    pub fn config(&self, content: &str) {
        self.file("testrun.toml", content);
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Point `alias` at a shell script with the given body.
    #[allow(dead_code)] // KEEP: only unix specs call this
    pub fn script_alias(&self, alias: &str, body: &str) {
        let script = format!("{alias}.sh");
        self.file(&script, body);
        self.config(&format!(
            "[[alias]]\nname = \"{alias}\"\ncommand = \"sh {script}\"\n"
        ));
    }

    /// testrun command running inside this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = testrun_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
