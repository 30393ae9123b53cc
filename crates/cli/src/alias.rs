// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The alias table.
//!
//! Maps short aliases to the jest command lines they run. The built-in
//! entries are fixed; a config file may replace or append entries before
//! the table is frozen for the rest of the process.

use std::path::Path;

use crate::error::{DispatchError, Result};

/// Alias used when none is given on the command line.
pub const DEFAULT_ALIAS: &str = "all";

/// Built-in entries as `(alias, command, suite)`.
const BUILTIN: &[(&str, &str, Option<&str>)] = &[
    ("all", "jest", None),
    ("coverage", "jest --coverage", None),
    ("watch", "jest --watch", None),
    ("verbose", "jest --verbose", None),
    ("auth", "jest tests/auth.test.js", Some("tests/auth.test.js")),
    ("issues", "jest tests/issues.test.js", Some("tests/issues.test.js")),
    ("comments", "jest tests/comments.test.js", Some("tests/comments.test.js")),
    ("users", "jest tests/users.test.js", Some("tests/users.test.js")),
    ("stewards", "jest tests/stewards.test.js", Some("tests/stewards.test.js")),
    ("upload", "jest tests/upload.test.js", Some("tests/upload.test.js")),
    ("health", "jest tests/health.test.js", Some("tests/health.test.js")),
];

/// A single alias and the command it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub command: String,
    /// Test file this alias runs, when it targets exactly one suite.
    pub suite: Option<String>,
}

impl AliasEntry {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            suite: None,
        }
    }

    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = Some(suite.into());
        self
    }

    /// Check the command and suite invariants for this entry.
    pub fn validate(&self) -> Result<()> {
        if self.command.split_whitespace().next().is_none() {
            return Err(DispatchError::EmptyCommand {
                alias: self.name.clone(),
            });
        }

        let Some(suite) = &self.suite else {
            return Ok(());
        };

        let mismatch = |reason| DispatchError::SuiteMismatch {
            alias: self.name.clone(),
            suite: suite.clone(),
            reason,
        };

        if suite_base_name(suite) != Some(self.name.as_str()) {
            return Err(mismatch("suite file name must equal the alias"));
        }
        if !self.command.split_whitespace().any(|arg| arg == suite) {
            return Err(mismatch("command does not run the suite file"));
        }
        Ok(())
    }
}

/// Base name of a suite file with any `.test.<ext>` or `.<ext>` suffix removed.
///
/// `tests/auth.test.js` -> `auth`
pub fn suite_base_name(suite: &str) -> Option<&str> {
    let file = Path::new(suite).file_name()?.to_str()?;
    file.split('.').next().filter(|s| !s.is_empty())
}

/// Ordered, immutable mapping from alias to command line.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(name, command, suite)| {
                let entry = AliasEntry::new(name, command);
                match suite {
                    Some(suite) => entry.with_suite(suite),
                    None => entry,
                }
            })
            .collect();
        Self { entries }
    }

    /// Replace entries sharing a name in place; append the rest in order.
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = AliasEntry>) -> Self {
        for entry in overrides {
            match self.entries.iter_mut().find(|e| e.name == entry.name) {
                Some(existing) => *existing = entry,
                None => self.entries.push(entry),
            }
        }
        self
    }

    /// Validate every entry, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        self.entries.iter().try_for_each(AliasEntry::validate)
    }

    pub fn get(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Alias names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
