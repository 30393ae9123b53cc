// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! `testrun.toml` is optional. When present it can add environment
//! variables for the child and replace or append alias table entries.

pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::alias::{AliasEntry, AliasTable};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version.
    #[serde(default = "Config::default_version")]
    pub version: u32,

    /// Extra environment for the child process.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Alias table overrides, in file order.
    #[serde(default, rename = "alias")]
    pub aliases: Vec<AliasConfig>,
}

/// A single `[[alias]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub suite: Option<String>,
}

impl From<AliasConfig> for AliasEntry {
    fn from(alias: AliasConfig) -> Self {
        AliasEntry {
            name: alias.name,
            command: alias.command,
            suite: alias.suite,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::VERSION,
            env: BTreeMap::new(),
            aliases: Vec::new(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        defaults::VERSION
    }

    /// Parse config file contents.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.version != defaults::VERSION {
            bail!(
                "unsupported config version {} (expected {})",
                config.version,
                defaults::VERSION
            );
        }
        Ok(config)
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Find the config to use.
    ///
    /// An explicit path must exist. Otherwise `testrun.toml` in `cwd` is used
    /// when present, and the defaults when not.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("using config {}", path.display());
            return Self::load(path);
        }

        let path = Self::default_path(cwd);
        if path.is_file() {
            tracing::debug!("found config {}", path.display());
            Self::load(&path)
        } else {
            tracing::debug!("no {} found, using defaults", defaults::CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn default_path(cwd: &Path) -> PathBuf {
        cwd.join(defaults::CONFIG_FILE)
    }

    /// The built-in table with this config's overrides applied, validated.
    pub fn alias_table(&self) -> anyhow::Result<AliasTable> {
        let table = AliasTable::builtin()
            .with_overrides(self.aliases.iter().cloned().map(AliasEntry::from));
        table.validate().context("invalid alias table")?;
        Ok(table)
    }

    /// Environment for the child: test mode plus configured variables.
    pub fn child_env(&self) -> BTreeMap<String, String> {
        let mut env = BTreeMap::from([(
            defaults::env::MODE_VAR.to_string(),
            defaults::env::MODE_VALUE.to_string(),
        )]);
        env.extend(self.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        env
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
