// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;

/// Run a predefined test suite by short alias
#[derive(Debug, Parser)]
#[command(name = "testrun")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Test type to run (default: all; see --list)
    // Unknown dash-prefixed words land here and fail alias lookup.
    #[arg(value_name = "ALIAS", allow_hyphen_values = true)]
    pub alias: Option<String>,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "TESTRUN_CONFIG")]
    pub config: Option<PathBuf>,

    /// List available test types and exit
    #[arg(long)]
    pub list: bool,

    /// Print the command that would run without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
