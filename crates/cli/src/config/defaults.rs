// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "testrun.toml";

/// Only supported config schema version.
pub const VERSION: u32 = 1;

/// Environment the child always receives unless overridden.
pub mod env {
    /// Variable jest and the app under test read to select runtime mode.
    pub const MODE_VAR: &str = "NODE_ENV";

    /// Value designating test mode.
    pub const MODE_VALUE: &str = "test";
}
