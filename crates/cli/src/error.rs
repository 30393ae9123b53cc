// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for alias resolution and child dispatch.

use std::io;

/// Errors produced while resolving an alias or launching its command.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The requested alias is not in the table.
    #[error("unknown test type: {alias}")]
    UnknownAlias { alias: String },

    /// A table entry's command has no program to run.
    #[error("alias '{alias}' has an empty command")]
    EmptyCommand { alias: String },

    /// A suite entry whose file name or command disagrees with its alias.
    #[error("alias '{alias}' does not match suite '{suite}': {reason}")]
    SuiteMismatch {
        alias: String,
        suite: String,
        reason: &'static str,
    },

    /// The child process could not be started.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DispatchError>;
