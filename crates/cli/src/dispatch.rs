// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alias resolution and child process dispatch.
//!
//! The dispatcher resolves an alias to an [`Invocation`], spawns it with
//! inherited stdio, blocks until it exits, and reports the child's
//! termination as an [`Outcome`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::alias::{AliasEntry, AliasTable, DEFAULT_ALIAS};
use crate::error::{DispatchError, Result};

/// Exit code used when the parent cannot run a child at all.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Program and arguments produced by splitting a command line on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Split `command` into program and arguments.
    ///
    /// Table commands are trusted, so no quoting rules apply.
    pub fn parse(alias: &str, command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| DispatchError::EmptyCommand {
            alias: alias.to_string(),
        })?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How the child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exited normally with a status code.
    Exited(i32),
    /// Killed by a signal.
    Signaled(i32),
}

impl Outcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Outcome::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Outcome::Signaled(signal);
            }
        }
        Outcome::Exited(FAILURE_EXIT_CODE)
    }

    /// Exit code the parent terminates with.
    ///
    /// Signaled children map to `128 + signal`, as shells report them.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Exited(code) => code,
            Outcome::Signaled(signal) => 128 + signal,
        }
    }

    pub fn success(self) -> bool {
        self == Outcome::Exited(0)
    }
}

/// An alias resolved against the table.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub entry: &'a AliasEntry,
    pub invocation: Invocation,
}

/// Resolves aliases and runs the resulting commands.
pub struct Dispatcher<'a> {
    table: &'a AliasTable,
    env: &'a BTreeMap<String, String>,
    cwd: PathBuf,
}

impl<'a> Dispatcher<'a> {
    pub fn new(table: &'a AliasTable, env: &'a BTreeMap<String, String>, cwd: PathBuf) -> Self {
        Self { table, env, cwd }
    }

    /// Resolve `alias` (or the default alias) to its invocation.
    pub fn resolve(&self, alias: Option<&str>) -> Result<Resolved<'a>> {
        let name = alias.unwrap_or(DEFAULT_ALIAS);
        let entry = self
            .table
            .get(name)
            .ok_or_else(|| DispatchError::UnknownAlias {
                alias: name.to_string(),
            })?;
        let invocation = Invocation::parse(&entry.name, &entry.command)?;
        tracing::debug!(alias = %entry.name, command = %invocation, "resolved alias");
        Ok(Resolved { entry, invocation })
    }

    /// Build the child command: inherited stdio, parent's working directory,
    /// and the configured test environment.
    pub fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .envs(self.env)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Spawn the invocation and block until it terminates.
    pub fn run(&self, invocation: &Invocation) -> Result<Outcome> {
        tracing::debug!(program = %invocation.program, cwd = %self.cwd.display(), "spawning child");
        let status = self
            .command(invocation)
            .status()
            .map_err(|source| DispatchError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        let outcome = Outcome::from_status(status);
        tracing::debug!(?outcome, "child exited");
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
