// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.
//!
//! Loads the config, resolves the alias, runs the child, and returns the
//! exit code the process should terminate with.

use std::path::Path;

use anyhow::Context;
use termcolor::{StandardStream, WriteColor};

use crate::cli::Cli;
use crate::color;
use crate::config::Config;
use crate::dispatch::{Dispatcher, FAILURE_EXIT_CODE};
use crate::error::DispatchError;
use crate::report::Reporter;

/// Run with the process's working directory and standard streams.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let choice = color::stdout_choice(cli.color, cli.no_color);
    let mut reporter = Reporter::new(StandardStream::stdout(choice), StandardStream::stderr(choice));
    run_in(cli, &cwd, &mut reporter)
}

/// Run against an explicit working directory and reporter.
pub fn run_in<O: WriteColor, E: WriteColor>(
    cli: &Cli,
    cwd: &Path,
    reporter: &mut Reporter<O, E>,
) -> anyhow::Result<i32> {
    let config = Config::discover(cli.config.as_deref(), cwd)?;
    let table = config.alias_table()?;
    let env = config.child_env();

    if cli.list {
        reporter.listing(&table)?;
        return Ok(0);
    }

    if !cli.rest.is_empty() {
        tracing::debug!("ignoring extra arguments: {:?}", cli.rest);
    }

    let dispatcher = Dispatcher::new(&table, &env, cwd.to_path_buf());
    let resolved = match dispatcher.resolve(cli.alias.as_deref()) {
        Ok(resolved) => resolved,
        Err(err @ DispatchError::UnknownAlias { .. }) => {
            reporter.unknown_alias(&err, &table)?;
            return Ok(FAILURE_EXIT_CODE);
        }
        Err(err) => return Err(err.into()),
    };

    if cli.dry_run {
        reporter.dry_run(&resolved.invocation)?;
        return Ok(0);
    }

    // Banner writes never decide the exit code once an alias has resolved.
    let alias = resolved.entry.name.as_str();
    warn_on_write_error(reporter.start(alias, &resolved.invocation));
    match dispatcher.run(&resolved.invocation) {
        Ok(outcome) => {
            warn_on_write_error(reporter.outcome(alias, outcome));
            Ok(outcome.exit_code())
        }
        Err(err) => {
            tracing::debug!("spawn failed: {}", err);
            warn_on_write_error(reporter.spawn_error(&err));
            Ok(FAILURE_EXIT_CODE)
        }
    }
}

fn warn_on_write_error(result: std::io::Result<()>) {
    if let Err(err) = result {
        tracing::warn!("failed to write banner: {}", err);
    }
}

#[cfg(test)]
#[path = "cmd_run_tests.rs"]
mod tests;
