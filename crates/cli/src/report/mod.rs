// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable output.
//!
//! Banners and listings go to stdout; errors go to stderr. Nothing is
//! written while the child runs, so its output reaches the terminal as-is.

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use crate::alias::AliasTable;
use crate::color::scheme;
use crate::dispatch::{Invocation, Outcome};
use crate::error::DispatchError;

/// Writes banners to `out` and errors to `err`.
pub struct Reporter<O, E> {
    out: O,
    err: E,
}

impl<O: WriteColor, E: WriteColor> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    /// `RUN: <alias> (<command>)`, flushed before the child starts.
    pub fn start(&mut self, alias: &str, invocation: &Invocation) -> io::Result<()> {
        write_styled(&mut self.out, &scheme::run(), "RUN")?;
        write!(self.out, ": ")?;
        write_styled(&mut self.out, &scheme::alias(), alias)?;
        write!(self.out, " (")?;
        write_styled(&mut self.out, &scheme::command(), &invocation.to_string())?;
        writeln!(self.out, ")")?;
        self.out.flush()
    }

    /// `PASS: <alias>` or `FAIL: <alias> (...)`.
    pub fn outcome(&mut self, alias: &str, outcome: Outcome) -> io::Result<()> {
        if outcome.success() {
            write_styled(&mut self.out, &scheme::pass(), "PASS")?;
            write!(self.out, ": ")?;
            write_styled(&mut self.out, &scheme::alias(), alias)?;
            writeln!(self.out)?;
        } else {
            write_styled(&mut self.out, &scheme::fail(), "FAIL")?;
            write!(self.out, ": ")?;
            write_styled(&mut self.out, &scheme::alias(), alias)?;
            match outcome {
                Outcome::Signaled(signal) => {
                    writeln!(self.out, " (terminated by signal {})", signal)?
                }
                Outcome::Exited(code) => writeln!(self.out, " (exit code {})", code)?,
            }
        }
        self.out.flush()
    }

    /// Error line on stderr followed by the alias listing on stdout.
    pub fn unknown_alias(&mut self, error: &DispatchError, table: &AliasTable) -> io::Result<()> {
        self.error(error)?;
        self.listing(table)
    }

    /// Launch failure on stderr.
    pub fn spawn_error(&mut self, error: &DispatchError) -> io::Result<()> {
        self.error(error)
    }

    /// Every alias with its command, in table order.
    pub fn listing(&mut self, table: &AliasTable) -> io::Result<()> {
        let width = table.names().map(str::len).max().unwrap_or(0);
        writeln!(self.out, "Available test types:")?;
        for entry in table.entries() {
            write!(self.out, "  ")?;
            write_styled(
                &mut self.out,
                &scheme::alias(),
                &format!("{:<width$}", entry.name, width = width),
            )?;
            write!(self.out, "  ")?;
            write_styled(&mut self.out, &scheme::command(), &entry.command)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    /// The command line that would be spawned.
    pub fn dry_run(&mut self, invocation: &Invocation) -> io::Result<()> {
        writeln!(self.out, "{}", invocation)?;
        self.out.flush()
    }

    fn error(&mut self, error: &DispatchError) -> io::Result<()> {
        write_styled(&mut self.err, &scheme::fail(), "error")?;
        writeln!(self.err, ": {}", error)?;
        self.err.flush()
    }
}

fn write_styled(w: &mut impl WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    w.set_color(spec)?;
    write!(w, "{}", text)?;
    w.reset()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
