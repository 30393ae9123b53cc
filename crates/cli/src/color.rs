// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color mode resolution and the banner color scheme.

use std::io::IsTerminal;

pub use termcolor::ColorChoice;

/// Value of `--color`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve a mode into a termcolor choice.
///
/// `no_color` (from `--no-color` or `NO_COLOR`) beats everything, and
/// `auto` only colors a terminal.
pub fn resolve_color(mode: ColorMode, no_color: bool, is_terminal: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_terminal => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Color choice for this process's stdout.
pub fn stdout_choice(mode: ColorMode, no_color_flag: bool) -> ColorChoice {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    resolve_color(mode, no_color_flag || no_color_env, std::io::stdout().is_terminal())
}

/// Color specs used by the banners.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// `RUN:` label.
    pub fn run() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// `PASS:` label.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// `FAIL:` label and error prefixes.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn alias() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn command() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
