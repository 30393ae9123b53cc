// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! testrun library.
//!
//! Maps short aliases to jest invocations and runs them as a child process,
//! passing the child's exit code through.

pub mod alias;
pub mod cli;
pub mod cmd_run;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod report;


pub use alias::{AliasEntry, AliasTable, DEFAULT_ALIAS};
pub use config::Config;
pub use dispatch::{Dispatcher, Invocation, Outcome};
pub use error::DispatchError;
