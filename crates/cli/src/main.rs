// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use testrun::cli::Cli;
use testrun::cmd_run;
use testrun::dispatch::FAILURE_EXIT_CODE;

fn init_logging() {
    let filter = EnvFilter::try_from_env("TESTRUN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // clap's own exit code is 2; usage errors share the failure code.
            let _ = err.print();
            std::process::exit(FAILURE_EXIT_CODE);
        }
    };

    let code = match cmd_run::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("testrun: {:#}", err);
            FAILURE_EXIT_CODE
        }
    };
    std::process::exit(code);
}
