// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for alias resolution.
//!
//! Uses `--dry-run` so nothing is spawned.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// RESOLUTION SPECS
// =============================================================================

/// > Each alias runs exactly its mapped command, split on whitespace.
#[test]
fn every_builtin_alias_resolves_to_its_command() {
    let temp = Project::empty();
    let expected = [
        ("all", "jest"),
        ("coverage", "jest --coverage"),
        ("watch", "jest --watch"),
        ("verbose", "jest --verbose"),
        ("auth", "jest tests/auth.test.js"),
        ("issues", "jest tests/issues.test.js"),
        ("comments", "jest tests/comments.test.js"),
        ("users", "jest tests/users.test.js"),
        ("stewards", "jest tests/stewards.test.js"),
        ("upload", "jest tests/upload.test.js"),
        ("health", "jest tests/health.test.js"),
    ];

    for (alias, command) in expected {
        temp.cmd()
            .args(["--dry-run", alias])
            .assert()
            .success()
            .stdout(format!("{command}\n"));
    }
}

/// > No argument behaves like `all`.
#[test]
fn no_alias_defaults_to_all() {
    let temp = Project::empty();
    let default = temp.cmd().arg("--dry-run").output().unwrap();
    let all = temp.cmd().args(["--dry-run", "all"]).output().unwrap();

    assert!(default.status.success());
    assert_eq!(default.stdout, all.stdout);
    assert_eq!(String::from_utf8_lossy(&default.stdout), "jest\n");
}

/// > Only the first positional argument is consulted.
#[test]
fn extra_positionals_are_ignored() {
    let temp = Project::empty();
    temp.cmd()
        .args(["--dry-run", "coverage", "auth"])
        .assert()
        .success()
        .stdout("jest --coverage\n");
}

// =============================================================================
// INVALID ALIAS SPECS
// =============================================================================

/// > Unknown alias: exit 1, list every valid alias, spawn nothing.
#[test]
fn unknown_alias_lists_valid_aliases() {
    let temp = Project::empty();
    let output = temp.cmd().arg("bogus").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for alias in BUILTIN_ALIASES {
        assert!(stdout.contains(alias), "listing is missing {alias}");
    }
    assert!(!stdout.contains("RUN:"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown test type: bogus"));
}

/// > Unknown alias never reaches the spawn step, even with a runnable table.
#[test]
fn unknown_alias_spawns_nothing() {
    let temp = Project::empty();
    temp.config("[[alias]]\nname = \"all\"\ncommand = \"sh touch.sh\"\n");
    temp.file("touch.sh", "touch spawned\n");

    temp.cmd().arg("bogus").assert().code(1);
    assert!(!temp.path().join("spawned").exists());
}

// =============================================================================
// LISTING SPECS
// =============================================================================

/// > --list prints the table and exits 0.
#[test]
fn list_prints_table() {
    let temp = Project::empty();
    temp.cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Available test types:"))
        .stdout(predicates::str::contains("jest tests/stewards.test.js"))
        .stdout(predicates::str::contains("RUN:").not());
}

/// > Dash-prefixed unknown aliases are still unknown aliases: exit 1 with the listing.
#[test]
fn dash_prefixed_unknown_alias_lists_valid_aliases() {
    let temp = Project::empty();

    for bogus in ["-x", "--bogus"] {
        let output = temp.cmd().arg(bogus).output().unwrap();

        assert_eq!(output.status.code(), Some(1), "{bogus} should exit 1");
        let stdout = String::from_utf8_lossy(&output.stdout);
        for alias in BUILTIN_ALIASES {
            assert!(stdout.contains(alias), "listing for {bogus} is missing {alias}");
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(&format!("unknown test type: {bogus}")));
    }
}

/// > Malformed options after a valid alias fail with exit 1, not clap's 2.
#[test]
fn usage_error_exits_one() {
    let temp = Project::empty();
    temp.cmd()
        .args(["--dry-run", "auth", "--no-such-flag"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--no-such-flag"));
}
