//! CLI help output specs

use crate::prelude::*;

#[test]
fn td_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("run").stdout_has("list");
}

#[test]
fn td_run_help_shows_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--clear-cache")
        .stdout_has("--jobs")
        .stdout_has("--detail");
}

#[test]
fn td_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn td_run_requires_selection() {
    cli().args(&["run"]).exits(2).stderr_has("<SELECTION>");
}
