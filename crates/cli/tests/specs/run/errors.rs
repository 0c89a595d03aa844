//! `td run` error specs
//!
//! Configuration and selection problems exit 2 before anything runs;
//! command failures are reported as results and exit 1.

use crate::prelude::*;

const MARKER_CATALOG: &str = r#"commands:
  - Test:
      - name: touch
        command: "touch ran"
"#;

#[test]
fn unknown_selection_runs_nothing() {
    let project = Project::empty();
    project.file("commands.yaml", MARKER_CATALOG);

    project
        .td()
        .args(&["run", "doesnotexist"])
        .exits(2)
        .stderr_has("unknown selection 'doesnotexist'")
        .stdout_eq("");
    assert!(!project.exists("ran"));
}

#[test]
fn batch_for_undeclared_category_is_unknown() {
    let project = Project::empty();
    project.file("commands.yaml", MARKER_CATALOG);

    project.td().args(&["run", "Deploy All"]).exits(2).stderr_has("Deploy All");
    assert!(!project.exists("ran"));
}

#[test]
fn malformed_catalog_exits_two() {
    let project = Project::empty();
    project.file("commands.yaml", "commands:\n  - Test: [unclosed\n");

    project.td().args(&["run", "Test All"]).exits(2).stderr_has("commands.yaml");
}

#[test]
fn duplicate_names_exit_two() {
    let project = Project::empty();
    project.file(
        "commands.yaml",
        r#"commands:
  - Test:
      - name: same
        command: "true"
  - Build:
      - name: same
        command: "true"
"#,
    );

    project.td().args(&["list"]).exits(2).stderr_has("'same'");
}

#[test]
fn missing_catalog_exits_two() {
    Project::empty().td().args(&["run", "anything"]).exits(2).stderr_has("no command catalog found");
}

#[test]
fn missing_binary_reports_shell_exit_code() {
    let project = Project::empty();
    project.file(
        "commands.yaml",
        r#"commands:
  - Test:
      - name: ghost
        command: "definitely-not-a-real-binary-td"
"#,
    );

    let run = project.td().args(&["run", "ghost", "-o", "json"]).exits(1);
    assert_eq!(run.json()["results"][0]["exit_code"], 127);
}

#[test]
fn launch_failure_uses_sentinel_exit_code() {
    let project = Project::sample();

    let run = project
        .td()
        .env("TD_SHELL", "/nonexistent/shell")
        .args(&["run", "Test All", "-o", "json"])
        .exits(1);
    let json = run.json();
    assert_eq!(json["results"][0]["exit_code"], 999);
    assert_eq!(json["results"][1]["exit_code"], 999);
    assert!(json["results"][0]["launch_error"].is_string());
}

#[test]
fn non_posix_shell_exits_two_before_running() {
    let project = Project::empty();
    project.file("commands.yaml", MARKER_CATALOG);

    project
        .td()
        .env("TD_SHELL", "fish")
        .args(&["run", "touch"])
        .exits(2)
        .stderr_has("not a POSIX shell");
    assert!(!project.exists("ran"));
}

#[test]
fn debug_flag_logs_to_stderr() {
    Project::sample()
        .td()
        .env("TD_DEBUG", "1")
        .args(&["run", "compile"])
        .passes()
        .stderr_has("starting command");
}
