//! `td run` selection specs
//!
//! Batches and single commands resolve against the catalog; results come
//! back sorted by name.

use crate::prelude::*;

#[test]
fn test_all_reports_each_command_sorted() {
    let project = Project::sample();
    project
        .td()
        .args(&["run", "Test All"])
        .exits(1)
        .stdout_eq(
            "STATUS      NAME  COMMAND                                              EXIT  ERRORS  WARNINGS\n\
             ⛔ errored  lint  echo 'ERROR: unused import'; exit 1                     1       1         0\n\
             ❌ warned   unit  echo '[WARNING] slow test'; echo '[INFO] 12 passed'     0       0         1\n\
             \n\
             2 commands: 0 passed, 1 warned, 1 errored\n",
        )
        .stderr_has("1 of 2 commands failed: lint");
}

#[test]
fn single_command_runs_alone() {
    Project::sample()
        .td()
        .args(&["run", "compile"])
        .passes()
        .stdout_has("✅ passed")
        .stdout_has("compile")
        .stdout_lacks("lint")
        .stdout_has("1 command: 1 passed, 0 warned, 0 errored");
}

#[test]
fn build_all_passes() {
    Project::sample().td().args(&["run", "Build All"]).passes().stdout_has("compile");
}

#[test]
fn detail_prints_sections() {
    Project::sample()
        .td()
        .args(&["run", "unit", "--detail"])
        .passes()
        .stdout_has("── unit (warned, exit 0,")
        .stdout_has("Warnings\n  [WARNING] slow test\n")
        .stdout_has("Info\n  [INFO] 12 passed\n")
        .stdout_has("Errors\n  (none)\n")
        .stdout_has("Raw output\n  [WARNING] slow test\n  [INFO] 12 passed\n");
}

#[test]
fn json_output_is_a_result_set() {
    let project = Project::sample();
    let run = project.td().args(&["run", "Test All", "-o", "json"]).exits(1);
    let json = run.json();
    assert_eq!(json["cancelled"], false);
    assert_eq!(json["results"][0]["name"], "lint");
    assert_eq!(json["results"][0]["verdict"], "errored");
    assert_eq!(json["results"][0]["exit_code"], 1);
    assert_eq!(json["results"][1]["name"], "unit");
    assert_eq!(json["results"][1]["warnings"][0], "[WARNING] slow test");
}

#[test]
fn commands_run_concurrently_and_capture_stderr() {
    let project = Project::empty();
    project.file(
        "commands.toml",
        r#"
[[commands.Test]]
name = "b"
command = "sleep 0.5; echo '[INFO] b done' >&2"

[[commands.Test]]
name = "a"
command = "sleep 0.5; echo '[INFO] a done'"
"#,
    );

    let started = std::time::Instant::now();
    let run = project.td().args(&["run", "Test All", "-o", "json"]).passes();
    assert!(started.elapsed() < std::time::Duration::from_millis(900), "commands ran serially");

    let json = run.json();
    assert_eq!(json["results"][0]["name"], "a");
    assert_eq!(json["results"][1]["infos"][0], "[INFO] b done");
}

#[test]
fn jobs_flag_limits_parallelism() {
    let project = Project::empty();
    project.file(
        "commands.json",
        r#"{"commands": {"Test": [
            {"name": "one", "command": "sleep 0.2"},
            {"name": "two", "command": "sleep 0.2"}
        ]}}"#,
    );

    let started = std::time::Instant::now();
    project.td().args(&["run", "Test All", "--jobs", "1"]).passes();
    assert!(started.elapsed() >= std::time::Duration::from_millis(400));
}

#[test]
fn clear_cache_runs_catalog_clean_command_once() {
    let project = Project::empty();
    project.file(
        "commands.yaml",
        r#"cache:
  clean: "echo cleaned >> cleans.log"
commands:
  - Test:
      - name: one
        command: "test -f cleans.log"
      - name: two
        command: "test -f cleans.log"
"#,
    );

    project.td().args(&["run", "Test All", "--clear-cache"]).passes();
    assert_eq!(project.read("cleans.log"), "cleaned\n");
}

#[test]
fn clean_each_cleans_before_every_command() {
    let project = Project::empty();
    project.file(
        "commands.yaml",
        r#"cache:
  clean: "echo cleaned >> cleans.log"
commands:
  - Test:
      - name: one
        command: "true"
      - name: two
        command: "true"
"#,
    );

    project.td().args(&["run", "Test All", "--clear-cache", "--clean-each"]).passes();
    assert_eq!(project.read("cleans.log").lines().count(), 2);
}

#[test]
fn without_clear_cache_nothing_is_cleaned() {
    let project = Project::empty();
    project.file(
        "commands.yaml",
        r#"cache:
  clean: "touch cleaned"
commands:
  - Test:
      - name: one
        command: "true"
"#,
    );

    project.td().args(&["run", "one"]).passes();
    assert!(!project.exists("cleaned"));
}

#[test]
fn catalog_flag_and_env_select_the_file() {
    let project = Project::empty();
    project.file(
        "ci/tasks.hcl",
        r#"
category "Test" {
  command "hello" {
    run = "echo '[INFO] hi'"
  }
}
"#,
    );

    project.td().args(&["run", "hello", "--catalog", "ci/tasks.hcl"]).passes().stdout_has("hello");
    project.td().env("TD_CATALOG", "ci/tasks.hcl").args(&["run", "hello"]).passes();
}
