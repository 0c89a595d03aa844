//! `td list` specs

use crate::prelude::*;

#[test]
fn list_shows_categories_commands_and_choices() {
    Project::sample().td().args(&["list"]).passes().stdout_eq(
        "Test\n\
         \x20 lint  echo 'ERROR: unused import'; exit 1\n\
         \x20 unit  echo '[WARNING] slow test'; echo '[INFO] 12 passed'\n\
         \n\
         Build\n\
         \x20 compile  echo '[INFO] built'\n\
         \n\
         Selections\n\
         \x20 Test All\n\
         \x20 Build All\n\
         \x20 lint\n\
         \x20 unit\n\
         \x20 compile\n",
    );
}

#[test]
fn list_json_includes_cache_clean_default() {
    let run = Project::sample().td().args(&["list", "-o", "json"]).passes();
    let json = run.json();
    assert_eq!(json["categories"][0]["name"], "Test");
    assert_eq!(json["categories"][1]["commands"][0]["command"], "echo '[INFO] built'");
    assert_eq!(json["cache_clean"], "bazel clean && rm -rf _build");
    assert_eq!(json["choices"][1], "Build All");
}

#[test]
fn empty_catalog_lists_only_header() {
    let project = Project::empty();
    project.file("commands.json", r#"{"commands": {}}"#);
    project.td().args(&["list"]).passes().stdout_eq("Selections\n").stderr_has("No commands defined");
}
