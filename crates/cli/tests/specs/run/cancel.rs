//! `td run` interrupt specs

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::prelude::*;

#[test]
fn interrupt_cancels_and_prints_partial_results() {
    let project = Project::empty();
    project.file(
        "commands.yaml",
        r#"commands:
  - Test:
      - name: quick
        command: "echo '[INFO] quick done'"
      - name: slow
        command: "echo '[INFO] slow started'; sleep 30"
"#,
    );

    let mut cmd = project.td().args(&["run", "Test All", "-o", "json"]).command();
    let child = cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).spawn().unwrap();
    std::thread::sleep(Duration::from_millis(1000));

    let started = Instant::now();
    let status = Command::new("kill").args(["-INT", &child.id().to_string()]).status().unwrap();
    assert!(status.success());
    let output = child.wait_with_output().unwrap();
    assert!(started.elapsed() < Duration::from_secs(10), "run was not cancelled");

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cancelled"], true);
    assert_eq!(json["results"][0]["name"], "quick");
    assert_eq!(json["results"][1]["name"], "slow");
    assert_eq!(json["results"][1]["infos"][0], "[INFO] slow started");
    assert_ne!(json["results"][1]["exit_code"], 0);
}
