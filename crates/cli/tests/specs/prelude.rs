// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// The catalog used by most specs: a lint that reports errors, a unit test
/// run that only warns, and a build that passes.
pub const SAMPLE_CATALOG: &str = r#"commands:
  - Test:
      - name: lint
        command: "echo 'ERROR: unused import'; exit 1"
      - name: unit
        command: "echo '[WARNING] slow test'; echo '[INFO] 12 passed'"
  - Build:
      - name: compile
        command: "echo '[INFO] built'"
"#;

/// A throwaway project directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// A project with [`SAMPLE_CATALOG`] at `commands.yaml`.
    pub fn sample() -> Self {
        let project = Self::empty();
        project.file("commands.yaml", SAMPLE_CATALOG);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap_or_default()
    }

    /// `td` running inside this project.
    pub fn td(&self) -> CliBuilder {
        cli().dir(self.path())
    }
}

/// `td` with a clean environment and color disabled.
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), dir: None, envs: Vec::new() }
}

pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn dir(mut self, dir: &Path) -> Self {
        self.dir = Some(dir.to_path_buf());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// The configured process, for specs that need to signal it.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_td"));
        cmd.args(&self.args)
            .env("NO_COLOR", "1")
            .env_remove("COLOR")
            .env_remove("RUST_LOG")
            .env_remove("TD_CATALOG")
            .env_remove("TD_DEBUG")
            .env_remove("TD_MAX_PARALLEL")
            .env_remove("TD_SHELL");
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    fn output(self) -> RunAssert {
        let output = assert_cmd::Command::from_std(self.command()).output().unwrap();
        RunAssert { output }
    }

    /// Run and assert exit code 0.
    pub fn passes(self) -> RunAssert {
        self.output().code(0)
    }

    /// Run and assert a specific exit code.
    pub fn exits(self, code: i32) -> RunAssert {
        self.output().code(code)
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status.code(),
            self.stdout(),
            self.stderr()
        )
    }

    fn code(self, code: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(code), "unexpected exit code\n{}", self.describe());
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}
