// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw per-command outcomes produced by the engine

use crate::command::CommandSpec;
use serde::{Deserialize, Serialize};

/// Exit code recorded when the real one cannot be determined: the process
/// failed to start, was killed by a signal, or its task died.
///
/// Real exit statuses are 0..=255, so this never collides with one.
pub const UNKNOWN_EXIT_CODE: i32 = 999;

/// What happened when one command ran, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutcome {
    pub name: String,
    pub command: String,
    pub category: String,
    /// 0 on success, the process exit code on failure, or [`UNKNOWN_EXIT_CODE`]
    pub exit_code: i32,
    /// Interleaved stdout + stderr
    pub output: String,
    /// Wall-clock time from spawn to exit
    pub duration_ms: u64,
    /// Set when the process could not be started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_error: Option<String>,
}

impl RawOutcome {
    /// Outcome of a process that ran to completion (or was killed).
    ///
    /// A missing exit code maps to [`UNKNOWN_EXIT_CODE`].
    pub fn completed(
        spec: &CommandSpec,
        exit_code: Option<i32>,
        output: String,
        duration_ms: u64,
    ) -> Self {
        Self {
            name: spec.name.clone(),
            command: spec.command.clone(),
            category: spec.category.clone(),
            exit_code: exit_code.unwrap_or(UNKNOWN_EXIT_CODE),
            output,
            duration_ms,
            launch_error: None,
        }
    }

    /// Outcome of a process that never started.
    pub fn launch_failed(spec: &CommandSpec, error: impl std::fmt::Display) -> Self {
        Self {
            name: spec.name.clone(),
            command: spec.command.clone(),
            category: spec.category.clone(),
            exit_code: UNKNOWN_EXIT_CODE,
            output: String::new(),
            duration_ms: 0,
            launch_error: Some(error.to_string()),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

crate::builder! {
    pub struct RawOutcomeBuilder => RawOutcome {
        into {
            name: String = "unit",
            command: String = "true",
            category: String = "Test",
            output: String = "",
        }
        set {
            exit_code: i32 = 0,
            duration_ms: u64 = 0,
        }
        option {
            launch_error: String = None,
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
