// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log-line classification
//!
//! Command output is scanned line by line. Lines are bucketed by prefix:
//!
//! - `[WARNING]` → warnings
//! - `[DEBUG]` → debugs
//! - `[INFO]` → infos
//! - `ERROR: <text>` → errors (matched independently of the prefix buckets)
//!
//! The verdict is derived from the buckets, most severe first: any error
//! makes the command `Errored`, otherwise any warning makes it `Warned`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const WARNING_PREFIX: &str = "[WARNING]";
const DEBUG_PREFIX: &str = "[DEBUG]";
const INFO_PREFIX: &str = "[INFO]";

/// Lines reported as errors: `ERROR: ` followed by anything.
#[allow(clippy::expect_used)]
static ERROR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ERROR: .*$").expect("constant regex pattern is valid"));

/// Pass/warn/error classification of one command's run.
///
/// Ordered by severity so the worst of several verdicts is their `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Warned,
    Errored,
}

crate::simple_display! {
    Verdict {
        Passed => "passed",
        Warned => "warned",
        Errored => "errored",
    }
}

impl Verdict {
    /// Most severe wins: errors, then warnings, then passed.
    pub fn from_counts(errors: usize, warnings: usize) -> Self {
        if errors > 0 {
            Verdict::Errored
        } else if warnings > 0 {
            Verdict::Warned
        } else {
            Verdict::Passed
        }
    }

    /// Status marker shown in result tables.
    pub fn symbol(&self) -> &'static str {
        match self {
            Verdict::Passed => "\u{2705}",
            Verdict::Warned => "\u{274C}",
            Verdict::Errored => "\u{26D4}",
        }
    }
}

/// Severity buckets and verdict extracted from a command's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: Verdict,
    pub warnings: Vec<String>,
    pub debugs: Vec<String>,
    pub infos: Vec<String>,
    pub errors: Vec<String>,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            verdict: Verdict::Passed,
            warnings: Vec::new(),
            debugs: Vec::new(),
            infos: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Classify combined command output.
///
/// Pure and deterministic: identical input always yields identical buckets
/// in input order.
pub fn classify(output: &str) -> Classification {
    let mut classification = Classification::default();

    for line in output.lines() {
        if line.starts_with(WARNING_PREFIX) {
            classification.warnings.push(line.to_string());
        } else if line.starts_with(DEBUG_PREFIX) {
            classification.debugs.push(line.to_string());
        } else if line.starts_with(INFO_PREFIX) {
            classification.infos.push(line.to_string());
        }

        if ERROR_LINE.is_match(line) {
            classification.errors.push(line.to_string());
        }
    }

    classification.verdict =
        Verdict::from_counts(classification.errors.len(), classification.warnings.len());
    classification
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
