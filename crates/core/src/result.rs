// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classified results and the sorted result set handed to callers

use crate::classify::{classify, Classification, Verdict};
use crate::outcome::RawOutcome;
use serde::{Deserialize, Serialize};

/// A raw outcome paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedResult {
    #[serde(flatten)]
    pub outcome: RawOutcome,
    #[serde(flatten)]
    pub classification: Classification,
}

impl ClassifiedResult {
    pub fn new(outcome: RawOutcome, classification: Classification) -> Self {
        Self { outcome, classification }
    }

    /// Classify the outcome's output and pair the two.
    pub fn from_outcome(outcome: RawOutcome) -> Self {
        let classification = classify(&outcome.output);
        Self { outcome, classification }
    }

    pub fn name(&self) -> &str {
        &self.outcome.name
    }

    pub fn command(&self) -> &str {
        &self.outcome.command
    }

    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code
    }

    pub fn output(&self) -> &str {
        &self.outcome.output
    }

    pub fn verdict(&self) -> Verdict {
        self.classification.verdict
    }

    pub fn warnings(&self) -> &[String] {
        &self.classification.warnings
    }

    pub fn debugs(&self) -> &[String] {
        &self.classification.debugs
    }

    pub fn infos(&self) -> &[String] {
        &self.classification.infos
    }

    pub fn errors(&self) -> &[String] {
        &self.classification.errors
    }

    /// True when the process exited non-zero or its output contained errors.
    pub fn failed(&self) -> bool {
        !self.outcome.success() || self.verdict() == Verdict::Errored
    }
}

/// All results of one run, sorted by name.
///
/// Completion order is never observable: the set is sorted (stable,
/// byte-wise) on construction and is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    results: Vec<ClassifiedResult>,
    #[serde(default)]
    cancelled: bool,
}

impl ResultSet {
    /// Merge outcomes with their classifications and sort by name.
    pub fn aggregate(pairs: impl IntoIterator<Item = (RawOutcome, Classification)>) -> Self {
        Self::sorted(pairs.into_iter().map(|(o, c)| ClassifiedResult::new(o, c)).collect())
    }

    /// Classify each outcome, then aggregate.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = RawOutcome>) -> Self {
        Self::sorted(outcomes.into_iter().map(ClassifiedResult::from_outcome).collect())
    }

    fn sorted(mut results: Vec<ClassifiedResult>) -> Self {
        results.sort_by(|a, b| a.name().cmp(b.name()));
        Self { results, cancelled: false }
    }

    /// Tag the set as the partial result of a cancelled run.
    pub fn into_cancelled(mut self) -> Self {
        self.cancelled = true;
        self
    }

    pub fn cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn results(&self) -> &[ClassifiedResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedResult> {
        self.results.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ClassifiedResult> {
        self.results.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&ClassifiedResult> {
        self.results.iter().find(|r| r.name() == name)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Most severe verdict across the set (`None` when empty).
    pub fn worst_verdict(&self) -> Option<Verdict> {
        self.results.iter().map(ClassifiedResult::verdict).max()
    }

    /// True when nothing failed and the run was not cancelled.
    pub fn succeeded(&self) -> bool {
        !self.cancelled && self.results.iter().all(|r| !r.failed())
    }
}

impl IntoIterator for ResultSet {
    type Item = ClassifiedResult;
    type IntoIter = std::vec::IntoIter<ClassifiedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ClassifiedResult;
    type IntoIter = std::slice::Iter<'a, ClassifiedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
