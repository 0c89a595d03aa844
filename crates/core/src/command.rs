// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command definitions and execution requests

use serde::{Deserialize, Serialize};

/// Cache-clean command used when none is configured.
pub const DEFAULT_CACHE_CLEAN: &str = "bazel clean && rm -rf _build";

/// A named shell command loaded from the catalog.
///
/// `command` is opaque to td: it is handed to a shell as a script body, so it
/// may contain pipes, redirects and `&&` chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Category the command was declared under (e.g. "Test", "Build")
    pub category: String,
    /// Name, unique across the catalog
    pub name: String,
    /// Shell command line
    pub command: String,
}

impl CommandSpec {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self { category: category.into(), name: name.into(), command: command.into() }
    }
}

/// The resolved commands for one run plus the cache-clear flag.
///
/// Built per user-initiated run and consumed by value by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub commands: Vec<CommandSpec>,
    pub clear_cache: bool,
}

impl ExecutionRequest {
    pub fn new(commands: Vec<CommandSpec>) -> Self {
        Self { commands, clear_cache: false }
    }

    /// Request a cache clean before the commands run.
    pub fn clear_cache(mut self, clear_cache: bool) -> Self {
        self.clear_cache = clear_cache;
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
