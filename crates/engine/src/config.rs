// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration

use std::path::PathBuf;
use td_core::DEFAULT_CACHE_CLEAN;

/// When the cache-clean command runs for a request with `clear_cache` set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanPolicy {
    /// Once, before any command starts
    #[default]
    OncePerRun,
    /// In every command's task, right before that command
    PerCommand,
}

/// How the engine launches commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// POSIX shell invoked as `<shell> -c <script>`; the script opens with
    /// `exec 2>&1`
    pub shell: String,
    /// Shell command for the cache-clear step
    pub cache_clean: String,
    pub clean_policy: CleanPolicy,
    /// Cap on concurrently running commands; `None` runs all at once
    pub max_parallel: Option<usize>,
    /// Working directory for children; `None` inherits ours
    pub cwd: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shell: "bash".to_string(),
            cache_clean: DEFAULT_CACHE_CLEAN.to_string(),
            clean_policy: CleanPolicy::default(),
            max_parallel: None,
            cwd: None,
        }
    }
}

impl EngineConfig {
    td_core::setters! {
        into {
            shell: String,
            cache_clean: String,
        }
        set {
            clean_policy: CleanPolicy,
        }
        option {
            max_parallel: usize,
            cwd: PathBuf,
        }
    }
}
