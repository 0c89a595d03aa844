// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::command::CommandSpec;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for command output and result names.
pub mod strategies {
    use proptest::prelude::*;

    /// A single log line: one of the recognised prefixes or free text.
    pub fn arb_log_line() -> impl Strategy<Value = String> {
        let text = "[a-zA-Z0-9 :._-]{0,24}";
        prop_oneof![
            text.prop_map(|t| format!("[WARNING] {t}")),
            text.prop_map(|t| format!("[DEBUG] {t}")),
            text.prop_map(|t| format!("[INFO] {t}")),
            text.prop_map(|t| format!("ERROR: {t}")),
            text.prop_map(String::from),
        ]
    }

    /// Multi-line command output built from [`arb_log_line`].
    pub fn arb_output() -> impl Strategy<Value = String> {
        proptest::collection::vec(arb_log_line(), 0..16).prop_map(|lines| lines.join("\n"))
    }

    /// A command name (may repeat across draws).
    pub fn arb_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_-]{0,8}"
    }
}

// ── Command factories ───────────────────────────────────────────────────

pub fn test_command(name: &str, command: &str) -> CommandSpec {
    CommandSpec::new("Test", name, command)
}

pub fn build_command(name: &str, command: &str) -> CommandSpec {
    CommandSpec::new("Build", name, command)
}
