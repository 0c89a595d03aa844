// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::{Path, PathBuf};

/// Catalog file override (`TD_CATALOG`).
pub fn catalog_path() -> Option<PathBuf> {
    std::env::var("TD_CATALOG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Verbose diagnostic logging (`TD_DEBUG=1` or `TD_DEBUG=true`).
pub fn debug_enabled() -> bool {
    std::env::var("TD_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Cap on concurrently running commands (`TD_MAX_PARALLEL`, must be > 0).
pub fn max_parallel() -> Option<usize> {
    std::env::var("TD_MAX_PARALLEL").ok().and_then(|s| s.parse::<usize>().ok()).filter(|n| *n > 0)
}

/// Shell used to run commands (`TD_SHELL`, default bash).
///
/// Must be a POSIX shell: every command runs as `<shell> -c` behind an
/// `exec 2>&1` line. See [`is_posix_shell`].
pub fn shell() -> Option<String> {
    std::env::var("TD_SHELL").ok().filter(|s| !s.is_empty())
}

/// Shells known to reject `exec 2>&1`.
const NON_POSIX_SHELLS: &[&str] =
    &["fish", "nu", "pwsh", "powershell", "cmd", "csh", "tcsh", "elvish", "xonsh"];

/// False for shells known not to speak POSIX `sh` syntax, by file name.
pub fn is_posix_shell(shell: &str) -> bool {
    let name = Path::new(shell).file_name().and_then(|n| n.to_str()).unwrap_or(shell);
    let name = name.strip_suffix(".exe").unwrap_or(name);
    !NON_POSIX_SHELLS.contains(&name)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
