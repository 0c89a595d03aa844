// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog file discovery

use std::path::{Path, PathBuf};

/// File names probed by [`find_catalog`], in priority order.
pub const CATALOG_FILE_NAMES: &[&str] =
    &["commands.yaml", "commands.yml", "commands.toml", "commands.json", "commands.hcl"];

/// Find the catalog file in `dir`.
pub fn find_catalog(dir: &Path) -> Option<PathBuf> {
    CATALOG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
