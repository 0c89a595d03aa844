// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod list;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::Result;
use td_catalog::{find_catalog, load_catalog, Catalog, CATALOG_FILE_NAMES};

use crate::exit_error::ExitError;

/// Locate the catalog: `--catalog` flag, then `TD_CATALOG`, then a
/// well-known file name in the working directory.
pub fn catalog_path(flag: Option<&Path>, cwd: &Path) -> Result<PathBuf, ExitError> {
    if let Some(path) = flag.map(Path::to_path_buf).or_else(crate::env::catalog_path) {
        return Ok(path);
    }
    find_catalog(cwd).ok_or_else(|| {
        ExitError::usage(format!(
            "no command catalog found in {} (looked for {})",
            cwd.display(),
            CATALOG_FILE_NAMES.join(", ")
        ))
    })
}

/// Resolve and load the catalog, mapping failures to a usage exit.
pub fn open_catalog(flag: Option<&Path>) -> Result<Catalog> {
    let cwd = std::env::current_dir()?;
    let path = catalog_path(flag, &cwd)?;
    let catalog = load_catalog(&path)
        .map_err(|e| ExitError::usage(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), commands = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
