// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selection resolution
//!
//! A selection is either a batch, `"<Category> All"`, or a literal command
//! name. Batch selections take priority over names.

use crate::catalog::Catalog;
use std::fmt;
use td_core::{CommandSpec, ExecutionRequest};
use thiserror::Error;

/// Suffix marking a category batch selection.
pub(crate) const BATCH_SUFFIX: &str = " All";

/// Errors from resolving a selection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown selection '{0}': no such command or category")]
    UnknownSelection(String),
}

/// What the user chose to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every command in a category
    Category(String),
    /// A single command by name
    Command(String),
}

impl Selection {
    /// Interpret `input` against the catalog.
    ///
    /// `"<Category> All"` is a batch only when the category is declared;
    /// anything else is treated as a command name.
    pub fn parse(catalog: &Catalog, input: &str) -> Self {
        match input.strip_suffix(BATCH_SUFFIX) {
            Some(category) if catalog.has_category(category) => {
                Selection::Category(category.to_string())
            }
            _ => Selection::Command(input.to_string()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Category(category) => write!(f, "{category}{BATCH_SUFFIX}"),
            Selection::Command(name) => f.write_str(name),
        }
    }
}

/// Resolve a selection to the commands to execute, in catalog order.
pub fn resolve(catalog: &Catalog, input: &str) -> Result<Vec<CommandSpec>, ResolveError> {
    let commands = match Selection::parse(catalog, input) {
        Selection::Category(category) => catalog.commands_by_category(&category).to_vec(),
        Selection::Command(name) => match catalog.find_by_name(&name) {
            Some(spec) => vec![spec.clone()],
            None => return Err(ResolveError::UnknownSelection(input.to_string())),
        },
    };
    tracing::debug!(selection = input, commands = commands.len(), "resolved selection");
    Ok(commands)
}

/// Resolve a selection into an execution request.
pub fn request(
    catalog: &Catalog,
    input: &str,
    clear_cache: bool,
) -> Result<ExecutionRequest, ResolveError> {
    Ok(ExecutionRequest::new(resolve(catalog, input)?).clear_cache(clear_cache))
}

/// Every selectable string: category batches first, then command names.
pub fn choices(catalog: &Catalog) -> Vec<String> {
    catalog
        .categories()
        .map(|category| Selection::Category(category.to_string()).to_string())
        .chain(catalog.all_commands().map(|spec| spec.name.clone()))
        .collect()
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
