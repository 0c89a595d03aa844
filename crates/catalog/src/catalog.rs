// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loaded command catalog

use crate::parser::CatalogError;
use crate::selection::BATCH_SUFFIX;
use indexmap::IndexMap;
use std::collections::HashMap;
use td_core::{CommandSpec, DEFAULT_CACHE_CLEAN};

/// Named commands grouped by category, in declaration order.
///
/// Command names are unique across the whole catalog, which makes
/// [`Catalog::find_by_name`] unambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: IndexMap<String, Vec<CommandSpec>>,
    cache_clean: Option<String>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate names and names that a
    /// `"<Category> All"` selection would shadow.
    pub fn new(
        categories: IndexMap<String, Vec<CommandSpec>>,
        cache_clean: Option<String>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (category, commands) in &categories {
            if category.trim().is_empty() {
                return Err(CatalogError::InvalidFormat {
                    location: "commands".to_string(),
                    message: "category name must not be empty".to_string(),
                });
            }
            for (index, spec) in commands.iter().enumerate() {
                let location = format!("commands.{category}[{index}]");
                if spec.name.trim().is_empty() {
                    return Err(CatalogError::InvalidFormat {
                        location,
                        message: "command name must not be empty".to_string(),
                    });
                }
                if spec.command.trim().is_empty() {
                    return Err(CatalogError::InvalidFormat {
                        location,
                        message: format!("command '{}' has an empty command line", spec.name),
                    });
                }
                if let Some(shadowed) = spec.name.strip_suffix(BATCH_SUFFIX) {
                    if categories.contains_key(shadowed) {
                        return Err(CatalogError::InvalidFormat {
                            location,
                            message: format!(
                                "command name '{}' collides with the '{}' batch selection",
                                spec.name, shadowed
                            ),
                        });
                    }
                }
                if let Some(first) = seen.insert(&spec.name, category) {
                    return Err(CatalogError::DuplicateName {
                        name: spec.name.clone(),
                        first: first.to_string(),
                        second: category.clone(),
                    });
                }
            }
        }

        let cache_clean = cache_clean.filter(|c| !c.trim().is_empty());
        Ok(Self { categories, cache_clean })
    }

    /// Commands under `category`, empty when the category is absent.
    pub fn commands_by_category(&self, category: &str) -> &[CommandSpec] {
        self.categories.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every command, categories concatenated in declaration order.
    pub fn all_commands(&self) -> impl Iterator<Item = &CommandSpec> + '_ {
        self.categories.values().flatten()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CommandSpec> {
        self.all_commands().find(|spec| spec.name == name)
    }

    /// Category names in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Shell command for the cache-clear step.
    pub fn cache_clean(&self) -> &str {
        self.cache_clean.as_deref().unwrap_or(DEFAULT_CACHE_CLEAN)
    }

    /// Total number of commands.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
