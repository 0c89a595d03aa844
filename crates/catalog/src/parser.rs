// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog file parsing

use crate::catalog::Catalog;
use indexmap::IndexMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use td_core::CommandSpec;
use thiserror::Error;

/// Errors from loading a catalog: the file is unreadable, unparsable, or
/// does not have the expected shape.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported catalog file '{0}' (expected .yaml, .yml, .toml, .json or .hcl)")]
    UnknownFormat(String),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),
    #[error("invalid catalog at {location}: {message}")]
    InvalidFormat { location: String, message: String },
    #[error("command '{name}' is defined in both '{first}' and '{second}'")]
    DuplicateName { name: String, first: String, second: String },
}

/// Catalog file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
    Json,
    Hcl,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            "hcl" => Some(Format::Hcl),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Raw shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    commands: RawCategories,
    #[serde(default)]
    cache: Option<RawCache>,
}

/// `commands` is either a list of single-key maps (`- Test: [...]`) or a
/// plain map of category to commands.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCategories {
    List(Vec<CategoryMap>),
    Map(CategoryMap),
}

/// Category to commands, in document order. Repeated keys are kept as
/// separate entries instead of the last one winning.
#[derive(Debug, Default)]
struct CategoryMap(Vec<(String, Vec<RawCommand>)>);

impl<'de> Deserialize<'de> for CategoryMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryMapVisitor;

        impl<'de> Visitor<'de> for CategoryMapVisitor {
            type Value = CategoryMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to command lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CategoryMap, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<RawCommand>>()? {
                    entries.push(entry);
                }
                Ok(CategoryMap(entries))
            }
        }

        deserializer.deserialize_map(CategoryMapVisitor)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCommand {
    name: String,
    command: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCache {
    #[serde(default)]
    clean: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HclCommand {
    run: String,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse a TOML catalog.
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    parse_catalog_with_format(content, Format::Toml)
}

/// Parse catalog text in the given format and validate it.
pub fn parse_catalog_with_format(content: &str, format: Format) -> Result<Catalog, CatalogError> {
    match format {
        Format::Yaml => from_raw(serde_yaml::from_str(content)?),
        Format::Toml => from_raw(toml::from_str(content)?),
        Format::Json => from_raw(serde_json::from_str(content)?),
        Format::Hcl => from_hcl(&hcl::parse(content)?),
    }
}

/// Read a catalog file, choosing the format from its extension.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let format = Format::from_path(path)
        .ok_or_else(|| CatalogError::UnknownFormat(path.display().to_string()))?;
    let content = std::fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    let catalog = parse_catalog_with_format(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        categories = catalog.categories().count(),
        commands = catalog.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn from_raw(raw: RawCatalog) -> Result<Catalog, CatalogError> {
    let groups = match raw.commands {
        RawCategories::List(list) => list,
        RawCategories::Map(map) => vec![map],
    };

    // A repeated category accumulates its commands, so a name declared
    // twice still reaches the duplicate check.
    let mut categories: IndexMap<String, Vec<CommandSpec>> = IndexMap::new();
    for group in groups {
        for (category, commands) in group.0 {
            let specs = categories.entry(category.clone()).or_default();
            specs.extend(
                commands
                    .into_iter()
                    .map(|c| CommandSpec::new(category.clone(), c.name, c.command)),
            );
        }
    }

    Catalog::new(categories, raw.cache.unwrap_or_default().clean)
}

/// Walk HCL blocks in order:
///
/// ```hcl
/// category "Test" {
///   command "unit" { run = "cargo test" }
/// }
/// ```
///
/// Repeated `category` blocks accumulate; a repeated `command` label reaches
/// the duplicate check.
fn from_hcl(body: &hcl::Body) -> Result<Catalog, CatalogError> {
    reject_attributes(body, "catalog")?;

    let mut categories: IndexMap<String, Vec<CommandSpec>> = IndexMap::new();
    let mut cache: Option<RawCache> = None;
    for block in body.blocks() {
        match block.identifier() {
            "category" => {
                let category = single_label(block, "category")?;
                let location = format!("category.{category}");
                reject_attributes(block.body(), &location)?;
                let specs = categories.entry(category.clone()).or_default();
                for command in block.body().blocks() {
                    if command.identifier() != "command" {
                        return Err(unexpected_block(command, &location));
                    }
                    let name = single_label(command, &location)?;
                    let HclCommand { run } = hcl::from_body(command.body().clone())?;
                    specs.push(CommandSpec::new(category.clone(), name, run));
                }
            }
            "cache" if cache.is_none() => {
                cache = Some(hcl::from_body(block.body().clone())?);
            }
            "cache" => {
                return Err(CatalogError::InvalidFormat {
                    location: "cache".to_string(),
                    message: "cache block declared more than once".to_string(),
                });
            }
            _ => return Err(unexpected_block(block, "catalog")),
        }
    }

    Catalog::new(categories, cache.unwrap_or_default().clean)
}

fn single_label(block: &hcl::Block, location: &str) -> Result<String, CatalogError> {
    match block.labels() {
        [label] => Ok(label.as_str().to_string()),
        labels => Err(CatalogError::InvalidFormat {
            location: location.to_string(),
            message: format!(
                "'{}' block needs exactly one label, found {}",
                block.identifier(),
                labels.len()
            ),
        }),
    }
}

fn reject_attributes(body: &hcl::Body, location: &str) -> Result<(), CatalogError> {
    match body.attributes().next() {
        Some(attr) => Err(CatalogError::InvalidFormat {
            location: location.to_string(),
            message: format!("unexpected attribute '{}'", attr.key()),
        }),
        None => Ok(()),
    }
}

fn unexpected_block(block: &hcl::Block, location: &str) -> CatalogError {
    CatalogError::InvalidFormat {
        location: location.to_string(),
        message: format!("unexpected block '{}'", block.identifier()),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
