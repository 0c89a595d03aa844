// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-catalog: command catalog loading and selection resolution
//!
//! A catalog declares named shell commands grouped by category:
//!
//! ```yaml
//! commands:
//!   - Test:
//!       - name: unit
//!         command: cargo test
//!   - Build:
//!       - name: release
//!         command: cargo build --release
//! ```
//!
//! TOML, JSON and HCL renditions of the same shape are accepted; see
//! [`Format`].

mod catalog;
mod find;
mod parser;
mod selection;

pub use catalog::Catalog;
pub use find::{find_catalog, CATALOG_FILE_NAMES};
pub use parser::{load_catalog, parse_catalog, parse_catalog_with_format, CatalogError, Format};
pub use selection::{choices, request, resolve, ResolveError, Selection};
pub use td_core::DEFAULT_CACHE_CLEAN;
