// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `td list` — show the catalog and the selectable choices.

use std::path::Path;

use anyhow::Result;

use crate::output::{self, CatalogView, OutputFormat};

pub fn handle(catalog: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = super::open_catalog(catalog)?;
    if catalog.is_empty() && format == OutputFormat::Text {
        eprintln!("No commands defined");
    }
    output::format_or_json(format, &CatalogView::new(&catalog), || {
        print!("{}", output::catalog_listing(&catalog));
    })
}
