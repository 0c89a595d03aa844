// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use td_catalog::Catalog;
use td_core::{ClassifiedResult, ResultSet, Verdict};

use crate::color;
use crate::table::{Column, Table};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `data` as pretty JSON, or run `text_fn` for text output.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// Results table in set order: status, name, command, exit code, counts.
pub fn results_table(results: &ResultSet) -> String {
    let mut table = Table::new(vec![
        Column::left("STATUS"),
        Column::left("NAME"),
        Column::left("COMMAND").with_max(60),
        Column::right("EXIT"),
        Column::right("ERRORS"),
        Column::right("WARNINGS"),
    ]);
    for result in results {
        table.row(vec![
            color::verdict(result.verdict()),
            result.name().to_string(),
            result.command().to_string(),
            result.exit_code().to_string(),
            result.errors().len().to_string(),
            result.warnings().len().to_string(),
        ]);
    }
    table.to_text()
}

/// One-line tally, e.g. `3 commands: 1 passed, 1 warned, 1 errored`.
pub fn summary_line(results: &ResultSet) -> String {
    let count = |v: Verdict| results.iter().filter(|r| r.verdict() == v).count();
    let noun = if results.len() == 1 { "command" } else { "commands" };
    let mut line = format!(
        "{} {}: {} passed, {} warned, {} errored",
        results.len(),
        noun,
        count(Verdict::Passed),
        count(Verdict::Warned),
        count(Verdict::Errored),
    );
    if results.cancelled() {
        line.push_str(" (cancelled)");
    }
    line
}

/// Per-result drill-down: Errors, Warnings, Info, Debug and Raw output.
pub fn result_detail(result: &ClassifiedResult) -> String {
    let facts = format!(
        "({}, exit {}, {} ms)",
        result.verdict(),
        result.exit_code(),
        result.outcome.duration_ms
    );
    let mut text = format!(
        "{} {} {}\n",
        color::header("──"),
        color::literal(result.name()),
        color::muted(&facts)
    );
    text.push_str(&format!("{} {}\n", color::context("$"), color::context(result.command())));
    if let Some(error) = &result.outcome.launch_error {
        text.push_str(&format!("launch failed: {error}\n"));
    }

    let sections: [(&str, &[String]); 4] = [
        ("Errors", result.errors()),
        ("Warnings", result.warnings()),
        ("Info", result.infos()),
        ("Debug", result.debugs()),
    ];
    for (title, lines) in sections {
        push_section(&mut text, title, lines.iter().map(String::as_str));
    }
    push_section(&mut text, "Raw output", result.output().lines());
    text
}

fn push_section<'a>(text: &mut String, title: &str, lines: impl Iterator<Item = &'a str>) {
    text.push('\n');
    text.push_str(&color::header(title));
    text.push('\n');
    let mut any = false;
    for line in lines {
        text.push_str("  ");
        text.push_str(line);
        text.push('\n');
        any = true;
    }
    if !any {
        text.push_str(&format!("  {}\n", color::muted("(none)")));
    }
}

/// Catalog listing grouped by category, followed by the selectable choices.
pub fn catalog_listing(catalog: &Catalog) -> String {
    let mut text = String::new();
    for category in catalog.categories() {
        text.push_str(&color::header(category));
        text.push('\n');
        let mut table = Table::new(vec![Column::left("NAME"), Column::left("COMMAND").with_max(80)]);
        for spec in catalog.commands_by_category(category) {
            table.row(vec![spec.name.clone(), color::context(&spec.command)]);
        }
        for line in table.to_text().lines().skip(1) {
            text.push_str("  ");
            text.push_str(line);
            text.push('\n');
        }
        text.push('\n');
    }
    text.push_str(&color::header("Selections"));
    text.push('\n');
    for choice in td_catalog::choices(catalog) {
        text.push_str("  ");
        text.push_str(&choice);
        text.push('\n');
    }
    text
}

#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub categories: Vec<CategoryView<'a>>,
    pub choices: Vec<String>,
    pub cache_clean: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub commands: &'a [td_core::CommandSpec],
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            categories: catalog
                .categories()
                .map(|name| CategoryView { name, commands: catalog.commands_by_category(name) })
                .collect(),
            choices: td_catalog::choices(catalog),
            cache_clean: catalog.cache_clean(),
        }
    }
}
