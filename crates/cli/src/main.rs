// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td: run catalogued build and test commands concurrently and report
//! classified results.

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod table;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::exit_error::{ExitError, EXIT_RUN_FAILED};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "td", version, about = "Run catalogued commands concurrently and classify their output")]
#[command(styles = color::styles())]
struct Cli {
    /// Catalog file (default: $TD_CATALOG, then commands.{yaml,yml,toml,json,hcl})
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a command or a "<Category> All" batch
    Run(commands::run::RunArgs),
    /// List categories, commands and selections
    List,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if env::debug_enabled() { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let catalog = cli.catalog.as_deref();
    match cli.command {
        Command::Run(args) => commands::run::handle(args, catalog, cli.output).await,
        Command::List => commands::list::handle(catalog, cli.output),
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("error: {e:#}");
                EXIT_RUN_FAILED
            }
        };
        std::process::exit(code);
    }
}
