// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `td run` — execute a selection and report classified results.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use td_core::ResultSet;
use td_engine::{CancellationToken, CleanPolicy, Engine, EngineConfig};

use crate::exit_error::{ExitError, EXIT_RUN_FAILED};
use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command name or "<Category> All"
    pub selection: String,
    /// Run the cache-clean command before executing
    #[arg(long)]
    pub clear_cache: bool,
    /// Clean the cache before every command instead of once per run
    #[arg(long, requires = "clear_cache")]
    pub clean_each: bool,
    /// Maximum number of commands running at once (default: unbounded)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub jobs: Option<u32>,
    /// Print Errors, Warnings, Info, Debug and Raw output for every result
    #[arg(long)]
    pub detail: bool,
}

pub async fn handle(args: RunArgs, catalog: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = super::open_catalog(catalog)?;
    let request = td_catalog::request(&catalog, &args.selection, args.clear_cache)
        .map_err(ExitError::usage)?;

    let engine = Engine::new(engine_config(&args, catalog.cache_clean())?);
    let cancel = CancellationToken::new();
    let watcher = tokio::spawn(cancel_on_interrupt(cancel.clone()));
    let results = engine.run_with_cancel(request, cancel).await;
    watcher.abort();

    output::format_or_json(format, &results, || {
        print!("{}", output::results_table(&results));
        if args.detail {
            for result in &results {
                println!();
                print!("{}", output::result_detail(result));
            }
        }
        println!();
        println!("{}", output::summary_line(&results));
    })?;

    check_results(&results)
}

fn engine_config(args: &RunArgs, cache_clean: &str) -> Result<EngineConfig, ExitError> {
    let mut config = EngineConfig::default().cache_clean(cache_clean);
    if let Some(shell) = crate::env::shell() {
        if !crate::env::is_posix_shell(&shell) {
            return Err(ExitError::usage(format!(
                "TD_SHELL={shell} is not a POSIX shell; use sh, bash, dash, zsh or ksh"
            )));
        }
        config = config.shell(shell);
    }
    if args.clean_each {
        config = config.clean_policy(CleanPolicy::PerCommand);
    }
    Ok(match args.jobs.map(|n| n as usize).or_else(crate::env::max_parallel) {
        Some(n) => config.max_parallel(n),
        None => config,
    })
}

async fn cancel_on_interrupt(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("interrupt received, cancelling run");
        cancel.cancel();
    }
}

/// Map a finished run to the process exit status.
fn check_results(results: &ResultSet) -> Result<()> {
    if results.cancelled() {
        return Err(ExitError::new(EXIT_RUN_FAILED, "run cancelled").into());
    }
    let failed: Vec<&str> = results.iter().filter(|r| r.failed()).map(|r| r.name()).collect();
    if failed.is_empty() {
        return Ok(());
    }
    Err(ExitError::new(
        EXIT_RUN_FAILED,
        format!("{} of {} commands failed: {}", failed.len(), results.len(), failed.join(", ")),
    )
    .into())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
