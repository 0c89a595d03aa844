// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out / fan-in execution of a request

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use td_core::{CommandSpec, ExecutionRequest, RawOutcome, ResultSet};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::config::{CleanPolicy, EngineConfig};
use crate::process::{clean_cache, run_command};

/// Runs execution requests.
///
/// Holds no per-run state; one engine can serve any number of runs.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Arc<EngineConfig>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    /// Run every requested command concurrently and wait for all of them.
    ///
    /// Individual failures are data: the returned set always holds exactly
    /// one result per requested command, sorted by name.
    pub async fn run(&self, request: ExecutionRequest) -> ResultSet {
        self.run_with_cancel(request, CancellationToken::new()).await
    }

    /// Like [`Engine::run`], but stops early when `cancel` fires.
    ///
    /// In-flight commands are killed and keep the output captured so far;
    /// commands that had not started are left out. The set is then marked
    /// cancelled.
    pub async fn run_with_cancel(
        &self,
        request: ExecutionRequest,
        cancel: CancellationToken,
    ) -> ResultSet {
        let ExecutionRequest { commands, clear_cache } = request;
        let total = commands.len();
        let start = Instant::now();
        tracing::info!(commands = total, clear_cache, "starting run");

        if clear_cache && total > 0 && self.config.clean_policy == CleanPolicy::OncePerRun {
            tokio::select! {
                _ = clean_cache(&self.config) => {}
                _ = cancel.cancelled() => {}
            }
        }
        let clean_each = clear_cache && self.config.clean_policy == CleanPolicy::PerCommand;

        let sink: Arc<Mutex<Vec<RawOutcome>>> = Arc::new(Mutex::new(Vec::with_capacity(total)));
        let limiter = self.config.max_parallel.map(|n| Arc::new(Semaphore::new(n.max(1))));

        let mut tasks: Vec<(CommandSpec, tokio::task::JoinHandle<()>)> = Vec::with_capacity(total);
        for spec in commands {
            let config = Arc::clone(&self.config);
            let sink = Arc::clone(&sink);
            let limiter = limiter.clone();
            let cancel = cancel.clone();
            let task_spec = spec.clone();

            let handle = tokio::spawn(async move {
                let _permit = match limiter {
                    Some(limiter) => tokio::select! {
                        permit = limiter.acquire_owned() => permit.ok(),
                        _ = cancel.cancelled() => return,
                    },
                    None => None,
                };
                if cancel.is_cancelled() {
                    return;
                }
                if clean_each {
                    tokio::select! {
                        _ = clean_cache(&config) => {}
                        _ = cancel.cancelled() => return,
                    }
                }
                if cancel.is_cancelled() {
                    return;
                }
                let outcome = run_command(&config, &task_spec, &cancel).await;
                sink.lock().push(outcome);
            });
            tasks.push((spec, handle));
        }

        for (spec, handle) in tasks {
            if let Err(e) = handle.await {
                tracing::error!(name = %spec.name, error = %e, "command task failed");
                sink.lock().push(RawOutcome::launch_failed(&spec, format!("task failed: {e}")));
            }
        }

        let outcomes = std::mem::take(&mut *sink.lock());
        let mut results = ResultSet::from_outcomes(outcomes);
        if cancel.is_cancelled() {
            results = results.into_cancelled();
        }

        tracing::info!(
            commands = total,
            completed = results.len(),
            cancelled = results.cancelled(),
            worst = ?results.worst_verdict(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "run finished"
        );
        results
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
