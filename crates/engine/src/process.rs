// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process supervision for a single command

use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use td_core::{CommandSpec, RawOutcome};
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;

use crate::config::EngineConfig;

/// Build `<shell> -c <script>` for a command line.
///
/// The script starts with `exec 2>&1` so stderr shares stdout's pipe and the
/// two streams keep the order the process wrote them in.
pub(crate) fn shell_command(config: &EngineConfig, command_line: &str) -> Command {
    let script = format!("exec 2>&1\n{command_line}");
    let mut cmd = Command::new(&config.shell);
    cmd.arg("-c")
        .arg(script)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    if let Some(cwd) = &config.cwd {
        cmd.current_dir(cwd);
    }
    // Own process group so cancellation reaches grandchildren too.
    #[cfg(unix)]
    cmd.process_group(0);
    cmd
}

/// Run one command to completion and record what happened.
///
/// Never fails: launch errors and lost exit codes are recorded in the
/// outcome with the sentinel exit code. When `cancel` fires, the process
/// group is killed and whatever output was captured is kept.
pub(crate) async fn run_command(
    config: &EngineConfig,
    spec: &CommandSpec,
    cancel: &CancellationToken,
) -> RawOutcome {
    let start = Instant::now();
    tracing::debug!(name = %spec.name, command = %spec.command, "starting command");

    let mut child = match shell_command(config, &spec.command).spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!(name = %spec.name, shell = %config.shell, error = %e, "failed to launch command");
            return RawOutcome::launch_failed(spec, e);
        }
    };
    let pid = child.id();

    let mut buf = Vec::new();
    let status = {
        let exchange = collect(&mut child, &mut buf);
        tokio::pin!(exchange);
        tokio::select! {
            status = &mut exchange => status,
            _ = cancel.cancelled() => {
                tracing::info!(name = %spec.name, "cancelling command");
                terminate(pid);
                exchange.await
            }
        }
    };

    let exit_code = match status {
        Ok(status) => status.code(),
        Err(e) => {
            tracing::warn!(name = %spec.name, error = %e, "failed to wait for command");
            None
        }
    };
    let duration_ms = start.elapsed().as_millis() as u64;
    let output = String::from_utf8_lossy(&buf).into_owned();
    tracing::debug!(name = %spec.name, ?exit_code, duration_ms, bytes = buf.len(), "command exited");

    RawOutcome::completed(spec, exit_code, output, duration_ms)
}

/// Drain the child's output while waiting for it to exit.
async fn collect(child: &mut Child, buf: &mut Vec<u8>) -> io::Result<ExitStatus> {
    let stdout = child.stdout.take();
    let read = async move {
        match stdout {
            Some(mut stdout) => stdout.read_to_end(buf).await.map(|_| ()),
            None => Ok(()),
        }
    };
    let (read, status) = tokio::join!(read, child.wait());
    if let Err(e) = read {
        tracing::warn!(error = %e, "failed reading command output");
    }
    status
}

/// Kill the process group led by `pid`.
#[cfg(unix)]
fn terminate(pid: Option<u32>) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Some(pid) = pid.and_then(|p| i32::try_from(p).ok()) else {
        return;
    };
    if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
        tracing::debug!(pid, error = %e, "failed to kill process group");
    }
}

#[cfg(not(unix))]
fn terminate(_pid: Option<u32>) {}

/// Run the cache-clean command, ignoring every failure.
pub(crate) async fn clean_cache(config: &EngineConfig) {
    tracing::debug!(command = %config.cache_clean, "clearing cache");
    let mut cmd = Command::new(&config.shell);
    cmd.arg("-c")
        .arg(&config.cache_clean)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    if let Some(cwd) = &config.cwd {
        cmd.current_dir(cwd);
    }
    match cmd.status().await {
        Ok(status) if status.success() => tracing::debug!("cache cleared"),
        Ok(status) => {
            tracing::warn!(exit_code = ?status.code(), "cache clean failed, continuing")
        }
        Err(e) => tracing::warn!(error = %e, "cache clean could not start, continuing"),
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
