// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-engine: concurrent command execution
//!
//! [`Engine::run`] starts one task per requested command, each supervising a
//! shell child process, and returns once every child has exited. Outcomes are
//! collected into a single locked sink, classified, and sorted by name.

mod config;
mod engine;
mod process;

pub use config::{CleanPolicy, EngineConfig};
pub use engine::Engine;
pub use tokio_util::sync::CancellationToken;
