// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-core: data model, output classification and result aggregation for
//! the taskdeck (td) command runner.

pub mod macros;

pub mod classify;
pub mod command;
pub mod outcome;
pub mod result;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use classify::{classify, Classification, Verdict};
pub use command::{CommandSpec, ExecutionRequest, DEFAULT_CACHE_CLEAN};
#[cfg(any(test, feature = "test-support"))]
pub use outcome::RawOutcomeBuilder;
pub use outcome::{RawOutcome, UNKNOWN_EXIT_CODE};
pub use result::{ClassifiedResult, ResultSet};
