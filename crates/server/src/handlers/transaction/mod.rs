// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transaction-related handlers.
//!
//! Transactions are only simulated here; the wallet signs and submits them.

mod dry_run;

pub use dry_run::{
    DRY_RUN_FAILED, DryRunError, DryRunFailure, DryRunRequest, DryRunResult, dry_run,
};
