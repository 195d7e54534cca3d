// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod concurrency;
pub mod status;

pub use concurrency::run_with_concurrency_collect;
pub use status::{object_error_to_status, rpc_error_to_status};
