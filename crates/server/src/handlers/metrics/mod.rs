// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_metrics;

pub use get_metrics::{get_metrics, get_metrics_json};
