// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod middleware;
pub mod registry;

pub use middleware::metrics_middleware;
pub use registry::{
    MetricsError, gather_metric_families, gather_metrics, init, record_decode,
};
