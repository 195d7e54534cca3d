// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_item;

pub use get_item::{GetItemError, get_item};
