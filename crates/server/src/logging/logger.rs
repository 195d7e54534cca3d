// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_rest_api_config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the active log file inside the write path.
pub const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to install the global subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
            write_to_file: config.write,
            write_path: &config.write_path,
            write_max_file_size: config.write_max_file_size,
            write_max_files: config.write_max_files,
        }
    }
}

/// Builds the filter for a configured level. `http` is `info` plus request
/// logs from the `http` target.
pub fn env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let filter_level = if level == "http" {
        "info,http=debug"
    } else {
        level
    };

    EnvFilter::try_new(filter_level).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize tracing with the specified configuration
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps up to `write_max_files` files, the current one included
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = env_filter(config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let file_writer = if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;

        let log_file_path = PathBuf::from(config.write_path).join(LOG_FILE_NAME);
        let rotated_files_count = config.write_max_files.saturating_sub(1);
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            rotated_files_count,
        )?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The writer flushes until the guard drops; keep it for the whole process
        std::mem::forget(guard);
        Some(non_blocking)
    } else {
        None
    };

    if config.json_format {
        let file_layer = file_writer.map(|writer| fmt::layer().json().with_writer(writer));
        registry
            .with(fmt::layer().json())
            .with(file_layer)
            .try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);

        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(writer)
        });

        registry.with(console_layer).with(file_layer).try_init()?;
    }

    Ok(())
}
