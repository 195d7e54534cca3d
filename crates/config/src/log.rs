// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log Level
    ///
    /// Env: AUCTION_LOG_LEVEL
    /// Valid values: trace, debug, http, info, warn, error
    /// Default: info
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: AUCTION_LOG_JSON
    /// Default: false
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: AUCTION_LOG_STRIP_ANSI
    /// Default: false
    pub strip_ansi: bool,

    /// Also write logs to rotating files
    ///
    /// Env: AUCTION_LOG_WRITE
    /// Default: false
    pub write: bool,

    /// Directory for log files
    ///
    /// Env: AUCTION_LOG_WRITE_PATH
    /// Default: ./logs
    pub write_path: String,

    /// Size in bytes at which the log file is rotated
    ///
    /// Env: AUCTION_LOG_WRITE_MAX_FILE_SIZE
    /// Default: 5242880
    pub write_max_file_size: u64,

    /// Number of log files to keep, current one included
    ///
    /// Env: AUCTION_LOG_WRITE_MAX_FILES
    /// Default: 5
    pub write_max_files: usize,
}

const VALID_LEVELS: [&str; 6] = ["trace", "debug", "http", "info", "warn", "error"];

fn default_level() -> String {
    "info".to_string()
}

fn default_write_path() -> String {
    "./logs".to_string()
}

fn default_write_max_file_size() -> u64 {
    5_242_880
}

fn default_write_max_files() -> usize {
    5
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.level,
                VALID_LEVELS.join(", ")
            )));
        }

        if self.write {
            if self.write_path.is_empty() {
                return Err(ConfigError::ValidateError(
                    "Log write path cannot be empty when file logging is enabled".to_string(),
                ));
            }
            if self.write_max_file_size == 0 {
                return Err(ConfigError::ValidateError(
                    "Log max file size must be greater than 0".to_string(),
                ));
            }
            if self.write_max_files == 0 {
                return Err(ConfigError::ValidateError(
                    "Log max files must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
            write: false,
            write_path: default_write_path(),
            write_max_file_size: default_write_max_file_size(),
            write_max_files: default_write_max_files(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
        assert!(!config.strip_ansi);
        assert!(!config.write);
        assert_eq!(config.write_path, "./logs");
        assert_eq!(config.write_max_file_size, 5_242_880);
        assert_eq!(config.write_max_files, 5);
    }

    #[test]
    fn test_validate_valid_levels() {
        for level in VALID_LEVELS {
            let config = LogConfig {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Level {} should be valid", level);
        }
    }

    #[test]
    fn test_validate_invalid_levels() {
        let config = LogConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_file_settings_only_when_writing() {
        let config = LogConfig {
            write_max_files: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = LogConfig {
            write: true,
            write_max_files: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = LogConfig {
            write: true,
            write_path: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
