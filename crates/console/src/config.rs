//! Process configuration from environment variables.
//!
//! Only the fetch retry policy and log output are configurable; navigation and
//! authorization read nothing from the environment.

use core::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use claimdesk_observability::LogFormat;

use crate::RetryPolicy;

pub const MAX_RETRIES_VAR: &str = "CLAIMDESK_FETCH_MAX_RETRIES";
pub const BASE_DELAY_VAR: &str = "CLAIMDESK_FETCH_BASE_DELAY_MS";
pub const MAX_DELAY_VAR: &str = "CLAIMDESK_FETCH_MAX_DELAY_MS";
pub const LOG_FORMAT_VAR: &str = "CLAIMDESK_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("CLAIMDESK_FETCH_MAX_DELAY_MS ({max_ms} ms) is below CLAIMDESK_FETCH_BASE_DELAY_MS ({base_ms} ms)")]
    DelayCapBelowBase { base_ms: u64, max_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleConfig {
    pub retry: RetryPolicy,
    pub log_format: LogFormat,
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RetryPolicy::default();

        let max_retries = parse_var(&lookup, MAX_RETRIES_VAR, defaults.max_retries)?;
        let base_ms = parse_var(&lookup, BASE_DELAY_VAR, defaults.base_delay.as_millis() as u64)?;
        let max_ms = parse_var(&lookup, MAX_DELAY_VAR, defaults.max_delay.as_millis() as u64)?;
        let log_format = parse_var(&lookup, LOG_FORMAT_VAR, LogFormat::default())?;

        if max_ms < base_ms {
            return Err(ConfigError::DelayCapBelowBase { base_ms, max_ms });
        }

        Ok(Self {
            retry: RetryPolicy {
                max_retries,
                base_delay: Duration::from_millis(base_ms),
                max_delay: Duration::from_millis(max_ms),
            },
            log_format,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}
