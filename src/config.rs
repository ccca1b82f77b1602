//! Dashboard and host configuration.
//!
//! The browser bundle cannot read environment variables at runtime, so the
//! API base URL and environment label are baked in at compile time from
//! `LEAD_DASHBOARD_API_URL` / `LEAD_DASHBOARD_ENV`. The SSR host reads its
//! bind address from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Client-side settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub environment: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl DashboardConfig {
    /// Settings captured at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LEAD_DASHBOARD_API_URL"), option_env!("LEAD_DASHBOARD_ENV"))
    }

    fn from_values(api_base_url: Option<&str>, environment: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let environment = environment
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .to_owned();
        Self { api_base_url, environment }
    }
}

/// Errors raised while reading host configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// SSR host settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let ip = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => DEFAULT_BIND_ADDR
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(DEFAULT_BIND_ADDR.to_owned()))?,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}
