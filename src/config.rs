//! Client configuration baked in at build time.
//!
//! The browser build has no process environment, so values are captured with
//! `option_env!` when the crate is compiled. Parsing goes through a lookup
//! function so it can be tested without touching the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "club_admin_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// Talk to the REST API at `api_base_url`.
    Http,
    /// Serve canned responses from `net::mock`.
    Mock,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown CLUB_ADMIN_API_MODE: {0} (expected 'http' or 'mock')")]
    UnknownApiMode(String),
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api_mode: ApiMode,
    pub session_storage_key: String,
    /// Where member (USER) accounts should sign in instead.
    pub member_app_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            api_mode: ApiMode::Http,
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_owned(),
            member_app_url: None,
        }
    }
}

impl ClientConfig {
    /// Build typed config from variables read through `lookup`.
    ///
    /// Optional:
    /// - `CLUB_ADMIN_API_BASE_URL`: default `/api`
    /// - `CLUB_ADMIN_API_MODE`: `http` (default) or `mock`
    /// - `CLUB_ADMIN_SESSION_KEY`: default `club_admin_session`
    /// - `CLUB_ADMIN_MEMBER_APP_URL`: no default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = non_empty(lookup("CLUB_ADMIN_API_BASE_URL"), "CLUB_ADMIN_API_BASE_URL")?
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let api_mode = parse_api_mode(lookup("CLUB_ADMIN_API_MODE").as_deref())?;
        let session_storage_key = non_empty(lookup("CLUB_ADMIN_SESSION_KEY"), "CLUB_ADMIN_SESSION_KEY")?
            .unwrap_or_else(|| DEFAULT_SESSION_STORAGE_KEY.to_owned());
        let member_app_url = lookup("CLUB_ADMIN_MEMBER_APP_URL").filter(|v| !v.trim().is_empty());

        Ok(Self { api_base_url, api_mode, session_storage_key, member_app_url })
    }

    /// Config captured at compile time; invalid values fall back to defaults.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env).unwrap_or_else(|e| {
            log::warn!("invalid build config, using defaults: {e}");
            Self::default()
        })
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "CLUB_ADMIN_API_BASE_URL" => option_env!("CLUB_ADMIN_API_BASE_URL"),
        "CLUB_ADMIN_API_MODE" => option_env!("CLUB_ADMIN_API_MODE"),
        "CLUB_ADMIN_SESSION_KEY" => option_env!("CLUB_ADMIN_SESSION_KEY"),
        "CLUB_ADMIN_MEMBER_APP_URL" => option_env!("CLUB_ADMIN_MEMBER_APP_URL"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn non_empty(raw: Option<String>, key: &'static str) -> Result<Option<String>, ConfigError> {
    match raw {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
        other => Ok(other),
    }
}

fn parse_api_mode(raw: Option<&str>) -> Result<ApiMode, ConfigError> {
    match raw.map(str::trim).unwrap_or("http") {
        "http" | "" => Ok(ApiMode::Http),
        "mock" => Ok(ApiMode::Mock),
        other => Err(ConfigError::UnknownApiMode(other.to_owned())),
    }
}
