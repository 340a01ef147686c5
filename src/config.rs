//! Build-time client configuration.
//!
//! A WASM bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled and baked into the bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "https://mentorshipbackend-fzoc.onrender.com";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `MENTIFY_BACKEND_URL`: backend origin, default [`DEFAULT_BACKEND_URL`]
    /// - `MENTIFY_LOG_LEVEL`: `error`..`trace`, default `info`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("MENTIFY_BACKEND_URL"), option_env!("MENTIFY_LOG_LEVEL"))
    }

    /// Resolve config from raw optional values. Blank or unparseable values fall
    /// back to defaults.
    pub fn from_values(backend_url: Option<&str>, log_level: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        let log_level = log_level
            .and_then(|v| v.trim().parse::<log::Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { backend_url, log_level }
    }
}
