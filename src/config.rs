//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("API_UPSTREAM_URL must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend that `/api/*` is forwarded to, without a trailing slash.
    pub api_upstream_url: String,
    pub api_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://127.0.0.1:8080`
    /// - `API_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_timeout_secs = parse_or("API_TIMEOUT_SECS", lookup("API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?;
        if api_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "API_TIMEOUT_SECS", value: "0".into() });
        }

        let api_upstream_url = lookup("API_UPSTREAM_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM_URL.to_string());
        if !(api_upstream_url.starts_with("http://") || api_upstream_url.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(api_upstream_url));
        }

        Ok(Self { port, api_upstream_url, api_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
