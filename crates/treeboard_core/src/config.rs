//! Client configuration.
//!
//! # Responsibility
//! - Resolve the remote service base URL from explicit input or environment.
//!
//! # Invariants
//! - Resolution never panics; blank input falls back to the default.
//! - Scene dimensions and spacing are fixed constants in `layout`, not
//!   runtime configuration.

/// Default origin serving both the tree and task endpoints.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment override for the base URL.
pub const BASE_URL_ENV: &str = "TREEBOARD_BASE_URL";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Builds a configuration for one explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Reads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(raw),
            _ => Self::default(),
        }
    }
}

fn normalize_base_url(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::{ClientConfig, DEFAULT_BASE_URL};

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn new_trims_whitespace_and_trailing_slash() {
        let config = ClientConfig::new("  http://example.test:9090/  ");
        assert_eq!(config.base_url, "http://example.test:9090");
    }
}
