//! Client configuration

/// Host used when none is configured
pub const DEFAULT_HOST: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Base URL of the service, without the `/ping` path
    pub host: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl Configuration {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Full URL for a path on the configured host
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), path)
    }
}
