//! Client configuration resolved at build time.
//!
//! Optional:
//! - `STOREFRONT_API_BASE`: prefix for backend JSON endpoints (default `/api`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_raw(option_env!("STOREFRONT_API_BASE"))
    }

    fn from_raw(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base }
    }

    /// Absolute path of a backend endpoint, e.g. `endpoint("login")` → `/api/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
