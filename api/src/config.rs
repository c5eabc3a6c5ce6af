//! Backend location.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Production backend used when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "https://backend-adv-production.up.railway.app/";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "BACKOFFICE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Always ends with exactly one `/`.
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config for `base_url`, normalizing trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self { base_url: format!("{trimmed}/") }
    }

    /// Read `BACKOFFICE_API_URL`, falling back to the production backend.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    /// Use `raw` when it is set and non-blank, else the default.
    ///
    /// The browser build passes `option_env!("BACKOFFICE_API_URL")` here.
    #[must_use]
    pub fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `cliente/42`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}
