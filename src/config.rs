//! Process-wide dashboard configuration.
//!
//! DESIGN
//! ======
//! The backend base URL is resolved once when the app mounts and handed to
//! `App` explicitly, which provides it through Leptos context. Nothing reads
//! it from a mutable global.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when no build-time override is set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Connection settings shared by every network-issuing component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    backend_url: String,
}

impl DashboardConfig {
    /// Build a config for `backend_url`, dropping any trailing slashes.
    pub fn new(backend_url: impl Into<String>) -> Self {
        let raw = backend_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let backend_url = if trimmed.is_empty() { DEFAULT_BACKEND_URL } else { trimmed };
        Self { backend_url: backend_url.to_owned() }
    }

    /// Resolve the backend URL baked in at compile time via
    /// `MUSIC_DASHBOARD_BACKEND_URL`, falling back to [`DEFAULT_BACKEND_URL`].
    pub fn from_build_env() -> Self {
        option_env!("MUSIC_DASHBOARD_BACKEND_URL").map_or_else(|| Self::new(DEFAULT_BACKEND_URL), Self::new)
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Absolute URL for an `/api`-relative path such as `/genres`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{path}", self.backend_url)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
