//! Client configuration shared by the request client and session helpers.
//!
//! DESIGN
//! ======
//! Every path and key the layer depends on lives here so page scripts can
//! override them once (via the `configure` export) instead of each helper
//! hard-coding its own copy.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Storage key for the bearer credential in `localStorage`.
pub const DEFAULT_STORAGE_KEY: &str = "token";

/// Full-page navigation target for unauthenticated users.
pub const DEFAULT_LOGIN_PAGE: &str = "index.html";

/// How long an alert stays visible before it is hidden again.
pub const DEFAULT_ALERT_DURATION_MS: u32 = 5_000;

/// Paths, keys, and timings used by the browser utility layer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Prefix joined in front of every request path. Empty means same origin.
    pub api_base_url: String,
    pub storage_key: String,
    pub login_page: String,
    /// Paths containing this prefix may be requested without a credential.
    pub auth_path_prefix: String,
    pub login_endpoint: String,
    pub register_endpoint: String,
    pub alert_duration_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_page: DEFAULT_LOGIN_PAGE.to_owned(),
            auth_path_prefix: "/api/auth/".to_owned(),
            login_endpoint: "/api/auth/login".to_owned(),
            register_endpoint: "/api/auth/register".to_owned(),
            alert_duration_ms: DEFAULT_ALERT_DURATION_MS,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the input is not a JSON object of
    /// the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Whether `path` targets an authentication endpoint that needs no credential.
    pub fn is_auth_path(&self, path: &str) -> bool {
        path.contains(&self.auth_path_prefix)
    }

    /// Whether a 401/403 on `path` is an ordinary credential rejection rather
    /// than an expired session.
    pub fn is_credential_exchange(&self, path: &str) -> bool {
        path.contains(&self.login_endpoint) || path.contains(&self.register_endpoint)
    }

    /// Whether `pathname` (as in `location.pathname`) is the login page.
    pub fn is_login_page(&self, pathname: &str) -> bool {
        let current = pathname.rsplit('/').next().unwrap_or_default();
        let login = self.login_page.rsplit('/').next().unwrap_or_default();
        current.is_empty() || current == login
    }

    /// Absolute request URL for a relative API path.
    pub fn request_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}
