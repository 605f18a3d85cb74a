// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Timekit API client configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TimekitConfig {
    /// Base URL of the Timekit API, version prefix included.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application identifier sent as the `Timekit-App` header on every request.
    pub app: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.timekit.io/v2/".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("timekit/", env!("CARGO_PKG_VERSION")).to_string()
}

impl TimekitConfig {
    /// Creates a configuration for the given application identifier, with
    /// defaults for everything else.
    #[must_use]
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            ..Self::default()
        }
    }

    /// Base URL with a trailing slash guaranteed, so relative paths append cleanly.
    pub(crate) fn base_url_normalized(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}

impl Default for TimekitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
