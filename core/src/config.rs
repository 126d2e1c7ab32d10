//! Client construction options.
//!
//! `ClientOptions` is what a caller provides; [`ClientConfig`] is the
//! immutable form the pipeline reads on every call.

use serde::{Deserialize, Serialize};

/// Base address of ZAP's JSON endpoints. The `zap` host is answered by ZAP
/// itself when requests are routed through it as a proxy.
pub const DEFAULT_BASE_URL: &str = "http://zap/JSON";

/// Base address of ZAP's non-JSON ("other") endpoints.
pub const DEFAULT_BASE_URL_OTHER: &str = "http://zap/OTHER";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-ZAP-API-Key";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientOptions {
    /// Sent as `X-ZAP-API-Key` on every call when set.
    pub api_key: Option<String>,
    /// Outbound HTTP proxy, e.g. `http://127.0.0.1:8080`.
    pub proxy: Option<String>,
    pub base_url: String,
    pub base_url_other: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            proxy: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            base_url_other: DEFAULT_BASE_URL_OTHER.to_string(),
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_base_url_other(mut self, base_url_other: impl Into<String>) -> Self {
        self.base_url_other = base_url_other.into();
        self
    }

    /// Point both base addresses at a ZAP instance reachable directly, e.g.
    /// `http://localhost:8080`.
    pub fn with_zap_address(self, address: &str) -> Self {
        let address = address.trim_end_matches('/');
        self.with_base_url(format!("{address}/JSON"))
            .with_base_url_other(format!("{address}/OTHER"))
    }

    /// Read `ZAP_API_KEY`, `ZAP_PROXY`, `ZAP_BASE_URL` and
    /// `ZAP_BASE_URL_OTHER`, falling back to defaults for unset or empty
    /// variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            api_key: var("ZAP_API_KEY"),
            proxy: var("ZAP_PROXY"),
            base_url: var("ZAP_BASE_URL").unwrap_or(defaults.base_url),
            base_url_other: var("ZAP_BASE_URL_OTHER").unwrap_or(defaults.base_url_other),
        }
    }
}

/// Per-client configuration, fixed at construction and shared by every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub base_url_other: String,
    pub headers: Vec<(String, String)>,
}

impl From<&ClientOptions> for ClientConfig {
    fn from(options: &ClientOptions) -> Self {
        let headers = options
            .api_key
            .iter()
            .map(|key| (API_KEY_HEADER.to_string(), key.clone()))
            .collect();
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            base_url_other: options.base_url_other.trim_end_matches('/').to_string(),
            headers,
        }
    }
}
