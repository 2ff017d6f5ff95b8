// src/config/env.rs
// DOCUMENTATION: Gateway configuration
// PURPOSE: Hold the immutable client settings and load them from .env files

use crate::errors::GatewayError;
use dotenv::dotenv;
use std::env;

/// Public Unsplash API root
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Page size used when a request carries no override
pub const DEFAULT_PAGE_SIZE: u32 = 40;

/// Gateway configuration
/// DOCUMENTATION: Centralizes all client settings in one struct.
/// Owned by a single `SearchGateway` and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash (e.g., "https://api.unsplash.com")
    pub base_url: String,

    /// Access key sent as `client_id` on every request
    pub api_key: String,

    /// Results per page when a request does not override it
    pub default_page_size: u32,

    /// Application name used as `utm_source` in attribution links
    pub app_id: String,

    /// Appended to raw image URLs (e.g., "&w=1080&fm=jpg")
    pub url_suffix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            app_id: String::new(),
            url_suffix: String::new(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment.
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = ClientConfig::default();

        ClientConfig {
            base_url: env::var("UNSPLASH_API_URL")
                .ok()
                .map(|v| trim_base_url(&v))
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),

            api_key: env::var("UNSPLASH_ACCESS_KEY").unwrap_or_else(|_| String::new()),

            default_page_size: env::var("UNSPLASH_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size: &u32| *size > 0)
                .unwrap_or(defaults.default_page_size),

            app_id: env::var("UNSPLASH_APP_NAME").unwrap_or_else(|_| String::new()),

            url_suffix: env::var("UNSPLASH_URL_SUFFIX").unwrap_or_else(|_| String::new()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = trim_base_url(&base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn with_url_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.url_suffix = suffix.into();
        self
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Optional check for callers that want to fail fast.
    /// `SearchGateway::new` never calls this; an empty key only surfaces
    /// as `Unauthorized` at call time.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.base_url.is_empty() {
            return Err(GatewayError::InvalidInput(
                "UNSPLASH_API_URL is required".to_string(),
            ));
        }

        if self.default_page_size == 0 {
            return Err(GatewayError::InvalidInput(
                "UNSPLASH_PER_PAGE must be positive".to_string(),
            ));
        }

        if self.api_key.is_empty() {
            log::warn!("UNSPLASH_ACCESS_KEY not configured - requests will be rejected");
        }

        if self.app_id.is_empty() {
            log::warn!("UNSPLASH_APP_NAME not configured - attribution links lack utm_source");
        }

        Ok(())
    }
}

/// Paths are appended with a leading slash, so the root must not end in one
fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
