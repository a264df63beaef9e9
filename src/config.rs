//! Configuration types
//!
//! - `Credentials` - the consumer key/secret file read at startup
//! - `ClientConfig` - endpoints and transport settings
//! - `WalkConfig` - how the pagination engine pages through a timeline

use crate::error::{Error, Result, ResultExt};
use crate::types::{DEFAULT_API_BASE, MAX_PAGE_SIZE, TOKEN_PATH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Credentials
// ============================================================================

/// Application credentials loaded from a JSON file
///
/// ```json
/// { "ConsumerKey": "...", "ConsumerSecret": "..." }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    /// Consumer (API) key
    #[serde(default)]
    pub consumer_key: String,

    /// Consumer (API) secret
    #[serde(default)]
    pub consumer_secret: String,
}

impl Credentials {
    /// Create credentials from a key and secret
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Load credentials from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse credentials from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let credentials: Self = serde_json::from_str(content)?;
        credentials.validate()?;
        Ok(credentials)
    }

    fn validate(&self) -> Result<()> {
        if self.consumer_key.is_empty() {
            return Err(Error::missing_field("ConsumerKey"));
        }
        if self.consumer_secret.is_empty() {
            return Err(Error::missing_field("ConsumerSecret"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Endpoint and transport settings shared by the authenticator and fetcher
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for API requests
    pub api_base_url: String,
    /// Full URL of the token endpoint
    pub token_url: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            token_url: format!("{DEFAULT_API_BASE}{TOKEN_PATH}"),
            timeout: None,
            user_agent: format!("tweet-history/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Point both the API and the token endpoint at another host
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let base = url.trim_end_matches('/');
        self.config.token_url = format!("{base}{TOKEN_PATH}");
        self.config.api_base_url = base.to_string();
        self
    }

    /// Override the token endpoint only
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.config.token_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

// ============================================================================
// Walk Config
// ============================================================================

/// Settings for one timeline walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Posts requested per page, at most `MAX_PAGE_SIZE`
    pub page_size: u32,
    /// Ask the platform for entity metadata
    pub include_entities: bool,
    /// Skip posts already emitted in this walk.
    ///
    /// Off by default: the inclusive `max_id` bound makes every older page
    /// repeat the previous boundary post, and that post is emitted again.
    pub dedup: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            include_entities: true,
            dedup: false,
        }
    }
}

impl WalkConfig {
    /// Create a new walk config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size (clamped to `1..=MAX_PAGE_SIZE`)
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Request entity metadata
    #[must_use]
    pub fn with_entities(mut self, include: bool) -> Self {
        self.include_entities = include;
        self
    }

    /// Enable boundary de-duplication
    #[must_use]
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }
}
