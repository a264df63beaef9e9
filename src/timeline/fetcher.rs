//! Timeline fetcher implementations

use super::types::PageRequest;
use crate::auth::BearerToken;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{Page, USER_TIMELINE_PATH};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Source of timeline pages
///
/// `Ok(None)` means "no page": the request completed but produced nothing
/// usable (non-success status, undecodable body). That is distinct from
/// `Ok(Some(page))` with an empty page. `Err` is reserved for failures
/// the caller should treat as fatal.
#[async_trait]
pub trait TimelineFetcher: Send + Sync {
    /// Fetch one page
    async fn fetch_page(&self, token: &BearerToken, request: &PageRequest)
        -> Result<Option<Page>>;
}

/// Timeline fetcher backed by the REST endpoint
#[derive(Debug, Clone)]
pub struct HttpTimelineFetcher {
    client: HttpClient,
}

impl HttpTimelineFetcher {
    /// Create a fetcher over an HTTP client
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TimelineFetcher for HttpTimelineFetcher {
    async fn fetch_page(
        &self,
        token: &BearerToken,
        request: &PageRequest,
    ) -> Result<Option<Page>> {
        debug!(
            screen_name = %request.screen_name,
            count = request.count,
            since_id = request.since_id(),
            max_id = request.max_id(),
            "Fetching timeline page"
        );

        let mut config = RequestConfig::new().bearer(token.as_str());
        config.query = request.query_params();

        let response = self
            .client
            .get_with_config(USER_TIMELINE_PATH, config)
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                screen_name = %request.screen_name,
                "Timeline request was not successful"
            );
            return Ok(None);
        }

        let body = response.text().await.map_err(Error::Http)?;
        match serde_json::from_str::<Page>(&body) {
            Ok(page) => {
                debug!(posts = page.len(), "Fetched timeline page");
                Ok(Some(page))
            }
            Err(e) => {
                warn!(error = %e, "Could not decode timeline page");
                Ok(None)
            }
        }
    }
}
