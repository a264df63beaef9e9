//! Pagination engine
//!
//! Runs walks on their own task and exposes the result as a stream.

use super::types::WalkStats;
use super::walk::Walk;
use crate::auth::BearerToken;
use crate::config::WalkConfig;
use crate::error::{Error, Result};
use crate::timeline::{PageRequest, TimelineFetcher};
use crate::types::{Page, Post};
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Drives timeline walks over a fetcher
pub struct PaginationEngine<F: ?Sized> {
    fetcher: Arc<F>,
    config: WalkConfig,
}

impl<F: TimelineFetcher + 'static> PaginationEngine<F> {
    /// Create an engine with the default walk configuration
    pub fn new(fetcher: F) -> Self {
        Self::from_arc(Arc::new(fetcher))
    }
}

impl<F: TimelineFetcher + ?Sized + 'static> PaginationEngine<F> {
    /// Create an engine over a shared fetcher
    pub fn from_arc(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            config: WalkConfig::default(),
        }
    }

    /// Set walk configuration
    #[must_use]
    pub fn with_config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the walk configuration
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Start a walk the caller drives with [`Walk::next_batch`]
    pub fn walk(&self, token: BearerToken, screen_name: impl Into<String>) -> Walk<F> {
        Walk::new(
            Arc::clone(&self.fetcher),
            token,
            screen_name,
            self.config.clone(),
        )
    }

    /// Stream every reachable post of a user's timeline.
    ///
    /// The walk runs on a spawned task and waits for the consumer to take
    /// each post before producing the next one. Order is: the newest page,
    /// then each older page, then posts newer than the first page. Must be
    /// called from within a tokio runtime.
    pub fn stream_all_posts(&self, token: &BearerToken, screen_name: &str) -> PostStream {
        let (tx, rx) = mpsc::channel(1);
        let mut walk = self.walk(token.clone(), screen_name);

        let handle = tokio::spawn(async move {
            walk.run(tx).await;
            walk.into_stats()
        });

        PostStream { rx, handle }
    }

    /// Fetch only the newest page.
    ///
    /// A "no page" response is returned as an empty page.
    pub async fn latest_page(
        &self,
        token: &BearerToken,
        screen_name: &str,
        count: u32,
    ) -> Result<Page> {
        let request = PageRequest::new(screen_name, count, self.config.include_entities);
        let page = self.fetcher.fetch_page(token, &request).await?;
        Ok(page.unwrap_or_default())
    }
}

/// Posts produced by a running walk
///
/// Yields `Ok(post)` items in emission order. A fatal walk error arrives
/// as a final `Err` item; the stream then ends.
pub struct PostStream {
    rx: mpsc::Receiver<Result<Post>>,
    handle: JoinHandle<WalkStats>,
}

impl PostStream {
    /// Receive the next post, or `None` once the walk is over
    pub async fn next_post(&mut self) -> Option<Result<Post>> {
        self.rx.recv().await
    }

    /// Stop receiving and wait for the walk to finish.
    ///
    /// Posts not yet received are discarded and the walk stops at its next
    /// send.
    pub async fn finish(self) -> Result<WalkStats> {
        let Self { mut rx, handle } = self;
        rx.close();
        handle
            .await
            .map_err(|e| Error::Other(format!("Timeline walk task failed: {e}")))
    }
}

impl Stream for PostStream {
    type Item = Result<Post>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl std::fmt::Debug for PostStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStream")
            .field("walk_finished", &self.handle.is_finished())
            .finish_non_exhaustive()
    }
}
