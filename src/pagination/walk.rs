//! Timeline walk state machine

use super::types::{WalkState, WalkStats};
use crate::auth::BearerToken;
use crate::config::WalkConfig;
use crate::error::Result;
use crate::timeline::{Cursor, PageRequest, TimelineFetcher};
use crate::types::{Page, Post};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// One traversal of a user timeline
///
/// Every call to [`Walk::next_batch`] makes at most one request and
/// returns the posts to emit for it, in the order the endpoint sent them.
pub struct Walk<F: ?Sized> {
    fetcher: Arc<F>,
    token: BearerToken,
    screen_name: String,
    config: WalkConfig,
    state: WalkState,
    stats: WalkStats,
    emitted: HashSet<u64>,
}

impl<F: TimelineFetcher + ?Sized> Walk<F> {
    /// Start a walk in the `Initial` state
    pub fn new(
        fetcher: Arc<F>,
        token: BearerToken,
        screen_name: impl Into<String>,
        config: WalkConfig,
    ) -> Self {
        Self {
            fetcher,
            token,
            screen_name: screen_name.into(),
            config,
            state: WalkState::Initial,
            stats: WalkStats::new(),
            emitted: HashSet::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Counters so far
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Consume the walk, keeping its counters
    pub fn into_stats(self) -> WalkStats {
        self.stats
    }

    /// Advance the walk by one request.
    ///
    /// Returns `Ok(None)` once the walk is done. A batch may be empty (an
    /// empty first page or an empty catch-up page). After an error the walk
    /// is done and makes no further requests.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<Post>>> {
        let result = self.step().await;
        if result.is_err() {
            self.state = WalkState::Done;
        }
        result
    }

    async fn step(&mut self) -> Result<Option<Vec<Post>>> {
        loop {
            match self.state {
                WalkState::Initial => {
                    let page = self.fetch(Cursor::Latest).await?.unwrap_or_default();
                    self.state = match (page.newest(), page.oldest()) {
                        (Some(newest), Some(oldest)) => WalkState::OlderLoop {
                            first_id: newest.id,
                            last_id: oldest.id,
                        },
                        _ => {
                            info!(screen_name = %self.screen_name, "Timeline is empty");
                            WalkState::Done
                        }
                    };
                    return Ok(Some(self.emit(page)));
                }

                WalkState::OlderLoop { first_id, last_id } => {
                    // max_id is inclusive, so a page holding only the
                    // boundary post means there is nothing older
                    let page = match self.fetch(Cursor::MaxId(last_id)).await? {
                        Some(page) if page.len() > 1 => page,
                        Some(_) => {
                            debug!(last_id, "Reached the oldest reachable post");
                            self.state = WalkState::NewerCatchup { first_id };
                            continue;
                        }
                        None => {
                            debug!(last_id, "No page returned, ending older-page loop");
                            self.state = WalkState::NewerCatchup { first_id };
                            continue;
                        }
                    };

                    let oldest = page.oldest().map_or(last_id, |p| p.id);
                    if oldest >= last_id {
                        warn!(
                            last_id,
                            oldest, "Older page did not move the cursor, ending older-page loop"
                        );
                        self.state = WalkState::NewerCatchup { first_id };
                        continue;
                    }

                    self.state = WalkState::OlderLoop {
                        first_id,
                        last_id: oldest,
                    };
                    return Ok(Some(self.emit(page)));
                }

                WalkState::NewerCatchup { first_id } => {
                    let page = self.fetch(Cursor::SinceId(first_id)).await?;
                    self.state = WalkState::Done;
                    let page = page.unwrap_or_default();
                    if !page.is_empty() {
                        info!(
                            posts = page.len(),
                            since_id = first_id,
                            "Picked up posts published during the walk"
                        );
                    }
                    return Ok(Some(self.emit(page)));
                }

                WalkState::Done => return Ok(None),
            }
        }
    }

    /// Run the walk to completion, sending each post to `tx`.
    ///
    /// A fatal error is sent as the last item. The walk also stops when the
    /// receiver goes away.
    pub async fn run(&mut self, tx: mpsc::Sender<Result<Post>>) {
        loop {
            match self.next_batch().await {
                Ok(Some(batch)) => {
                    for post in batch {
                        if tx.send(Ok(post)).await.is_err() {
                            debug!(screen_name = %self.screen_name, "Post stream receiver dropped");
                            self.state = WalkState::Done;
                            return;
                        }
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    error!(screen_name = %self.screen_name, error = %e, "Timeline walk failed");
                    if tx.send(Err(e)).await.is_err() {
                        debug!("Post stream receiver dropped before the error was delivered");
                    }
                    return;
                }
            }
        }

        info!(
            screen_name = %self.screen_name,
            requests = self.stats.requests,
            pages = self.stats.pages_emitted,
            posts = self.stats.posts_emitted,
            duplicates_skipped = self.stats.duplicates_skipped,
            "Timeline walk complete"
        );
    }

    async fn fetch(&mut self, cursor: Cursor) -> Result<Option<Page>> {
        let request = PageRequest::new(
            self.screen_name.as_str(),
            self.config.page_size,
            self.config.include_entities,
        )
        .with_cursor(cursor);

        self.stats.add_request();
        debug!(
            state = self.state.name(),
            since_id = request.since_id(),
            max_id = request.max_id(),
            "Requesting page"
        );
        self.fetcher.fetch_page(&self.token, &request).await
    }

    fn emit(&mut self, page: Page) -> Vec<Post> {
        let posts = page.into_posts();
        let posts = if self.config.dedup {
            let before = posts.len();
            let fresh: Vec<Post> = posts
                .into_iter()
                .filter(|p| self.emitted.insert(p.id))
                .collect();
            self.stats.add_duplicates(before - fresh.len());
            fresh
        } else {
            posts
        };

        if !posts.is_empty() {
            self.stats.add_page(posts.len());
        }
        posts
    }
}
