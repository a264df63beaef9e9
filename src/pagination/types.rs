//! Pagination types
//!
//! The walk state machine and its counters.

/// Where a walk is in its timeline traversal.
///
/// The cursor ids exist only inside the states that need them: no id is
/// known before the first page arrives, and none survive the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkState {
    /// Nothing fetched yet
    #[default]
    Initial,
    /// Following `max_id` towards older posts
    OlderLoop {
        /// Newest id of the first page
        first_id: u64,
        /// Oldest id emitted so far
        last_id: u64,
    },
    /// One `since_id` request for posts newer than the first page
    NewerCatchup {
        /// Newest id of the first page
        first_id: u64,
    },
    /// No further requests will be made
    Done,
}

impl WalkState {
    /// Check if the walk has finished
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Short state name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::OlderLoop { .. } => "older_loop",
            Self::NewerCatchup { .. } => "newer_catchup",
            Self::Done => "done",
        }
    }
}

/// Counters collected over one walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Timeline requests made
    pub requests: usize,
    /// Pages whose posts were emitted
    pub pages_emitted: usize,
    /// Posts emitted
    pub posts_emitted: usize,
    /// Posts dropped by de-duplication
    pub duplicates_skipped: usize,
}

impl WalkStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a request
    pub fn add_request(&mut self) {
        self.requests += 1;
    }

    /// Count an emitted page with its post count
    pub fn add_page(&mut self, posts: usize) {
        self.pages_emitted += 1;
        self.posts_emitted += posts;
    }

    /// Count skipped duplicates
    pub fn add_duplicates(&mut self, count: usize) {
        self.duplicates_skipped += count;
    }
}
