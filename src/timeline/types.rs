//! Timeline request types

use crate::types::MAX_PAGE_SIZE;

/// Position of a page request within the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// The most recent posts
    #[default]
    Latest,
    /// Posts with an id strictly greater than this one
    SinceId(u64),
    /// Posts with an id less than or equal to this one
    MaxId(u64),
}

impl Cursor {
    /// Build a cursor from the wire convention where 0 means "unset".
    ///
    /// If both ids are set `since_id` takes precedence.
    pub fn from_ids(since_id: u64, max_id: u64) -> Self {
        if since_id != 0 {
            Self::SinceId(since_id)
        } else if max_id != 0 {
            Self::MaxId(max_id)
        } else {
            Self::Latest
        }
    }

    /// `since_id`, or 0 when unset
    pub fn since_id(&self) -> u64 {
        match self {
            Self::SinceId(id) => *id,
            _ => 0,
        }
    }

    /// `max_id`, or 0 when unset
    pub fn max_id(&self) -> u64 {
        match self {
            Self::MaxId(id) => *id,
            _ => 0,
        }
    }
}

/// A single page request against the user timeline endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Screen name of the timeline owner
    pub screen_name: String,
    /// Requested page size, within `1..=MAX_PAGE_SIZE`
    pub count: u32,
    /// Ask for entity metadata
    pub include_entities: bool,
    /// Page position
    pub cursor: Cursor,
}

impl PageRequest {
    /// Create a request for the latest page
    pub fn new(screen_name: impl Into<String>, count: u32, include_entities: bool) -> Self {
        Self {
            screen_name: screen_name.into(),
            count: count.clamp(1, MAX_PAGE_SIZE),
            include_entities,
            cursor: Cursor::Latest,
        }
    }

    /// Set the page position
    #[must_use]
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// `since_id` bound, 0 when unset
    pub fn since_id(&self) -> u64 {
        self.cursor.since_id()
    }

    /// `max_id` bound, 0 when unset
    pub fn max_id(&self) -> u64 {
        self.cursor.max_id()
    }

    /// Query parameters for the timeline endpoint.
    ///
    /// Unset ids are left out entirely rather than sent as 0.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("screen_name".to_string(), self.screen_name.clone()),
            ("count".to_string(), self.count.to_string()),
            (
                "include_entities".to_string(),
                self.include_entities.to_string(),
            ),
            ("tweet_mode".to_string(), "extended".to_string()),
            ("include_rts".to_string(), "true".to_string()),
        ];

        match self.cursor {
            Cursor::Latest => {}
            Cursor::SinceId(id) => params.push(("since_id".to_string(), id.to_string())),
            Cursor::MaxId(id) => params.push(("max_id".to_string(), id.to_string())),
        }

        params
    }
}
