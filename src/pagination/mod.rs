//! Pagination module
//!
//! Walks a user timeline in both directions from the newest page and
//! streams every post it finds.
//!
//! # Overview
//!
//! A walk fetches the newest page, then follows `max_id` backwards until
//! the endpoint has nothing older, then makes one `since_id` request for
//! posts published while the walk was running:
//!
//! ```text
//! Initial ──▶ OlderLoop ──▶ NewerCatchup ──▶ Done
//!    │            ▲  │
//!    │            └──┘ (page longer than the boundary post)
//!    └──────────────────────────────────────▶ Done (empty first page)
//! ```
//!
//! `Walk` drives that state machine one fetch at a time. `PaginationEngine`
//! runs a walk on its own task and hands posts to the consumer through a
//! `PostStream`, one post at a time.

mod engine;
mod types;
mod walk;

pub use engine::{PaginationEngine, PostStream};
pub use types::{WalkState, WalkStats};
pub use walk::Walk;
