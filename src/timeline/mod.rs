//! Timeline fetcher module
//!
//! One bounded request against the user timeline endpoint per call.
//!
//! # Overview
//!
//! - `Cursor` - which slice of the timeline to ask for (latest, newer
//!   than an id, or at/older than an id)
//! - `PageRequest` - a full page request: user, page size, entities, cursor
//! - `TimelineFetcher` - the seam the pagination engine drives
//! - `HttpTimelineFetcher` - the implementation backed by the REST API

mod fetcher;
mod types;

pub use fetcher::{HttpTimelineFetcher, TimelineFetcher};
pub use types::{Cursor, PageRequest};
