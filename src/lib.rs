// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # tweet-history
//!
//! Walks a user's tweet timeline backwards from the newest post using
//! application-only OAuth2, and streams the posts to a consumer.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use tweet_history::auth::Authenticator;
//! use tweet_history::config::Credentials;
//! use tweet_history::http::HttpClient;
//! use tweet_history::pagination::PaginationEngine;
//! use tweet_history::timeline::HttpTimelineFetcher;
//!
//! #[tokio::main]
//! async fn main() -> tweet_history::Result<()> {
//!     let credentials = Credentials::from_file("config.json")?;
//!     let http = HttpClient::new()?;
//!     let token = Authenticator::new(credentials, http.clone()).authenticate().await?;
//!
//!     let engine = PaginationEngine::new(HttpTimelineFetcher::new(http));
//!     let mut posts = engine.stream_all_posts(&token, "jack");
//!     while let Some(post) = posts.next().await {
//!         println!("{}", post?.full_text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  token   ┌──────────────────────────┐  Result<Post>  ┌──────────┐
//! │ Authenticator├─────────►│ PaginationEngine (task)  ├───────────────►│ PostSink │
//! └──────┬───────┘          │ Initial → OlderLoop →    │  channel(1)    └──────────┘
//!        │                  │ NewerCatchup → Done      │
//!        │                  └────────────┬─────────────┘
//!        │                               │ PageRequest
//!        ▼                               ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 HttpClient / HttpTimelineFetcher                    │
//! │    POST /oauth2/token        GET /1.1/statuses/user_timeline.json   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Timeline data types and API constants
pub mod types;

/// Credentials, client and walk settings
pub mod config;

/// Application-only OAuth2
pub mod auth;

/// HTTP client
pub mod http;

/// Single-page timeline requests
pub mod timeline;

/// Full-history walk and post stream
pub mod pagination;

/// Post stream consumers
pub mod sink;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::{Authenticator, BearerToken};
pub use config::{ClientConfig, Credentials, WalkConfig};
pub use pagination::{PaginationEngine, PostStream};
pub use timeline::{Cursor, HttpTimelineFetcher, PageRequest, TimelineFetcher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
