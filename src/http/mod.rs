//! HTTP client module
//!
//! A thin wrapper over `reqwest` shared by the authenticator and the
//! timeline fetcher. It applies the user agent and an optional timeout,
//! resolves paths against the API base URL, and leaves status handling
//! to the caller. There is no retry or rate limiting here.

mod client;

pub use client::{HttpClient, RequestConfig};
