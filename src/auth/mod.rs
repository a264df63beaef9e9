//! Authentication module
//!
//! Application-only OAuth2: the consumer key and secret are exchanged for
//! a bearer token with the client-credentials grant, and that token
//! authenticates every timeline request.

mod authenticator;
mod types;

pub use authenticator::{encode_credentials, Authenticator};
pub use types::BearerToken;

#[cfg(test)]
mod tests;
