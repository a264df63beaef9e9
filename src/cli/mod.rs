//! CLI module
//!
//! Command-line interface for retrieving timelines.
//!
//! # Commands
//!
//! - `walk` - Stream a user's complete reachable timeline
//! - `latest` - Print only the newest page

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
