//! CLI commands and argument parsing

use crate::types::MAX_PAGE_SIZE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Retrieve a user's tweet history with application-only auth
#[derive(Parser, Debug)]
#[command(name = "tweet-history")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Credentials file (JSON with ConsumerKey and ConsumerSecret)
    #[arg(short = 'C', long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Prefix text output with the post time
    #[arg(long, global = true)]
    pub timestamps: bool,

    /// API host (the token endpoint is derived from it)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream every reachable post of a user's timeline
    Walk {
        /// Screen name of the timeline owner
        screen_name: String,

        /// Skip posts already emitted (the page boundary post repeats otherwise)
        #[arg(long)]
        dedup: bool,

        /// Posts per request
        #[arg(long, default_value_t = MAX_PAGE_SIZE)]
        page_size: u32,
    },

    /// Print only the newest page of a user's timeline
    Latest {
        /// Screen name of the timeline owner
        screen_name: String,

        /// Number of posts
        #[arg(long, default_value_t = MAX_PAGE_SIZE)]
        count: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Post text, one per line
    Text,
    /// One JSON object per line
    Json,
}
