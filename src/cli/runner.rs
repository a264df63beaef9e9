//! CLI runner - executes commands

use crate::auth::Authenticator;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ClientConfig, Credentials, WalkConfig};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::PaginationEngine;
use crate::sink::{drain, JsonLinesSink, PostSink, TextSink};
use crate::timeline::HttpTimelineFetcher;
use std::io::{self, Write};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing posts to stdout
    pub async fn run(&self) -> Result<()> {
        self.run_to(io::stdout().lock()).await
    }

    /// Run the CLI command, writing posts to `writer`
    pub async fn run_to<W: Write>(&self, writer: W) -> Result<()> {
        let credentials = Credentials::from_file(&self.cli.config)?;
        let http = HttpClient::with_config(self.client_config())?;

        let token = Authenticator::new(credentials, http.clone())
            .authenticate()
            .await?;
        let engine = PaginationEngine::new(HttpTimelineFetcher::new(http));
        let mut sink = self.sink(writer);

        match &self.cli.command {
            Commands::Walk {
                screen_name,
                dedup,
                page_size,
            } => {
                let config = WalkConfig::new()
                    .with_page_size(*page_size)
                    .with_dedup(*dedup);
                let engine = engine.with_config(config);

                info!(screen_name = %screen_name, "Walking timeline");
                let mut stream = engine.stream_all_posts(&token, screen_name);
                let count = drain(&mut stream, sink.as_mut()).await?;
                let stats = stream.finish().await?;
                info!(
                    screen_name = %screen_name,
                    posts = count,
                    requests = stats.requests,
                    "Done"
                );
            }
            Commands::Latest { screen_name, count } => {
                let page = engine.latest_page(&token, screen_name, *count).await?;
                for post in page.posts() {
                    sink.consume(post)?;
                }
                sink.finish()?;
                info!(screen_name = %screen_name, posts = page.len(), "Done");
            }
        }

        Ok(())
    }

    /// Client settings, honoring `--api-base-url`
    fn client_config(&self) -> ClientConfig {
        match &self.cli.api_base_url {
            Some(url) => ClientConfig::builder().base_url(url.as_str()).build(),
            None => ClientConfig::default(),
        }
    }

    fn sink<'w, W: Write + 'w>(&self, writer: W) -> Box<dyn PostSink + 'w> {
        match self.cli.format {
            OutputFormat::Text => {
                Box::new(TextSink::new(writer).with_timestamps(self.cli.timestamps))
            }
            OutputFormat::Json => Box::new(JsonLinesSink::new(writer)),
        }
    }
}
