//! ytscout command-line front end
//!
//! Two stages, run separately:
//!
//! ```text
//! ytscout search-ids --max-results 500 --days 30 --lang en
//! ytscout fetch-details --input-file out/video_ids.txt
//! ```

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::{Command, USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    match Command::from_env()? {
        Command::SearchIds(args) => commands::search_ids(args).await,
        Command::FetchDetails(args) => commands::fetch_details(args).await,
        Command::Help => {
            print!("{USAGE}");
            Ok(())
        }
    }
}
