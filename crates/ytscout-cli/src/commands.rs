//! Subcommand implementations
//!
//! Each command loads the credential first, so a missing key fails before
//! any network activity.

use anyhow::{Context, Result};
use tracing::info;
use ytscout_core::classifier::tag_distribution;
use ytscout_core::output::{export_csv, read_ids, write_ids};
use ytscout_core::{ApiKey, YouTubeScout};

use crate::args::{DetailArgs, SearchArgs};

/// Labels shown in the closing distribution summary
const DISTRIBUTION_TOP: usize = 10;

/// Search for video IDs and save them one per line
pub async fn search_ids(args: SearchArgs) -> Result<()> {
    let api_key = ApiKey::from_env()?;
    let query = args.to_query()?;
    let scout = YouTubeScout::new(api_key)?;

    let ids = scout.collect_ids(&query).await?;

    let saved = write_ids(&args.output_file, &ids)
        .with_context(|| format!("writing {}", args.output_file.display()))?;
    info!(
        "Success! Saved {} video IDs to {}",
        saved,
        args.output_file.display()
    );

    Ok(())
}

/// Fetch details for saved IDs, classify them and export a CSV
pub async fn fetch_details(args: DetailArgs) -> Result<()> {
    let api_key = ApiKey::from_env()?;
    let ids = read_ids(&args.input_file)?;
    info!(
        "Found {} video IDs in {}",
        ids.len(),
        args.input_file.display()
    );

    let scout = YouTubeScout::new(api_key)?;
    let videos = scout.fetch_classified(&ids).await?;

    if videos.is_empty() {
        info!("No details were fetched. Exiting.");
        return Ok(());
    }

    export_csv(&args.output_file, &videos)
        .with_context(|| format!("writing {}", args.output_file.display()))?;
    info!(
        "Success! Saved {} classified videos to {}",
        videos.len(),
        args.output_file.display()
    );

    info!("Distribution of content tags (top {}):", DISTRIBUTION_TOP);
    for (label, count) in tag_distribution(&videos, DISTRIBUTION_TOP) {
        info!("  {:<20} {}", label, count);
    }

    Ok(())
}
