use super::Cli;
use crate::core::{ProcessSummary, VaultConfig, VaultProcessor};
use anyhow::Result;
use tracing::info;

pub fn run(cli: &Cli) -> Result<ProcessSummary> {
    info!("Loading configuration from {:?}", cli.config);
    let config = VaultConfig::from_file(&cli.config)?;

    let summary = VaultProcessor::new(config).process()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(summary)
}

fn print_summary(summary: &ProcessSummary) {
    println!("\n=== Publish Summary ===");
    println!("Posts written: {}", summary.notes_written);
    println!("Assets indexed: {}", summary.assets_indexed);
    println!("Asset objects written: {}", summary.assets_written);
    println!("Asset objects reused: {}", summary.assets_reused);
    println!("Asset links: {}", summary.asset_links);
    println!("Post links: {}", summary.post_links);
}
