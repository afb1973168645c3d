//! Rank command - rank scored records

use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::ranker::ItemRanker;
use crate::sources::load_items;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the rank command
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Records as a JSON array or JSON Lines file
    pub file: PathBuf,

    /// Maximum number of records to keep
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Keep reposts and quotes
    #[arg(long)]
    pub include_derivative: bool,
}

/// Ranked record
#[derive(Debug, Serialize)]
pub struct RankedItem {
    pub rank: usize,
    pub score: f64,
    pub text: String,
}

/// Rank response
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub received: usize,
    pub kept: usize,
    pub items: Vec<RankedItem>,
}

/// Execute the rank command
pub async fn execute(
    args: RankArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let limit = args.limit.unwrap_or(config.ranking.limit);
    let exclude = config.ranking.exclude_derivative && !args.include_derivative;

    let items = load_items(&args.file)?;
    let received = items.len();
    let ranked = ItemRanker::new(limit, exclude).rank(items)?;

    let response = RankResponse {
        received,
        kept: ranked.len(),
        items: ranked
            .into_iter()
            .enumerate()
            .map(|(i, item)| RankedItem {
                rank: i + 1,
                score: item.score,
                text: item.text,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "Kept {} of {} record(s):\n",
                colors::count(response.kept),
                colors::count(response.received)
            );
            for item in &response.items {
                println!(
                    "{} {} {}",
                    colors::position(item.rank),
                    colors::score(item.score),
                    preview(&item.text, 80)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
