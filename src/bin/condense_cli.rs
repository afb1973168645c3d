//! Condense CLI - command-line interface for the condense pipeline
//!
//! Ranks, aggregates, splits and transforms text from mixed sources,
//! then joins the per-chunk results.
//!
//! # Examples
//!
//! ```bash
//! # Summarize posts and a transcript with an external model CLI
//! condense run --posts posts.json --transcript talk.txt -- llm -m my-model
//!
//! # Preview the chunks a file would be split into
//! condense split notes.txt --max-chunk-size 2000 --overlap 200
//!
//! # Show the most popular original posts
//! condense rank posts.json -n 10
//!
//! # Show configuration
//! condense show-config
//! ```

use clap::Parser;
use condense::cli::output::fail;
use condense::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "condense=debug"
    } else {
        "condense=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        // stdout carries only command output
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::debug!("condense {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        fail(&e.to_string());
        std::process::exit(1);
    }
}
