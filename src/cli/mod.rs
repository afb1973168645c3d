//! CLI adapter for condense
//!
//! Provides the command-line interface over the pipeline. This
//! module depends on `core/`, `sources` and `transform`; none of
//! those depend on it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              | (pipeline stages)|
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |    sources       |      |   transform/     |
//! | (file providers) |      | (command, echo)  |
//! +--------+---------+      +--------+---------+
//!          |                         |
//!          +------------+------------+
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::{Parser, Subcommand};

/// Condense - rank, window and map-join text from mixed sources
///
/// Collects posts, web pages, transcripts and comments, ranks and
/// aggregates them, splits the result into overlapping chunks, runs
/// a command over every chunk and joins the answers.
#[derive(Parser, Debug)]
#[command(name = "condense")]
#[command(version)]
#[command(about = "Chunk, transform and join text from mixed sources", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log pipeline progress to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline and print the joined output
    ///
    /// The transform command goes after `--` and is run once per
    /// chunk with the prompt on stdin:
    ///
    ///   condense run --posts posts.json -- llm -m my-model
    Run(commands::RunArgs),

    /// Show how a text file would be split into chunks
    Split(commands::SplitArgs),

    /// Rank scored records from a JSON or JSON Lines file
    Rank(commands::RankArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  condense completions bash > ~/.local/share/bash-completion/completions/condense
    ///   zsh:   condense completions zsh > ~/.zfunc/_condense
    ///   fish:  condense completions fish > ~/.config/fish/completions/condense.fish
    Completions(commands::CompletionsArgs),
}

/// Load configuration and dispatch to the selected command
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = cli.format;
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let xdg = XdgDirs::new();
    xdg.log_paths();
    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    match command {
        Commands::Run(args) => commands::run::execute(args, &config, format).await,
        Commands::Split(args) => commands::split::execute(args, &config, format).await,
        Commands::Rank(args) => commands::rank::execute(args, &config, format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &config, format).await,
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
