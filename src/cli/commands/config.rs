//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Print the configuration as TOML
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = XdgDirs::new().config_file().to_string_lossy().into_owned();

    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {config_file}");
            println!("  chunking:");
            println!("    max_chunk_size: {}", config.chunking.max_chunk_size);
            println!("    overlap: {}", config.chunking.overlap);
            println!("    boundary_window: {}", config.chunking.boundary_window);
            println!("  ranking:");
            println!("    limit: {}", config.ranking.limit);
            println!(
                "    exclude_derivative: {}",
                config.ranking.exclude_derivative
            );
            println!("  aggregation:");
            println!("    separator: {:?}", config.aggregation.separator.as_str());
            println!("  processing:");
            println!("    concurrency: {}", config.processing.concurrency);
            println!("    join_separator: {:?}", config.processing.join_separator);
            println!("  transform:");
            match &config.transform.command {
                Some(command) => println!("    command: {command:?}"),
                None => println!("    command: (none)"),
            }
            println!("    output_kind: {}", config.transform.output_kind);
        }
        OutputFormat::Json => {
            let response = ConfigResponse {
                config_file,
                config,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
