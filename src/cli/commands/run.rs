//! Run command - the full rank/aggregate/split/transform/join pipeline

use crate::cli::output::{stats_line, warn};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::CondenseError;
use crate::core::pipeline::{Pipeline, PipelineOptions};
use crate::core::processor::Transform;
use crate::core::prompt::{OutputKind, PromptContext};
use crate::sources::{load_inputs, SourcePaths};
use crate::transform::{CommandTransform, EchoTransform, PromptedTransform};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Posts as a JSON array or JSON Lines file
    #[arg(long)]
    pub posts: Option<PathBuf>,

    /// Web page text file
    #[arg(long)]
    pub web: Option<PathBuf>,

    /// Transcript (plain text, or JSON array of segments)
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Comments as a JSON array or JSON Lines file
    #[arg(long)]
    pub comments: Option<PathBuf>,

    /// Shape of the output (email, presentation, report)
    #[arg(long, short = 'k')]
    pub output_kind: Option<OutputKind>,

    /// Name of the person or channel the text came from
    #[arg(long)]
    pub source_name: Option<String>,

    /// Recipient addressed by email output
    #[arg(long)]
    pub recipient_name: Option<String>,

    /// Override max chunk size (characters)
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Override overlap (characters)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Override the number of items kept per source
    #[arg(long)]
    pub limit: Option<usize>,

    /// Override the number of transforms run at once
    #[arg(long, short = 'j')]
    pub concurrency: Option<usize>,

    /// Keep reposts and quotes
    #[arg(long)]
    pub include_derivative: bool,

    /// Send chunks without the output-kind instruction
    #[arg(long)]
    pub no_prompt: bool,

    /// Skip the transform and echo each chunk
    #[arg(long)]
    pub dry_run: bool,

    /// Transform command and arguments (after `--`)
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    /// Apply command-line overrides on top of the configuration
    pub fn options(&self, config: &Config) -> PipelineOptions {
        let mut options = config.pipeline_options();
        if let Some(size) = self.max_chunk_size {
            options.max_chunk_size = size;
        }
        if let Some(overlap) = self.overlap {
            options.overlap = overlap;
        }
        if let Some(limit) = self.limit {
            options.rank_limit = limit;
        }
        if let Some(concurrency) = self.concurrency {
            options.concurrency = concurrency;
        }
        if self.include_derivative {
            options.exclude_derivative = false;
        }
        options
    }

    /// Pick the transform: dry run, CLI command, or configured command
    pub fn transform(&self, config: &Config) -> crate::core::error::Result<Arc<dyn Transform>> {
        let base: Arc<dyn Transform> = if self.dry_run {
            return Ok(Arc::new(EchoTransform));
        } else if !self.command.is_empty() {
            Arc::new(CommandTransform::from_argv(&self.command)?)
        } else if let Some(argv) = &config.transform.command {
            Arc::new(CommandTransform::from_argv(argv)?)
        } else {
            return Err(CondenseError::ConfigError(
                "no transform command: pass one after `--`, set [transform].command, \
                 or use --dry-run"
                    .to_string(),
            ));
        };

        if self.no_prompt {
            return Ok(base);
        }

        let kind = self.output_kind.unwrap_or(config.transform.output_kind);
        let context = PromptContext {
            source_name: self
                .source_name
                .clone()
                .unwrap_or_else(|| "the source".to_string()),
            recipient_name: self.recipient_name.clone().unwrap_or_default(),
        };
        if kind.needs_recipient() && context.recipient_name.is_empty() {
            warn("email output without --recipient-name");
        }

        Ok(Arc::new(PromptedTransform::new(kind, &context, base)))
    }
}

/// Execute the run command
pub async fn execute(
    args: RunArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parameters and transform are checked before any source is read
    let pipeline = Pipeline::new(args.options(config))?;
    let transform = args.transform(config)?;

    let inputs = load_inputs(&SourcePaths {
        posts: args.posts.as_deref(),
        web: args.web.as_deref(),
        transcript: args.transcript.as_deref(),
        comments: args.comments.as_deref(),
    })?;

    let output = pipeline.run(inputs, transform).await?;

    match format {
        OutputFormat::Human => {
            println!("{}", output.text);
            eprintln!("{}", stats_line(&output.stats));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
