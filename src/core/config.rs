//! Configuration management for condense.
//!
//! Settings come from a TOML file, then `CONDENSE_*` environment
//! overrides, with defaults for everything. Only the CLI adapter loads
//! configuration; pipeline stages take their parameters explicitly
//! through [`PipelineOptions`].

use crate::core::aggregator::SeparatorPolicy;
use crate::core::error::{CondenseError, Result};
use crate::core::joiner::DEFAULT_JOIN_SEPARATOR;
use crate::core::pipeline::PipelineOptions;
use crate::core::prompt::OutputKind;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub transform: TransformConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// How far back to look for a word break (0 disables; capped
    /// below `max_chunk_size` when splitting)
    #[serde(default = "default_boundary_window")]
    pub boundary_window: usize,
}

/// Ranking configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankingConfig {
    /// Keep at most this many items per source
    #[serde(default = "default_rank_limit")]
    pub limit: usize,

    /// Drop reposts and quotes
    #[serde(default = "default_exclude_derivative")]
    pub exclude_derivative: bool,
}

/// Aggregation configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub separator: SeparatorPolicy,
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProcessingConfig {
    /// Maximum transforms in flight
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Separator between chunk results
    #[serde(default = "default_join_separator")]
    pub join_separator: String,
}

/// Transform provider configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransformConfig {
    /// Program and arguments run once per chunk
    #[serde(default)]
    pub command: Option<Vec<String>>,

    #[serde(default)]
    pub output_kind: OutputKind,
}

// Default value functions
fn default_max_chunk_size() -> usize {
    20_000
}

fn default_overlap() -> usize {
    2_000
}

fn default_boundary_window() -> usize {
    200
}

fn default_rank_limit() -> usize {
    80
}

fn default_exclude_derivative() -> bool {
    true
}

fn default_concurrency() -> usize {
    4
}

fn default_join_separator() -> String {
    DEFAULT_JOIN_SEPARATOR.to_string()
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: default_max_chunk_size(),
            overlap: default_overlap(),
            boundary_window: default_boundary_window(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: default_rank_limit(),
            exclude_derivative: default_exclude_derivative(),
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            join_separator: default_join_separator(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CondenseError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. CONDENSE_CONFIG env var
    /// 2. XDG config file (~/.config/condense/config.toml)
    /// 3. ./condense.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CONDENSE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("condense.toml").exists() {
                Self::from_file("condense.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Apply `CONDENSE_*` overrides; unparsable values are ignored
    pub fn merge_env(&mut self) {
        env_override("CONDENSE_MAX_CHUNK_SIZE", &mut self.chunking.max_chunk_size);
        env_override("CONDENSE_OVERLAP", &mut self.chunking.overlap);
        env_override("CONDENSE_BOUNDARY_WINDOW", &mut self.chunking.boundary_window);
        env_override("CONDENSE_RANK_LIMIT", &mut self.ranking.limit);
        env_override("CONDENSE_CONCURRENCY", &mut self.processing.concurrency);
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_chunk_size == 0 {
            return Err(CondenseError::ConfigError(
                "Max chunk size must be non-zero".to_string(),
            ));
        }

        if self.chunking.overlap >= self.chunking.max_chunk_size {
            return Err(CondenseError::ConfigError(
                "Overlap must be less than max chunk size".to_string(),
            ));
        }

        if self.processing.concurrency == 0 {
            return Err(CondenseError::ConfigError(
                "Concurrency must be non-zero".to_string(),
            ));
        }

        if let Some(command) = &self.transform.command {
            if command.is_empty() {
                return Err(CondenseError::ConfigError(
                    "Transform command must name a program".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Stage parameters derived from this configuration
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            max_chunk_size: self.chunking.max_chunk_size,
            overlap: self.chunking.overlap,
            boundary_window: self.chunking.boundary_window,
            rank_limit: self.ranking.limit,
            exclude_derivative: self.ranking.exclude_derivative,
            separator: self.aggregation.separator.clone(),
            join_separator: self.processing.join_separator.clone(),
            concurrency: self.processing.concurrency,
        }
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max chunk size: {} chars", self.chunking.max_chunk_size);
        tracing::info!("  Overlap: {} chars", self.chunking.overlap);
        tracing::info!("  Boundary window: {} chars", self.chunking.boundary_window);
        tracing::info!("  Rank limit: {}", self.ranking.limit);
        tracing::info!("  Exclude derivative: {}", self.ranking.exclude_derivative);
        tracing::info!("  Separator: {:?}", self.aggregation.separator.as_str());
        tracing::info!("  Concurrency: {}", self.processing.concurrency);
        tracing::info!("  Join separator: {:?}", self.processing.join_separator);
        tracing::info!(
            "  Transform command: {}",
            self.transform
                .command
                .as_ref()
                .map(|c| c.join(" "))
                .unwrap_or_else(|| "(none)".to_string())
        );
        tracing::info!("  Output kind: {}", self.transform.output_kind);
    }
}

fn env_override<T: FromStr>(name: &str, field: &mut T) {
    let Ok(raw) = env::var(name) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *field = value,
        Err(_) => tracing::warn!("Ignoring {}={:?}: not a valid value", name, raw),
    }
}
