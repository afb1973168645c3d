//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod completions;
pub mod config;
pub mod rank;
pub mod run;
pub mod split;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use rank::RankArgs;
pub use run::RunArgs;
pub use split::SplitArgs;
