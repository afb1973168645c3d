//! Terminal rendering for the human output format
//!
//! Colors honour NO_COLOR through `colored`. Warnings and errors go to
//! stderr.

use crate::core::types::RunStats;
use colored::{ColoredString, Colorize};

/// Color roles used across commands
pub mod colors {
    use super::*;

    pub fn path(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Counts and sizes
    pub fn count(n: usize) -> ColoredString {
        n.to_string().yellow()
    }

    /// Chunk index or rank position
    pub fn position(n: usize) -> ColoredString {
        format!("#{n}").green().bold()
    }

    pub fn score(score: f64) -> ColoredString {
        format!("{score:>9.1}").magenta()
    }

    pub fn muted(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Render elapsed milliseconds as `850ms`, `2.40s` or `3m 07s`
pub fn elapsed(ms: u64) -> String {
    match ms {
        0..=999 => format!("{ms}ms"),
        1_000..=59_999 => format!("{:.2}s", ms as f64 / 1000.0),
        _ => {
            let secs = ms / 1000;
            format!("{}m {:02}s", secs / 60, secs % 60)
        }
    }
}

/// One-line summary of a pipeline run
pub fn stats_line(stats: &RunStats) -> String {
    format!(
        "{} kept {}/{} items, {} chars in {} chunk(s), {}",
        colors::muted("condense:"),
        colors::count(stats.items_kept),
        colors::count(stats.items_received),
        colors::count(stats.corpus_chars),
        colors::count(stats.chunks),
        elapsed(stats.duration_ms).yellow()
    )
}

/// Flatten whitespace and cut to `max_chars` characters, ending in `…`
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn warn(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

pub fn fail(message: &str) {
    eprintln!("{} {message}", "Error:".red().bold());
}
