//! File-backed source providers.
//!
//! Turns exported data on disk into pipeline inputs:
//!
//! - posts/comments: JSON array or JSON Lines of records
//! - web pages: plain text, used verbatim
//! - transcripts: plain text, or a JSON array of segments joined
//!   with single spaces
//!
//! Post records accept the field names common in social-media
//! exports (`full_text`, `likes`, `favorite_count`), and a record
//! carrying `retweeted_status` or `quoted_status` is derivative.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::core::aggregator::SourceKind;
use crate::core::error::{CondenseError, Result};
use crate::core::pipeline::SourceInput;
use crate::core::types::SourceItem;

const TEXT_FIELDS: [&str; 2] = ["text", "full_text"];
const SCORE_FIELDS: [&str; 3] = ["score", "likes", "favorite_count"];
const DERIVATIVE_FIELDS: [&str; 2] = ["derivative", "is_derivative"];
const DERIVATIVE_MARKERS: [&str; 2] = ["retweeted_status", "quoted_status"];

/// Load scored records from a JSON or JSON Lines file
pub fn load_items(path: &Path) -> Result<Vec<SourceItem>> {
    let contents = read(path)?;
    let items = parse_items(&contents)?;
    tracing::debug!("Loaded {} records from {:?}", items.len(), path);
    Ok(items)
}

/// Parse records from a JSON array or from JSON Lines.
///
/// # Errors
///
/// Returns [`CondenseError::Validation`] naming the record index if
/// a record lacks text, lacks a score, or has a non-numeric score.
pub fn parse_items(contents: &str) -> Result<Vec<SourceItem>> {
    let trimmed = contents.trim_start();
    let records: Vec<Value> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        trimmed
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<std::result::Result<_, _>>()?
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_item(index, record))
        .collect()
}

fn parse_item(index: usize, record: &Value) -> Result<SourceItem> {
    let Some(fields) = record.as_object() else {
        return Err(CondenseError::validation(index, "record must be a JSON object"));
    };

    let text = first_present(fields, &TEXT_FIELDS)
        .ok_or_else(|| CondenseError::validation(index, "missing text"))?
        .as_str()
        .ok_or_else(|| CondenseError::validation(index, "text must be a string"))?
        .to_string();

    let score = first_present(fields, &SCORE_FIELDS)
        .ok_or_else(|| CondenseError::validation(index, "missing score"))?
        .as_f64()
        .ok_or_else(|| CondenseError::validation(index, "score must be numeric"))?;

    let flagged = match first_present(fields, &DERIVATIVE_FIELDS) {
        None => false,
        Some(flag) => flag
            .as_bool()
            .ok_or_else(|| CondenseError::validation(index, "derivative flag must be a boolean"))?,
    };
    let marked = DERIVATIVE_MARKERS
        .iter()
        .any(|key| fields.get(*key).is_some_and(|v| !v.is_null()));

    Ok(SourceItem {
        text,
        score,
        is_derivative: flagged || marked,
    })
}

/// First non-null value among `keys`, in alias order
fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
}

/// Read a plain text source verbatim
pub fn load_text(path: &Path) -> Result<String> {
    read(path)
}

/// Load a transcript: plain text, or a JSON array of segments
pub fn load_transcript(path: &Path) -> Result<String> {
    let contents = read(path)?;
    parse_transcript(&contents)
}

/// Parse transcript contents.
///
/// A JSON array of strings, or of objects with a `text` field, is
/// joined with single spaces; anything else is used as-is.
pub fn parse_transcript(contents: &str) -> Result<String> {
    if !contents.trim_start().starts_with('[') {
        return Ok(contents.to_string());
    }

    let segments: Vec<Value> = serde_json::from_str(contents.trim())?;
    let texts = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            segment
                .as_str()
                .or_else(|| segment.get("text").and_then(Value::as_str))
                .ok_or_else(|| {
                    CondenseError::SourceError(format!(
                        "transcript segment {index} has no text"
                    ))
                })
        })
        .collect::<Result<Vec<&str>>>()?;

    Ok(join_segments(&texts))
}

/// Join transcript segments with single spaces
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paths of the sources for one run
#[derive(Debug, Clone, Default)]
pub struct SourcePaths<'a> {
    pub posts: Option<&'a Path>,
    pub web: Option<&'a Path>,
    pub transcript: Option<&'a Path>,
    pub comments: Option<&'a Path>,
}

/// Load every given source into pipeline inputs
pub fn load_inputs(paths: &SourcePaths<'_>) -> Result<Vec<SourceInput>> {
    let mut inputs = Vec::new();

    if let Some(path) = paths.posts {
        inputs.push(SourceInput::Items {
            kind: SourceKind::Social,
            items: load_items(path)?,
        });
    }
    if let Some(path) = paths.web {
        inputs.push(SourceInput::Text {
            kind: SourceKind::Web,
            text: load_text(path)?,
        });
    }
    if let Some(path) = paths.transcript {
        inputs.push(SourceInput::Text {
            kind: SourceKind::Transcript,
            text: load_transcript(path)?,
        });
    }
    if let Some(path) = paths.comments {
        inputs.push(SourceInput::Items {
            kind: SourceKind::Comments,
            items: load_items(path)?,
        });
    }

    if inputs.is_empty() {
        return Err(CondenseError::SourceError(
            "no sources given (use --posts, --web, --transcript or --comments)".to_string(),
        ));
    }

    Ok(inputs)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            CondenseError::SourceError(format!("Not valid UTF-8: {path:?}"))
        } else {
            CondenseError::SourceError(format!("Failed to read {path:?}: {e}"))
        }
    })
}
