//! Text aggregation.
//!
//! Joins ranked fragments from one or more sources into a single
//! corpus. When several sources are combined they are always laid
//! out in [`SourceKind`] priority order, so the same inputs build
//! the same corpus no matter what order the caller collected them in.

use crate::core::types::{Corpus, SourceItem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between fragments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorPolicy {
    /// Blank line between fragments
    #[default]
    Paragraph,

    /// Blank line, horizontal rule, blank line
    Rule,

    /// Caller-supplied separator
    Custom(String),
}

impl SeparatorPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            SeparatorPolicy::Paragraph => "\n\n",
            SeparatorPolicy::Rule => "\n\n---\n\n",
            SeparatorPolicy::Custom(sep) => sep,
        }
    }
}

/// Kind of source a block of text came from.
///
/// Declaration order is aggregation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Social,
    Web,
    Transcript,
    Comments,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Social => "social",
            SourceKind::Web => "web",
            SourceKind::Transcript => "transcript",
            SourceKind::Comments => "comments",
        };
        f.write_str(name)
    }
}

/// Fragments from one source, already in their final order
#[derive(Debug, Clone, PartialEq)]
pub struct SourceText {
    pub kind: SourceKind,
    pub fragments: Vec<String>,
}

impl SourceText {
    pub fn new(kind: SourceKind, fragments: Vec<String>) -> Self {
        Self { kind, fragments }
    }

    /// A source that yields one raw string (web page, transcript)
    pub fn single(kind: SourceKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            fragments: vec![text.into()],
        }
    }

    /// Take the text of ranked items, keeping their order
    pub fn from_items(kind: SourceKind, items: Vec<SourceItem>) -> Self {
        Self {
            kind,
            fragments: items.into_iter().map(|item| item.text).collect(),
        }
    }
}

/// Joins fragments into a corpus.
#[derive(Debug, Clone, Default)]
pub struct TextAggregator {
    separator: SeparatorPolicy,
}

impl TextAggregator {
    pub fn new(separator: SeparatorPolicy) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> &SeparatorPolicy {
        &self.separator
    }

    /// Join fragments in the given order.
    ///
    /// An empty sequence yields an empty corpus.
    pub fn aggregate<S: AsRef<str>>(&self, fragments: &[S]) -> Corpus {
        aggregate(fragments, self.separator.as_str())
    }

    /// Join several sources in priority order.
    ///
    /// Sources of the same kind keep the order they were passed in.
    pub fn aggregate_sources(&self, mut sources: Vec<SourceText>) -> Corpus {
        sources.sort_by_key(|source| source.kind);

        let fragments: Vec<String> = sources
            .into_iter()
            .flat_map(|source| source.fragments)
            .collect();

        tracing::debug!(
            "Aggregating {} fragments with separator {:?}",
            fragments.len(),
            self.separator.as_str()
        );

        self.aggregate(&fragments)
    }
}

/// Join `fragments` with `separator`
pub fn aggregate<S: AsRef<str>>(fragments: &[S], separator: &str) -> Corpus {
    let mut corpus = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            corpus.push_str(separator);
        }
        corpus.push_str(fragment.as_ref());
    }
    Corpus::from(corpus)
}
