//! Output kinds and their instruction templates.
//!
//! Each kind maps to one template with `{source_name}` and
//! `{recipient_name}` placeholders. The rendered instruction is
//! placed in front of every chunk before it is transformed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the requested output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Email,
    Presentation,
    #[default]
    Report,
}

impl OutputKind {
    pub const ALL: [OutputKind; 3] = [
        OutputKind::Email,
        OutputKind::Presentation,
        OutputKind::Report,
    ];

    fn template(self) -> &'static str {
        match self {
            OutputKind::Email => {
                "Your task is to compose an email to {recipient_name}, summarizing the main \
                 points and takeaways of your conversation with {source_name}. Use a \
                 professional and concise tone."
            }
            OutputKind::Presentation => {
                "Your task is to compose a presentation script summarizing the main points \
                 and takeaways of your conversation with {source_name}. Make sure it's \
                 engaging and clear for your audience."
            }
            OutputKind::Report => {
                "Your task is to write a report summarizing the main points and takeaways \
                 of your conversation with {source_name}. Use a formal and detailed tone."
            }
        }
    }

    /// Whether the template addresses a recipient
    pub fn needs_recipient(self) -> bool {
        matches!(self, OutputKind::Email)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputKind::Email => "email",
            OutputKind::Presentation => "presentation",
            OutputKind::Report => "report",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "email" => Ok(OutputKind::Email),
            "presentation" => Ok(OutputKind::Presentation),
            "report" => Ok(OutputKind::Report),
            other => Err(format!(
                "unknown output kind '{other}' (expected email, presentation or report)"
            )),
        }
    }
}

/// Names substituted into a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    pub source_name: String,
    pub recipient_name: String,
}

/// Render the instruction for `kind`
pub fn render_instruction(kind: OutputKind, context: &PromptContext) -> String {
    kind.template()
        .replace("{source_name}", &context.source_name)
        .replace("{recipient_name}", &context.recipient_name)
}

/// Place `instruction` ahead of a chunk's text
pub fn compose(instruction: &str, chunk_text: &str) -> String {
    format!("{instruction}\n\n{chunk_text}")
}
