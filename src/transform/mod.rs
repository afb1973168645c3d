//! Transform providers
//!
//! Implementations of [`Transform`] that the CLI plugs into the
//! pipeline. Each chunk can be wrapped with an output-kind
//! instruction before it reaches the underlying provider.

pub mod command;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::TransformError;
use crate::core::processor::Transform;
use crate::core::prompt::{compose, render_instruction, OutputKind, PromptContext};

pub use command::CommandTransform;

/// Returns each chunk unchanged (dry runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTransform;

#[async_trait]
impl Transform for EchoTransform {
    async fn apply(&self, text: &str) -> std::result::Result<String, TransformError> {
        Ok(text.to_string())
    }
}

/// Prefixes every chunk with a rendered instruction
pub struct PromptedTransform {
    instruction: String,
    inner: Arc<dyn Transform>,
}

impl PromptedTransform {
    pub fn new(kind: OutputKind, context: &PromptContext, inner: Arc<dyn Transform>) -> Self {
        Self {
            instruction: render_instruction(kind, context),
            inner,
        }
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

#[async_trait]
impl Transform for PromptedTransform {
    async fn apply(&self, text: &str) -> std::result::Result<String, TransformError> {
        let prompt = compose(&self.instruction, text);
        self.inner.apply(&prompt).await
    }
}
