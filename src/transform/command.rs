//! External command transform.
//!
//! Runs a program once per chunk: the chunk (or prompt) is written
//! to the child's stdin and its stdout becomes the result. Any
//! language-generation CLI that reads stdin can be plugged in this
//! way. Failures are reported, never retried.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::core::error::{CondenseError, Result, TransformError};
use crate::core::processor::Transform;

/// Transform backed by an external program
#[derive(Debug, Clone)]
pub struct CommandTransform {
    program: String,
    args: Vec<String>,
}

impl CommandTransform {
    /// Build from an argv list (program first)
    ///
    /// # Errors
    ///
    /// Returns [`CondenseError::ConfigError`] for an empty list.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            CondenseError::ConfigError("Transform command must name a program".to_string())
        })?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl Transform for CommandTransform {
    async fn apply(&self, text: &str) -> std::result::Result<String, TransformError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| TransformError::new(format!("failed to start {}: {e}", self.program)))?;

        // Feed stdin from a separate task so a chatty child cannot
        // fill its stdout pipe while we are still writing
        let writer = child.stdin.take().map(|mut stdin| {
            let bytes = text.as_bytes().to_vec();
            tokio::spawn(async move {
                stdin.write_all(&bytes).await
                // stdin dropped here: the child sees EOF
            })
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| TransformError::new(format!("failed to wait for {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TransformError::new(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        if let Some(writer) = writer {
            match writer.await {
                Ok(Ok(())) => {}
                // Exited successfully without reading all of its input
                Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    tracing::debug!("{} closed stdin early", self.program);
                }
                Ok(Err(e)) => {
                    return Err(TransformError::new(format!("failed to write stdin: {e}")))
                }
                Err(e) => return Err(TransformError::new(format!("stdin writer failed: {e}"))),
            }
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| TransformError::new(format!("{} wrote non-UTF-8 output", self.program)))?;

        Ok(stdout.trim_end().to_string())
    }
}
