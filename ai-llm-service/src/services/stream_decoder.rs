//! Incremental decoder for Ollama's newline-delimited JSON stream.
//!
//! Network chunks do not align with lines, so bytes are buffered until a
//! `\n` arrives. Each complete line is decoded as a [`GenerateChunk`]:
//! `done = true` ends the stream, otherwise a non-empty `response` fragment is
//! appended to the answer.

use serde::Deserialize;

use crate::error_handler::{AiLlmError, Result};

/// One line of `/api/generate` output (only the fields we read).
#[derive(Debug, Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Accumulates streamed fragments into the final answer.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
    fragments: Vec<String>,
    done: bool,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once a line with `done: true` has been seen.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feeds raw bytes. Returns `Ok(true)` when the stream signalled completion
    /// and the caller should stop reading.
    ///
    /// Bytes after the `done` line are ignored.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<bool> {
        if self.done {
            return Ok(true);
        }
        self.pending.extend_from_slice(bytes);

        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.consume_line(&line[..line.len() - 1])?;
            if self.done {
                self.pending.clear();
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Flushes a trailing line without newline and returns the joined, trimmed answer.
    pub fn finish(mut self) -> Result<String> {
        if !self.done && !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.consume_line(&rest)?;
        }
        Ok(self.fragments.concat().trim().to_string())
    }

    fn consume_line(&mut self, raw: &[u8]) -> Result<()> {
        let line = std::str::from_utf8(raw)
            .map_err(|e| AiLlmError::Decode(format!("stream line is not valid UTF-8: {e}")))?
            .trim();
        if line.is_empty() {
            return Ok(());
        }

        let chunk: GenerateChunk = serde_json::from_str(line)
            .map_err(|e| AiLlmError::Decode(format!("{e}; line: {}", preview(line))))?;

        if let Some(err) = chunk.error {
            return Err(AiLlmError::Upstream(err));
        }
        if chunk.done {
            self.done = true;
            return Ok(());
        }
        if let Some(fragment) = chunk.response {
            if !fragment.is_empty() {
                self.fragments.push(fragment);
            }
        }
        Ok(())
    }
}

fn preview(line: &str) -> String {
    line.chars().take(80).collect()
}
