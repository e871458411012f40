//! Boundary to the external completion backend.
//!
//! The backend itself (HTTP client, model loading) lives outside this
//! crate behind [`CompletionClient`]. This module builds requests, drives a
//! stream to completion or cancellation, and normalises chunks to deltas.

mod delta;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::document::Message;
use crate::error::{EditorError, Result};

pub use delta::DeltaTracker;

/// Chat completion request handed to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(config: &EditorConfig, messages: Vec<Message>) -> Self {
        Self {
            model: config.model.clone(),
            messages,
            max_tokens: config.max_tokens,
        }
    }
}

/// How a backend reports reply text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChunkMode {
    /// Each chunk is new text only
    #[default]
    Delta,
    /// Each chunk is the whole reply so far
    Cumulative,
}

/// A streaming chat completion backend
pub trait CompletionClient: Send + Sync {
    fn chunk_mode(&self) -> ChunkMode {
        ChunkMode::Delta
    }

    /// Stream a reply, calling `on_chunk` for every chunk in arrival order.
    /// `on_chunk` returns `false` to ask the backend to stop early.
    fn stream_chat(
        &self,
        request: &ChatRequest,
        on_chunk: &mut dyn FnMut(&str) -> bool,
    ) -> std::result::Result<(), String>;
}

/// Shared flag used to cancel an in-flight stream
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Drive one stream, forwarding each non-empty delta to `emit`.
///
/// Stops forwarding as soon as `cancel` is set; a cancelled or failed stream
/// is reported as `StreamFailure`. Deltas already emitted stay emitted.
pub fn run_stream(
    client: &dyn CompletionClient,
    request: &ChatRequest,
    cancel: &CancelToken,
    mut emit: impl FnMut(String),
) -> Result<()> {
    let mut tracker = DeltaTracker::new();
    let mode = client.chunk_mode();

    let outcome = client.stream_chat(request, &mut |chunk| {
        if cancel.is_cancelled() {
            return false;
        }
        let delta = match mode {
            ChunkMode::Delta => chunk.to_string(),
            ChunkMode::Cumulative => tracker.delta(chunk),
        };
        if !delta.is_empty() {
            emit(delta);
        }
        true
    });

    if cancel.is_cancelled() {
        return Err(EditorError::StreamFailure("cancelled".to_string()));
    }
    outcome.map_err(EditorError::StreamFailure)
}
