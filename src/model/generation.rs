//! Bookkeeping for the completion stream owned by the editor session.

use crate::error::EditorError;

/// Which generation (if any) may write into the buffer
#[derive(Debug, Clone, Default)]
pub struct GenerationState {
    next_id: u64,
    /// Id of the stream whose deltas are applied; everything else is stale
    pub active: Option<u64>,
    /// Most recent stream failure, surfaced to the caller
    pub last_error: Option<EditorError>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for a new stream and make it the active one
    pub fn begin(&mut self) -> u64 {
        self.next_id += 1;
        self.active = Some(self.next_id);
        self.last_error = None;
        self.next_id
    }

    pub fn is_active(&self, generation_id: u64) -> bool {
        self.active == Some(generation_id)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Clear the active stream, returning its id
    pub fn end(&mut self) -> Option<u64> {
        self.active.take()
    }
}
