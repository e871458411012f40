//! Application model - the complete state of an editor session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod generation;

pub use generation::GenerationState;

use crate::config::EditorConfig;
use crate::document::{decode, encode, extract_messages, FlatDocument, Message};
use crate::editable::{Selection, StyledTextBuffer};
use crate::error::Result;
use crate::menu::ContextMenu;

/// The complete editor session model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Styled text owned by the editor surface
    pub buffer: StyledTextBuffer,
    /// Cursor (head) and selection anchor, in char offsets
    pub selection: Selection,
    /// Insert-role menu, present while shown
    pub menu: Option<ContextMenu>,
    /// Completion stream bookkeeping
    pub generation: GenerationState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl AppModel {
    /// Create an empty session
    pub fn new(config: EditorConfig) -> Self {
        Self {
            buffer: StyledTextBuffer::new(),
            selection: Selection::default(),
            menu: None,
            generation: GenerationState::new(),
            config,
        }
    }

    /// Create a session from a flat document, cursor at the end
    pub fn with_document(config: EditorConfig, document: &FlatDocument) -> Self {
        let buffer = decode(document);
        let end = buffer.len_chars();
        Self {
            buffer,
            selection: Selection::collapsed(end),
            ..Self::new(config)
        }
    }

    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    /// Move the cursor, collapsing the selection; clamped to the buffer
    pub fn set_cursor(&mut self, offset: usize) {
        self.selection = Selection::collapsed(offset.min(self.buffer.len_chars()));
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Encode the buffer for export
    pub fn export(&self) -> Result<FlatDocument> {
        encode(&self.buffer)
    }

    /// Messages the buffer currently represents
    pub fn messages(&self) -> Result<Vec<Message>> {
        Ok(extract_messages(&self.export()?))
    }

    /// The editor surface went away: drop the storage
    pub fn detach_surface(&mut self) {
        self.buffer.detach();
        self.selection = Selection::default();
        self.menu = None;
    }
}
