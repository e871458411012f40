//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::document::FlatDocument;
use crate::editable::Attachment;

/// Buffer editing messages
#[derive(Debug, Clone)]
pub enum EditMsg {
    /// Insert typed text at the cursor, replacing any selection
    InsertText(String),
    /// Embed an attachment at the cursor, replacing any selection
    InsertAttachment(Attachment),
    /// Delete the selection, or the character before the cursor (Backspace)
    DeleteBackward,
    /// Toggle bold over the selection
    ToggleBold,
    /// Move the cursor, collapsing the selection
    SetCursor(usize),
    /// Move the selection head, keeping the anchor (Shift+Click)
    ExtendSelection(usize),
    /// Select the whole buffer
    SelectAll,
    /// Replace the buffer with unstyled text
    LoadText(String),
    /// Replace the buffer with a decoded flat document
    LoadDocument(FlatDocument),
    /// The editor surface was torn down; storage is dropped
    Detach,
}

/// Insert-role context menu messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMsg {
    /// Populate the options from config and show the menu
    Open,
    /// Hide the menu without choosing anything
    Close,
    MoveUp,
    MoveDown,
    /// Highlight an option by index (mouse hover)
    Hover(usize),
    /// Run the highlighted option and close the menu
    Select,
}

/// Completion stream messages.
///
/// Stream events carry the id of the generation that produced them; events
/// from a generation that is no longer active are discarded.
#[derive(Debug, Clone)]
pub enum GenerationMsg {
    /// Export the buffer and start a completion, cancelling any running one
    Submit,
    /// Cancel the running completion
    Cancel,
    /// A reply fragment arrived
    Delta { generation_id: u64, text: String },
    /// The reply finished normally
    Finished { generation_id: u64 },
    /// The stream failed or was cancelled
    Failed { generation_id: u64, error: String },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Edit(EditMsg),
    Menu(MenuMsg),
    Generation(GenerationMsg),
}
