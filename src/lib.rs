//! Magic Editor - rich-text chat documents
//!
//! This crate provides the document model for an editor whose content mixes
//! prose with embedded role markers and bold runs, its conversion to and
//! from a flat serializable form, and the extraction of chat messages from
//! that form. Editing follows the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod editable;
pub mod error;
pub mod generation;
pub mod menu;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use document::{decode, encode, extract_messages, FlatDocument, Message};
pub use editable::StyledTextBuffer;
pub use error::EditorError;
pub use messages::Msg;
pub use model::AppModel;
