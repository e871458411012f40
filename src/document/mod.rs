//! Flat document format, the codec to and from styled buffers, and
//! conversation extraction.
//!
//! The flat form is the single source of truth for persistence, export and
//! feeding a completion backend; the styled buffer only lives as long as the
//! editor session.

mod codec;
mod extract;
mod flat;

pub use codec::{decode, encode};
pub use extract::{extract_messages, ChatRole, Message};
pub use flat::{Attribute, AttributeKind, FlatDocument, KEY_ARTICLE, KEY_BOLD, KEY_ROLE};
