//! Conversation extraction: partition a flat document into chat messages
//! at role marker boundaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::flat::{AttributeKind, FlatDocument};
use crate::error::EditorError;

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// The role as a known chat role, if it is one
    pub fn chat_role(&self) -> Option<ChatRole> {
        self.role.parse().ok()
    }
}

/// Roles a chat completion backend understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl FromStr for ChatRole {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ChatRole::System),
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(EditorError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the ordered message list from role records.
///
/// Each role record opens a turn whose content runs from just after its
/// placeholder up to the next role record (or the end of the text), trimmed
/// of surrounding whitespace. Records are ordered by location with a stable
/// sort. Role labels pass through unchanged, known or not. A document with
/// no role records yields no messages.
pub fn extract_messages(document: &FlatDocument) -> Vec<Message> {
    let mut roles: Vec<_> = document
        .attributes
        .iter()
        .filter(|attr| attr.kind() == AttributeKind::Role)
        .collect();
    roles.sort_by_key(|attr| attr.location);

    if roles.is_empty() {
        return Vec::new();
    }

    // Char offset -> byte offset, with one extra entry for the end of text
    let boundaries: Vec<usize> = document
        .text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(document.text.len()))
        .collect();
    let text_len = boundaries.len() - 1;
    let byte_at = |char_offset: usize| boundaries[char_offset.min(text_len)];

    let mut messages = Vec::with_capacity(roles.len());
    for (i, attr) in roles.iter().enumerate() {
        let content_start = attr.end().min(text_len);
        let content_end = roles
            .get(i + 1)
            .map_or(text_len, |next| next.location.min(text_len));

        let content = if content_start < content_end {
            document.text[byte_at(content_start)..byte_at(content_end)].trim()
        } else {
            ""
        };

        if attr.value.parse::<ChatRole>().is_err() {
            tracing::debug!(role = %attr.value, "passing through unknown role");
        }
        messages.push(Message::new(attr.value.as_str(), content));
    }
    messages
}
