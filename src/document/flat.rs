//! FlatDocument: the serializable text + attributes form.
//!
//! Wire shape (JSON):
//!
//! ```json
//! { "text": "￼Hi", "attributes": [
//!     { "key": "Attachment.Role", "value": "user", "location": 0, "length": 1 } ] }
//! ```
//!
//! `location` and `length` count Unicode scalar values, not bytes or UTF-16 units.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Attribute key for role marker embeds
pub const KEY_ROLE: &str = "Attachment.Role";
/// Attribute key for article (content blob) embeds
pub const KEY_ARTICLE: &str = "Attachment.Article";
/// Attribute key for bold formatting
pub const KEY_BOLD: &str = "Font.Bold";

/// Recognized attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Role,
    Article,
    Bold,
    /// Forward-compatible: consumers treat it as a no-op
    Unknown,
}

impl AttributeKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            KEY_ROLE => AttributeKind::Role,
            KEY_ARTICLE => AttributeKind::Article,
            KEY_BOLD => AttributeKind::Bold,
            _ => AttributeKind::Unknown,
        }
    }

    /// Embeds always cover exactly one placeholder character
    pub fn is_embed(self) -> bool {
        matches!(self, AttributeKind::Role | AttributeKind::Article)
    }
}

/// One position-tagged attribute record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
    pub location: usize,
    pub length: usize,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>, location: usize, length: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            location,
            length,
        }
    }

    pub fn role(role: impl Into<String>, location: usize) -> Self {
        Self::new(KEY_ROLE, role, location, 1)
    }

    pub fn article(content: impl Into<String>, location: usize) -> Self {
        Self::new(KEY_ARTICLE, content, location, 1)
    }

    pub fn bold(location: usize, length: usize) -> Self {
        Self::new(KEY_BOLD, "", location, length)
    }

    pub fn kind(&self) -> AttributeKind {
        AttributeKind::from_key(&self.key)
    }

    /// Exclusive end offset, saturating on overflow
    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Check the record against a text of `text_len` characters
    pub fn check_bounds(&self, text_len: usize) -> Result<()> {
        let in_bounds = self.location.checked_add(self.length).is_some_and(|end| end <= text_len);
        let embed_width_ok = !self.kind().is_embed() || self.length == 1;
        if in_bounds && embed_width_ok {
            Ok(())
        } else {
            Err(EditorError::MalformedRange {
                key: self.key.clone(),
                location: self.location,
                length: self.length,
                text_len,
            })
        }
    }
}

/// Serializable document: text plus attribute records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatDocument {
    pub text: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl FlatDocument {
    pub fn new(text: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// Length of `text` in Unicode scalar values
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Every attribute record that falls outside `text`, or is an embed
    /// wider than one character, as a `MalformedRange` error
    pub fn validate(&self) -> Vec<EditorError> {
        let text_len = self.len_chars();
        self.attributes
            .iter()
            .filter_map(|attr| attr.check_bounds(text_len).err())
            .collect()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
