//! Attachments embedded in styled text, and the arena that owns them.
//!
//! An attachment occupies exactly one placeholder character in the text.
//! The character carries no data itself; the embed run at that position
//! holds an [`AttachmentId`] into the buffer's [`AttachmentArena`].

/// Placeholder character standing in for an attachment (OBJECT REPLACEMENT CHARACTER)
pub const PLACEHOLDER: char = '\u{FFFC}';

/// Marks a span as the start of a conversation turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAttachment {
    pub role: String,
}

impl RoleAttachment {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

impl Default for RoleAttachment {
    fn default() -> Self {
        Self::new("user")
    }
}

/// Carries an opaque content payload that is not rendered into the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleAttachment {
    pub content: String,
}

impl ArticleAttachment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Closed set of attachment variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Role(RoleAttachment),
    Article(ArticleAttachment),
}

impl Attachment {
    pub fn role(role: impl Into<String>) -> Self {
        Attachment::Role(RoleAttachment::new(role))
    }

    pub fn article(content: impl Into<String>) -> Self {
        Attachment::Article(ArticleAttachment::new(content))
    }

    /// Role label, if this attachment is role-carrying
    pub fn as_role(&self) -> Option<&str> {
        match self {
            Attachment::Role(r) => Some(&r.role),
            Attachment::Article(_) => None,
        }
    }

    /// Payload, if this attachment is content-carrying
    pub fn as_content(&self) -> Option<&str> {
        match self {
            Attachment::Article(a) => Some(&a.content),
            Attachment::Role(_) => None,
        }
    }
}

/// Handle to an attachment stored in an [`AttachmentArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(pub u32);

/// Slot storage for attachments. Freed slots are reused.
#[derive(Debug, Clone, Default)]
pub struct AttachmentArena {
    slots: Vec<Option<Attachment>>,
    free: Vec<u32>,
}

impl AttachmentArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attachment: Attachment) -> AttachmentId {
        if let Some(index) = self.free.pop() {
            self.slots[index as usize] = Some(attachment);
            return AttachmentId(index);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Some(attachment));
        AttachmentId(index)
    }

    pub fn get(&self, id: AttachmentId) -> Option<&Attachment> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn remove(&mut self, id: AttachmentId) -> Option<Attachment> {
        let removed = self.slots.get_mut(id.0 as usize).and_then(Option::take);
        if removed.is_some() {
            self.free.push(id.0);
        }
        removed
    }

    /// Number of live attachments
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
