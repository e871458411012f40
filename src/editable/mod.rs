//! Styled text editing: the in-memory buffer behind the editor surface.
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: traits abstracting character storage
//! - [`RopeBuffer`]: storage backed by `ropey::Rope`, char-indexed
//! - [`FormatRanges`] / [`EmbedMap`]: the two run kinds (bold, embeds)
//! - [`segment`]: partitions text into maximal runs of constant attributes
//! - [`Attachment`] / [`AttachmentArena`]: embedded objects, owned by id
//! - [`StyledTextBuffer`]: the façade the codec and the update loop use
//!
//! # Example
//!
//! ```ignore
//! use magic_editor::editable::{Attachment, StyledTextBuffer};
//!
//! let mut buffer = StyledTextBuffer::new();
//! buffer.append_attachment(Attachment::role("user"))?;
//! buffer.append_plain("Hi")?;
//!
//! assert_eq!(buffer.text()?, "\u{FFFC}Hi");
//! ```

mod attachment;
mod buffer;
mod runs;
mod selection;
mod styled;

pub use attachment::{
    ArticleAttachment, Attachment, AttachmentArena, AttachmentId, RoleAttachment, PLACEHOLDER,
};
pub use buffer::{RopeBuffer, TextBuffer, TextBufferMut};
pub use runs::{segment, EmbedMap, FormatRanges, Run, RunStyle};
pub use selection::Selection;
pub use styled::{SpanKind, StyledSpan, StyledTextBuffer};
