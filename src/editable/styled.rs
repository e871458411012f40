//! The styled text buffer: characters plus bold formatting and embeds.
//!
//! The buffer may be detached from its storage (the editor surface is gone
//! or was never attached). Every operation on a detached buffer fails with
//! [`EditorError::NoBuffer`] instead of panicking.
//!
//! Invariants maintained by every mutation:
//! - each embed covers exactly one placeholder character
//! - bold ranges are sorted, disjoint and never cover an embed
//! - all ranges lie within `0..len_chars()`

use std::ops::Range;

use super::attachment::{Attachment, AttachmentArena, AttachmentId, PLACEHOLDER};
use super::buffer::{RopeBuffer, TextBuffer, TextBufferMut};
use super::runs::{segment, EmbedMap, FormatRanges, Run, RunStyle};
use crate::error::{EditorError, Result};

/// Typed view of one run with its attachment resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind<'a> {
    Plain,
    Bold,
    Role(&'a str),
    Article(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan<'a> {
    pub range: Range<usize>,
    pub kind: SpanKind<'a>,
}

#[derive(Debug, Clone, Default)]
struct Storage {
    text: RopeBuffer,
    bold: FormatRanges,
    embeds: EmbedMap,
    arena: AttachmentArena,
}

impl Storage {
    fn len(&self) -> usize {
        self.text.len_chars()
    }

    fn insert_plain(&mut self, offset: usize, text: &str) -> usize {
        let offset = offset.min(self.len());
        let count = text.chars().count();
        if count == 0 {
            return 0;
        }
        self.text.insert(offset, text);
        self.bold.shift_for_insert(offset, count);
        self.embeds.shift_for_insert(offset, count);
        count
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len());
        let end = range.end.min(self.len());
        if start >= end {
            return;
        }
        self.text.remove(start..end);
        self.bold.shift_for_remove(start..end);
        for id in self.embeds.shift_for_remove(start..end) {
            self.arena.remove(id);
        }
    }

    fn is_text_at(&self, offset: usize) -> bool {
        offset < self.len() && self.embeds.get(offset).is_none()
    }
}

/// Characters plus formatting and embed runs, owned by one editor surface
#[derive(Debug, Clone)]
pub struct StyledTextBuffer {
    storage: Option<Storage>,
}

impl Default for StyledTextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledTextBuffer {
    /// Create an empty buffer with storage attached
    pub fn new() -> Self {
        Self {
            storage: Some(Storage::default()),
        }
    }

    /// Create a buffer holding `text` with no styling
    pub fn from_text(text: &str) -> Self {
        Self {
            storage: Some(Storage {
                text: RopeBuffer::from_text(text),
                ..Storage::default()
            }),
        }
    }

    /// Create a buffer with no storage attached
    pub fn detached() -> Self {
        Self { storage: None }
    }

    pub fn is_attached(&self) -> bool {
        self.storage.is_some()
    }

    /// Attach empty storage if none is attached
    pub fn attach(&mut self) {
        if self.storage.is_none() {
            self.storage = Some(Storage::default());
        }
    }

    /// Drop the storage and everything in it
    pub fn detach(&mut self) {
        self.storage = None;
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage.as_ref().ok_or(EditorError::NoBuffer)
    }

    fn storage_mut(&mut self) -> Result<&mut Storage> {
        self.storage.as_mut().ok_or(EditorError::NoBuffer)
    }

    /// Length in characters (0 when detached)
    pub fn len_chars(&self) -> usize {
        self.storage.as_ref().map_or(0, Storage::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    pub fn text(&self) -> Result<String> {
        Ok(self.storage()?.text.content())
    }

    pub fn slice(&self, range: Range<usize>) -> Result<String> {
        Ok(self.storage()?.text.slice(range))
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.storage.as_ref()?.text.char_at(offset)
    }

    pub fn is_bold(&self, offset: usize) -> bool {
        self.storage
            .as_ref()
            .is_some_and(|s| s.is_text_at(offset) && s.bold.contains(offset))
    }

    pub fn bold_ranges(&self) -> &[Range<usize>] {
        self.storage.as_ref().map_or(&[][..], |s| s.bold.ranges())
    }

    pub fn attachment(&self, id: AttachmentId) -> Option<&Attachment> {
        self.storage.as_ref()?.arena.get(id)
    }

    pub fn attachment_at(&self, offset: usize) -> Option<&Attachment> {
        let storage = self.storage.as_ref()?;
        storage.arena.get(storage.embeds.get(offset)?)
    }

    /// Embedded attachments in offset order
    pub fn attachments(&self) -> Vec<(usize, &Attachment)> {
        let Some(storage) = self.storage.as_ref() else {
            return Vec::new();
        };
        storage
            .embeds
            .iter()
            .filter_map(|(at, id)| storage.arena.get(id).map(|a| (at, a)))
            .collect()
    }

    /// Maximal runs of constant attribute set, left to right
    pub fn runs(&self) -> Result<Vec<Run>> {
        let storage = self.storage()?;
        Ok(segment(storage.len(), &storage.bold, &storage.embeds))
    }

    /// Runs with attachments resolved into a closed set of span kinds
    pub fn spans(&self) -> Result<Vec<StyledSpan<'_>>> {
        let storage = self.storage()?;
        let runs = segment(storage.len(), &storage.bold, &storage.embeds);
        let mut spans = Vec::with_capacity(runs.len());
        for run in runs {
            let kind = match run.style {
                RunStyle::Plain => SpanKind::Plain,
                RunStyle::Bold => SpanKind::Bold,
                RunStyle::Embed(id) => match storage.arena.get(id) {
                    Some(Attachment::Role(r)) => SpanKind::Role(&r.role),
                    Some(Attachment::Article(a)) => SpanKind::Article(&a.content),
                    None => {
                        tracing::warn!(offset = run.range.start, "embed without attachment");
                        SpanKind::Plain
                    }
                },
            };
            spans.push(StyledSpan {
                range: run.range,
                kind,
            });
        }
        Ok(spans)
    }

    /// Replace all content with unstyled text
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let storage = self.storage_mut()?;
        *storage = Storage {
            text: RopeBuffer::from_text(text),
            ..Storage::default()
        };
        Ok(())
    }

    /// Insert typed text. It inherits bold from the character before `offset`
    /// unless that character is an embed. Returns the inserted char count.
    pub fn insert_text(&mut self, offset: usize, text: &str) -> Result<usize> {
        let storage = self.storage_mut()?;
        let offset = offset.min(storage.len());
        let inherit_bold =
            offset > 0 && storage.is_text_at(offset - 1) && storage.bold.contains(offset - 1);
        let count = storage.insert_plain(offset, text);
        if inherit_bold {
            storage.bold.add(offset..offset + count);
        }
        Ok(count)
    }

    /// Insert text with no formatting. Returns the inserted char count.
    pub fn insert_plain(&mut self, offset: usize, text: &str) -> Result<usize> {
        Ok(self.storage_mut()?.insert_plain(offset, text))
    }

    /// Append unformatted text at the end
    pub fn append_plain(&mut self, text: &str) -> Result<usize> {
        let end = self.len_chars();
        self.insert_plain(end, text)
    }

    /// Embed `attachment` as one placeholder character at `offset`
    pub fn insert_attachment(
        &mut self,
        offset: usize,
        attachment: Attachment,
    ) -> Result<AttachmentId> {
        let storage = self.storage_mut()?;
        let offset = offset.min(storage.len());
        let id = storage.arena.insert(attachment);
        storage.text.insert_char(offset, PLACEHOLDER);
        storage.bold.shift_for_insert(offset, 1);
        storage.embeds.shift_for_insert(offset, 1);
        storage.embeds.insert(offset, id);
        Ok(id)
    }

    /// Append an attachment at the end
    pub fn append_attachment(&mut self, attachment: Attachment) -> Result<AttachmentId> {
        let end = self.len_chars();
        self.insert_attachment(end, attachment)
    }

    /// Replace `range` with a single placeholder embedding `attachment`.
    /// Length is preserved when `range` is one character wide.
    pub fn replace_with_attachment(
        &mut self,
        range: Range<usize>,
        attachment: Attachment,
    ) -> Result<AttachmentId> {
        let start = range.start.min(self.len_chars());
        self.storage_mut()?.remove(range);
        self.insert_attachment(start, attachment)
    }

    /// Delete a character range, freeing any attachments inside it
    pub fn delete(&mut self, range: Range<usize>) -> Result<()> {
        self.storage_mut()?.remove(range);
        Ok(())
    }

    /// Delete the character before `offset` (Backspace).
    /// Returns the new cursor offset, or None when at the start.
    pub fn delete_backward(&mut self, offset: usize) -> Result<Option<usize>> {
        let storage = self.storage_mut()?;
        let offset = offset.min(storage.len());
        if offset == 0 {
            return Ok(None);
        }
        storage.remove(offset - 1..offset);
        Ok(Some(offset - 1))
    }

    /// Set or clear bold over `range`, skipping embeds
    pub fn set_bold(&mut self, range: Range<usize>, bold: bool) -> Result<()> {
        let storage = self.storage_mut()?;
        let end = range.end.min(storage.len());
        let start = range.start.min(end);
        if !bold {
            storage.bold.remove(start..end);
            return Ok(());
        }
        let embedded: Vec<usize> = storage
            .embeds
            .iter()
            .map(|(at, _)| at)
            .filter(|at| (start..end).contains(at))
            .collect();
        let mut piece_start = start;
        for at in embedded {
            storage.bold.add(piece_start..at);
            piece_start = at + 1;
        }
        storage.bold.add(piece_start..end);
        Ok(())
    }

    /// Toggle bold over `range`: cleared if every text character in it is
    /// already bold, applied otherwise. Returns the resulting state.
    pub fn toggle_bold(&mut self, range: Range<usize>) -> Result<bool> {
        let storage = self.storage()?;
        let end = range.end.min(storage.len());
        let start = range.start.min(end);
        let mut text_offsets = (start..end).filter(|o| storage.is_text_at(*o)).peekable();
        if text_offsets.peek().is_none() {
            return Ok(false);
        }
        let all_bold = text_offsets.all(|o| storage.bold.contains(o));
        self.set_bold(start..end, !all_bold)?;
        Ok(!all_bold)
    }
}
