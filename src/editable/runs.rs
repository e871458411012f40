//! Run bookkeeping for styled text.
//!
//! Two independent attribute kinds are tracked over character ranges:
//! formatting (bold) as sorted, non-overlapping ranges, and embeds as a map
//! from placeholder offset to attachment id. [`segment`] partitions the text
//! into maximal runs wherever either kind changes.

use std::collections::BTreeMap;
use std::ops::Range;

use super::attachment::AttachmentId;

/// Sorted, non-overlapping, non-adjacent half-open ranges carrying a flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRanges {
    ranges: Vec<Range<usize>>,
}

impl FormatRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether the character at `offset` carries the flag
    pub fn contains(&self, offset: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.end <= offset);
        self.ranges.get(idx).is_some_and(|r| r.start <= offset)
    }

    pub fn add(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        self.ranges.push(range);
        self.normalize();
    }

    pub fn remove(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for r in self.ranges.drain(..) {
            if r.end <= range.start || r.start >= range.end {
                kept.push(r);
                continue;
            }
            if r.start < range.start {
                kept.push(r.start..range.start);
            }
            if r.end > range.end {
                kept.push(range.end..r.end);
            }
        }
        self.ranges = kept;
    }

    /// Make room for `len` characters inserted at `offset`.
    ///
    /// Inserted characters never inherit the flag here; a range straddling
    /// the insertion point is split around the new text.
    pub fn shift_for_insert(&mut self, offset: usize, len: usize) {
        if len == 0 {
            return;
        }
        let mut shifted = Vec::with_capacity(self.ranges.len() + 1);
        for r in self.ranges.drain(..) {
            if r.end <= offset {
                shifted.push(r);
            } else if r.start >= offset {
                shifted.push(r.start + len..r.end + len);
            } else {
                shifted.push(r.start..offset);
                shifted.push(offset + len..r.end + len);
            }
        }
        self.ranges = shifted;
    }

    /// Collapse the removed character range out of every flagged range
    pub fn shift_for_remove(&mut self, removed: Range<usize>) {
        if removed.start >= removed.end {
            return;
        }
        let map = |x: usize| {
            if x <= removed.start {
                x
            } else if x <= removed.end {
                removed.start
            } else {
                x - (removed.end - removed.start)
            }
        };
        self.ranges = self
            .ranges
            .drain(..)
            .map(|r| map(r.start)..map(r.end))
            .collect();
        self.normalize();
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    fn normalize(&mut self) {
        self.ranges.retain(|r| r.start < r.end);
        self.ranges.sort_by_key(|r| r.start);
        let mut merged: Vec<Range<usize>> = Vec::with_capacity(self.ranges.len());
        for r in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
                _ => merged.push(r),
            }
        }
        self.ranges = merged;
    }
}

/// Placeholder offsets mapped to the attachment each one embeds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedMap {
    at: BTreeMap<usize, AttachmentId>,
}

impl EmbedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, offset: usize) -> Option<AttachmentId> {
        self.at.get(&offset).copied()
    }

    /// Returns the id previously embedded at `offset`, if any
    pub fn insert(&mut self, offset: usize, id: AttachmentId) -> Option<AttachmentId> {
        self.at.insert(offset, id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, AttachmentId)> + '_ {
        self.at.iter().map(|(offset, id)| (*offset, *id))
    }

    pub fn len(&self) -> usize {
        self.at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.at.is_empty()
    }

    pub fn shift_for_insert(&mut self, offset: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.at = std::mem::take(&mut self.at)
            .into_iter()
            .map(|(at, id)| if at >= offset { (at + len, id) } else { (at, id) })
            .collect();
    }

    /// Drop embeds inside `removed` and shift the rest left.
    /// Returns the ids that were dropped so their attachments can be freed.
    pub fn shift_for_remove(&mut self, removed: Range<usize>) -> Vec<AttachmentId> {
        if removed.start >= removed.end {
            return Vec::new();
        }
        let width = removed.end - removed.start;
        let mut dropped = Vec::new();
        let mut kept = BTreeMap::new();
        for (at, id) in std::mem::take(&mut self.at) {
            if at < removed.start {
                kept.insert(at, id);
            } else if at < removed.end {
                dropped.push(id);
            } else {
                kept.insert(at - width, id);
            }
        }
        self.at = kept;
        dropped
    }

    pub fn clear(&mut self) {
        self.at.clear();
    }
}

/// The attribute set of one maximal run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    Plain,
    Bold,
    Embed(AttachmentId),
}

/// A maximal contiguous range sharing one attribute assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub range: Range<usize>,
    pub style: RunStyle,
}

impl Run {
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Partition `0..len` into maximal runs of constant attribute set.
///
/// Boundaries are every bold range endpoint plus both edges of every embed.
/// Embeds always form their own one-character run and are never bold;
/// neighbouring non-embed segments with the same style are coalesced.
pub fn segment(len: usize, bold: &FormatRanges, embeds: &EmbedMap) -> Vec<Run> {
    let mut boundaries = Vec::with_capacity(2 + bold.ranges().len() * 2 + embeds.len() * 2);
    boundaries.push(0);
    boundaries.push(len);
    for r in bold.ranges() {
        boundaries.push(r.start.min(len));
        boundaries.push(r.end.min(len));
    }
    for (at, _) in embeds.iter() {
        if at < len {
            boundaries.push(at);
            boundaries.push(at + 1);
        }
    }
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut runs: Vec<Run> = Vec::new();
    for pair in boundaries.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if start >= end {
            continue;
        }
        let style = match embeds.get(start) {
            Some(id) => RunStyle::Embed(id),
            None if bold.contains(start) => RunStyle::Bold,
            None => RunStyle::Plain,
        };
        match runs.last_mut() {
            Some(last)
                if last.style == style
                    && !matches!(style, RunStyle::Embed(_))
                    && last.range.end == start =>
            {
                last.range.end = end;
            }
            _ => runs.push(Run {
                range: start..end,
                style,
            }),
        }
    }
    runs
}
