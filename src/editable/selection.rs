//! Selection over character offsets.

use std::ops::Range;

/// A text selection with anchor (start point) and head (cursor position).
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the cursor is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Selected character range, ordered start..end
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Extend selection to new head position
    pub fn extend_to(&mut self, offset: usize) {
        self.head = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_range_is_ordered() {
        let sel = Selection::new(8, 3);
        assert_eq!(sel.range(), 3..8);
    }

    #[test]
    fn test_collapsed_selection_is_empty() {
        let mut sel = Selection::collapsed(4);
        assert!(sel.is_empty());
        sel.extend_to(6);
        assert!(!sel.is_empty());
        assert_eq!(sel.range(), 4..6);
    }
}
