//! Bounded, linear undo/redo history of document snapshots.

use crate::doc::SketchDocument;

/// Maximum number of snapshots kept.
pub const MAX_HISTORY: usize = 50;

/// Undo/redo log of immutable deep snapshots.
///
/// Entries before `current` are the undo past, entries after it the redo
/// future. Element ids are preserved across snapshots, so undo/redo restores
/// documents identically.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<SketchDocument>,
    current: usize,
}

impl HistoryLog {
    /// Create a log seeded with the loaded document as its only entry.
    pub fn new(initial: &SketchDocument) -> Self {
        Self {
            entries: vec![initial.clone()],
            current: 0,
        }
    }

    /// Record a committed mutation.
    ///
    /// Drops any redo branch, appends a deep snapshot, and once the cap is
    /// exceeded evicts the single oldest entry; the active entry stays the
    /// newest one.
    pub fn push(&mut self, doc: &SketchDocument) {
        self.entries.truncate(self.current + 1);
        self.entries.push(doc.clone());
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.current = self.entries.len() - 1;
    }

    /// Step back one entry; `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<SketchDocument> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(self.entries[self.current].clone())
    }

    /// Step forward one entry; `None` when already at the newest.
    pub fn redo(&mut self) -> Option<SketchDocument> {
        if self.current + 1 >= self.entries.len() {
            return None;
        }
        self.current += 1;
        Some(self.entries[self.current].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
