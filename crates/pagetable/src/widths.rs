//! Per-column width bookkeeping.
//!
//! The table tracks one `(width, pinned)` entry per data column plus a
//! reserved entry at index 0 for the row-header column used under
//! [`HeaderOrientation::Row`](crate::HeaderOrientation::Row). Unpinned
//! entries track the longest text written so far (auto-fit); pinned
//! entries hold a caller-fixed width and ignore later writes.

/// One column's width state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct WidthEntry {
    pub(crate) width: usize,
    pub(crate) pinned: bool,
}

/// The `column_count + 1` width entries; entry 0 is the row-header column.
#[derive(Clone, Debug)]
pub(crate) struct ColumnWidths {
    entries: Vec<WidthEntry>,
}

impl ColumnWidths {
    /// A width list for a table with no columns: the reserved entry only.
    pub(crate) fn new() -> Self {
        ColumnWidths {
            entries: vec![WidthEntry::default()],
        }
    }

    /// Number of data columns (entry 0 excluded).
    pub(crate) fn column_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Grows or shrinks to `columns + 1` entries. New entries start at
    /// `(0, unpinned)`; shrinking drops entries from the tail.
    pub(crate) fn resize(&mut self, columns: usize) {
        self.entries.resize(columns + 1, WidthEntry::default());
    }

    pub(crate) fn get(&self, index: usize) -> usize {
        self.entries[index].width
    }

    pub(crate) fn is_pinned(&self, index: usize) -> bool {
        self.entries[index].pinned
    }

    /// The write-time width policy.
    ///
    /// Pinned entries ignore every update, forced or not: pinning is the
    /// caller's explicit override and overflowing content is clipped at
    /// render time instead. For unpinned entries, `force` replaces the
    /// width outright (header writes), otherwise the width only ratchets
    /// up to `candidate`.
    pub(crate) fn update(&mut self, index: usize, candidate: usize, force: bool) {
        let entry = &mut self.entries[index];
        if entry.pinned {
            return;
        }
        if force {
            entry.width = candidate;
        } else {
            entry.width = entry.width.max(candidate);
        }
    }

    /// Pins the entry at a fixed width.
    pub(crate) fn pin(&mut self, index: usize, width: usize) {
        self.entries[index] = WidthEntry {
            width,
            pinned: true,
        };
    }

    /// Unpins the entry and seeds it with `width`; the caller rescans the
    /// column content afterwards since no running maximum was kept while
    /// the entry was pinned.
    pub(crate) fn unpin(&mut self, index: usize, width: usize) {
        self.entries[index] = WidthEntry {
            width,
            pinned: false,
        };
    }

    /// Sets the width directly, pinned or not. Title reflow uses this: an
    /// oversized title widens every visible column unconditionally.
    pub(crate) fn set_width(&mut self, index: usize, width: usize) {
        self.entries[index].width = width;
    }
}
