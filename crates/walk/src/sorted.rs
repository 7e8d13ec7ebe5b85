use std::cmp::Ordering;
use std::collections::VecDeque;
use std::path::Path;

use logging::trace_walk_summary;

use crate::cursor::{DirectoryCursor, cursor_into_iter};
use crate::entry::DirectoryEntry;
use crate::error::WalkError;
use crate::flat::FlatIterator;

/// Single-level iterator yielding the children of one directory in a fixed,
/// platform-independent order.
///
/// The listing is read completely when the iterator is constructed and the
/// directory handle is released before the first entry is returned.
/// Directories come first, followed by every other entry; each group is
/// ordered by the raw bytes of the entry name, so digits precede uppercase
/// letters, which precede lowercase letters, and a name sorts before any
/// longer name it prefixes. No locale or case folding is involved.
#[derive(Debug, Default)]
pub struct SortedIterator {
    pending: VecDeque<DirectoryEntry>,
}

impl SortedIterator {
    /// Reads and sorts the children of `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, WalkError> {
        let root = root.as_ref();
        let mut flat = FlatIterator::open_at(root, 1)?;
        let mut entries = Vec::new();
        while let Ok(entry) = flat.current() {
            entries.push(entry.clone());
            flat.advance()?;
        }
        entries.sort_by(compare_entries);
        trace_walk_summary!("sorted {} entries in {:?}", entries.len(), root);

        Ok(Self {
            pending: entries.into(),
        })
    }

    /// Returns the number of entries not yet advanced past, including the
    /// current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl DirectoryCursor for SortedIterator {
    fn current(&self) -> Result<&DirectoryEntry, WalkError> {
        self.pending.front().ok_or_else(WalkError::invalid_state)
    }

    fn advance(&mut self) -> Result<(), WalkError> {
        self.pending.pop_front();
        Ok(())
    }

    fn is_end(&self) -> bool {
        self.pending.is_empty()
    }
}

impl PartialEq for SortedIterator {
    fn eq(&self, other: &Self) -> bool {
        self.pending.front() == other.pending.front()
    }
}

cursor_into_iter!(SortedIterator);

/// Collation used by [`SortedIterator`]: directories first, then byte-wise
/// comparison of the entry name.
pub fn compare_entries(left: &DirectoryEntry, right: &DirectoryEntry) -> Ordering {
    right
        .is_dir()
        .cmp(&left.is_dir())
        .then_with(|| {
            left.name()
                .as_encoded_bytes()
                .cmp(right.name().as_encoded_bytes())
        })
}
