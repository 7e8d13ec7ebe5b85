use std::path::Path;

use logging::trace_walk_summary;

use crate::cursor::{DirectoryCursor, cursor_into_iter};
use crate::entry::DirectoryEntry;
use crate::enumerator::RawEntries;
use crate::error::WalkError;

/// Single-level iterator yielding the children of one directory in the order
/// the operating system reports them.
///
/// The directory is opened when the iterator is constructed, so a missing or
/// unreadable root is reported immediately. The handle is held until the
/// listing is exhausted or the iterator is dropped.
///
/// ```
/// use walk::{DirectoryCursor, FlatIterator};
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// std::fs::write(temp.path().join("a.txt"), b"a")?;
///
/// let mut iter = FlatIterator::new(temp.path())?;
/// assert_eq!(iter.current()?.name(), "a.txt");
/// iter.advance()?;
/// assert!(iter.is_end());
/// assert_eq!(iter, FlatIterator::default());
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct FlatIterator {
    state: Option<Positioned>,
}

#[derive(Debug)]
struct Positioned {
    current: DirectoryEntry,
    entries: RawEntries,
    depth: usize,
}

impl FlatIterator {
    /// Opens `root` and positions the iterator on its first entry.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, WalkError> {
        let root = root.as_ref();
        trace_walk_summary!("listing {:?}", root);
        Self::open_at(root, 1)
    }

    /// Opens `directory` tagging every yielded entry with `depth`.
    pub(crate) fn open_at(directory: &Path, depth: usize) -> Result<Self, WalkError> {
        let entries = RawEntries::open(directory)?;
        Self::position(entries, depth)
    }

    fn position(mut entries: RawEntries, depth: usize) -> Result<Self, WalkError> {
        let state = match entries.next_entry()? {
            Some(raw) => Some(Positioned {
                current: DirectoryEntry::new(entries.path(), raw.name, raw.kind, depth),
                entries,
                depth,
            }),
            None => None,
        };
        Ok(Self { state })
    }

    /// Returns the directory being listed, or `None` at the end.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.state.as_ref().map(|state| state.entries.path())
    }
}

impl DirectoryCursor for FlatIterator {
    fn current(&self) -> Result<&DirectoryEntry, WalkError> {
        self.state
            .as_ref()
            .map(|state| &state.current)
            .ok_or_else(WalkError::invalid_state)
    }

    fn advance(&mut self) -> Result<(), WalkError> {
        let Some(mut state) = self.state.take() else {
            return Ok(());
        };

        if let Some(raw) = state.entries.next_entry()? {
            state.current =
                DirectoryEntry::new(state.entries.path(), raw.name, raw.kind, state.depth);
            self.state = Some(state);
        }
        Ok(())
    }

    fn is_end(&self) -> bool {
        self.state.is_none()
    }
}

impl PartialEq for FlatIterator {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (None, None) => true,
            (Some(left), Some(right)) => left.current == right.current,
            _ => false,
        }
    }
}

cursor_into_iter!(FlatIterator);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::ffi::OsString;
    use std::fs;

    #[test]
    fn empty_directory_starts_at_end() {
        let temp = tempfile::tempdir().expect("tempdir");
        let iter = FlatIterator::new(temp.path()).expect("open");
        assert!(iter.is_end());
        assert!(iter.directory().is_none());
        assert_eq!(iter, FlatIterator::default());
    }

    #[test]
    fn yields_every_entry_once() {
        let temp = tempfile::tempdir().expect("tempdir");
        for name in ["x", "y", "z"] {
            fs::write(temp.path().join(name), b"").expect("write");
        }
        fs::create_dir(temp.path().join("sub")).expect("mkdir");

        let mut iter = FlatIterator::new(temp.path()).expect("open");
        let mut names = BTreeSet::new();
        while !iter.is_end() {
            let entry = iter.current().expect("positioned");
            assert_eq!(entry.depth(), 1);
            assert_eq!(entry.path(), temp.path().join(entry.name()));
            assert!(names.insert(entry.name().to_os_string()));
            iter.advance().expect("advance");
        }

        let expected: BTreeSet<OsString> =
            ["sub", "x", "y", "z"].into_iter().map(OsString::from).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn current_at_end_is_invalid_state() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut iter = FlatIterator::new(temp.path()).expect("open");
        let error = iter.current().expect_err("end has no entry");
        assert!(matches!(error.kind(), crate::WalkErrorKind::InvalidState));
        iter.advance().expect("advance at end is a no-op");
        assert!(iter.is_end());
    }

    #[test]
    fn repeated_queries_without_advance_are_stable() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a"), b"").expect("write");
        fs::write(temp.path().join("b"), b"").expect("write");

        let iter = FlatIterator::new(temp.path()).expect("open");
        let first = iter.current().expect("current").clone();
        assert_eq!(iter.current().expect("current"), &first);
        assert!(!iter.is_end());
        assert!(!iter.is_end());
        assert_eq!(iter.directory(), Some(temp.path()));
    }

    #[test]
    fn file_root_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("plain");
        fs::write(&file, b"").expect("write");
        let error = FlatIterator::new(&file).expect_err("not a directory");
        assert!(matches!(
            error.kind(),
            crate::WalkErrorKind::NotADirectory { .. }
        ));
    }
}
