//! Thin adapter over the operating system's directory enumeration.
//!
//! [`RawEntries`] owns one open directory handle and hands out entry names
//! with their file types. The handle is closed as soon as the listing is
//! exhausted or a read fails, and otherwise when the adapter is dropped.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use logging::trace_walk;

use crate::entry::EntryKind;
use crate::error::WalkError;

/// A raw `(name, kind)` pair in operating-system order.
#[derive(Debug)]
pub(crate) struct RawEntry {
    pub(crate) name: OsString,
    pub(crate) kind: EntryKind,
}

/// Single-pass enumerator over the children of one directory.
#[derive(Debug)]
pub(crate) struct RawEntries {
    path: PathBuf,
    handle: Option<fs::ReadDir>,
}

impl RawEntries {
    /// Opens `path` for enumeration. Fails eagerly if the directory is
    /// missing, inaccessible, or not a directory.
    pub(crate) fn open(path: &Path) -> Result<Self, WalkError> {
        let handle =
            fs::read_dir(path).map_err(|error| WalkError::open(path.to_path_buf(), error))?;
        trace_walk!("opened directory {:?}", path);
        Ok(Self {
            path: path.to_path_buf(),
            handle: Some(handle),
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the next entry, or `None` once the listing is exhausted.
    pub(crate) fn next_entry(&mut self) -> Result<Option<RawEntry>, WalkError> {
        let Some(handle) = self.handle.as_mut() else {
            return Ok(None);
        };

        match handle.next() {
            Some(Ok(entry)) => {
                let kind = entry
                    .file_type()
                    .map(EntryKind::from_file_type)
                    .map_err(|error| WalkError::read(entry.path(), error))?;
                Ok(Some(RawEntry {
                    name: entry.file_name(),
                    kind,
                }))
            }
            Some(Err(error)) => {
                self.handle = None;
                Err(WalkError::read(self.path.clone(), error))
            }
            None => {
                self.handle = None;
                trace_walk!("closed directory {:?}", self.path);
                Ok(None)
            }
        }
    }

    /// Reports whether the underlying handle is still open.
    pub(crate) fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_directory_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let error = RawEntries::open(&temp.path().join("missing")).expect_err("missing dir");
        assert!(error.is_not_found());
    }

    #[test]
    fn handle_is_released_after_exhaustion() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("only"), b"").expect("write");

        let mut entries = RawEntries::open(temp.path()).expect("open");
        assert!(entries.is_open());
        let first = entries.next_entry().expect("read").expect("one entry");
        assert_eq!(first.name, OsString::from("only"));
        assert_eq!(first.kind, EntryKind::File);
        assert!(entries.next_entry().expect("read").is_none());
        assert!(!entries.is_open());
        assert!(entries.next_entry().expect("read").is_none());
    }
}
