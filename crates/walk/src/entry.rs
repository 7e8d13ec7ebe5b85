use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Type of a directory entry, as reported without following symbolic links.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link; the target is only resolved when links are followed.
    Symlink,
    /// Sockets, FIFOs, device nodes and anything else.
    Other,
}

impl EntryKind {
    pub(crate) fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A named child discovered while enumerating a directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryEntry {
    pub(crate) path: PathBuf,
    pub(crate) name: OsString,
    pub(crate) kind: EntryKind,
    pub(crate) depth: usize,
}

impl DirectoryEntry {
    pub(crate) fn new(parent: &Path, name: OsString, kind: EntryKind, depth: usize) -> Self {
        Self {
            path: parent.join(&name),
            name,
            kind,
            depth,
        }
    }

    /// Returns the full path of the entry (its parent directory joined with
    /// [`name`](Self::name)).
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the entry name as reported by the directory listing.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the entry type.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Reports the depth below the traversal root. Direct children of the
    /// root have depth `1`.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Indicates whether the entry is a directory (symlinks are not resolved).
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Indicates whether the entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Indicates whether the entry is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Consumes the entry and returns its path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
