use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use logging::{trace_descend, trace_walk_error, trace_walk_summary};

use crate::cursor::{DirectoryCursor, Entries};
use crate::entry::{DirectoryEntry, EntryKind};
use crate::error::WalkError;
use crate::flat::FlatIterator;
use crate::options::WalkOptions;
use crate::order::{PreOrder, SiblingsFirst};

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::order::PreOrder {}
    impl Sealed for crate::order::SiblingsFirst {}
}

/// A directory scheduled for descent: its path and the depth its children
/// will be reported at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingDirectory {
    pub(crate) path: PathBuf,
    pub(crate) depth: usize,
}

impl PendingDirectory {
    /// Path of the directory to open.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Depth assigned to the directory's children.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn open(&self) -> Result<FlatIterator, WalkError> {
        trace_descend!("entering directory {:?}", self.path);
        FlatIterator::open_at(&self.path, self.depth)
    }
}

/// Ordering strategy driving a [`RecursiveIterator`].
///
/// Implemented by [`PreOrder`] and [`SiblingsFirst`]; the trait is sealed.
pub trait TraversalOrder: Default + fmt::Debug + sealed::Sealed {
    /// Builds the traversal state from the already opened root level.
    fn start(root: FlatIterator) -> Self;

    /// Returns the entry the traversal is positioned on.
    fn current(&self) -> Option<&DirectoryEntry>;

    /// Moves past the current entry, scheduling `descend` when the current
    /// entry is a directory that should be walked.
    fn step(&mut self, descend: Option<PendingDirectory>) -> Result<(), WalkError>;

    /// Number of directory handles currently held open.
    fn open_handles(&self) -> usize;
}

/// Recursive iterator over every entry below a root directory.
///
/// The root itself is not yielded. The order is chosen by `O`: see
/// [`PreOrderIterator`] and [`SiblingsFirstIterator`].
///
/// If a subdirectory cannot be opened or read partway through the walk, the
/// iterator releases every open handle, moves to the end, and returns the
/// error from [`advance`](DirectoryCursor::advance). Both orders apply this
/// policy identically.
#[derive(Debug, Default)]
pub struct RecursiveIterator<O> {
    order: O,
    descent: Descent,
}

/// Depth-first iterator: every directory is yielded immediately before its
/// descendants.
pub type PreOrderIterator = RecursiveIterator<PreOrder>;

/// Level-order iterator: every entry at one depth is yielded before any entry
/// at the next depth.
pub type SiblingsFirstIterator = RecursiveIterator<SiblingsFirst>;

impl<O: TraversalOrder> RecursiveIterator<O> {
    /// Opens `root` with default options.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, WalkError> {
        Self::with_options(root, WalkOptions::default())
    }

    /// Opens `root` with the supplied options.
    pub fn with_options<P: AsRef<Path>>(root: P, options: WalkOptions) -> Result<Self, WalkError> {
        let root = root.as_ref();
        trace_walk_summary!("walking {:?} with {:?}", root, options);

        let level = FlatIterator::open_at(root, 1)?;
        let mut descent = Descent::new(options);
        if options.detects_cycles() {
            descent.mark_visited(root)?;
        }

        Ok(Self {
            order: O::start(level),
            descent,
        })
    }

    /// Returns the options the iterator was built with.
    #[must_use]
    pub fn options(&self) -> WalkOptions {
        self.descent.options
    }

    /// Depth of the current entry, or `0` at the end.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.order.current().map_or(0, DirectoryEntry::depth)
    }

    /// Number of directory handles currently held open.
    #[must_use]
    pub fn open_handles(&self) -> usize {
        self.order.open_handles()
    }

    fn halt(&mut self, error: &WalkError) {
        trace_walk_error!("halting traversal: {}", error);
        self.order = O::default();
    }
}

impl<O: TraversalOrder> DirectoryCursor for RecursiveIterator<O> {
    fn current(&self) -> Result<&DirectoryEntry, WalkError> {
        self.order.current().ok_or_else(WalkError::invalid_state)
    }

    fn advance(&mut self) -> Result<(), WalkError> {
        let Some(entry) = self.order.current() else {
            return Ok(());
        };

        let stepped = match self.descent.plan(entry) {
            Ok(pending) => self.order.step(pending),
            Err(error) => Err(error),
        };
        if let Err(error) = stepped {
            self.halt(&error);
            return Err(error);
        }
        Ok(())
    }

    fn is_end(&self) -> bool {
        self.order.current().is_none()
    }
}

impl<O: TraversalOrder> PartialEq for RecursiveIterator<O> {
    fn eq(&self, other: &Self) -> bool {
        self.order.current() == other.order.current()
    }
}

impl<O: TraversalOrder> IntoIterator for RecursiveIterator<O> {
    type Item = Result<DirectoryEntry, WalkError>;
    type IntoIter = Entries<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Decides which entries are descended into.
#[derive(Debug, Default)]
struct Descent {
    options: WalkOptions,
    visited: HashSet<PathBuf>,
}

impl Descent {
    fn new(options: WalkOptions) -> Self {
        Self {
            options,
            visited: HashSet::new(),
        }
    }

    fn plan(&mut self, entry: &DirectoryEntry) -> Result<Option<PendingDirectory>, WalkError> {
        if !self.descends_into(entry)? {
            return Ok(None);
        }

        if !self.options.allows_descent_from(entry.depth()) {
            trace_descend!("depth limit reached at {:?}", entry.path());
            return Ok(None);
        }

        if self.options.detects_cycles() && !self.mark_visited(entry.path())? {
            trace_descend!("skipping already visited directory {:?}", entry.path());
            return Ok(None);
        }

        Ok(Some(PendingDirectory {
            path: entry.path().to_path_buf(),
            depth: entry.depth() + 1,
        }))
    }

    fn descends_into(&self, entry: &DirectoryEntry) -> Result<bool, WalkError> {
        match entry.kind() {
            EntryKind::Directory => Ok(true),
            EntryKind::Symlink if self.options.follows_symlinks() => {
                match fs::metadata(entry.path()) {
                    Ok(target) => Ok(target.is_dir()),
                    // Dangling links are yielded but never descended into.
                    Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
                    Err(error) => Err(WalkError::metadata(entry.path().to_path_buf(), error)),
                }
            }
            _ => Ok(false),
        }
    }

    /// Records `path` as visited, returning `false` if it was seen before.
    fn mark_visited(&mut self, path: &Path) -> Result<bool, WalkError> {
        let canonical = fs::canonicalize(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                WalkError::open(path.to_path_buf(), error)
            }
            _ => WalkError::canonicalize(path.to_path_buf(), error),
        })?;
        Ok(self.visited.insert(canonical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn directory(depth: usize) -> DirectoryEntry {
        DirectoryEntry::new(
            Path::new("/nonexistent"),
            OsString::from("dir"),
            EntryKind::Directory,
            depth,
        )
    }

    #[test]
    fn plan_schedules_directories_one_level_deeper() {
        let mut descent = Descent::new(WalkOptions::default());
        let pending = descent
            .plan(&directory(3))
            .expect("plan")
            .expect("directory is descended into");
        assert_eq!(pending.path(), Path::new("/nonexistent/dir"));
        assert_eq!(pending.depth(), 4);
    }

    #[test]
    fn plan_respects_depth_limit() {
        let mut descent = Descent::new(WalkOptions::new().max_depth(2));
        assert!(descent.plan(&directory(1)).expect("plan").is_some());
        assert!(descent.plan(&directory(2)).expect("plan").is_none());
    }

    #[test]
    fn plan_ignores_files_and_unfollowed_symlinks() {
        let mut descent = Descent::new(WalkOptions::default());
        let file = DirectoryEntry::new(Path::new("/x"), OsString::from("f"), EntryKind::File, 1);
        let link = DirectoryEntry::new(Path::new("/x"), OsString::from("l"), EntryKind::Symlink, 1);
        assert!(descent.plan(&file).expect("plan").is_none());
        assert!(descent.plan(&link).expect("plan").is_none());
    }

    #[test]
    fn default_iterators_are_equal_and_at_end() {
        let pre = PreOrderIterator::default();
        assert!(pre.is_end());
        assert_eq!(pre, PreOrderIterator::default());
        assert_eq!(pre.depth(), 0);
        assert_eq!(pre.open_handles(), 0);

        let siblings = SiblingsFirstIterator::default();
        assert!(siblings.is_end());
        assert_eq!(siblings, SiblingsFirstIterator::default());
    }
}
