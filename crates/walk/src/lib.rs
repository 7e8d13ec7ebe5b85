#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates the contents of a directory tree through four
//! interchangeable strategies sharing one pull-based cursor contract:
//!
//! - [`FlatIterator`] lists the children of one directory in the order the
//!   operating system reports them.
//! - [`SortedIterator`] lists the same children in a fixed order:
//!   directories first, then byte-wise by name.
//! - [`PreOrderIterator`] walks the whole subtree depth-first, yielding each
//!   directory immediately before its descendants.
//! - [`SiblingsFirstIterator`] walks the whole subtree one depth at a time.
//!
//! # Design
//!
//! - [`DirectoryCursor`] is the common contract: [`current`], [`advance`] and
//!   [`is_end`]. The end state is a structural sentinel, so two
//!   default-constructed iterators compare equal.
//! - Every strategy also converts into an [`Iterator`] of
//!   `Result<DirectoryEntry, WalkError>` through [`Entries`].
//! - [`RecursiveIterator`] is generic over a [`TraversalOrder`]: [`PreOrder`]
//!   keeps a stack of open levels, [`SiblingsFirst`] keeps one open level and
//!   a FIFO queue of directories waiting to be opened.
//! - [`WalkBuilder`] and [`DirectoryWalker`] select the strategy at runtime.
//!
//! # Invariants
//!
//! - The root is opened eagerly; constructors fail immediately with
//!   [`WalkError`] when it is missing, inaccessible, or not a directory.
//! - Every entry below the root is yielded exactly once, provided the tree is
//!   not modified during the walk and symlink cycles are either not followed
//!   or guarded by [`WalkOptions::detect_cycles`].
//! - Directory handles are owned by the level that opened them and are
//!   released when that level is exhausted or the iterator is dropped.
//!
//! # Errors
//!
//! A recursive walk that fails to open or read a subdirectory halts: the
//! iterator drops all open levels, moves to the end, and returns the error
//! from [`advance`]. Requesting [`current`] at the end yields
//! [`WalkErrorKind::InvalidState`].
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use std::fs;
//! use walk::{PreOrderIterator, WalkBuilder, WalkOrder};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! fs::create_dir_all(root.join("nested"))?;
//! fs::write(root.join("file.txt"), b"data")?;
//! fs::write(root.join("nested/more.txt"), b"data")?;
//!
//! let mut seen = BTreeSet::new();
//! for entry in PreOrderIterator::new(&root)? {
//!     seen.insert(entry?.path().strip_prefix(&root)?.to_path_buf());
//! }
//! assert_eq!(seen.len(), 3);
//! assert!(seen.contains(std::path::Path::new("nested/more.txt")));
//!
//! let names: Vec<_> = WalkBuilder::new(&root)
//!     .order(WalkOrder::Sorted)
//!     .build()?
//!     .into_iter()
//!     .map(|entry| entry.map(|entry| entry.name().to_owned()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(names, ["nested", "file.txt"]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! [`current`]: DirectoryCursor::current
//! [`advance`]: DirectoryCursor::advance
//! [`is_end`]: DirectoryCursor::is_end

mod builder;
mod cursor;
mod entry;
mod enumerator;
mod error;
mod flat;
mod options;
mod order;
mod recursive;
mod sorted;
mod walker;

pub use builder::WalkBuilder;
pub use cursor::{DirectoryCursor, Entries};
pub use entry::{DirectoryEntry, EntryKind};
pub use error::{WalkError, WalkErrorKind};
pub use flat::FlatIterator;
pub use options::WalkOptions;
pub use order::{PreOrder, SiblingsFirst};
pub use recursive::{
    PendingDirectory, PreOrderIterator, RecursiveIterator, SiblingsFirstIterator, TraversalOrder,
};
pub use sorted::{SortedIterator, compare_entries};
pub use walker::{DirectoryWalker, ParseWalkOrderError, WalkOrder};
