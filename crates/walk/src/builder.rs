use std::path::PathBuf;

use crate::error::WalkError;
use crate::flat::FlatIterator;
use crate::options::WalkOptions;
use crate::recursive::RecursiveIterator;
use crate::sorted::SortedIterator;
use crate::walker::{DirectoryWalker, WalkOrder};

/// Configures a traversal rooted at a specific path.
///
/// Depth, symlink and cycle options only affect the recursive orders; the
/// flat and sorted orders always list a single level.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    order: WalkOrder,
    options: WalkOptions,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path in
    /// pre-order with default options.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            order: WalkOrder::default(),
            options: WalkOptions::default(),
        }
    }

    /// Selects the traversal strategy.
    #[must_use]
    pub const fn order(mut self, order: WalkOrder) -> Self {
        self.order = order;
        self
    }

    /// Bounds the traversal depth (`0` for unlimited).
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }

    /// Configures whether directory symlinks should be traversed.
    ///
    /// The walker always yields the symlink entry itself. When this option is
    /// enabled and the symlink points to a directory, the walker also descends
    /// into the target while reporting paths under the symlink. Combine with
    /// [`detect_cycles`](Self::detect_cycles) when links may point back at an
    /// ancestor.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.options.follow_symlinks = follow;
        self
    }

    /// Configures visited-directory tracking.
    #[must_use]
    pub const fn detect_cycles(mut self, detect: bool) -> Self {
        self.options.detect_cycles = detect;
        self
    }

    /// Replaces every recursive option at once.
    #[must_use]
    pub const fn options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds a [`DirectoryWalker`] using the configured options.
    pub fn build(self) -> Result<DirectoryWalker, WalkError> {
        Ok(match self.order {
            WalkOrder::Flat => DirectoryWalker::Flat(FlatIterator::new(&self.root)?),
            WalkOrder::Sorted => DirectoryWalker::Sorted(SortedIterator::new(&self.root)?),
            WalkOrder::PreOrder => DirectoryWalker::PreOrder(RecursiveIterator::with_options(
                &self.root,
                self.options,
            )?),
            WalkOrder::SiblingsFirst => DirectoryWalker::SiblingsFirst(
                RecursiveIterator::with_options(&self.root, self.options)?,
            ),
        })
    }
}
