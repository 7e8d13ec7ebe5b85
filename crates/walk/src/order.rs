//! Traversal orders for [`RecursiveIterator`](crate::RecursiveIterator).

use std::collections::VecDeque;

use crate::cursor::DirectoryCursor;
use crate::entry::DirectoryEntry;
use crate::error::WalkError;
use crate::flat::FlatIterator;
use crate::recursive::{PendingDirectory, TraversalOrder};

/// Depth-first order backed by a stack of open levels.
///
/// Descending into a directory pushes a frame for it, so its children are
/// consumed before the walk returns to the directory's siblings. Frames are
/// dropped, closing their handles, as soon as their level is exhausted.
#[derive(Debug, Default)]
pub struct PreOrder {
    stack: Vec<FlatIterator>,
}

impl TraversalOrder for PreOrder {
    fn start(root: FlatIterator) -> Self {
        let mut stack = Vec::new();
        if !root.is_end() {
            stack.push(root);
        }
        Self { stack }
    }

    fn current(&self) -> Option<&DirectoryEntry> {
        self.stack.last().and_then(|frame| frame.current().ok())
    }

    fn step(&mut self, descend: Option<PendingDirectory>) -> Result<(), WalkError> {
        let child = descend.as_ref().map(PendingDirectory::open).transpose()?;

        if let Some(top) = self.stack.last_mut() {
            top.advance()?;
        }
        if let Some(child) = child.filter(|frame| !frame.is_end()) {
            self.stack.push(child);
        }
        while self.stack.last().is_some_and(FlatIterator::is_end) {
            self.stack.pop();
        }
        Ok(())
    }

    fn open_handles(&self) -> usize {
        self.stack.iter().filter(|frame| !frame.is_end()).count()
    }
}

/// Level order backed by one open level and a FIFO queue of directories
/// waiting to be opened.
///
/// Directories discovered while a level is being yielded are queued rather
/// than entered, so the walk finishes each depth before starting the next.
/// Only the level currently being read holds a directory handle.
#[derive(Debug, Default)]
pub struct SiblingsFirst {
    level: FlatIterator,
    queue: VecDeque<PendingDirectory>,
}

impl TraversalOrder for SiblingsFirst {
    fn start(root: FlatIterator) -> Self {
        Self {
            level: root,
            queue: VecDeque::new(),
        }
    }

    fn current(&self) -> Option<&DirectoryEntry> {
        self.level.current().ok()
    }

    fn step(&mut self, descend: Option<PendingDirectory>) -> Result<(), WalkError> {
        if let Some(pending) = descend {
            self.queue.push_back(pending);
        }

        self.level.advance()?;
        while self.level.is_end() {
            let Some(next) = self.queue.pop_front() else {
                break;
            };
            self.level = next.open()?;
        }
        Ok(())
    }

    fn open_handles(&self) -> usize {
        usize::from(!self.level.is_end())
    }
}
