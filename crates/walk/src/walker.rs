use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cursor::{DirectoryCursor, cursor_into_iter};
use crate::entry::DirectoryEntry;
use crate::error::WalkError;
use crate::flat::FlatIterator;
use crate::recursive::{PreOrderIterator, SiblingsFirstIterator};
use crate::sorted::SortedIterator;

/// Traversal strategy selectable at runtime.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WalkOrder {
    /// Children of the root in operating-system order.
    Flat,
    /// Children of the root, directories first, byte-wise by name.
    Sorted,
    /// Whole subtree, each directory before its descendants.
    #[default]
    PreOrder,
    /// Whole subtree, one depth at a time.
    SiblingsFirst,
}

impl WalkOrder {
    /// Every order, in the sequence they are listed in help output.
    pub const ALL: [Self; 4] = [Self::Flat, Self::Sorted, Self::PreOrder, Self::SiblingsFirst];

    /// Returns the name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Sorted => "sorted",
            Self::PreOrder => "pre-order",
            Self::SiblingsFirst => "siblings-first",
        }
    }

    /// Reports whether the order walks below the root's direct children.
    #[must_use]
    pub const fn is_recursive(self) -> bool {
        matches!(self, Self::PreOrder | Self::SiblingsFirst)
    }
}

impl fmt::Display for WalkOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`WalkOrder`] name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown walk order '{0}' (expected flat, sorted, pre-order or siblings-first)")]
pub struct ParseWalkOrderError(String);

impl FromStr for WalkOrder {
    type Err = ParseWalkOrderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseWalkOrderError(value.to_owned()))
    }
}

/// A traversal whose strategy was chosen at runtime.
#[derive(Debug)]
pub enum DirectoryWalker {
    /// Single level, operating-system order.
    Flat(FlatIterator),
    /// Single level, sorted.
    Sorted(SortedIterator),
    /// Recursive, pre-order.
    PreOrder(PreOrderIterator),
    /// Recursive, siblings first.
    SiblingsFirst(SiblingsFirstIterator),
}

impl DirectoryWalker {
    /// Returns the strategy backing this walker.
    #[must_use]
    pub const fn order(&self) -> WalkOrder {
        match self {
            Self::Flat(_) => WalkOrder::Flat,
            Self::Sorted(_) => WalkOrder::Sorted,
            Self::PreOrder(_) => WalkOrder::PreOrder,
            Self::SiblingsFirst(_) => WalkOrder::SiblingsFirst,
        }
    }
}

impl Default for DirectoryWalker {
    fn default() -> Self {
        Self::PreOrder(PreOrderIterator::default())
    }
}

macro_rules! dispatch {
    ($walker:expr, $inner:ident => $body:expr) => {
        match $walker {
            DirectoryWalker::Flat($inner) => $body,
            DirectoryWalker::Sorted($inner) => $body,
            DirectoryWalker::PreOrder($inner) => $body,
            DirectoryWalker::SiblingsFirst($inner) => $body,
        }
    };
}

impl DirectoryCursor for DirectoryWalker {
    fn current(&self) -> Result<&DirectoryEntry, WalkError> {
        dispatch!(self, inner => inner.current())
    }

    fn advance(&mut self) -> Result<(), WalkError> {
        dispatch!(self, inner => inner.advance())
    }

    fn is_end(&self) -> bool {
        dispatch!(self, inner => inner.is_end())
    }
}

/// Walkers compare equal when both are at the end, or when both are
/// positioned on the same entry; the strategy is not compared.
impl PartialEq for DirectoryWalker {
    fn eq(&self, other: &Self) -> bool {
        match (self.current(), other.current()) {
            (Ok(left), Ok(right)) => left == right,
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

cursor_into_iter!(DirectoryWalker);
