use crate::entry::DirectoryEntry;
use crate::error::WalkError;

/// Pull-based cursor contract shared by every traversal strategy.
///
/// A cursor is either positioned on a current entry or at the end. The end
/// state is terminal: once [`is_end`](Self::is_end) reports `true`, further
/// calls to [`advance`](Self::advance) are no-ops and
/// [`current`](Self::current) fails with
/// [`WalkErrorKind::InvalidState`](crate::WalkErrorKind::InvalidState).
pub trait DirectoryCursor {
    /// Returns the entry the cursor is positioned on.
    fn current(&self) -> Result<&DirectoryEntry, WalkError>;

    /// Moves to the next entry, or to the end when the traversal is
    /// exhausted. On error the cursor is left at the end.
    fn advance(&mut self) -> Result<(), WalkError>;

    /// Reports whether the cursor has reached the end.
    fn is_end(&self) -> bool;

    /// Adapts the cursor into an [`Iterator`] of entries.
    fn entries(self) -> Entries<Self>
    where
        Self: Sized,
    {
        Entries::new(self)
    }
}

/// [`Iterator`] adapter over a [`DirectoryCursor`].
///
/// Yields the current entry and then advances. If advancing fails, the entry
/// that was already current is still returned first; the error follows on the
/// next call and the iterator is exhausted afterwards.
#[derive(Debug)]
pub struct Entries<C> {
    cursor: C,
    pending: Option<WalkError>,
}

impl<C: DirectoryCursor> Entries<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor,
            pending: None,
        }
    }

    /// Returns the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: DirectoryCursor> Iterator for Entries<C> {
    type Item = Result<DirectoryEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = self.pending.take() {
            return Some(Err(error));
        }

        let entry = self.cursor.current().ok()?.clone();
        if let Err(error) = self.cursor.advance() {
            self.pending = Some(error);
        }
        Some(Ok(entry))
    }
}

impl<C: DirectoryCursor> std::iter::FusedIterator for Entries<C> {}

/// Implements [`IntoIterator`] for a cursor type by routing through
/// [`Entries`].
macro_rules! cursor_into_iter {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::std::iter::IntoIterator for $ty {
            type Item = ::std::result::Result<$crate::DirectoryEntry, $crate::WalkError>;
            type IntoIter = $crate::cursor::Entries<$ty>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::cursor::DirectoryCursor::entries(self)
            }
        }
    )+};
}

pub(crate) use cursor_into_iter;
