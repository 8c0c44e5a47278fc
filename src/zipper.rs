use tracing::debug;

use crate::cursor::{Cursor, CursorWithPosition, Direction};
use crate::error::Error;
use crate::slice_zipper::SliceZipper;

/// A zipper that owns its elements.
///
/// The elements live in a single vector. `pos` splits it into the elements
/// before the focus, the focus itself and the elements after it, so a step in
/// either direction only moves that split point and element values are never
/// copied, inserted or removed while navigating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zipper<T> {
    items: Vec<T>,
    // Always less than items.len(), which is never zero.
    pos: usize,
}

impl<T> Zipper<T> {
    /// Puts the focus on the first element of `items`.
    pub fn new(items: Vec<T>) -> Result<Self, Error> {
        if items.is_empty() {
            debug!("rejected empty sequence");
            return Err(Error::InvalidArgument);
        }
        Ok(Zipper { items, pos: 0 })
    }

    pub fn with_position(items: Vec<T>, pos: usize) -> Result<Self, Error> {
        let mut zipper = Self::new(items)?;
        zipper.move_to(pos)?;
        Ok(zipper)
    }

    pub fn from_iter_checked<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(iter.into_iter().collect())
    }

    /// Mutable access to the focus. Only the value changes; the focus stays
    /// where it is.
    pub fn current_mut(&mut self) -> &mut T {
        &mut self.items[self.pos]
    }

    /// A borrowing zipper over the same elements, focused on the same
    /// position. Moving it leaves `self` where it is.
    pub fn as_slice_zipper(&self) -> SliceZipper<'_, T> {
        SliceZipper::from_parts(&self.items, self.pos)
    }

    /// Gives back the elements in their original order.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> TryFrom<Vec<T>> for Zipper<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Zipper::new(items)
    }
}

impl<T> Cursor for Zipper<T> {
    type Item = T;

    fn before(&self) -> &[T] {
        &self.items[..self.pos]
    }

    fn current(&self) -> &T {
        &self.items[self.pos]
    }

    fn after(&self) -> &[T] {
        &self.items[self.pos + 1..]
    }

    fn next(&mut self) -> Result<(), Error> {
        if self.pos + 1 >= self.items.len() {
            debug!(pos = self.pos, "no next element");
            return Err(Error::InvalidState(Direction::Next));
        }
        self.pos += 1;
        Ok(())
    }

    fn previous(&mut self) -> Result<(), Error> {
        if self.pos == 0 {
            debug!("no previous element");
            return Err(Error::InvalidState(Direction::Previous));
        }
        self.pos -= 1;
        Ok(())
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn size_before(&self) -> usize {
        self.pos
    }

    fn size_after(&self) -> usize {
        self.items.len() - self.pos - 1
    }
}
