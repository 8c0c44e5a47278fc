use tracing::debug;

use crate::cursor::{Cursor, CursorWithPosition, Direction};
use crate::error::Error;

/// A zipper over a borrowed slice. Same contract as [`crate::Zipper`], but
/// the elements stay with their owner.
#[derive(Debug)]
pub struct SliceZipper<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> Clone for SliceZipper<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceZipper<'a, T> {}

impl<'a, T> PartialEq for SliceZipper<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.slice.as_ptr() == other.slice.as_ptr()
            && self.slice.len() == other.slice.len()
            && self.pos == other.pos
    }
}

impl<'a, T> SliceZipper<'a, T> {
    pub fn new(slice: &'a [T]) -> Result<Self, Error> {
        if slice.is_empty() {
            debug!("rejected empty slice");
            return Err(Error::InvalidArgument);
        }
        Ok(SliceZipper { slice, pos: 0 })
    }

    pub fn with_position(slice: &'a [T], pos: usize) -> Result<Self, Error> {
        let mut zipper = Self::new(slice)?;
        zipper.move_to(pos)?;
        Ok(zipper)
    }

    // Callers guarantee pos < slice.len().
    pub(crate) fn from_parts(slice: &'a [T], pos: usize) -> Self {
        debug_assert!(pos < slice.len(), "Position out of bounds");
        SliceZipper { slice, pos }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<'a, T> Cursor for SliceZipper<'a, T> {
    type Item = T;

    fn before(&self) -> &[T] {
        &self.slice[..self.pos]
    }

    fn current(&self) -> &T {
        &self.slice[self.pos]
    }

    fn after(&self) -> &[T] {
        &self.slice[self.pos + 1..]
    }

    fn next(&mut self) -> Result<(), Error> {
        if self.pos + 1 >= self.slice.len() {
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
        self.slice.len()
    }

    fn size_before(&self) -> usize {
        self.pos
    }

    fn size_after(&self) -> usize {
        self.slice.len() - self.pos - 1
    }
}
