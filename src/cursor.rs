use std::fmt;

use tracing::{debug, trace};

use crate::error::Error;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Previous => write!(f, "previous"),
        }
    }
}

/// A focus on one element of a non-empty sequence, with the elements before
/// it (nearest last) and after it (nearest first) in view.
///
/// `next` and `previous` are the only operations that move the focus. Every
/// other movement is built from them, so an implementation that keeps
/// `before ++ [current] ++ after` equal to its input across those two calls
/// keeps it everywhere.
///
/// Implementations must keep the views and the steps consistent: `next`
/// succeeds whenever `size_after()` is non-zero, `previous` succeeds whenever
/// `size_before()` is non-zero, and a successful step moves exactly one
/// element across the focus. [`crate::Traverse`] relies on this and panics
/// on a cursor that refuses a step its sizes allow.
pub trait Cursor {
    type Item;

    fn before(&self) -> &[Self::Item];
    fn current(&self) -> &Self::Item;
    fn after(&self) -> &[Self::Item];

    /// Moves the focus one element forward. Fails with
    /// [`Error::InvalidState`] at the last element, leaving the cursor as it
    /// was.
    fn next(&mut self) -> Result<(), Error>;

    /// Moves the focus one element back. Fails with [`Error::InvalidState`]
    /// at the first element, leaving the cursor as it was.
    fn previous(&mut self) -> Result<(), Error>;

    fn size(&self) -> usize {
        self.size_before() + 1 + self.size_after()
    }

    fn size_before(&self) -> usize {
        self.before().len()
    }

    fn size_after(&self) -> usize {
        self.after().len()
    }

    /// 0-based index of the focus.
    fn position(&self) -> usize {
        self.size_before()
    }

    fn at_start(&self) -> bool {
        self.size_before() == 0
    }

    fn at_end(&self) -> bool {
        self.size_after() == 0
    }

    fn peek_next(&self) -> Option<&Self::Item> {
        self.after().first()
    }

    fn peek_previous(&self) -> Option<&Self::Item> {
        self.before().last()
    }
}

/// Jumps to arbitrary positions by repeating single steps.
///
/// A jump costs one step per element crossed. There is no shortcut that
/// rebuilds the partition directly.
pub trait CursorWithPosition: Cursor {
    fn move_to(&mut self, pos: usize) -> Result<(), Error> {
        let size = self.size();
        if pos >= size {
            let err = Error::IndexOutOfRange {
                pos: pos as i128,
                size,
            };
            debug!(%err, "rejected move");
            return Err(err);
        }

        let from = self.position();
        if pos == from {
            return Ok(());
        }
        trace!(from, to = pos, size, "moving focus");
        if pos < from {
            for _ in pos..from {
                self.previous()?;
            }
        } else {
            for _ in from..pos {
                self.next()?;
            }
        }
        Ok(())
    }

    /// Moves `offset` elements from the current position, backwards when
    /// negative. The target must lie inside the sequence.
    fn move_by(&mut self, offset: isize) -> Result<(), Error> {
        let size = self.size();
        // Neither operand can overflow an i128.
        let target = self.position() as i128 + offset as i128;
        if target < 0 || target >= size as i128 {
            let err = Error::IndexOutOfRange { pos: target, size };
            debug!(%err, offset, "rejected move");
            return Err(err);
        }
        self.move_to(target as usize)
    }
}

impl<C: Cursor + ?Sized> CursorWithPosition for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Zipper;

    #[test]
    fn direction_names() {
        assert_eq!(Direction::Next.to_string(), "next");
        assert_eq!(Direction::Previous.to_string(), "previous");
    }

    #[test]
    fn move_to_steps_through_every_position() {
        let mut zipper = Zipper::new(vec!['a', 'b', 'c', 'd', 'e']).unwrap();
        zipper.move_to(4).unwrap();
        assert_eq!(zipper.current(), &'e');
        assert_eq!(zipper.before(), &['a', 'b', 'c', 'd']);
        zipper.move_to(1).unwrap();
        assert_eq!(zipper.current(), &'b');
        assert_eq!(zipper.after(), &['c', 'd', 'e']);
        zipper.move_to(1).unwrap();
        assert_eq!(zipper.position(), 1);
    }

    #[test]
    fn move_to_out_of_range() {
        let mut zipper = Zipper::new(vec![1, 2, 3]).unwrap();
        zipper.move_to(2).unwrap();
        assert_eq!(
            zipper.move_to(3),
            Err(Error::IndexOutOfRange { pos: 3, size: 3 })
        );
        assert_eq!(zipper.position(), 2);
        assert_eq!(
            zipper.move_to(usize::MAX),
            Err(Error::IndexOutOfRange {
                pos: usize::MAX as i128,
                size: 3
            })
        );
    }

    #[test]
    fn move_by() {
        let mut zipper = Zipper::new(vec![10, 20, 30, 40]).unwrap();
        zipper.move_by(3).unwrap();
        assert_eq!(zipper.current(), &40);
        zipper.move_by(-2).unwrap();
        assert_eq!(zipper.current(), &20);
        zipper.move_by(0).unwrap();
        assert_eq!(zipper.current(), &20);

        assert_eq!(
            zipper.move_by(-2),
            Err(Error::IndexOutOfRange { pos: -1, size: 4 })
        );
        assert_eq!(
            zipper.move_by(3),
            Err(Error::IndexOutOfRange { pos: 4, size: 4 })
        );
        assert_eq!(
            zipper.move_by(isize::MAX),
            Err(Error::IndexOutOfRange {
                pos: isize::MAX as i128 + 1,
                size: 4
            })
        );
        assert_eq!(zipper.position(), 1);
    }

    #[test]
    fn peeking() {
        let mut zipper = Zipper::new(vec![1, 2, 3]).unwrap();
        assert!(zipper.at_start());
        assert_eq!(zipper.peek_previous(), None);
        assert_eq!(zipper.peek_next(), Some(&2));
        zipper.move_to(2).unwrap();
        assert!(zipper.at_end());
        assert_eq!(zipper.peek_previous(), Some(&2));
        assert_eq!(zipper.peek_next(), None);
    }
}
