use thiserror::Error;

use crate::cursor::Direction;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A zipper always has a focus, so it cannot be built from nothing.
    #[error("cannot build a zipper from an empty sequence")]
    InvalidArgument,
    #[error("no {0} element")]
    InvalidState(Direction),
    /// `pos` is wide enough to hold any `usize` request as well as a
    /// relative move that would land before the start of the sequence.
    #[error("position {pos} out of range for size {size}")]
    IndexOutOfRange { pos: i128, size: usize },
    /// A window average whose numerator or denominator does not fit the
    /// element type, or whose sum does not fit an `i128`.
    #[error("window average does not fit the element type")]
    AverageOverflow,
}
