//! A list zipper: a focus on one element of a non-empty sequence, with the
//! elements before and after it in view.
//!
//! ```
//! use zipper::{Cursor, CursorWithPosition, Traverse, Zipper};
//!
//! let mut zipper = Zipper::new(vec![1, 2, 3, 4])?;
//! zipper.next()?;
//! assert_eq!(zipper.current(), &2);
//! zipper.move_to(3)?;
//! assert_eq!(zipper.before(), &[1, 2, 3]);
//! assert_eq!(zipper.fold_forward(0, |acc, x| acc + x), 10);
//! # Ok::<(), zipper::Error>(())
//! ```
//!
//! [`running_max`], [`moving_average`] and [`record_highs`] build per-element
//! analyses on top of the context-aware traversals.

pub use cursor::{Cursor, CursorWithPosition, Direction};
pub use describe::{Describe, Stats};
pub use error::Error;
pub use slice_zipper::SliceZipper;
pub use traverse::Traverse;
pub use window::{moving_average, record_highs, running_max};
pub use zipper::Zipper;

mod cursor;
mod describe;
mod error;
mod slice_zipper;
mod traverse;
mod window;
mod zipper;
