use std::fmt::{self, Display};

use crate::cursor::Cursor;
use crate::slice_zipper::SliceZipper;
use crate::zipper::Zipper;

/// Where the focus is and how the sequence is split around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    pub position: usize,
    pub size: usize,
    pub size_before: usize,
    pub size_after: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos={}, size={}, before={}, after={}",
            self.position, self.size, self.size_before, self.size_after
        )
    }
}

pub trait Describe: Cursor {
    fn stats(&self) -> Stats {
        Stats {
            position: self.position(),
            size: self.size(),
            size_before: self.size_before(),
            size_after: self.size_after(),
        }
    }

    /// Renders the zipper as `[a, b] <c> [d, e]`, the focus in angle
    /// brackets.
    fn describe(&self) -> String
    where
        Self::Item: Display,
    {
        Rendered(self).to_string()
    }

    fn describe_with_stats(&self) -> String
    where
        Self::Item: Display,
    {
        format!("{}, {}", Rendered(self), self.stats())
    }
}

impl<C: Cursor + ?Sized> Describe for C {}

struct Rendered<'a, C: ?Sized>(&'a C);

impl<'a, C> Display for Rendered<'a, C>
where
    C: Cursor + ?Sized,
    C::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {}",
            List(self.0.before()),
            self.0.current(),
            List(self.0.after())
        )
    }
}

struct List<'a, T>(&'a [T]);

impl<'a, T: Display> Display for List<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: Display> Display for Zipper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered(self).fmt(f)
    }
}

impl<'a, T: Display> Display for SliceZipper<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered(self).fmt(f)
    }
}
