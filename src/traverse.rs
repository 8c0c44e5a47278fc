use crate::cursor::CursorWithPosition;

/// Folds and maps that walk the whole sequence by moving the focus.
///
/// Every operation visits position `i` by calling `move_to(i)` and then
/// reads the cursor, so the context-aware variants see exactly the
/// `before`/`after` views that navigation produces at that position. Each
/// visit after the first is a single step. When an operation returns, the
/// focus is on the last element it visited: the last element for forward
/// walks, the first for backward ones.
///
/// Callbacks get shared borrows of the elements and cannot reach the cursor
/// while the walk is in progress.
pub trait Traverse: CursorWithPosition {
    fn fold_forward<B, F>(&mut self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, &Self::Item) -> B,
    {
        let mut acc = init;
        for i in 0..self.size() {
            visit(self, i);
            acc = combine(acc, self.current());
        }
        acc
    }

    /// Like [`Traverse::fold_forward`], from the last element to the first.
    fn fold_backward<B, F>(&mut self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, &Self::Item) -> B,
    {
        let mut acc = init;
        for i in (0..self.size()).rev() {
            visit(self, i);
            acc = combine(acc, self.current());
        }
        acc
    }

    fn map<B, F>(&mut self, mut transform: F) -> Vec<B>
    where
        F: FnMut(&Self::Item) -> B,
    {
        let mut out = Vec::with_capacity(self.size());
        for i in 0..self.size() {
            visit(self, i);
            out.push(transform(self.current()));
        }
        out
    }

    fn filter<F>(&mut self, mut predicate: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        let mut out = Vec::new();
        for i in 0..self.size() {
            visit(self, i);
            let current = self.current();
            if predicate(current) {
                out.push(current.clone());
            }
        }
        out
    }

    /// Left fold whose combining function also sees the elements before
    /// (nearest last) and after (nearest first) each visited element.
    fn fold_with_context<B, F>(&mut self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, &[Self::Item], &Self::Item, &[Self::Item]) -> B,
    {
        let mut acc = init;
        for i in 0..self.size() {
            visit(self, i);
            acc = combine(acc, self.before(), self.current(), self.after());
        }
        acc
    }

    fn map_with_context<B, F>(&mut self, mut transform: F) -> Vec<B>
    where
        F: FnMut(&[Self::Item], &Self::Item, &[Self::Item]) -> B,
    {
        let mut out = Vec::with_capacity(self.size());
        for i in 0..self.size() {
            visit(self, i);
            out.push(transform(self.before(), self.current(), self.after()));
        }
        out
    }

    /// [`Traverse::map_with_context`] walking from the last element to the
    /// first. Results are kept in the order they were produced, so the
    /// output is reversed relative to the sequence.
    fn fold_right_with_context<B, F>(&mut self, mut transform: F) -> Vec<B>
    where
        F: FnMut(&[Self::Item], &Self::Item, &[Self::Item]) -> B,
    {
        let mut out = Vec::with_capacity(self.size());
        for i in (0..self.size()).rev() {
            visit(self, i);
            out.push(transform(self.before(), self.current(), self.after()));
        }
        out
    }
}

impl<C: CursorWithPosition + ?Sized> Traverse for C {}

// Walks only ever ask for positions in 0..size(). move_to accepts those
// unless the cursor refuses a step its sizes allow, which Cursor forbids.
fn visit<C: CursorWithPosition + ?Sized>(cursor: &mut C, pos: usize) {
    if let Err(err) = cursor.move_to(pos) {
        panic!("cursor refused a step its sizes allow while visiting {pos}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, Direction, Error, SliceZipper, Zipper};

    // A cursor written outside the crate's own types, relying on the
    // provided size and position methods.
    struct Letters {
        letters: Vec<char>,
        focus: usize,
    }

    impl Cursor for Letters {
        type Item = char;

        fn before(&self) -> &[char] {
            &self.letters[..self.focus]
        }

        fn current(&self) -> &char {
            &self.letters[self.focus]
        }

        fn after(&self) -> &[char] {
            &self.letters[self.focus + 1..]
        }

        fn next(&mut self) -> Result<(), Error> {
            if self.after().is_empty() {
                return Err(Error::InvalidState(Direction::Next));
            }
            self.focus += 1;
            Ok(())
        }

        fn previous(&mut self) -> Result<(), Error> {
            if self.before().is_empty() {
                return Err(Error::InvalidState(Direction::Previous));
            }
            self.focus -= 1;
            Ok(())
        }
    }

    fn numbers() -> Zipper<i64> {
        Zipper::from_iter_checked(1..=13).unwrap()
    }

    #[test]
    fn sum_and_product() {
        let mut zipper = numbers();
        assert_eq!(zipper.fold_forward(0, |acc, x| acc + x), 91);
        assert_eq!(zipper.fold_forward(1, |acc, x| acc * x), 6_227_020_800);
        assert_eq!(zipper.fold_backward(0, |acc, x| acc + x), 91);
    }

    #[test]
    fn visiting_order() {
        let mut zipper = Zipper::new(vec!['a', 'b', 'c']).unwrap();
        zipper.move_to(1).unwrap();
        let forward = zipper.fold_forward(String::new(), |mut s, c| {
            s.push(*c);
            s
        });
        assert_eq!(forward, "abc");
        assert_eq!(zipper.position(), 2);

        let backward = zipper.fold_backward(String::new(), |mut s, c| {
            s.push(*c);
            s
        });
        assert_eq!(backward, "cba");
        assert_eq!(zipper.position(), 0);
    }

    #[test]
    fn map_and_filter() {
        let mut zipper = numbers();
        assert_eq!(
            zipper.map(|x| x * 3),
            vec![3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 39]
        );
        assert_eq!(zipper.filter(|x| x % 2 == 0), vec![2, 4, 6, 8, 10, 12]);

        let folded = zipper.fold_forward(Vec::new(), |mut acc, x| {
            if x % 2 == 0 {
                acc.push(*x);
            }
            acc
        });
        assert_eq!(folded, zipper.filter(|x| x % 2 == 0));
    }

    #[test]
    fn context_views() {
        let mut zipper = Zipper::new(vec![1, 2, 3]).unwrap();
        let seen = zipper.map_with_context(|before, current, after| {
            (before.to_vec(), *current, after.to_vec())
        });
        assert_eq!(
            seen,
            vec![
                (vec![], 1, vec![2, 3]),
                (vec![1], 2, vec![3]),
                (vec![1, 2], 3, vec![]),
            ]
        );

        let seen = zipper.fold_right_with_context(|before, current, after| {
            (before.len(), *current, after.len())
        });
        assert_eq!(seen, vec![(2, 3, 0), (1, 2, 1), (0, 1, 2)]);
        assert_eq!(zipper.position(), 0);
    }

    #[test]
    fn fold_with_context_counts_smaller_neighbours() {
        let mut zipper = Zipper::new(vec![3, 1, 4, 1, 5]).unwrap();
        let counts = zipper.fold_with_context(Vec::new(), |mut acc, before, current, after| {
            let smaller = before.iter().chain(after).filter(|x| *x < current).count();
            acc.push(smaller);
            acc
        });
        assert_eq!(counts, vec![2, 0, 3, 0, 4]);
    }

    #[test]
    fn works_on_borrowed_slices() {
        let words = ["aaaa", "bbbb", "cccc", "dddd"];
        let mut zipper = SliceZipper::new(&words).unwrap();
        assert_eq!(zipper.map(|w| w.len()), vec![4, 4, 4, 4]);
        assert_eq!(zipper.filter(|w| w.starts_with('c')), vec!["cccc"]);
        assert_eq!(zipper.current(), &"dddd");
    }

    #[test]
    fn walks_any_cursor_that_keeps_its_steps_consistent() {
        let mut letters = Letters {
            letters: vec!['z', 'i', 'p'],
            focus: 1,
        };
        assert_eq!(letters.map(|c| c.to_ascii_uppercase()), vec!['Z', 'I', 'P']);
        assert_eq!(letters.position(), 2);
        let backward = letters.fold_backward(String::new(), |mut s, c| {
            s.push(*c);
            s
        });
        assert_eq!(backward, "piz");
        assert_eq!(
            letters.map_with_context(|before, _, after| (before.len(), after.len())),
            vec![(0, 2), (1, 1), (2, 0)]
        );
    }

    #[test]
    fn single_element_walks() {
        let mut zipper = Zipper::new(vec![7]).unwrap();
        assert_eq!(zipper.fold_backward(0, |acc, x| acc + x), 7);
        assert_eq!(
            zipper.fold_right_with_context(|b, c, a| (b.len(), *c, a.len())),
            vec![(0, 7, 0)]
        );
    }
}
