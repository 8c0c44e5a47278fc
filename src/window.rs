//! Per-element analyses that need to look at an element's neighbours.
//!
//! All of these walk the cursor with the context-aware traversals, so they
//! leave it on the last element.

use std::iter;

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumCast, ToPrimitive};

use crate::error::Error;
use crate::traverse::Traverse;

/// The largest element seen so far at each position.
pub fn running_max<C>(cursor: &mut C) -> Vec<C::Item>
where
    C: Traverse + ?Sized,
    C::Item: Ord + Clone,
{
    let size = cursor.size();
    cursor.fold_with_context(
        Vec::with_capacity(size),
        |mut maxima, _before, current, _after| {
            let max = match maxima.last() {
                Some(max) if max >= current => max.clone(),
                _ => current.clone(),
            };
            maxima.push(max);
            maxima
        },
    )
}

/// Exact mean of each element and up to `radius` neighbours on either side.
///
/// Near the ends the window is cut short rather than padded, so the first
/// and last averages use fewer elements.
///
/// Sums are taken in `i128` and counts in `usize`, so a window may hold more
/// elements than `T` can count. Each average is reduced before it is turned
/// back into `T`. Fails with [`Error::AverageOverflow`] when a window sum
/// does not fit an `i128`, or a reduced average's numerator or denominator
/// does not fit `T`.
pub fn moving_average<C, T>(cursor: &mut C, radius: usize) -> Result<Vec<Ratio<T>>, Error>
where
    C: Traverse<Item = T> + ?Sized,
    T: Integer + NumCast + Clone,
{
    cursor
        .map_with_context(|before, current, after| {
            let lead = &before[before.len().saturating_sub(radius)..];
            let trail = &after[..radius.min(after.len())];
            let window = lead.iter().chain(iter::once(current)).chain(trail);
            let mut sum: i128 = 0;
            let mut count: usize = 0;
            for x in window {
                sum = x.to_i128().and_then(|x| sum.checked_add(x))?;
                count += 1;
            }
            // count includes the focus, so it is never zero.
            let mean = Ratio::new(sum, i128::try_from(count).ok()?);
            let numer = <T as NumCast>::from(*mean.numer())?;
            let denom = <T as NumCast>::from(*mean.denom())?;
            Some(Ratio::new(numer, denom))
        })
        .into_iter()
        .map(|mean| mean.ok_or(Error::AverageOverflow))
        .collect()
}

/// Marks the elements that are greater than everything before them while
/// something after them is greater still. A missing side never disqualifies.
pub fn record_highs<C>(cursor: &mut C) -> Vec<bool>
where
    C: Traverse + ?Sized,
    C::Item: Ord,
{
    cursor.map_with_context(|before, current, after| {
        let above_before = before.iter().max().map_or(true, |max| max < current);
        let below_after = after.iter().max().map_or(true, |max| max > current);
        above_before && below_after
    })
}
