// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Generic traversal helpers built only on the `ForwardIter` surface.
//!
//! Helpers that walk a range more than once, or that need a copy of a
//! position to stay meaningful after the original moved, require a
//! `MultiPass` category and are rejected at compile time for weaker tags.

use crate::category::{Category, MultiPass, Traversal};
use crate::cursor::Cursor;
use crate::forward::ForwardIter;
use crate::utils::marker::Mutability;

/// Returns `true` if iterators tagged with `G` support multiple passes.
///
/// Reads only `G::TRAVERSAL`; it does not look at whether `G` implements
/// `MultiPass`. See `Category` for the rule tying the two together.
#[inline(always)]
pub const fn is_multi_pass<G>() -> bool
where
    G: Category,
{
    G::TRAVERSAL as u8 >= Traversal::Forward as u8
}

/// Advances `iter` by `n` elements.
///
/// The result is unspecified if the end is passed on the way.
#[inline]
pub fn advance_by<C, M, G>(iter: &mut ForwardIter<C, M, G>, n: usize)
where
    C: Cursor,
    M: Mutability,
    G: Category,
{
    for _ in 0..n {
        iter.advance();
    }
}

/// Returns a copy of `iter` advanced by `n` elements. `iter` is unchanged.
#[inline]
pub fn next<C, M, G>(iter: &ForwardIter<C, M, G>, n: usize) -> ForwardIter<C, M, G>
where
    C: Cursor,
    M: Mutability,
    G: MultiPass,
{
    let mut copy = iter.clone();
    advance_by(&mut copy, n);
    copy
}

/// Counts the steps needed to get from `first` to `last`.
///
/// `last` must be reachable from `first`; otherwise this does not
/// terminate.
///
/// # Examples
///
/// ```rust
/// # use stepwise_core::algorithm::distance;
/// # use stepwise_core::cursors::slice::SliceCursor;
/// # use stepwise_core::forward::ForwardIter;
/// let mut data = [1, 2, 3, 4];
/// let (begin, end) = SliceCursor::bounds(&mut data);
/// let first: ForwardIter<_> = ForwardIter::new(begin);
/// let last: ForwardIter<_> = ForwardIter::new(end);
/// assert_eq!(distance(&first, &last), 4);
/// ```
#[inline]
pub fn distance<C, M1, M2, G>(first: &ForwardIter<C, M1, G>, last: &ForwardIter<C, M2, G>) -> usize
where
    C: Cursor,
    M1: Mutability,
    M2: Mutability,
    G: MultiPass,
{
    let mut walker = first.clone();
    let mut steps: usize = 0;
    while walker != *last {
        walker.advance();
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{ForwardTag, InputTag};
    use crate::cursors::slice::SliceCursor;
    use crate::forward::ConstForwardIter;
    use crate::utils::marker::Mut;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    type Iter<'a> = ForwardIter<SliceCursor<'a, u32>, Mut>;

    #[test]
    fn test_is_multi_pass() {
        assert!(is_multi_pass::<ForwardTag>());
        assert!(!is_multi_pass::<InputTag>());
    }

    #[test]
    fn test_distance_empty() {
        let mut data: [u32; 0] = [];
        let (begin, end) = SliceCursor::bounds(&mut data);
        assert_eq!(distance(&Iter::new(begin), &Iter::new(end)), 0);
    }

    #[test]
    fn test_distance_across_mutability() {
        let mut data = [1u32, 2, 3];
        let (begin, end) = SliceCursor::bounds(&mut data);
        let first = Iter::new(begin);
        let last = ConstForwardIter::new(end);
        assert_eq!(distance(&first, &last), 3);
    }

    #[test]
    fn test_next_leaves_original() {
        let mut data = [1u32, 2, 3];
        let (begin, end) = SliceCursor::bounds(&mut data);
        let first = Iter::new(begin);
        let moved = next(&first, 3);
        assert_eq!(moved, Iter::new(end));
        assert_eq!(first, Iter::new(begin));
    }

    #[test]
    fn test_advance_by_works_for_input_tag() {
        let mut data = [1u32, 2, 3];
        let (begin, end) = SliceCursor::bounds(&mut data);
        let mut it: ForwardIter<_, Mut, InputTag> = ForwardIter::new(begin);
        advance_by(&mut it, 3);
        assert!(it == ForwardIter::<_, Mut, InputTag>::new(end));
    }

    #[test]
    fn test_multi_pass_property_randomized() {
        // Two copies advanced the same way agree at every step.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let len = rng.random_range(1..48);
            let mut data: Vec<u32> = (0..len).map(|_| rng.random()).collect();
            let (begin, end) = SliceCursor::bounds(&mut data);
            let start = rng.random_range(0..len);

            let mut a = next(&Iter::new(begin), start);
            let mut b = a;
            while a != Iter::new(end) {
                assert!(a == b);
                assert!(std::ptr::eq(a.as_ptr(), b.as_ptr()));
                a.advance();
                b.advance();
            }
            assert_eq!(b, Iter::new(end));
            assert_eq!(distance(&Iter::new(begin), &Iter::new(end)), len);
        }
    }
}
