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

//! # Forward Iterator Adapter
//!
//! `ForwardIter` turns any `Cursor` into a complete forward traversal type:
//! pre- and post-advance, element access through a pointer or a reference,
//! cursor access for stronger adapters built on top, and a one-directional
//! conversion from mutable to read-only element access.
//!
//! The adapter holds exactly one cursor and nothing else. Mutability and
//! category are phantom parameters, so `ForwardIter<C, M, G>` has the size
//! and layout of `C`.
//!
//! ## Preconditions
//!
//! Nothing here checks bounds. Advancing or dereferencing a past-the-end
//! iterator, or comparing iterators from different sequences, is a
//! precondition violation. Advancing is always memory safe (it only moves
//! the cursor); dereferencing is `unsafe` and the caller vouches for the
//! position.
//!
//! ## Usage
//!
//! A container exposes its cursor through two aliases, and clients use only
//! the iterator surface:
//!
//! ```rust
//! use stepwise_core::cursors::slice::SliceCursor;
//! use stepwise_core::forward::{ConstForwardIter, ForwardIter};
//!
//! let mut data = [10, 20, 30];
//! let (begin, end) = SliceCursor::bounds(&mut data);
//!
//! let mut it: ForwardIter<_> = ForwardIter::new(begin);
//! it.advance().advance();
//! // SAFETY: `it` denotes the third element of `data`.
//! assert_eq!(unsafe { *it.get() }, 30);
//!
//! it.advance();
//! let last: ConstForwardIter<_> = ForwardIter::new(end);
//! assert_eq!(it, last);
//! ```

use crate::category::{Category, ForwardTag, Traversal};
use crate::cursor::Cursor;
use crate::utils::marker::{Const, Mut, Mutability};
use std::marker::PhantomData;

/// A forward iterator synthesized from a cursor `C`.
///
/// `M` selects read-only (`Const`) or read-write (`Mut`) element access and
/// `G` the traversal category.
#[repr(transparent)]
pub struct ForwardIter<C, M = Mut, G = ForwardTag> {
    cursor: C,
    _marker: PhantomData<fn() -> (M, G)>,
}

/// A forward iterator with read-only element access.
pub type ConstForwardIter<C, G = ForwardTag> = ForwardIter<C, Const, G>;

impl<C, M, G> ForwardIter<C, M, G>
where
    C: Cursor,
    M: Mutability,
    G: Category,
{
    /// Wraps `cursor`. No validation is performed.
    #[inline(always)]
    pub const fn new(cursor: C) -> Self {
        Self {
            cursor,
            _marker: PhantomData,
        }
    }

    /// Returns the traversal strength of this iterator type.
    #[inline(always)]
    pub const fn traversal() -> Traversal {
        G::TRAVERSAL
    }

    /// Moves to the next element and returns `self`.
    ///
    /// The result is unspecified if `self` is past the end.
    #[inline(always)]
    pub fn advance(&mut self) -> &mut Self {
        self.cursor.advance();
        self
    }

    /// Moves to the next element and returns the position held before the
    /// call.
    ///
    /// Costs one clone and one advance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stepwise_core::cursors::slice::SliceCursor;
    /// # use stepwise_core::forward::ForwardIter;
    /// let mut data = [1, 2];
    /// let mut it: ForwardIter<_> = ForwardIter::new(SliceCursor::begin(&mut data));
    /// let before = it.post_advance();
    /// assert_eq!(unsafe { *before.get() }, 1);
    /// assert_eq!(unsafe { *it.get() }, 2);
    /// ```
    #[inline(always)]
    pub fn post_advance(&mut self) -> Self {
        let snapshot = self.clone();
        self.advance();
        snapshot
    }

    /// Returns the address of the current element.
    ///
    /// Always yields the same address `get` would borrow from.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const C::Item {
        self.cursor.current()
    }

    /// Returns a shared reference to the current element.
    ///
    /// # Safety
    ///
    /// `self` must denote a dereferenceable position, the element must stay
    /// alive and unchanged for `'r`, and no mutable reference to it may exist
    /// during `'r`.
    #[inline(always)]
    pub unsafe fn get<'r>(&self) -> &'r C::Item {
        // SAFETY: upheld by the caller and the `Cursor` contract.
        unsafe { &*self.cursor.current() }
    }

    /// Returns a shared reference to the wrapped cursor.
    #[inline(always)]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Returns a mutable reference to the wrapped cursor.
    ///
    /// Intended for stronger traversal layers that extend the cursor's
    /// movement (backwards, jumps) while reusing this adapter.
    #[inline(always)]
    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Consumes the iterator and returns the wrapped cursor.
    #[inline(always)]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C, G> ForwardIter<C, Mut, G>
where
    C: Cursor,
    G: Category,
{
    /// Returns the mutable address of the current element.
    #[inline(always)]
    pub fn as_mut_ptr(&self) -> *mut C::Item {
        self.cursor.current()
    }

    /// Returns a mutable reference to the current element.
    ///
    /// # Safety
    ///
    /// `self` must denote a dereferenceable position, the element must stay
    /// alive for `'r`, and no other reference to it, obtained through this
    /// iterator, a copy of it, or the underlying sequence, may be used during
    /// `'r`.
    #[inline(always)]
    pub unsafe fn get_mut<'r>(&mut self) -> &'r mut C::Item {
        // SAFETY: upheld by the caller and the `Cursor` contract.
        unsafe { &mut *self.cursor.current() }
    }

    /// Converts into a read-only iterator at the same position.
    #[inline(always)]
    pub fn into_const(self) -> ForwardIter<C, Const, G> {
        ForwardIter::new(self.cursor)
    }

    /// Returns a read-only copy of this iterator. `self` is left untouched.
    #[inline(always)]
    pub fn as_const(&self) -> ForwardIter<C, Const, G> {
        ForwardIter::new(self.cursor.clone())
    }
}

impl<C, M, G> From<C> for ForwardIter<C, M, G>
where
    C: Cursor,
    M: Mutability,
    G: Category,
{
    #[inline(always)]
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}

/// The conversion only goes from `Mut` to `Const`. Raising a read-only
/// iterator back to mutable access does not compile:
///
/// ```compile_fail
/// use stepwise_core::cursors::slice::SliceCursor;
/// use stepwise_core::forward::{ConstForwardIter, ForwardIter};
/// use stepwise_core::utils::marker::Mut;
///
/// let mut data = [1, 2];
/// let read_only: ConstForwardIter<_> = ConstForwardIter::new(SliceCursor::begin(&mut data));
/// let writable: ForwardIter<_, Mut> = read_only.into();
/// ```
///
/// Nor does writing through one:
///
/// ```compile_fail
/// use stepwise_core::cursors::slice::SliceCursor;
/// use stepwise_core::forward::ConstForwardIter;
///
/// let mut data = [1, 2];
/// let mut read_only: ConstForwardIter<_> = ConstForwardIter::new(SliceCursor::begin(&mut data));
/// unsafe { *read_only.get_mut() = 3 };
/// ```
impl<C, G> From<ForwardIter<C, Mut, G>> for ForwardIter<C, Const, G>
where
    C: Cursor,
    G: Category,
{
    #[inline(always)]
    fn from(iter: ForwardIter<C, Mut, G>) -> Self {
        iter.into_const()
    }
}

impl<C, M, G> Default for ForwardIter<C, M, G>
where
    C: Cursor,
    M: Mutability,
    G: Category,
{
    /// All default iterators denote the same empty range: they compare equal
    /// to each other and are not dereferenceable.
    #[inline(always)]
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C, M, G> Clone for ForwardIter<C, M, G>
where
    C: Clone,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.cursor.clone_from(&source.cursor);
    }
}

impl<C, M, G> Copy for ForwardIter<C, M, G> where C: Copy {}

impl<C, M, G> std::fmt::Debug for ForwardIter<C, M, G>
where
    C: std::fmt::Debug,
    M: Mutability,
    G: Category,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardIter")
            .field("mutability", &M::NAME)
            .field("category", &G::NAME)
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::InputTag;
    use crate::cursors::slice::SliceCursor;

    type Iter<'a> = ForwardIter<SliceCursor<'a, i32>>;
    type ConstIter<'a> = ConstForwardIter<SliceCursor<'a, i32>>;

    #[test]
    fn test_layout_matches_cursor() {
        assert_eq!(
            std::mem::size_of::<Iter<'static>>(),
            std::mem::size_of::<SliceCursor<'static, i32>>()
        );
        assert_eq!(
            std::mem::size_of::<ConstIter<'static>>(),
            std::mem::size_of::<SliceCursor<'static, i32>>()
        );
    }

    #[test]
    fn test_three_element_walk() {
        let mut data = [10, 20, 30];
        let (begin, end) = SliceCursor::bounds(&mut data);

        let mut it = Iter::new(begin);
        it.advance();
        it.advance();
        assert_eq!(unsafe { *it.get() }, 30);

        it.advance();
        assert_eq!(it, Iter::new(end));
    }

    #[test]
    fn test_advance_matches_advanced_cursor() {
        let mut data = [1, 2, 3, 4, 5];
        let mut cursor = SliceCursor::begin(&mut data);
        for _ in 0..5 {
            let mut it = Iter::new(cursor);
            cursor.advance();
            it.advance();
            assert_eq!(it, Iter::new(cursor));
        }
    }

    #[test]
    fn test_advance_returns_self_for_chaining() {
        let mut data = [1, 2, 3];
        let mut it = Iter::new(SliceCursor::begin(&mut data));
        let third = unsafe { *it.advance().advance().get() };
        assert_eq!(third, 3);
    }

    #[test]
    fn test_post_advance_returns_prior_position() {
        let mut data = [7, 8, 9];
        let mut it = Iter::new(SliceCursor::begin(&mut data));
        let prior = it;

        let before = it.post_advance();
        assert_eq!(before, prior);
        assert_ne!(it, prior);

        let mut expected = prior;
        expected.advance();
        assert_eq!(it, expected);
        assert_eq!(unsafe { *before.get() }, 7);
        assert_eq!(unsafe { *it.get() }, 8);
    }

    #[test]
    fn test_get_and_as_ptr_observe_same_object() {
        let mut data = [4, 5, 6];
        let mut it = Iter::new(SliceCursor::begin(&mut data));
        it.advance();
        let by_ref: *const i32 = unsafe { it.get() };
        assert!(std::ptr::eq(by_ref, it.as_ptr()));
        assert!(std::ptr::eq(it.as_ptr(), it.as_mut_ptr()));
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut data = [1, 2, 3];
        {
            let mut it = Iter::new(SliceCursor::begin(&mut data));
            it.advance();
            unsafe { *it.get_mut() += 40 };
        }
        assert_eq!(data, [1, 42, 3]);
    }

    #[test]
    fn test_default_iterators_compare_equal() {
        assert_eq!(Iter::default(), Iter::default());
        assert_eq!(ConstIter::default(), Iter::default());
    }

    #[test]
    fn test_const_conversion_compares_equal_to_direct() {
        let mut data = [1, 2, 3];
        let mut cursor = SliceCursor::begin(&mut data);
        cursor.advance();

        let converted: ConstIter = Iter::new(cursor).into();
        let direct = ConstIter::new(cursor);
        assert_eq!(converted, direct);
        assert_eq!(unsafe { *converted.get() }, 2);
    }

    #[test]
    fn test_as_const_leaves_original_untouched() {
        let mut data = [1, 2];
        let mut it = Iter::new(SliceCursor::begin(&mut data));
        let view = it.as_const();
        it.advance();
        assert_ne!(view, it);
        assert_eq!(unsafe { *view.get() }, 1);
    }

    #[test]
    fn test_cursor_accessors() {
        let mut data = [1, 2, 3];
        let (begin, end) = SliceCursor::bounds(&mut data);
        let mut it = Iter::new(begin);

        assert_eq!(*it.cursor(), begin);
        it.cursor_mut().advance();
        assert_eq!(it.cursor().index(), 1);
        it.cursor_mut().advance();
        it.cursor_mut().advance();
        assert_eq!(it.into_cursor(), end);
    }

    #[test]
    fn test_from_cursor() {
        let mut data = [3];
        let cursor = SliceCursor::begin(&mut data);
        let it: Iter = cursor.into();
        assert_eq!(it, Iter::new(cursor));
    }

    #[test]
    fn test_traversal_reflects_tag() {
        assert_eq!(Iter::traversal(), Traversal::Forward);
        assert_eq!(
            ForwardIter::<SliceCursor<'static, i32>, Const, InputTag>::traversal(),
            Traversal::Input
        );
    }

    #[test]
    fn test_debug_output() {
        let it = Iter::default();
        let text = format!("{:?}", it);
        assert!(text.starts_with("ForwardIter"));
        assert!(text.contains("Mut"));
        assert!(text.contains("ForwardTag"));
    }
}
