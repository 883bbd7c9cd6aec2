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

//! # Slice Cursor
//!
//! `SliceCursor<'a, T>` walks a contiguous slice by index. It is the simplest
//! complete implementation of `Cursor` and the one the rest of the crate is
//! tested against.
//!
//! ## Usage
//!
//! ```rust
//! use stepwise_core::cursors::slice::{span, span_mut};
//!
//! let mut data = vec![1, 2, 3];
//! for x in span_mut(&mut data) {
//!     *x *= 10;
//! }
//! assert_eq!(span(&data).copied().collect::<Vec<_>>(), vec![10, 20, 30]);
//! ```

use crate::category::ForwardTag;
use crate::cursor::Cursor;
use crate::forward::ForwardIter;
use crate::span::Span;
use crate::utils::marker::{Const, Mut};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A cursor over the elements of a slice.
///
/// The default value has a dangling base and index zero; it compares equal
/// only to other default cursors.
pub struct SliceCursor<'a, T> {
    base: NonNull<T>,
    index: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: a `SliceCursor` behaves like a shared or exclusive slice borrow,
// depending on how it was created. The type does not record which, so both
// impls require what `&[T]` needs (`T: Sync`) and what `&mut [T]` needs
// (`T: Send`).
unsafe impl<T: Send + Sync> Send for SliceCursor<'_, T> {}
unsafe impl<T: Send + Sync> Sync for SliceCursor<'_, T> {}

impl<'a, T> SliceCursor<'a, T> {
    #[inline(always)]
    const fn at(base: NonNull<T>, index: usize) -> Self {
        Self {
            base,
            index,
            _marker: PhantomData,
        }
    }

    /// Returns a cursor at the first element of `slice`.
    #[inline(always)]
    pub fn begin(slice: &'a mut [T]) -> Self {
        Self::at(NonNull::from(slice).cast(), 0)
    }

    /// Returns a cursor one past the last element of `slice`.
    #[inline(always)]
    pub fn end(slice: &'a mut [T]) -> Self {
        let len = slice.len();
        Self::at(NonNull::from(slice).cast(), len)
    }

    /// Returns the begin and past-the-end cursors of `slice`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stepwise_core::cursors::slice::SliceCursor;
    /// # use stepwise_core::cursor::Cursor;
    /// let mut data = [1, 2];
    /// let (mut begin, end) = SliceCursor::bounds(&mut data);
    /// begin.advance();
    /// begin.advance();
    /// assert_eq!(begin, end);
    /// ```
    #[inline(always)]
    pub fn bounds(slice: &'a mut [T]) -> (Self, Self) {
        let len = slice.len();
        let base = NonNull::from(slice).cast();
        (Self::at(base, 0), Self::at(base, len))
    }

    /// Begin and past-the-end cursors that may only be read through.
    #[inline(always)]
    fn shared_bounds(slice: &'a [T]) -> (Self, Self) {
        let len = slice.len();
        let base = NonNull::from(slice).cast();
        (Self::at(base, 0), Self::at(base, len))
    }

    /// Returns the position of the cursor within its slice.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }
}

unsafe impl<T> Cursor for SliceCursor<'_, T> {
    type Item = T;

    #[inline(always)]
    fn advance(&mut self) {
        self.index += 1;
    }

    #[inline(always)]
    fn current(&self) -> *mut T {
        self.base.as_ptr().wrapping_add(self.index)
    }

    #[inline(always)]
    fn same_sequence(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    #[inline(always)]
    fn default() -> Self {
        Self::at(NonNull::dangling(), 0)
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.index == other.index
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> std::fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("base", &self.base)
            .field("index", &self.index)
            .finish()
    }
}

/// Returns a read-only span over `slice`.
#[inline]
pub fn span<T>(slice: &[T]) -> Span<'_, SliceCursor<'_, T>, Const, ForwardTag> {
    let (begin, end) = SliceCursor::shared_bounds(slice);
    // SAFETY: both cursors come from `slice`, `end` is reachable from
    // `begin`, and the shared borrow keeps every element readable for the
    // lifetime of the span.
    unsafe { Span::new(ForwardIter::new(begin), ForwardIter::new(end)) }
}

/// Returns a read-write span over `slice`.
#[inline]
pub fn span_mut<T>(slice: &mut [T]) -> Span<'_, SliceCursor<'_, T>, Mut, ForwardTag> {
    let (begin, end) = SliceCursor::bounds(slice);
    // SAFETY: as in `span`; the exclusive borrow additionally guarantees that
    // nothing else reads or writes the elements while the span yields them.
    unsafe { Span::new(ForwardIter::new(begin), ForwardIter::new(end)) }
}
