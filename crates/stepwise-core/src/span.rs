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

//! # Spans
//!
//! A `Span` is a half-open range `[begin, end)` of `ForwardIter`s exposed as
//! a standard Rust `Iterator`. Containers build one internally from their
//! cursors and hand it out, so clients get `for` loops and iterator adaptors
//! without touching cursors or `unsafe`.
//!
//! ## Highlights
//!
//! - Read-only spans yield `&'a T`, mutable spans yield `&'a mut T`.
//! - Implements `FusedIterator`: once `begin` reaches `end` it stays there.
//! - Read-only spans are `Clone` when their category is `MultiPass`; a clone
//!   replays exactly the same elements.
//! - A mutable span converts into a read-only one.
//!
//! ## Usage
//!
//! ```rust
//! use stepwise_core::cursors::slice::{span, span_mut};
//!
//! let mut data = [1, 2, 3];
//! span_mut(&mut data).for_each(|x| *x += 1);
//!
//! let s = span(&data);
//! let replay = s.clone();
//! assert_eq!(s.sum::<i32>(), 9);
//! assert_eq!(replay.max(), Some(&4));
//! ```

use crate::category::{Category, ForwardTag, MultiPass};
use crate::cursor::Cursor;
use crate::forward::ForwardIter;
use crate::utils::marker::{Const, Mut, Mutability};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// A half-open range of forward iterators, iterated as `&'a T` or
/// `&'a mut T`.
pub struct Span<'a, C, M = Const, G = ForwardTag> {
    begin: ForwardIter<C, M, G>,
    end: ForwardIter<C, M, G>,
    _marker: PhantomData<&'a ()>,
}

impl<'a, C, M, G> Span<'a, C, M, G>
where
    C: Cursor,
    M: Mutability,
    G: Category,
{
    /// Creates a span from `begin` up to, but excluding, `end`.
    ///
    /// # Safety
    ///
    /// - `begin` and `end` refer to the same sequence and `end` is reachable
    ///   from `begin` by advancing.
    /// - Every position in `[begin, end)` is dereferenceable, and its element
    ///   stays alive for `'a`.
    /// - For `Const` spans, no element is written during `'a` by anyone else.
    /// - For `Mut` spans, nothing else reads or writes the elements during
    ///   `'a`.
    #[inline(always)]
    pub unsafe fn new(begin: ForwardIter<C, M, G>, end: ForwardIter<C, M, G>) -> Self {
        Self {
            begin,
            end,
            _marker: PhantomData,
        }
    }

    /// Returns the iterator at the next element to be yielded.
    #[inline(always)]
    pub fn begin(&self) -> &ForwardIter<C, M, G> {
        &self.begin
    }

    /// Returns the past-the-end iterator.
    #[inline(always)]
    pub fn end(&self) -> &ForwardIter<C, M, G> {
        &self.end
    }

    /// Returns `true` if nothing is left to yield.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Consumes the span and returns its bounds.
    #[inline(always)]
    pub fn into_bounds(self) -> (ForwardIter<C, M, G>, ForwardIter<C, M, G>) {
        (self.begin, self.end)
    }
}

impl<'a, C, G> Iterator for Span<'a, C, Const, G>
where
    C: Cursor,
    C::Item: 'a,
    G: Category,
{
    type Item = &'a C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `begin != end`, so `begin` is dereferenceable for `'a` per
        // the contract of `Span::new`.
        let item = unsafe { self.begin.get() };
        self.begin.advance();
        Some(item)
    }
}

impl<'a, C, G> Iterator for Span<'a, C, Mut, G>
where
    C: Cursor,
    C::Item: 'a,
    G: Category,
{
    type Item = &'a mut C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `begin != end`, so `begin` is dereferenceable for `'a`.
        // The span is not `Clone` and `begin` only moves forward, so each
        // element is handed out at most once.
        let item = unsafe { self.begin.get_mut() };
        self.begin.advance();
        Some(item)
    }
}

impl<'a, C, G> FusedIterator for Span<'a, C, Const, G>
where
    C: Cursor,
    C::Item: 'a,
    G: Category,
{
}

impl<'a, C, G> FusedIterator for Span<'a, C, Mut, G>
where
    C: Cursor,
    C::Item: 'a,
    G: Category,
{
}

impl<C, G> Clone for Span<'_, C, Const, G>
where
    C: Cursor,
    G: MultiPass,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            begin: self.begin.clone(),
            end: self.end.clone(),
            _marker: PhantomData,
        }
    }
}

impl<'a, C, G> From<Span<'a, C, Mut, G>> for Span<'a, C, Const, G>
where
    C: Cursor,
    G: Category,
{
    #[inline(always)]
    fn from(span: Span<'a, C, Mut, G>) -> Self {
        Self {
            begin: span.begin.into_const(),
            end: span.end.into_const(),
            _marker: PhantomData,
        }
    }
}

impl<C, M, G> std::fmt::Debug for Span<'_, C, M, G>
where
    C: Cursor + std::fmt::Debug,
    M: Mutability,
    G: Category,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}
