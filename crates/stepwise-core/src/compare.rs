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

//! # Comparison Protocol
//!
//! Two iterators are equal exactly when their cursors are equal. Comparison
//! is defined across mutabilities, so a read-only iterator can be checked
//! against a mutable one over the same cursor and category.
//!
//! Both iterators are assumed to come from the same sequence. By default this
//! is never checked; enabling the `sequence-check` feature asserts
//! `Cursor::same_sequence` on every comparison.
//!
//! No ordering is defined: forward traversal cannot tell which of two
//! positions comes first without walking.

use crate::category::Category;
use crate::cursor::Cursor;
use crate::forward::ForwardIter;
use crate::utils::marker::Mutability;

impl<C, M1, M2, G> PartialEq<ForwardIter<C, M2, G>> for ForwardIter<C, M1, G>
where
    C: Cursor,
    M1: Mutability,
    M2: Mutability,
    G: Category,
{
    #[inline(always)]
    fn eq(&self, other: &ForwardIter<C, M2, G>) -> bool {
        #[cfg(feature = "sequence-check")]
        assert!(
            self.cursor().same_sequence(other.cursor()),
            "called `ForwardIter::eq` with iterators over different sequences"
        );
        self.cursor() == other.cursor()
    }
}

impl<C, M, G> Eq for ForwardIter<C, M, G>
where
    C: Cursor + Eq,
    M: Mutability,
    G: Category,
{
}

/// Returns `true` if `lhs` and `rhs` denote the same position.
#[inline(always)]
pub fn equal<C, M1, M2, G>(lhs: &ForwardIter<C, M1, G>, rhs: &ForwardIter<C, M2, G>) -> bool
where
    C: Cursor,
    M1: Mutability,
    M2: Mutability,
    G: Category,
{
    lhs == rhs
}

/// Returns `true` if `lhs` and `rhs` denote different positions.
#[inline(always)]
pub fn not_equal<C, M1, M2, G>(lhs: &ForwardIter<C, M1, G>, rhs: &ForwardIter<C, M2, G>) -> bool
where
    C: Cursor,
    M1: Mutability,
    M2: Mutability,
    G: Category,
{
    !equal(lhs, rhs)
}
