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

//! # Cursor Capability Contract
//!
//! The minimal set of operations a sequence must supply so that
//! `ForwardIter` can synthesize a complete forward traversal type on top of
//! it. A cursor is an opaque positional handle into exactly one sequence; it
//! knows how to step to the next element, how to compare itself with another
//! position, and where the element under it lives in memory.
//!
//! | Capability       | Provided by                       |
//! |------------------|-----------------------------------|
//! | default value    | `Default`                         |
//! | copy / assign    | `Clone`                           |
//! | advance          | `Cursor::advance`                 |
//! | equality         | `PartialEq`                       |
//! | element address  | `Cursor::current`                 |
//!
//! A type lacking any of these is rejected by the trait bound, so every
//! `ForwardIter<C, ..>` is known at compile time to be fully formed.

/// A positional handle into a sequence.
///
/// # Safety
///
/// Implementors guarantee that:
///
/// - whenever the cursor denotes a dereferenceable position, `current` returns
///   a pointer that is valid for reads for as long as the borrow the cursor
///   was created from is alive, and valid for writes as well when that borrow
///   was exclusive;
/// - two cursors of the same sequence denoting different dereferenceable
///   positions never return the same address (unless `Item` is zero-sized);
/// - cloning a cursor and advancing both copies the same number of times
///   yields cursors that compare equal and denote the same element
///   (the multi-pass property).
///
/// `advance` and `current` themselves must never be undefined behavior, even
/// past the end; what they return there is unspecified.
///
/// # Examples
///
/// ```rust
/// use stepwise_core::cursor::Cursor;
///
/// #[derive(Clone, Default, PartialEq)]
/// struct TripleCursor {
///     cells: Option<std::ptr::NonNull<[u32; 3]>>,
///     at: usize,
/// }
///
/// unsafe impl Cursor for TripleCursor {
///     type Item = u32;
///
///     fn advance(&mut self) {
///         self.at += 1;
///     }
///
///     fn current(&self) -> *mut u32 {
///         match self.cells {
///             Some(cells) => cells.as_ptr().cast::<u32>().wrapping_add(self.at),
///             None => std::ptr::null_mut(),
///         }
///     }
/// }
/// ```
///
/// A cursor lacking one of the capabilities is rejected. Without `Default`:
///
/// ```compile_fail
/// use stepwise_core::cursor::Cursor;
///
/// #[derive(Clone, PartialEq)]
/// struct NoDefault(usize);
///
/// unsafe impl Cursor for NoDefault {
///     type Item = ();
///     fn advance(&mut self) {
///         self.0 += 1;
///     }
///     fn current(&self) -> *mut () {
///         std::ptr::NonNull::<()>::dangling().as_ptr()
///     }
/// }
/// ```
///
/// Without `PartialEq`, the type cannot be wrapped in a `ForwardIter`:
///
/// ```compile_fail
/// use stepwise_core::forward::ForwardIter;
///
/// #[derive(Clone, Default)]
/// struct NoEquality(usize);
///
/// let it: ForwardIter<NoEquality> = ForwardIter::new(NoEquality(0));
/// ```
pub unsafe trait Cursor: Clone + Default + PartialEq {
    /// The element type this cursor refers to.
    type Item;

    /// Moves the cursor one element forward.
    fn advance(&mut self);

    /// Returns the address of the element under the cursor.
    fn current(&self) -> *mut Self::Item;

    /// Returns `true` if `self` and `other` belong to the same sequence.
    ///
    /// Only consulted by the `sequence-check` feature. The default claims
    /// every pair is related, which keeps the check free for cursors that
    /// cannot tell.
    #[inline(always)]
    fn same_sequence(&self, _other: &Self) -> bool {
        true
    }
}
