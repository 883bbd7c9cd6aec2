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

//! # Stepwise Core
//!
//! Synthesizes complete forward iterators from minimal cursors. A sequence
//! supplies a cursor type with five capabilities (default value, copy,
//! advance, equality, element address) and receives, without further work,
//! a traversal type with pre- and post-advance, dereference, cross-const
//! comparison, and a one-way conversion from mutable to read-only access.
//!
//! ## Modules
//!
//! - `cursor`: The `Cursor` capability contract.
//! - `category`: Zero-sized traversal tags (`ForwardTag`, `InputTag`) and the
//!   `MultiPass` gate used for compile-time algorithm selection.
//! - `forward`: The `ForwardIter` adapter and its `ConstForwardIter` alias.
//! - `compare`: Equality across mutabilities, plus `equal`/`not_equal`.
//! - `span`: `Span`, which exposes a `[begin, end)` pair as a Rust `Iterator`.
//! - `cursors`: Ready-made cursors, currently `SliceCursor`.
//! - `algorithm`: `distance`, `advance_by`, and `next`.
//! - `utils`: The `Const`/`Mut` markers.
//!
//! ## Cost Model
//!
//! Every adapter has the size of its cursor. No operation checks bounds or
//! sequence identity unless the `sequence-check` feature is enabled, in
//! which case comparisons assert that both sides share a sequence.
//!
//! ## Usage
//!
//! ```rust
//! use stepwise_core::cursors::slice::SliceCursor;
//! use stepwise_core::forward::{ConstForwardIter, ForwardIter};
//!
//! let mut data = [10, 20, 30];
//! let (begin, end) = SliceCursor::bounds(&mut data);
//!
//! let mut it: ForwardIter<_> = ForwardIter::new(begin);
//! let first = it.post_advance();
//! let view: ConstForwardIter<_> = it.into_const();
//!
//! // SAFETY: both iterators point inside `data`.
//! assert_eq!(unsafe { (*first.get(), *view.get()) }, (10, 20));
//!
//! let last: ForwardIter<_> = ForwardIter::new(end);
//! assert_ne!(view, last);
//! ```

pub mod algorithm;
pub mod category;
pub mod compare;
pub mod cursor;
pub mod cursors;
pub mod forward;
pub mod span;
pub mod utils;

pub use category::{Category, ForwardTag, InputTag, MultiPass, Traversal};
pub use cursor::Cursor;
pub use cursors::SliceCursor;
pub use forward::{ConstForwardIter, ForwardIter};
pub use span::Span;
pub use utils::marker::{Const, Mut, Mutability};
