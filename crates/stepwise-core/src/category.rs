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

//! # Traversal Categories
//!
//! Zero-sized tags describing how strong a traversal is. A tag is attached to
//! every `ForwardIter` as a type parameter and never stored, so it costs
//! nothing at runtime while still letting generic code pick an algorithm at
//! compile time.
//!
//! ## Highlights
//!
//! - `Traversal` is an ordered enumeration of strengths (`Input < Forward`).
//! - `Category` exposes the strength and a human-readable `NAME`.
//! - `MultiPass` is implemented only by tags that guarantee the multi-pass
//!   property; algorithms that walk a range twice require it.
//!
//! ## Usage
//!
//! ```rust
//! use stepwise_core::category::{Category, ForwardTag, InputTag, Traversal};
//!
//! assert_eq!(ForwardTag::TRAVERSAL, Traversal::Forward);
//! assert!(InputTag::TRAVERSAL < ForwardTag::TRAVERSAL);
//! assert_eq!(format!("{}", ForwardTag), "ForwardTag");
//! ```

/// Strength of a traversal, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Traversal {
    /// Single pass: copies of a position may not be advanced independently.
    Input,
    /// Single pass repeatable: copies advance independently and agree.
    Forward,
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Traversal::Input => write!(f, "Input"),
            Traversal::Forward => write!(f, "Forward"),
        }
    }
}

/// A compile-time marker identifying the traversal strength of an iterator.
///
/// A tag implements `MultiPass` exactly when its `TRAVERSAL` is at least
/// `Traversal::Forward`. Algorithms gate on the trait; `is_multi_pass` reads
/// the constant, and the two agree only if custom tags keep this rule.
pub trait Category: Copy + Default + Eq + std::fmt::Debug + 'static {
    /// The strength this tag stands for.
    const TRAVERSAL: Traversal;
    /// Name used when printing the tag.
    const NAME: &'static str;
}

/// Tags whose iterators may be copied and replayed.
pub trait MultiPass: Category {}

/// Tag for single-pass iteration.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputTag;

/// Tag for multi-pass forward iteration. The default for `ForwardIter`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForwardTag;

macro_rules! impl_category_for {
    ($tag:ident, $traversal:expr) => {
        impl Category for $tag {
            const TRAVERSAL: Traversal = $traversal;
            const NAME: &'static str = stringify!($tag);
        }

        impl std::fmt::Debug for $tag {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", <$tag as Category>::NAME)
            }
        }

        impl std::fmt::Display for $tag {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", <$tag as Category>::NAME)
            }
        }
    };
}

impl_category_for!(InputTag, Traversal::Input);
impl_category_for!(ForwardTag, Traversal::Forward);

impl MultiPass for ForwardTag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_zero_sized() {
        assert_eq!(std::mem::size_of::<ForwardTag>(), 0);
        assert_eq!(std::mem::size_of::<InputTag>(), 0);
    }

    #[test]
    fn test_traversal_ordering_reflects_strength() {
        assert!(Traversal::Input < Traversal::Forward);
        assert_eq!(
            InputTag::TRAVERSAL.max(ForwardTag::TRAVERSAL),
            Traversal::Forward
        );
    }

    #[test]
    fn test_tag_display_and_debug() {
        assert_eq!(format!("{}", ForwardTag), "ForwardTag");
        assert_eq!(format!("{:?}", InputTag), "InputTag");
        assert_eq!(format!("{}", Traversal::Forward), "Forward");
    }

    #[test]
    fn test_multi_pass_tags_are_at_least_forward() {
        fn strength<G: MultiPass>() -> Traversal {
            G::TRAVERSAL
        }
        assert!(strength::<ForwardTag>() >= Traversal::Forward);
    }

    #[test]
    fn test_multi_pass_only_for_forward() {
        fn requires_multi_pass<G: MultiPass>() -> Traversal {
            G::TRAVERSAL
        }
        assert_eq!(requires_multi_pass::<ForwardTag>(), Traversal::Forward);
    }
}
