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

//! # Mutability Markers
//!
//! Rust has no `const`-qualified element types, so the const-ness of an
//! iterator's elements is carried as a zero-sized type parameter instead.
//! `Mut` may lower to `Const`; nothing raises `Const` back to `Mut`.

/// Marker trait distinguishing read-only from read-write element access.
///
/// The trait is sealed: `Const` and `Mut` are the only implementors.
pub trait Mutability: 'static + Copy + Default + Eq + seal::Sealed {
    /// `true` if elements may be written through the iterator.
    const IS_MUTABLE: bool;
    /// Name used when printing an iterator.
    const NAME: &'static str;
}

/// Read-only element access.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Const;

/// Read-write element access. Contexts holding `Mut` may lower to `Const`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mut;

impl Mutability for Const {
    const IS_MUTABLE: bool = false;
    const NAME: &'static str = "Const";
}

impl Mutability for Mut {
    const IS_MUTABLE: bool = true;
    const NAME: &'static str = "Mut";
}

impl seal::Sealed for Const {}
impl seal::Sealed for Mut {}

impl From<Mut> for Const {
    #[inline(always)]
    fn from(_: Mut) -> Self {
        Const
    }
}

impl std::fmt::Debug for Const {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Const")
    }
}

impl std::fmt::Debug for Mut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mut")
    }
}

#[doc(hidden)]
mod seal {
    #[doc(hidden)]
    pub trait Sealed {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_correct_names() {
        assert_eq!(Const::NAME, "Const");
        assert_eq!(Mut::NAME, "Mut");
        assert_eq!(format!("{:?}", Mut), "Mut");
    }

    #[test]
    fn test_markers_mutability_flags() {
        assert!(Mut::IS_MUTABLE);
        assert!(!Const::IS_MUTABLE);
    }

    #[test]
    fn test_mut_lowers_to_const() {
        let lowered: Const = Mut.into();
        assert_eq!(lowered, Const);
    }

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Const>(), 0);
        assert_eq!(std::mem::size_of::<Mut>(), 0);
    }
}
