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

//! # Stepwise Guard
//!
//! Test-driver support for checking the strong exception-safety guarantee:
//! an operation that fails, by returning an error or by panicking, must leave
//! the object it was called on unchanged.
//!
//! `StateGuard` snapshots an object, lets the test mutate it through the
//! guard, and verifies on drop that the object still equals the snapshot.
//! The check is active in every build profile.
//!
//! ## Usage
//!
//! ```rust
//! use stepwise_guard::StateGuard;
//!
//! fn push_checked(v: &mut Vec<i32>, x: i32) -> Result<(), String> {
//!     if x < 0 {
//!         return Err(format!("negative value {x}"));
//!     }
//!     v.push(x);
//!     Ok(())
//! }
//!
//! let mut values = vec![1, 2, 3];
//! {
//!     let mut guard = StateGuard::new(&mut values);
//!     assert!(push_checked(&mut guard, -1).is_err());
//! } // unchanged: the guard passes
//!
//! {
//!     let mut guard = StateGuard::new(&mut values);
//!     push_checked(&mut guard, 4).unwrap();
//!     guard.release(); // success path: the change is expected
//! }
//! assert_eq!(values, [1, 2, 3, 4]);
//! ```

pub mod guard;

pub use guard::{CloneIn, GuardViolation, StateGuard};
