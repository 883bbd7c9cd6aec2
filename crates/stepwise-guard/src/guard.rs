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

//! State guard for the strong exception-safety guarantee.
//!
//! The guard holds the only mutable borrow of the object under test and a
//! copy of its value taken at construction. The test mutates the object
//! through the guard (`DerefMut`). When the guard is dropped without having
//! been released, it compares the object against the copy and fails loudly
//! on a mismatch: a panic normally, or an abort if a panic is already
//! unwinding, since a second panic cannot be reported.
//!
//! The source location of the construction (or of the latest
//! `reset_value`) is captured with `#[track_caller]` and included in every
//! report.

use std::fmt::Debug;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::panic::Location;

/// Types that can copy themselves using a caller-supplied resource, such as
/// an allocator or an arena.
pub trait CloneIn<R: ?Sized> {
    /// Returns a copy of `self` whose storage comes from `resource`.
    fn clone_in(&self, resource: &R) -> Self;
}

/// Reported when a guarded object no longer equals its baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardViolation {
    /// Where the baseline was captured.
    pub location: &'static Location<'static>,
    /// The baseline, formatted with `Debug`.
    pub expected: String,
    /// The current value, formatted with `Debug`.
    pub actual: String,
}

impl std::fmt::Display for GuardViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Guarded object changed since {}: expected {}, found {}",
            self.location, self.expected, self.actual
        )
    }
}

impl std::error::Error for GuardViolation {}

/// Verifies on drop that an object kept its value.
///
/// # Examples
///
/// ```rust
/// # use stepwise_guard::StateGuard;
/// let mut counter = 7u32;
/// let mut guard = StateGuard::new(&mut counter);
/// *guard += 1;
/// assert!(guard.check().is_err());
/// guard.release();
/// ```
pub struct StateGuard<'a, T>
where
    T: PartialEq + Debug,
{
    object: &'a mut T,
    baseline: T,
    location: &'static Location<'static>,
    released: bool,
}

impl<'a, T> StateGuard<'a, T>
where
    T: PartialEq + Debug,
{
    /// Guards `object`, using `Clone` for the baseline copy.
    #[track_caller]
    #[inline]
    pub fn new(object: &'a mut T) -> Self
    where
        T: Clone,
    {
        let baseline = object.clone();
        Self::with_baseline(object, baseline, Location::caller())
    }

    /// Guards `object`, copying it with storage from `resource`.
    #[track_caller]
    #[inline]
    pub fn new_in<R>(object: &'a mut T, resource: &R) -> Self
    where
        R: ?Sized,
        T: CloneIn<R>,
    {
        let baseline = object.clone_in(resource);
        Self::with_baseline(object, baseline, Location::caller())
    }

    #[inline(always)]
    fn with_baseline(object: &'a mut T, baseline: T, location: &'static Location<'static>) -> Self {
        Self {
            object,
            baseline,
            location,
            released: false,
        }
    }

    /// Disables the check performed on drop.
    #[inline(always)]
    pub fn release(&mut self) {
        self.released = true;
    }

    /// Returns `true` if `release` has been called.
    #[inline(always)]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Replaces the expected value, e.g. after a step of a multi-step test
    /// succeeded, and records the caller as the new location.
    #[track_caller]
    #[inline]
    pub fn reset_value(&mut self, value: T) {
        self.baseline = value;
        self.location = Location::caller();
    }

    /// Returns the value the object is expected to have.
    #[inline(always)]
    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    /// Returns where the current baseline was captured.
    #[inline(always)]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Compares the object with the baseline now, regardless of `release`.
    pub fn check(&self) -> Result<(), GuardViolation> {
        if *self.object == self.baseline {
            return Ok(());
        }
        Err(GuardViolation {
            location: self.location,
            expected: format!("{:?}", self.baseline),
            actual: format!("{:?}", self.object),
        })
    }
}

impl<T> Deref for StateGuard<'_, T>
where
    T: PartialEq + Debug,
{
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.object
    }
}

impl<T> DerefMut for StateGuard<'_, T>
where
    T: PartialEq + Debug,
{
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        self.object
    }
}

impl<T> Drop for StateGuard<'_, T>
where
    T: PartialEq + Debug,
{
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(violation) = self.check() {
            log::error!("{violation}");
            if std::thread::panicking() {
                // Abort skips the test harness, so write past its capture.
                report(&violation, &mut std::io::stderr().lock());
                std::process::abort();
            }
            panic!("{violation}");
        }
    }
}

/// Writes `violation` to `out` as a single line. Write errors are ignored,
/// the caller is about to abort anyway.
fn report<W>(violation: &GuardViolation, out: &mut W)
where
    W: Write,
{
    let _ = writeln!(out, "{violation}");
    let _ = out.flush();
}

impl<T> std::fmt::Debug for StateGuard<'_, T>
where
    T: PartialEq + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateGuard")
            .field("object", &self.object)
            .field("baseline", &self.baseline)
            .field("location", &self.location)
            .field("released", &self.released)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};
    use std::process::Command;
    use stepwise_core::cursors::slice::{span, span_mut};

    /// Scales every element, or fails without touching anything if one of
    /// them would overflow.
    fn try_scale(values: &mut [i32], factor: i32) -> Result<(), String> {
        if let Some(bad) = span(values).find(|x| x.checked_mul(factor).is_none()) {
            return Err(format!("{bad} * {factor} overflows"));
        }
        for x in span_mut(values) {
            *x *= factor;
        }
        Ok(())
    }

    /// Scales in place and stops at the first overflow, leaving a partially
    /// updated slice behind.
    fn try_scale_partial(values: &mut [i32], factor: i32) -> Result<(), String> {
        for x in span_mut(values) {
            *x = x
                .checked_mul(factor)
                .ok_or_else(|| format!("{x} * {factor} overflows"))?;
        }
        Ok(())
    }

    #[test]
    fn test_guard_passes_when_failed_operation_leaves_object_unchanged() {
        let mut values = vec![1, 2, i32::MAX];
        let mut guard = StateGuard::new(&mut values);
        assert!(try_scale(&mut guard, 2).is_err());
    }

    #[test]
    #[should_panic(expected = "Guarded object changed")]
    fn test_guard_panics_when_failed_operation_mutated_object() {
        let mut values = vec![1, 2, i32::MAX];
        let mut guard = StateGuard::new(&mut values);
        assert!(try_scale_partial(&mut guard, 2).is_err());
    }

    #[test]
    fn test_released_guard_skips_check() {
        let mut values = vec![1, 2, i32::MAX];
        {
            let mut guard = StateGuard::new(&mut values);
            assert!(try_scale_partial(&mut guard, 2).is_err());
            guard.release();
            assert!(guard.is_released());
        }
        assert_eq!(values, [2, 4, i32::MAX]);
    }

    #[test]
    fn test_reset_value_guards_multi_step_sequences() {
        let mut values = vec![1, 2, 3];
        let mut guard = StateGuard::new(&mut values);

        try_scale(&mut guard, 10).unwrap();
        guard.reset_value(vec![10, 20, 30]);
        assert_eq!(guard.baseline(), &vec![10, 20, 30]);

        assert!(try_scale(&mut guard, i32::MAX).is_err());
    }

    #[test]
    fn test_location_is_captured_at_construction() {
        let mut values = vec![0u8];
        let (guard, line) = (StateGuard::new(&mut values), line!());
        assert_eq!(guard.location().line(), line);
        assert!(guard.location().file().ends_with("guard.rs"));
    }

    #[test]
    fn test_reset_value_moves_location() {
        let mut value = 1u64;
        let mut guard = StateGuard::new(&mut value);
        let first = guard.location().line();
        *guard = 2;
        guard.reset_value(2);
        assert!(guard.location().line() > first);
    }

    #[test]
    fn test_check_reports_expected_and_actual() {
        let mut value = 5i32;
        let mut guard = StateGuard::new(&mut value);
        assert_eq!(guard.check(), Ok(()));

        *guard = 6;
        let violation = guard.check().unwrap_err();
        assert_eq!(violation.expected, "5");
        assert_eq!(violation.actual, "6");
        assert!(violation.to_string().contains("expected 5, found 6"));
        guard.release();
    }

    #[test]
    fn test_guard_survives_unwinding_with_unchanged_object() {
        let mut values = vec![1, 2, 3];
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let guard = StateGuard::new(&mut values);
            let _value: i32 = guard[7];
        }));
        assert!(result.is_err());
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_report_writes_location_expected_and_actual() {
        let mut value = vec![1, 2, 3];
        let mut guard = StateGuard::new(&mut value);
        guard.push(4);
        let violation = guard.check().unwrap_err();
        guard.release();

        let mut out: Vec<u8> = Vec::new();
        report(&violation, &mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Guarded object changed since "));
        assert!(text.contains("guard.rs"));
        assert!(text.ends_with("expected [1, 2, 3], found [1, 2, 3, 4]\n"));
    }

    const ABORT_CHILD_ENV: &str = "STEPWISE_GUARD_ABORT_CHILD";

    /// Runs only when spawned by `test_violation_while_unwinding_is_reported`.
    #[test]
    fn test_violation_while_unwinding_child() {
        if std::env::var_os(ABORT_CHILD_ENV).is_none() {
            return;
        }
        let mut values = vec![1, 2, 3];
        let mut guard = StateGuard::new(&mut values);
        guard.push(4);
        panic!("operation failed after a partial update");
    }

    #[test]
    fn test_violation_while_unwinding_is_reported() {
        let exe = std::env::current_exe().unwrap();
        let output = Command::new(exe)
            .args([
                "--exact",
                "guard::tests::test_violation_while_unwinding_child",
                "--test-threads=1",
            ])
            .env(ABORT_CHILD_ENV, "1")
            .output()
            .unwrap();

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Guarded object changed since "));
        assert!(stderr.contains("expected [1, 2, 3], found [1, 2, 3, 4]"));
    }

    struct CountingResource {
        copies: Cell<usize>,
    }

    #[derive(Debug, PartialEq)]
    struct Tracked(Vec<u32>);

    impl CloneIn<CountingResource> for Tracked {
        fn clone_in(&self, resource: &CountingResource) -> Self {
            resource.copies.set(resource.copies.get() + 1);
            Tracked(self.0.clone())
        }
    }

    #[test]
    fn test_new_in_copies_through_resource() {
        let resource = CountingResource {
            copies: Cell::new(0),
        };
        let mut tracked = Tracked(vec![1, 2]);
        {
            let guard = StateGuard::new_in(&mut tracked, &resource);
            assert_eq!(guard.baseline(), &Tracked(vec![1, 2]));
        }
        assert_eq!(resource.copies.get(), 1);
    }

    #[test]
    fn test_debug_output() {
        let mut value = 'x';
        let guard = StateGuard::new(&mut value);
        let text = format!("{:?}", guard);
        assert!(text.starts_with("StateGuard"));
        assert!(text.contains("released: false"));
    }
}
