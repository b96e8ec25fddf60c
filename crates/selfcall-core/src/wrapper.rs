//! # Self-Referential Wrapper
//!
//! The second way out: keep the closure, give it itself as an argument.
//!
//! The closure body cannot see the binding it is being assigned to, but it
//! can see its own parameters. [`Ackermann`] holds a reference to the
//! closure, and [`Ackermann::call`] passes the wrapper into the closure on
//! every invocation. Inside the body, recursion goes through that parameter
//! instead of through a name.
//!
//! The closure is `Fn`, so it may read what it captures but never change it.
//! That is what makes the shared `&Ackermann` sound for the whole call tree,
//! and it is also why this pattern carries no invocation counter.

use std::fmt;

/// Callable signature accepted by [`Ackermann`]: `(m, n, this) -> A(m, n)`.
///
/// The lifetime of the wrapper passed back in is higher-ranked, so the same
/// closure works with any wrapper that holds it.
pub type Body<'s> = &'s dyn Fn(u64, u64, &Ackermann<'_>) -> u64;

/// A wrapper whose only field is a reference to the closure it runs.
///
/// Owns nothing; it lives as long as the closure it borrows.
#[derive(Clone, Copy)]
pub struct Ackermann<'s> {
    f: Body<'s>,
}

impl<'s> Ackermann<'s> {
    /// Wrap a closure.
    ///
    /// Binding the closure with an explicit type lets the compiler infer its
    /// parameter types from [`Body`]:
    ///
    /// ```
    /// use selfcall_core::wrapper::{Ackermann, Body};
    ///
    /// let body: Body<'_> = &|m, n, this| match (m, n) {
    ///     (0, n) => n + 1,
    ///     (m, 0) => this.call(m - 1, 1),
    ///     (m, n) => this.call(m - 1, this.call(m, n - 1)),
    /// };
    /// assert_eq!(Ackermann::new(body).call(2, 3), 9);
    /// ```
    #[must_use]
    pub fn new(f: Body<'s>) -> Self {
        Self { f }
    }

    /// Invoke the wrapped closure, handing it this wrapper.
    pub fn call(&self, m: u64, n: u64) -> u64 {
        (self.f)(m, n, self)
    }
}

impl fmt::Debug for Ackermann<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ackermann").finish_non_exhaustive()
    }
}

/// A(m, n) computed by an unnamed closure recursing through its wrapper.
///
/// Same three cases as [`crate::accumulator::ackermann`], no counter, and
/// no depth limit.
#[must_use]
pub fn ackermann(m: u64, n: u64) -> u64 {
    let ackermann = Ackermann {
        f: &|m, n, this| {
            if m == 0 {
                n + 1
            } else if n == 0 {
                this.call(m - 1, 1)
            } else {
                this.call(m - 1, this.call(m, n - 1))
            }
        },
    };
    ackermann.call(m, n)
}

// =============================================================================
// TESTS
// =============================================================================
