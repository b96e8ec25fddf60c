//! # Accumulator Threading
//!
//! The first way out: stop being a closure.
//!
//! A closure that counted its own invocations would capture a counter and
//! mutate it, and it would have to call itself by a name that is not in
//! scope inside its body. A function item can name itself, and the counter
//! moves into the signature: it comes in as an argument and goes back out
//! in the return value, so nothing is captured and nothing is shared.

/// Compute A(m, n) and the number of invocations it took.
///
/// `count` is the number of invocations made before this one; the returned
/// count includes every invocation in this call tree, the current one
/// included. Start from `0` to count a fresh evaluation.
///
/// Each invocation adds exactly one to the count:
///
/// - `m == 0` counts itself in the result;
/// - `n == 0` counts itself in the argument to the tail call;
/// - otherwise the inner call receives `count + 1` and the outer call
///   continues from whatever the inner call returned.
///
/// There is no depth limit. Large inputs exhaust the stack and abort; use
/// [`crate::bounded::evaluate`] when that matters.
///
/// # Panics
///
/// A(0, u64::MAX), or a `count` of `u64::MAX`, overflows. The workspace
/// keeps overflow checks on in release builds, so this panics instead of
/// wrapping; [`crate::evaluate`] rejects the input before it gets here.
#[must_use]
pub fn ackermann(m: u64, n: u64, count: u64) -> (u64, u64) {
    if m == 0 {
        (n + 1, count + 1)
    } else if n == 0 {
        ackermann(m - 1, 1, count + 1)
    } else {
        let (inner, count) = ackermann(m, n - 1, count + 1);
        ackermann(m - 1, inner, count)
    }
}

// =============================================================================
// TESTS
// =============================================================================
