//! # Reference Definition
//!
//! The textbook three-case Ackermann function as a named, self-calling
//! function item. Every other strategy is checked against this one.

/// A(m, n), with no call accounting.
#[must_use]
pub fn ackermann(m: u64, n: u64) -> u64 {
    match (m, n) {
        (0, n) => n + 1,
        (m, 0) => ackermann(m - 1, 1),
        (m, n) => ackermann(m - 1, ackermann(m, n - 1)),
    }
}
