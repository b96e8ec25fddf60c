//! # Primitives
//!
//! Value types shared by every recursion strategy.

use serde::{Deserialize, Serialize};

// =============================================================================
// BOUNDS
// =============================================================================

/// Default frame budget for bounded evaluation.
///
/// A(3, n) peaks at depth 2^(n+3) - 1, so this admits A(3, 10) but stops
/// A(3, 11) and anything with m >= 4 other than A(4, 0).
pub const DEFAULT_MAX_DEPTH: u64 = 10_000;

/// Default invocation budget for bounded evaluation.
pub const DEFAULT_MAX_CALLS: u64 = 50_000_000;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// The `(m, n)` pair the two-argument function recurses over.
///
/// Both components are unsigned; negative inputs are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Arguments {
    pub m: u64,
    pub n: u64,
}

impl Arguments {
    #[must_use]
    pub fn new(m: u64, n: u64) -> Self {
        Self { m, n }
    }
}

impl From<(u64, u64)> for Arguments {
    fn from((m, n): (u64, u64)) -> Self {
        Self { m, n }
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Outcome of evaluating one `(m, n)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// A(m, n).
    pub value: u64,
    /// Total invocations, including the outermost one.
    ///
    /// `None` for strategies that cannot carry a counter.
    pub calls: Option<u64>,
    /// Deepest frame reached, counting the outermost call as depth 1.
    ///
    /// Only the bounded evaluator tracks depth.
    pub peak_depth: Option<u64>,
}

impl Evaluation {
    /// A result with no call accounting.
    #[must_use]
    pub fn uncounted(value: u64) -> Self {
        Self {
            value,
            calls: None,
            peak_depth: None,
        }
    }

    /// A result carrying an invocation count.
    #[must_use]
    pub fn counted(value: u64, calls: u64) -> Self {
        Self {
            value,
            calls: Some(calls),
            peak_depth: None,
        }
    }

    #[must_use]
    pub fn with_peak_depth(mut self, depth: u64) -> Self {
        self.peak_depth = Some(depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_from_tuple() {
        assert_eq!(Arguments::from((3, 4)), Arguments::new(3, 4));
    }

    #[test]
    fn evaluation_constructors() {
        let eval = Evaluation::counted(125, 10307).with_peak_depth(127);
        assert_eq!(eval.calls, Some(10307));
        assert_eq!(eval.peak_depth, Some(127));

        let bare = Evaluation::uncounted(125);
        assert!(bare.calls.is_none());
        assert!(bare.peak_depth.is_none());
    }
}
