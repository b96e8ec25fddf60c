//! # Bounded Evaluation
//!
//! Accumulator threading with budgets.
//!
//! The unbounded patterns treat stack exhaustion as fatal. Here the same
//! recursion tracks its depth and invocation count explicitly, and stops
//! with a [`RecursionError`] before either budget is exceeded. Arithmetic
//! on the result is checked as well.
//!
//! The running state lives in a private `Tally` passed down the call tree
//! by `&mut`; nothing is captured and nothing outlives the evaluation.
//!
//! The recursion is still native, one stack frame per level, so
//! `max_depth` is also what keeps the thread's stack safe. Raising it far
//! enough brings back the stack exhaustion of the unbounded patterns.

use crate::{
    Arguments, DEFAULT_MAX_CALLS, DEFAULT_MAX_DEPTH, Evaluation, RecursionError,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// LIMITS
// =============================================================================

/// Depth and invocation budgets for [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Deepest frame allowed, counting the outermost call as depth 1.
    ///
    /// Also the bound on native stack use.
    pub max_depth: u64,
    /// Most invocations allowed, the outermost call included.
    pub max_calls: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_calls: DEFAULT_MAX_CALLS,
        }
    }
}

impl Limits {
    #[must_use]
    pub fn new(max_depth: u64, max_calls: u64) -> Self {
        Self {
            max_depth,
            max_calls,
        }
    }

    /// No budget at all.
    ///
    /// Only arithmetic overflow is reported as an error; a deep enough input
    /// exhausts the native stack and aborts, as the unbounded patterns do.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(u64::MAX, u64::MAX)
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u64) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_calls(mut self, max_calls: u64) -> Self {
        self.max_calls = max_calls;
        self
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Running counters for one evaluation.
struct Tally {
    limits: Limits,
    calls: u64,
    peak_depth: u64,
}

impl Tally {
    fn new(limits: Limits) -> Self {
        Self {
            limits,
            calls: 0,
            peak_depth: 0,
        }
    }

    /// Account for entering a frame at `depth`.
    fn enter(&mut self, depth: u64) -> Result<(), RecursionError> {
        if depth > self.limits.max_depth {
            return Err(RecursionError::DepthExceeded {
                limit: self.limits.max_depth,
            });
        }
        if self.calls >= self.limits.max_calls {
            return Err(RecursionError::CallLimitExceeded {
                limit: self.limits.max_calls,
            });
        }
        self.calls += 1;
        self.peak_depth = self.peak_depth.max(depth);
        Ok(())
    }

    fn step(&mut self, m: u64, n: u64, depth: u64) -> Result<u64, RecursionError> {
        self.enter(depth)?;
        let next = depth.saturating_add(1);

        match (m, n) {
            (0, n) => n.checked_add(1).ok_or(RecursionError::Overflow { n }),
            (m, 0) => self.step(m - 1, 1, next),
            (m, n) => {
                let inner = self.step(m, n - 1, next)?;
                self.step(m - 1, inner, next)
            }
        }
    }
}

/// Compute A(m, n) within `limits`.
///
/// On success the [`Evaluation`] carries the value, the total invocation
/// count (identical to [`crate::accumulator::ackermann`] started from zero)
/// and the deepest frame reached.
pub fn evaluate(args: Arguments, limits: &Limits) -> Result<Evaluation, RecursionError> {
    let mut tally = Tally::new(*limits);
    let value = tally.step(args.m, args.n, 1)?;
    Ok(Evaluation::counted(value, tally.calls).with_peak_depth(tally.peak_depth))
}

// =============================================================================
// TESTS
// =============================================================================
