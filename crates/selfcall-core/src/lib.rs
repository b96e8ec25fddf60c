//! # Selfcall Core
//!
//! Recursion for callables that cannot refer to themselves by name.
//!
//! A closure is an unnamed value: its own `let` binding is not in scope
//! inside its body, so `ackermann(m - 1, 1)` written inside the closure bound
//! to `ackermann` fails name resolution (see [`diagnostic`]). This crate
//! keeps the two ways around that, both computing the Ackermann function:
//!
//! - [`accumulator`]: a named function item; the invocation counter a closure
//!   would have captured travels through arguments and return values.
//! - [`wrapper`]: a struct holding a reference to a non-mutating closure,
//!   handed back to the closure on every call so it can recurse through it.
//!
//! [`bounded`] is the accumulator pattern with depth and call budgets, and
//! [`reference`] is the plain definition everything is checked against.
//!
//! ```
//! use selfcall_core::{accumulator, wrapper};
//!
//! assert_eq!(accumulator::ackermann(3, 4, 0), (125, 10307));
//! assert_eq!(wrapper::ackermann(3, 4), 125);
//! ```

pub mod accumulator;
pub mod bounded;
pub mod diagnostic;
pub mod reference;
pub mod wrapper;

mod primitives;

pub use bounded::Limits;
pub use diagnostic::NameResolutionDiagnostic;
pub use primitives::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Failures reported by [`evaluate`].
///
/// Budget errors come only from the bounded evaluator. Running out of stack
/// in the unbounded patterns aborts the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecursionError {
    /// A frame would sit deeper than the configured depth budget.
    #[error("recursion depth exceeded limit of {limit}")]
    DepthExceeded { limit: u64 },

    /// More invocations than the configured call budget.
    #[error("invocation count exceeded limit of {limit}")]
    CallLimitExceeded { limit: u64 },

    /// `n + 1` does not fit in a `u64`.
    #[error("A(0, {n}) overflows u64")]
    Overflow { n: u64 },
}

// =============================================================================
// STRATEGY
// =============================================================================

/// Which recursion technique evaluates a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Function item threading an invocation counter.
    Accumulator,
    /// Closure recursing through a self-referential wrapper.
    SelfReference,
    /// Plain recursive definition, no counter.
    Reference,
    /// Accumulator pattern with depth and call budgets.
    Bounded,
}

impl Strategy {
    /// All strategies, in display order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Accumulator,
        Strategy::SelfReference,
        Strategy::Reference,
        Strategy::Bounded,
    ];

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Accumulator => "accumulator",
            Strategy::SelfReference => "self-reference",
            Strategy::Reference => "reference",
            Strategy::Bounded => "bounded",
        }
    }

    /// Whether this strategy reports an invocation count.
    #[must_use]
    pub fn counts_calls(self) -> bool {
        matches!(self, Strategy::Accumulator | Strategy::Bounded)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("unknown strategy '{s}'"))
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Evaluate `args` with the chosen strategy.
///
/// Only [`Strategy::Bounded`] consults `limits`; the others recurse until
/// they finish or the stack runs out.
///
/// A(0, u64::MAX) is rejected with [`RecursionError::Overflow`] for every
/// strategy. It is the only input whose result leaves `u64` without first
/// recursing past any stack: for m >= 1 the depth grows with the result.
pub fn evaluate(
    strategy: Strategy,
    args: Arguments,
    limits: &Limits,
) -> Result<Evaluation, RecursionError> {
    let Arguments { m, n } = args;
    if m == 0 && n == u64::MAX {
        return Err(RecursionError::Overflow { n });
    }
    match strategy {
        Strategy::Accumulator => {
            let (value, calls) = accumulator::ackermann(m, n, 0);
            Ok(Evaluation::counted(value, calls))
        }
        Strategy::SelfReference => Ok(Evaluation::uncounted(wrapper::ackermann(m, n))),
        Strategy::Reference => Ok(Evaluation::uncounted(reference::ackermann(m, n))),
        Strategy::Bounded => bounded::evaluate(args, limits),
    }
}

// =============================================================================
// TESTS
// =============================================================================
