//! # CLI Commands
//!
//! Each `cmd_*` function prints the output of its `render_*` counterpart to
//! stdout. The renderers return text so they can be checked without
//! capturing stdout.

use selfcall_core::{
    Arguments, Evaluation, Limits, NameResolutionDiagnostic, RecursionError, Strategy,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Largest grid `table` will evaluate.
pub const MAX_TABLE_CELLS: u64 = 256;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Recursion(#[from] RecursionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two strategies produced different values for the same input.
    #[error("{strategy} returned {actual}, expected {expected}")]
    Mismatch {
        strategy: Strategy,
        expected: u64,
        actual: u64,
    },
}

// =============================================================================
// REPORTS
// =============================================================================

/// One strategy's answer for one input.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub strategy: Strategy,
    pub m: u64,
    pub n: u64,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

impl EvalReport {
    fn new(strategy: Strategy, args: Arguments, evaluation: Evaluation) -> Self {
        Self {
            strategy,
            m: args.m,
            n: args.n,
            evaluation,
        }
    }

    fn line(&self) -> String {
        let mut line = format!(
            "{:<15} A({}, {}) = {}",
            self.strategy, self.m, self.n, self.evaluation.value
        );
        if let Some(calls) = self.evaluation.calls {
            line.push_str(&format!("  calls={calls}"));
        }
        if let Some(depth) = self.evaluation.peak_depth {
            line.push_str(&format!("  depth={depth}"));
        }
        line
    }
}

/// Bounded values for `0..=max_m` x `0..=max_n`; `None` where a budget ran out.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub max_m: u64,
    pub max_n: u64,
    pub rows: Vec<Vec<Option<u64>>>,
}

// =============================================================================
// EVAL
// =============================================================================

pub fn render_eval(
    args: Arguments,
    strategy: Strategy,
    limits: &Limits,
    json: bool,
) -> Result<String, CliError> {
    debug!(m = args.m, n = args.n, %strategy, "evaluating");
    let evaluation = selfcall_core::evaluate(strategy, args, limits)?;
    let report = EvalReport::new(strategy, args, evaluation);

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.line())
    }
}

pub fn cmd_eval(
    args: Arguments,
    strategy: Strategy,
    limits: &Limits,
    json: bool,
) -> Result<(), CliError> {
    if !matches!(strategy, Strategy::Bounded) {
        info!(%strategy, "strategy has no depth budget; large inputs may overflow the stack");
    }
    println!("{}", render_eval(args, strategy, limits, json)?);
    Ok(())
}

// =============================================================================
// COMPARE
// =============================================================================

/// Evaluate `args` with every strategy and check that they agree.
///
/// The bounded run goes first, so inputs too large for `limits` fail before
/// the unbounded strategies get a chance to exhaust the stack.
pub fn compare(args: Arguments, limits: &Limits) -> Result<Vec<EvalReport>, CliError> {
    let baseline = selfcall_core::evaluate(Strategy::Bounded, args, limits)?;
    let mut reports = Vec::with_capacity(Strategy::ALL.len());

    for strategy in Strategy::ALL {
        let evaluation = if strategy == Strategy::Bounded {
            baseline
        } else {
            selfcall_core::evaluate(strategy, args, limits)?
        };
        if evaluation.value != baseline.value {
            warn!(%strategy, expected = baseline.value, actual = evaluation.value, "strategies disagree");
            return Err(CliError::Mismatch {
                strategy,
                expected: baseline.value,
                actual: evaluation.value,
            });
        }
        reports.push(EvalReport::new(strategy, args, evaluation));
    }

    Ok(reports)
}

pub fn render_compare(args: Arguments, limits: &Limits, json: bool) -> Result<String, CliError> {
    let reports = compare(args, limits)?;
    if json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    let lines: Vec<String> = reports.iter().map(EvalReport::line).collect();
    Ok(lines.join("\n"))
}

pub fn cmd_compare(args: Arguments, limits: &Limits, json: bool) -> Result<(), CliError> {
    println!("{}", render_compare(args, limits, json)?);
    info!(m = args.m, n = args.n, "all strategies agree");
    Ok(())
}

// =============================================================================
// TABLE
// =============================================================================

pub fn table(max_m: u64, max_n: u64, limits: &Limits) -> Result<TableReport, CliError> {
    let cells = max_m
        .checked_add(1)
        .zip(max_n.checked_add(1))
        .and_then(|(rows, cols)| rows.checked_mul(cols));
    match cells {
        Some(cells) if cells <= MAX_TABLE_CELLS => {}
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "table of {} x {} exceeds {MAX_TABLE_CELLS} cells",
                max_m.saturating_add(1),
                max_n.saturating_add(1)
            )));
        }
    }

    let mut rows = Vec::new();
    for m in 0..=max_m {
        let mut row = Vec::new();
        for n in 0..=max_n {
            match selfcall_core::bounded::evaluate(Arguments::new(m, n), limits) {
                Ok(evaluation) => row.push(Some(evaluation.value)),
                Err(err) => {
                    debug!(m, n, error = %err, "cell out of budget");
                    row.push(None);
                }
            }
        }
        rows.push(row);
    }

    Ok(TableReport { max_m, max_n, rows })
}

pub fn render_table(
    max_m: u64,
    max_n: u64,
    limits: &Limits,
    json: bool,
) -> Result<String, CliError> {
    let report = table(max_m, max_n, limits)?;
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let cells: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or_else(|| "-".to_string(), |v| v.to_string()))
                .collect()
        })
        .collect();
    let width = cells
        .iter()
        .flatten()
        .map(String::len)
        .chain((0..=max_n).map(|n| n.to_string().len()))
        .max()
        .unwrap_or(1);

    let mut out = String::from("m\\n");
    for n in 0..=max_n {
        out.push_str(&format!(" {n:>width$}"));
    }
    for (m, row) in cells.iter().enumerate() {
        out.push_str(&format!("\n{m:<3}"));
        for cell in row {
            out.push_str(&format!(" {cell:>width$}"));
        }
    }
    Ok(out)
}

pub fn cmd_table(max_m: u64, max_n: u64, limits: &Limits, json: bool) -> Result<(), CliError> {
    println!("{}", render_table(max_m, max_n, limits, json)?);
    Ok(())
}

// =============================================================================
// EXPLAIN
// =============================================================================

pub fn render_explain(json: bool) -> Result<String, CliError> {
    let diagnostic = NameResolutionDiagnostic::closure_self_call();
    if json {
        return Ok(serde_json::to_string_pretty(&diagnostic)?);
    }
    Ok(format!(
        "{}\n{}",
        selfcall_core::diagnostic::CLOSURE_SELF_CALL_SOURCE,
        diagnostic.render()
    ))
}

pub fn cmd_explain(json: bool) -> Result<(), CliError> {
    print!("{}", render_explain(json)?);
    if json {
        println!();
    }
    Ok(())
}
