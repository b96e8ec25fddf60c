//! Integration tests for Selfcall CLI commands.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use selfcall::cli::{
    CliError, MAX_TABLE_CELLS, cmd_compare, cmd_eval, cmd_explain, cmd_table, compare,
    render_compare, render_eval, render_explain, render_table, table,
};
use selfcall_core::{Arguments, Limits, RecursionError, Strategy};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn three_four() -> Arguments {
    Arguments::new(3, 4)
}

fn defaults() -> Limits {
    Limits::default()
}

// =============================================================================
// EVAL COMMAND TESTS
// =============================================================================

#[test]
fn test_eval_every_strategy() {
    for strategy in Strategy::ALL {
        let result = cmd_eval(three_four(), strategy, &defaults(), false);
        assert!(result.is_ok(), "{strategy}");
    }
}

#[test]
fn test_eval_bounded_text() {
    let text = render_eval(three_four(), Strategy::Bounded, &defaults(), false).unwrap();
    assert_eq!(text, "bounded         A(3, 4) = 125  calls=10307  depth=127");
}

#[test]
fn test_eval_self_reference_has_no_count() {
    let text = render_eval(three_four(), Strategy::SelfReference, &defaults(), false).unwrap();
    assert_eq!(text, "self-reference  A(3, 4) = 125");
}

#[test]
fn test_eval_json_mode() {
    let text = render_eval(three_four(), Strategy::Accumulator, &defaults(), true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["strategy"], "accumulator");
    assert_eq!(json["m"], 3);
    assert_eq!(json["n"], 4);
    assert_eq!(json["value"], 125);
    assert_eq!(json["calls"], 10307);
    assert!(json["peak_depth"].is_null());
}

#[test]
fn test_eval_depth_limit_error() {
    let limits = defaults().with_max_depth(126);
    let result = cmd_eval(three_four(), Strategy::Bounded, &limits, false);

    match result {
        Err(CliError::Recursion(RecursionError::DepthExceeded { limit })) => {
            assert_eq!(limit, 126);
        }
        other => panic!("expected depth error, got {other:?}"),
    }
}

#[test]
fn test_eval_call_limit_error_message() {
    let limits = defaults().with_max_calls(100);
    let err = render_eval(three_four(), Strategy::Bounded, &limits, false).unwrap_err();
    assert_eq!(err.to_string(), "invocation count exceeded limit of 100");
}

#[test]
fn test_eval_successor_overflow_every_strategy() {
    let args = Arguments::new(0, u64::MAX);
    for strategy in Strategy::ALL {
        let result = render_eval(args, strategy, &defaults(), false);
        match result {
            Err(CliError::Recursion(RecursionError::Overflow { n })) => assert_eq!(n, u64::MAX),
            other => panic!("{strategy}: expected overflow, got {other:?}"),
        }
    }
}

#[test]
fn test_compare_successor_overflow() {
    let result = compare(Arguments::new(0, u64::MAX), &defaults());
    assert!(matches!(
        result,
        Err(CliError::Recursion(RecursionError::Overflow { .. }))
    ));
}

#[test]
fn test_eval_is_repeatable() {
    let first = render_eval(three_four(), Strategy::Bounded, &defaults(), true).unwrap();
    let second = render_eval(three_four(), Strategy::Bounded, &defaults(), true).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// COMPARE COMMAND TESTS
// =============================================================================

#[test]
fn test_compare_all_agree() {
    let reports = compare(three_four(), &defaults()).unwrap();

    assert_eq!(reports.len(), Strategy::ALL.len());
    assert!(reports.iter().all(|r| r.evaluation.value == 125));

    let counted: Vec<_> = reports
        .iter()
        .filter_map(|r| r.evaluation.calls)
        .collect();
    assert_eq!(counted, vec![10307, 10307]);
}

#[test]
fn test_compare_text_lists_each_strategy() {
    let text = render_compare(three_four(), &defaults(), false).unwrap();
    for strategy in Strategy::ALL {
        assert!(text.contains(strategy.as_str()), "{strategy}");
    }
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_compare_json_mode() {
    let text = render_compare(Arguments::new(2, 3), &defaults(), true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let entries = json.as_array().unwrap();

    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|e| e["value"] == 9));
}

#[test]
fn test_compare_stops_before_unbounded_runs() {
    let limits = Limits::new(20, 1_000);
    let result = cmd_compare(three_four(), &limits, false);
    assert!(matches!(result, Err(CliError::Recursion(_))));
}

// =============================================================================
// TABLE COMMAND TESTS
// =============================================================================

#[test]
fn test_table_values() {
    let report = table(3, 4, &defaults()).unwrap();

    assert_eq!(report.rows.len(), 4);
    assert_eq!(report.rows[0], vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
    assert_eq!(report.rows[2], vec![Some(3), Some(5), Some(7), Some(9), Some(11)]);
    assert_eq!(report.rows[3][4], Some(125));
}

#[test]
fn test_table_text_layout() {
    let text = render_table(2, 3, &defaults(), false).unwrap();
    let expected = "m\\n 0 1 2 3\n0   1 2 3 4\n1   2 3 4 5\n2   3 5 7 9";
    assert_eq!(text, expected);
}

#[test]
fn test_table_marks_out_of_budget_cells() {
    let limits = defaults().with_max_depth(50);
    let report = table(3, 4, &limits).unwrap();

    assert_eq!(report.rows[3][2], Some(29));
    assert_eq!(report.rows[3][4], None);

    let text = render_table(3, 4, &limits, false).unwrap();
    assert!(text.lines().last().unwrap().ends_with('-'));
}

#[test]
fn test_table_rejects_large_grid() {
    let result = cmd_table(MAX_TABLE_CELLS, 1, &defaults(), false);
    assert!(matches!(result, Err(CliError::InvalidArgument(_))));

    let result = table(u64::MAX, u64::MAX, &defaults());
    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
}

#[test]
fn test_table_json_mode() {
    let text = render_table(1, 1, &defaults(), true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["rows"], serde_json::json!([[1, 2], [2, 3]]));
}

// =============================================================================
// EXPLAIN COMMAND TESTS
// =============================================================================

#[test]
fn test_explain_text() {
    let text = render_explain(false).unwrap();
    assert!(text.contains("let ackermann = |m: u64, n: u64| -> u64 {"));
    assert!(text.contains("error[E0425]: cannot find function `ackermann` in this scope"));
    assert!(text.contains(" --> src/main.rs:6:13"));
}

#[test]
fn test_explain_json_mode() {
    let text = render_explain(true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["code"], "E0425");
    assert_eq!(json["name"], "ackermann");
    assert_eq!(json["line"], 6);
    assert_eq!(json["column"], 13);
}

#[test]
fn test_explain_command() {
    assert!(cmd_explain(false).is_ok());
    assert!(cmd_explain(true).is_ok());
}
