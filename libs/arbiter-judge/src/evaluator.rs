/// Result Evaluator - Comparison and Verdict Aggregation
///
/// **Core Responsibility:**
/// Compare rendered execution outcomes against expected outputs and fold
/// them into a single Verdict.
///
/// **Critical Properties:**
/// - Knows nothing about HTTP or the backend wire format
/// - Knows nothing about language environments
/// - Pure function: (outcomes, test cases) → Verdict
///
/// **Normalization Rules (applied to both sides before comparison):**
/// - Trim leading/trailing whitespace: YES
/// - Ignore newline style differences (\n vs \r\n): YES
/// - Case sensitivity: YES (exact match required)
///
/// Failure records keep the caller's ORIGINAL input/expected strings so the
/// UI can show exactly what was configured, next to the rendered actual.
use crate::outcome::{normalize, ExecutionOutcome};
use arbiter_common::types::{FailedCase, RunStatus, TestCase, Verdict};

const FAILURE_MESSAGE: &str = "Some test cases failed.";
const FAILURE_SUGGESTIONS: &str = "Check your logic and try again.";

/// Outcome of comparing one execution against its expectation.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub passed: bool,
    /// Rendered observed text, retained for the failure record
    pub actual: String,
}

/// Compare one classified outcome against the expected output.
///
/// Runtime errors, compile errors and missing output are not special-cased:
/// their rendered text simply fails to match the expectation (unless the
/// expectation asked for it).
pub fn evaluate_case(outcome: &ExecutionOutcome, expected_output: &str) -> CaseResult {
    let actual = outcome.render();
    let passed = normalize(&actual) == normalize(expected_output);
    CaseResult { passed, actual }
}

/// Fold per-case results into the final Verdict.
///
/// `results` must be in test-case order. Pass/fail totals are order
/// independent, but failure records keep the source order for display.
pub fn verdict(test_cases: &[TestCase], results: &[CaseResult]) -> Verdict {
    debug_assert_eq!(test_cases.len(), results.len());

    let total = test_cases.len();
    let passed = results.iter().filter(|r| r.passed).count();

    let failed_cases: Vec<FailedCase> = test_cases
        .iter()
        .zip(results)
        .filter(|(_, result)| !result.passed)
        .map(|(tc, result)| FailedCase {
            input: tc.input.clone(),
            expected: tc.expected_output.clone(),
            actual: result.actual.clone(),
        })
        .collect();

    let all_passed = passed == total;
    // An empty run has nothing to fail: counts as fully correct
    let correctness = if total == 0 {
        100
    } else {
        ((passed as f64 / total as f64) * 100.0).round() as u8
    };

    Verdict {
        status: if all_passed {
            RunStatus::Success
        } else {
            RunStatus::Failure
        },
        passed,
        total,
        failed_cases,
        correctness,
        error_message: if all_passed {
            String::new()
        } else {
            FAILURE_MESSAGE.to_string()
        },
        suggestions: if all_passed {
            String::new()
        } else {
            FAILURE_SUGGESTIONS.to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_case(input: &str, expected: &str) -> TestCase {
        TestCase {
            input: input.to_string(),
            expected_output: expected.to_string(),
        }
    }

    fn stdout(text: &str) -> ExecutionOutcome {
        ExecutionOutcome::Stdout(text.to_string())
    }

    #[test]
    fn test_exact_match_passes() {
        let result = evaluate_case(&stdout("[0,1]"), "[0,1]");
        assert!(result.passed);
        assert_eq!(result.actual, "[0,1]");
    }

    #[test]
    fn test_whitespace_and_line_endings_are_normalized() {
        assert!(evaluate_case(&stdout("  120  \n"), "120").passed);
        assert!(evaluate_case(&stdout("a\r\nb"), "a\nb").passed);
        assert!(evaluate_case(&stdout("abc\r\n"), "abc\n").passed);
    }

    #[test]
    fn test_case_sensitivity_is_preserved() {
        assert!(!evaluate_case(&stdout("Hello"), "hello").passed);
    }

    #[test]
    fn test_runtime_error_compares_as_rendered_text() {
        let outcome = ExecutionOutcome::RuntimeError("division by zero".to_string());
        let result = evaluate_case(&outcome, "[0,1]");
        assert!(!result.passed);
        assert_eq!(result.actual, "Error: division by zero");
    }

    #[test]
    fn test_all_pass() {
        let cases = vec![
            make_case("[2,7,11,15] 9", "[0,1]"),
            make_case("[3,2,4] 6", "[1,2]"),
        ];
        let results = vec![
            evaluate_case(&stdout("[0,1]\n"), &cases[0].expected_output),
            evaluate_case(&stdout("[1,2]\n"), &cases[1].expected_output),
        ];

        let verdict = verdict(&cases, &results);

        assert_eq!(verdict.status, RunStatus::Success);
        assert_eq!(verdict.passed, 2);
        assert_eq!(verdict.total, 2);
        assert_eq!(verdict.correctness, 100);
        assert!(verdict.failed_cases.is_empty());
        assert!(verdict.error_message.is_empty());
        assert!(verdict.suggestions.is_empty());
    }

    #[test]
    fn test_partial_pass_keeps_failure_order_and_original_strings() {
        let cases = vec![
            make_case("1", "2"),
            make_case("2", "4\n"),
            make_case("3", "6"),
        ];
        let results = vec![
            evaluate_case(&stdout("2"), &cases[0].expected_output),
            evaluate_case(&stdout("5"), &cases[1].expected_output),
            evaluate_case(&stdout("7"), &cases[2].expected_output),
        ];

        let verdict = verdict(&cases, &results);

        assert_eq!(verdict.status, RunStatus::Failure);
        assert_eq!(verdict.passed, 1);
        assert_eq!(verdict.total, 3);
        assert_eq!(verdict.correctness, 33);
        assert_eq!(verdict.failed_cases.len(), 2);
        // Source order, and the expected string is the caller's original,
        // trailing newline included
        assert_eq!(verdict.failed_cases[0].input, "2");
        assert_eq!(verdict.failed_cases[0].expected, "4\n");
        assert_eq!(verdict.failed_cases[0].actual, "5");
        assert_eq!(verdict.failed_cases[1].input, "3");
        assert_eq!(verdict.error_message, "Some test cases failed.");
        assert_eq!(verdict.suggestions, "Check your logic and try again.");
    }

    #[test]
    fn test_correctness_rounds_to_nearest() {
        let cases: Vec<TestCase> = (0..3).map(|i| make_case(&i.to_string(), "x")).collect();
        let results = vec![
            evaluate_case(&stdout("x"), "x"),
            evaluate_case(&stdout("y"), "x"),
            evaluate_case(&stdout("y"), "x"),
        ];
        // 1/3 rounds to 33
        assert_eq!(verdict(&cases, &results).correctness, 33);

        let results = vec![
            evaluate_case(&stdout("x"), "x"),
            evaluate_case(&stdout("x"), "x"),
            evaluate_case(&stdout("y"), "x"),
        ];
        // 2/3 rounds to 67
        assert_eq!(verdict(&cases, &results).correctness, 67);
    }

    #[test]
    fn test_empty_run_is_success() {
        let verdict = verdict(&[], &[]);
        assert_eq!(verdict.status, RunStatus::Success);
        assert_eq!(verdict.passed, 0);
        assert_eq!(verdict.total, 0);
        assert_eq!(verdict.correctness, 100);
        assert!(verdict.failed_cases.is_empty());
    }

    #[test]
    fn test_all_fail() {
        let cases = vec![make_case("1", "a"), make_case("2", "b")];
        let results = vec![
            evaluate_case(&ExecutionOutcome::NoOutput, "a"),
            evaluate_case(&ExecutionOutcome::CompileError("bad".to_string()), "b"),
        ];

        let verdict = verdict(&cases, &results);

        assert_eq!(verdict.status, RunStatus::Failure);
        assert_eq!(verdict.passed, 0);
        assert_eq!(verdict.correctness, 0);
        assert_eq!(verdict.failed_cases[0].actual, "No output");
        assert_eq!(verdict.failed_cases[1].actual, "Compile Error: bad");
    }
}
