use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Strongly-typed language enum
///
/// The supported set is closed: a submission can only name one of these.
/// Resolution to a backend execution-environment id goes through the
/// language registry, which may enable a subset of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Python,
    Java,
    Cpp,
}

impl Language {
    /// Returns all language variants
    /// This is the single source of truth for available languages
    pub fn all_variants() -> &'static [Language] {
        &[
            Language::Javascript,
            Language::Python,
            Language::Java,
            Language::Cpp,
        ]
    }

    /// Parse a language from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Language> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Some(Language::Javascript),
            "python" => Some(Language::Python),
            "java" => Some(Language::Java),
            "cpp" | "c++" => Some(Language::Cpp),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Javascript => write!(f, "javascript"),
            Language::Python => write!(f, "python"),
            Language::Java => write!(f, "java"),
            Language::Cpp => write!(f, "cpp"),
        }
    }
}

/// Test Case Definition (Immutable Input)
/// Test cases are immutable - the orchestrator must not mutate them.
/// Ordering matters - execution is sequential and failure records keep
/// the source order for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

/// Run Input (Immutable)
///
/// One `RunRequest` per orchestrator invocation. Write-once - never mutate
/// input fields. The id exists for log correlation only; it does not appear
/// in the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub id: Uuid,
    pub language: Language,
    pub source_code: String,
    pub test_cases: Vec<TestCase>,
}

impl RunRequest {
    pub fn new(
        language: Language,
        source_code: impl Into<String>,
        test_cases: Vec<TestCase>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            source_code: source_code.into(),
            test_cases,
        }
    }
}

/// Overall run status: Success only when every test case matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failure,
}

/// One mismatched test case, kept in source order.
/// `input` and `expected` are the caller's original strings (no
/// normalization applied); `actual` is the rendered observed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedCase {
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Aggregated result of running one submission against all test cases
///
/// Derived, never mutated after construction - one Verdict per run
/// invocation. The caller holds it until the next run overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: RunStatus,
    pub passed: usize,
    pub total: usize,
    pub failed_cases: Vec<FailedCase>,
    /// round(100 * passed / total); defined as 100 for an empty run
    pub correctness: u8,
    pub error_message: String,
    pub suggestions: String,
}

impl Verdict {
    /// Synthetic all-failed verdict for the whole-run failure path.
    ///
    /// When the backend is unreachable the caller presents this instead of
    /// raw diagnostics: every case is recorded as failed with a fixed
    /// explanatory message in place of observed output.
    pub fn rejected(test_cases: &[TestCase], message: &str) -> Self {
        let failed_cases = test_cases
            .iter()
            .map(|tc| FailedCase {
                input: tc.input.clone(),
                expected: tc.expected_output.clone(),
                actual: message.to_string(),
            })
            .collect();

        Self {
            status: RunStatus::Failure,
            passed: 0,
            total: test_cases.len(),
            failed_cases,
            correctness: 0,
            error_message: message.to_string(),
            suggestions: "Please try again in a moment.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemExample {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Problem-store document shape
///
/// The store itself is an external collaborator; this type only models what
/// the platform exchanges with it. The orchestrator consumes `test_cases`,
/// the editor consumes `starter_code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<ProblemExample>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub starter_code: HashMap<Language, String>,
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("python"), Some(Language::Python));
        assert_eq!(Language::from_str("PYTHON"), Some(Language::Python));
        assert_eq!(Language::from_str("js"), Some(Language::Javascript));
        assert_eq!(Language::from_str("c++"), Some(Language::Cpp));
        assert_eq!(Language::from_str("brainfuck"), None);
    }

    #[test]
    fn test_language_display_roundtrip() {
        for lang in Language::all_variants() {
            assert_eq!(Language::from_str(&lang.to_string()), Some(*lang));
        }
    }

    #[test]
    fn test_language_serde_lowercase() {
        let json = serde_json::to_string(&Language::Cpp).unwrap();
        assert_eq!(json, "\"cpp\"");

        let parsed: Language = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(parsed, Language::Javascript);

        assert!(serde_json::from_str::<Language>("\"cobol\"").is_err());
    }

    #[test]
    fn test_test_case_wire_shape() {
        let tc: TestCase =
            serde_json::from_str(r#"{"input":"[2,7,11,15] 9","expected_output":"[0,1]"}"#).unwrap();
        assert_eq!(tc.input, "[2,7,11,15] 9");
        assert_eq!(tc.expected_output, "[0,1]");
    }

    #[test]
    fn test_run_request_ids_are_unique() {
        let a = RunRequest::new(Language::Python, "print(1)", vec![]);
        let b = RunRequest::new(Language::Python, "print(1)", vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_rejected_verdict_marks_every_case() {
        let cases = vec![
            TestCase {
                input: "1".to_string(),
                expected_output: "2".to_string(),
            },
            TestCase {
                input: "3".to_string(),
                expected_output: "6".to_string(),
            },
        ];

        let verdict = Verdict::rejected(&cases, "Code execution failed. Please try again.");

        assert_eq!(verdict.status, RunStatus::Failure);
        assert_eq!(verdict.passed, 0);
        assert_eq!(verdict.total, 2);
        assert_eq!(verdict.correctness, 0);
        assert_eq!(verdict.failed_cases.len(), 2);
        assert_eq!(verdict.failed_cases[0].input, "1");
        assert_eq!(
            verdict.failed_cases[0].actual,
            "Code execution failed. Please try again."
        );
    }

    #[test]
    fn test_problem_parses_without_optional_fields() {
        let json = r#"{
            "id": "two-sum",
            "title": "Two Sum",
            "difficulty": "easy",
            "description": "Find two indices summing to the target.",
            "test_cases": [
                {"input": "[2,7,11,15] 9", "expected_output": "[0,1]"}
            ]
        }"#;

        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.id, "two-sum");
        assert_eq!(problem.test_cases.len(), 1);
        assert!(problem.examples.is_empty());
        assert!(problem.starter_code.is_empty());
        assert!(problem.created_at.is_none());
    }
}
