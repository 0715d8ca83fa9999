use crate::backend::RawExecution;

/// Per-test-case execution outcome
///
/// Classified exactly once from the raw backend response so downstream
/// logic pattern-matches over a closed set instead of re-checking optional
/// field presence.
///
/// **Classification priority (fixed):**
/// non-empty stdout > non-empty stderr > compiler diagnostics > no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Stdout(String),
    RuntimeError(String),
    CompileError(String),
    NoOutput,
}

fn present(stream: &Option<String>) -> Option<&str> {
    stream.as_deref().filter(|s| !s.is_empty())
}

impl ExecutionOutcome {
    pub fn classify(raw: &RawExecution) -> Self {
        if let Some(out) = present(&raw.stdout) {
            ExecutionOutcome::Stdout(out.to_string())
        } else if let Some(err) = present(&raw.stderr) {
            ExecutionOutcome::RuntimeError(err.to_string())
        } else if let Some(diag) = present(&raw.compile_output) {
            ExecutionOutcome::CompileError(diag.to_string())
        } else {
            ExecutionOutcome::NoOutput
        }
    }

    /// Text shown to the user and compared against the expectation.
    pub fn render(&self) -> String {
        match self {
            ExecutionOutcome::Stdout(out) => out.trim().to_string(),
            ExecutionOutcome::RuntimeError(err) => format!("Error: {}", err.trim()),
            ExecutionOutcome::CompileError(diag) => format!("Compile Error: {}", diag.trim()),
            ExecutionOutcome::NoOutput => "No output".to_string(),
        }
    }

    /// Short tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionOutcome::Stdout(_) => "stdout",
            ExecutionOutcome::RuntimeError(_) => "runtime_error",
            ExecutionOutcome::CompileError(_) => "compile_error",
            ExecutionOutcome::NoOutput => "no_output",
        }
    }
}

/// Canonical form used for comparison: surrounding whitespace stripped,
/// Windows line endings folded to newlines. Idempotent.
pub fn normalize(text: &str) -> String {
    text.trim().replace("\r\n", "\n")
}
