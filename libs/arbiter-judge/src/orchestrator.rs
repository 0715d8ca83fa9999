/// Execution Orchestrator - High-Level Run Loop
///
/// **Responsibility:**
/// Drive the remote backend once per test case and hand the collected
/// outcomes to the evaluator.
///
/// This module is the glue layer - it knows nothing about:
/// - The backend wire format (backend's job)
/// - How comparison and scoring work (evaluator's job)
///
/// Test cases run strictly sequentially, so result order always matches
/// input order. All accumulators are local to one `run` call: the
/// orchestrator holds no shared mutable state and concurrent runs from
/// different callers are safe.
use crate::backend::{ExecutionBackend, RawExecution};
use crate::error::JudgeError;
use crate::evaluator::{self, CaseResult};
use crate::outcome::ExecutionOutcome;
use crate::registry::LanguageRegistry;
use arbiter_common::types::{RunRequest, Verdict};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub struct Orchestrator<B> {
    backend: B,
    registry: LanguageRegistry,
    max_retries: u32,
}

impl<B: ExecutionBackend> Orchestrator<B> {
    pub fn new(backend: B, registry: LanguageRegistry) -> Self {
        Self {
            backend,
            registry,
            max_retries: 0,
        }
    }

    /// Extra submission attempts for transient backend failures.
    /// The default of zero submits each test case exactly once.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Run one submission against its test cases and aggregate a Verdict.
    ///
    /// A backend failure anywhere in the loop aborts the whole run and
    /// discards partial results; no partial Verdict is returned.
    pub async fn run(&self, request: &RunRequest) -> Result<Verdict, JudgeError> {
        self.run_with_cancel(request, &CancellationToken::new()).await
    }

    /// Like [`Orchestrator::run`], checking `cancel` between test cases.
    ///
    /// In-flight submissions are not interrupted; cancellation takes effect
    /// at the next loop boundary and surfaces as `JudgeError::Cancelled`.
    pub async fn run_with_cancel(
        &self,
        request: &RunRequest,
        cancel: &CancellationToken,
    ) -> Result<Verdict, JudgeError> {
        // Resolve before any network traffic: an unsupported language must
        // never reach the backend.
        let environment_id = self
            .registry
            .resolve(request.language)
            .ok_or(JudgeError::UnsupportedLanguage(request.language))?;

        info!(
            run_id = %request.id,
            language = %request.language,
            environment_id,
            test_cases = request.test_cases.len(),
            source_size = request.source_code.len(),
            "Starting run"
        );

        let mut results: Vec<CaseResult> = Vec::with_capacity(request.test_cases.len());

        for (index, test_case) in request.test_cases.iter().enumerate() {
            if cancel.is_cancelled() {
                warn!(
                    run_id = %request.id,
                    completed = results.len(),
                    "Run cancelled"
                );
                return Err(JudgeError::Cancelled);
            }

            let raw = self
                .submit(environment_id, &request.source_code, &test_case.input)
                .await?;
            let outcome = ExecutionOutcome::classify(&raw);

            debug!(
                run_id = %request.id,
                case = index + 1,
                outcome = outcome.kind(),
                "Test case executed"
            );

            results.push(evaluator::evaluate_case(&outcome, &test_case.expected_output));
        }

        let verdict = evaluator::verdict(&request.test_cases, &results);

        info!(
            run_id = %request.id,
            status = ?verdict.status,
            passed = verdict.passed,
            total = verdict.total,
            correctness = verdict.correctness,
            "Run complete"
        );

        Ok(verdict)
    }

    /// One blocking submission, with the configured transient-retry budget.
    async fn submit(
        &self,
        environment_id: u32,
        source_code: &str,
        stdin: &str,
    ) -> Result<RawExecution, JudgeError> {
        let mut attempt = 0;
        loop {
            match self.backend.execute(environment_id, source_code, stdin).await {
                Ok(raw) => return Ok(raw),
                Err(err) if attempt < self.max_retries && err.is_transient() => {
                    attempt += 1;
                    warn!(attempt, error = %err, "Transient backend failure, retrying");
                }
                Err(err) => return Err(JudgeError::BackendUnavailable(err)),
            }
        }
    }
}
