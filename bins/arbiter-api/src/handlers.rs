// HTTP route handlers for the Arbiter API

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use arbiter_common::templates;
use arbiter_common::types::{Language, RunRequest, RunStatus, TestCase, Verdict};
use arbiter_judge::JudgeError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::{metrics, AppState};

// Fixed message shown for whole-run failures; raw backend diagnostics stay
// in the server logs.
const EXECUTION_FAILED_MESSAGE: &str = "Code execution failed. Please try again.";

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub language: Language,
    pub source_code: String,
    pub test_cases: Vec<TestCaseInput>,
}

#[derive(Debug, Deserialize)]
pub struct TestCaseInput {
    pub input: String,
    pub expected_output: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub language: Language,
    pub starter_code: &'static str,
}

/// POST /execute - run a submission against its test cases
pub async fn execute(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitRequest>,
) -> impl IntoResponse {
    // Caller-side guard: an empty editor never reaches the orchestrator
    if payload.source_code.trim().is_empty() {
        metrics::record_run_rejected("empty_source");
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "source_code must not be empty" })),
        )
            .into_response();
    }

    let test_cases: Vec<TestCase> = payload
        .test_cases
        .into_iter()
        .map(|tc| TestCase {
            input: tc.input,
            expected_output: tc.expected_output,
        })
        .collect();

    let request = RunRequest::new(payload.language, payload.source_code, test_cases);
    let language = request.language.to_string();

    metrics::record_run_submitted(&language);
    info!(
        run_id = %request.id,
        language = %request.language,
        test_cases = request.test_cases.len(),
        "Run submitted"
    );

    let start = Instant::now();
    match state.orchestrator.run(&request).await {
        Ok(verdict) => {
            let status = match verdict.status {
                RunStatus::Success => "success",
                RunStatus::Failure => "failure",
            };
            metrics::record_run_completed(&language, status, start.elapsed().as_millis() as f64);
            (StatusCode::OK, Json(verdict)).into_response()
        }
        Err(JudgeError::UnsupportedLanguage(lang)) => {
            metrics::record_run_rejected("unsupported_language");
            warn!(run_id = %request.id, language = %lang, "Unsupported language");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": format!("unsupported language: {}", lang) })),
            )
                .into_response()
        }
        Err(err) => {
            // Whole-run failure: log the diagnostics, hand the client a
            // synthetic all-failed verdict with a fixed message instead
            error!(run_id = %request.id, error = %err, "Run aborted");
            metrics::record_run_completed(&language, "aborted", start.elapsed().as_millis() as f64);
            let verdict = Verdict::rejected(&request.test_cases, EXECUTION_FAILED_MESSAGE);
            (StatusCode::OK, Json(verdict)).into_response()
        }
    }
}

/// GET /health - Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /languages - enabled languages with their starter templates
pub async fn list_languages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let languages: Vec<LanguageInfo> = state
        .orchestrator
        .registry()
        .languages()
        .into_iter()
        .map(|language| LanguageInfo {
            language,
            starter_code: templates::starter_code(language),
        })
        .collect();

    Json(languages)
}

/// GET /metrics - Prometheus text exposition
pub async fn get_metrics() -> impl IntoResponse {
    (StatusCode::OK, metrics::render_metrics())
}
