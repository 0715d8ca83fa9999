/// Execution Backend - Boundary to the Remote Judge Service
///
/// **Critical Architectural Boundary:**
/// - The backend knows HOW code executes (which service, which wire format)
/// - The backend does NOT know scoring rules
/// - The backend does NOT evaluate correctness
/// - It returns one raw response per submission for the evaluator to judge
///
/// **Why This Exists:**
/// Enables swappable execution backends without touching orchestration or
/// scoring logic. Production uses `RemoteJudge` over HTTP.
use crate::error::BackendError;
use arbiter_common::JudgeConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw terminal response from one remote submission.
///
/// At most one of the three streams carries the result; classification into
/// an `ExecutionOutcome` happens immediately upon receipt.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExecution {
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubmissionBody<'a> {
    source_code: &'a str,
    language_id: u32,
    stdin: &'a str,
}

#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Submit one test-case execution and block until the backend reports
    /// a terminal state.
    async fn execute(
        &self,
        environment_id: u32,
        source_code: &str,
        stdin: &str,
    ) -> Result<RawExecution, BackendError>;
}

/// HTTP client for a Judge0-compatible execution service.
pub struct RemoteJudge {
    client: reqwest::Client,
    submit_url: String,
    api_key: Option<String>,
    api_host: Option<String>,
}

impl RemoteJudge {
    pub fn new(config: &JudgeConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        // wait=true: the backend holds the request open until execution
        // reaches a terminal state, so one call yields one result.
        let submit_url = format!(
            "{}/submissions?base64_encoded=false&wait=true",
            config.base_url.trim_end_matches('/')
        );

        Ok(Self {
            client,
            submit_url,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }
}

#[async_trait]
impl ExecutionBackend for RemoteJudge {
    async fn execute(
        &self,
        environment_id: u32,
        source_code: &str,
        stdin: &str,
    ) -> Result<RawExecution, BackendError> {
        let body = SubmissionBody {
            source_code,
            language_id: environment_id,
            stdin,
        };

        let mut request = self.client.post(&self.submit_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("X-RapidAPI-Key", key);
        }
        if let Some(host) = &self.api_host {
            request = request.header("X-RapidAPI-Host", host);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_body_wire_shape() {
        let body = SubmissionBody {
            source_code: "print(input())",
            language_id: 71,
            stdin: "hello",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["source_code"], "print(input())");
        assert_eq!(json["language_id"], 71);
        assert_eq!(json["stdin"], "hello");
    }

    #[test]
    fn test_raw_execution_tolerates_missing_and_extra_fields() {
        let raw: RawExecution = serde_json::from_str(
            r#"{"stdout":"42\n","status_id":3,"time":"0.01","memory":3200}"#,
        )
        .unwrap();
        assert_eq!(raw.stdout.as_deref(), Some("42\n"));
        assert!(raw.stderr.is_none());
        assert!(raw.compile_output.is_none());

        let empty: RawExecution = serde_json::from_str("{}").unwrap();
        assert!(empty.stdout.is_none());
    }

    #[test]
    fn test_raw_execution_tolerates_null_streams() {
        let raw: RawExecution = serde_json::from_str(
            r#"{"stdout":null,"stderr":"Traceback...","compile_output":null}"#,
        )
        .unwrap();
        assert!(raw.stdout.is_none());
        assert_eq!(raw.stderr.as_deref(), Some("Traceback..."));
    }

    #[test]
    fn test_submit_url_normalizes_trailing_slash() {
        let judge = RemoteJudge::new(&JudgeConfig::new("http://localhost:2358/")).unwrap();
        assert_eq!(
            judge.submit_url,
            "http://localhost:2358/submissions?base64_encoded=false&wait=true"
        );
    }

    /// Round-trip against a real judge instance.
    /// Configure JUDGE_URL (and key/host if needed) before running.
    #[tokio::test]
    #[ignore] // Requires a live judge backend
    async fn test_remote_judge_executes_python() {
        let config = JudgeConfig::from_env().expect("JUDGE_URL must be set");
        let judge = RemoteJudge::new(&config).expect("failed to build client");

        let raw = judge
            .execute(71, "print(input())", "hello")
            .await
            .expect("submission failed");

        assert_eq!(raw.stdout.as_deref().map(str::trim), Some("hello"));
    }
}
