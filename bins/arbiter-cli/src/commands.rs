// CLI commands for driving the remote judge
use anyhow::{bail, Context, Result};
use arbiter_common::templates;
use arbiter_common::types::{Language, Problem, RunRequest, RunStatus, TestCase, Verdict};
use arbiter_common::JudgeConfig;
use arbiter_judge::{LanguageRegistry, Orchestrator, RemoteJudge};
use std::fs;
use std::path::Path;

fn parse_language(name: &str) -> Result<Language> {
    Language::from_str(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown language '{}' (valid options: javascript, python, java, cpp)",
            name
        )
    })
}

fn registry_from_env() -> Result<LanguageRegistry> {
    match std::env::var("LANGUAGES_CONFIG") {
        Ok(path) => LanguageRegistry::load(&path)
            .with_context(|| format!("failed to load language config from {}", path)),
        Err(_) => Ok(LanguageRegistry::default()),
    }
}

fn load_test_cases(tests: Option<&Path>, problem: Option<&Path>) -> Result<Vec<TestCase>> {
    match (tests, problem) {
        (Some(_), Some(_)) => bail!("pass either --tests or --problem, not both"),
        (Some(path), None) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse test cases from {}", path.display()))
        }
        (None, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let problem: Problem = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse problem from {}", path.display()))?;
            Ok(problem.test_cases)
        }
        (None, None) => bail!("a test-case source is required (--tests or --problem)"),
    }
}

/// Submit a solution file and print the aggregated verdict.
pub async fn run_submission(
    source: &Path,
    language: &str,
    tests: Option<&Path>,
    problem: Option<&Path>,
    as_json: bool,
) -> Result<()> {
    let language = parse_language(language)?;

    let source_code = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    if source_code.trim().is_empty() {
        bail!("{} is empty - nothing to submit", source.display());
    }

    let test_cases = load_test_cases(tests, problem)?;

    let config = JudgeConfig::from_env()
        .context("judge backend configuration is required (set JUDGE_URL)")?;
    let backend = RemoteJudge::new(&config)?;
    let orchestrator =
        Orchestrator::new(backend, registry_from_env()?).with_max_retries(config.max_retries);

    let request = RunRequest::new(language, source_code, test_cases);
    let verdict = orchestrator.run(&request).await.context("run failed")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print_verdict(&verdict);
    }

    Ok(())
}

fn print_verdict(verdict: &Verdict) {
    match verdict.status {
        RunStatus::Success => println!("✓ All test cases passed"),
        RunStatus::Failure => println!("✗ {}", verdict.error_message),
    }
    println!("  Passed: {}/{}", verdict.passed, verdict.total);
    println!("  Correctness: {}%", verdict.correctness);

    for (idx, case) in verdict.failed_cases.iter().enumerate() {
        println!();
        println!("  Failed case {}", idx + 1);
        println!("    Input:    {:?}", case.input);
        println!("    Expected: {:?}", case.expected);
        println!("    Actual:   {:?}", case.actual);
    }
}

/// List enabled languages with their backend environment ids.
pub fn list_languages() -> Result<()> {
    let registry = registry_from_env()?;
    for language in registry.languages() {
        if let Some(id) = registry.resolve(language) {
            println!("{:<12} environment {}", language.to_string(), id);
        }
    }
    Ok(())
}

/// Print the starter template for a language.
pub fn print_template(language: &str) -> Result<()> {
    let language = parse_language(language)?;
    print!("{}", templates::starter_code(language));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language("python").unwrap(), Language::Python);
        assert_eq!(parse_language("C++").unwrap(), Language::Cpp);
        assert!(parse_language("cobol").is_err());
    }

    #[test]
    fn test_test_case_source_is_required() {
        assert!(load_test_cases(None, None).is_err());
    }

    #[test]
    fn test_test_case_sources_are_exclusive() {
        let a = PathBuf::from("tests.json");
        let b = PathBuf::from("problem.json");
        // Rejected before any file IO happens
        assert!(load_test_cases(Some(&a), Some(&b)).is_err());
    }

    #[test]
    fn test_test_case_file_shape() {
        let cases: Vec<TestCase> = serde_json::from_str(
            r#"[
                {"input": "[2,7,11,15] 9", "expected_output": "[0,1]"},
                {"input": "[3,2,4] 6", "expected_output": "[1,2]"}
            ]"#,
        )
        .unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].expected_output, "[1,2]");
    }
}
