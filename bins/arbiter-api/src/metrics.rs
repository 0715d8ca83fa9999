// Prometheus metrics for the Arbiter API

use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    // Global registry
    pub static ref REGISTRY: Registry = Registry::new();

    // Runs submitted total (counter with language label)
    pub static ref RUNS_SUBMITTED: CounterVec = CounterVec::new(
        Opts::new("arbiter_runs_submitted_total", "Total number of runs submitted"),
        &["language"]
    )
    .expect("metric can be created");

    // Runs completed total (counter with language and status labels)
    pub static ref RUNS_COMPLETED: CounterVec = CounterVec::new(
        Opts::new("arbiter_runs_completed_total", "Total number of runs completed"),
        &["language", "status"]
    )
    .expect("metric can be created");

    // Runs rejected before any execution (counter with reason label)
    pub static ref RUNS_REJECTED: CounterVec = CounterVec::new(
        Opts::new("arbiter_runs_rejected_total", "Total runs rejected before execution"),
        &["reason"]
    )
    .expect("metric can be created");

    // End-to-end run duration histogram (in milliseconds)
    pub static ref RUN_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "arbiter_run_duration_ms",
            "End-to-end run duration in milliseconds"
        )
        .buckets(vec![250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 30000.0, 60000.0]),
        &["language"]
    )
    .expect("metric can be created");
}

/// Initialize metrics registry
pub fn init_metrics() {
    REGISTRY
        .register(Box::new(RUNS_SUBMITTED.clone()))
        .expect("collector can be registered");

    REGISTRY
        .register(Box::new(RUNS_COMPLETED.clone()))
        .expect("collector can be registered");

    REGISTRY
        .register(Box::new(RUNS_REJECTED.clone()))
        .expect("collector can be registered");

    REGISTRY
        .register(Box::new(RUN_DURATION.clone()))
        .expect("collector can be registered");
}

/// Render metrics in Prometheus text format
pub fn render_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Record run submission
pub fn record_run_submitted(language: &str) {
    RUNS_SUBMITTED.with_label_values(&[language]).inc();
}

/// Record run rejection
pub fn record_run_rejected(reason: &str) {
    RUNS_REJECTED.with_label_values(&[reason]).inc();
}

/// Record run completion
pub fn record_run_completed(language: &str, status: &str, duration_ms: f64) {
    RUNS_COMPLETED.with_label_values(&[language, status]).inc();
    RUN_DURATION.with_label_values(&[language]).observe(duration_ms);
}
