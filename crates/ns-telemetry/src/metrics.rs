//! Prometheus metrics for Nexus Secrets.
//!
//! All metrics follow the naming convention: `ns_<component>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: submissions by outcome, HTTP requests by route and status
//! - **Gauge**: secrets by state, wall size (set at scrape time)
//! - **Histogram**: HTTP request latency by route

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge,
    IntGaugeVec, Opts, Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // ADMISSION METRICS
    // =========================================================================

    /// Submissions by outcome
    pub static ref SUBMISSIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("ns_admission_submissions_total", "Total secret submissions"),
        &["outcome"]  // outcome: admitted/exposed/self_exposed/rejected
    ).expect("metric creation failed");

    /// Secrets currently held, by state
    pub static ref SECRETS: IntGaugeVec = IntGaugeVec::new(
        Opts::new("ns_admission_secrets", "Secrets held by the admission store"),
        &["state"]  // state: private/exposed
    ).expect("metric creation failed");

    // =========================================================================
    // WALL METRICS
    // =========================================================================

    /// Exposed secrets in the published wall snapshot
    pub static ref WALL_EXPOSED: IntGauge = IntGauge::new(
        "ns_wall_exposed_secrets",
        "Exposed secrets in the current wall snapshot"
    ).expect("metric creation failed");

    /// Pages in the published wall snapshot
    pub static ref WALL_PAGES: IntGauge = IntGauge::new(
        "ns_wall_pages",
        "Pages in the current wall snapshot"
    ).expect("metric creation failed");

    // =========================================================================
    // HTTP METRICS
    // =========================================================================

    /// Requests by route and status
    pub static ref HTTP_REQUESTS: IntCounterVec = IntCounterVec::new(
        Opts::new("ns_http_requests_total", "Total HTTP requests"),
        &["route", "status"]
    ).expect("metric creation failed");

    /// Request latency by route
    pub static ref HTTP_REQUEST_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "ns_http_request_duration_seconds",
            "Time spent handling HTTP requests"
        ).buckets(exponential_buckets(0.0001, 2.0, 15).expect("valid bucket layout")),
        &["route"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Collectors that are already registered are skipped, so this is safe to
/// call more than once per process.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Admission
        Box::new(SUBMISSIONS.clone()),
        Box::new(SECRETS.clone()),
        // Wall
        Box::new(WALL_EXPOSED.clone()),
        Box::new(WALL_PAGES.clone()),
        // HTTP
        Box::new(HTTP_REQUESTS.clone()),
        Box::new(HTTP_REQUEST_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Content type of `encode_metrics` output.
pub fn metrics_content_type() -> String {
    TextEncoder::new().format_type().to_string()
}
