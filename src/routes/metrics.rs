//! Prometheus metrics endpoint
//!
//! Exposes relay metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "relay_requests_total",
        "Total number of relay requests by outcome"
    );
    metrics::describe_histogram!(
        "relay_request_duration_seconds",
        "Relay request duration in seconds"
    );
    metrics::describe_counter!(
        "relay_upstream_errors_total",
        "Non-success responses from the completion API by status"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a relay request
pub fn record_request(outcome: &str, duration_secs: f64) {
    metrics::counter!("relay_requests_total", "outcome" => outcome.to_string()).increment(1);
    metrics::histogram!("relay_request_duration_seconds").record(duration_secs);
}

/// Record a request that never reached the relay, without a duration sample
pub fn record_rejected(outcome: &str) {
    metrics::counter!("relay_requests_total", "outcome" => outcome.to_string()).increment(1);
}

/// Record a non-success status from the completion API
pub fn record_upstream_error(status: u16) {
    metrics::counter!("relay_upstream_errors_total", "status" => status.to_string()).increment(1);
}
