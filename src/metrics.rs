//! Prometheus metrics for the directory API and the presenter.
//!
//! Router requests are counted per route; the presenter records fetch
//! latency and failures. The exporter listens on its own port so the
//! router's path table stays exactly as documented.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Users fetch latency metric name.
pub const METRIC_USERS_FETCH_LATENCY: &str = "users_fetch_latency_ms";
/// Users fetch failures counter metric name.
pub const METRIC_USERS_FETCH_FAILURES: &str = "users_fetch_failures_total";

/// Route label for the health endpoints.
pub const ROUTE_HEALTH: &str = "health";
/// Route label for the users endpoints.
pub const ROUTE_USERS: &str = "users";
/// Route label for the 404 fallback.
pub const ROUTE_NOT_FOUND: &str = "not_found";

/// Register metric descriptions. Call once at startup.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests by route"
    );
    describe_histogram!(
        METRIC_USERS_FETCH_LATENCY,
        "Presenter users fetch latency in milliseconds"
    );
    describe_counter!(
        METRIC_USERS_FETCH_FAILURES,
        "Total number of failed presenter users fetches"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus exporter with its own HTTP listener.
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Count a request served by the given route.
pub fn inc_http_requests(route: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "route" => route).increment(1);
}

/// Record users fetch latency.
pub fn record_users_fetch_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_USERS_FETCH_LATENCY).record(latency_ms);
}

/// Increment users fetch failure counter.
pub fn inc_users_fetch_failures() {
    counter!(METRIC_USERS_FETCH_FAILURES).increment(1);
}
