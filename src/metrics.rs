//! Prometheus metrics for the assistant.
//!
//! Exposes:
//! - `mcp_assistant_replies_total` (counter by intent)
//! - `mcp_assistant_search_duration_seconds` (histogram)
//! - `mcp_assistant_search_hits` (histogram)
//!
//! The registry is process-local; [`render`] produces the text exposition
//! format for whoever wants to print or ship it.

use std::time::Duration;

use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter_vec, Encoder, Histogram, IntCounterVec, TextEncoder,
};
use tracing::error;

static REPLIES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "mcp_assistant_replies_total",
        "Replies produced, by intent",
        &["intent"]
    )
    .expect("failed to register replies counter")
});

static SEARCH_DURATION: Lazy<Histogram> = Lazy::new(|| {
    // Exponential buckets from 1µs up to ~16ms.
    let buckets =
        prometheus::exponential_buckets(1e-6, 2.0, 15).expect("failed to create histogram buckets");
    register_histogram!(
        "mcp_assistant_search_duration_seconds",
        "Knowledge search duration in seconds",
        buckets
    )
    .expect("failed to register search duration histogram")
});

static SEARCH_HITS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "mcp_assistant_search_hits",
        "Number of records returned per search",
        vec![0.0, 1.0, 2.0, 3.0]
    )
    .expect("failed to register search hits histogram")
});

/// Ensure collectors are registered.
fn init_collectors() {
    Lazy::force(&REPLIES_TOTAL);
    Lazy::force(&SEARCH_DURATION);
    Lazy::force(&SEARCH_HITS);
}

/// Count one reply for the given intent label.
pub fn record_reply(intent: &'static str) {
    REPLIES_TOTAL.with_label_values(&[intent]).inc();
}

/// Record one knowledge search.
pub fn record_search(duration: Duration, hits: usize) {
    SEARCH_DURATION.observe(duration.as_secs_f64());
    SEARCH_HITS.observe(hits as f64);
}

/// Render all registered metrics in the Prometheus text format.
pub fn render() -> String {
    init_collectors();

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", err);
        return String::new();
    }

    String::from_utf8_lossy(&buffer).into_owned()
}
