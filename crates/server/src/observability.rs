use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static RECORD_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "shelter_record_operations_total",
        "Record operations handled, by resource, operation and outcome",
        &["resource", "operation", "outcome"]
    )
    .expect("register record_operations_total")
});

/// Count one handled record operation.
pub fn record_op<T, E>(resource: &str, operation: &str, result: &Result<T, E>) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    RECORD_OPERATIONS_TOTAL
        .with_label_values(&[resource, operation, outcome])
        .inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    // touch the lazy so the family is listed before the first request
    Lazy::force(&RECORD_OPERATIONS_TOTAL);
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
