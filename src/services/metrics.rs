//! Prometheus metrics for account-service.

use once_cell::sync::Lazy;
use prometheus::{opts, register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use std::sync::OnceLock;

/// Account lifecycle counter (created/updated/deleted).
pub static ACCOUNT_OPERATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Transactions appended to statements, by kind.
pub static TRANSACTIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Domain rejections counter (duplicate customer, insufficient funds, ...).
pub static REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        opts!(
            "account_rejections_total",
            "Requests rejected by domain rules"
        ),
        &["reason"]
    )
    .expect("Failed to register REJECTIONS_TOTAL")
});

/// Initialize all metrics. Call once at startup.
pub fn init_metrics() {
    ACCOUNT_OPERATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "account_operations_total",
                "Account lifecycle operations by type"
            ),
            &["operation"]
        )
        .expect("Failed to register ACCOUNT_OPERATIONS_TOTAL")
    });

    TRANSACTIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "account_transactions_total",
                "Statement entries appended, by transaction kind"
            ),
            &["kind"]
        )
        .expect("Failed to register TRANSACTIONS_TOTAL")
    });

    // Force initialization of lazy statics
    let _ = &*REJECTIONS_TOTAL;
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Failed to convert metrics to string")
}

/// Record an account lifecycle operation.
pub fn record_account_operation(operation: &str) {
    if let Some(counter) = ACCOUNT_OPERATIONS_TOTAL.get() {
        counter.with_label_values(&[operation]).inc();
    }
}

/// Record an appended transaction.
pub fn record_transaction(kind: &str) {
    if let Some(counter) = TRANSACTIONS_TOTAL.get() {
        counter.with_label_values(&[kind]).inc();
    }
}

/// Record a domain rejection.
pub fn record_rejection(reason: &str) {
    REJECTIONS_TOTAL.with_label_values(&[reason]).inc();
}
