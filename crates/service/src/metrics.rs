use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

use crate::errors::StoreError;

// Prometheus metrics (default registry)
pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "records_store_operations_total",
        "Store operations by store, operation and outcome",
        &["store", "op", "outcome"]
    )
    .expect("register store_operations_total")
});

pub fn observe<T>(store: &str, op: &str, result: &Result<T, StoreError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    STORE_OPERATIONS_TOTAL.with_label_values(&[store, op, outcome]).inc();
}
