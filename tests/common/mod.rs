//! Common test utilities
#![allow(dead_code)]

use std::sync::Once;

use echolect::runtime::{ClientConfig, CpuClient};
use echolect::tensor::Tensor;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary
///
/// Filtered by `RUST_LOG`; silent unless it is set.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Create a CPU client for testing
pub fn create_cpu_client() -> CpuClient {
    init_tracing();
    CpuClient::new()
}

/// Create a CPU client with an explicit configuration
pub fn create_cpu_client_with(config: ClientConfig) -> CpuClient {
    init_tracing();
    CpuClient::with_config(config)
}

/// Row-major `[rows, cols]` f64 batch where element `(r, c)` is `r * 100 + c`
pub fn indexed_batch(rows: usize, cols: usize) -> Tensor {
    let data: Vec<f64> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r * 100 + c) as f64))
        .collect();
    Tensor::from_slice(&data, &[rows, cols])
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
