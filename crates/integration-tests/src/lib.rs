//! Integration tests for Pomelo.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart round-trips through file-backed durable slots
//! - `notifications` - Toast lifecycle under tokio's paused clock

/// Install a test subscriber so `RUST_LOG`-filtered tracing output shows up
/// in failing tests. Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
