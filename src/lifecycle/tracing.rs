//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by
//! `RUST_LOG`. Log lines go to stderr: stdout belongs to the rendered views.
//!
//! ```bash
//! # Quiet dashboard, warnings only
//! RUST_LOG=warn cargo run
//!
//! # Follow every request to the session actor and the order services
//! RUST_LOG=debug cargo run 2> dashboard.log
//! ```
//!
//! At `info` the interesting events are session lifecycle, accepted or
//! simulated submissions, and fetch counts:
//!
//! ```text
//! INFO Opened id=session_1 customer_id="OMS-Cust-001" size=1
//! INFO submit_order: Order accepted status=202 order_id=None
//! INFO Order submitted session=session_1 status=202
//! INFO fetch_all:fetch_orders: Orders fetched count=3
//! ```
//!
//! At `debug` the client side logs each request before it is sent, with the
//! full payload where one exists (`?request`).

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
