//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Entity Operations**: Create, List, Get, Update and Delete, with the record id
//! - **Rejections**: every failed validation at `warn`, with the error message
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a dish creation followed by a rejected update reads:
//!
//! ```text
//! INFO Created entity_type="Dish" id=3f9c… size=1
//! WARN Update failed entity_type="Dish" id=3f9c… error=Dish must include a name
//! ```

/// Installs the global `tracing` subscriber.
///
/// Filtering comes from `RUST_LOG`; the output is compact and hides the module path, since
/// every actor event already carries an `entity_type` field. Calling it more than once is a
/// no-op, which keeps tests that share a process from failing.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
