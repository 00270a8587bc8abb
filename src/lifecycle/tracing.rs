//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the recipe.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. Log verbosity is controlled through the `RUST_LOG`
//! environment variable; with it unset the demo transcript is all you see.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`), and writes to **stderr** so structured logs never
//! interleave with the demo transcript on stdout.
//!
//! ## What Gets Traced
//!
//! - **Factory calls**: each concrete creator logs when it manufactures a product
//! - **Shared logic**: the provided `some_operation` logs the composed result
//! - **Client dispatch**: the client routine logs each invocation
//!
//! ## Usage Examples
//!
//! ```bash
//! # Transcript only (default)
//! cargo run
//!
//! # Show composed results and factory calls
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework module
//! RUST_LOG=factory_method_recipe::framework=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .with_writer(std::io::stderr) // Keep stdout clean for the transcript
        .compact()
        .init();
}
