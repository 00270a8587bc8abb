//! Orchestration layer: the demo driver and tracing setup.

pub mod demo;
pub mod tracing;

pub use demo::run_demo;
pub use tracing::setup_tracing;
