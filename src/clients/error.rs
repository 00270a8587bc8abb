//! Error types for the client routine.

use thiserror::Error;

/// Errors that can occur while running client code.
///
/// The pattern itself has no failure modes; the only fallible step is
/// writing the composed result to the output sink.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Writing to the output sink failed.
    #[error("failed to write client output: {0}")]
    Output(#[from] std::io::Error),
}
