//! # Factory Method Recipe
//!
//! Demo driver for the Factory Method pattern.
//!
//! ## 🚀 What It Does
//!
//! The entry point exercises the recipe end to end:
//! 1.  Sets up tracing (logs on stderr, transcript on stdout).
//! 2.  Launches the client routine with a [`ConcreteCreator1`](factory_method_recipe::creators::ConcreteCreator1).
//! 3.  Launches it again with a [`ConcreteCreator2`](factory_method_recipe::creators::ConcreteCreator2).
//!
//! The client never learns which creator it was handed; the two output blocks
//! differ only in the product string that surfaces through the abstraction.

use factory_method_recipe::clients::ClientError;
use factory_method_recipe::lifecycle::{run_demo, setup_tracing};
use std::io::Write;
use tracing::info;

fn main() -> Result<(), ClientError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting factory method demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)?;
    out.flush()?;

    info!("Demo completed successfully");
    Ok(())
}
