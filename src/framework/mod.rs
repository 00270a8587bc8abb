//! Generic factory-method abstractions.
//!
//! This module provides the two capabilities the whole recipe is built on:
//! the [`Product`] a creator manufactures, and the [`Creator`] whose shared
//! logic works with that product through the abstraction only.
//!
//! # Main Components
//!
//! - [`Product`] - Trait the manufactured objects implement
//! - [`Creator`] - Trait with the required factory method and the provided shared logic
//!
//! # Testing
//!
//! See [`mock`] module for test doubles that exercise the shared logic without
//! any concrete variant.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
