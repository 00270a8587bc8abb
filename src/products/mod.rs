//! Concrete product variants manufactured by the creator hierarchy.
//!
//! Each variant is a zero-sized, zero-argument-constructible value whose
//! [`operation`](crate::framework::Product::operation) returns a fixed literal
//! identifying it. The literals are the only thing distinguishing the two
//! demonstration blocks in the demo transcript.

pub mod product_one;
pub mod product_two;

pub use product_one::*;
pub use product_two::*;
