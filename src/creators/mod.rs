//! Concrete creator variants.
//!
//! Concrete creators override the factory method and change the type of
//! product the shared base logic ends up working with. Note that neither
//! variant overrides [`some_operation`](crate::framework::Creator::some_operation);
//! they inherit the provided implementation untouched.

pub mod creator_one;
pub mod creator_two;

pub use creator_one::*;
pub use creator_two::*;
