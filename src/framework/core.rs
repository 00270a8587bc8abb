//! # Core Pattern Framework
//!
//! This module defines the two capability traits of the Factory Method recipe.
//!
//! ## Key Types
//!
//! - [`Product`]: The trait every manufactured object must implement.
//! - [`Creator`]: The trait that pairs a required factory method with shared,
//!   provided business logic.

use tracing::debug;

// =============================================================================
// 1. THE PRODUCT ABSTRACTION
// =============================================================================

/// Capability exposed by every object a [`Creator`] can manufacture.
///
/// # Architecture Note
/// Why do we need this trait?
/// The shared creator logic in [`Creator::some_operation`] has to work with
/// *something*, but it must never know *what*. `Product` is that contract:
/// one method, a descriptive string, no side effects, no failure modes.
///
/// Implementations are expected to be pure and deterministic. Two calls to
/// [`operation`](Product::operation) on the same value return the same string.
pub trait Product {
    /// Returns a descriptive, variant-specific string.
    fn operation(&self) -> String;
}

// =============================================================================
// 2. THE CREATOR ABSTRACTION (Required Method + Provided Logic)
// =============================================================================

/// Capability of a type that manufactures a [`Product`] and runs shared
/// business logic against it.
///
/// # Architecture Note
/// Despite its name, the creator's primary responsibility is not creating
/// products. It usually contains core business logic that *relies on* product
/// objects. Concrete creators change that logic indirectly: they implement
/// [`factory_method`](Creator::factory_method) and return a different kind of
/// product, and the provided logic picks it up through the abstraction.
///
/// # Provided Methods
/// [`some_operation`](Creator::some_operation) has a default implementation.
/// You do **not** need to implement it; the whole point is that it is written
/// once, here, against the abstraction. Variants *may* override it, but none
/// of the variants in this recipe do.
///
/// # Definition-Time Enforcement
/// `factory_method` has no default body. A concrete creator that omits it does
/// not compile. That is this recipe's rendering of "abstract method must be
/// implemented": the failure is surfaced by the compiler, never at call time.
pub trait Creator {
    /// Manufactures a product. Each concrete creator returns its own variant,
    /// behind the [`Product`] abstraction.
    fn factory_method(&self) -> Box<dyn Product>;

    /// The shared business logic of the creator hierarchy.
    ///
    /// Calls [`factory_method`](Creator::factory_method) to obtain a product,
    /// then composes a result string around the product's own description.
    /// Note that this body names no concrete type: the output differs across
    /// variants only because the factory method does.
    fn some_operation(&self) -> String {
        // Call the factory method to create a Product object.
        let product = self.factory_method();

        // Now, use the product.
        let result = format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        );
        debug!(%result, "some_operation composed");

        result
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
