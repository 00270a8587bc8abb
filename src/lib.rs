#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Factory Method Recipe
//!
//! > **A Recipe for the Factory Method pattern in Rust.**
//!
//! This crate demonstrates the classic **Factory Method** creational pattern using
//! traits and trait objects: a `Creator` capability whose shared business logic is
//! written once against a `Product` abstraction, while each concrete creator decides
//! *which* concrete product that logic ends up working with.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a factory method?
//!
//! The point of the pattern is **inversion of control** between two small hierarchies:
//! - **Creators** own the business logic ([`Creator::some_operation`](framework::Creator::some_operation)).
//! - **Products** own the behavior that logic depends on ([`Product::operation`](framework::Product::operation)).
//!
//! The shared logic never names a concrete product. It obtains one through
//! [`Creator::factory_method`](framework::Creator::factory_method), so picking a
//! different creator is enough to change what the logic works with.
//!
//! ## 🚀 Core Concepts
//!
//! ### Provided Methods: the "default implementation on the abstract base"
//! In class-based languages the abstract `Creator` base supplies `someOperation` and
//! leaves `factoryMethod` abstract. In Rust the same split falls out of trait
//! mechanics: `some_operation` is a **provided method**, `factory_method` is a
//! **required method**.
//! -   **Benefit**: We wrote the composing logic **once**, and it works for every
//!     creator variant, present and future.
//! -   **Enforcement**: A variant that omits `factory_method` is a *compile error*,
//!     not a runtime surprise. The "abstract method not implemented" failure class
//!     never reaches a running program.
//!
//! ### Trait Objects: the client stays oblivious
//! The client routine takes `&dyn Creator`. It type-checks without a single mention
//! of a concrete creator or product, which is the property this recipe exists to show.
//!
//! ## 🗺️ Module Tour
//!
//! The codebase is organized into four main layers. Here is your map:
//!
//! ### 1. The Engine ([`framework`])
//! The two abstractions and nothing else.
//! - **Role**: Defines the `Product` and `Creator` capabilities and the shared
//!   `some_operation` logic.
//! - **Key items**: [`Product`](framework::Product), [`Creator`](framework::Creator).
//!
//! ### 2. The Implementation ([`products`], [`creators`])
//! The concrete variants built using the recipe.
//! - **Role**: Two products with distinguishable output, two creators that each
//!   manufacture one of them.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: The client routine that works with *any* creator through the
//!   abstraction, and the error type for its one fallible step (the terminal write).
//! - **Key items**: [`client_code`](clients::client_code).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: The demo driver that exercises both creators and produces the
//!   canonical transcript, plus tracing setup.
//! - **Key items**: [`run_demo`](lifecycle::run_demo), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for test doubles that verify the shared logic without
//! touching any concrete variant.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo (transcript on stdout)
//! cargo run
//!
//! # Same, with structured logs on stderr
//! RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod creators;
pub mod framework;
pub mod lifecycle;
pub mod products;
