//! # Mock Framework
//!
//! Test doubles for exercising the shared creator logic in isolation.
//!
//! Use [`ScriptedProduct`] when a test needs a product with a caller-chosen
//! description, and [`RecordingCreator`] when a test needs to observe how the
//! provided logic drives the factory method.

use crate::framework::{Creator, Product};
use std::cell::Cell;

/// A product whose description is chosen by the test.
///
/// Lets a test inject any string into the shared logic and assert exactly
/// where it ends up in the composed output.
pub struct ScriptedProduct {
    label: String,
}

impl ScriptedProduct {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Product for ScriptedProduct {
    fn operation(&self) -> String {
        self.label.clone()
    }
}

/// A creator that manufactures [`ScriptedProduct`]s and counts how many times
/// its factory method was invoked.
///
/// # Example
/// ```
/// use factory_method_recipe::framework::{Creator, mock::RecordingCreator};
///
/// let creator = RecordingCreator::new("{scripted}");
/// let result = creator.some_operation();
///
/// assert!(result.contains("{scripted}"));
/// assert_eq!(creator.factory_calls(), 1);
/// ```
pub struct RecordingCreator {
    label: String,
    // Cell, not AtomicUsize: the recipe is single-threaded and the trait
    // takes &self.
    calls: Cell<usize>,
}

impl RecordingCreator {
    /// Creates a recording creator whose products return `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            calls: Cell::new(0),
        }
    }

    /// Number of times `factory_method` has been invoked so far.
    pub fn factory_calls(&self) -> usize {
        self.calls.get()
    }
}

impl Creator for RecordingCreator {
    fn factory_method(&self) -> Box<dyn Product> {
        self.calls.set(self.calls.get() + 1);
        Box::new(ScriptedProduct::new(self.label.clone()))
    }
}
