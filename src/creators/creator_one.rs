use crate::framework::{Creator, Product};
use crate::products::ConcreteProduct1;
use tracing::debug;

/// Creator variant that manufactures [`ConcreteProduct1`].
///
/// # Architecture Note
/// The method signature still speaks in the abstract product type, even though
/// a concrete product is what actually comes back. This keeps the creator side
/// independent of the concrete product classes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        debug!(creator = "ConcreteCreator1", "manufacturing product");
        Box::new(ConcreteProduct1)
    }
}
