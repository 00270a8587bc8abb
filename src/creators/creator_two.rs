use crate::framework::{Creator, Product};
use crate::products::ConcreteProduct2;
use tracing::debug;

/// Creator variant that manufactures [`ConcreteProduct2`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        debug!(creator = "ConcreteCreator2", "manufacturing product");
        Box::new(ConcreteProduct2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_method_yields_the_paired_product() {
        let product = ConcreteCreator2.factory_method();
        assert_eq!(product.operation(), ConcreteProduct2.operation());
    }

    #[test]
    fn some_operation_embeds_the_paired_product_result() {
        let result = ConcreteCreator2::default().some_operation();
        assert!(result.contains("{Result of the ConcreteProduct2}"));
    }
}
