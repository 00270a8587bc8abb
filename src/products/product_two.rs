use crate::framework::Product;

/// Second concrete product variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}
