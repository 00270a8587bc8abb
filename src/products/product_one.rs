use crate::framework::Product;

/// First concrete product variant.
///
/// Stateless and immutable. Its [`operation`](Product::operation) output is a
/// hardcoded literal, so the value carries no data at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}
