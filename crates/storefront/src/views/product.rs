//! Product display data for templates.

use rust_decimal::Decimal;

use firdous_core::ProductId;

use crate::api::Product;

use super::{emoji_for, gradient_for};

/// Description shown when a product carries none.
const DEFAULT_DESCRIPTION: &str = "Premium quality product";

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
    pub gradient: (&'static str, &'static str),
    pub emoji: &'static str,
}

impl ProductCard {
    /// Whether the add-to-cart control should be enabled.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let description = if product.description.is_empty() {
            DEFAULT_DESCRIPTION.to_owned()
        } else {
            product.description.clone()
        };

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description,
            price: product.price,
            stock: product.stock,
            gradient: gradient_for(&product.id),
            emoji: emoji_for(&product.name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_card_fills_in_default_description() {
        let card = ProductCard::from(&product(
            r#"{"id":"p-1","name":"Mug","description":"","price":9.99,"stock":5}"#,
        ));
        assert_eq!(card.description, "Premium quality product");
    }

    #[test]
    fn test_card_keeps_real_description() {
        let card = ProductCard::from(&product(
            r#"{"id":"p-1","name":"Mug","description":"Holds coffee","price":9.99,"stock":5}"#,
        ));
        assert_eq!(card.description, "Holds coffee");
    }

    #[test]
    fn test_out_of_stock() {
        let card = ProductCard::from(&product(
            r#"{"id":"p-1","name":"Mug","description":"","price":9.99,"stock":0}"#,
        ));
        assert!(!card.in_stock());
    }

    #[test]
    fn test_card_visuals_follow_name_and_id() {
        let card = ProductCard::from(&product(
            r#"{"id":"p-1","name":"Desk Lamp","description":"","price":24.5,"stock":3}"#,
        ));
        assert_eq!(card.emoji, "🏠");
        assert_eq!(card.gradient, super::super::gradient_for(&card.id));
    }
}
