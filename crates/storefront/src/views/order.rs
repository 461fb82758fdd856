//! Order display data for templates.

use std::collections::HashMap;

use rust_decimal::Decimal;

use firdous_core::{OrderId, ProductId};

use crate::api::{Order, OrderItem, Product};

/// A single order line, ready for display.
#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

impl OrderLineView {
    fn build(item: &OrderItem, product: Option<&Product>) -> Self {
        Self {
            name: product.map_or_else(|| item.product_id.to_string(), |p| p.name.clone()),
            quantity: item.quantity,
            line_total: item.price * Decimal::from(item.quantity),
        }
    }
}

/// Order card display data.
#[derive(Debug, Clone)]
pub struct OrderCard {
    pub id: OrderId,
    /// Short uppercase reference shown in the card header.
    pub reference: String,
    pub placed_at: String,
    pub status_label: String,
    pub status_class: String,
    pub total: Decimal,
    pub lines: Vec<OrderLineView>,
}

impl OrderCard {
    /// Build the card view from an order and whatever products the cache
    /// could resolve.
    #[must_use]
    pub fn build(order: &Order, products: &HashMap<ProductId, Product>) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| OrderLineView::build(item, products.get(&item.product_id)))
            .collect();

        Self {
            id: order.id.clone(),
            reference: order.id.short().to_uppercase(),
            placed_at: order.created_at.format("%B %d, %Y %H:%M").to_string(),
            status_label: order.status.label(),
            status_class: order.status.css_class(),
            total: order.total,
            lines,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use firdous_core::OrderStatus;

    fn order(json: &str) -> Order {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_card_formats_reference_and_date() {
        let card = OrderCard::build(
            &order(
                r#"{
                    "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                    "status": "pending",
                    "total": 30.99,
                    "items": [],
                    "created_at": "2026-03-14T09:26:53Z"
                }"#,
            ),
            &HashMap::new(),
        );
        assert_eq!(card.reference, "0F8FAD5B");
        assert_eq!(card.placed_at, "March 14, 2026 09:26");
        assert_eq!(card.status_label, "⏳ Pending");
        assert_eq!(card.status_class, "status-pending");
    }

    #[test]
    fn test_card_passes_unknown_status_through() {
        let card = OrderCard::build(
            &order(
                r#"{"id":"o-1","status":"shipped","total":1.0,"items":[],"created_at":"2026-01-01T00:00:00Z"}"#,
            ),
            &HashMap::new(),
        );
        assert_eq!(card.status_label, "shipped");
        assert_eq!(card.status_class, "status-shipped");
    }

    #[test]
    fn test_lines_resolve_names_and_totals() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p-1","name":"Mug","description":"","price":10.0,"stock":5}"#,
        )
        .unwrap();
        let mut products = HashMap::new();
        products.insert(product.id.clone(), product);

        let card = OrderCard::build(
            &order(
                r#"{
                    "id": "o-1",
                    "status": "completed",
                    "total": 25.0,
                    "items": [
                        {"id":"i-1","order_id":"o-1","product_id":"p-1","quantity":2,"price":10.0},
                        {"id":"i-2","order_id":"o-1","product_id":"p-gone","quantity":1,"price":5.0}
                    ],
                    "created_at": "2026-01-01T00:00:00Z"
                }"#,
            ),
            &products,
        );
        assert_eq!(card.lines[0].name, "Mug");
        assert_eq!(card.lines[0].line_total, Decimal::new(2000, 2));
        assert_eq!(card.lines[1].name, "p-gone");
    }

    #[test]
    fn test_status_enum_matches_label() {
        let parsed = order(
            r#"{"id":"o-1","status":"FAILED","total":1.0,"items":[],"created_at":"2026-01-01T00:00:00Z"}"#,
        );
        assert_eq!(parsed.status, OrderStatus::Failed);
    }
}
