//! Wire types for the commerce backend REST API.
//!
//! These records mirror the backend's JSON models exactly. Prices and totals
//! arrive as JSON numbers and are held as [`Decimal`] so client-side display
//! math stays exact; unknown fields are ignored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use firdous_core::{
    CartId, CartItemId, Email, OrderId, OrderStatus, PaymentId, PaymentStatus, ProductId, UserId,
};

// =============================================================================
// Auth
// =============================================================================

/// Credentials payload for register and login.
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The user record embedded in an auth response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: Email,
    pub role: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Successful register/login response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

// =============================================================================
// Products
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// A line in the user's cart. The price is the one captured when the item
/// was added, not the product's current price.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: Option<CartId>,
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// The user's cart with its items.
#[derive(Debug, Clone, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// Request body for adding an item to the cart.
#[derive(Debug, Serialize)]
pub struct AddItemRequest<'a> {
    pub product_id: &'a ProductId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

// =============================================================================
// Orders
// =============================================================================

/// A line in a placed order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A placed order.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

/// A single line of an order-creation request.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&CartItem> for OrderItemInput {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Request body for creating an order from cart lines.
#[derive(Debug, Serialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemInput>,
}

// =============================================================================
// Payments
// =============================================================================

/// Payment record for an order.
#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: PaymentStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_number_price() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p-1","name":"Desk Lamp","description":"","price":24.5,"stock":3,"created_at":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(product.price, Decimal::new(245, 1));
        assert_eq!(product.stock, 3);
    }

    #[test]
    fn test_cart_defaults_missing_items() {
        let cart: Cart =
            serde_json::from_str(r#"{"id":"c-1","user_id":"u-1"}"#).unwrap();
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_order_parses_backend_shape() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "o-1",
                "user_id": "u-1",
                "total": 30.99,
                "status": "pending",
                "items": [{"id":"i-1","order_id":"o-1","product_id":"p-1","quantity":2,"price":10.0}],
                "created_at": "2026-03-14T09:26:53Z",
                "updated_at": "2026-03-14T09:26:53Z"
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, firdous_core::OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, Decimal::new(3099, 2));
    }

    #[test]
    fn test_add_item_request_serializes_price_as_number() {
        let product_id = ProductId::new("p-1");
        let request = AddItemRequest {
            product_id: &product_id,
            quantity: 2,
            price: Decimal::new(1999, 2),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["product_id"], "p-1");
        assert_eq!(json["quantity"], 2);
        assert!(json["price"].is_number());
    }

    #[test]
    fn test_order_item_input_from_cart_item() {
        let item: CartItem = serde_json::from_str(
            r#"{"id":"i-1","cart_id":"c-1","product_id":"p-9","quantity":3,"price":5.0}"#,
        )
        .unwrap();
        let input = OrderItemInput::from(&item);
        assert_eq!(input.product_id, item.product_id);
        assert_eq!(input.quantity, 3);
    }
}
