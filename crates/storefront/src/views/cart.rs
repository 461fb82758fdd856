//! Cart display data for templates.

use std::collections::HashMap;

use rust_decimal::Decimal;

use firdous_core::{CartItemId, ProductId};

use crate::api::{CartItem, Product};

use super::{emoji_for, gradient_for};

/// Flat shipping fee applied below the free-shipping threshold.
fn flat_shipping() -> Decimal {
    Decimal::new(599, 2)
}

/// Subtotal above which shipping is waived.
fn free_shipping_threshold() -> Decimal {
    Decimal::new(50, 0)
}

/// A single cart line, ready for display. Product names come from the
/// best-effort product cache and fall back to the raw product id.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub item_id: CartItemId,
    pub product_id: ProductId,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub line_total: Decimal,
    pub gradient: (&'static str, &'static str),
    pub emoji: &'static str,
}

impl CartLineView {
    fn build(item: &CartItem, product: Option<&Product>) -> Self {
        let name = product.map_or_else(|| item.product_id.to_string(), |p| p.name.clone());

        Self {
            item_id: item.id.clone(),
            product_id: item.product_id.clone(),
            sku: item.product_id.short().to_owned(),
            quantity: item.quantity,
            line_total: item.price * Decimal::from(item.quantity),
            gradient: gradient_for(&item.product_id),
            emoji: emoji_for(product.map_or("", |p| p.name.as_str())),
            name,
        }
    }
}

/// Order summary figures, duplicated client-side for display only; the
/// authoritative total comes from order creation on the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CartSummary {
    /// Compute subtotal, shipping, and total for the given items.
    ///
    /// Shipping is a flat 5.99, waived once the subtotal exceeds 50.
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        let subtotal: Decimal = items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum();

        let shipping = if subtotal > free_shipping_threshold() {
            Decimal::ZERO
        } else {
            flat_shipping()
        };

        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Whether the shipping line should read FREE.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// The full cart page view.
#[derive(Debug, Clone)]
pub struct CartPage {
    pub lines: Vec<CartLineView>,
    pub summary: CartSummary,
}

impl CartPage {
    /// Build the page view from cart items and whatever products the cache
    /// could resolve.
    #[must_use]
    pub fn build(items: &[CartItem], products: &HashMap<ProductId, Product>) -> Self {
        let lines = items
            .iter()
            .map(|item| CartLineView::build(item, products.get(&item.product_id)))
            .collect();

        Self {
            lines,
            summary: CartSummary::from_items(items),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in the cart (shown in the header and badge).
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }
}
