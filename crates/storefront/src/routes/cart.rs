//! Cart tab: viewing the cart and mutating it.
//!
//! The checkout flow mirrors the backend's expectations: re-fetch the cart
//! so the order is placed against current state, create the order, then
//! clear the cart. A clear failure is logged and the flow proceeds; the
//! stale lines surface again on the next cart view.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use firdous_core::{CartItemId, ProductId};

use crate::api::{OrderItemInput, Product, fallback};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;
use crate::views::CartPage;

use super::{MessageQuery, error_redirect, notice_redirect, resolve_products, user_label};

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub item_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub cart: CartPage,
    pub load_failed: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub user_label: String,
    pub active_tab: &'static str,
}

/// Display the cart page.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> CartTemplate {
    let (cart, load_failed) = match state.api().cart(&user.id).await {
        Ok(maybe_cart) => {
            let items = maybe_cart.map(|c| c.items).unwrap_or_default();
            let ids: Vec<ProductId> = items.iter().map(|item| item.product_id.clone()).collect();
            let products = resolve_products(&state, ids.iter()).await;
            (CartPage::build(&items, &products), false)
        }
        Err(e) => {
            tracing::error!("Error loading cart: {e}");
            (CartPage::build(&[], &HashMap::new()), true)
        }
    };

    CartTemplate {
        cart,
        load_failed,
        notice: query.notice,
        error: query.error,
        user_label: user_label(&user),
        active_tab: "cart",
    }
}

/// Cache lookup with a one-shot refresh of the listing on miss.
async fn lookup_product(state: &AppState, id: &ProductId) -> Option<Product> {
    if let Some(product) = state.cached_product(id).await {
        return Some(product);
    }

    match state.api().products().await {
        Ok(products) => {
            state.remember_products(&products).await;
            state.cached_product(id).await
        }
        Err(e) => {
            tracing::warn!("Product refresh failed: {e}");
            None
        }
    }
}

/// Add an item to the cart. The price sent to the backend is the listed
/// price captured from the product cache at add time.
#[instrument(skip(state, user))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let product_id = ProductId::new(form.product_id);
    let quantity = form.quantity.unwrap_or(1);

    let Some(product) = lookup_product(&state, &product_id).await else {
        return error_redirect("/shop", "Product is no longer available").into_response();
    };

    match state
        .api()
        .add_cart_item(&user.id, &product_id, quantity, product.price)
        .await
    {
        Ok(_) => {
            let notice = format!("Added {} to cart!", product.name);
            notice_redirect("/shop", &notice).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to add item to cart: {e}");
            error_redirect("/shop", &e.user_message(fallback::ADD_ITEM)).into_response()
        }
    }
}

/// Remove a single item from the cart.
#[instrument(skip(state, user))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let item_id = CartItemId::new(form.item_id);

    match state.api().remove_cart_item(&user.id, &item_id).await {
        Ok(()) => notice_redirect("/cart", "Item removed from cart").into_response(),
        Err(e) => {
            tracing::error!("Failed to remove from cart: {e}");
            error_redirect("/cart", &e.user_message(fallback::REMOVE_ITEM)).into_response()
        }
    }
}

/// Empty the cart. The confirmation dialog lives in the template.
#[instrument(skip(state, user))]
pub async fn clear(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    match state.api().clear_cart(&user.id).await {
        Ok(()) => notice_redirect("/cart", "Cart cleared").into_response(),
        Err(e) => {
            tracing::error!("Failed to clear cart: {e}");
            error_redirect("/cart", &e.user_message(fallback::CLEAR_CART)).into_response()
        }
    }
}

/// Place an order from the current cart.
#[instrument(skip(state, user))]
pub async fn checkout(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    // Re-fetch so the order reflects backend state, not the rendered page.
    let items = match state.api().cart(&user.id).await {
        Ok(maybe_cart) => maybe_cart.map(|c| c.items).unwrap_or_default(),
        Err(e) => {
            tracing::error!("Checkout cart fetch failed: {e}");
            return error_redirect("/cart", &e.user_message(fallback::CREATE_ORDER))
                .into_response();
        }
    };

    // An empty re-fetched cart still goes to the backend; it owns the rules.
    let inputs: Vec<OrderItemInput> = items.iter().map(OrderItemInput::from).collect();

    let order = match state.api().create_order(&user.id, inputs).await {
        Ok(order) => order,
        Err(e) => {
            tracing::error!("Failed to create order: {e}");
            return error_redirect("/cart", &e.user_message(fallback::CREATE_ORDER))
                .into_response();
        }
    };

    // No rollback: a failed clear leaves already-ordered lines to be
    // re-fetched next time the cart is viewed.
    if let Err(e) = state.api().clear_cart(&user.id).await {
        tracing::warn!(order_id = %order.id, "Cart clear after order failed: {e}");
    }

    let notice = format!("Order placed! ID: {}", order.id.short());
    notice_redirect("/orders", &notice).into_response()
}
