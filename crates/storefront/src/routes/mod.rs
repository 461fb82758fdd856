//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect by session presence
//! GET  /health                 - Health check (wired in main)
//!
//! # Auth screen
//! GET  /auth                   - Combined login/register screen
//! POST /auth/login             - Login action
//! POST /auth/register          - Register action
//! POST /auth/demo              - One-click demo account
//! POST /auth/logout            - Logout action
//!
//! # Shop tab
//! GET  /shop                   - Product listing
//!
//! # Cart tab
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add item (price captured from cache)
//! POST /cart/remove            - Remove one item
//! POST /cart/clear             - Empty the cart
//! POST /cart/checkout          - Re-fetch cart, create order, clear cart
//!
//! # Orders tab
//! GET  /orders                 - Order history
//! GET  /orders/{id}/payment    - Payment status check (notice redirect)
//! ```
//!
//! Every tab visit re-fetches that tab's data from the backend; the only
//! state carried across visits is the session identity and the best-effort
//! product cache. Transient outcomes travel as `notice`/`error` query
//! parameters, the server-rendered stand-in for toasts.

pub mod auth;
pub mod cart;
pub mod orders;
pub mod shop;

use std::collections::HashMap;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use firdous_core::ProductId;

use crate::api::Product;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Query parameters for transient notices.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub notice: Option<String>,
    pub error: Option<String>,
}

fn message_url(path: &str, key: &str, message: &str) -> String {
    format!("{path}?{key}={}", urlencoding::encode(message))
}

/// Redirect carrying a success notice.
pub(crate) fn notice_redirect(path: &str, notice: &str) -> Redirect {
    Redirect::to(&message_url(path, "notice", notice))
}

/// Redirect carrying an error notice.
pub(crate) fn error_redirect(path: &str, error: &str) -> Redirect {
    Redirect::to(&message_url(path, "error", error))
}

/// Header label for the signed-in user.
pub(crate) fn user_label(user: &CurrentUser) -> String {
    user.email.to_string()
}

/// Resolve product records for the given ids from the cache. Missing
/// products are simply absent; views fall back to raw ids.
pub(crate) async fn resolve_products<'a, I>(
    state: &AppState,
    ids: I,
) -> HashMap<ProductId, Product>
where
    I: IntoIterator<Item = &'a ProductId>,
{
    let mut products = HashMap::new();
    for id in ids {
        if products.contains_key(id) {
            continue;
        }
        if let Some(product) = state.cached_product(id).await {
            products.insert(id.clone(), product);
        }
    }
    products
}

/// Root: straight to the shop when signed in, otherwise the auth screen.
pub async fn index(OptionalAuth(user): OptionalAuth) -> Redirect {
    if user.is_some() {
        Redirect::to("/shop")
    } else {
        Redirect::to("/auth")
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::auth_page))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/demo", post(auth::demo))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}/payment", get(orders::payment_status))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/shop", get(shop::index))
        .nest("/auth", auth_routes())
        .nest("/cart", cart_routes())
        .nest("/orders", order_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_url_encodes_reserved_characters() {
        let url = message_url("/orders", "notice", "Order placed! ID: 0F8FAD5B");
        assert_eq!(url, "/orders?notice=Order%20placed%21%20ID%3A%200F8FAD5B");
    }

    #[test]
    fn test_message_url_plain_text() {
        let url = message_url("/cart", "error", "Cart cleared");
        assert_eq!(url, "/cart?error=Cart%20cleared");
    }
}
