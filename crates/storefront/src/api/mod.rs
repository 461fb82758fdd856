//! Commerce backend API client.
//!
//! One method per backend operation, all sharing a single `reqwest` client.
//! The error contract is uniform:
//!
//! - Mutating calls (register, login, cart changes, order creation) fail with
//!   [`ApiError::Backend`] carrying the backend's `error` message, or the
//!   call's fixed fallback string when the body has none.
//! - Read calls parse the response body without inspecting the status; a
//!   missing or `null` body yields an empty collection.
//! - [`ApiClient::payment_status`] is the one call where a non-success
//!   response is not an error: the payment simply is not available yet.
//!
//! No retries, no explicit timeouts, and no caching happen at this layer.

pub mod types;

pub use types::*;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use firdous_core::{CartItemId, OrderId, ProductId, UserId};

/// Header identifying the acting user on cart and order calls.
pub const HEADER_USER_ID: &str = "X-User-ID";

/// Fixed per-action fallback messages, used when the backend reports a
/// failure without a usable error body.
pub mod fallback {
    pub const REGISTER: &str = "Registration failed";
    pub const LOGIN: &str = "Login failed";
    pub const ADD_ITEM: &str = "Failed to add to cart";
    pub const REMOVE_ITEM: &str = "Failed to remove item";
    pub const CLEAR_CART: &str = "Failed to clear cart";
    pub const CREATE_ORDER: &str = "Failed to create order";
}

/// Errors returned by the backend API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, DNS, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend reported a failure status. The message is the backend's
    /// own error string, or the action's fallback when the body had none.
    #[error("{message}")]
    Backend {
        status: StatusCode,
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Message safe to show to the user. Backend-reported messages pass
    /// through verbatim; transport and parse failures collapse into the
    /// action's generic message.
    #[must_use]
    pub fn user_message(&self, action_fallback: &str) -> String {
        match self {
            Self::Backend { message, .. } => message.clone(),
            Self::Http(_) | Self::Parse(_) => action_fallback.to_owned(),
        }
    }
}

/// Error body shape shared by all backend services.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Build the error for a failed mutating call: backend message if present,
/// fixed fallback otherwise.
fn mutation_failure(status: StatusCode, body: &str, action_fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| action_fallback.to_owned());
    ApiError::Backend { status, message }
}

/// Parse a JSON body into the expected type.
fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Parse a read-call body, treating an absent or `null` body as empty.
fn parse_or_default<T: DeserializeOwned + Default>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str::<Option<T>>(body)?.unwrap_or_default())
}

/// Payment lookups never fail on a non-success status: the payment record
/// just does not exist yet.
fn payment_from_parts(status: StatusCode, body: &str) -> Result<Option<Payment>, ApiError> {
    if !status.is_success() {
        return Ok(None);
    }
    Ok(Some(parse_json(body)?))
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the commerce backend REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_owned(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    async fn read_response(res: reqwest::Response) -> Result<(StatusCode, String), ApiError> {
        let status = res.status();
        let body = res.text().await?;
        Ok((status, body))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the registration or the
    /// request fails.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.auth_call("/api/auth/register", email, password, fallback::REGISTER)
            .await
    }

    /// Log in with existing credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.auth_call("/api/auth/login", email, password, fallback::LOGIN)
            .await
    }

    async fn auth_call(
        &self,
        path: &str,
        email: &str,
        password: &str,
        action_fallback: &str,
    ) -> Result<AuthResponse, ApiError> {
        let res = self
            .inner
            .http
            .post(self.url(path))
            .json(&Credentials { email, password })
            .send()
            .await?;
        let (status, body) = Self::read_response(res).await?;

        if !status.is_success() {
            return Err(mutation_failure(status, &body, action_fallback));
        }

        parse_json(&body)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a product
    /// list (including backend error bodies).
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let res = self.inner.http.get(self.url("/api/products/")).send().await?;
        let (_status, body) = Self::read_response(res).await?;
        parse_or_default(&body)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Fetch the user's cart. Returns `None` when the backend sends no cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a cart.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn cart(&self, user_id: &UserId) -> Result<Option<Cart>, ApiError> {
        let res = self
            .inner
            .http
            .get(self.url("/api/cart/"))
            .header(HEADER_USER_ID, user_id.as_str())
            .send()
            .await?;
        let (_status, body) = Self::read_response(res).await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<Cart>>(&body)?)
    }

    /// Add an item to the user's cart. The price is the display price
    /// captured at add time.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the item or the request fails.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn add_cart_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
        price: rust_decimal::Decimal,
    ) -> Result<CartItem, ApiError> {
        let res = self
            .inner
            .http
            .post(self.url("/api/cart/items"))
            .header(HEADER_USER_ID, user_id.as_str())
            .json(&AddItemRequest {
                product_id,
                quantity,
                price,
            })
            .send()
            .await?;
        let (status, body) = Self::read_response(res).await?;

        if !status.is_success() {
            return Err(mutation_failure(status, &body, fallback::ADD_ITEM));
        }

        parse_json(&body)
    }

    /// Remove a single item from the user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal or the request
    /// fails.
    #[instrument(skip(self), fields(user_id = %user_id, item_id = %item_id))]
    pub async fn remove_cart_item(
        &self,
        user_id: &UserId,
        item_id: &CartItemId,
    ) -> Result<(), ApiError> {
        let res = self
            .inner
            .http
            .delete(self.url(&format!("/api/cart/items/{item_id}")))
            .header(HEADER_USER_ID, user_id.as_str())
            .send()
            .await?;
        let (status, body) = Self::read_response(res).await?;

        if !status.is_success() {
            return Err(mutation_failure(status, &body, fallback::REMOVE_ITEM));
        }

        Ok(())
    }

    /// Remove every item from the user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the clear or the request
    /// fails.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn clear_cart(&self, user_id: &UserId) -> Result<(), ApiError> {
        let res = self
            .inner
            .http
            .delete(self.url("/api/cart/"))
            .header(HEADER_USER_ID, user_id.as_str())
            .send()
            .await?;
        let (status, body) = Self::read_response(res).await?;

        if !status.is_success() {
            return Err(mutation_failure(status, &body, fallback::CLEAR_CART));
        }

        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Create an order from the given lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the order or the request
    /// fails.
    #[instrument(skip(self, items), fields(user_id = %user_id))]
    pub async fn create_order(
        &self,
        user_id: &UserId,
        items: Vec<OrderItemInput>,
    ) -> Result<Order, ApiError> {
        let res = self
            .inner
            .http
            .post(self.url("/api/orders/"))
            .header(HEADER_USER_ID, user_id.as_str())
            .json(&CreateOrderRequest { items })
            .send()
            .await?;
        let (status, body) = Self::read_response(res).await?;

        if !status.is_success() {
            return Err(mutation_failure(status, &body, fallback::CREATE_ORDER));
        }

        parse_json(&body)
    }

    /// Fetch the user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an order
    /// list (including backend error bodies).
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn orders(&self, user_id: &UserId) -> Result<Vec<Order>, ApiError> {
        let res = self
            .inner
            .http
            .get(self.url("/api/orders/"))
            .header(HEADER_USER_ID, user_id.as_str())
            .send()
            .await?;
        let (_status, body) = Self::read_response(res).await?;
        parse_or_default(&body)
    }

    // =========================================================================
    // Payments
    // =========================================================================

    /// Look up the payment for an order. Returns `Ok(None)` while the payment
    /// service has nothing for the order yet; a non-success status is not an
    /// error here.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure or an unparseable success
    /// body.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn payment_status(&self, order_id: &OrderId) -> Result<Option<Payment>, ApiError> {
        let res = self
            .inner
            .http
            .get(self.url(&format!("/api/payments/{order_id}")))
            .send()
            .await?;
        let (status, body) = Self::read_response(res).await?;
        payment_from_parts(status, &body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_failure_uses_backend_message() {
        let err = mutation_failure(
            StatusCode::CONFLICT,
            r#"{"error":"email already exists"}"#,
            fallback::REGISTER,
        );
        assert_eq!(err.to_string(), "email already exists");
    }

    #[test]
    fn test_mutation_failure_falls_back_without_error_field() {
        let err = mutation_failure(StatusCode::BAD_GATEWAY, "{}", fallback::LOGIN);
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn test_mutation_failure_falls_back_on_non_json_body() {
        let err = mutation_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>upstream exploded</html>",
            fallback::CREATE_ORDER,
        );
        assert_eq!(err.to_string(), "Failed to create order");
    }

    #[test]
    fn test_parse_or_default_empty_body() {
        let products: Vec<Product> = parse_or_default("").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_or_default_null_body() {
        let products: Vec<Product> = parse_or_default("null").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_or_default_list_body() {
        let products: Vec<Product> = parse_or_default(
            r#"[{"id":"p-1","name":"Mug","description":"","price":9.99,"stock":5}]"#,
        )
        .unwrap();
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_payment_not_found_is_not_an_error() {
        let result =
            payment_from_parts(StatusCode::NOT_FOUND, r#"{"error":"payment not found"}"#);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_payment_success_parses_record() {
        let payment = payment_from_parts(
            StatusCode::OK,
            r#"{"id":"pay-1","order_id":"o-1","amount":30.99,"status":"completed","created_at":"2026-01-01T00:00:00Z","updated_at":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(payment.status, firdous_core::PaymentStatus::Completed);
    }

    #[test]
    fn test_payment_success_with_garbage_body_is_parse_error() {
        let result = payment_from_parts(StatusCode::OK, "not json");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_user_message_passes_backend_text_verbatim() {
        let err = ApiError::Backend {
            status: StatusCode::UNAUTHORIZED,
            message: "invalid credentials".to_owned(),
        };
        assert_eq!(err.user_message(fallback::LOGIN), "invalid credentials");
    }

    #[test]
    fn test_user_message_generic_for_parse_failures() {
        let parse_err = serde_json::from_str::<Payment>("oops").unwrap_err();
        let err = ApiError::from(parse_err);
        assert_eq!(err.user_message(fallback::ADD_ITEM), "Failed to add to cart");
    }
}
