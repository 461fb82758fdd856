//! Orders tab: order history and payment status checks.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use tracing::instrument;

use firdous_core::{OrderId, ProductId, format_usd};

use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;
use crate::views::OrderCard;

use super::{MessageQuery, notice_redirect, resolve_products, user_label};

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderCard>,
    pub load_failed: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub user_label: String,
    pub active_tab: &'static str,
}

/// Display the order history.
#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> OrdersTemplate {
    let (orders, load_failed) = match state.api().orders(&user.id).await {
        Ok(orders) => {
            let ids: Vec<ProductId> = orders
                .iter()
                .flat_map(|order| order.items.iter().map(|item| item.product_id.clone()))
                .collect();
            let products = resolve_products(&state, ids.iter()).await;
            let cards = orders
                .iter()
                .map(|order| OrderCard::build(order, &products))
                .collect();
            (cards, false)
        }
        Err(e) => {
            tracing::error!("Error loading orders: {e}");
            (Vec::new(), true)
        }
    };

    OrdersTemplate {
        orders,
        load_failed,
        notice: query.notice,
        error: query.error,
        user_label: user_label(&user),
        active_tab: "orders",
    }
}

/// Check the payment status for an order and report it as a notice.
///
/// A payment that does not exist yet is a normal transient state, not an
/// error; so is a transport failure here.
#[instrument(skip(state))]
pub async fn payment_status(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Redirect {
    let order_id = OrderId::new(id);

    match state.api().payment_status(&order_id).await {
        Ok(Some(payment)) => {
            let notice = format!(
                "{} Payment {}: {}",
                payment.status.icon(),
                payment.status.as_str(),
                format_usd(payment.amount)
            );
            notice_redirect("/orders", &notice)
        }
        Ok(None) => notice_redirect("/orders", "Payment is still processing..."),
        Err(e) => {
            tracing::warn!("Payment status lookup failed: {e}");
            notice_redirect("/orders", "Payment status not available yet")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::api::Order;

    fn template(orders: Vec<OrderCard>, load_failed: bool) -> OrdersTemplate {
        OrdersTemplate {
            orders,
            load_failed,
            notice: None,
            error: None,
            user_label: "user@example.com".to_string(),
            active_tab: "orders",
        }
    }

    #[test]
    fn test_no_orders_shows_placeholder() {
        let html = template(Vec::new(), false).render().unwrap();
        assert!(html.contains("No orders yet"));
    }

    #[test]
    fn test_order_card_renders_reference_status_and_total() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "status": "completed",
                "total": 30.99,
                "items": [{"id":"i-1","order_id":"o-1","product_id":"p-1","quantity":2,"price":12.5}],
                "created_at": "2026-03-14T09:26:53Z"
            }"#,
        )
        .unwrap();
        let html = template(vec![OrderCard::build(&order, &HashMap::new())], false)
            .render()
            .unwrap();

        assert!(html.contains("Order #0F8FAD5B"));
        assert!(html.contains("✅ Completed"));
        assert!(html.contains("$30.99"));
        assert!(html.contains("Check Payment Status"));
    }

    #[test]
    fn test_load_failure_shows_retry_message() {
        let html = template(Vec::new(), true).render().unwrap();
        assert!(html.contains("Failed to load orders. Please try again."));
    }
}
