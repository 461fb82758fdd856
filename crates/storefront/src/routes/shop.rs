//! Shop tab: the product listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;
use crate::views::ProductCard;

use super::{MessageQuery, user_label};

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub products: Vec<ProductCard>,
    pub load_failed: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub user_label: String,
    pub active_tab: &'static str,
}

/// Display the product listing.
///
/// Rendering the listing is what feeds the product cache: cart and order
/// views resolve names and prices from whatever has been listed so far.
#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> ShopTemplate {
    let (products, load_failed) = match state.api().products().await {
        Ok(products) => {
            state.remember_products(&products).await;
            (products.iter().map(ProductCard::from).collect(), false)
        }
        Err(e) => {
            tracing::error!("Error loading products: {e}");
            (Vec::new(), true)
        }
    };

    ShopTemplate {
        products,
        load_failed,
        notice: query.notice,
        error: query.error,
        user_label: user_label(&user),
        active_tab: "shop",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::Product;

    fn template(products: Vec<ProductCard>, load_failed: bool) -> ShopTemplate {
        ShopTemplate {
            products,
            load_failed,
            notice: None,
            error: None,
            user_label: "user@example.com".to_string(),
            active_tab: "shop",
        }
    }

    #[test]
    fn test_product_name_markup_is_escaped() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p-1","name":"<script>alert(1)</script>","description":"","price":1.0,"stock":1}"#,
        )
        .unwrap();
        let html = template(vec![ProductCard::from(&product)], false)
            .render()
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_empty_listing_shows_placeholder() {
        let html = template(Vec::new(), false).render().unwrap();
        assert!(html.contains("No products available"));
    }

    #[test]
    fn test_load_failure_shows_retry_message() {
        let html = template(Vec::new(), true).render().unwrap();
        assert!(html.contains("Failed to load products. Please try again."));
    }

    #[test]
    fn test_out_of_stock_disables_button() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p-1","name":"Mug","description":"","price":1.0,"stock":0}"#,
        )
        .unwrap();
        let html = template(vec![ProductCard::from(&product)], false)
            .render()
            .unwrap();
        assert!(html.contains("Out of stock"));
        assert!(html.contains("disabled"));
    }
}
