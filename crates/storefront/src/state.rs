//! Application state shared across handlers.

use std::sync::Arc;

use moka::future::Cache;

use firdous_core::ProductId;

use crate::api::{ApiClient, Product};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// backend API client, configuration, and the product cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: ApiClient,
    /// Best-effort product cache, keyed by product id. Populated whenever a
    /// product listing is rendered and only ever refreshed by overwrite; it
    /// may be stale or incomplete relative to the backend.
    products: Cache<ProductId, Product>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let api = ApiClient::new(&config.backend_url);
        let products = Cache::builder().max_capacity(10_000).build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                products,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Remember every product from a freshly rendered listing.
    pub async fn remember_products(&self, products: &[Product]) {
        for product in products {
            self.inner
                .products
                .insert(product.id.clone(), product.clone())
                .await;
        }
    }

    /// Look up a product from the cache.
    pub async fn cached_product(&self, id: &ProductId) -> Option<Product> {
        self.inner.products.get(id).await
    }
}
