//! Product lookups: code existence and unit prices.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{Price, ProductCode};

/// Answers whether a product code is in the catalog.
#[async_trait]
pub trait ProductCodeChecker: Send + Sync {
    /// Returns false for unknown codes; never errors.
    async fn check_product_code_exists(&self, product_code: &ProductCode) -> bool;
}

#[async_trait]
impl<F> ProductCodeChecker for F
where
    F: Fn(&ProductCode) -> bool + Send + Sync,
{
    async fn check_product_code_exists(&self, product_code: &ProductCode) -> bool {
        self(product_code)
    }
}

/// Quotes the unit price of a product.
///
/// Only called with codes that already passed [`ProductCodeChecker`], so it
/// has no failure case.
#[async_trait]
pub trait PriceCatalog: Send + Sync {
    async fn get_product_price(&self, product_code: &ProductCode) -> Price;
}

#[async_trait]
impl<F> PriceCatalog for F
where
    F: Fn(&ProductCode) -> Price + Send + Sync,
{
    async fn get_product_price(&self, product_code: &ProductCode) -> Price {
        self(product_code)
    }
}

/// In-memory product catalog for testing and local runs.
///
/// Serves both as code checker and price list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    prices: Arc<HashMap<String, Price>>,
}

impl InMemoryProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a catalog that also lists `product_code` at `price`.
    pub fn with_product(self, product_code: impl Into<String>, price: Price) -> Self {
        let mut prices = (*self.prices).clone();
        prices.insert(product_code.into(), price);
        Self {
            prices: Arc::new(prices),
        }
    }

    /// Number of products listed.
    pub fn product_count(&self) -> usize {
        self.prices.len()
    }

    fn price_of(&self, product_code: &ProductCode) -> Option<Price> {
        self.prices.get(product_code.as_str()).copied()
    }
}

#[async_trait]
impl ProductCodeChecker for InMemoryProductCatalog {
    async fn check_product_code_exists(&self, product_code: &ProductCode) -> bool {
        self.price_of(product_code).is_some()
    }
}

#[async_trait]
impl PriceCatalog for InMemoryProductCatalog {
    async fn get_product_price(&self, product_code: &ProductCode) -> Price {
        // Unlisted codes never get past validation.
        self.price_of(product_code).unwrap_or_else(Price::zero)
    }
}
