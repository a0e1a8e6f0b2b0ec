//! # Catalog Loader
//!
//! Fetches the purchasable catalog (products + bundles) for a checkout
//! screen.
//!
//! ## Loading Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Loading                                   │
//! │                                                                         │
//! │  load_catalog(scope)                                                   │
//! │       │                                                                 │
//! │       ├──────────────┬──────────────────┐                              │
//! │       ▼              ▼                  │ (concurrent, independent)    │
//! │  fetch products   fetch bundles         │                              │
//! │       │              │                  │                              │
//! │       ▼              ▼                  │                              │
//! │    Ok? use it     Ok? use it            │                              │
//! │    Err? log +     Err? log +            │                              │
//! │    empty list     empty list            │                              │
//! │       │              │                  │                              │
//! │       └──────┬───────┘                  │                              │
//! │              ▼                          │                              │
//! │       Catalog { products, bundles }     │                              │
//! │                                                                         │
//! │  A failed fetch degrades its collection to empty instead of failing    │
//! │  the screen; the user keeps partial data. No retry — a failed fetch    │
//! │  stands until the screen is re-entered or reloaded.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{error, info};

use store_core::types::{Bundle, CatalogItem, ItemKind, Product};

use crate::api::StoreClient;

// =============================================================================
// Catalog Scope
// =============================================================================

/// Which slice of the catalog a checkout screen wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogScope {
    /// Everything: full product list, full bundle list (multi-item flow).
    Full,
    /// One anchor product plus the bundles associated with it
    /// (single-product flow).
    ForProduct(String),
}

// =============================================================================
// Catalog
// =============================================================================

/// The combined purchasable set as last fetched from the inventory service.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub bundles: Vec<Bundle>,
}

impl Catalog {
    /// True when both collections came back empty (or failed).
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.bundles.is_empty()
    }

    /// Looks up a catalog item by its selection key.
    pub fn find(&self, kind: ItemKind, id: &str) -> Option<CatalogItem> {
        match kind {
            ItemKind::Product => self
                .products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .map(CatalogItem::Product),
            ItemKind::Bundle => self
                .bundles
                .iter()
                .find(|b| b.id == id)
                .cloned()
                .map(CatalogItem::Bundle),
        }
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Loads the catalog for a scope.
///
/// The product and bundle fetches are independent and run concurrently;
/// results are merged only after both settle. This function never fails:
/// each failed fetch is logged and surfaced as an empty collection.
pub async fn load_catalog(client: &StoreClient, scope: &CatalogScope) -> Catalog {
    let catalog = match scope {
        CatalogScope::Full => {
            let (products, bundles) = tokio::join!(client.list_products(), client.list_bundles());
            Catalog {
                products: collect_or_empty("products", products),
                bundles: collect_or_empty("bundles", bundles),
            }
        }
        CatalogScope::ForProduct(product_id) => {
            let (product, bundles) = tokio::join!(
                client.get_product(product_id),
                client.bundles_for_product(product_id)
            );
            Catalog {
                products: collect_or_empty("products", product.map(Vec::from_iter)),
                bundles: collect_or_empty("bundles", bundles),
            }
        }
    };

    info!(
        products = catalog.products.len(),
        bundles = catalog.bundles.len(),
        "Catalog loaded"
    );

    catalog
}

/// Unwraps a fetch result, degrading failures to an empty list.
fn collect_or_empty<T>(
    collection: &'static str,
    result: Result<Vec<T>, crate::error::ClientError>,
) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            error!(collection = collection, error = %err, "Catalog fetch failed, degrading to empty");
            Vec::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog {
            products: vec![Product {
                id: "p1".to_string(),
                name: "Coffee".to_string(),
                price: 12000,
                stock: 9,
                description: None,
            }],
            bundles: vec![Bundle {
                id: "b1".to_string(),
                name: "Coffee + Mug".to_string(),
                price: 20000,
                stock: 3,
                description: None,
                product_id: "p1".to_string(),
            }],
        }
    }

    #[test]
    fn test_find_by_kind_and_id() {
        let catalog = sample_catalog();

        let product = catalog.find(ItemKind::Product, "p1").unwrap();
        assert_eq!(product.kind(), ItemKind::Product);
        assert_eq!(product.name(), "Coffee");

        let bundle = catalog.find(ItemKind::Bundle, "b1").unwrap();
        assert_eq!(bundle.kind(), ItemKind::Bundle);

        assert!(catalog.find(ItemKind::Product, "b1").is_none());
        assert!(catalog.find(ItemKind::Bundle, "nope").is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(Catalog::default().is_empty());
        assert!(!sample_catalog().is_empty());
    }
}
