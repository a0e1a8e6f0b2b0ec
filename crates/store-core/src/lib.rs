//! # store-core: Pure Business Logic for the Store Admin
//!
//! This crate is the **heart** of the checkout subsystem. It contains all
//! client-side business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Store Admin Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/admin (CLI screens)                     │   │
//! │  │    Catalog listing ──► Checkout screen ──► Alert + toast       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    store-client (HTTP)                          │   │
//! │  │    load_catalog, submit_purchase, product/bundle CRUD          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ store-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ selection │  │ quantity  │  │ validation│  │   │
//! │  │   │  Product  │  │ Selection │  │  policy   │  │   rules   │  │   │
//! │  │   │  Bundle   │  │  toggle   │  │ coercion  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOCAL TOTALS • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Remote inventory/pricing service                   │   │
//! │  │   Authoritative over stock, price, and every purchase total     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Bundle, purchase payloads)
//! - [`selection`] - The selection store (the checkout state machine's data)
//! - [`quantity`] - Quantity parsing/coercion policy
//! - [`money`] - Money type for display formatting (no arithmetic!)
//! - [`validation`] - Form validation for the CRUD screens
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic and synchronous
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Server Authority**: prices, stock, and totals are the inventory
//!    service's business; this crate only carries and displays them
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use store_core::selection::Selection;
//! use store_core::types::{CatalogItem, ItemKind, Product};
//!
//! let coffee = CatalogItem::Product(Product {
//!     id: "p1".to_string(),
//!     name: "Coffee Beans".to_string(),
//!     price: 120_000,
//!     stock: 25,
//!     description: None,
//! });
//!
//! let mut selection = Selection::new();
//! selection.toggle(&coffee);
//! selection.set_quantity(ItemKind::Product, "p1", "2");
//!
//! let request = selection.to_request(None);
//! assert_eq!(request.products[0].quantity, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod quantity;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use store_core::Selection` instead of
// `use store_core::selection::Selection`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::{Selection, SelectionEntry, Toggled};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default quantity for a freshly selected item.
///
/// ## Why a constant?
/// The same default is applied in three places: when an item is toggled on,
/// when raw quantity input fails to parse, and for the implicit anchor
/// product in the single-product checkout flow. One constant keeps them
/// from drifting apart.
pub const DEFAULT_QUANTITY: i64 = 1;
