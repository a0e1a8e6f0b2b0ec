//! # store-client: HTTP Layer for the Store Admin
//!
//! This crate provides typed access to the remote inventory/pricing
//! service. It is the only crate in the workspace that touches the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Admin Data Flow                              │
//! │                                                                         │
//! │  Checkout screen (apps/admin)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   store-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────────┐ │   │
//! │  │   │  StoreClient  │   │    Catalog    │   │     Checkout     │ │   │
//! │  │   │   (api.rs)    │◄──│    Loader     │   │    Submitter     │ │   │
//! │  │   │               │   │ (catalog.rs)  │   │  (checkout.rs)   │ │   │
//! │  │   │ reqwest over  │   │               │   │                  │ │   │
//! │  │   │ one base URL  │◄──┼───────────────┼───│ one atomic POST  │ │   │
//! │  │   └───────────────┘   └───────────────┘   └──────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Remote inventory/pricing service                   │   │
//! │  │   GET /products, GET /bundles, POST /purchase, CRUD routes      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`api`] - `StoreClient`: one method per service endpoint
//! - [`catalog`] - concurrent catalog loading with per-collection degradation
//! - [`checkout`] - the purchase submitter and its outcome mapping
//! - [`error`] - client error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use store_client::{load_catalog, submit_purchase, CatalogScope, StoreClient};
//! use store_core::Selection;
//!
//! # async fn example() {
//! let client = StoreClient::from_env();
//!
//! let catalog = load_catalog(&client, &CatalogScope::Full).await;
//! let mut selection = Selection::new();
//! for product in &catalog.products {
//!     selection.toggle(&product.clone().into());
//! }
//!
//! let outcome = submit_purchase(&client, &selection, None).await;
//! # let _ = outcome;
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod catalog;
pub mod checkout;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{StoreClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use catalog::{load_catalog, Catalog, CatalogScope};
pub use checkout::{submit_purchase, PURCHASE_FAILED_LABEL};
pub use error::{ClientError, ClientResult};
