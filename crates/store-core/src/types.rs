//! # Domain Types
//!
//! Core domain types shared across the store admin.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Bundle      │   │  PurchaseLine   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  quantity       │       │
//! │  │  price          │   │  price          │   └─────────────────┘       │
//! │  │  stock          │   │  stock          │                             │
//! │  │  description?   │   │  description?   │   ┌─────────────────┐       │
//! │  └─────────────────┘   │  product_id ────┼──►│ PurchaseOutcome │       │
//! │                        └─────────────────┘   │  Success{total} │       │
//! │  ┌──────────────────────────────────┐        │  Failure{msg}   │       │
//! │  │  CatalogItem = Product | Bundle  │        └─────────────────┘       │
//! │  └──────────────────────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Server Authority
//! `price` and `stock` are snapshots of what the inventory service last
//! reported. They are advisory: the service re-validates both at purchase
//! time, and the client never computes a total from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Item Kind
// =============================================================================

/// Discriminates the two purchasable item families.
///
/// ## Why a Kind Enum?
/// Products and bundles share the same purchasable shape but live in
/// separate server collections and separate payload arrays. Carrying the
/// kind explicitly (instead of guessing from which fields are present)
/// keeps the selection keyed unambiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A standalone product.
    Product,
    /// A bundle composed of/associated with exactly one product.
    Bundle,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Product => write!(f, "product"),
            ItemKind::Bundle => write!(f, "bundle"),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as served by the inventory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Opaque stable identifier, unique among products. Server-issued.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in the smallest currency unit. Server-authoritative.
    pub price: i64,

    /// Last-observed stock level (advisory ceiling on quantity).
    pub stock: i64,

    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Returns the price as a Money type for display.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price)
    }
}

// =============================================================================
// Bundle
// =============================================================================

/// A bundle: the product shape plus a reference to its anchor product.
///
/// ## Referential Integrity
/// `product_id` should reference an existing product for the bundle to be
/// meaningfully purchasable, but this client does not enforce that — the
/// server owns the relation and rejects broken references at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    /// Opaque stable identifier, unique among bundles. Server-issued.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in the smallest currency unit. Server-authoritative.
    pub price: i64,

    /// Last-observed stock level (advisory ceiling on quantity).
    pub stock: i64,

    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// The single product this bundle is associated with.
    pub product_id: String,
}

impl Bundle {
    /// Returns the price as a Money type for display.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price)
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable catalog entry: either a product or a bundle.
///
/// The two variants share the `{id, name, price, stock}` shape; accessors
/// below expose it without callers matching on the variant.
///
/// Untagged deserialization tries variants in declaration order, so
/// `Bundle` must come first: its required `product_id` distinguishes the
/// two shapes, while the plain product shape would accept either body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogItem {
    Bundle(Bundle),
    Product(Product),
}

impl CatalogItem {
    /// The kind discriminant for this item.
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Product(_) => ItemKind::Product,
            CatalogItem::Bundle(_) => ItemKind::Bundle,
        }
    }

    /// Identifier within the item's kind.
    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Product(p) => &p.id,
            CatalogItem::Bundle(b) => &b.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Product(p) => &p.name,
            CatalogItem::Bundle(b) => &b.name,
        }
    }

    /// Price in the smallest currency unit.
    pub fn price(&self) -> i64 {
        match self {
            CatalogItem::Product(p) => p.price,
            CatalogItem::Bundle(b) => b.price,
        }
    }

    /// Last-observed stock ceiling.
    pub fn stock(&self) -> i64 {
        match self {
            CatalogItem::Product(p) => p.stock,
            CatalogItem::Bundle(b) => b.stock,
        }
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        match self {
            CatalogItem::Product(p) => p.description.as_deref(),
            CatalogItem::Bundle(b) => b.description.as_deref(),
        }
    }
}

impl From<Product> for CatalogItem {
    fn from(p: Product) -> Self {
        CatalogItem::Product(p)
    }
}

impl From<Bundle> for CatalogItem {
    fn from(b: Bundle) -> Self {
        CatalogItem::Bundle(b)
    }
}

// =============================================================================
// Drafts (create/update payloads)
// =============================================================================

/// Payload for creating or updating a product.
///
/// Mirrors the admin form: every field is required there, and
/// [`crate::validation::validate_product_draft`] enforces that before the
/// call leaves the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: i64,
    pub stock: i64,
    pub description: String,
}

/// Payload for creating or updating a bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleDraft {
    pub name: String,
    pub product_id: String,
    pub price: i64,
    pub stock: i64,
    pub description: String,
}

// =============================================================================
// Purchase Wire Types
// =============================================================================

/// One line of a purchase payload: `{id, quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub id: String,
    pub quantity: i64,
}

impl PurchaseLine {
    pub fn new(id: impl Into<String>, quantity: i64) -> Self {
        PurchaseLine {
            id: id.into(),
            quantity,
        }
    }
}

/// The atomic purchase payload sent to POST /purchase.
///
/// ## Snapshot Semantics
/// A request is built from the selection at submit time. Edits to the
/// selection after construction do not affect an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PurchaseRequest {
    pub products: Vec<PurchaseLine>,
    pub bundles: Vec<PurchaseLine>,
}

impl PurchaseRequest {
    /// True when the payload carries no lines at all.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.bundles.is_empty()
    }
}

/// Successful purchase response body: `{"totalCost": <units>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    #[serde(rename = "totalCost")]
    pub total_cost: i64,
}

/// Error response body the service answers rejections with: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerErrorBody {
    pub error: String,
}

// =============================================================================
// Purchase Outcome
// =============================================================================

/// The terminal result of one submission, consumed by the presenter.
///
/// Created per submission and not retained: the screen maps it to an alert
/// immediately and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Server accepted the order and settled the price.
    Success {
        /// Total cost in the smallest currency unit, as computed server-side.
        total_cost: i64,
    },
    /// The order did not go through; `message` is ready for display.
    Failure { message: String },
}

impl PurchaseOutcome {
    /// True for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, PurchaseOutcome::Success { .. })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
