//! # Selection Store
//!
//! The in-memory purchase selection: which catalog items the user has
//! picked, and at what quantity.
//!
//! ## Selection Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Selection Store Operations                            │
//! │                                                                         │
//! │  User Action              Operation               State Change          │
//! │  ───────────              ─────────               ────────────          │
//! │                                                                         │
//! │  Check item ─────────────► toggle() ────────────► insert, qty = 1      │
//! │                                                                         │
//! │  Uncheck item ───────────► toggle() ────────────► remove entry         │
//! │                                                                         │
//! │  Type quantity ──────────► set_quantity() ──────► entry.qty = parsed   │
//! │                                                                         │
//! │  Purchase succeeds ──────► clear() ─────────────► entries.clear()      │
//! │                                                                         │
//! │  Submit ─────────────────► to_request() ────────► (read only snapshot) │
//! │                                                                         │
//! │  NOTE: all operations are synchronous and total. No operation can      │
//! │        leave a duplicate (kind, id) key or a non-positive quantity.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A selection belongs to exactly one checkout screen instance. It is
//! discarded when the screen goes away and cleared after a successful
//! purchase, never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quantity::parse_quantity;
use crate::types::{CatalogItem, ItemKind, PurchaseLine, PurchaseRequest};
use crate::DEFAULT_QUANTITY;

// =============================================================================
// Selection Entry
// =============================================================================

/// One selected item with its chosen quantity.
///
/// ## Design Notes
/// - `(kind, item_id)` is the entry's identity; the store holds at most
///   one entry per key
/// - `name`/`unit_price`/`stock_ceiling`: frozen copies of catalog data at
///   selection time, so the screen renders consistent rows even if a
///   refresh lands mid-edit. Advisory only; the server re-prices at
///   purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    /// Which collection the item belongs to.
    pub kind: ItemKind,

    /// Catalog identifier within the kind.
    pub item_id: String,

    /// Display name at time of selection (frozen).
    pub name: String,

    /// Unit price at time of selection (frozen, display only).
    pub unit_price: i64,

    /// Stock ceiling at time of selection (frozen, bounds the input control).
    pub stock_ceiling: i64,

    /// Chosen quantity. Always a positive integer.
    pub quantity: i64,

    /// When this item was selected.
    pub added_at: DateTime<Utc>,
}

impl SelectionEntry {
    fn from_item(item: &CatalogItem) -> Self {
        SelectionEntry {
            kind: item.kind(),
            item_id: item.id().to_string(),
            name: item.name().to_string(),
            unit_price: item.price(),
            stock_ceiling: item.stock(),
            quantity: DEFAULT_QUANTITY,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Toggle Result
// =============================================================================

/// What a [`Selection::toggle`] call did. Useful for logging and screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The item was not selected and has been added with quantity 1.
    Added,
    /// The item was selected and has been removed.
    Removed,
}

// =============================================================================
// Selection
// =============================================================================

/// Ordered collection of selection entries, keyed by `(kind, item_id)`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Entries in insertion order.
    entries: Vec<SelectionEntry>,

    /// When the selection was created/last cleared.
    created_at: Option<DateTime<Utc>>,
}

impl Selection {
    /// Creates a new empty selection.
    pub fn new() -> Self {
        Selection {
            entries: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }

    /// Flips membership of a catalog item.
    ///
    /// ## Behavior
    /// - Not selected → added with quantity 1 and a frozen display snapshot
    /// - Already selected → removed; re-toggling later re-adds it with the
    ///   quantity reset to 1, not whatever it was before
    pub fn toggle(&mut self, item: &CatalogItem) -> Toggled {
        let key = (item.kind(), item.id());
        if let Some(pos) = self.position(key.0, key.1) {
            self.entries.remove(pos);
            Toggled::Removed
        } else {
            self.entries.push(SelectionEntry::from_item(item));
            Toggled::Added
        }
    }

    /// Sets the quantity of an already-selected item from raw text input.
    ///
    /// ## Behavior
    /// - Input is coerced through the quantity policy: parse failures and
    ///   values < 1 become 1
    /// - If the item is not selected this is a no-op (quantity inputs are
    ///   only rendered for selected items, so there is nothing to update)
    ///
    /// ## Returns
    /// `true` if an entry was updated, `false` on the no-op path.
    pub fn set_quantity(&mut self, kind: ItemKind, item_id: &str, raw: &str) -> bool {
        let quantity = parse_quantity(raw);
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.kind == kind && e.item_id == item_id)
        {
            entry.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empties the selection. Used after a successful purchase.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.created_at = Some(Utc::now());
    }

    /// True when nothing is selected (submit is unavailable in this state).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// True when the given item is currently selected.
    pub fn contains(&self, kind: ItemKind, item_id: &str) -> bool {
        self.position(kind, item_id).is_some()
    }

    /// The chosen quantity for an item, if selected.
    pub fn quantity_of(&self, kind: ItemKind, item_id: &str) -> Option<i64> {
        self.position(kind, item_id).map(|i| self.entries[i].quantity)
    }

    /// Builds the purchase payload snapshot.
    ///
    /// Partitions entries by kind into the `{products, bundles}` arrays,
    /// preserving insertion order within each array.
    ///
    /// ## Anchor Product
    /// In the single-product checkout flow the screen passes the anchor
    /// product's id; it is prepended to `products` with an implicit
    /// quantity of 1, in addition to any selected items. (Preserved from
    /// the observed storefront behavior; flagged in DESIGN.md for
    /// product-owner confirmation.)
    pub fn to_request(&self, anchor_product: Option<&str>) -> PurchaseRequest {
        let mut request = PurchaseRequest::default();

        if let Some(product_id) = anchor_product {
            request
                .products
                .push(PurchaseLine::new(product_id, DEFAULT_QUANTITY));
        }

        for entry in &self.entries {
            let line = PurchaseLine::new(entry.item_id.clone(), entry.quantity);
            match entry.kind {
                ItemKind::Product => request.products.push(line),
                ItemKind::Bundle => request.bundles.push(line),
            }
        }

        request
    }

    fn position(&self, kind: ItemKind, item_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.kind == kind && e.item_id == item_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bundle, Product};

    fn product(id: &str, price: i64) -> CatalogItem {
        CatalogItem::Product(Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            stock: 10,
            description: None,
        })
    }

    fn bundle(id: &str, price: i64) -> CatalogItem {
        CatalogItem::Bundle(Bundle {
            id: id.to_string(),
            name: format!("Bundle {}", id),
            price,
            stock: 5,
            description: None,
            product_id: "p0".to_string(),
        })
    }

    #[test]
    fn test_toggle_adds_with_default_quantity() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle(&product("p1", 1000)), Toggled::Added);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.quantity_of(ItemKind::Product, "p1"), Some(1));
    }

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut selection = Selection::new();
        let item = product("p1", 1000);

        selection.toggle(&item);
        assert_eq!(selection.toggle(&item), Toggled::Removed);

        assert!(selection.is_empty());
        assert!(!selection.contains(ItemKind::Product, "p1"));
    }

    #[test]
    fn test_retoggle_resets_quantity() {
        let mut selection = Selection::new();
        let item = product("p1", 1000);

        selection.toggle(&item);
        selection.set_quantity(ItemKind::Product, "p1", "7");
        selection.toggle(&item); // off
        selection.toggle(&item); // back on

        assert_eq!(selection.quantity_of(ItemKind::Product, "p1"), Some(1));
    }

    #[test]
    fn test_same_id_different_kind_are_distinct_keys() {
        let mut selection = Selection::new();
        selection.toggle(&product("x", 1000));
        selection.toggle(&bundle("x", 2000));

        assert_eq!(selection.len(), 2);
        assert!(selection.contains(ItemKind::Product, "x"));
        assert!(selection.contains(ItemKind::Bundle, "x"));
    }

    #[test]
    fn test_set_quantity_coerces_bad_input_to_one() {
        let mut selection = Selection::new();
        selection.toggle(&product("p1", 1000));

        for raw in ["", "abc", "0", "-2", "1.5"] {
            selection.set_quantity(ItemKind::Product, "p1", "9");
            assert!(selection.set_quantity(ItemKind::Product, "p1", raw));
            assert_eq!(
                selection.quantity_of(ItemKind::Product, "p1"),
                Some(1),
                "input {:?} should coerce to 1",
                raw
            );
        }
    }

    #[test]
    fn test_set_quantity_on_unselected_is_noop() {
        let mut selection = Selection::new();
        selection.toggle(&product("p1", 1000));

        assert!(!selection.set_quantity(ItemKind::Product, "p2", "5"));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.quantity_of(ItemKind::Product, "p2"), None);
    }

    #[test]
    fn test_snapshot_freezes_display_fields() {
        let mut selection = Selection::new();
        selection.toggle(&product("p1", 1000));

        let entry = &selection.entries()[0];
        assert_eq!(entry.name, "Product p1");
        assert_eq!(entry.unit_price, 1000);
        assert_eq!(entry.stock_ceiling, 10);
    }

    #[test]
    fn test_to_request_partitions_by_kind_in_order() {
        let mut selection = Selection::new();
        selection.toggle(&product("P1", 1000));
        selection.toggle(&bundle("B1", 2000));
        selection.set_quantity(ItemKind::Product, "P1", "2");
        selection.set_quantity(ItemKind::Bundle, "B1", "3");

        let request = selection.to_request(None);
        assert_eq!(request.products, vec![PurchaseLine::new("P1", 2)]);
        assert_eq!(request.bundles, vec![PurchaseLine::new("B1", 3)]);
    }

    #[test]
    fn test_to_request_is_a_snapshot() {
        let mut selection = Selection::new();
        selection.toggle(&product("P1", 1000));

        let request = selection.to_request(None);
        selection.set_quantity(ItemKind::Product, "P1", "9");

        // The snapshot keeps the quantity it was built with.
        assert_eq!(request.products[0].quantity, 1);
    }

    #[test]
    fn test_to_request_prepends_anchor_product() {
        let mut selection = Selection::new();
        selection.toggle(&bundle("B1", 2000));
        selection.set_quantity(ItemKind::Bundle, "B1", "3");

        let request = selection.to_request(Some("P9"));
        assert_eq!(request.products, vec![PurchaseLine::new("P9", 1)]);
        assert_eq!(request.bundles, vec![PurchaseLine::new("B1", 3)]);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = Selection::new();
        selection.toggle(&product("p1", 1000));
        selection.toggle(&bundle("b1", 2000));

        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.to_request(None).is_empty());
    }
}
