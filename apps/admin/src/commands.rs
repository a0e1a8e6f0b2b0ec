//! # Admin Commands
//!
//! One function per CLI command. Each command is a thin wrapper: parse
//! arguments, drive the checkout screen or the client, print the result.
//!
//! ## Selection Arguments
//! The purchase command takes selection arguments of the form
//! `product:<id>[=<quantity>]` or `bundle:<id>[=<quantity>]`; the
//! single-product checkout takes bare `<bundle-id>[=<quantity>]` since
//! its scope already fixes the item kind.

use tracing::error;

use store_client::{CatalogScope, StoreClient};
use store_core::types::ItemKind;
use store_core::Money;

use crate::config::ConfigState;
use crate::screen::{CheckoutScreen, Severity};

// =============================================================================
// Listings
// =============================================================================

/// Prints the product catalog.
pub async fn list_products(client: &StoreClient, config: &ConfigState) -> bool {
    match client.list_products().await {
        Ok(products) => {
            println!("{} - Products", config.store_name);
            for product in &products {
                println!(
                    "  {} - {} (Stock: {})",
                    product.name,
                    Money::from_units(product.price),
                    product.stock
                );
            }
            true
        }
        Err(err) => {
            error!(error = %err, "Failed to fetch products");
            eprintln!("Failed to fetch products: {}", err);
            false
        }
    }
}

/// Prints the bundle catalog.
pub async fn list_bundles(client: &StoreClient, config: &ConfigState) -> bool {
    match client.list_bundles().await {
        Ok(bundles) => {
            println!("{} - Bundles", config.store_name);
            for bundle in &bundles {
                println!(
                    "  {} - {} (Stock: {})",
                    bundle.name,
                    Money::from_units(bundle.price),
                    bundle.stock
                );
            }
            true
        }
        Err(err) => {
            error!(error = %err, "Failed to fetch bundles");
            eprintln!("Failed to fetch bundles: {}", err);
            false
        }
    }
}

// =============================================================================
// Selection Argument Parsing
// =============================================================================

/// One parsed selection argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionArg {
    pub kind: ItemKind,
    pub item_id: String,
    pub quantity: Option<String>,
}

/// Parses `product:<id>[=<qty>]` / `bundle:<id>[=<qty>]`.
pub fn parse_selection_arg(raw: &str) -> Option<SelectionArg> {
    let (kind_part, rest) = raw.split_once(':')?;
    let kind = match kind_part {
        "product" => ItemKind::Product,
        "bundle" => ItemKind::Bundle,
        _ => return None,
    };
    let (item_id, quantity) = split_quantity(rest);
    if item_id.is_empty() {
        return None;
    }
    Some(SelectionArg {
        kind,
        item_id,
        quantity,
    })
}

/// Parses a bare `<id>[=<qty>]` where the kind is already known.
pub fn parse_scoped_arg(kind: ItemKind, raw: &str) -> Option<SelectionArg> {
    let (item_id, quantity) = split_quantity(raw);
    if item_id.is_empty() {
        return None;
    }
    Some(SelectionArg {
        kind,
        item_id,
        quantity,
    })
}

fn split_quantity(raw: &str) -> (String, Option<String>) {
    match raw.split_once('=') {
        Some((id, qty)) => (id.to_string(), Some(qty.to_string())),
        None => (raw.to_string(), None),
    }
}

// =============================================================================
// Checkout Flows
// =============================================================================

/// The multi-item purchase flow over the full catalog.
pub async fn purchase(client: StoreClient, config: ConfigState, raw_args: &[String]) -> bool {
    let mut args = Vec::with_capacity(raw_args.len());
    for raw in raw_args {
        match parse_selection_arg(raw) {
            Some(arg) => args.push(arg),
            None => {
                eprintln!(
                    "Unrecognized selection '{}'; expected product:<id>[=<qty>] or bundle:<id>[=<qty>]",
                    raw
                );
                return false;
            }
        }
    }

    run_checkout(client, CatalogScope::Full, config, args).await
}

/// The single-product checkout flow: the anchor product plus its bundles.
pub async fn product_checkout(
    client: StoreClient,
    config: ConfigState,
    product_id: &str,
    raw_bundle_args: &[String],
) -> bool {
    let mut args = Vec::with_capacity(raw_bundle_args.len());
    for raw in raw_bundle_args {
        match parse_scoped_arg(ItemKind::Bundle, raw) {
            Some(arg) => args.push(arg),
            None => {
                eprintln!("Unrecognized bundle selection '{}'; expected <id>[=<qty>]", raw);
                return false;
            }
        }
    }

    run_checkout(
        client,
        CatalogScope::ForProduct(product_id.to_string()),
        config,
        args,
    )
    .await
}

/// Shared driver: load, apply the selection, submit, present, reconcile.
async fn run_checkout(
    client: StoreClient,
    scope: CatalogScope,
    config: ConfigState,
    args: Vec<SelectionArg>,
) -> bool {
    let (mut screen, mut toasts) = CheckoutScreen::new(client, scope, config);
    screen.load().await;

    for arg in &args {
        if !screen.toggle(arg.kind, &arg.item_id) {
            eprintln!("Unknown {} '{}'", arg.kind, arg.item_id);
            return false;
        }
        if let Some(quantity) = &arg.quantity {
            screen.set_quantity(arg.kind, &arg.item_id, quantity);
        }
    }

    let alert = screen.submit().await;
    println!("[{}] {}", alert.severity, alert.message);
    while let Ok(toast) = toasts.try_recv() {
        println!("toast[{}]: {}", toast.severity, toast.message);
    }

    let succeeded = alert.severity == Severity::Success;
    if screen.reconcile().await {
        println!("Catalog refreshed.");
    }
    succeeded
}

// =============================================================================
// Unit Tests
// =============================================================================
