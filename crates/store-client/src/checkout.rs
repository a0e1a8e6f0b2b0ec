//! # Checkout Submitter
//!
//! Serializes a selection into one atomic purchase call and interprets
//! the response.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Submission                                │
//! │                                                                         │
//! │  submit_purchase(selection, anchor)                                    │
//! │       │                                                                 │
//! │       ├── selection empty? ──► Failure("No bundles/products selected   │
//! │       │                        for purchase") — ZERO network calls     │
//! │       ▼                                                                 │
//! │  to_request() ──► {products:[{id,quantity}], bundles:[{id,quantity}]}  │
//! │       │           (anchor product prepended with qty 1, if any)        │
//! │       ▼                                                                 │
//! │  POST /purchase (single atomic request, never split)                   │
//! │       │                                                                 │
//! │       ├── 200 {totalCost} ──────► Success { total_cost }               │
//! │       │                                                                 │
//! │       ├── non-2xx {error} ──────► Failure("Failed to process           │
//! │       │                           purchase: <server error>")           │
//! │       │                                                                 │
//! │       └── transport/parse err ──► Failure("Failed to process           │
//! │                                   purchase")                           │
//! │                                                                         │
//! │  Side effects: none beyond the network call. No optimistic stock       │
//! │  decrement — the local stock copy is a cache, not a ledger.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use store_core::selection::Selection;
use store_core::types::PurchaseOutcome;
use store_core::CoreError;

use crate::api::StoreClient;
use crate::error::ClientError;

/// Fixed label prefixing every purchase failure shown to the user.
pub const PURCHASE_FAILED_LABEL: &str = "Failed to process purchase";

// =============================================================================
// Submitter
// =============================================================================

/// Submits the selection as one purchase and maps the result for display.
///
/// ## Arguments
/// * `selection` - the selection store to snapshot
/// * `anchor_product` - in the single-product flow, the anchor product id
///   that is always included with quantity 1
///
/// ## Guarantees
/// - An empty selection never reaches the network
/// - Exactly one HTTP call is made otherwise
/// - Every path returns a displayable outcome; nothing escapes as an error
pub async fn submit_purchase(
    client: &StoreClient,
    selection: &Selection,
    anchor_product: Option<&str>,
) -> PurchaseOutcome {
    if selection.is_empty() {
        return PurchaseOutcome::Failure {
            message: CoreError::EmptySelection.to_string(),
        };
    }

    let request = selection.to_request(anchor_product);

    match client.purchase(&request).await {
        Ok(receipt) => {
            info!(total_cost = receipt.total_cost, "Purchase settled");
            PurchaseOutcome::Success {
                total_cost: receipt.total_cost,
            }
        }
        Err(err) => {
            warn!(error = %err, "Purchase failed");
            PurchaseOutcome::Failure {
                message: failure_message(&err),
            }
        }
    }
}

/// Builds the user-facing failure text.
///
/// The server's own `{error}` wording is preferred and surfaced verbatim
/// behind the fixed label; transport and parse failures fall back to the
/// bare label.
fn failure_message(err: &ClientError) -> String {
    match err.server_message() {
        Some(server_error) => format!("{}: {}", PURCHASE_FAILED_LABEL, server_error),
        None => PURCHASE_FAILED_LABEL.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
