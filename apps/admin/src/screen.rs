//! # Checkout Screen
//!
//! The checkout screen state machine: one selection, one submission
//! protocol, shared by the multi-item and single-product flows.
//!
//! ## State Machine (per screen instance)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Screen States                               │
//! │                                                                         │
//! │               toggle/set_quantity                                      │
//! │            ┌───────────────────────┐                                   │
//! │            ▼                       │                                   │
//! │  ┌──────────────┐  submit   ┌──────┴──────┐                            │
//! │  │     Idle     ├──────────►│ Submitting  │  (exclusive lock: a       │
//! │  └──────────────┘           └──────┬──────┘   second submit is        │
//! │            ▲                       │          rejected locally)       │
//! │            │              ┌────────┴────────┐                          │
//! │            │              ▼                 ▼                          │
//! │            │   ┌──────────────────┐ ┌──────────────┐                   │
//! │  further   │   │  SuccessPending  │ │ FailureShown │                   │
//! │  user      │   │  (reload timer)  │ └──────┬───────┘                   │
//! │  edits ────┼───┼──────────────────┼────────┘                           │
//! │            │   │                  │                                    │
//! │            │   ▼                  │                                    │
//! │            │  reconcile(): wait the fixed delay, clear the            │
//! │            └─ selection, re-run the Catalog Loader. Scoped            │
//! │               re-initialization — not a process restart.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Presentation
//! Every submission outcome is rendered twice on purpose: once as the
//! screen's alert, once through an independent toast channel. Same text,
//! two surfaces — redundant presentation, not a second logic path.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use store_client::{load_catalog, submit_purchase, Catalog, CatalogScope, StoreClient};
use store_core::quantity::exceeds_ceiling;
use store_core::types::{ItemKind, PurchaseOutcome};
use store_core::{CoreError, Selection};

use crate::config::ConfigState;

// =============================================================================
// Alerts & Toasts
// =============================================================================

/// Visual weight of a message, mirroring the storefront's alert types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// The screen's inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
}

/// One toast notification, carried on the independent channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

// =============================================================================
// Presenter
// =============================================================================

/// Maps a purchase outcome to its user-visible alert.
///
/// The success text embeds the raw server-settled total, exactly as the
/// service reported it.
pub fn present_outcome(outcome: &PurchaseOutcome) -> Alert {
    match outcome {
        PurchaseOutcome::Success { total_cost } => Alert {
            message: format!("Purchase successful! Total cost: Rp.{}", total_cost),
            severity: Severity::Success,
        },
        PurchaseOutcome::Failure { message } => Alert {
            message: message.clone(),
            severity: Severity::Danger,
        },
    }
}

// =============================================================================
// Screen Phase
// =============================================================================

/// Where the screen is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Editing; submit is available when the selection is non-empty.
    Idle,
    /// A purchase call is in flight. Submit is locked.
    Submitting,
    /// Purchase succeeded; the reload timer has been scheduled.
    SuccessPending,
    /// Purchase failed; the selection is untouched so the user can
    /// correct and resubmit. Any edit returns the screen to Idle.
    FailureShown,
}

// =============================================================================
// Checkout Screen
// =============================================================================

/// One checkout screen instance.
///
/// Owns its selection exclusively; the selection is discarded with the
/// screen and cleared by the post-success reconcile, never persisted.
pub struct CheckoutScreen {
    client: StoreClient,
    scope: CatalogScope,
    config: ConfigState,
    catalog: Catalog,
    selection: Selection,
    phase: Phase,
    alert: Option<Alert>,
    toast_tx: mpsc::UnboundedSender<Toast>,
}

impl CheckoutScreen {
    /// Creates a screen and the receiving end of its toast channel.
    pub fn new(
        client: StoreClient,
        scope: CatalogScope,
        config: ConfigState,
    ) -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (toast_tx, toast_rx) = mpsc::unbounded_channel();
        let screen = CheckoutScreen {
            client,
            scope,
            config,
            catalog: Catalog::default(),
            selection: Selection::new(),
            phase: Phase::Idle,
            alert: None,
            toast_tx,
        };
        (screen, toast_rx)
    }

    /// Loads (or reloads) the catalog for this screen's scope.
    ///
    /// Never fails: a failed fetch degrades its collection to empty and
    /// the screen stays usable with partial data.
    pub async fn load(&mut self) {
        self.catalog = load_catalog(&self.client, &self.scope).await;
    }

    /// The last-loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current inline alert, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// The anchor product of the single-product flow, if this screen has one.
    pub fn anchor_product(&self) -> Option<&str> {
        match &self.scope {
            CatalogScope::ForProduct(id) => Some(id),
            CatalogScope::Full => None,
        }
    }

    /// Submit availability: a non-empty selection and no in-flight call.
    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && self.phase != Phase::Submitting
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Flips selection membership for a catalog item.
    ///
    /// Returns `false` when the item is not in the loaded catalog.
    pub fn toggle(&mut self, kind: ItemKind, item_id: &str) -> bool {
        let Some(item) = self.catalog.find(kind, item_id) else {
            warn!(kind = %kind, item_id = %item_id, "Toggle on unknown catalog item ignored");
            return false;
        };

        let toggled = self.selection.toggle(&item);
        debug!(kind = %kind, item_id = %item_id, ?toggled, "Selection toggled");
        self.edited();
        true
    }

    /// Sets the quantity of a selected item from raw input.
    ///
    /// No-op when the item is not selected. Quantities above the
    /// last-observed stock are stored as typed (the server re-validates)
    /// but logged, since the input control should have bounded them.
    pub fn set_quantity(&mut self, kind: ItemKind, item_id: &str, raw: &str) -> bool {
        let updated = self.selection.set_quantity(kind, item_id, raw);
        if updated {
            if let Some(quantity) = self.selection.quantity_of(kind, item_id) {
                if let Some(item) = self.catalog.find(kind, item_id) {
                    if exceeds_ceiling(quantity, item.stock()) {
                        warn!(
                            kind = %kind,
                            item_id = %item_id,
                            quantity = quantity,
                            stock = item.stock(),
                            "Quantity above last-observed stock; server will decide"
                        );
                    }
                }
            }
            self.edited();
        }
        updated
    }

    /// Any edit clears a shown failure and returns the screen to Idle.
    fn edited(&mut self) {
        if self.phase == Phase::FailureShown {
            self.phase = Phase::Idle;
            self.alert = None;
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submits the current selection as one atomic purchase.
    ///
    /// ## Guards
    /// - While a submission is in flight the screen is locked: a second
    ///   submit is rejected locally without a network call
    /// - An empty selection fails locally without a network call
    ///
    /// Returns the alert that was presented; the same text is duplicated
    /// on the toast channel for network-backed outcomes.
    pub async fn submit(&mut self) -> Alert {
        if self.phase == Phase::Submitting {
            return self.present_local_failure(CoreError::SubmissionInFlight.to_string());
        }

        if self.selection.is_empty() {
            return self.present_local_failure(CoreError::EmptySelection.to_string());
        }

        self.phase = Phase::Submitting;
        let outcome = submit_purchase(&self.client, &self.selection, self.anchor_product()).await;

        let alert = present_outcome(&outcome);
        let _ = self.toast_tx.send(Toast {
            message: alert.message.clone(),
            severity: alert.severity,
        });

        self.phase = if outcome.is_success() {
            Phase::SuccessPending
        } else {
            Phase::FailureShown
        };
        self.alert = Some(alert.clone());
        alert
    }

    /// Presents a guard failure that never reached the network.
    ///
    /// The alert is shown inline only; the toast channel is reserved for
    /// submission outcomes.
    fn present_local_failure(&mut self, message: String) -> Alert {
        let alert = Alert {
            message,
            severity: Severity::Danger,
        };
        if self.phase != Phase::Submitting {
            self.phase = Phase::FailureShown;
        }
        self.alert = Some(alert.clone());
        alert
    }

    // -------------------------------------------------------------------------
    // Post-success reconciliation
    // -------------------------------------------------------------------------

    /// Runs the scheduled post-success reload, if one is pending.
    ///
    /// Waits the configured delay, then clears the selection and re-runs
    /// the Catalog Loader to pick up server-authoritative stock. This is a
    /// scoped re-initialization of the screen's own derived state, not a
    /// process restart.
    ///
    /// Returns `true` if a reload ran.
    pub async fn reconcile(&mut self) -> bool {
        if self.phase != Phase::SuccessPending {
            return false;
        }

        tokio::time::sleep(self.config.reload_delay()).await;

        self.selection.clear();
        self.load().await;
        self.alert = None;
        self.phase = Phase::Idle;
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
