//! # Client Error Types
//!
//! Error types for calls against the inventory service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport error (reqwest::Error)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ClientError (this module) ← Adds categorization + server error body   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PurchaseOutcome / empty collections ← What screens actually consume   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Alert text + toast                                                    │
//! │                                                                         │
//! │  None of these propagate past the screen boundary. The worst case is   │
//! │  a form the user has to resubmit.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use store_core::ValidationError;

/// Errors from inventory service calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A create/update draft failed form validation before any request
    /// was built. Nothing reached the wire.
    ///
    /// Transparent: the user sees the validation message itself
    /// ("name is required"), not a wrapper.
    #[error(transparent)]
    InvalidDraft(#[from] ValidationError),

    /// The request never produced an HTTP response.
    ///
    /// ## When This Occurs
    /// - Service is down or unreachable
    /// - DNS failure, connection reset, transport timeout
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be decoded as the expected type.
    ///
    /// ## When This Occurs
    /// - Truncated or malformed JSON
    /// - Service contract drift (renamed/missing fields)
    #[error("Failed to parse response: {0}")]
    ResponseParseFailed(String),

    /// The service rejected the request with a structured `{error}` body.
    ///
    /// `message` is the server's own wording and is surfaced to the user
    /// verbatim (behind a fixed label).
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Non-success status with no parseable `{error}` body.
    #[error("Unexpected status {status}")]
    UnexpectedStatus { status: u16 },
}

impl ClientError {
    /// The server-supplied rejection message, when there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
