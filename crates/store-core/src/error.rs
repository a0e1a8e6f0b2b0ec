//! # Error Types
//!
//! Domain-specific error types for store-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  store-core errors (this file)                                         │
//! │  ├── CoreError        - Local checkout guards                          │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  store-client errors (separate crate)                                  │
//! │  └── ClientError      - Transport failures, server rejections, and     │
//! │                         drafts rejected before they go on the wire     │
//! │                                                                         │
//! │  Flow: CoreError ──────────────────► (screen) → Alert text             │
//! │        ValidationError → ClientError → (screen) → Alert text           │
//! │                                                                         │
//! │  Nothing here is fatal: every error ends as user-visible text on the   │
//! │  checkout screen, never as an unhandled panic.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, id, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Local checkout guard errors.
///
/// These never involve the network; they are raised before a request is
/// even constructed.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Submit was attempted with nothing selected.
    ///
    /// ## When This Occurs
    /// - The submit control should be unavailable while the selection is
    ///   empty, but the guard stands on its own: the submitter refuses to
    ///   build a payload from an empty selection regardless of what the
    ///   screen allowed.
    #[error("No bundles/products selected for purchase")]
    EmptySelection,

    /// A submission was attempted while another one is still in flight.
    ///
    /// The Submitting state is an exclusive lock; rapid repeated submits
    /// must not produce duplicate purchase calls.
    #[error("A purchase is already being processed")]
    SubmissionInFlight,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before anything goes on the wire.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
