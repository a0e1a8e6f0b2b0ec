//! # Quantity Policy
//!
//! The rules that gate every quantity entering the selection.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quantity Policy                                    │
//! │                                                                         │
//! │  User types quantity: "3" / "" / "abc" / "-2"                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_quantity(raw) ──► integer parse                                 │
//! │       │                                                                 │
//! │       ├── parse fails? ──────► 1 (the default, never 0 or negative)    │
//! │       │                                                                 │
//! │       ├── value < 1? ────────► 1                                       │
//! │       │                                                                 │
//! │       └── OK ────────────────► value as typed                          │
//! │                                                                         │
//! │  The stock ceiling is NOT hard-clamped here. The input control is      │
//! │  bounded to the last-fetched stock, but the stored value stands as     │
//! │  typed: the inventory service owns the ledger and re-validates stock   │
//! │  at purchase time. Clamping against a stale client-side ceiling would  │
//! │  produce false rejections.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::DEFAULT_QUANTITY;

// =============================================================================
// Parsing & Coercion
// =============================================================================

/// Parses raw quantity input, coercing anything unusable to the default (1).
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - Non-numeric or empty input → 1
/// - Zero or negative input → 1
///
/// ## Example
/// ```rust
/// use store_core::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity("3"), 3);
/// assert_eq!(parse_quantity(""), 1);
/// assert_eq!(parse_quantity("abc"), 1);
/// assert_eq!(parse_quantity("-2"), 1);
/// assert_eq!(parse_quantity("0"), 1);
/// ```
pub fn parse_quantity(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(qty) if qty >= DEFAULT_QUANTITY => qty,
        _ => DEFAULT_QUANTITY,
    }
}

/// Lower-bounds a requested quantity at 1.
///
/// The `ceiling` is accepted for symmetry with [`exceeds_ceiling`] but is
/// deliberately not applied: the stored value stands as requested and the
/// server performs the authoritative stock check.
pub fn clamp_quantity(requested: i64, _ceiling: i64) -> i64 {
    requested.max(DEFAULT_QUANTITY)
}

/// True when a requested quantity is above the last-observed stock.
///
/// Used by screens to bound the input control and to warn; never used to
/// reject, since the client's stock copy may be stale in either direction.
pub fn exceeds_ceiling(requested: i64, ceiling: i64) -> bool {
    requested > ceiling
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_valid() {
        assert_eq!(parse_quantity("1"), 1);
        assert_eq!(parse_quantity("42"), 42);
        assert_eq!(parse_quantity("  7 "), 7);
    }

    #[test]
    fn test_parse_quantity_coerces_to_default() {
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("   "), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("1.5"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
    }

    #[test]
    fn test_clamp_quantity_lower_bound_only() {
        assert_eq!(clamp_quantity(5, 10), 5);
        assert_eq!(clamp_quantity(0, 10), 1);
        assert_eq!(clamp_quantity(-4, 10), 1);
        // Above the ceiling the value stands; the server decides.
        assert_eq!(clamp_quantity(15, 10), 15);
    }

    #[test]
    fn test_exceeds_ceiling() {
        assert!(exceeds_ceiling(11, 10));
        assert!(!exceeds_ceiling(10, 10));
        assert!(!exceeds_ceiling(1, 10));
    }
}
