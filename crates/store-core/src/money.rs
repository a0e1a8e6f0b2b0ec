//! # Money Module
//!
//! Provides the `Money` type for displaying monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: integer units end to end                                 │
//! │    The inventory service prices everything in the smallest currency    │
//! │    unit (whole rupiah), and this client keeps it that way.             │
//! │                                                                         │
//! │  NOTE: the client never adds these up. Totals come from the server;    │
//! │  Money here exists for parsing and display only.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the wire type; the server never sends
///   negatives but deserialization should not panic if it ever does
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No arithmetic**: the server owns every total; giving this type
///   `Add`/`Mul` would invite client-side price computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from smallest-currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the raw unit count.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Formats the amount with thousands grouping, e.g. `1.250.000`.
    ///
    /// Matches the storefront's display convention (Indonesian grouping,
    /// no decimal places, no currency symbol).
    pub fn grouped(&self) -> String {
        // unsigned_abs: i64::MIN has no i64 absolute value.
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.0 < 0 {
            out.push('-');
        }

        let first_group = digits.len() % 3;
        if first_group > 0 {
            out.push_str(&digits[..first_group]);
        }
        for (i, chunk) in digits[first_group..].as_bytes().chunks(3).enumerate() {
            if first_group > 0 || i > 0 {
                out.push('.');
            }
            // Chunks of an ASCII digit string are valid UTF-8.
            out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
        }

        out
    }
}

/// Displays as `Rp.<grouped>`, the storefront's currency convention.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp.{}", self.grouped())
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_small() {
        assert_eq!(Money::from_units(0).grouped(), "0");
        assert_eq!(Money::from_units(999).grouped(), "999");
    }

    #[test]
    fn test_grouped_thousands() {
        assert_eq!(Money::from_units(1000).grouped(), "1.000");
        assert_eq!(Money::from_units(15000).grouped(), "15.000");
        assert_eq!(Money::from_units(1250000).grouped(), "1.250.000");
    }

    #[test]
    fn test_grouped_negative() {
        assert_eq!(Money::from_units(-4500).grouped(), "-4.500");
    }

    #[test]
    fn test_grouped_extremes() {
        assert_eq!(
            Money::from_units(i64::MIN).grouped(),
            "-9.223.372.036.854.775.808"
        );
        assert_eq!(
            Money::from_units(i64::MAX).grouped(),
            "9.223.372.036.854.775.807"
        );
    }

    #[test]
    fn test_display_prefix() {
        assert_eq!(Money::from_units(25000).to_string(), "Rp.25.000");
    }
}
