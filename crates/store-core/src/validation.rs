//! # Validation Module
//!
//! Input validation for the admin forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (client-side)                                    │
//! │  ├── Required-field checks before any CRUD call                        │
//! │  └── Immediate user feedback, no network round trip                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Inventory service (authoritative)                            │
//! │  ├── Referential integrity (bundle → product)                          │
//! │  ├── Stock and price settlement                                        │
//! │  └── Rejections come back as `{error}` bodies                          │
//! │                                                                         │
//! │  The client validates FORM SHAPE only. Anything that depends on        │
//! │  server state (stock, references, uniqueness) is left to the server.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{BundleDraft, ProductDraft};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a catalog item identifier.
///
/// Identifiers are server-issued and opaque; the only client-side rule is
/// that they are non-empty.
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in smallest-currency units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(units: i64) -> ValidationResult<()> {
    if units < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero means sold out, not invalid
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a description field.
///
/// The admin forms treat the description as required on create/update even
/// though the catalog tolerates its absence on fetched items.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validators
// =============================================================================

/// Validates a product create/update form before it goes on the wire.
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_name(&draft.name)?;
    validate_price(draft.price)?;
    validate_stock(draft.stock)?;
    validate_description(&draft.description)?;
    Ok(())
}

/// Validates a bundle create/update form before it goes on the wire.
///
/// Checks that `product_id` is present, not that it resolves — the server
/// owns the relation.
pub fn validate_bundle_draft(draft: &BundleDraft) -> ValidationResult<()> {
    validate_name(&draft.name)?;
    validate_item_id(&draft.product_id)?;
    validate_price(draft.price)?;
    validate_stock(draft.stock)?;
    validate_description(&draft.description)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product_draft() -> ProductDraft {
        ProductDraft {
            name: "Coffee Beans 1kg".to_string(),
            price: 120000,
            stock: 25,
            description: "Single origin arabica".to_string(),
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Coffee Beans").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("42").is_ok());
        assert!(validate_item_id("prod-abc").is_ok());
        assert!(validate_item_id("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(120000).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(999).is_ok());
        assert!(validate_stock(-5).is_err());
    }

    #[test]
    fn test_validate_product_draft() {
        assert!(validate_product_draft(&product_draft()).is_ok());

        let mut missing_name = product_draft();
        missing_name.name.clear();
        assert!(validate_product_draft(&missing_name).is_err());

        let mut negative_price = product_draft();
        negative_price.price = -10;
        assert!(validate_product_draft(&negative_price).is_err());
    }

    #[test]
    fn test_validate_bundle_draft_requires_product_id() {
        let draft = BundleDraft {
            name: "Starter Pack".to_string(),
            product_id: "".to_string(),
            price: 50000,
            stock: 5,
            description: "Beans plus grinder".to_string(),
        };
        assert!(validate_bundle_draft(&draft).is_err());
    }
}
