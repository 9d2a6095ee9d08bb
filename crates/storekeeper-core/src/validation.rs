//! # Validation Module
//!
//! Entry-point validation for the product form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Numeric input widgets (blank fields arrive as zero)               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store manager (Rust)                                         │
//! │  └── THIS MODULE: presence and positivity checks                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints only (no range checks by design choice:      │
//! │      all rules live at the entry point)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storekeeper_core::validation::validate_draft;
//! use storekeeper_core::ProductDraft;
//!
//! let draft = ProductDraft::new("Widget", 9.99, 10);
//! let draft = validate_draft(draft).unwrap();
//! assert_eq!(draft.name, "Widget");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductDraft;
use crate::MAX_NAME_LEN;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use storekeeper_core::validation::validate_name;
///
/// assert_eq!(validate_name("  Widget ").unwrap(), "Widget");
/// assert!(validate_name("").is_err());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a price.
///
/// ## Rules
/// - Must be a finite number (guards NaN and infinity from numeric widgets)
/// - Must be strictly positive; zero is what a blank input arrives as and
///   is rejected
///
/// ## Example
/// ```rust
/// use storekeeper_core::validation::validate_price;
///
/// assert!(validate_price(9.99).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite { field: "price" });
    }

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive { field: "price" });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Must be strictly positive (> 0)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock <= 0 {
        return Err(ValidationError::MustBePositive { field: "stock" });
    }

    Ok(())
}

// =============================================================================
// Draft Validator
// =============================================================================

/// Validates a full product draft, reporting the first failing field.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Form: Add Product / Update Product                                     │
/// │                                                                         │
/// │  User submits (name, price, stock)                                     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_draft(draft) ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── name empty?   → Error: "name is required"                    │
/// │       ├── price <= 0?   → Error: "price must be positive"              │
/// │       ├── stock <= 0?   → Error: "stock must be positive"              │
/// │       │                                                                 │
/// │       └── OK → Proceed with insert/update, store untouched otherwise   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Returns
/// The draft with its name trimmed, ready for storage.
pub fn validate_draft(draft: ProductDraft) -> ValidationResult<ProductDraft> {
    let name = validate_name(&draft.name)?;
    validate_price(draft.price)?;
    validate_stock(draft.stock)?;

    Ok(ProductDraft {
        name,
        price: draft.price,
        stock: draft.stock,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        // Valid names
        assert_eq!(validate_name("Widget").unwrap(), "Widget");
        assert_eq!(validate_name("  Widget Pro  ").unwrap(), "Widget Pro");

        // Invalid names
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(9.99).is_ok());

        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-9.99).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(1).is_ok());
        assert!(validate_stock(999).is_ok());

        // Blank numeric inputs arrive as zero and are rejected
        assert!(validate_stock(0).is_err());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_draft_trims_name() {
        let draft = validate_draft(ProductDraft::new(" Widget ", 9.99, 10)).unwrap();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.stock, 10);
    }

    #[test]
    fn test_validate_draft_first_failure_wins() {
        let err = validate_draft(ProductDraft::new("", 0.0, 0)).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "name" });

        let err = validate_draft(ProductDraft::new("Widget", 0.0, 0)).unwrap_err();
        assert_eq!(err, ValidationError::MustBePositive { field: "price" });

        let err = validate_draft(ProductDraft::new("Widget", 9.99, 0)).unwrap_err();
        assert_eq!(err, ValidationError::MustBePositive { field: "stock" });
    }
}
