//! # Domain Types
//!
//! Core domain types used throughout Storekeeper.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │    Product      │          │  ProductDraft   │                      │
//! │  │  ─────────────  │          │  ─────────────  │                      │
//! │  │  id (rowid)     │ ◄─insert─│  name           │                      │
//! │  │  name           │          │  price          │                      │
//! │  │  price          │          │  stock          │                      │
//! │  │  stock          │          │  (no id yet)    │                      │
//! │  └─────────────────┘          └─────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `ProductDraft` is what the entry form produces; a `Product` is what the
//! store hands back once SQLite has assigned the row id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product row as persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier, assigned by SQLite on insert.
    /// Monotonically increasing and never reused (AUTOINCREMENT).
    pub id: i64,

    /// Display name shown in the grid.
    pub name: String,

    /// Unit price. Stored as REAL; positive by entry-point validation.
    pub price: f64,

    /// Units on hand. Positive by entry-point validation.
    pub stock: i64,
}

// =============================================================================
// Product Draft
// =============================================================================

/// The three user-entered fields of a product, before an id exists.
///
/// This is the input to both create and update: on update the three fields
/// replace the selected row's values together, keeping its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductDraft {
    /// Creates a draft from raw form values.
    pub fn new(name: impl Into<String>, price: f64, stock: i64) -> Self {
        ProductDraft {
            name: name.into(),
            price,
            stock,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_new() {
        let draft = ProductDraft::new("Widget", 9.99, 10);
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.stock, 10);
    }
}
