//! # Store Manager
//!
//! The controller behind the product form: it owns the database handle and
//! the current grid selection, and implements the five user-facing
//! operations.
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One User Action, Start To Finish                     │
//! │                                                                         │
//! │  Button press                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Validate (storekeeper-core) ──── invalid ──► modal notice,            │
//! │       │                                       store untouched           │
//! │       ▼                                                                 │
//! │  One SQL statement (storekeeper-db), auto-commit                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Re-read full table ──► grid replaces its contents                     │
//! │                                                                         │
//! │  Actions are dispatched one at a time; each runs to completion         │
//! │  before the next event is processed.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection
//! Update and delete operate on "the currently selected row". The selection
//! is set by clicking a grid row (`select`), which also hands the row back
//! so the frontend can populate the three input fields for editing.

use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::ApiError;
use storekeeper_core::validation::validate_draft;
use storekeeper_core::{Product, ProductDraft};
use storekeeper_db::Database;

/// The store manager: database handle plus current grid selection.
///
/// ## Thread Safety
/// The `Database` contains a `SqlitePool` which is inherently thread-safe.
/// The selection is a `Mutex<Option<i64>>` because Tauri managed state must
/// be `Sync`; the lock is never held across an await.
///
/// ## Usage
/// ```rust,ignore
/// let manager = StoreManager::new(db);
/// let grid = manager.create(ProductDraft::new("Widget", 9.99, 10)).await?;
/// ```
#[derive(Debug)]
pub struct StoreManager {
    db: Database,
    selection: Mutex<Option<i64>>,
}

impl StoreManager {
    /// Creates a store manager over an opened database.
    ///
    /// The database handle is passed in explicitly; the manager never
    /// reaches for ambient global state.
    pub fn new(db: Database) -> Self {
        StoreManager {
            db,
            selection: Mutex::new(None),
        }
    }

    /// Returns the currently selected product id, if any.
    pub fn selected_id(&self) -> Option<i64> {
        *self.selection.lock().expect("selection mutex poisoned")
    }

    fn set_selection(&self, id: Option<i64>) {
        *self.selection.lock().expect("selection mutex poisoned") = id;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Creates a product from raw form values.
    ///
    /// Fails with a validation error (store untouched) unless the name is
    /// non-empty and price and stock are positive. On success the row is
    /// committed before this returns, and the refreshed full list comes
    /// back for the grid. The frontend clears the input fields on success.
    pub async fn create(&self, draft: ProductDraft) -> Result<Vec<Product>, ApiError> {
        let draft = validate_draft(draft)?;

        let product = self.db.products().insert(&draft).await?;
        info!(id = product.id, name = %product.name, "Product added");

        self.list().await
    }

    /// Lists every product in insertion order.
    ///
    /// Idempotent and side-effect-free on the store; the grid replaces its
    /// entire contents with the result.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let products = self.db.products().list_all().await?;
        Ok(products)
    }

    /// Overwrites the selected row with new form values, keeping its id.
    ///
    /// Requires a current selection; applies the same validation as
    /// [`StoreManager::create`]. Returns the refreshed list.
    pub async fn update(&self, draft: ProductDraft) -> Result<Vec<Product>, ApiError> {
        let id = self.selected_id().ok_or_else(ApiError::no_selection)?;
        let draft = validate_draft(draft)?;

        self.db.products().update(id, &draft).await?;
        info!(id, name = %draft.name, "Product updated");

        self.list().await
    }

    /// Deletes the selected row.
    ///
    /// Requires a current selection. The selection is cleared afterwards
    /// since the row it pointed at no longer exists. Returns the refreshed
    /// list.
    pub async fn delete(&self) -> Result<Vec<Product>, ApiError> {
        let id = self.selected_id().ok_or_else(ApiError::no_selection)?;

        self.db.products().delete(id).await?;
        self.set_selection(None);
        info!(id, "Product deleted");

        self.list().await
    }

    /// Records a grid row as the current selection and returns it.
    ///
    /// Not a store mutation: the returned row lets the frontend copy name,
    /// price and stock into the input fields for editing. Selecting an id
    /// that no longer exists is a not-found error and leaves the previous
    /// selection in place.
    pub async fn select(&self, id: i64) -> Result<Product, ApiError> {
        let product = self
            .db
            .products()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Product", id))?;

        self.set_selection(Some(id));
        debug!(id, "Row selected");

        Ok(product)
    }

    /// Drops the current selection (grid deselect).
    pub fn clear_selection(&self) {
        self.set_selection(None);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storekeeper_db::DbConfig;

    async fn manager() -> StoreManager {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        StoreManager::new(db)
    }

    #[tokio::test]
    async fn test_create_update_delete_scenario() {
        let mgr = manager().await;

        // create("Widget", 9.99, 10) → [(1, "Widget", 9.99, 10)]
        let grid = mgr
            .create(ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].id, 1);
        assert_eq!(grid[0].name, "Widget");
        assert_eq!(grid[0].price, 9.99);
        assert_eq!(grid[0].stock, 10);

        // select the row, then update(1, "Widget Pro", 12.50, 5)
        mgr.select(1).await.unwrap();
        let grid = mgr
            .update(ProductDraft::new("Widget Pro", 12.50, 5))
            .await
            .unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].id, 1);
        assert_eq!(grid[0].name, "Widget Pro");
        assert_eq!(grid[0].price, 12.50);
        assert_eq!(grid[0].stock, 5);

        // delete(1) → []
        let grid = mgr.delete().await.unwrap();
        assert!(grid.is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_leaves_store_unchanged() {
        let mgr = manager().await;

        for draft in [
            ProductDraft::new("", 9.99, 10),
            ProductDraft::new("Widget", 0.0, 10),
            ProductDraft::new("Widget", -1.0, 10),
            ProductDraft::new("Widget", 9.99, 0),
            ProductDraft::new("Widget", 9.99, -3),
        ] {
            let err = mgr.create(draft).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }

        assert!(mgr.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_selection() {
        let mgr = manager().await;
        mgr.create(ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();

        let err = mgr
            .update(ProductDraft::new("Widget Pro", 12.50, 5))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoSelection);

        // Table unchanged
        let grid = mgr.list().await.unwrap();
        assert_eq!(grid[0].name, "Widget");
    }

    #[tokio::test]
    async fn test_update_invalid_leaves_row_unchanged() {
        let mgr = manager().await;
        mgr.create(ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();
        mgr.select(1).await.unwrap();

        let err = mgr
            .update(ProductDraft::new("", 12.50, 5))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let grid = mgr.list().await.unwrap();
        assert_eq!(grid[0].name, "Widget");
        assert_eq!(grid[0].price, 9.99);
    }

    #[tokio::test]
    async fn test_delete_requires_selection() {
        let mgr = manager().await;
        mgr.create(ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();

        let err = mgr.delete().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoSelection);
        assert_eq!(mgr.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_only_selected_row_and_clears_selection() {
        let mgr = manager().await;
        mgr.create(ProductDraft::new("Keep", 1.0, 1)).await.unwrap();
        mgr.create(ProductDraft::new("Drop", 2.0, 2)).await.unwrap();

        mgr.select(2).await.unwrap();
        let grid = mgr.delete().await.unwrap();

        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].name, "Keep");
        assert_eq!(mgr.selected_id(), None);

        // Second delete without re-selecting is a selection error
        let err = mgr.delete().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoSelection);
    }

    #[tokio::test]
    async fn test_select_returns_row_for_form_population() {
        let mgr = manager().await;
        mgr.create(ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();

        let row = mgr.select(1).await.unwrap();
        assert_eq!(
            (row.name.as_str(), row.price, row.stock),
            ("Widget", 9.99, 10)
        );
        assert_eq!(mgr.selected_id(), Some(1));
    }

    #[tokio::test]
    async fn test_select_missing_row_keeps_previous_selection() {
        let mgr = manager().await;
        mgr.create(ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();
        mgr.select(1).await.unwrap();

        let err = mgr.select(99).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(mgr.selected_id(), Some(1));

        mgr.clear_selection();
        assert_eq!(mgr.selected_id(), None);
    }

    #[tokio::test]
    async fn test_name_is_trimmed_before_storage() {
        let mgr = manager().await;
        let grid = mgr
            .create(ProductDraft::new("  Widget  ", 9.99, 10))
            .await
            .unwrap();
        assert_eq!(grid[0].name, "Widget");
    }

    #[tokio::test]
    async fn test_list_mirrors_table_exactly() {
        let mgr = manager().await;
        mgr.create(ProductDraft::new("Bolt", 0.25, 500))
            .await
            .unwrap();
        mgr.create(ProductDraft::new("Anvil", 120.0, 2))
            .await
            .unwrap();

        let grid = mgr.list().await.unwrap();
        let again = mgr.list().await.unwrap();
        assert_eq!(grid, again);
        assert_eq!(grid.len(), 2);
        assert!(grid[0].id < grid[1].id);
    }
}
