//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD over the `products` table
//! - Full-table listing in insertion order (the grid mirrors this exactly)
//!
//! ## Statement Inventory
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert    INSERT INTO products (name, price, stock) VALUES (?, ?, ?)  │
//! │  list_all  SELECT * FROM products ORDER BY id                          │
//! │  update    UPDATE products SET name, price, stock WHERE id = ?         │
//! │  delete    DELETE FROM products WHERE id = ?                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every statement auto-commits on its own; there are no multi-statement
//! transaction boundaries.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use storekeeper_core::{Product, ProductDraft};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo.insert(&draft).await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns it with its store-assigned id.
    ///
    /// The id comes from SQLite's AUTOINCREMENT sequence: monotonically
    /// increasing, never reused even after deletes.
    ///
    /// ## Arguments
    /// * `draft` - Validated field values (validation happens upstream,
    ///   in storekeeper-core)
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<Product> {
        debug!(name = %draft.name, "Inserting product");

        let result = sqlx::query("INSERT INTO products (name, price, stock) VALUES (?1, ?2, ?3)")
            .bind(&draft.name)
            .bind(draft.price)
            .bind(draft.stock)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();

        // Read the row back so the caller gets exactly what was stored
        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::Internal(format!("inserted row {} not readable", id)))
    }

    /// Lists every product, ordered by insertion (ascending id).
    ///
    /// Side-effect-free; the grid replaces its entire contents with the
    /// result on every refresh.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrites an existing product's three fields, keeping its id.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> DbResult<()> {
        debug!(id = %id, "Updating product");

        let result =
            sqlx::query("UPDATE products SET name = ?2, price = ?3, stock = ?4 WHERE id = ?1")
                .bind(id)
                .bind(&draft.name)
                .bind(draft.price)
                .bind(draft.stock)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product row.
    ///
    /// ## Returns
    /// * `Ok(())` - Delete successful
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_round_trips() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo
            .insert(&ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.stock, 10);

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed, vec![product]);
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&ProductDraft::new("Bolt", 0.25, 500))
            .await
            .unwrap();
        repo.insert(&ProductDraft::new("Anvil", 120.0, 2))
            .await
            .unwrap();
        repo.insert(&ProductDraft::new("Crate", 14.5, 30))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        // Insertion order, not alphabetical
        assert_eq!(names, vec!["Bolt", "Anvil", "Crate"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_keeps_id() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo
            .insert(&ProductDraft::new("Widget", 9.99, 10))
            .await
            .unwrap();

        repo.update(product.id, &ProductDraft::new("Widget Pro", 12.50, 5))
            .await
            .unwrap();

        let updated = repo.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.name, "Widget Pro");
        assert_eq!(updated.price, 12.50);
        assert_eq!(updated.stock, 5);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = test_db().await;
        let repo = db.products();

        let err = repo
            .update(42, &ProductDraft::new("Ghost", 1.0, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_row() {
        let db = test_db().await;
        let repo = db.products();

        let a = repo
            .insert(&ProductDraft::new("Keep", 1.0, 1))
            .await
            .unwrap();
        let b = repo
            .insert(&ProductDraft::new("Drop", 2.0, 2))
            .await
            .unwrap();

        repo.delete(b.id).await.unwrap();

        let remaining = repo.list_all().await.unwrap();
        assert_eq!(remaining, vec![a]);

        let err = repo.delete(b.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let db = test_db().await;
        let repo = db.products();

        let first = repo
            .insert(&ProductDraft::new("First", 1.0, 1))
            .await
            .unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo
            .insert(&ProductDraft::new("Second", 2.0, 2))
            .await
            .unwrap();

        // AUTOINCREMENT: the freed id is not handed out again
        assert!(second.id > first.id);
    }
}
