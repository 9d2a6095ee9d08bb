//! # Tauri Commands
//!
//! All commands exposed to the product form frontend. Each one is a thin
//! wrapper over the managed [`StoreManager`].
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const grid = await invoke('add_product', {                             │
//! │    name: 'Widget', price: 9.99, stock: 10                               │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn add_product(                                                  │
//! │      manager: State<'_, StoreManager>,  ◄── Injected by Tauri          │
//! │      name: String, price: f64, stock: i64, ◄── From invoke params      │
//! │  ) -> Result<Vec<Product>, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: Product[] and repaints the grid                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating commands return the refreshed full list so the grid never shows
//! stale rows.

use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::manager::StoreManager;
use storekeeper_core::{Product, ProductDraft};

/// Adds a product from the three form fields.
///
/// Validation failures come back as `VALIDATION_ERROR` and leave the store
/// untouched; on success the frontend clears the inputs and repaints the
/// grid with the returned list.
#[tauri::command]
pub async fn add_product(
    manager: State<'_, StoreManager>,
    name: String,
    price: f64,
    stock: i64,
) -> Result<Vec<Product>, ApiError> {
    debug!(name = %name, "add_product command");
    manager.create(ProductDraft::new(name, price, stock)).await
}

/// Returns every product in insertion order (the View Products button).
#[tauri::command]
pub async fn list_products(manager: State<'_, StoreManager>) -> Result<Vec<Product>, ApiError> {
    debug!("list_products command");
    manager.list().await
}

/// Overwrites the selected row with the three form fields.
///
/// Fails with `NO_SELECTION` when no grid row is selected.
#[tauri::command]
pub async fn update_product(
    manager: State<'_, StoreManager>,
    name: String,
    price: f64,
    stock: i64,
) -> Result<Vec<Product>, ApiError> {
    debug!(name = %name, "update_product command");
    manager.update(ProductDraft::new(name, price, stock)).await
}

/// Deletes the selected row.
///
/// Fails with `NO_SELECTION` when no grid row is selected.
#[tauri::command]
pub async fn delete_product(manager: State<'_, StoreManager>) -> Result<Vec<Product>, ApiError> {
    debug!("delete_product command");
    manager.delete().await
}

/// Records a grid click as the current selection.
///
/// Returns the row so the frontend can copy name, price and stock into the
/// input fields for editing.
#[tauri::command]
pub async fn select_product(
    manager: State<'_, StoreManager>,
    id: i64,
) -> Result<Product, ApiError> {
    debug!(id, "select_product command");
    manager.select(id).await
}

/// Drops the current selection (grid deselect).
#[tauri::command]
pub fn clear_selection(manager: State<'_, StoreManager>) {
    debug!("clear_selection command");
    manager.clear_selection();
}
