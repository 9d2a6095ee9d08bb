//! # storekeeper-core: Pure Domain Logic for Storekeeper
//!
//! This crate is the heart of Storekeeper. It contains the domain types and
//! the entry-point validation rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storekeeper Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (product form)                      │   │
//! │  │    Name / Price / Stock inputs ──► Buttons ──► Product grid    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    add_product, list_products, update_product, delete_product  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ storekeeper-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐        ┌──────────────┐                     │   │
//! │  │   │    types     │        │  validation  │                     │   │
//! │  │   │   Product    │        │    rules     │                     │   │
//! │  │   │ ProductDraft │        │    checks    │                     │   │
//! │  │   └──────────────┘        └──────────────┘                     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storekeeper-db (Database Layer)                 │   │
//! │  │              SQLite queries, migration, repository              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft)
//! - [`error`] - Domain error types
//! - [`validation`] - Entry-point validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storekeeper_core::Product` instead of
// `use storekeeper_core::types::Product`

pub use error::ValidationError;
pub use types::{Product, ProductDraft};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
///
/// ## Business Reason
/// Keeps grid rows and receipts readable. Long names are almost always a
/// paste mistake.
pub const MAX_NAME_LEN: usize = 200;
