//! # API Error Type
//!
//! Unified error type for the store manager operations and Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in Storekeeper                             │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('add_product')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Validation Error? ── ValidationError ──┐                        │  │
//! │  │  No selection?     ── NO_SELECTION ─────┼── ApiError ──────────► │  │
//! │  │  Database Error?   ── DbError ──────────┘                        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try { await invoke('add_product', ...) }                               │
//! │  catch (e) {                                                            │
//! │    // e.message = "price must be positive"                              │
//! │    // e.code = "VALIDATION_ERROR" → modal notice, app stays usable      │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use storekeeper_core::ValidationError;
use storekeeper_db::DbError;

/// API error returned from store manager operations.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NO_SELECTION",
///   "message": "Select a product in the grid first"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('delete_product');
/// } catch (e) {
///   switch (e.code) {
///     case 'NO_SELECTION':
///     case 'VALIDATION_ERROR':
///       showNotice(e.message);      // modal notice, non-fatal
///       break;
///     default:
///       showFailureDialog();        // generic failure dialog
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed (empty name, non-positive price/stock)
    ValidationError,

    /// Delete or update attempted with no row selected
    NoSelection,

    /// Database operation failed
    DatabaseError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a no-selection error.
    pub fn no_selection() -> Self {
        ApiError::new(ErrorCode::NoSelection, "Select a product in the grid first")
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::new(
                ErrorCode::NotFound,
                format!("{} not found: {}", entity, id),
            ),
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_validation_code() {
        let err: ApiError = ValidationError::MustBePositive { field: "price" }.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must be positive");
    }

    #[test]
    fn test_db_not_found_maps_to_not_found_code() {
        let err: ApiError = DbError::not_found("Product", 7).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 7");
    }

    #[test]
    fn test_no_selection_message() {
        let err = ApiError::no_selection();
        assert_eq!(err.code, ErrorCode::NoSelection);
        assert_eq!(err.to_string(), "[NoSelection] Select a product in the grid first");
    }
}
