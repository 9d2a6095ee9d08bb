//! # Error Types
//!
//! Domain-specific error types for storekeeper-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storekeeper-core errors (this file)                                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storekeeper-db errors (separate crate)                                │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → Frontend                           │
//! │        DbError         → ApiError → Frontend                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when the values typed into the product form don't meet
/// requirements. They are raised at the entry point, before any statement
/// touches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be strictly positive.
    ///
    /// ## When This Occurs
    /// Numeric inputs left blank arrive as zero and are rejected here, the
    /// same as an explicit `0` or a negative number.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value is not a finite number (NaN or infinity).
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive { field: "price" };
        assert_eq!(err.to_string(), "price must be positive");

        let err = ValidationError::TooLong {
            field: "name",
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }
}
