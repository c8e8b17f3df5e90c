//! # School ERP Core
//!
//! Core types, errors, and utilities for the School ERP API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: List query parameters and list response shapes
//! - [`serde`]: Custom serde deserialization helpers for query strings
//!
//! # Example
//!
//! ```ignore
//! use schoolerp_core::errors::AppError;
//! use schoolerp_core::pagination::ListParams;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//!
//! let params = ListParams::default();
//! assert_eq!(params.limit(), 50);
//! ```

pub mod errors;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use pagination::{ListParams, ListResponse};
