//! # Jobly Core
//!
//! Core types shared by every other Jobly crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use jobly_core::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("No data"));
//! assert_eq!(error.status, axum::http::StatusCode::BAD_REQUEST);
//! ```

pub mod errors;

pub use errors::AppError;
