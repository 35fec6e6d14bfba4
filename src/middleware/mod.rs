//! Middleware for deciding who the caller is and whether they may proceed.
//!
//! # Modules
//!
//! - [`auth`]: Reads the `Authorization` header into an [`auth::AuthContext`]
//! - [`guard`]: Capability checks run against that context
//!
//! # Request Flow
//!
//! 1. [`auth::authenticate_jwt`] runs on every request. A missing or bad
//!    credential leaves the context anonymous and never rejects.
//! 2. Zero or more guards inspect the context. Any of them may reject with 401,
//!    which ends the request before the handler runs.
//! 3. The handler executes.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::auth::authenticate_jwt;
//! use crate::middleware::guard::{ensure_admin, ensure_correct_user_or_admin};
//!
//! let users = Router::new()
//!     .route("/{username}", get(get_user).route_layer(middleware::from_fn(ensure_correct_user_or_admin)))
//!     .route("/", get(list_users).route_layer(middleware::from_fn(ensure_admin)));
//!
//! let app = Router::new()
//!     .nest("/users", users)
//!     .layer(middleware::from_fn_with_state(state.clone(), authenticate_jwt))
//!     .with_state(state);
//! ```

pub mod auth;
pub mod guard;
