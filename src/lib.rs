//! # Jobly API
//!
//! Request authorization for the Jobly API server, built with Rust and Axum.
//!
//! ## Overview
//!
//! - **Credentials**: HS256-signed tokens carrying `{username, isAdmin}`
//!   ([`jobly_auth`])
//! - **Authentication**: a middleware that turns the `Authorization` header
//!   into a per-request [`middleware::auth::AuthContext`]. Bad or missing
//!   credentials make the caller anonymous; they never fail the request.
//! - **Authorization**: guards that reject with 401 unless the caller is
//!   logged in, an admin, or the user named in the route
//!   ([`middleware::guard`])
//! - **Partial updates**: `SET` clause generation for the persistence layer
//!   ([`jobly_db`])
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── jobly-core/     # AppError
//! ├── jobly-config/   # JwtConfig, CorsConfig, ServerConfig
//! ├── jobly-auth/     # Identity, Claims, CredentialCodec
//! └── jobly-db/       # PartialUpdate, ColumnMap, Clause
//! src/
//! ├── middleware/     # authenticate_jwt, guards
//! ├── modules/auth/   # whoami
//! ├── bin/cli.rs      # token tooling
//! └── router.rs       # route and layer composition
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! SECRET_KEY=your-signing-secret
//! PORT=3001
//! ALLOWED_ORIGINS=http://localhost:3000
//! LOG_LEVEL=info
//! ```
//!
//! ## Modules
//!
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging and subscriber setup
//! - [`middleware`]: Authentication and authorization middleware
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use jobly_auth;
pub use jobly_config;
pub use jobly_core;
pub use jobly_db;
