//! Capability guards.
//!
//! Every guard inspects the [`AuthContext`] left by
//! [`authenticate_jwt`](crate::middleware::auth::authenticate_jwt) and either
//! lets the request through or rejects it with 401. Guards never grant more
//! than the context says: an anonymous caller is rejected by all of them.
//!
//! Three forms are provided:
//! 1. Checks (`require_*`) for use inside handler logic
//! 2. Layer middleware (`ensure_*`) for use with `axum::middleware::from_fn`
//! 3. Extractors ([`LoggedInUser`], [`AdminUser`]) for use as handler arguments

use std::collections::HashMap;

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Path, Request, rejection::PathRejection},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use jobly_auth::Identity;
use jobly_core::AppError;
use tracing::debug;

use crate::middleware::auth::AuthContext;

/// Route path parameter compared against the caller by
/// [`ensure_correct_user_or_admin`].
pub const USERNAME_PARAM: &str = "username";

fn unauthorized() -> AppError {
    AppError::unauthorized(anyhow!("Unauthorized"))
}

/// Passes when the request carries a verified identity.
pub fn require_authenticated(context: &AuthContext) -> Result<&Identity, AppError> {
    context.identity().ok_or_else(|| {
        debug!("Rejecting anonymous request");
        unauthorized()
    })
}

/// Passes when the caller is authenticated and an admin.
pub fn require_admin(context: &AuthContext) -> Result<&Identity, AppError> {
    let identity = require_authenticated(context)?;

    if !identity.is_admin() {
        debug!(username = %identity.username(), "Rejecting non-admin caller");
        return Err(unauthorized());
    }

    Ok(identity)
}

/// Passes when the caller is an admin or is `target_username` itself.
///
/// `target_username` normally comes from the route path and is compared as-is.
pub fn require_self_or_admin<'a>(
    context: &'a AuthContext,
    target_username: &str,
) -> Result<&'a Identity, AppError> {
    let identity = require_authenticated(context)?;

    if !identity.is_admin() && identity.username() != target_username {
        debug!(
            username = %identity.username(),
            target = %target_username,
            "Rejecting caller acting on another user"
        );
        return Err(unauthorized());
    }

    Ok(identity)
}

/// Middleware for routes that need any logged-in user.
///
/// ```rust,ignore
/// Router::new()
///     .route("/jobs", post(create_job))
///     .route_layer(middleware::from_fn(ensure_logged_in));
/// ```
pub async fn ensure_logged_in(
    context: AuthContext,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_authenticated(&context)?;
    Ok(next.run(req).await)
}

/// Middleware for admin-only routes.
pub async fn ensure_admin(
    context: AuthContext,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_admin(&context)?;
    Ok(next.run(req).await)
}

/// Middleware for routes with a `{username}` path parameter that only that
/// user or an admin may use. Must be installed with `route_layer` so the path
/// has been matched. A route without the parameter rejects every non-admin.
pub async fn ensure_correct_user_or_admin(
    context: AuthContext,
    params: Result<Path<HashMap<String, String>>, PathRejection>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let target = params
        .ok()
        .and_then(|Path(mut params)| params.remove(USERNAME_PARAM));

    match target {
        Some(target) => require_self_or_admin(&context, &target)?,
        None => require_admin(&context)?,
    };

    Ok(next.run(req).await)
}

/// Extractor yielding the caller's identity, rejecting anonymous requests.
///
/// ```rust,ignore
/// pub async fn whoami(LoggedInUser(identity): LoggedInUser) -> Json<Identity> {
///     Json(identity)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LoggedInUser(pub Identity);

impl<S> FromRequestParts<S> for LoggedInUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(context) = AuthContext::from_request_parts(parts, state).await;
        require_authenticated(&context).cloned().map(LoggedInUser)
    }
}

/// Extractor yielding the caller's identity, rejecting non-admins.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(context) = AuthContext::from_request_parts(parts, state).await;
        require_admin(&context).cloned().map(AdminUser)
    }
}
