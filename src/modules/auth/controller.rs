use axum::Json;
use jobly_auth::Identity;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::guard::LoggedInUser;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Identity carried by the caller's credential
#[utoipa::path(
    get,
    path = "/api/auth/whoami",
    responses(
        (status = 200, description = "Caller identity", body = Identity),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument]
pub async fn whoami(LoggedInUser(identity): LoggedInUser) -> Json<Identity> {
    Json(identity)
}
