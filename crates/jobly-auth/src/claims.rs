//! JWT payload for credentials.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Claims embedded in a credential.
///
/// `isAdmin` decodes to `false` when a token omits it. Credentials issued by
/// this crate never carry `exp`; one is honoured on verification if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Issued-at timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    pub fn for_identity(identity: &Identity, issued_at: u64) -> Self {
        Self {
            username: identity.username().to_string(),
            is_admin: identity.is_admin(),
            iat: Some(issued_at),
            exp: None,
        }
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity::new(claims.username, claims.is_admin)
    }
}
