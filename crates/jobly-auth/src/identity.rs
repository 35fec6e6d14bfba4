use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Verified caller attributes.
///
/// Built either by the caller when issuing a credential or by
/// [`CredentialCodec::verify`](crate::CredentialCodec::verify). Fields are
/// private so an identity cannot be altered after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    username: String,
    #[serde(default)]
    is_admin: bool,
}

impl Identity {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            is_admin,
        }
    }

    /// A non-admin identity.
    pub fn user(username: impl Into<String>) -> Self {
        Self::new(username, false)
    }

    pub fn admin(username: impl Into<String>) -> Self {
        Self::new(username, true)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_is_not_admin() {
        let identity = Identity::user("u1");
        assert_eq!(identity.username(), "u1");
        assert!(!identity.is_admin());
    }

    #[test]
    fn test_admin() {
        assert!(Identity::admin("root").is_admin());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&Identity::new("u1", true)).unwrap();
        assert_eq!(json, r#"{"username":"u1","isAdmin":true}"#);
    }

    #[test]
    fn test_missing_is_admin_defaults_false() {
        let identity: Identity = serde_json::from_str(r#"{"username":"u1"}"#).unwrap();
        assert!(!identity.is_admin());
    }
}
