use std::env;

const DEFAULT_SECRET: &str = "secret-dev";

/// Signing configuration for credentials.
///
/// The secret is read once at startup and handed to the credential codec;
/// nothing reads `SECRET_KEY` after that.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// - `SECRET_KEY`: HMAC signing secret (default: `secret-dev`)
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}
