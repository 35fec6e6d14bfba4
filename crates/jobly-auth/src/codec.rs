//! Credential creation and verification.
//!
//! Credentials are HS256-signed JWTs whose payload is [`Claims`]. The signing
//! secret comes from [`JwtConfig`] and is fixed for the life of the codec.
//!
//! # Example
//!
//! ```ignore
//! let codec = CredentialCodec::new(&jwt_config);
//!
//! let token = codec.create(&Identity::admin("u1"))?;
//! let identity = codec.verify(&token)?;
//! assert!(identity.is_admin());
//! ```

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use jobly_config::JwtConfig;

use crate::claims::Claims;
use crate::error::CredentialError;
use crate::identity::Identity;

#[derive(Clone)]
pub struct CredentialCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl CredentialCodec {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Any HMAC variant signed with the secret verifies; only HS256 is issued.
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // No registered claim is mandatory or audience-checked; `exp` is still
        // checked when present.
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(jwt_config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            validation,
        }
    }

    /// Signs a credential for `identity`.
    ///
    /// The payload carries `username`, `isAdmin` and `iat`. No expiry is set.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Encoding`] if the claims cannot be signed.
    pub fn create(&self, identity: &Identity) -> Result<String, CredentialError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = Claims::for_identity(identity, now);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(CredentialError::Encoding)
    }

    /// Checks the signature of `token` and decodes the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Invalid`] if:
    /// - The signature does not match the configured secret
    /// - The token is not a well-formed JWT
    /// - The claims do not decode into [`Claims`]
    /// - The claims carry an `exp` that has passed
    pub fn verify(&self, token: &str) -> Result<Identity, CredentialError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.into())
            .map_err(CredentialError::Invalid)
    }
}

impl fmt::Debug for CredentialCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialCodec")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}
