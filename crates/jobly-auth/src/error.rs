use thiserror::Error;

/// Failures from [`CredentialCodec`](crate::CredentialCodec).
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Bad signature, malformed encoding, or claims that do not decode.
    #[error("invalid credential: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign credential: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}
