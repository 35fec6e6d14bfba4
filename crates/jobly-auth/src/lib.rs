//! # Jobly Auth
//!
//! Caller identity and the signed credentials that carry it.
//!
//! - [`identity`]: The verified caller attributes attached to a request
//! - [`claims`]: The JWT payload a credential is encoded as
//! - [`codec`]: Credential creation and verification
//!
//! # Example
//!
//! ```ignore
//! use jobly_auth::{CredentialCodec, Identity};
//! use jobly_config::JwtConfig;
//!
//! let codec = CredentialCodec::new(&JwtConfig::from_env());
//!
//! let token = codec.create(&Identity::user("u1"))?;
//! let identity = codec.verify(&token)?;
//! assert_eq!(identity.username(), "u1");
//! ```

pub mod claims;
pub mod codec;
pub mod error;
pub mod identity;

pub use claims::Claims;
pub use codec::CredentialCodec;
pub use error::CredentialError;
pub use identity::Identity;
