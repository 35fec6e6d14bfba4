use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use jobly_auth::{CredentialCodec, Identity};
use tracing::{Span, debug};

use crate::state::AppState;

/// The caller's identity for the current request, if a valid credential was
/// presented.
///
/// One value is created per request by [`authenticate_jwt`] and stored in the
/// request extensions. Reading it before that middleware has run yields an
/// anonymous context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    identity: Option<Identity>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Middleware that attaches an [`AuthContext`] to every request.
///
/// Never rejects: a missing header, a header that is not valid UTF-8, and a
/// credential that fails verification all produce an anonymous context.
/// Access control is left to the guards in [`crate::middleware::guard`].
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(routes)
///     .layer(middleware::from_fn_with_state(state.clone(), authenticate_jwt))
///     .with_state(state);
/// ```
pub async fn authenticate_jwt(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let context = extract_identity(req.headers(), &state.codec);
    if let Some(identity) = context.identity() {
        Span::current().record("username", identity.username());
    }
    req.extensions_mut().insert(context);
    next.run(req).await
}

/// Builds the context for a request from its headers.
pub fn extract_identity(headers: &HeaderMap, codec: &CredentialCodec) -> AuthContext {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return AuthContext::anonymous();
    };

    let Ok(raw) = value.to_str() else {
        debug!("Ignoring non-UTF-8 authorization header");
        return AuthContext::anonymous();
    };

    match codec.verify(bearer_token(raw)) {
        Ok(identity) => AuthContext::authenticated(identity),
        Err(err) => {
            debug!(error = %err, "Ignoring unverifiable credential");
            AuthContext::anonymous()
        }
    }
}

/// Strips a case-insensitive `Bearer` scheme from an authorization header
/// value. Whitespace around the scheme and the token is dropped. A value with
/// no scheme is returned trimmed, as the token itself.
pub fn bearer_token(header_value: &str) -> &str {
    const SCHEME: &str = "bearer";

    let trimmed = header_value.trim();
    match trimmed.get(..SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(SCHEME) => {
            let rest = &trimmed[SCHEME.len()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                rest.trim_start()
            } else {
                trimmed
            }
        }
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jobly_config::JwtConfig;

    fn test_codec() -> CredentialCodec {
        CredentialCodec::new(&JwtConfig::new("auth-middleware-test-secret"))
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_strips_scheme() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(bearer_token("bearer abc"), "abc");
        assert_eq!(bearer_token("BEARER abc"), "abc");
    }

    #[test]
    fn test_bearer_token_trims_whitespace() {
        assert_eq!(bearer_token("  Bearer    abc  "), "abc");
        assert_eq!(bearer_token("Bearer\tabc"), "abc");
    }

    #[test]
    fn test_bearer_token_without_scheme_is_raw_value() {
        assert_eq!(bearer_token("abc.def.ghi"), "abc.def.ghi");
        assert_eq!(bearer_token("  abc "), "abc");
    }

    #[test]
    fn test_bearer_token_scheme_must_be_separate_word() {
        assert_eq!(bearer_token("Bearerabc"), "Bearerabc");
        assert_eq!(bearer_token("Bearer"), "");
    }

    #[test]
    fn test_extract_identity_no_header() {
        let context = extract_identity(&HeaderMap::new(), &test_codec());
        assert!(!context.is_authenticated());
    }

    #[test]
    fn test_extract_identity_valid_token() {
        let codec = test_codec();
        let token = codec.create(&Identity::user("u1")).unwrap();

        let context = extract_identity(&headers_with(&format!("Bearer {}", token)), &codec);
        assert_eq!(context.identity(), Some(&Identity::user("u1")));
    }

    #[test]
    fn test_extract_identity_token_without_scheme() {
        let codec = test_codec();
        let token = codec.create(&Identity::admin("a1")).unwrap();

        let context = extract_identity(&headers_with(&token), &codec);
        assert_eq!(context.identity(), Some(&Identity::admin("a1")));
    }

    #[test]
    fn test_extract_identity_garbled_token_is_anonymous() {
        let context = extract_identity(&headers_with("Bearer not-a-token"), &test_codec());
        assert_eq!(context, AuthContext::anonymous());
    }

    #[test]
    fn test_extract_identity_foreign_secret_is_anonymous() {
        let foreign = CredentialCodec::new(&JwtConfig::new("someone-else"));
        let token = foreign.create(&Identity::admin("intruder")).unwrap();

        let context = extract_identity(&headers_with(&format!("Bearer {}", token)), &test_codec());
        assert!(!context.is_authenticated());
    }

    #[test]
    fn test_extract_identity_non_utf8_header_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap(),
        );

        let context = extract_identity(&headers, &test_codec());
        assert!(!context.is_authenticated());
    }
}
