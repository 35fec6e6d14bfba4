use std::sync::Arc;

use jobly_auth::CredentialCodec;
use jobly_config::{CorsConfig, JwtConfig};

/// Shared, read-only application state.
///
/// The codec holds the signing secret and is built once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub codec: Arc<CredentialCodec>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            codec: Arc::new(CredentialCodec::new(jwt_config)),
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(&JwtConfig::from_env(), CorsConfig::from_env())
}
