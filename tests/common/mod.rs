use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use jobly::jobly_auth::Identity;
use jobly::jobly_config::{CorsConfig, JwtConfig};
use jobly::state::AppState;

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState::new(
        &test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    )
}

#[allow(dead_code)]
pub fn token_for(state: &AppState, username: &str, is_admin: bool) -> String {
    state
        .codec
        .create(&Identity::new(username, is_admin))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
