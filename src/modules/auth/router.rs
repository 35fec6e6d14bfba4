use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::whoami;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/whoami", get(whoami))
}
