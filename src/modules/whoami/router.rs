use crate::modules::whoami::controller::whoami;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_whoami_router() -> Router<AppState> {
    Router::new().route("/", get(whoami))
}
