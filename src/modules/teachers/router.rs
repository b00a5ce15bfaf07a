use crate::modules::teachers::controller::get_teacher;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new().route("/{id}", get(get_teacher))
}
