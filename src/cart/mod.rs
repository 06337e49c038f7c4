mod dto;
pub mod handlers;
pub(crate) mod service;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
