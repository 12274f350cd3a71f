use axum::{routing::get, Router};

use crate::handlers::news::{create_news, get_news_by_id, list_news};
use crate::utils::state::AppState;

pub fn news_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_news).post(create_news))
        .route("/{id}", get(get_news_by_id))
        .with_state(state)
}
