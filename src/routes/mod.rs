pub mod news;

use std::error::Error;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    handlers::news::welcome,
    routes::news::news_routes,
    utils::{config::Config, state::AppState, store::NewsStore},
};

pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    init_tracing();

    info!("Initializing application...");

    // Fixed paths; make sure both exist before the store opens.
    if let Some(parent) = config.db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::create_dir_all(&config.content_dir).await?;

    let store = match NewsStore::init(&config.db_path).await {
        Ok(store) => store,
        Err(err) => {
            error!("Error opening database: {err}");
            return Err(Box::new(err));
        }
    };
    info!("Connected to the SQLite database");

    let state = AppState { store, config };
    Ok(app_router(state))
}

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

fn app_router(state: AppState) -> Router {
    let content_dir = state.config.content_dir.clone();

    Router::new()
        .route("/api", get(welcome))
        .nest("/api/news", news_routes(state.clone()))
        .nest_service("/images", ServeDir::new(content_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
