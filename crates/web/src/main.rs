use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use chess_rules_core::GameState;

mod routes;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

pub struct AppState {
    pub game: Mutex<GameState>,
    pub message: Mutex<Option<String>>,
}

impl AppState {
    pub fn new(game: GameState) -> Self {
        Self {
            game: Mutex::new(game),
            message: Mutex::new(None),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/play", post(routes::play_form))
        .route("/reset", post(routes::reset_form))
        .route("/health", get(routes::health))
        .route("/api/board", get(routes::api::board))
        .route("/api/move", post(routes::api::play_move))
        .route("/api/moves/:square", get(routes::api::destinations))
        .route("/api/reset", post(routes::api::reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("CHESS_RULES_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let state = Arc::new(AppState::new(GameState::new()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app(state)).await.expect("Server error");
}
