use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use chess_rules_core::{Error, GameState};

use crate::AppState;

pub mod api;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub board_text: String,
    pub side: String,
    pub message: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct MoveForm {
    pub mv: String,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let game = state.game.lock().unwrap();

    let template = IndexTemplate {
        title: "Chess Rules".to_string(),
        board_text: game.board().to_string(),
        side: game.side_to_move().display_name().to_string(),
        message: state.message.lock().unwrap().take(),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render index: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn play_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MoveForm>,
) -> Redirect {
    let result = state.game.lock().unwrap().play_text(&form.mv);

    let message = match result {
        Ok(_) => None,
        Err(Error::MalformedMove(_)) => {
            Some("Invalid move format. Please use 'e2 to e4' format.".to_string())
        }
        Err(e) => {
            tracing::debug!("Rejected form move '{}': {}", form.mv, e);
            Some("Invalid move.".to_string())
        }
    };
    *state.message.lock().unwrap() = message;

    Redirect::to("/")
}

pub async fn reset_form(State(state): State<Arc<AppState>>) -> Redirect {
    *state.game.lock().unwrap() = GameState::new();
    *state.message.lock().unwrap() = None;
    tracing::info!("New game started");
    Redirect::to("/")
}

pub async fn health() -> &'static str {
    "OK"
}
