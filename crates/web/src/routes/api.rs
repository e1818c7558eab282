use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use chess_rules_core::{Board, Error, GameState, Side, Square};

use crate::AppState;

// ============================================================================
// PAYLOADS
// ============================================================================

#[derive(Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub side_to_move: Side,
    pub text: String,
}

impl Snapshot {
    fn of(game: &GameState) -> Self {
        Self {
            board: *game.board(),
            side_to_move: game.side_to_move(),
            text: game.board().to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub mv: String,
}

pub struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        match self.0 {
            Error::IllegalMove { reason, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": message, "reason": reason })),
            )
                .into_response(),
            Error::MalformedMove(_) | Error::Fen(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Error::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message })))
                    .into_response()
            }
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

pub async fn board(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let game = state.game.lock().unwrap();
    Json(Snapshot::of(&game))
}

pub async fn play_move(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<Snapshot>, ApiError> {
    let mut game = state.game.lock().unwrap();
    game.play_text(&request.mv).map_err(ApiError)?;
    Ok(Json(Snapshot::of(&game)))
}

pub async fn destinations(
    State(state): State<Arc<AppState>>,
    Path(square): Path<String>,
) -> Result<Json<Vec<Square>>, ApiError> {
    let from: Square = square.parse().map_err(ApiError)?;
    let game = state.game.lock().unwrap();
    Ok(Json(game.legal_destinations(from)))
}

pub async fn reset(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let mut game = state.game.lock().unwrap();
    *game = GameState::new();
    tracing::info!("New game started");
    Json(Snapshot::of(&game))
}
