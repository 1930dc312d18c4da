use std::future::Future;
use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tower_http::cors::{Any, CorsLayer};

use tictactoe_common::games::tictactoe::{
    GameStatus, Mark, Position, SearchMode, find_best_move_with, game_status, parse_board,
};
use tictactoe_common::{log, log_debug, log_error, log_warn};

use crate::move_api::{ApiError, BoardRequest, MoveResponse};
use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct WebServerState {
    pub search_mode: SearchMode,
    pub search_timeout: Duration,
}

impl WebServerState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            search_mode: config.search_mode,
            search_timeout: config.search_timeout(),
        }
    }
}

pub fn build_router(state: WebServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get_best_move", post(get_best_move_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server<F>(config: &ServerConfig, shutdown_signal: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(WebServerState::from_config(config));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    log!(
        "Web server listening on {} (search mode {:?})",
        listener.local_addr()?,
        config.search_mode
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

fn describe_finished_game(status: GameStatus) -> &'static str {
    match status {
        GameStatus::XWon => "Game is already over: X has won",
        GameStatus::OWon => "Game is already over: O has won",
        GameStatus::Draw | GameStatus::InProgress => "No valid moves available: board is full",
    }
}

async fn get_best_move_handler(
    State(state): State<WebServerState>,
    payload: Result<Json<BoardRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log_warn!("Rejected request body: {}", rejection.body_text());
        ApiError::InvalidRequest(rejection.body_text())
    })?;

    let board = parse_board(&request.board).map_err(|message| {
        log_warn!("Rejected board: {}", message);
        ApiError::InvalidRequest(message)
    })?;

    let status = game_status(&board);
    if status != GameStatus::InProgress {
        log_debug!("Board {} is finished ({:?})", board.symbols(), status);
        return Ok(Json(MoveResponse::failure(describe_finished_game(status))));
    }

    if board.side_to_move() != Some(Mark::X) {
        log_warn!(
            "Board {} is not X to move ({:?}), searching for X anyway",
            board.symbols(),
            board.side_to_move()
        );
    }

    let started = Instant::now();
    let search_mode = state.search_mode;
    let search = tokio::task::spawn_blocking(move || find_best_move_with(&board, search_mode));

    // Timing out only drops the handle; the blocking search still runs to completion.
    let best_move = tokio::time::timeout(state.search_timeout, search)
        .await
        .map_err(|_| {
            log_warn!(
                "Search for board {} exceeded {:?}, it keeps running in the background",
                board.symbols(),
                state.search_timeout
            );
            ApiError::Timeout
        })?
        .map_err(|e| {
            log_error!("Search task for board {} failed: {}", board.symbols(), e);
            ApiError::Internal
        })?;

    match best_move {
        Some(best) => {
            let position = Position::from_index(best.index);
            log!(
                "Board {} -> move {} (row {}, col {}), value {}, took {:?}",
                board.symbols(),
                best.index,
                position.y,
                position.x,
                best.value,
                started.elapsed()
            );
            Ok(Json(MoveResponse::found(best.index)))
        }
        None => Ok(Json(MoveResponse::failure(describe_finished_game(
            GameStatus::Draw,
        )))),
    }
}
