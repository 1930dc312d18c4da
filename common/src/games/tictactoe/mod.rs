mod board;
mod bot_controller;
mod types;
mod validate;
mod win_detector;

pub use board::get_available_moves;
pub use bot_controller::{
    SearchMode, find_best_move, find_best_move_with, minimax, minimax_alpha_beta,
};
pub use types::{
    BOARD_SIDE, BOARD_SIZE, BestMove, Board, EMPTY_SYMBOL, GameStatus, Mark, Position,
};
pub use validate::parse_board;
pub use win_detector::{WIN_LINES, check_winner, game_status, is_draw, is_game_over, score};
