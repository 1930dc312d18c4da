use serde::{Deserialize, Serialize};

use super::board::get_available_moves;
use super::types::{BestMove, Board, Mark};
use super::win_detector::{is_game_over, score};

/// Scores never leave -1..=1, so these bounds act as an open window.
const ALPHA_MIN: i32 = -2;
const BETA_MAX: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Exhaustive,
    AlphaBeta,
}

/// Best move for X, first index wins ties. `None` when the board has no empty cell.
pub fn find_best_move(board: &Board) -> Option<usize> {
    find_best_move_with(board, SearchMode::Exhaustive).map(|best| best.index)
}

pub fn find_best_move_with(board: &Board, mode: SearchMode) -> Option<BestMove> {
    let mut scratch = *board;
    let mut best: Option<BestMove> = None;

    for index in get_available_moves(&scratch) {
        scratch.set(index, Mark::X);
        let value = match mode {
            SearchMode::Exhaustive => minimax(&mut scratch, false),
            SearchMode::AlphaBeta => minimax_alpha_beta(&mut scratch, false, ALPHA_MIN, BETA_MAX),
        };
        scratch.set(index, Mark::Empty);

        if best.is_none_or(|current| value > current.value) {
            best = Some(BestMove { index, value });
        }
    }

    best
}

/// Full-depth minimax with X maximizing. The board is restored before returning.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    if is_game_over(board) {
        return score(board);
    }

    let mark = if is_maximizing { Mark::X } else { Mark::O };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in get_available_moves(board) {
        board.set(index, mark);
        let value = minimax(board, !is_maximizing);
        board.set(index, Mark::Empty);

        best = if is_maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Same value as `minimax` whenever the true value lies strictly inside
/// `(alpha, beta)`; outside it only the bound is meaningful.
pub fn minimax_alpha_beta(
    board: &mut Board,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if is_game_over(board) {
        return score(board);
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, Mark::X);
            let eval = minimax_alpha_beta(board, false, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, Mark::O);
            let eval = minimax_alpha_beta(board, true, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
