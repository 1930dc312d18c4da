use super::types::{Board, GameStatus, Mark};

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns false for `Mark::Empty`: an empty line is not a win for anyone.
pub fn check_winner(board: &Board, player: Mark) -> bool {
    if player == Mark::Empty {
        return false;
    }

    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == player))
}

pub fn is_draw(board: &Board) -> bool {
    !board.cells().contains(&Mark::Empty)
}

pub fn is_game_over(board: &Board) -> bool {
    check_winner(board, Mark::X) || check_winner(board, Mark::O) || is_draw(board)
}

/// +1 when X has won, -1 when O has won, 0 otherwise. Only meaningful on
/// boards where `is_game_over` holds.
pub fn score(board: &Board) -> i32 {
    if check_winner(board, Mark::X) {
        1
    } else if check_winner(board, Mark::O) {
        -1
    } else {
        0
    }
}

pub fn game_status(board: &Board) -> GameStatus {
    if check_winner(board, Mark::X) {
        GameStatus::XWon
    } else if check_winner(board, Mark::O) {
        GameStatus::OWon
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_full_board_without_winner_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);

        assert!(is_draw(&board));
        assert!(!check_winner(&board, X));
        assert!(!check_winner(&board, O));
        assert!(is_game_over(&board));
        assert_eq!(score(&board), 0);
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_every_win_line_is_detected_for_x() {
        for line in WIN_LINES {
            let mut cells = [E; 9];
            for index in line {
                cells[index] = X;
            }
            let board = Board::from_cells(cells);

            assert!(check_winner(&board, X), "line {:?}", line);
            assert!(!check_winner(&board, O));
            assert_eq!(score(&board), 1);
            assert!(is_game_over(&board));
        }
    }

    #[test]
    fn test_o_column_scores_minus_one() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            E, O, E,
            X, O, E,
        ]);

        assert!(check_winner(&board, O));
        assert_eq!(score(&board), -1);
        assert_eq!(game_status(&board), GameStatus::OWon);
    }

    #[test]
    fn test_empty_board_is_not_over() {
        let board = Board::empty();

        assert!(!is_game_over(&board));
        assert!(!is_draw(&board));
        assert!(!check_winner(&board, E));
        assert_eq!(game_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_win_on_full_board_is_not_reported_as_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, X, X,
            O, O, X,
            X, O, O,
        ]);

        assert!(is_draw(&board));
        assert_eq!(score(&board), 1);
        assert_eq!(game_status(&board), GameStatus::XWon);
    }
}
