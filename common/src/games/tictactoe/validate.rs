use super::types::{BOARD_SIZE, Board, EMPTY_SYMBOL, Mark};

pub fn parse_board(cells: &[String]) -> Result<Board, String> {
    if cells.len() != BOARD_SIZE {
        return Err(format!(
            "Board must contain exactly {} cells, got {}",
            BOARD_SIZE,
            cells.len()
        ));
    }

    let mut marks = [Mark::Empty; BOARD_SIZE];
    for (index, (slot, symbol)) in marks.iter_mut().zip(cells).enumerate() {
        *slot = Mark::from_symbol(symbol).ok_or_else(|| {
            format!(
                "Invalid symbol {:?} at position {}: expected \"X\", \"O\" or \"{}\"",
                symbol, index, EMPTY_SYMBOL
            )
        })?;
    }

    Ok(Board::from_cells(marks))
}
