pub const BOARD_SIDE: usize = 3;
pub const BOARD_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

/// Wire symbol for an unoccupied cell. `" "` is not accepted.
pub const EMPTY_SYMBOL: &str = "_";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => EMPTY_SYMBOL,
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Mark> {
        match symbol {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            EMPTY_SYMBOL => Some(Mark::Empty),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index % BOARD_SIDE, index / BOARD_SIDE)
    }
}

/// A 3x3 board stored row-major, index = row * 3 + col.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    /// Panics if `index >= BOARD_SIZE`.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Side to move when X opens and turns alternate. `None` when the mark
    /// counts cannot come from such a game.
    pub fn side_to_move(&self) -> Option<Mark> {
        match self.count(Mark::X).checked_sub(self.count(Mark::O)) {
            Some(0) => Some(Mark::X),
            Some(1) => Mark::X.opponent(),
            _ => None,
        }
    }

    pub fn symbols(&self) -> String {
        self.cells.iter().map(Mark::symbol).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestMove {
    pub index: usize,
    pub value: i32,
}
