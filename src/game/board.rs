use std::fmt;

use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::error::NotationError;

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// Which square colour carries play.
///
/// With `Even` the playable cells are those where `row + col` is even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkParity {
    #[default]
    Even,
    Odd,
}

impl DarkParity {
    fn admits(self, row: usize, col: usize) -> bool {
        let even = (row + col) % 2 == 0;
        match self {
            DarkParity::Even => even,
            DarkParity::Odd => !even,
        }
    }
}

/// An on-board cell coordinate. Both components are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Returns `None` when either component is off the board.
    pub const fn new(row: usize, col: usize) -> Option<Coord> {
        if row < ROWS && col < COLS {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Coord, NotationError> {
        Coord::new(row, col).ok_or(NotationError::OffBoard { row, col })
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The cell `(dr, dc)` away, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as usize, col as usize)
    }

    /// Cell halfway between two cells two diagonal steps apart.
    pub fn midpoint(self, other: Coord) -> Option<Coord> {
        let dr = other.row as i16 - self.row as i16;
        let dc = other.col as i16 - self.col as i16;
        if dr.abs() != 2 || dc.abs() != 2 {
            return None;
        }
        self.offset((dr / 2) as i8, (dc / 2) as i8)
    }

    /// Diagonal distance to `other`, or `None` when not on a shared diagonal.
    pub fn diagonal_distance(self, other: Coord) -> Option<usize> {
        let dr = (other.row as i16 - self.row as i16).unsigned_abs();
        let dc = (other.col as i16 - self.col as i16).unsigned_abs();
        (dr == dc).then_some(dr as usize)
    }

    /// Every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..ROWS).flat_map(|row| {
            (0..COLS).map(move |col| Coord {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = NotationError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::try_new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row(), coord.col())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A checker. `crowned` only ever goes from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Side,
    pub crowned: bool,
}

impl Piece {
    pub const fn man(owner: Side) -> Self {
        Piece {
            owner,
            crowned: false,
        }
    }

    pub const fn king(owner: Side) -> Self {
        Piece {
            owner,
            crowned: true,
        }
    }

    /// Row deltas this piece may travel along.
    pub fn row_directions(self) -> &'static [i8] {
        match (self.crowned, self.owner) {
            (true, _) => &[-1, 1],
            (false, Side::First) => &[1],
            (false, Side::Second) => &[-1],
        }
    }

    /// Copy of this piece, crowned if `row` is its owner's far rank.
    pub fn landed_on(self, row: usize) -> Piece {
        if !self.crowned && row == self.owner.far_rank() {
            Piece::king(self.owner)
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// An 8x8 checkers board. Boards are values: every edit returns a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    parity: DarkParity,
}

impl Board {
    /// Create a board with no pieces
    pub fn empty(parity: DarkParity) -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            parity,
        }
    }

    /// Standard starting position on even-parity dark cells
    pub fn initial() -> Self {
        Self::initial_with(DarkParity::Even)
    }

    /// Standard starting position: First fills rows 0..3, Second rows 5..8
    pub fn initial_with(parity: DarkParity) -> Self {
        let mut board = Board::empty(parity);
        for coord in Coord::all().filter(|&c| parity.admits(c.row(), c.col())) {
            let owner = match coord.row() {
                0..=2 => Side::First,
                5..=7 => Side::Second,
                _ => continue,
            };
            board.set(coord, Cell::Occupied(Piece::man(owner)));
        }
        board
    }

    pub fn parity(&self) -> DarkParity {
        self.parity
    }

    /// Get the cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get(coord).piece()
    }

    /// Whether pieces may ever stand on this cell
    pub fn is_playable(&self, coord: Coord) -> bool {
        self.parity.admits(coord.row(), coord.col())
    }

    /// All 32 playable cells in row-major order
    pub fn playable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.is_playable(c))
    }

    /// Copy of this board with `piece` placed at `coord`
    pub fn with_piece(&self, coord: Coord, piece: Piece) -> Result<Board, NotationError> {
        if !self.is_playable(coord) {
            return Err(NotationError::UnplayableCell(coord));
        }
        let mut next = *self;
        next.set(coord, Cell::Occupied(piece));
        Ok(next)
    }

    /// Copy of this board with `coord` cleared
    pub fn without_piece(&self, coord: Coord) -> Board {
        let mut next = *self;
        next.set(coord, Cell::Empty);
        next
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Pieces belonging to `side`, row-major
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |c| {
            self.piece_at(c)
                .filter(|p| p.owner == side)
                .map(|p| (c, p))
        })
    }

    /// Number of pieces a side has on the board
    pub fn count_by_side(&self, side: Side) -> usize {
        self.pieces(side).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..ROWS {
            write!(f, " {row} ")?;
            for col in 0..COLS {
                let coord = Coord { row: row as u8, col: col as u8 };
                let symbol = match self.get(coord) {
                    Cell::Occupied(piece) => super::notation::piece_symbol(piece),
                    Cell::Empty if self.is_playable(coord) => '.',
                    Cell::Empty => ' ',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
