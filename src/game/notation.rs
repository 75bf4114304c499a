//! Text forms used at the engine boundary.
//!
//! Coordinates read as `row,col`. A move is two coordinates separated by
//! whitespace, `-` or `x`. A board travels as 64 row-major symbols:
//! `.` empty, `b`/`B` First man/king, `r`/`R` Second man/king.

use std::str::FromStr;

use super::board::{Board, Cell, Coord, DarkParity, Piece, COLS, ROWS};
use super::movegen::Move;
use super::side::Side;
use crate::error::NotationError;

pub(crate) fn piece_symbol(piece: Piece) -> char {
    match (piece.owner, piece.crowned) {
        (Side::First, false) => 'b',
        (Side::First, true) => 'B',
        (Side::Second, false) => 'r',
        (Side::Second, true) => 'R',
    }
}

fn symbol_cell(symbol: char) -> Option<Cell> {
    let piece = match symbol {
        '.' => return Some(Cell::Empty),
        'b' => Piece::man(Side::First),
        'B' => Piece::king(Side::First),
        'r' => Piece::man(Side::Second),
        'R' => Piece::king(Side::Second),
        _ => return None,
    };
    Some(Cell::Occupied(piece))
}

impl Board {
    /// Flatten to the 64-symbol transport form.
    pub fn to_symbols(&self) -> String {
        Coord::all()
            .map(|coord| match self.get(coord) {
                Cell::Empty => '.',
                Cell::Occupied(piece) => piece_symbol(piece),
            })
            .collect()
    }

    /// Parse the 64-symbol transport form. Pieces on non-playable cells are
    /// rejected rather than dropped.
    pub fn from_symbols(symbols: &str, parity: DarkParity) -> Result<Board, NotationError> {
        let count = symbols.chars().count();
        if count != ROWS * COLS {
            return Err(NotationError::BoardLength(count));
        }

        let mut board = Board::empty(parity);
        for (index, (symbol, coord)) in symbols.chars().zip(Coord::all()).enumerate() {
            match symbol_cell(symbol).ok_or(NotationError::BadSymbol { symbol, index })? {
                Cell::Empty => {}
                Cell::Occupied(piece) => board = board.with_piece(coord, piece)?,
            }
        }
        Ok(board)
    }
}

impl FromStr for Coord {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || NotationError::BadCoord(s.to_string());
        let (row, col) = s.trim().split_once(',').ok_or_else(bad)?;
        let row: usize = row.trim().parse().map_err(|_| bad())?;
        let col: usize = col.trim().parse().map_err(|_| bad())?;
        Coord::try_new(row, col)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == 'x')
            .filter(|part| !part.is_empty())
            .collect();
        match parts.as_slice() {
            [from, to] => Ok(Move::new(from.parse()?, to.parse()?)),
            _ => Err(NotationError::BadMove(s.to_string())),
        }
    }
}
