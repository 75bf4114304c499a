use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Coord, Piece};
use super::rules::Rules;
use super::side::Side;

static COL_DIRECTIONS: [i8; 2] = [-1, 1];

/// One step or one capture leg. A chain capture is a sequence of these
/// applied within the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    /// Jumped cell, if this leg is a capture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<Coord>,
}

impl Move {
    /// A move with no capture metadata, as submitted by a player.
    pub fn new(from: Coord, to: Coord) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    pub fn capture(from: Coord, over: Coord, to: Coord) -> Self {
        Move {
            from,
            to,
            captured: Some(over),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn captured_cells(&self) -> &[Coord] {
        self.captured.as_slice()
    }

    /// Same origin and destination, ignoring capture metadata.
    pub fn same_path(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

fn owned_piece(origin: Coord, board: &Board, side: Side) -> Option<Piece> {
    board.piece_at(origin).filter(|p| p.owner == side)
}

fn diagonals(piece: Piece) -> impl Iterator<Item = (i8, i8)> {
    piece
        .row_directions()
        .iter()
        .flat_map(|&dr| COL_DIRECTIONS.iter().map(move |&dc| (dr, dc)))
}

/// Capture legs available to the piece at `origin`, ignoring what other
/// pieces of the side can do.
pub fn captures_from(origin: Coord, board: &Board, side: Side) -> Vec<Move> {
    let Some(piece) = owned_piece(origin, board, side) else {
        return Vec::new();
    };

    diagonals(piece)
        .filter_map(|(dr, dc)| {
            let over = origin.offset(dr, dc)?;
            let landing = over.offset(dr, dc)?;
            let jumped = board.piece_at(over)?;
            (jumped.owner != side && board.get(landing).is_empty())
                .then(|| Move::capture(origin, over, landing))
        })
        .collect()
}

/// One-cell diagonal steps available to the piece at `origin`.
pub fn steps_from(origin: Coord, board: &Board, side: Side) -> Vec<Move> {
    let Some(piece) = owned_piece(origin, board, side) else {
        return Vec::new();
    };

    diagonals(piece)
        .filter_map(|(dr, dc)| origin.offset(dr, dc))
        .filter(|&to| board.get(to).is_empty())
        .map(|to| Move::new(origin, to))
        .collect()
}

/// Whether any piece of `side` has a capture anywhere on the board.
pub fn side_has_capture(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|(coord, _)| !captures_from(coord, board, side).is_empty())
}

/// Legal moves for the piece at `origin` under the default rules.
pub fn legal_moves(origin: Coord, board: &Board, side: Side) -> Vec<Move> {
    legal_moves_with(origin, board, side, &Rules::default())
}

/// Legal moves for the piece at `origin`.
///
/// Returns an empty set when `origin` is empty or holds an opposing piece.
/// Under mandatory capture, simple steps are dropped whenever any piece of
/// `side` can capture, so a piece with no capture of its own gets nothing.
pub fn legal_moves_with(origin: Coord, board: &Board, side: Side, rules: &Rules) -> Vec<Move> {
    if owned_piece(origin, board, side).is_none() {
        return Vec::new();
    }

    let mut moves = captures_from(origin, board, side);
    if rules.mandatory_capture && (!moves.is_empty() || side_has_capture(board, side)) {
        return moves;
    }
    moves.extend(steps_from(origin, board, side));
    moves
}

/// Every legal move for `side`, in row-major origin order.
pub fn all_legal_moves(board: &Board, side: Side, rules: &Rules) -> Vec<Move> {
    let must_capture = rules.mandatory_capture && side_has_capture(board, side);
    board
        .pieces(side)
        .flat_map(|(coord, _)| {
            let mut moves = captures_from(coord, board, side);
            if !must_capture {
                moves.extend(steps_from(coord, board, side));
            }
            moves
        })
        .collect()
}
