//! Core checkers rules: board model, move generation, validation, execution,
//! and the turn state machine with immutable transitions.

mod board;
mod execute;
mod movegen;
mod notation;
mod rules;
mod side;
mod turn;
mod validate;

pub use board::{Board, Cell, Coord, DarkParity, Piece, COLS, ROWS};
pub use execute::{apply, Applied};
pub use movegen::{
    all_legal_moves, captures_from, legal_moves, legal_moves_with, side_has_capture, steps_from,
    Move,
};
pub use rules::Rules;
pub use side::Side;
pub use turn::{
    outcome, winner, Game, GameOutcome, MoveReport, Phase, SelectionError, TurnEvent, TurnState,
};
pub use validate::{validate, validate_with, IllegalMove};
