use super::board::Board;
use super::movegen::{legal_moves_with, Move};
use super::rules::Rules;
use super::turn::TurnState;

/// Why a move was refused. The board and turn are left as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("the game is over")]
    GameOver,

    #[error("that piece belongs to the other side")]
    NotYourTurn,

    #[error("there is no piece at the origin")]
    NoPieceAtOrigin,

    #[error("the destination is occupied")]
    DestinationOccupied,

    #[error("that move is not legal here")]
    NotAMemberOfLegalSet,

    #[error("the capturing piece must keep jumping")]
    MustContinueForcedCapture,
}

/// Check `mv` against the default rules.
pub fn validate(mv: &Move, board: &Board, turn: &TurnState) -> Result<Move, IllegalMove> {
    validate_with(mv, board, turn, &Rules::default())
}

/// Check that `mv` belongs to the legal set for its origin this turn.
///
/// The legal set is recomputed from the board; the capture fields on `mv` are
/// never trusted. On success the generated move, with its capture metadata,
/// is returned.
pub fn validate_with(
    mv: &Move,
    board: &Board,
    turn: &TurnState,
    rules: &Rules,
) -> Result<Move, IllegalMove> {
    if turn.outcome.is_some() {
        return Err(IllegalMove::GameOver);
    }

    let piece = board.piece_at(mv.from).ok_or(IllegalMove::NoPieceAtOrigin)?;
    if piece.owner != turn.active_side {
        return Err(IllegalMove::NotYourTurn);
    }

    if let Some(forced) = turn.forced_capture_origin {
        if mv.from != forced {
            return Err(IllegalMove::MustContinueForcedCapture);
        }
    }

    if !board.get(mv.to).is_empty() {
        return Err(IllegalMove::DestinationOccupied);
    }

    let mut legal = legal_moves_with(mv.from, board, turn.active_side, rules);
    if turn.forced_capture_origin.is_some() {
        legal.retain(Move::is_capture);
    }

    legal
        .into_iter()
        .find(|candidate| candidate.same_path(mv))
        .ok_or(IllegalMove::NotAMemberOfLegalSet)
}
