use serde::{Deserialize, Serialize};

use super::board::{Board, Coord};
use super::execute::apply;
use super::movegen::{all_legal_moves, captures_from, legal_moves_with, Move};
use super::rules::Rules;
use super::side::Side;
use super::validate::{validate_with, IllegalMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// Whose turn it is and what has been selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub active_side: Side,
    pub selection: Option<Coord>,
    /// Set after a capture when the same piece has another capture; only
    /// that piece may move and only by capturing.
    pub forced_capture_origin: Option<Coord>,
    pub outcome: Option<GameOutcome>,
    /// Completed turns since the last capture or crowning.
    pub quiet_turns: u32,
}

impl TurnState {
    pub fn new(active_side: Side) -> Self {
        TurnState {
            active_side,
            selection: None,
            forced_capture_origin: None,
            outcome: None,
            quiet_turns: 0,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            Some(GameOutcome::Winner(side)) => Some(side),
            _ => None,
        }
    }
}

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination(Coord),
    ChainCapture(Coord),
    GameOver(GameOutcome),
}

/// A cell click that could not be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("the game is over")]
    GameOver,

    #[error("no piece at {0}")]
    EmptyCell(Coord),

    #[error("the piece at {0} belongs to the other side")]
    NotYourPiece(Coord),

    #[error("the piece at {0} has no legal move")]
    NoLegalMoves(Coord),

    #[error("the piece at {forced} must keep capturing")]
    MustContinueForcedCapture { forced: Coord },
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Selected(Coord),
    Reselected(Coord),
    Deselected,
    Moved(MoveReport),
}

/// Summary of one accepted move leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub side: Side,
    pub mv: Move,
    pub captured: Option<Coord>,
    pub crowned: bool,
    /// The same piece must capture again before the turn ends.
    pub chain_continues: bool,
    pub outcome: Option<GameOutcome>,
}

/// Winner by piece count alone: a side with no pieces left has lost.
pub fn winner(board: &Board) -> Option<Side> {
    match (
        board.count_by_side(Side::First),
        board.count_by_side(Side::Second),
    ) {
        (0, 0) => None,
        (0, _) => Some(Side::Second),
        (_, 0) => Some(Side::First),
        _ => None,
    }
}

/// Outcome of a position with `to_move` about to play.
///
/// A side with no pieces loses; under `stalemate_is_loss` a side with pieces
/// but no legal move loses as well.
pub fn outcome(board: &Board, to_move: Side, rules: &Rules) -> Option<GameOutcome> {
    if let Some(side) = winner(board) {
        return Some(GameOutcome::Winner(side));
    }
    if rules.stalemate_is_loss && all_legal_moves(board, to_move, rules).is_empty() {
        return Some(GameOutcome::Winner(to_move.other()));
    }
    None
}

/// A game in progress: board, turn state, and the rules in force.
///
/// Every transition returns a new `Game`; the receiver is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: TurnState,
    rules: Rules,
}

impl Game {
    /// Standard opening position, First to move
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self::from_position(Board::initial(), Side::First, rules)
    }

    /// Start from an arbitrary position. A position that is already decided
    /// starts in `GameOver`.
    pub fn from_position(board: Board, to_move: Side, rules: Rules) -> Self {
        let mut turn = TurnState::new(to_move);
        turn.outcome = outcome(&board, to_move, &rules);
        Game { board, turn, rules }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn active_side(&self) -> Side {
        self.turn.active_side
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.turn.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.turn.outcome.is_some()
    }

    pub fn phase(&self) -> Phase {
        if let Some(outcome) = self.turn.outcome {
            Phase::GameOver(outcome)
        } else if let Some(forced) = self.turn.forced_capture_origin {
            Phase::ChainCapture(forced)
        } else if let Some(selection) = self.turn.selection {
            Phase::AwaitingDestination(selection)
        } else {
            Phase::AwaitingSelection
        }
    }

    /// Legal moves for the piece at `origin` this turn
    pub fn legal_moves_from(&self, origin: Coord) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        match self.turn.forced_capture_origin {
            Some(forced) if forced == origin => {
                captures_from(origin, &self.board, self.active_side())
            }
            Some(_) => Vec::new(),
            None => legal_moves_with(origin, &self.board, self.active_side(), &self.rules),
        }
    }

    /// Every legal move for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        match self.turn.forced_capture_origin {
            Some(forced) => captures_from(forced, &self.board, self.active_side()),
            None => all_legal_moves(&self.board, self.active_side(), &self.rules),
        }
    }

    /// Cells the side to move may select
    pub fn selectable_cells(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        if let Some(forced) = self.turn.forced_capture_origin {
            return vec![forced];
        }
        self.board
            .pieces(self.active_side())
            .map(|(coord, _)| coord)
            .filter(|&coord| !self.legal_moves_from(coord).is_empty())
            .collect()
    }

    /// Select the piece at `cell`.
    pub fn select(&self, cell: Coord) -> Result<Game, SelectionError> {
        if self.is_terminal() {
            return Err(SelectionError::GameOver);
        }
        if let Some(forced) = self.turn.forced_capture_origin {
            if cell != forced {
                return Err(SelectionError::MustContinueForcedCapture { forced });
            }
        }

        let piece = self
            .board
            .piece_at(cell)
            .ok_or(SelectionError::EmptyCell(cell))?;
        if piece.owner != self.active_side() {
            return Err(SelectionError::NotYourPiece(cell));
        }
        if self.legal_moves_from(cell).is_empty() {
            return Err(SelectionError::NoLegalMoves(cell));
        }

        tracing::debug!(side = ?self.active_side(), %cell, "selected");
        let mut next = *self;
        next.turn.selection = Some(cell);
        Ok(next)
    }

    /// Drop the current selection. A forced capture piece stays selected.
    pub fn deselect(&self) -> Game {
        let mut next = *self;
        next.turn.selection = self.turn.forced_capture_origin;
        next
    }

    /// Handle a click on `cell`, the way a board UI would.
    ///
    /// With nothing selected the click selects. With a selection, a click on a
    /// legal destination moves; a click on another movable piece of the same
    /// side re-selects; anything else deselects. During a chain capture only
    /// capture destinations of the chaining piece are accepted.
    pub fn click(&self, cell: Coord) -> Result<(Game, TurnEvent), SelectionError> {
        match self.phase() {
            Phase::GameOver(_) => Err(SelectionError::GameOver),
            Phase::AwaitingSelection => {
                let next = self.select(cell)?;
                Ok((next, TurnEvent::Selected(cell)))
            }
            Phase::ChainCapture(forced) => {
                if cell == forced {
                    return Ok((*self, TurnEvent::Selected(forced)));
                }
                match self.move_to(forced, cell) {
                    Some((next, report)) => Ok((next, TurnEvent::Moved(report))),
                    None => Err(SelectionError::MustContinueForcedCapture { forced }),
                }
            }
            Phase::AwaitingDestination(selection) => {
                if let Some((next, report)) = self.move_to(selection, cell) {
                    return Ok((next, TurnEvent::Moved(report)));
                }
                if cell != selection {
                    if let Ok(next) = self.select(cell) {
                        return Ok((next, TurnEvent::Reselected(cell)));
                    }
                }
                tracing::debug!(%cell, "deselected");
                Ok((self.deselect(), TurnEvent::Deselected))
            }
        }
    }

    fn move_to(&self, from: Coord, to: Coord) -> Option<(Game, MoveReport)> {
        self.legal_moves_from(from)
            .iter()
            .find(|mv| mv.to == to)
            .and_then(|mv| self.submit(mv).ok())
    }

    /// Validate and apply one move leg.
    ///
    /// Moves from any source, a human click or an external suggestion, go
    /// through here. On error the receiver is still the current game.
    pub fn submit(&self, mv: &Move) -> Result<(Game, MoveReport), IllegalMove> {
        let side = self.active_side();
        let checked = validate_with(mv, &self.board, &self.turn, &self.rules)?;
        let applied = apply(&checked, &self.board)?;

        let chain_continues = applied.is_capture()
            && !(applied.crowned && self.rules.crowning_ends_chain)
            && !captures_from(checked.to, &applied.board, side).is_empty();

        let mut turn = self.turn;
        turn.selection = None;
        turn.forced_capture_origin = None;
        if applied.is_capture() || applied.crowned {
            turn.quiet_turns = 0;
        }

        if chain_continues {
            turn.forced_capture_origin = Some(checked.to);
            turn.selection = Some(checked.to);
            tracing::debug!(?side, mv = %applied.mv, "capture chain continues");
        } else {
            if !applied.is_capture() && !applied.crowned {
                turn.quiet_turns += 1;
            }
            let quiet_turns = turn.quiet_turns;
            let drawn = self
                .rules
                .quiet_turn_limit
                .is_some_and(|limit| quiet_turns >= limit);
            turn.active_side = side.other();
            turn.outcome = outcome(&applied.board, turn.active_side, &self.rules)
                .or(drawn.then_some(GameOutcome::Draw));
            tracing::debug!(?side, mv = %applied.mv, "move applied");
        }

        if let Some(result) = turn.outcome {
            tracing::info!(?result, "game over");
        }

        let report = MoveReport {
            side,
            mv: applied.mv,
            captured: applied.captured,
            crowned: applied.crowned,
            chain_continues,
            outcome: turn.outcome,
        };
        let next = Game {
            board: applied.board,
            turn,
            rules: self.rules,
        };
        Ok((next, report))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
