use crate::game::{Game, Move};

/// Anything that picks moves: a local policy, a scripted player, or a
/// wrapper around an external suggestion service.
///
/// Agents only propose. Every proposal still goes through `Game::submit`,
/// so an agent cannot play an illegal move.
pub trait Agent {
    /// Propose a move leg for the side to move, or `None` if the agent has
    /// nothing to offer.
    fn select_move(&mut self, game: &Game) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Plays a fixed list of moves in order.
pub struct ScriptedAgent {
    moves: std::vec::IntoIter<Move>,
}

impl ScriptedAgent {
    pub fn new(moves: Vec<Move>) -> Self {
        ScriptedAgent {
            moves: moves.into_iter(),
        }
    }
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, _game: &Game) -> Option<Move> {
        self.moves.next()
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
