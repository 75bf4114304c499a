use serde::Serialize;

use crate::ai::Agent;
use crate::error::ReplayError;
use crate::game::{Game, GameOutcome, Move, Side};

/// Why a played game stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GameEnd {
    Finished { outcome: GameOutcome },
    PlyLimit,
    /// The side to move had an agent with nothing to propose.
    NoProposal { side: Side },
    /// The side to move proposed a move the engine refused.
    Rejected { side: Side, mv: Move, reason: String },
}

/// Everything that happened in one game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub first: String,
    pub second: String,
    pub moves: Vec<Move>,
    pub end: GameEnd,
    #[serde(skip)]
    pub final_game: Game,
}

impl GameRecord {
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.end {
            GameEnd::Finished { outcome } => Some(outcome),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.outcome() {
            Some(GameOutcome::Winner(side)) => Some(side),
            _ => None,
        }
    }
}

/// Play `game` to completion between two agents.
///
/// Each move leg counts as one ply. Every proposal goes through
/// `Game::submit`; a refused proposal ends the game without changing it.
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    game: Game,
    max_plies: usize,
) -> GameRecord {
    let mut game = game;
    let mut moves = Vec::new();

    let end = loop {
        if let Some(outcome) = game.outcome() {
            break GameEnd::Finished { outcome };
        }
        if moves.len() >= max_plies {
            break GameEnd::PlyLimit;
        }

        let side = game.active_side();
        let agent: &mut dyn Agent = match side {
            Side::First => &mut *first,
            Side::Second => &mut *second,
        };
        let Some(mv) = agent.select_move(&game) else {
            break GameEnd::NoProposal { side };
        };

        match game.submit(&mv) {
            Ok((next, report)) => {
                moves.push(report.mv);
                game = next;
            }
            Err(reason) => {
                tracing::warn!(agent = agent.name(), %mv, %reason, "proposal rejected");
                break GameEnd::Rejected {
                    side,
                    mv,
                    reason: reason.to_string(),
                };
            }
        }
    };

    GameRecord {
        first: first.name().to_string(),
        second: second.name().to_string(),
        moves,
        end,
        final_game: game,
    }
}

/// Apply a recorded move list to `game`, stopping at the first refusal.
pub fn replay(moves: &[Move], game: Game) -> Result<Game, ReplayError> {
    moves.iter().enumerate().try_fold(game, |game, (index, mv)| {
        game.submit(mv)
            .map(|(next, _)| next)
            .map_err(|reason| ReplayError {
                index,
                mv: *mv,
                reason,
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{RandomAgent, ScriptedAgent};
    use crate::game::{Coord, IllegalMove};

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_random_game_replays_identically() {
        let mut a = RandomAgent::seeded(11);
        let mut b = RandomAgent::seeded(12);
        let record = play_game(&mut a, &mut b, Game::new(), 300);

        assert!(!record.moves.is_empty());
        let replayed = replay(&record.moves, Game::new()).unwrap();
        assert_eq!(replayed, record.final_game);
    }

    #[test]
    fn test_ply_limit_stops_game() {
        let mut a = RandomAgent::seeded(3);
        let mut b = RandomAgent::seeded(4);
        let record = play_game(&mut a, &mut b, Game::new(), 4);
        assert_eq!(record.end, GameEnd::PlyLimit);
        assert_eq!(record.moves.len(), 4);
    }

    #[test]
    fn test_exhausted_script_is_no_proposal() {
        let mut a = ScriptedAgent::new(vec![Move::new(at(2, 2), at(3, 3))]);
        let mut b = ScriptedAgent::new(vec![]);
        let record = play_game(&mut a, &mut b, Game::new(), 10);
        assert_eq!(record.end, GameEnd::NoProposal { side: Side::Second });
        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.final_game.active_side(), Side::Second);
    }

    #[test]
    fn test_rejected_proposal_keeps_game() {
        let bad = Move::new(at(2, 2), at(4, 4));
        let mut a = ScriptedAgent::new(vec![bad]);
        let mut b = ScriptedAgent::new(vec![]);
        let record = play_game(&mut a, &mut b, Game::new(), 10);
        assert!(matches!(record.end, GameEnd::Rejected { side: Side::First, .. }));
        assert_eq!(record.final_game, Game::new());
    }

    #[test]
    fn test_replay_reports_failing_index() {
        let moves = vec![Move::new(at(2, 2), at(3, 3)), Move::new(at(2, 4), at(3, 5))];
        let err = replay(&moves, Game::new()).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.reason, IllegalMove::NotYourTurn);
    }

    #[test]
    fn test_record_serializes() {
        let mut a = ScriptedAgent::new(vec![Move::new(at(2, 2), at(3, 3))]);
        let mut b = ScriptedAgent::new(vec![]);
        let record = play_game(&mut a, &mut b, Game::new(), 10);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""moves":[{"from":[2,2],"to":[3,3]}]"#));
        assert!(json.contains(r#""kind":"no_proposal""#));
    }
}
