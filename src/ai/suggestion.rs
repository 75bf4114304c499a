//! Wire types and adapter for an external "best move" service.
//!
//! The transport itself lives outside this crate. A `MoveSuggester` receives
//! a request built from the current game and returns a coordinate pair; the
//! resulting move is submitted like any other.

use serde::{Deserialize, Serialize};

use crate::error::SuggestionError;
use crate::game::{Coord, Game, Move};

use super::agent::Agent;

/// Body sent to the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// 64 row-major cell symbols, see `Board::to_symbols`.
    pub board: String,
    pub player_color: String,
}

impl SuggestionRequest {
    pub fn from_game(game: &Game) -> Self {
        SuggestionRequest {
            board: game.board().to_symbols(),
            player_color: game.active_side().color_name().to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, SuggestionError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A single recommended move as returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedMove {
    pub from: Coord,
    pub to: Coord,
}

impl SuggestedMove {
    /// Decode a service response. Off-board cells fail here.
    pub fn from_json(body: &str) -> Result<Self, SuggestionError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_move(self) -> Move {
        Move::new(self.from, self.to)
    }
}

/// Source of move suggestions.
pub trait MoveSuggester {
    fn suggest(&mut self, request: &SuggestionRequest) -> Result<SuggestedMove, SuggestionError>;
}

impl<F> MoveSuggester for F
where
    F: FnMut(&SuggestionRequest) -> Result<SuggestedMove, SuggestionError>,
{
    fn suggest(&mut self, request: &SuggestionRequest) -> Result<SuggestedMove, SuggestionError> {
        self(request)
    }
}

/// Agent that asks a `MoveSuggester` for each move.
///
/// Service failures yield `None` and leave the game untouched.
pub struct SuggestionAgent<S> {
    suggester: S,
}

impl<S: MoveSuggester> SuggestionAgent<S> {
    pub fn new(suggester: S) -> Self {
        SuggestionAgent { suggester }
    }
}

impl<S: MoveSuggester> Agent for SuggestionAgent<S> {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        if game.is_terminal() {
            return None;
        }
        let request = SuggestionRequest::from_game(game);
        match self.suggester.suggest(&request) {
            Ok(suggested) => Some(suggested.to_move()),
            Err(err) => {
                tracing::warn!(error = %err, "move suggestion failed");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "Suggestion"
    }
}
