//! Driving whole games: agent-vs-agent play and replay of recorded moves.

mod episode;

pub use episode::{play_game, replay, GameEnd, GameRecord};
