//! Move sources: the `Agent` trait, a random player, a scripted player, and
//! the adapter for an external suggestion service.

mod agent;
mod random;
pub mod suggestion;

pub use agent::{Agent, ScriptedAgent};
pub use random::RandomAgent;
pub use suggestion::{MoveSuggester, SuggestedMove, SuggestionAgent, SuggestionRequest};
