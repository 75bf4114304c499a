//! # Checkers Engine
//!
//! A two-player checkers (draughts) rules engine. Given a board, a side to
//! move, and a proposed move, it decides legality, applies the move, resolves
//! capture chains, crowns pieces, and detects the end of the game. It does not
//! search for good moves; humans and external services supply them.
//!
//! ## Modules
//!
//! - [`game`]: Board model, move generation, validation, execution, and the
//!   turn state machine with immutable transitions
//! - [`ai`]: Agent trait, random/scripted agents, suggestion-service adapter
//! - [`play`]: Agent-vs-agent games and move-list replay
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
