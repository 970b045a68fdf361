//! Commonly used types and utilities for ease of import.

pub use crate::{
    create_player, AttackResult, Board, BoardError, Coord, Direction, Game, Player, PlayerKind,
    RandomSource, SequenceRandom,
};

#[cfg(feature = "std")]
pub use crate::{play, play_to, seeded_rng, HumanPlayer, Outcome, Seat};
