//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AwfulPlayer: stacks ships in the corner and sweeps the board backward
//! - MediocrePlayer: backtracking placement, hunt/target attacks
//! - GoodPlayer: random placement, directional line-probing attacks
//! - HumanPlayer: interactive text prompts

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    coord::Coord,
    game::Game,
    random::RandomSource,
};

mod memory;

pub mod awful;
pub mod good;
pub mod mediocre;
#[cfg(feature = "std")]
pub mod human;

pub use awful::AwfulPlayer;
pub use good::{GoodPlayer, LineState};
pub use mediocre::{HuntState, MediocrePlayer};
#[cfg(feature = "std")]
pub use human::HumanPlayer;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its fleet on its own board
/// - Choosing where to fire on the opponent's board
/// - Reacting to the outcome of its shots
pub trait Player {
    /// Name shown in game narration.
    fn name(&self) -> &str;

    /// Human players get the fogged view of the opponent's board.
    fn is_human(&self) -> bool {
        false
    }

    /// Place every registered ship onto `board`.
    fn place_ships(&mut self, board: &mut Board<'_>) -> Result<(), BoardError>;

    /// Choose the next cell to fire at.
    fn recommend_attack(&mut self) -> Coord;

    /// Outcome of the shot at `p`; `None` when the board rejected it.
    fn record_attack_result(&mut self, p: Coord, result: Option<AttackResult>);

    /// The opponent fired at `p` on this player's board.
    fn record_attack_by_opponent(&mut self, _p: Coord) {}
}

/// The four player variants, named by the tags accepted by [`create_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerKind {
    Human,
    Awful,
    Mediocre,
    Good,
}

impl PlayerKind {
    pub fn tag(&self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Awful => "awful",
            PlayerKind::Mediocre => "mediocre",
            PlayerKind::Good => "good",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error for a player tag that names no variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlayerKind(pub String);

impl fmt::Display for UnknownPlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown player type '{}'", self.0)
    }
}

impl FromStr for PlayerKind {
    type Err = UnknownPlayerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "awful" => Ok(PlayerKind::Awful),
            "mediocre" => Ok(PlayerKind::Mediocre),
            "good" => Ok(PlayerKind::Good),
            other => Err(UnknownPlayerKind(other.into())),
        }
    }
}

/// Build the player named by `kind`. Computer players draw from `rng`; the
/// human player reads stdin and ignores it. Unknown tags yield `None`.
pub fn create_player(
    kind: &str,
    name: &str,
    game: &Game,
    rng: Box<dyn RandomSource>,
) -> Option<Box<dyn Player>> {
    let kind = kind.parse::<PlayerKind>().ok()?;
    build_player(kind, name, game, rng)
}

/// Typed form of [`create_player`]. Returns `None` only for `Human` in
/// builds without `std`.
pub fn build_player(
    kind: PlayerKind,
    name: &str,
    game: &Game,
    rng: Box<dyn RandomSource>,
) -> Option<Box<dyn Player>> {
    match kind {
        #[cfg(feature = "std")]
        PlayerKind::Human => Some(Box::new(HumanPlayer::stdio(name))),
        #[cfg(not(feature = "std"))]
        PlayerKind::Human => None,
        PlayerKind::Awful => Some(Box::new(AwfulPlayer::new(name, game))),
        PlayerKind::Mediocre => Some(Box::new(MediocrePlayer::new(name, game, rng))),
        PlayerKind::Good => Some(Box::new(GoodPlayer::new(name, game, rng))),
    }
}
