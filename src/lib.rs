#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod random;
#[cfg(feature = "std")]
pub mod session;
mod ship;

pub use bitgrid::{BitGrid, BitGridError, ShotGrid};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use random::*;
#[cfg(feature = "std")]
pub use session::{play, play_to, Outcome, Seat};
pub use ship::*;
