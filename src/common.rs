//! Common types: attack results and the error enums of the engine.

use alloc::string::String;
use core::fmt;

use crate::coord::Coord;

/// Outcome of an attack the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship that still has intact segments.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Destroyed { ship_id: usize },
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self, AttackResult::Destroyed { .. })
    }

    /// Id of the destroyed ship, if this shot destroyed one.
    pub fn ship_id(&self) -> Option<usize> {
        match self {
            AttackResult::Destroyed { ship_id } => Some(*ship_id),
            _ => None,
        }
    }
}

/// Errors returned by Board operations. None of them leaves the board modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship index is not in the registry.
    InvalidIndex,
    /// That ship is already on this board.
    ShipAlreadyPlaced,
    /// The run leaves the board.
    ShipOutOfBounds,
    /// The run crosses a ship or a blocked cell.
    ShipOverlaps,
    /// The run does not hold that ship intact.
    ShipNotFound,
    /// Attack target is off the board.
    OutOfBounds(Coord),
    /// Attack target was already fired at.
    AlreadyAttacked(Coord),
    /// A strategy could not fit the whole fleet.
    UnableToPlaceShip,
    /// Interactive input ended before placement finished.
    InputClosed,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps an occupied cell"),
            BoardError::ShipNotFound => write!(f, "Ship is not intact at that position"),
            BoardError::OutOfBounds(p) => write!(f, "Attack at {} is off the board", p),
            BoardError::AlreadyAttacked(p) => write!(f, "Cell {} was already attacked", p),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place all ships"),
            BoardError::InputClosed => write!(f, "Input ended before all ships were placed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Reasons a ship spec is rejected at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    BadLength(usize),
    DoesNotFit(usize),
    UnprintableSymbol(char),
    ReservedSymbol(char),
    DuplicateSymbol(char),
    FleetTooLarge { total: usize, area: usize },
    /// Ships cannot be added once the registry has been reordered for play.
    RegistryFrozen,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::BadLength(len) => write!(f, "Bad ship length {}; it must be >= 1", len),
            FleetError::DoesNotFit(len) => {
                write!(f, "Bad ship length {}; it won't fit on the board", len)
            }
            FleetError::UnprintableSymbol(ch) => write!(
                f,
                "Unprintable character with value {} must not be used as a ship symbol",
                *ch as u32
            ),
            FleetError::ReservedSymbol(ch) => {
                write!(f, "Character {} must not be used as a ship symbol", ch)
            }
            FleetError::DuplicateSymbol(ch) => {
                write!(f, "Ship symbol {} must not be used for more than one ship", ch)
            }
            FleetError::FleetTooLarge { total, area } => write!(
                f,
                "Board is too small to fit all ships ({} cells needed, {} available)",
                total, area
            ),
            FleetError::RegistryFrozen => {
                write!(f, "Ships cannot be added after play has started")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

/// Errors from game setup and the turn loop.
#[derive(Debug)]
pub enum GameError {
    BadDimensions { rows: usize, cols: usize },
    NoShips,
    /// The named player could not place its fleet.
    PlacementFailed { player: String, source: BoardError },
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BadDimensions { rows, cols } => write!(
                f,
                "Board must be 1..={} rows by 1..={} columns, got {}x{}",
                crate::config::MAX_ROWS,
                crate::config::MAX_COLS,
                rows,
                cols
            ),
            GameError::NoShips => write!(f, "No ships have been registered"),
            GameError::PlacementFailed { player, source } => {
                write!(f, "{} could not place ships: {}", player, source)
            }
            #[cfg(feature = "std")]
            GameError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::PlacementFailed { source, .. } => Some(source),
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}
