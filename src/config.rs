/// Largest supported number of rows on a board.
pub const MAX_ROWS: usize = 10;
/// Largest supported number of columns on a board.
pub const MAX_COLS: usize = 10;

// Game::new rejects boards past these limits, and ShotMemory relies on that
// to pack any legal board into a single u128 shot grid.
const _: () = assert!(MAX_ROWS * MAX_COLS <= 128);

/// Cell markers used by board rendering; no ship may use them as its symbol.
pub const EMPTY_MARKER: char = '.';
pub const HIT_MARKER: char = 'X';
pub const MISS_MARKER: char = 'o';
pub const RESERVED_SYMBOLS: [char; 3] = [HIT_MARKER, MISS_MARKER, EMPTY_MARKER];

/// Number of block-and-backtrack rounds the mediocre player tries before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 50;

/// How far past a fresh hit the mediocre player queues follow-up shots.
pub const FOLLOW_UP_REACH: i32 = 4;

/// Consecutive rejected shots after which a session with both fleets afloat
/// is called a draw.
pub const WASTED_TURN_LIMIT: usize = 64;

/// The classic five-ship fleet as `(length, symbol, name)`.
pub const STANDARD_FLEET: [(usize, char, &str); 5] = [
    (5, 'A', "aircraft carrier"),
    (4, 'B', "battleship"),
    (3, 'D', "destroyer"),
    (3, 'S', "submarine"),
    (2, 'P', "patrol boat"),
];

/// Total number of ship segments in the standard fleet.
pub const STANDARD_FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;
