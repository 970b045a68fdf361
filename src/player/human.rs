#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    coord::Coord,
    ship::Direction,
};

use super::Player;

/// Where answers come from.
enum Input {
    Reader(Box<dyn BufRead>),
    /// Process stdin, locked only for the duration of each line so the
    /// session can read from it between turns.
    Stdin,
}

impl Input {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self {
            Input::Reader(reader) => reader.read_line(buf),
            Input::Stdin => io::stdin().read_line(buf),
        }
    }
}

/// Interactive player reading "row col" pairs and `h`/`v` answers.
///
/// All rule checking is left to the board; rejected placements are reported
/// and asked for again.
pub struct HumanPlayer {
    name: String,
    input: Input,
    output: Box<dyn Write>,
}

impl HumanPlayer {
    pub fn new(name: &str, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            name: name.into(),
            input: Input::Reader(input),
            output,
        }
    }

    /// Player bound to the process's stdin and stdout.
    pub fn stdio(name: &str) -> Self {
        Self {
            name: name.into(),
            input: Input::Stdin,
            output: Box::new(io::stdout()),
        }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn ask_direction(&mut self, ship: &str, length: usize) -> Option<Direction> {
        loop {
            let line = self.prompt(&format!(
                "Enter h or v for direction of {} (length {}): ",
                ship, length
            ))?;
            match parse_direction(&line) {
                Some(dir) => return Some(dir),
                None => self.say("Direction must be h or v."),
            }
        }
    }

    fn ask_point(&mut self, text: &str) -> Option<Coord> {
        loop {
            let line = self.prompt(text)?;
            match parse_two_ints(&line) {
                Some(p) => return Some(p),
                None => self.say("You must enter two integers."),
            }
        }
    }
}

/// First non-blank character `h` or `v`.
fn parse_direction(line: &str) -> Option<Direction> {
    match line.trim_start().chars().next() {
        Some('h') => Some(Direction::Horizontal),
        Some('v') => Some(Direction::Vertical),
        _ => None,
    }
}

/// Two leading whitespace-separated integers; anything after them is ignored.
fn parse_two_ints(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let r = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    Some(Coord::new(r, c))
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, board: &mut Board<'_>) -> Result<(), BoardError> {
        let game = board.game();
        let count = game.ship_count();
        for (ship_id, spec) in game.ships().iter().enumerate() {
            let header = format!("{} must place {} ships.", self.name, count - ship_id);
            self.say(&header);
            let view = board.render(false);
            let _ = write!(self.output, "{}", view);

            let dir = self
                .ask_direction(spec.name(), spec.length())
                .ok_or(BoardError::InputClosed)?;
            loop {
                let origin = self
                    .ask_point("Enter row and column of topmost cell (e.g., 3 5): ")
                    .ok_or(BoardError::InputClosed)?;
                match board.place_ship(origin, ship_id, dir) {
                    Ok(()) => break,
                    Err(e) => {
                        log::debug!("{}: rejected placement at {}: {}", self.name, origin, e);
                        self.say("The ship can not be placed there.");
                    }
                }
            }
        }
        Ok(())
    }

    /// Off-board `(-1,-1)` once input is exhausted, which wastes the turn.
    fn recommend_attack(&mut self) -> Coord {
        self.ask_point("Enter the row and column to attack (e.g., 3 5): ")
            .unwrap_or(Coord::new(-1, -1))
    }

    fn record_attack_result(&mut self, _p: Coord, _result: Option<AttackResult>) {}
}
