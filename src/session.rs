#![cfg(feature = "std")]

//! Turn loop: places both fleets, alternates shots, narrates and declares the
//! winner.

use std::io::{self, Read, Write};

use crate::{
    board::Board,
    common::{AttackResult, GameError},
    config::WASTED_TURN_LIMIT,
    game::Game,
    player::Player,
};

/// Which side of a session a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    First,
    Second,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player in `seat` destroyed the whole opposing fleet.
    Won { seat: Seat, turns: usize },
    /// Neither fleet fell before the session was called off.
    Draw { turns: usize },
}

impl Outcome {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Won { seat, .. } => Some(*seat),
            Outcome::Draw { .. } => None,
        }
    }

    pub fn turns(&self) -> usize {
        match self {
            Outcome::Won { turns, .. } | Outcome::Draw { turns } => *turns,
        }
    }
}

/// Play on stdout, waiting for Enter on stdin between turns if `should_pause`.
pub fn play(
    game: &mut Game,
    p1: &mut dyn Player,
    p2: &mut dyn Player,
    should_pause: bool,
) -> Result<Outcome, GameError> {
    let mut out = io::stdout();
    // unlocked handle: a human player reads the same stdin between pauses
    let mut stdin = io::stdin();
    let pause: Option<&mut dyn Read> = if should_pause { Some(&mut stdin) } else { None };
    play_to(game, p1, p2, &mut out, pause)
}

/// Consume input up to and including the next newline, or to end of input.
fn wait_for_enter(input: &mut dyn Read) -> io::Result<()> {
    let mut byte = [0u8; 1];
    while input.read(&mut byte)? == 1 && byte[0] != b'\n' {}
    Ok(())
}

/// Run a full session writing narration to `out`.
///
/// The registry is reordered longest-first, then p1 and p2 place their fleets
/// on fresh boards. Players alternate, p1 first. A rejected shot still uses up
/// the turn. The session ends as soon as a fleet is destroyed.
///
/// A fleet that was only partly placed can never be destroyed, so such a
/// session is called a draw after `2 * rows * cols` turns. Otherwise it is a
/// draw only once `WASTED_TURN_LIMIT` shots in a row have been rejected.
pub fn play_to<W: Write>(
    game: &mut Game,
    p1: &mut dyn Player,
    p2: &mut dyn Player,
    out: &mut W,
    mut pause: Option<&mut dyn Read>,
) -> Result<Outcome, GameError> {
    if game.ship_count() == 0 {
        return Err(GameError::NoShips);
    }
    game.reorder_by_length();
    let game: &Game = game;

    let mut boards = [Board::new(game), Board::new(game)];
    let mut players: [&mut dyn Player; 2] = [p1, p2];
    for (player, board) in players.iter_mut().zip(boards.iter_mut()) {
        player
            .place_ships(board)
            .map_err(|source| GameError::PlacementFailed {
                player: player.name().to_string(),
                source,
            })?;
    }
    log::info!(
        "{} vs {} on a {}x{} board",
        players[0].name(),
        players[1].name(),
        game.rows(),
        game.cols()
    );

    let incomplete = boards
        .iter()
        .any(|b| (0..game.ship_count()).any(|id| !b.is_placed(id)));
    let turn_cap = incomplete.then(|| 2 * game.dims().area());
    let mut wasted_streak = 0;
    let mut turn = 0;
    loop {
        if turn_cap == Some(turn) || wasted_streak == WASTED_TURN_LIMIT {
            log::info!("no winner after {} turns", turn);
            return Ok(Outcome::Draw { turns: turn });
        }
        let (a, d) = (turn % 2, 1 - turn % 2);
        let fogged = players[a].is_human();
        writeln!(
            out,
            "{}'s turn. Board for {}:",
            players[a].name(),
            players[d].name()
        )?;
        write!(out, "{}", boards[d].render(fogged))?;

        let p = players[a].recommend_attack();
        match boards[d].attack(p) {
            Err(e) => {
                log::debug!("{}: {}", players[a].name(), e);
                writeln!(out, "{} wasted a shot at ({},{}).", players[a].name(), p.r, p.c)?;
                players[a].record_attack_result(p, None);
                wasted_streak += 1;
            }
            Ok(result) => {
                wasted_streak = 0;
                players[a].record_attack_result(p, Some(result));
                players[d].record_attack_by_opponent(p);

                let what = match result {
                    AttackResult::Miss => "missed".to_string(),
                    AttackResult::Hit => "hit something".to_string(),
                    AttackResult::Destroyed { ship_id } => format!(
                        "destroyed the {}",
                        game.ship_name(ship_id).unwrap_or("ship")
                    ),
                };
                writeln!(
                    out,
                    "{} attacked ({},{}) and {}, resulting in:",
                    players[a].name(),
                    p.r,
                    p.c,
                    what
                )?;
                write!(out, "{}", boards[d].render(fogged))?;

                if boards[d].all_ships_destroyed() {
                    writeln!(out, "{} wins!", players[a].name())?;
                    if players[d].is_human() {
                        write!(out, "{}", boards[a].render(false))?;
                    }
                    let seat = if a == 0 { Seat::First } else { Seat::Second };
                    log::info!("{} won after {} turns", players[a].name(), turn + 1);
                    return Ok(Outcome::Won {
                        seat,
                        turns: turn + 1,
                    });
                }
            }
        }
        if let Some(input) = pause.as_mut() {
            write!(out, "Press enter to continue: ")?;
            out.flush()?;
            wait_for_enter(&mut **input)?;
        }
        turn += 1;
    }
}
