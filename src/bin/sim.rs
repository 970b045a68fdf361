use std::io;

use broadside::{build_player, init_logging, play_to, seeded_rng, Game, PlayerKind, Seat};
use clap::Parser;
use serde_json::json;

/// Run a batch of computer-vs-computer games and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
    p1: PlayerKind,
    #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
    p2: PlayerKind,
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Base seed; game i seeds its players with seed + 2i and seed + 2i + 1.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    if args.p1 == PlayerKind::Human || args.p2 == PlayerKind::Human {
        anyhow::bail!("sim only runs computer players");
    }

    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    let mut total_turns = 0usize;
    for i in 0..args.games as u64 {
        let mut game = Game::standard();
        let base = args.seed.wrapping_add(2 * i);
        let mut p1 = build_player(args.p1, "p1", &game, Box::new(seeded_rng(Some(base))))
            .ok_or_else(|| anyhow::anyhow!("player type {} is unavailable", args.p1))?;
        let mut p2 = build_player(
            args.p2,
            "p2",
            &game,
            Box::new(seeded_rng(Some(base.wrapping_add(1)))),
        )
        .ok_or_else(|| anyhow::anyhow!("player type {} is unavailable", args.p2))?;

        let outcome = play_to(&mut game, p1.as_mut(), p2.as_mut(), &mut io::sink(), None)
            .map_err(|e| anyhow::anyhow!(e))?;
        match outcome.winner() {
            Some(Seat::First) => wins[0] += 1,
            Some(Seat::Second) => wins[1] += 1,
            None => draws += 1,
        }
        total_turns += outcome.turns();
    }

    let average_turns = if args.games == 0 {
        0.0
    } else {
        total_turns as f64 / args.games as f64
    };
    let result = json!({
        "player1": {"kind": args.p1, "wins": wins[0]},
        "player2": {"kind": args.p2, "wins": wins[1]},
        "draws": draws,
        "games": args.games,
        "average_turns": average_turns,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
