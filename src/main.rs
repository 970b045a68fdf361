#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{build_player, init_logging, play, seeded_rng, Game, Outcome, PlayerKind};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a full game. Without --ship the classic five-ship fleet is used.
    Play {
        #[arg(long, default_value_t = 10)]
        rows: usize,
        #[arg(long, default_value_t = 10)]
        cols: usize,
        /// Extra ship as LENGTH:SYMBOL:NAME, e.g. --ship 3:C:cruiser
        #[arg(long = "ship", value_parser = parse_ship)]
        ships: Vec<(usize, char, String)>,
        #[command(flatten)]
        seats: Seats,
    },
    /// Tiny 2x3 game with a single two-cell rowboat.
    Mini {
        #[command(flatten)]
        seats: Seats,
    },
}

#[derive(Args)]
#[cfg(feature = "std")]
struct Seats {
    #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
    p1: PlayerKind,
    #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
    p2: PlayerKind,
    #[arg(long, default_value = "Player 1")]
    name1: String,
    #[arg(long, default_value = "Player 2")]
    name2: String,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Wait for Enter between turns.
    #[arg(long)]
    pause: bool,
}

#[cfg(feature = "std")]
fn parse_ship(s: &str) -> Result<(usize, char, String), String> {
    let mut parts = s.splitn(3, ':');
    let length = parts
        .next()
        .and_then(|l| l.parse().ok())
        .ok_or_else(|| format!("bad ship length in '{}'", s))?;
    let mut symbol = parts.next().unwrap_or_default().chars();
    let symbol = match (symbol.next(), symbol.next()) {
        (Some(ch), None) => ch,
        _ => return Err(format!("ship symbol in '{}' must be one character", s)),
    };
    let name = parts
        .next()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| format!("missing ship name in '{}'", s))?;
    Ok((length, symbol, name.to_string()))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mut game, seats) = match cli.command {
        Commands::Play {
            rows,
            cols,
            ships,
            seats,
        } => {
            let mut game = Game::new(rows, cols).map_err(|e| anyhow::anyhow!(e))?;
            if ships.is_empty() {
                game.add_standard_fleet()
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            for (length, symbol, name) in ships {
                game.add_ship(length, symbol, name)
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            (game, seats)
        }
        Commands::Mini { seats } => {
            let mut game = Game::new(2, 3).map_err(|e| anyhow::anyhow!(e))?;
            game.add_ship(2, 'R', "rowboat")
                .map_err(|e| anyhow::anyhow!(e))?;
            (game, seats)
        }
    };

    if let Some(s) = seats.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng1 = seeded_rng(seats.seed);
    let rng2 = seeded_rng(seats.seed.map(|s| s.wrapping_add(1)));

    let mut p1 = build_player(seats.p1, &seats.name1, &game, Box::new(rng1))
        .ok_or_else(|| anyhow::anyhow!("player type {} is unavailable", seats.p1))?;
    let mut p2 = build_player(seats.p2, &seats.name2, &game, Box::new(rng2))
        .ok_or_else(|| anyhow::anyhow!("player type {} is unavailable", seats.p2))?;

    let outcome = play(&mut game, p1.as_mut(), p2.as_mut(), seats.pause)
        .map_err(|e| anyhow::anyhow!(e))?;
    if let Outcome::Draw { turns } = outcome {
        println!("No winner after {} turns.", turns);
    }
    Ok(())
}
