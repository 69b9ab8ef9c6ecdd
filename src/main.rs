#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    human::{choose_difficulty, choose_mode},
    init_logging, AiPlayer, Difficulty, GameMode, GameSession, HumanPlayer, Player, StdinInput,
    TerminalView,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Mode {
    /// Two humans sharing one terminal.
    Pvp,
    /// Human against the computer.
    Pvai,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Level {
    Easy,
    Medium,
    Hard,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play on this terminal. Without --mode the startup menu is shown.
    Play {
        #[arg(long, value_enum)]
        mode: Option<Mode>,
        #[arg(long, value_enum, help = "AI difficulty for --mode pvai")]
        difficulty: Option<Level>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two AI players fight it out.
    Auto {
        #[arg(long, value_enum, default_value_t = Level::Medium)]
        first: Level,
        #[arg(long, value_enum, default_value_t = Level::Medium)]
        second: Level,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
        ships: u8,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn print_title() {
    println!("###############################");
    println!("# Welcome to Battleship Game! #");
    println!("###############################\n");
    println!("Choose a game mode:");
    println!("1. Play against another Player");
    println!("2. Play against AI\n");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            difficulty,
            seed,
        } => {
            init_logging(LevelFilter::Warn);
            let mut rng = make_rng(seed);
            let mut input = StdinInput;
            let mode = match (mode, difficulty) {
                (Some(Mode::Pvp), _) => GameMode::PlayerVsPlayer,
                (Some(Mode::Pvai), Some(level)) => GameMode::PlayerVsAi(level.into()),
                (Some(Mode::Pvai), None) => {
                    println!("\nChoose AI Difficulty Level:\n1. Easy\n2. Medium\n3. Hard\n");
                    GameMode::PlayerVsAi(choose_difficulty(&mut input)?)
                }
                (None, _) => {
                    print_title();
                    choose_mode(&mut input)?
                }
            };

            let mut human = HumanPlayer::new("Player 1", StdinInput);
            let mut session = GameSession::new();
            match mode {
                GameMode::PlayerVsPlayer => {
                    let mut other = HumanPlayer::new("Player 2", StdinInput);
                    let mut view =
                        TerminalView::new(["Player 1".into(), "Player 2".into()], [true, true]);
                    let players: [&mut dyn Player; 2] = [&mut human, &mut other];
                    session.run(players, &mut rng, &mut view)?;
                }
                GameMode::PlayerVsAi(level) => {
                    let mut ai = AiPlayer::new(level);
                    let mut view =
                        TerminalView::new(["Player 1".into(), ai.name().into()], [true, false]);
                    let players: [&mut dyn Player; 2] = [&mut human, &mut ai];
                    session.run(players, &mut rng, &mut view)?;
                }
            }
        }
        Commands::Auto {
            first,
            second,
            ships,
            seed,
        } => {
            init_logging(LevelFilter::Info);
            let mut rng = make_rng(seed);
            let mut p1 = AiPlayer::with_fleet_size(first.into(), ships as usize);
            let mut p2 = AiPlayer::with_fleet_size(second.into(), ships as usize);
            let names = [
                format!("Player 1 {}", p1.name()),
                format!("Player 2 {}", p2.name()),
            ];
            let mut view = TerminalView::new(names, [false, false]);
            let mut session = GameSession::new();
            let players: [&mut dyn Player; 2] = [&mut p1, &mut p2];
            let winner = session.run(players, &mut rng, &mut view)?;
            println!("{} won after {} turns", winner, session.turns_played());
        }
    }
    Ok(())
}
