use broadside::{
    AiPlayer, Difficulty, GameEvent, GameSession, GameView, Player, PlayerId, TurnHandoff,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Tallies per-seat shot statistics.
#[derive(Default)]
struct Tally {
    shots: [usize; 2],
    hits: [usize; 2],
    sunk: [usize; 2],
    airstrikes: [usize; 2],
}

impl TurnHandoff for Tally {}

impl GameView for Tally {
    fn event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Shot { player, result, .. } => {
                let i = player.index();
                self.shots[i] += 1;
                if result.is_hit() {
                    self.hits[i] += 1;
                }
                if result == broadside::HitResult::Sunk {
                    self.sunk[i] += 1;
                }
            }
            GameEvent::Airstrike { player, .. } => self.airstrikes[player.index()] += 1,
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [difficulty1] [difficulty2]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let level = |i: usize| -> anyhow::Result<Difficulty> {
        match args.get(i) {
            Some(s) => s.parse().map_err(|e| anyhow::anyhow!("{}: {}", s, e)),
            None => Ok(Difficulty::Medium),
        }
    };
    let (d1, d2) = (level(2)?, level(3)?);

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = AiPlayer::with_fleet_size(d1, 5);
    let mut p2 = AiPlayer::with_fleet_size(d2, 5);
    let mut tally = Tally::default();
    let mut session = GameSession::new();

    let players: [&mut dyn Player; 2] = [&mut p1, &mut p2];
    let winner = session
        .run(players, &mut rng, &mut tally)
        .map_err(|e| anyhow::anyhow!(e))?;

    let seat = |p: PlayerId, d: Difficulty| {
        let i = p.index();
        json!({
            "difficulty": d,
            "shots": tally.shots[i],
            "hits": tally.hits[i],
            "sunk": tally.sunk[i],
            "airstrikes": tally.airstrikes[i],
        })
    };
    let result = json!({
        "player1": seat(PlayerId::One, d1),
        "player2": seat(PlayerId::Two, d2),
        "turns": session.turns_played(),
        "winner": match winner {
            PlayerId::One => "player1",
            PlayerId::Two => "player2",
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
