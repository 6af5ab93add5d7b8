#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use fleetfog::{init_logging, Battle, Difficulty, Event, Fleet, Settings, Side, TargetingAi};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

/// Pit a hunter on the player's side against the engine's computer opponent.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 100)]
    games: u32,
    /// Hard targeting for the hunter on the player's side.
    #[arg(long)]
    hard: bool,
    /// Hard targeting for the engine's computer opponent.
    #[arg(long)]
    hard_enemy: bool,
}

/// Play one match to completion and return the winner and the number of
/// rounds the computer opponent played.
#[cfg(feature = "std")]
fn play(seed: u64, hunter: Difficulty, settings: Settings) -> anyhow::Result<(Side, u32)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fleet = Fleet::random(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut battle = Battle::new(settings, SmallRng::seed_from_u64(seed.wrapping_add(1)));
    battle.start(fleet).map_err(|e| anyhow::anyhow!(e))?;
    let mut player = TargetingAi::new(hunter);
    let mut rounds = 0;

    while !battle.won() {
        if battle.players_turn() {
            let Some(target) = player.shoot(&mut rng) else {
                anyhow::bail!("hunter ran out of targets");
            };
            battle.fire(target);
            for event in battle.drain_messages() {
                match event {
                    Event::PlayerHit { .. } => player.react_to_hit(&mut rng),
                    Event::PlayerSunk { .. } => player.react_to_sink(),
                    _ => {}
                }
            }
            for field in player.drain_marks() {
                battle.mark_field(field);
            }
            battle.drain_messages();
        } else {
            rounds += 1;
            while !battle.players_turn() && !battle.won() {
                battle.ai_move();
            }
            battle.drain_messages();
        }
    }
    let winner = battle
        .winner()
        .ok_or_else(|| anyhow::anyhow!("match ended without a winner"))?;
    Ok((winner, rounds))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let hunter = if cli.hard {
        Difficulty::Hard
    } else {
        Difficulty::Normal
    };
    let settings = Settings {
        mark_misses_around_sunk_ships: true,
        hard_enemy_targeting: cli.hard_enemy,
    };

    let mut player_wins = 0u32;
    let mut enemy_wins = 0u32;
    let mut total_rounds = 0u64;
    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(u64::from(game) * 2);
        let (winner, rounds) = play(seed, hunter, settings)?;
        match winner {
            Side::Player => player_wins += 1,
            Side::Enemy => enemy_wins += 1,
        }
        total_rounds += u64::from(rounds);
        log::debug!("game {} won by {:?} after {} rounds", game, winner, rounds);
    }

    let average_rounds = if cli.games == 0 {
        0.0
    } else {
        total_rounds as f64 / f64::from(cli.games)
    };
    let result = json!({
        "games": cli.games,
        "player": {"difficulty": format!("{:?}", hunter), "wins": player_wins},
        "enemy": {"difficulty": format!("{:?}", if cli.hard_enemy { Difficulty::Hard } else { Difficulty::Normal }), "wins": enemy_wins},
        "average_rounds": average_rounds,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
