#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use fleetfog::{
    init_logging, Battle, Coordinate, Event, Placement, PlacementEvent, Settings, Side,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Play a game of battleship against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Let the computer rank its hunt targets.
    #[arg(long)]
    hard: bool,
    /// Do not mark fields around ships you sink.
    #[arg(long)]
    no_auto_mark: bool,
}

#[cfg(feature = "std")]
fn describe(event: Event) -> String {
    match event {
        Event::YourTurn => "It's your turn.".to_string(),
        Event::NotStarted => "No game in progress.".to_string(),
        Event::GameOver => "The game is over.".to_string(),
        Event::NotYourTurn => "It's not your turn!".to_string(),
        Event::InvalidCoordinates => "Invalid field coordinates".to_string(),
        Event::AlreadyDiscovered => "This field has been already discovered".to_string(),
        Event::PlayerHit { at } => format!("You've hit an enemy ship at {}!", at),
        Event::PlayerSunk { .. } => "You've destroyed an enemy ship!".to_string(),
        Event::PlayerMiss { at } => format!("You missed at {}.", at),
        Event::EnemyHit { at } => format!("Enemy has hit one of your ships at {}!", at),
        Event::EnemySunk { .. } => "Enemy has destroyed one of your ships!".to_string(),
        Event::EnemyMiss { at } => format!("Enemy has missed at {}. It's your turn now.", at),
        Event::PlayerWin => "You win!".to_string(),
        Event::EnemyWin => "Enemy wins.".to_string(),
        Event::MarkFailed => "The field you tried to mark is already discovered".to_string(),
        Event::UnmarkFailed => "The field you tried to unmark isn't marked".to_string(),
    }
}

#[cfg(feature = "std")]
fn describe_placement(event: PlacementEvent) -> &'static str {
    match event {
        PlacementEvent::ShipSelected => "A ship has been selected",
        PlacementEvent::NoShipFound => "No ship was found on these coordinates",
        PlacementEvent::NoShipSelected => "No ship has been selected",
        PlacementEvent::ShipMoved => "Ship has been moved to a new location",
        PlacementEvent::MoveFailed => "The selected location is invalid",
        PlacementEvent::ShipRotated => "Ship has been rotated",
        PlacementEvent::RotationFailed => "You can't rotate this ship",
        PlacementEvent::FleetRandomized => "Ships have been placed randomly",
        PlacementEvent::InvalidCoordinates => "Invalid field coordinates",
    }
}

#[cfg(feature = "std")]
const PLACEMENT_HELP: &str = "sel <field>: select the ship on a field\n\
mv <field>: move the selected ship so its upper or left end sits on the field\n\
rot: rotate the selected ship around its upper or left end\n\
rand: place all ships randomly\n\
done: accept the fleet and start the game\n\
quit: exit";

#[cfg(feature = "std")]
const BATTLE_HELP: &str = "st <field>: shoot at a field on the enemy board\n\
mk <field>: mark an enemy field as empty\n\
unmk <field>: remove a mark\n\
quit: exit";

/// Next non-empty input line split into a command and an optional field.
/// `None` means end of input.
#[cfg(feature = "std")]
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<Option<(String, Option<String>)>> {
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let mut parts = line.split_whitespace();
        if let Some(command) = parts.next() {
            return Ok(Some((command.to_ascii_lowercase(), parts.next().map(str::to_string))));
        }
    }
}

#[cfg(feature = "std")]
fn parse_field(arg: Option<String>) -> Option<Coordinate> {
    arg.and_then(|a| a.parse().ok())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let settings = Settings {
        mark_misses_around_sunk_ships: !cli.no_auto_mark,
        hard_enemy_targeting: cli.hard,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut placement = Placement::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    println!("Set up your fleet.\n{}", PLACEMENT_HELP);
    loop {
        println!("{}", placement.board());
        for event in placement.drain_messages() {
            println!("{}", describe_placement(event));
        }
        let Some((command, arg)) = prompt(&mut lines)? else {
            return Ok(());
        };
        match command.as_str() {
            "sel" | "mv" => match parse_field(arg) {
                Some(field) if command == "sel" => placement.select(field),
                Some(field) => placement.relocate(field),
                None => println!("Invalid field coordinates"),
            },
            "rot" => placement.rotate(),
            "rand" => placement.randomize(&mut rng).map_err(|e| anyhow::anyhow!(e))?,
            "done" => break,
            "quit" => return Ok(()),
            _ => println!("{}", PLACEMENT_HELP),
        }
    }

    let mut battle = Battle::new(settings, rng);
    battle.start(placement.finish()).map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", BATTLE_HELP);
    loop {
        while !battle.players_turn() && !battle.won() {
            battle.ai_move();
        }
        if let (Some(enemy), Some(own)) = (battle.board_view(Side::Enemy), battle.board_view(Side::Player)) {
            println!("{}", battle.fleet_view(Side::Enemy).unwrap_or_default());
            println!("{}", enemy);
            println!("{}", "-".repeat(23));
            println!("{}", own);
            println!("{}", battle.fleet_view(Side::Player).unwrap_or_default());
        }
        for event in battle.drain_messages() {
            println!("{}", describe(event));
        }
        if battle.won() {
            return Ok(());
        }
        let Some((command, arg)) = prompt(&mut lines)? else {
            return Ok(());
        };
        let field = parse_field(arg);
        match (command.as_str(), field) {
            ("st", Some(field)) => battle.fire(field),
            ("mk", Some(field)) => battle.mark_field(field),
            ("unmk", Some(field)) => battle.unmark_field(field),
            ("st" | "mk" | "unmk", None) => println!("Invalid field coordinates"),
            ("quit", _) => return Ok(()),
            _ => println!("{}", BATTLE_HELP),
        }
    }
}
