use std::io;

use anyhow::{Result, ensure};
use clap::Parser;
use game_core::{ContentPack, Game, GameError, PlayerConfig};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    commands: u32,
}

const DIRECTIONS: [&str; 5] = ["north", "south", "east", "west", "up"];
const TARGETS: [&str; 5] =
    ["space pirate", "green tentacle monster", "slimy creature", "it", "everyone"];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn new_session(content: &ContentPack, rng: &mut ChaCha8Rng) -> Result<Game> {
    let player = PlayerConfig {
        health: 1 + (rng.next_u64() % 200) as i32,
        attack: (rng.next_u64() % 25) as i32,
    };
    debug!(health = player.health, attack = player.attack, "new fuzz session");
    Ok(Game::new(content, player)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} commands...", args.seed, args.commands);
    let content = ContentPack::default();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut game = new_session(&content, &mut rng)?;
    let mut starting_health = game.player().health;
    let (mut goals, mut defeats) = (0u32, 0u32);

    for _ in 0..args.commands {
        let room_before = game.player().room;
        let was_blocked = game.current_room().has_living_enemies();
        let health_before = game.player().health;

        // Bias toward fighting while something in the room is still alive.
        let fight = (was_blocked && rng.next_u64() % 4 != 0) || rng.next_u64() % 5 == 0;
        let refused = if fight {
            game.fight(choose(&mut rng, &TARGETS)).err()
        } else {
            game.move_player(choose(&mut rng, &DIRECTIONS)).err()
        };

        // Invariants
        let player = game.player();
        ensure!(!matches!(refused, Some(GameError::SessionOver)), "command after session end");
        ensure!((0..=health_before).contains(&player.health), "health left its bounds");
        ensure!(player.health <= starting_health, "health rose above its start");
        ensure!(
            !was_blocked || player.room == room_before,
            "player left a room with living enemies"
        );
        for enemy in &game.current_room().enemies {
            ensure!(enemy.health >= 0, "enemy health below zero");
        }

        if let Some(outcome) = game.outcome() {
            ensure!(game.is_player_defeated(), "defeat with health left");
            defeats += 1;
            debug!(?outcome, turns = game.turns(), "session finished");
            ensure!(
                matches!(game.move_player("north"), Err(GameError::SessionOver)),
                "finished session accepted a command"
            );
            game = new_session(&content, &mut rng)?;
            starting_health = game.player().health;
        } else if game.current_room().exits.is_empty() && !game.current_room().has_living_enemies()
        {
            // Dead ends (the goal room among them) stay open; start over from the entry.
            if game.current_room().goal {
                goals += 1;
            }
            debug!(room = game.current_room_name(), turns = game.turns(), "dead end reached");
            game = new_session(&content, &mut rng)?;
            starting_health = game.player().health;
        }
    }

    println!("Sessions: {goals} reached the goal, {defeats} defeats");
    println!("Fuzzing completed successfully.");
    Ok(())
}
