//! Shared fixtures for the `game` test suites.
//! Small hand-built registries keep combat and movement tests independent of the campaign.

use super::*;
use crate::content::{ConnectionDef, EnemyDef, RoomDef};

pub(super) const ARENA: &str = "Arena";
pub(super) const HALL: &str = "Hall";

pub(super) fn foe(name: &'static str, attack: i32, health: i32) -> EnemyDef {
    EnemyDef {
        name,
        attack,
        health,
        defeat_message: "It falls.",
        win_message: "It wins.",
    }
}

/// `Hall` is the entry room; `Arena` sits north of it and holds `enemies`.
pub(super) fn arena_pack(enemies: Vec<EnemyDef>) -> ContentPack {
    ContentPack {
        rooms: vec![
            RoomDef { name: HALL, description: "An empty hall.", enemies: Vec::new(), goal: false },
            RoomDef { name: ARENA, description: "A sandy pit.", enemies, goal: false },
        ],
        connections: vec![ConnectionDef { from: HALL, to: ARENA, exit: "north" }],
    }
}

/// A session already standing in the arena.
pub(super) fn arena_game(enemies: Vec<EnemyDef>, health: i32, attack: i32) -> Game {
    let mut game = Game::new(&arena_pack(enemies), PlayerConfig { health, attack })
        .expect("arena fixture should build");
    let arena = game.state.world.room_id(ARENA).expect("arena exists");
    game.state.player.room = arena;
    game
}

pub(super) fn campaign_game() -> Game {
    Game::new(&ContentPack::default(), PlayerConfig::default()).expect("campaign should build")
}

pub(super) fn walk(game: &mut Game, directions: &[&str]) {
    for direction in directions {
        game.move_player(direction)
            .unwrap_or_else(|err| panic!("move {direction} from {}: {err}", game.current_room_name()));
    }
}

pub(super) fn enemy_healths(game: &Game) -> Vec<i32> {
    game.current_room().enemies.iter().map(|enemy| enemy.health).collect()
}
