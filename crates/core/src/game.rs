//! Session state machine: one player walking the room graph and fighting what it finds.
//! Movement lives in `traversal`, attack exchanges in `combat`.

use std::hash::Hasher;

use thiserror::Error;
use tracing::debug;
use xxhash_rust::xxh3::Xxh3;

use crate::content::ContentPack;
use crate::mapgen::{WorldError, build_world};
use crate::state::{GameState, Player, PlayerConfig, Room};
use crate::types::*;

mod combat;
mod traversal;

#[cfg(test)]
mod test_support;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("player needs health above 0 and attack of at least 0 (got health {health}, attack {attack})")]
    InvalidPlayer { health: i32, attack: i32 },
}

pub struct Game {
    state: GameState,
    log: Vec<LogEvent>,
    outcome: Option<RunOutcome>,
    // Commands accepted by the session, refused ones included.
    turns: u64,
}

impl Game {
    pub fn new(content: &ContentPack, player: PlayerConfig) -> Result<Self, SetupError> {
        if player.health <= 0 || player.attack < 0 {
            return Err(SetupError::InvalidPlayer { health: player.health, attack: player.attack });
        }

        let world = build_world(content)?;
        let log = vec![LogEvent::WorldBuilt { rooms: world.len(), edges: world.edge_count() }];
        let player = Player { room: world.entry(), health: player.health, attack: player.attack };
        debug!(room = %world.room(player.room).name, health = player.health, "session started");

        Ok(Self { state: GameState { world, player }, log, outcome: None, turns: 0 })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn current_room(&self) -> &Room {
        self.state.world.room(self.state.player.room)
    }

    pub fn current_room_name(&self) -> &str {
        &self.current_room().name
    }

    pub fn current_room_description(&self) -> &str {
        &self.current_room().description
    }

    pub fn is_player_defeated(&self) -> bool {
        self.state.player.health == 0
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn combat_stats(&self) -> CombatStats {
        CombatStats {
            player_health: self.state.player.health,
            player_attack: self.state.player.attack,
            enemies: self
                .current_room()
                .enemies
                .iter()
                .map(|enemy| FighterStats {
                    name: enemy.name.clone(),
                    health: enemy.health,
                    attack: enemy.attack,
                })
                .collect(),
        }
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.turns);
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(RunOutcome::Defeat) => 1,
        });

        let player = &self.state.player;
        hasher.write(self.current_room_name().as_bytes());
        hasher.write_i32(player.health);
        hasher.write_i32(player.attack);

        // Slotmap iteration follows insertion order since rooms are never removed.
        for room in self.state.world.rooms.values() {
            for enemy in &room.enemies {
                hasher.write_i32(enemy.health);
            }
        }

        hasher.finish()
    }

    fn begin_turn(&mut self) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::SessionOver);
        }
        self.turns += 1;
        Ok(())
    }
}
