use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::content::EnemyDef;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub attack: i32,
    /// Only ever decreases, and is clamped at zero.
    pub health: i32,
    pub defeat_message: String,
    pub win_message: String,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl From<&EnemyDef> for Enemy {
    fn from(def: &EnemyDef) -> Self {
        Self {
            name: def.name.to_string(),
            attack: def.attack,
            health: def.health,
            defeat_message: def.defeat_message.to_string(),
            win_message: def.win_message.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub enemies: Vec<Enemy>,
    pub exits: BTreeMap<Direction, RoomId>,
    pub goal: bool,
}

impl Room {
    pub fn has_living_enemies(&self) -> bool {
        self.enemies.iter().any(Enemy::is_alive)
    }

    pub fn living_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|enemy| enemy.is_alive()).count()
    }

    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }
}

/// Arena of rooms. Exits refer to other rooms by key, never by ownership.
#[derive(Clone, Debug)]
pub struct World {
    pub rooms: SlotMap<RoomId, Room>,
    pub entry: RoomId,
    pub index: HashMap<String, RoomId>,
}

impl World {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    pub fn entry(&self) -> RoomId {
        self.entry
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.rooms.values().map(|room| room.exits.len()).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub health: i32,
    pub attack: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { health: 100, attack: 10 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub room: RoomId,
    pub health: i32,
    pub attack: i32,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub world: World,
    pub player: Player,
}
