//! World graph construction from the room registry and its connection declarations.

use std::collections::{BTreeMap, HashMap};

use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::content::{ConnectionDef, ContentPack};
use crate::state::{Enemy, Room, World};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("room registry is empty; there is no entry room")]
    EmptyRegistry,
    #[error("room `{name}` is declared more than once")]
    DuplicateRoom { name: String },
    #[error(
        "enemy `{name}` in room `{room}` needs attack of at least 0 and health above 0 (got attack {attack}, health {health})"
    )]
    InvalidEnemy { room: String, name: String, attack: i32, health: i32 },
    #[error("connection #{declaration} ({from} -> {to}) names unknown room `{name}`")]
    UnknownRoom { declaration: usize, name: String, from: String, to: String },
    #[error("connection #{declaration} ({from} -> {to}) has unknown exit `{keyword}`")]
    UnknownExit { declaration: usize, keyword: String, from: String, to: String },
}

/// Builds the linked room graph. Fails on the first bad declaration, so a
/// partially connected world is never handed out.
pub fn build_world(content: &ContentPack) -> Result<World, WorldError> {
    let mut rooms: SlotMap<RoomId, Room> = SlotMap::with_key();
    let mut index = HashMap::with_capacity(content.rooms.len());

    for def in &content.rooms {
        if index.contains_key(def.name) {
            return Err(WorldError::DuplicateRoom { name: def.name.to_string() });
        }
        let enemies = def
            .enemies
            .iter()
            .map(|enemy| {
                if enemy.attack < 0 || enemy.health <= 0 {
                    return Err(WorldError::InvalidEnemy {
                        room: def.name.to_string(),
                        name: enemy.name.to_string(),
                        attack: enemy.attack,
                        health: enemy.health,
                    });
                }
                Ok(Enemy::from(enemy))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let id = rooms.insert(Room {
            name: def.name.to_string(),
            description: def.description.to_string(),
            enemies,
            exits: BTreeMap::new(),
            goal: def.goal,
        });
        index.insert(def.name.to_string(), id);
    }

    let entry = content
        .rooms
        .first()
        .and_then(|def| index.get(def.name).copied())
        .ok_or(WorldError::EmptyRegistry)?;

    for (declaration, connection) in content.connections.iter().enumerate() {
        let from = lookup(&index, connection.from, declaration, connection)?;
        let to = lookup(&index, connection.to, declaration, connection)?;
        let exit =
            ExitSpec::parse(connection.exit).ok_or_else(|| WorldError::UnknownExit {
                declaration,
                keyword: connection.exit.to_string(),
                from: connection.from.to_string(),
                to: connection.to.to_string(),
            })?;

        // Later declarations overwrite earlier ones on the same (room, direction).
        match exit {
            ExitSpec::All => {
                for direction in Direction::ALL {
                    rooms[from].exits.insert(direction, to);
                }
            }
            ExitSpec::Toward(direction) => {
                rooms[from].exits.insert(direction, to);
                rooms[to].exits.insert(direction.opposite(), from);
            }
        }
    }

    let world = World { rooms, entry, index };
    debug!(rooms = world.len(), edges = world.edge_count(), "world graph built");
    Ok(world)
}

fn lookup(
    index: &HashMap<String, RoomId>,
    name: &str,
    declaration: usize,
    connection: &ConnectionDef,
) -> Result<RoomId, WorldError> {
    index.get(name).copied().ok_or_else(|| WorldError::UnknownRoom {
        declaration,
        name: name.to_string(),
        from: connection.from.to_string(),
        to: connection.to.to_string(),
    })
}
