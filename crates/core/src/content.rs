//! Static room registry for the starship campaign.
//! Definitions here are immutable; the world builder copies them into live state.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

pub mod keys {
    pub const COCKPIT: &str = "Cockpit";
    pub const CARGO: &str = "Cargo";
    pub const CRATE: &str = "Crate";
    pub const AIRLOCK: &str = "Airlock";
    pub const ASTEROID: &str = "Asteroid";
    pub const ENGINE_ROOM: &str = "EngineRoom";
    pub const CONTROL_ROOM: &str = "ControlRoom";
    pub const REPAIR_ROOM: &str = "RepairRoom";
    pub const VICTORY: &str = "Victory";
    pub const PLANET_SURFACE: &str = "PlanetSurface";
    pub const PIRATES: &str = "Pirates";
    pub const MEDICAL_BAY: &str = "MedicalBay";
    pub const LAB: &str = "Lab";
    pub const SPECIMEN: &str = "Specimen";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyDef {
    pub name: &'static str,
    pub attack: i32,
    pub health: i32,
    pub defeat_message: &'static str,
    pub win_message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomDef {
    pub name: &'static str,
    pub description: &'static str,
    pub enemies: Vec<EnemyDef>,
    /// Entering this room logs the campaign goal. Play continues afterwards.
    pub goal: bool,
}

/// One directed declaration. `exit` is a direction word or `"all"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionDef {
    pub from: &'static str,
    pub to: &'static str,
    pub exit: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentPack {
    /// Registry order matters: the first room is the entry room.
    pub rooms: Vec<RoomDef>,
    pub connections: Vec<ConnectionDef>,
}

fn room(name: &'static str, description: &'static str) -> RoomDef {
    RoomDef { name, description, enemies: Vec::new(), goal: false }
}

fn connect(from: &'static str, to: &'static str, exit: &'static str) -> ConnectionDef {
    ConnectionDef { from, to, exit }
}

const PIRATE_SQUAD_SIZE: usize = 5;

fn space_pirate() -> EnemyDef {
    EnemyDef {
        name: "space pirate",
        attack: 20,
        health: 14,
        defeat_message: "You manage to defeat the space pirate.",
        win_message: "The space pirates shoot youwitht heir lazers. You never had a chance. You lose!",
    }
}

impl ContentPack {
    pub fn build_default() -> Self {
        Self {
            rooms: vec![
                room(
                    keys::COCKPIT,
                    "You find yourself in the cockpit of a spaceship. The controls are blinking and beeping, indicating that the ship is ready for takeoff.",
                ),
                room(
                    keys::CARGO,
                    "You enter the ship’s cargo hold and find it filled with crates and containers. As you explore, you hear a strange noise coming from one of the crates.",
                ),
                RoomDef {
                    enemies: vec![EnemyDef {
                        name: "green tentacle monster",
                        attack: 8,
                        health: 5,
                        defeat_message: "You manage to beat up the alien creature and lock it up in the cage it came out of. You can now move forward.",
                        win_message: "The monster wraps you up with it's tentacles. You lose!",
                    }],
                    ..room(
                        keys::CRATE,
                        "You open the crate and find an alien creature inside! It has green skin, sharp teeth, and multiple tentacles.",
                    )
                },
                room(
                    keys::AIRLOCK,
                    "You find yourself in a dark, cramped airlock. The door to the spaceship is sealed shut, but you can see stars through the small window.",
                ),
                room(
                    keys::ASTEROID,
                    "You manage to open the airlock door and float out into space. You see a nearby asteroid and decide to explore it.",
                ),
                room(
                    keys::ENGINE_ROOM,
                    "You find yourself in the engine room of a spaceship. The hum of the engines fills the air as you make your way through the maze of pipes and machinery.",
                ),
                room(
                    keys::CONTROL_ROOM,
                    "You enter the ship’s control room and find it deserted. You see that the navigator is broken, and needs some tools to repair it.",
                ),
                room(
                    keys::REPAIR_ROOM,
                    "The obvious place to find those tools are the repair room. You find the tools that are needed to fix the navigator.",
                ),
                RoomDef {
                    goal: true,
                    ..room(
                        keys::VICTORY,
                        "You sit down at the controls and plot a course for home. The engines roar to life as the spaceship blasts off into hyperspace. Congratulations, you have won the game!",
                    )
                },
                room(
                    keys::PLANET_SURFACE,
                    "You step out of your spaceship and onto the surface of an alien planet. The air is thick and humid, and strange plants grow all around you.",
                ),
                RoomDef {
                    enemies: (0..PIRATE_SQUAD_SIZE).map(|_| space_pirate()).collect(),
                    ..room(
                        keys::PIRATES,
                        "As you land on the asteroid, you are attacked by a group of space pirates! They are armed with laser guns and jetpacks, and they demand that you hand over your spaceship.",
                    )
                },
                room(keys::MEDICAL_BAY, "You enter the medical bay of a spaceship."),
                room(
                    keys::LAB,
                    "You come across a laboratory filled with strange experiments and alien specimens.",
                ),
                RoomDef {
                    enemies: vec![EnemyDef {
                        name: "slimy creature",
                        attack: 4,
                        health: 10,
                        defeat_message: "You slam the slimy creature and flush it down. You can now move on.",
                        win_message: "You got swallowed by the creature. You lose.",
                    }],
                    ..room(
                        keys::SPECIMEN,
                        "As you examine one of the specimens, it suddenly comes to life! It is a large, slimy creature with multiple eyes and tentacles.",
                    )
                },
            ],
            connections: vec![
                connect(keys::COCKPIT, keys::CARGO, "north"),
                connect(keys::CARGO, keys::CRATE, "north"),
                connect(keys::CRATE, keys::PLANET_SURFACE, "east"),
                connect(keys::CRATE, keys::ENGINE_ROOM, "north"),
                connect(keys::CARGO, keys::AIRLOCK, "west"),
                connect(keys::AIRLOCK, keys::ASTEROID, "all"),
                connect(keys::ASTEROID, keys::PIRATES, "all"),
                connect(keys::CARGO, keys::ENGINE_ROOM, "east"),
                connect(keys::ENGINE_ROOM, keys::REPAIR_ROOM, "all"),
                connect(keys::REPAIR_ROOM, keys::VICTORY, "all"),
                connect(keys::CRATE, keys::MEDICAL_BAY, "west"),
                connect(keys::MEDICAL_BAY, keys::LAB, "all"),
                connect(keys::LAB, keys::SPECIMEN, "all"),
                connect(keys::SPECIMEN, keys::AIRLOCK, "north"),
                connect(keys::SPECIMEN, keys::ENGINE_ROOM, "west"),
                connect(keys::SPECIMEN, keys::ENGINE_ROOM, "east"),
            ],
        }
    }

    /// Stable fingerprint of every definition, used to pin journals to their content.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        for room in &self.rooms {
            write_str(&mut hasher, room.name);
            write_str(&mut hasher, room.description);
            hasher.write_u8(u8::from(room.goal));
            hasher.write_u64(room.enemies.len() as u64);
            for enemy in &room.enemies {
                write_str(&mut hasher, enemy.name);
                hasher.write_i32(enemy.attack);
                hasher.write_i32(enemy.health);
                write_str(&mut hasher, enemy.defeat_message);
                write_str(&mut hasher, enemy.win_message);
            }
        }
        for connection in &self.connections {
            write_str(&mut hasher, connection.from);
            write_str(&mut hasher, connection.to);
            write_str(&mut hasher, connection.exit);
        }
        hasher.finish()
    }
}

// Length prefix keeps adjacent fields from aliasing.
fn write_str(hasher: &mut Xxh3, value: &str) {
    hasher.write_u64(value.len() as u64);
    hasher.write(value.as_bytes());
}

impl Default for ContentPack {
    fn default() -> Self {
        Self::build_default()
    }
}
