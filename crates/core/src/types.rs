use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct RoomId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Accepts only the exact lowercase direction words.
    pub fn parse(word: &str) -> Option<Direction> {
        Direction::ALL.into_iter().find(|direction| direction.as_str() == word)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exit keyword of a connection declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitSpec {
    Toward(Direction),
    /// Forward edge on every direction, with no automatic way back.
    All,
}

impl ExitSpec {
    pub const ALL_KEYWORD: &'static str = "all";

    pub fn parse(keyword: &str) -> Option<ExitSpec> {
        if keyword == Self::ALL_KEYWORD {
            return Some(ExitSpec::All);
        }
        Direction::parse(keyword).map(ExitSpec::Toward)
    }
}

/// Terminal session state. Only the player's death ends a session; quitting is up to
/// the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// `ambush` is set when the new room still holds living enemies.
    Entered { from: RoomId, to: RoomId, direction: Direction, ambush: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightOutcome {
    Exchanged { enemy_index: usize, damage_dealt: i32, damage_taken: i32 },
    EnemyDefeated { enemy_index: usize, room_cleared: bool },
    /// Terminal. Takes priority over the enemy falling in the same exchange.
    PlayerDefeated { enemy_index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterStats {
    pub name: String,
    pub health: i32,
    pub attack: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatStats {
    pub player_health: i32,
    pub player_attack: i32,
    /// Every enemy in the room in list order, defeated ones included.
    pub enemies: Vec<FighterStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot leave while enemies in the room are alive")]
    MovementBlocked,
    #[error("no exit `{direction}` from this room")]
    NoExit { direction: String },
    #[error("no valid target for `{target}`")]
    NoValidTarget { target: String },
    #[error("the session has already ended")]
    SessionOver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    WorldBuilt { rooms: usize, edges: usize },
    Moved { from: RoomId, to: RoomId, direction: Direction },
    MoveBlocked { room: RoomId },
    NoExit { room: RoomId, direction: String },
    Ambushed { room: RoomId, living_enemies: usize },
    Attacked { enemy_index: usize, damage_dealt: i32, damage_taken: i32 },
    EnemyDefeated { enemy_index: usize },
    RoomCleared { room: RoomId },
    PlayerDefeated { enemy_index: usize },
    GoalReached { room: RoomId },
}
