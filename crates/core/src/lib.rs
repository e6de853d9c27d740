pub mod content;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod state;
pub mod types;

pub use content::ContentPack;
pub use game::{Game, SetupError};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use mapgen::{WorldError, build_world};
pub use replay::*;
pub use state::{Enemy, GameState, Player, PlayerConfig, Room, World};
pub use types::*;
