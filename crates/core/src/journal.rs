use serde::{Deserialize, Serialize};

use crate::content::ContentPack;
use crate::state::PlayerConfig;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub content_hash: u64,
    pub player: PlayerConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Move { direction: String },
    Fight { target: String },
}

impl InputJournal {
    pub fn new(content: &ContentPack, player: PlayerConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: env!("CARGO_PKG_VERSION").to_string(),
            content_hash: content.content_hash(),
            player,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }

    pub fn append_move(&mut self, direction: &str) {
        self.append(InputPayload::Move { direction: direction.to_string() });
    }

    pub fn append_fight(&mut self, target: &str) {
        self.append(InputPayload::Fight { target: target.to_string() });
    }
}
