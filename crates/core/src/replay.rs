use thiserror::Error;
use tracing::debug;

use crate::{
    RunOutcome,
    content::ContentPack,
    game::{Game, SetupError},
    journal::{InputJournal, InputPayload, JOURNAL_FORMAT_VERSION},
    types::GameError,
};

#[derive(Debug, PartialEq, Error)]
pub enum ReplayError {
    #[error("unsupported journal format version {0}")]
    UnsupportedFormat(u16),
    #[error("journal content hash {journal:#018x} does not match current content {current:#018x}")]
    ContentMismatch { journal: u64, current: u64 },
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("input #{seq} arrives after the session already ended")]
    InputAfterSessionEnd { seq: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_outcome: Option<RunOutcome>,
    pub final_room: String,
    pub final_player_health: i32,
    pub final_snapshot_hash: u64,
    pub applied_inputs: usize,
    /// Inputs the session answered with a recoverable refusal (blocked, no exit, no target).
    pub refused_inputs: usize,
}

pub fn replay_to_end(
    content: &ContentPack,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat(journal.format_version));
    }
    let current = content.content_hash();
    if journal.content_hash != current {
        return Err(ReplayError::ContentMismatch { journal: journal.content_hash, current });
    }

    let mut game = Game::new(content, journal.player)?;
    let mut refused_inputs = 0;

    for record in &journal.inputs {
        let result = match &record.payload {
            InputPayload::Move { direction } => game.move_player(direction).map(|_| ()),
            InputPayload::Fight { target } => game.fight(target).map(|_| ()),
        };
        match result {
            Ok(()) => {}
            Err(GameError::SessionOver) => {
                return Err(ReplayError::InputAfterSessionEnd { seq: record.seq });
            }
            Err(err) => {
                // Refusals are ordinary play, not replay failures.
                debug!(seq = record.seq, %err, "input refused during replay");
                refused_inputs += 1;
            }
        }
    }

    Ok(ReplayResult {
        final_outcome: game.outcome(),
        final_room: game.current_room_name().to_string(),
        final_player_health: game.player().health,
        final_snapshot_hash: game.snapshot_hash(),
        applied_inputs: journal.inputs.len(),
        refused_inputs,
    })
}
