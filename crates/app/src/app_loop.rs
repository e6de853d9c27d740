use std::io::{self, BufRead, Write};

use adventure_core::{Game, InputJournal, RunOutcome};
use tracing::{debug, warn};

use crate::command::{self, Command};
use crate::ui_text;

/// How an interactive session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    Finished(RunOutcome),
}

pub struct AppState {
    /// Every `go`/`attack` command handed to the game, refused ones included.
    pub journal: InputJournal,
}

impl AppState {
    pub fn new(journal: InputJournal) -> Self {
        Self { journal }
    }

    /// Drives the session one line at a time until quit, end of input or a terminal outcome.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        game: &mut Game,
        input: R,
        output: &mut W,
    ) -> io::Result<SessionEnd> {
        writeln!(output, "{}", game.current_room_description())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = command::parse(&line) else {
                continue;
            };
            if let Some(end) = self.handle(game, command, output)? {
                output.flush()?;
                return Ok(end);
            }
            output.flush()?;
        }

        Ok(SessionEnd::EndOfInput)
    }

    /// Applies one command and writes its text. Returns the end reason once the session stops.
    pub fn handle<W: Write>(
        &mut self,
        game: &mut Game,
        command: Command,
        output: &mut W,
    ) -> io::Result<Option<SessionEnd>> {
        debug!(?command, "command received");
        let lines = match command {
            Command::Quit => return Ok(Some(SessionEnd::Quit)),
            Command::MissingDirection => vec![ui_text::MISSING_DIRECTION.to_string()],
            Command::MissingTarget => vec![ui_text::MISSING_TARGET.to_string()],
            Command::Unknown(verb) => {
                warn!(%verb, "unknown command");
                vec![ui_text::UNKNOWN_COMMAND.to_string()]
            }
            Command::Go(direction) => {
                self.journal.append_move(&direction);
                let result = game.move_player(&direction);
                // Movement output starts with a blank line.
                writeln!(output)?;
                ui_text::move_lines(game, &result)
            }
            Command::Attack(target) => {
                self.journal.append_fight(&target);
                let result = game.fight(&target);
                ui_text::fight_lines(game, &result)
            }
        };

        for line in lines {
            writeln!(output, "{line}")?;
        }

        Ok(game.outcome().map(SessionEnd::Finished))
    }
}
