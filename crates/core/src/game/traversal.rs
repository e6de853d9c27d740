//! Room-to-room movement, gated by the enemies of the room being left.

use tracing::{debug, info};

use super::*;

impl Game {
    /// Moves the player through `direction`. Unknown words are treated as a missing exit.
    pub fn move_player(&mut self, direction: &str) -> Result<MoveOutcome, GameError> {
        self.begin_turn()?;

        let from = self.state.player.room;
        let room = self.state.world.room(from);
        if room.has_living_enemies() {
            debug!(room = %room.name, living = room.living_enemy_count(), "movement blocked");
            self.log.push(LogEvent::MoveBlocked { room: from });
            return Err(GameError::MovementBlocked);
        }

        let Some((direction, to)) = Direction::parse(direction)
            .and_then(|parsed| room.exit(parsed).map(|to| (parsed, to)))
        else {
            debug!(room = %room.name, direction, "no exit");
            self.log.push(LogEvent::NoExit { room: from, direction: direction.to_string() });
            return Err(GameError::NoExit { direction: direction.to_string() });
        };

        self.state.player.room = to;
        let entered = self.state.world.room(to);
        let ambush = entered.has_living_enemies();
        debug!(from = %room.name, to = %entered.name, %direction, ambush, "player moved");
        self.log.push(LogEvent::Moved { from, to, direction });

        if ambush {
            self.log.push(LogEvent::Ambushed { room: to, living_enemies: entered.living_enemy_count() });
        }
        // Reaching the goal is only a milestone; the session stays open.
        if entered.goal {
            info!(room = %entered.name, "goal reached");
            self.log.push(LogEvent::GoalReached { room: to });
        }

        Ok(MoveOutcome::Entered { from, to, direction, ambush })
    }
}
