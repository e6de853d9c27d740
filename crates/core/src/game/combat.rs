//! Attack exchanges and target selection.
//! Both sides hit simultaneously using pre-exchange values; health is clamped at zero.

use tracing::{debug, info};

use super::*;
use crate::state::Enemy;

impl Game {
    pub fn fight(&mut self, target: &str) -> Result<FightOutcome, GameError> {
        self.begin_turn()?;

        let room_id = self.state.player.room;
        let Some(enemy_index) = select_target(&self.state.world.room(room_id).enemies, target)
        else {
            debug!(requested = target, "no valid target");
            return Err(GameError::NoValidTarget { target: target.to_string() });
        };

        let player = &mut self.state.player;
        let room = self.state.world.room_mut(room_id);
        let enemy = &mut room.enemies[enemy_index];

        let damage_dealt = player.attack;
        let damage_taken = enemy.attack;
        enemy.health = enemy.health.saturating_sub(damage_dealt).max(0);
        player.health = player.health.saturating_sub(damage_taken).max(0);
        debug!(
            enemy = %enemy.name,
            enemy_index,
            enemy_health = enemy.health,
            player_health = player.health,
            "attack exchanged"
        );

        let player_down = player.health == 0;
        let enemy_down = enemy.health == 0;
        let room_cleared = !room.has_living_enemies();

        self.log.push(LogEvent::Attacked { enemy_index, damage_dealt, damage_taken });

        if player_down {
            info!(enemy_index, "player defeated");
            self.outcome = Some(RunOutcome::Defeat);
            self.log.push(LogEvent::PlayerDefeated { enemy_index });
            return Ok(FightOutcome::PlayerDefeated { enemy_index });
        }

        if enemy_down {
            self.log.push(LogEvent::EnemyDefeated { enemy_index });
            if room_cleared {
                self.log.push(LogEvent::RoomCleared { room: room_id });
            }
            return Ok(FightOutcome::EnemyDefeated { enemy_index, room_cleared });
        }

        Ok(FightOutcome::Exchanged { enemy_index, damage_dealt, damage_taken })
    }
}

/// Picks the first living enemy named `target`; on a miss, the last living enemy in
/// list order. `None` once nothing in the room is alive.
pub(crate) fn select_target(enemies: &[Enemy], target: &str) -> Option<usize> {
    enemies
        .iter()
        .position(|enemy| enemy.is_alive() && enemy.name == target)
        .or_else(|| enemies.iter().rposition(Enemy::is_alive))
}
