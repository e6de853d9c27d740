//! Player-facing text for movement, combat and command feedback.

use adventure_core::{CombatStats, FightOutcome, Game, GameError, MoveOutcome};

pub const MISSING_DIRECTION: &str = "Go where?";
pub const MISSING_TARGET: &str = "Attack who?";
pub const UNKNOWN_COMMAND: &str = "You can't do that!";
pub const GAME_OVER: &str = "GAME OVER!";

pub fn stats_lines(stats: &CombatStats) -> Vec<String> {
    let mut lines = vec![format!(
        "Your stats: Health ({})  Attack ({})",
        stats.player_health, stats.player_attack
    )];
    lines.extend(stats.enemies.iter().map(|enemy| {
        format!("{} Stats: Health ({})  Attack ({})", enemy.name, enemy.health, enemy.attack)
    }));
    lines
}

pub fn error_line(error: &GameError) -> String {
    match error {
        GameError::MovementBlocked => "You can't run away! You must fight!".to_string(),
        GameError::NoExit { .. } => "You can't go there!".to_string(),
        GameError::NoValidTarget { .. } => "There is nothing left here to fight.".to_string(),
        GameError::SessionOver => "The game is already over.".to_string(),
    }
}

/// Text shown after a move; read after the move was applied.
pub fn move_lines(game: &Game, result: &Result<MoveOutcome, GameError>) -> Vec<String> {
    match result {
        Ok(MoveOutcome::Entered { ambush, .. }) => {
            let mut lines = vec![
                game.current_room_name().to_string(),
                game.current_room_description().to_string(),
            ];
            if *ambush {
                lines.extend(stats_lines(&game.combat_stats()));
            }
            lines
        }
        Err(err @ GameError::MovementBlocked) => {
            let mut lines = vec![error_line(err)];
            lines.extend(stats_lines(&game.combat_stats()));
            lines
        }
        Err(err) => vec![error_line(err)],
    }
}

/// Text shown after an attack; read after the exchange was applied.
pub fn fight_lines(game: &Game, result: &Result<FightOutcome, GameError>) -> Vec<String> {
    let enemies = &game.current_room().enemies;
    match result {
        Ok(FightOutcome::PlayerDefeated { enemy_index }) => {
            vec![enemies[*enemy_index].win_message.clone(), GAME_OVER.to_string()]
        }
        Ok(FightOutcome::EnemyDefeated { enemy_index, room_cleared }) => {
            let mut lines = vec![enemies[*enemy_index].defeat_message.clone()];
            if !room_cleared {
                lines.extend(stats_lines(&game.combat_stats()));
            }
            lines
        }
        Ok(FightOutcome::Exchanged { enemy_index, damage_dealt, damage_taken }) => {
            let name = &enemies[*enemy_index].name;
            let mut lines = vec![format!(
                "You attacked the {name}. You caused {damage_dealt} damage. You took {damage_taken} damage from the {name}"
            )];
            lines.extend(stats_lines(&game.combat_stats()));
            lines
        }
        Err(err) => vec![error_line(err)],
    }
}
