use adventure_core::journal::InputJournal;
use adventure_core::replay::replay_to_end;
use adventure_core::{ContentPack, Game, PlayerConfig, RunOutcome};

fn crate_route_journal(player: PlayerConfig) -> InputJournal {
    let mut journal = InputJournal::new(&ContentPack::default(), player);
    journal.append_move("north");
    journal.append_move("north");
    journal.append_fight("green tentacle monster");
    journal.append_move("west");
    journal.append_move("north");
    journal.append_move("east");
    journal.append_fight("slimy creature");
    journal
}

#[test]
fn test_determinism_identical_journals_produce_same_hash() {
    let content = ContentPack::default();
    let journal1 = crate_route_journal(PlayerConfig::default());
    let journal2 = crate_route_journal(PlayerConfig::default());

    let result1 = replay_to_end(&content, &journal1).expect("Replay 1 failed");
    let result2 = replay_to_end(&content, &journal2).expect("Replay 2 failed");

    assert_eq!(
        result1.final_snapshot_hash, result2.final_snapshot_hash,
        "Identical runs must produce identical hashes"
    );
    assert_eq!(result1.final_room, "Specimen");
    assert_eq!(result1.final_player_health, 88);
}

#[test]
fn test_determinism_different_player_stats_produce_different_hashes() {
    let content = ContentPack::default();
    let strong = crate_route_journal(PlayerConfig { health: 100, attack: 10 });
    let weak = crate_route_journal(PlayerConfig { health: 100, attack: 3 });

    let result1 = replay_to_end(&content, &strong).expect("Replay 1 failed");
    let result2 = replay_to_end(&content, &weak).expect("Replay 2 failed");

    assert_ne!(result1.final_snapshot_hash, result2.final_snapshot_hash);
    // The weak player never clears the crate, so every later move is refused.
    assert_eq!(result2.final_room, "Crate");
    assert!(result2.refused_inputs > 0);
}

#[test]
fn test_deterministic_log_sequence_for_fixed_commands() {
    fn run_trace() -> Vec<String> {
        let mut game =
            Game::new(&ContentPack::default(), PlayerConfig::default()).expect("campaign builds");
        let mut trace = Vec::new();
        for direction in ["north", "west", "north", "east"] {
            trace.push(format!("{:?}", game.move_player(direction).map(|_| game_room(&game))));
        }
        while game.outcome().is_none() {
            trace.push(format!("{:?}", game.fight("space pirate")));
        }
        trace.extend(game.log().iter().map(|event| format!("{event:?}")));
        trace
    }

    fn game_room(game: &Game) -> String {
        game.current_room_name().to_string()
    }

    let left = run_trace();
    let right = run_trace();
    assert_eq!(left, right, "same commands should produce the same log trace");
}

#[test]
fn test_pirate_ambush_replays_to_defeat() {
    let mut journal = InputJournal::new(&ContentPack::default(), PlayerConfig::default());
    for direction in ["north", "west", "north", "east"] {
        journal.append_move(direction);
    }
    for _ in 0..5 {
        journal.append_fight("space pirate");
    }

    let result = replay_to_end(&ContentPack::default(), &journal).expect("replay succeeds");

    assert_eq!(result.final_outcome, Some(RunOutcome::Defeat));
    assert_eq!(result.final_player_health, 0);
}
