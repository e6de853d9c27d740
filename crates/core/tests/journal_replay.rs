use adventure_core::journal::InputJournal;
use adventure_core::replay::{ReplayError, replay_to_end};
use adventure_core::{ContentPack, Game, PlayerConfig, RunOutcome};

/// Play a session live while journaling, push the journal through JSON, and
/// replay it. The final snapshot hash must match the live session.
#[test]
fn test_json_journal_replay_equivalence() {
    let content = ContentPack::default();
    let player = PlayerConfig { health: 40, attack: 6 };
    let mut game = Game::new(&content, player).unwrap();
    let mut journal = InputJournal::new(&content, player);

    let script: [(&str, &str); 8] = [
        ("go", "north"),
        ("go", "north"),
        ("go", "south"),
        ("attack", "green tentacle monster"),
        ("go", "south"),
        ("go", "east"),
        ("go", "north"),
        ("go", "north"),
    ];
    for (verb, word) in script {
        if verb == "go" {
            journal.append_move(word);
            let _ = game.move_player(word);
        } else {
            journal.append_fight(word);
            let _ = game.fight(word);
        }
    }
    assert_eq!(game.current_room_name(), "Victory");
    assert_eq!(game.outcome(), None);

    let json = serde_json::to_string_pretty(&journal).unwrap();
    let loaded: InputJournal = serde_json::from_str(&json).unwrap();
    let result = replay_to_end(&content, &loaded).unwrap();

    assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
    assert_eq!(result.final_outcome, None);
    assert_eq!(result.final_room, "Victory");
    assert_eq!(result.final_player_health, 32);
    assert_eq!(result.applied_inputs, 8);
    assert_eq!(result.refused_inputs, 1);
}

#[test]
fn test_replay_rejects_journal_from_other_content() {
    let mut content = ContentPack::default();
    let journal = InputJournal::new(&content, PlayerConfig::default());
    content.rooms[0].description = "A different cockpit.";

    let err = replay_to_end(&content, &journal).unwrap_err();
    assert!(matches!(err, ReplayError::ContentMismatch { .. }));
}

#[test]
fn test_replay_continues_past_the_goal_room() {
    let content = ContentPack::default();
    let mut journal = InputJournal::new(&content, PlayerConfig::default());
    for direction in ["north", "east", "north", "north", "south", "west"] {
        journal.append_move(direction);
    }

    let result = replay_to_end(&content, &journal).unwrap();
    assert_eq!(result.final_room, "Victory");
    assert_eq!(result.final_outcome, None);
    assert_eq!(result.refused_inputs, 2);
}

#[test]
fn test_replay_rejects_inputs_after_the_player_died() {
    let content = ContentPack::default();
    let mut journal = InputJournal::new(&content, PlayerConfig { health: 20, attack: 10 });
    for direction in ["north", "west", "north", "east"] {
        journal.append_move(direction);
    }
    journal.append_fight("space pirate");
    journal.append_move("west");

    let err = replay_to_end(&content, &journal).unwrap_err();
    assert_eq!(err, ReplayError::InputAfterSessionEnd { seq: 5 });

    journal.inputs.pop();
    let result = replay_to_end(&content, &journal).unwrap();
    assert_eq!(result.final_outcome, Some(RunOutcome::Defeat));
}
