//! End-to-end routes through the starship campaign.

use super::support::*;

#[test]
fn specimen_route_reaches_victory() {
    let mut game = campaign_game();
    walk(&mut game, &["north", "north"]);
    game.fight("green tentacle monster").unwrap();
    walk(&mut game, &["west", "north", "east"]);
    assert_eq!(game.current_room_name(), keys::SPECIMEN);

    let outcome = game.fight("slimy creature").unwrap();
    assert_eq!(outcome, FightOutcome::EnemyDefeated { enemy_index: 0, room_cleared: true });

    walk(&mut game, &["west", "south", "west"]);
    assert_eq!(game.current_room_name(), keys::VICTORY);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.player().health, 88);
}

#[test]
fn pirate_ambush_is_fatal_at_default_stats() {
    let mut game = campaign_game();
    walk(&mut game, &["north", "west", "north", "east"]);
    assert_eq!(game.current_room_name(), keys::PIRATES);
    assert!(matches!(game.log().last(), Some(LogEvent::Ambushed { living_enemies: 5, .. })));

    let mut last = None;
    while game.outcome().is_none() {
        last = Some(game.fight("space pirate").unwrap());
    }

    assert_eq!(last, Some(FightOutcome::PlayerDefeated { enemy_index: 2 }));
    assert_eq!(game.player().health, 0);
    assert_eq!(enemy_healths(&game), vec![0, 0, 4, 14, 14]);
    assert_eq!(game.turns(), 9);
}

#[test]
fn airlock_south_leads_back_to_the_specimen() {
    let mut game = campaign_game();
    walk(&mut game, &["north", "west"]);
    assert_eq!(game.current_room_name(), keys::AIRLOCK);

    let MoveOutcome::Entered { ambush, .. } = game.move_player("south").unwrap();
    assert!(ambush);
    assert_eq!(game.current_room_name(), keys::SPECIMEN);
}

#[test]
fn identical_sessions_hash_identically() {
    let route = ["north", "north"];
    let mut left = campaign_game();
    let mut right = campaign_game();
    walk(&mut left, &route);
    walk(&mut right, &route);
    left.fight("green tentacle monster").unwrap();
    right.fight("green tentacle monster").unwrap();

    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    assert_eq!(left.log(), right.log());
}
