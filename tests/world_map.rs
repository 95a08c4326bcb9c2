//! The Victory Road map is exactly the fixed 13-room table.

use victory_road::game::world::{Direction, RoomId, WorldMap};

fn expected_table() -> Vec<(RoomId, Vec<(Direction, RoomId)>)> {
    use Direction::*;
    use RoomId::*;
    vec![
        (Entrance, vec![(North, Mid)]),
        (
            Mid,
            vec![(North, Trainer1), (South, Entrance), (East, PathE), (West, PathW)],
        ),
        (PathW, vec![(North, LifePoint), (South, Trainer2), (East, Mid)]),
        (PathE, vec![(East, DeadEnd), (South, Trivia1), (West, Mid)]),
        (Trainer1, vec![(East, Trainer3), (South, Mid)]),
        (Trainer2, vec![(North, PathW)]),
        (Trainer3, vec![(North, Trivia2), (West, Trainer1)]),
        (DeadEnd, vec![(West, PathE)]),
        (Trivia1, vec![(North, PathE)]),
        (Trivia2, vec![(North, TrainerBoss), (South, Trainer3)]),
        (LifePoint, vec![(South, PathW)]),
        (TrainerBoss, vec![(North, BossExit)]),
        (BossExit, vec![]),
    ]
}

#[test]
fn canonical_map_matches_table() {
    let world = WorldMap::canonical();
    assert_eq!(world.len(), 13);
    assert_eq!(world.start(), RoomId::Entrance);
    assert_eq!(world.exit(), RoomId::BossExit);

    let actual: Vec<(RoomId, Vec<(Direction, RoomId)>)> = world
        .rooms()
        .map(|room| (room.id, room.exits.clone()))
        .collect();
    assert_eq!(actual, expected_table());
}

#[test]
fn construction_is_idempotent() {
    assert_eq!(WorldMap::canonical(), WorldMap::canonical());
    assert_eq!(WorldMap::default(), WorldMap::canonical());
}

#[test]
fn missing_directions_have_no_exit() {
    let world = WorldMap::canonical();
    assert_eq!(world.neighbor(RoomId::Entrance, Direction::South), None);
    assert_eq!(world.neighbor(RoomId::Trainer2, Direction::East), None);
    for direction in Direction::ALL {
        assert_eq!(world.neighbor(RoomId::BossExit, direction), None);
    }
    assert!(world.exits(RoomId::BossExit).is_empty());
}

#[test]
fn every_exit_leads_to_a_known_room() {
    let world = WorldMap::canonical();
    for room in world.rooms() {
        for (_, to) in &room.exits {
            assert!(world.room(*to).is_some(), "{} -> {} is dangling", room.id, to);
        }
    }
}

#[test]
fn boss_exit_is_reachable_from_entrance() {
    let world = WorldMap::canonical();
    let mut seen = vec![world.start()];
    let mut frontier = vec![world.start()];
    while let Some(room) = frontier.pop() {
        for (_, next) in world.exits(room) {
            if !seen.contains(next) {
                seen.push(*next);
                frontier.push(*next);
            }
        }
    }
    assert!(seen.contains(&RoomId::BossExit));
    assert_eq!(seen.len(), 13);
}
