//! The Victory Road map: thirteen fixed rooms joined by compass exits.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Direction> {
        let wanted = input.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomId {
    Entrance,
    Mid,
    PathW,
    PathE,
    Trainer1,
    Trainer2,
    Trainer3,
    DeadEnd,
    Trivia1,
    Trivia2,
    LifePoint,
    TrainerBoss,
    BossExit,
}

impl RoomId {
    pub const ALL: [RoomId; 13] = [
        RoomId::Entrance,
        RoomId::Mid,
        RoomId::PathW,
        RoomId::PathE,
        RoomId::Trainer1,
        RoomId::Trainer2,
        RoomId::Trainer3,
        RoomId::DeadEnd,
        RoomId::Trivia1,
        RoomId::Trivia2,
        RoomId::LifePoint,
        RoomId::TrainerBoss,
        RoomId::BossExit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoomId::Entrance => "Entrance",
            RoomId::Mid => "Mid",
            RoomId::PathW => "PathW",
            RoomId::PathE => "PathE",
            RoomId::Trainer1 => "Trainer1",
            RoomId::Trainer2 => "Trainer2",
            RoomId::Trainer3 => "Trainer3",
            RoomId::DeadEnd => "DeadEnd",
            RoomId::Trivia1 => "Trivia1",
            RoomId::Trivia2 => "Trivia2",
            RoomId::LifePoint => "LifePoint",
            RoomId::TrainerBoss => "TrainerBoss",
            RoomId::BossExit => "BossExit",
        }
    }

    /// What happens when the traveler walks in.
    pub fn kind(self) -> RoomKind {
        match self {
            RoomId::TrainerBoss => RoomKind::Boss,
            RoomId::LifePoint => RoomKind::LifePoint,
            RoomId::Trivia1 | RoomId::Trivia2 => RoomKind::Trivia,
            RoomId::BossExit => RoomKind::Exit,
            r if r.name().starts_with("Trainer") => RoomKind::Trainer,
            _ => RoomKind::Plain,
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Plain,
    Trainer,
    Boss,
    LifePoint,
    Trivia,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Exits in display order.
    pub exits: Vec<(Direction, RoomId)>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            exits: Vec::new(),
        }
    }

    pub fn with_exit(mut self, direction: Direction, to: RoomId) -> Self {
        self.exits.retain(|(d, _)| *d != direction);
        self.exits.push((direction, to));
        self
    }

    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, to)| *to)
    }
}

/// Immutable adjacency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    rooms: HashMap<RoomId, Room>,
    start: RoomId,
    exit: RoomId,
}

impl WorldMap {
    pub fn canonical() -> Self {
        use Direction::*;
        use RoomId::*;

        let rooms = vec![
            Room::new(Entrance).with_exit(North, Mid),
            Room::new(Mid)
                .with_exit(North, Trainer1)
                .with_exit(South, Entrance)
                .with_exit(East, PathE)
                .with_exit(West, PathW),
            Room::new(PathW)
                .with_exit(North, LifePoint)
                .with_exit(South, Trainer2)
                .with_exit(East, Mid),
            Room::new(PathE)
                .with_exit(East, DeadEnd)
                .with_exit(South, Trivia1)
                .with_exit(West, Mid),
            Room::new(Trainer1)
                .with_exit(East, Trainer3)
                .with_exit(South, Mid),
            Room::new(Trainer2).with_exit(North, PathW),
            Room::new(Trainer3)
                .with_exit(North, Trivia2)
                .with_exit(West, Trainer1),
            Room::new(DeadEnd).with_exit(West, PathE),
            Room::new(Trivia1).with_exit(North, PathE),
            Room::new(Trivia2)
                .with_exit(North, TrainerBoss)
                .with_exit(South, Trainer3),
            Room::new(LifePoint).with_exit(South, PathW),
            Room::new(TrainerBoss).with_exit(North, BossExit),
            Room::new(BossExit),
        ];

        Self {
            rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
            start: Entrance,
            exit: BossExit,
        }
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn exit(&self) -> RoomId {
        self.exit
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Rooms in canonical order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        RoomId::ALL.iter().filter_map(|id| self.rooms.get(id))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn exits(&self, id: RoomId) -> &[(Direction, RoomId)] {
        self.rooms
            .get(&id)
            .map(|r| r.exits.as_slice())
            .unwrap_or(&[])
    }

    pub fn neighbor(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.rooms.get(&id).and_then(|r| r.exit(direction))
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_kinds_follow_names() {
        assert_eq!(RoomId::Trainer1.kind(), RoomKind::Trainer);
        assert_eq!(RoomId::Trainer2.kind(), RoomKind::Trainer);
        assert_eq!(RoomId::Trainer3.kind(), RoomKind::Trainer);
        assert_eq!(RoomId::TrainerBoss.kind(), RoomKind::Boss);
        assert_eq!(RoomId::LifePoint.kind(), RoomKind::LifePoint);
        assert_eq!(RoomId::Trivia2.kind(), RoomKind::Trivia);
        assert_eq!(RoomId::BossExit.kind(), RoomKind::Exit);
        assert_eq!(RoomId::DeadEnd.kind(), RoomKind::Plain);
    }

    #[test]
    fn direction_parse_ignores_case_and_whitespace() {
        assert_eq!(Direction::parse("NORTH"), Some(Direction::North));
        assert_eq!(Direction::parse(" West\t"), Some(Direction::West));
        assert_eq!(Direction::parse("n"), None);
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn with_exit_replaces_duplicate_direction() {
        let room = Room::new(RoomId::Mid)
            .with_exit(Direction::North, RoomId::Trainer1)
            .with_exit(Direction::North, RoomId::Trainer2);
        assert_eq!(room.exits.len(), 1);
        assert_eq!(room.exit(Direction::North), Some(RoomId::Trainer2));
    }
}
