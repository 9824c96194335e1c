use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

/// One of the four player move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Floor,
    Wall,
    Home,
    Grave,
    Door,
    Fire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    Coin,
    Gem,
    Sword,
    Ring,
    Cross,
    Key,
    Shield,
    Crown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnemyKind {
    Bat,
    Slime,
    Goblin,
    Wizard,
    Skull,
    Knight,
    Lizardman,
    Ogre,
    Dragon,
}

/// Simulation phase driven by the frame sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Player,
    Enemy,
    World,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    InProgress,
    Finished(RunOutcome),
}

/// Held direction keys. Updated on key-down/key-up edges by the input layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputKeys {
    pub const NONE: Self = Self { left: false, right: false, up: false, down: false };

    pub fn only(direction: Direction) -> Self {
        let mut keys = Self::NONE;
        match direction {
            Direction::Left => keys.left = true,
            Direction::Right => keys.right = true,
            Direction::Up => keys.up = true,
            Direction::Down => keys.down = true,
        }
        keys
    }

    /// Resolves simultaneous presses with left > right > up > down priority.
    pub fn priority_direction(self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }

    pub fn is_exactly(self, direction: Direction) -> bool {
        self == Self::only(direction)
    }
}

/// Everything the input layer hands the engine for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub keys: InputKeys,
    pub action: bool,
    pub restart: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageSource {
    Fire,
    Retaliation(EnemyKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    RunStarted { seed: u64 },
    EnemySpawned { enemy: EnemyId, kind: EnemyKind, pos: Pos },
    EnemyKilled { enemy: EnemyId, kind: EnemyKind },
    PlayerDamaged { amount: i32, source: DamageSource },
    LevelUp { level: u32 },
    ItemPickedUp { kind: ItemKind },
    ItemDropped { kind: ItemKind, pos: Pos },
    LootDropped { kind: ItemKind, pos: Pos },
    DoorUnlocked { pos: Pos },
    WallLifted { pos: Pos },
    WallPlaced { pos: Pos },
    Deposited { gold_spent: u32, hp_restored: i32 },
    GemOffered,
    CrownDelivered,
    FireExtinguished,
    PlayerDied,
}
