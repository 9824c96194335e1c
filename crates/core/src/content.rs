//! Fixed content: enemy stat blocks, unlock gates, loot odds, and starting items.

use crate::types::{EnemyKind, ItemKind, Pos};

pub struct EnemyTemplate {
    pub kind: EnemyKind,
    pub hp: i32,
    pub str: i32,
    pub def: i32,
    pub exp: u32,
}

/// Binary unlock precondition, independent of the progress curve.
/// A missing threshold counts as met.
pub struct HardGate {
    pub needs_sword: bool,
    pub min_level: Option<u32>,
    pub min_kills: Option<u32>,
}

pub const ENEMY_TABLE: [EnemyTemplate; 8] = [
    EnemyTemplate { kind: EnemyKind::Bat, hp: 8, str: 5, def: 1, exp: 2 },
    EnemyTemplate { kind: EnemyKind::Slime, hp: 12, str: 10, def: 2, exp: 3 },
    EnemyTemplate { kind: EnemyKind::Goblin, hp: 18, str: 15, def: 4, exp: 4 },
    EnemyTemplate { kind: EnemyKind::Wizard, hp: 25, str: 20, def: 6, exp: 5 },
    EnemyTemplate { kind: EnemyKind::Skull, hp: 35, str: 25, def: 9, exp: 6 },
    EnemyTemplate { kind: EnemyKind::Knight, hp: 50, str: 30, def: 12, exp: 8 },
    EnemyTemplate { kind: EnemyKind::Lizardman, hp: 70, str: 35, def: 16, exp: 10 },
    EnemyTemplate { kind: EnemyKind::Ogre, hp: 85, str: 40, def: 18, exp: 12 },
];

pub const HARD_GATES: [HardGate; 8] = [
    HardGate { needs_sword: false, min_level: None, min_kills: None },
    HardGate { needs_sword: false, min_level: Some(2), min_kills: Some(3) },
    HardGate { needs_sword: true, min_level: Some(3), min_kills: Some(8) },
    HardGate { needs_sword: true, min_level: Some(4), min_kills: Some(15) },
    HardGate { needs_sword: true, min_level: Some(5), min_kills: Some(25) },
    HardGate { needs_sword: true, min_level: Some(6), min_kills: Some(30) },
    HardGate { needs_sword: true, min_level: Some(7), min_kills: Some(35) },
    HardGate { needs_sword: true, min_level: Some(8), min_kills: Some(40) },
];

pub const DRAGON: EnemyTemplate =
    EnemyTemplate { kind: EnemyKind::Dragon, hp: 120, str: 44, def: 21, exp: 30 };

pub struct DropEntry {
    pub kind: Option<ItemKind>,
    pub prob: f64,
}

/// Death-drop lottery, read cumulatively.
pub const DROP_TABLE: [DropEntry; 4] = [
    DropEntry { kind: None, prob: 0.30 },
    DropEntry { kind: Some(ItemKind::Coin), prob: 0.55 },
    DropEntry { kind: Some(ItemKind::Gem), prob: 0.12 },
    DropEntry { kind: Some(ItemKind::Cross), prob: 0.03 },
];

/// Hand-placed starting items, skipped when their cell is taken.
pub const FIXED_ITEMS: [(ItemKind, Pos); 13] = [
    (ItemKind::Coin, Pos::new(12, 12)),
    (ItemKind::Coin, Pos::new(18, 8)),
    (ItemKind::Coin, Pos::new(22, 15)),
    (ItemKind::Coin, Pos::new(26, 6)),
    (ItemKind::Coin, Pos::new(15, 20)),
    (ItemKind::Coin, Pos::new(30, 18)),
    (ItemKind::Coin, Pos::new(10, 22)),
    (ItemKind::Coin, Pos::new(25, 10)),
    (ItemKind::Gem, Pos::new(14, 18)),
    (ItemKind::Gem, Pos::new(24, 8)),
    (ItemKind::Gem, Pos::new(31, 14)),
    (ItemKind::Gem, Pos::new(19, 20)),
    (ItemKind::Ring, Pos::new(16, 22)),
];

pub mod player {
    pub const START_HP: i32 = 20;
    pub const START_EXP_TO_NEXT: u32 = 5;
    pub const HP_PER_LEVEL: i32 = 8;
    pub const BASE_WEAPON_ATTACK: i32 = 4;
}

pub mod spawn {
    /// Graves tried per spawn cycle.
    pub const ATTEMPTS_WITH_SWORD: usize = 4;
    pub const ATTEMPTS_WITHOUT_SWORD: usize = 2;

    pub const TIME_SCALE_TURNS: f64 = 1800.0;
    pub const LEVEL_SCALE: f64 = 12.0;
    pub const KILL_SCALE: f64 = 80.0;
    pub const TIME_WEIGHT: f64 = 0.55;
    pub const LEVEL_WEIGHT: f64 = 0.30;
    pub const KILL_WEIGHT: f64 = 0.15;
    pub const SWORD_BONUS: f64 = 0.12;

    /// Share of the progress range over which kinds unlock.
    pub const UNLOCK_SPAN: f64 = 0.85;
    pub const BASE_WEIGHT: f64 = 140.0;
    pub const WEIGHT_SLOPE: f64 = 40.0;
    pub const MIN_WEIGHT: f64 = 5.0;
    pub const RARITY_STEP: f64 = 0.35;
}

pub mod fx {
    pub const BATTLE_FRAMES: u32 = 6;
    pub const HIT_FRAMES: u32 = 10;
    pub const ENEMY_INFO_FRAMES: u32 = 180;
}

pub fn template_for(kind: EnemyKind) -> &'static EnemyTemplate {
    match kind {
        EnemyKind::Dragon => &DRAGON,
        _ => ENEMY_TABLE.iter().find(|template| template.kind == kind).unwrap_or(&ENEMY_TABLE[0]),
    }
}
