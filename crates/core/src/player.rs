//! Player record: stats, equipment slot, carry and auto-attack state.
//! World-touching actions live on `Game`; this module keeps the pure rules.

use crate::content::player::{BASE_WEAPON_ATTACK, HP_PER_LEVEL, START_EXP_TO_NEXT, START_HP};
use crate::types::{Direction, EnemyId, ItemKind, Pos};

/// Items that occupy the single equipment slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gear {
    Ring,
    Cross,
    Gem,
    Key,
    Shield,
    Crown,
}

impl Gear {
    pub fn from_item(kind: ItemKind) -> Option<Self> {
        match kind {
            ItemKind::Ring => Some(Self::Ring),
            ItemKind::Cross => Some(Self::Cross),
            ItemKind::Gem => Some(Self::Gem),
            ItemKind::Key => Some(Self::Key),
            ItemKind::Shield => Some(Self::Shield),
            ItemKind::Crown => Some(Self::Crown),
            ItemKind::Coin | ItemKind::Sword => None,
        }
    }

    pub fn item_kind(self) -> ItemKind {
        match self {
            Self::Ring => ItemKind::Ring,
            Self::Cross => ItemKind::Cross,
            Self::Gem => ItemKind::Gem,
            Self::Key => ItemKind::Key,
            Self::Shield => ItemKind::Shield,
            Self::Crown => ItemKind::Crown,
        }
    }

    /// Name the renderer uses for icon lookup.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Cross => "cross",
            Self::Gem => "gem",
            Self::Key => "key",
            Self::Shield => "shield",
            Self::Crown => "crown",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Equipment {
    #[default]
    Empty,
    Worn(Gear),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoAttack {
    #[default]
    Idle,
    Latched { dir: Direction, target: EnemyId },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WallCarry {
    #[default]
    Empty,
    /// `origin` is where the block was lifted from; kept for display only.
    Carrying { origin: Pos },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub level: u32,
    pub total_exp: u32,
    pub current_exp: u32,
    pub exp_to_next: u32,
    /// Permanent attack bonus from gems offered at home.
    pub base_str: i32,
    pub gold: u32,
    pub kill_count: u32,
    pub has_weapon: bool,
    pub equipment: Equipment,
    pub carry: WallCarry,
    pub move_timer: u32,
    /// Last attempted move as `(dx, dy)`.
    pub facing: (i32, i32),
    pub auto_attack: AutoAttack,
}

impl Player {
    pub fn new(origin: Pos) -> Self {
        Self {
            pos: origin,
            hp: START_HP,
            max_hp: START_HP,
            level: 1,
            total_exp: 0,
            current_exp: 0,
            exp_to_next: START_EXP_TO_NEXT,
            base_str: 0,
            gold: 0,
            kill_count: 0,
            has_weapon: false,
            equipment: Equipment::Empty,
            carry: WallCarry::Empty,
            move_timer: 0,
            facing: (0, 1),
            auto_attack: AutoAttack::Idle,
        }
    }

    pub fn reset(&mut self, origin: Pos) {
        *self = Self::new(origin);
    }

    pub fn attack(&self) -> i32 {
        if self.has_weapon { BASE_WEAPON_ATTACK + self.base_str } else { 0 }
    }

    /// Lifetime experience doubles as armour.
    pub fn defense(&self) -> i32 {
        self.total_exp as i32
    }

    pub fn is_wearing(&self, gear: Gear) -> bool {
        self.equipment == Equipment::Worn(gear)
    }

    pub fn has_ring(&self) -> bool {
        self.is_wearing(Gear::Ring)
    }

    pub fn has_cross(&self) -> bool {
        self.is_wearing(Gear::Cross)
    }

    pub fn has_key(&self) -> bool {
        self.is_wearing(Gear::Key)
    }

    pub fn has_shield(&self) -> bool {
        self.is_wearing(Gear::Shield)
    }

    pub fn has_crown(&self) -> bool {
        self.is_wearing(Gear::Crown)
    }

    pub fn is_carrying_wall(&self) -> bool {
        matches!(self.carry, WallCarry::Carrying { .. })
    }

    pub fn equipment_name(&self) -> Option<&'static str> {
        match self.equipment {
            Equipment::Empty => None,
            Equipment::Worn(gear) => Some(gear.name()),
        }
    }

    /// Fills the empty slot. Fails without change when something is already worn.
    pub fn equip(&mut self, gear: Gear) -> bool {
        if self.equipment != Equipment::Empty {
            return false;
        }
        self.equipment = Equipment::Worn(gear);
        true
    }

    /// Returns the damage actually taken; hp never drops below zero.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp - amount).max(0);
        before - self.hp
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Adds experience and applies every level-up it pays for. Returns the
    /// number of levels gained. Level-ups raise max hp but never heal.
    pub fn gain_exp(&mut self, exp: u32) -> u32 {
        self.total_exp += exp;
        self.current_exp += exp;
        let mut gained = 0;
        while self.current_exp >= self.exp_to_next {
            self.current_exp -= self.exp_to_next;
            self.level += 1;
            self.exp_to_next = next_level_threshold(self.level);
            self.max_hp += HP_PER_LEVEL;
            self.hp = self.hp.min(self.max_hp);
            gained += 1;
        }
        gained
    }

    /// Converts gold into healing, spending no more gold than the missing hp
    /// needs. Returns `(gold_spent, hp_restored)`.
    pub fn heal_with_gold(&mut self, hp_per_gold: i32) -> (u32, i32) {
        let missing = self.max_hp - self.hp;
        if missing <= 0 || self.gold == 0 {
            return (0, 0);
        }
        let needed = (missing as u32).div_ceil(hp_per_gold as u32);
        let spent = self.gold.min(needed);
        self.gold -= spent;
        let before = self.hp;
        self.hp = self.max_hp.min(self.hp + spent as i32 * hp_per_gold);
        (spent, self.hp - before)
    }
}

pub fn next_level_threshold(level: u32) -> u32 {
    (f64::from(level) * 1.5).floor() as u32 + 3
}
