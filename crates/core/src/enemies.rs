//! Live enemy roster: the boss, grave spawning, and per-phase movement.
//! The manager never holds the player or world; callers pass them per call.

use slotmap::SlotMap;

use crate::config::GameConfig;
use crate::content::{DRAGON, EnemyTemplate};
use crate::player::Player;
use crate::types::{EnemyId, EnemyKind, Pos};

mod movement;
mod spawning;
mod weights;

pub use weights::{SpawnProgress, SpawnWeights, is_unlocked, progress};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub str: i32,
    pub def: i32,
    pub exp_reward: u32,
    pub immobile: bool,
}

impl Enemy {
    fn from_template(id: EnemyId, template: &EnemyTemplate, pos: Pos, immobile: bool) -> Self {
        Self {
            id,
            kind: template.kind,
            pos,
            hp: template.hp,
            max_hp: template.hp,
            str: template.str,
            def: template.def,
            exp_reward: template.exp,
            immobile,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

#[derive(Clone)]
pub struct EnemyManager {
    pub enemies: SlotMap<EnemyId, Enemy>,
    /// Live ids in spawn order, which is also movement order.
    spawn_order: Vec<EnemyId>,
    spawn_timer: u32,
    turn_count: u64,
    weights: SpawnWeights,
}

impl EnemyManager {
    pub fn new() -> Self {
        Self {
            enemies: SlotMap::with_key(),
            spawn_order: Vec::new(),
            spawn_timer: 0,
            turn_count: 0,
            weights: SpawnWeights::default(),
        }
    }

    /// Clears every enemy and timer, recomputes weights from the fresh player,
    /// and places the boss. Returns the boss id.
    pub fn reset(&mut self, config: &GameConfig, player: &Player) -> EnemyId {
        self.enemies.clear();
        self.spawn_order.clear();
        self.spawn_timer = 0;
        self.turn_count = 0;
        self.weights.recompute(&SpawnProgress::of(player, self.turn_count));
        self.insert(&DRAGON, config.boss_pos(), true)
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.get_mut(id)
    }

    pub fn is_alive(&self, id: EnemyId) -> bool {
        self.enemies.contains_key(id)
    }

    pub fn remove(&mut self, id: EnemyId) -> Option<Enemy> {
        self.spawn_order.retain(|&live| live != id);
        self.enemies.remove(id)
    }

    pub fn spawn_order(&self) -> &[EnemyId] {
        &self.spawn_order
    }

    pub fn live_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemy_at(&self, pos: Pos) -> Option<EnemyId> {
        self.enemies.iter().find(|(_, enemy)| enemy.pos == pos).map(|(id, _)| id)
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.enemy_at(pos).is_some()
    }

    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn weights(&self) -> &SpawnWeights {
        &self.weights
    }

    pub(crate) fn insert(&mut self, template: &EnemyTemplate, pos: Pos, immobile: bool) -> EnemyId {
        let id =
            self.enemies.insert_with_key(|id| Enemy::from_template(id, template, pos, immobile));
        self.spawn_order.push(id);
        id
    }
}

impl Default for EnemyManager {
    fn default() -> Self {
        Self::new()
    }
}
