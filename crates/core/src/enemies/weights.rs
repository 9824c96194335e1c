//! Progress-driven spawn weights with per-kind hard gates.

use crate::content::spawn::{
    BASE_WEIGHT, KILL_SCALE, KILL_WEIGHT, LEVEL_SCALE, LEVEL_WEIGHT, MIN_WEIGHT, RARITY_STEP,
    SWORD_BONUS, TIME_SCALE_TURNS, TIME_WEIGHT, UNLOCK_SPAN, WEIGHT_SLOPE,
};
use crate::content::{ENEMY_TABLE, HARD_GATES, HardGate};
use crate::player::Player;
use crate::rng::{GameRng, unit_f64};
use crate::types::EnemyKind;

const KIND_COUNT: usize = ENEMY_TABLE.len();

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnProgress {
    pub turns: u64,
    pub level: u32,
    pub kills: u32,
    pub has_weapon: bool,
}

impl SpawnProgress {
    pub fn of(player: &Player, turns: u64) -> Self {
        Self { turns, level: player.level, kills: player.kill_count, has_weapon: player.has_weapon }
    }
}

/// Blended run progress in `[0, 1]`.
pub fn progress(p: &SpawnProgress) -> f64 {
    let time = (p.turns as f64 / TIME_SCALE_TURNS).min(1.0);
    let level = (f64::from(p.level.saturating_sub(1)) / LEVEL_SCALE).min(1.0);
    let kills = (f64::from(p.kills) / KILL_SCALE).min(1.0);
    let sword = if p.has_weapon { SWORD_BONUS } else { 0.0 };
    (TIME_WEIGHT * time + LEVEL_WEIGHT * level + KILL_WEIGHT * kills + sword).min(1.0)
}

/// Level and kill thresholds are alternatives; the sword requirement is not.
pub fn is_unlocked(gate: &HardGate, p: &SpawnProgress) -> bool {
    let sword_ok = !gate.needs_sword || p.has_weapon;
    let level_ok = gate.min_level.is_none_or(|min| p.level >= min);
    let kills_ok = gate.min_kills.is_none_or(|min| p.kills >= min);
    sword_ok && (level_ok || kills_ok)
}

/// Current per-kind weights, index-aligned with `ENEMY_TABLE`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnWeights {
    weights: [f64; KIND_COUNT],
}

impl SpawnWeights {
    pub fn recompute(&mut self, p: &SpawnProgress) {
        let prog = progress(p);
        for (index, weight) in self.weights.iter_mut().enumerate() {
            let required = index as f64 / (KIND_COUNT - 1) as f64 * UNLOCK_SPAN;
            *weight = if !is_unlocked(&HARD_GATES[index], p) || prog < required {
                0.0
            } else {
                let decayed = (BASE_WEIGHT - (prog - required) * WEIGHT_SLOPE).max(MIN_WEIGHT);
                decayed / (1.0 + index as f64 * RARITY_STEP)
            };
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn weight_of(&self, kind: EnemyKind) -> f64 {
        ENEMY_TABLE
            .iter()
            .position(|template| template.kind == kind)
            .map_or(0.0, |index| self.weights[index])
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Weighted draw over the table. An all-zero table yields the first kind
    /// without consuming randomness.
    pub fn pick(&self, rng: &mut GameRng) -> usize {
        let total = self.total();
        if total <= 0.0 {
            return 0;
        }
        let mut remaining = unit_f64(rng) * total;
        for (index, weight) in self.weights.iter().enumerate() {
            remaining -= weight;
            if remaining <= 0.0 {
                return index;
            }
        }
        0
    }
}
