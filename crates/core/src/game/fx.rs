//! Transient combat signals for renderers.
//! Combat arms them; `decay` runs once per frame outside the phase sequencer.

use super::*;
use crate::content::fx::{BATTLE_FRAMES, ENEMY_INFO_FRAMES, HIT_FRAMES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleFx {
    /// Player cell when the exchange started.
    pub pos: Pos,
    pub enemy: EnemyId,
    pub timer: u32,
}

/// Stat panel for the last enemy fought.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnemyInfoFx {
    #[default]
    Hidden,
    /// Shown while the enemy lives.
    Tracking { enemy: EnemyId, kind: EnemyKind },
    /// Counting down after the enemy died.
    Lingering { kind: EnemyKind, timer: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitMarker {
    pub pos: Pos,
    pub timer: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FxState {
    pub battle: Option<BattleFx>,
    pub enemy_info: EnemyInfoFx,
    pub hits: Vec<HitMarker>,
}

impl FxState {
    pub fn battle_active(&self) -> bool {
        self.battle.is_some()
    }

    pub(super) fn start_battle(&mut self, player_pos: Pos, enemy: EnemyId, kind: EnemyKind) {
        self.battle = Some(BattleFx { pos: player_pos, enemy, timer: BATTLE_FRAMES });
        self.enemy_info = EnemyInfoFx::Tracking { enemy, kind };
    }

    pub(super) fn push_hit(&mut self, pos: Pos) {
        self.hits.push(HitMarker { pos, timer: HIT_FRAMES });
    }

    pub(super) fn decay(&mut self, is_alive: impl Fn(EnemyId) -> bool) {
        if let Some(battle) = &mut self.battle {
            battle.timer = battle.timer.saturating_sub(1);
            if battle.timer == 0 {
                self.battle = None;
            }
        }

        self.enemy_info = match self.enemy_info {
            EnemyInfoFx::Tracking { enemy, kind } if !is_alive(enemy) => {
                EnemyInfoFx::Lingering { kind, timer: ENEMY_INFO_FRAMES }
            }
            EnemyInfoFx::Lingering { timer, .. } if timer <= 1 => EnemyInfoFx::Hidden,
            EnemyInfoFx::Lingering { kind, timer } => {
                EnemyInfoFx::Lingering { kind, timer: timer - 1 }
            }
            other => other,
        };

        for hit in &mut self.hits {
            hit.timer = hit.timer.saturating_sub(1);
        }
        self.hits.retain(|hit| hit.timer > 0);
    }
}

impl Game {
    pub(super) fn update_fx(&mut self) {
        let enemies = &self.enemies;
        self.fx.decay(|id| enemies.is_alive(id));
    }
}
