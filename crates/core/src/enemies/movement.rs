//! Single-axis chase and flee steps for the enemy phase.

use super::{Enemy, EnemyManager};
use crate::config::GameConfig;
use crate::grid::manhattan;
use crate::player::Player;
use crate::types::{EnemyId, Pos};
use crate::world::World;

impl EnemyManager {
    /// Moves every mobile enemy at most one cell, oldest spawn first.
    pub fn move_all(&mut self, world: &World, player: &Player, config: &GameConfig) {
        let ids = self.spawn_order().to_vec();
        for id in ids {
            self.step_enemy(id, world, player, config);
        }
    }

    fn step_enemy(&mut self, id: EnemyId, world: &World, player: &Player, config: &GameConfig) {
        let Some(enemy) = self.enemies.get(id) else {
            return;
        };
        if enemy.immobile {
            return;
        }
        let target = if wants_to_flee(enemy, player, config.fear_radius) {
            flee_point(enemy.pos, player.pos)
        } else {
            player.pos
        };
        let next = single_axis_step(enemy.pos, target);
        if next == enemy.pos
            || !world.in_bounds(next)
            || world.tile_blocks_for_enemy(next)
            || self.is_occupied(next)
            || next == player.pos
        {
            return;
        }
        self.enemies[id].pos = next;
    }
}

/// Cross-bearers scare nearby enemies; a player who would one-shot an enemy
/// without taking damage scares it from any distance.
pub fn wants_to_flee(enemy: &Enemy, player: &Player, fear_radius: u32) -> bool {
    let feared = player.has_cross() && manhattan(enemy.pos, player.pos) <= fear_radius;
    let outmatched = player.has_weapon
        && player.hp == player.max_hp
        && player.attack() - enemy.def >= enemy.hp
        && player.defense() >= enemy.str;
    feared || outmatched
}

fn flee_point(from: Pos, threat: Pos) -> Pos {
    from.offset((from.x - threat.x).signum(), (from.y - threat.y).signum())
}

/// Steps along the axis with the larger gap; ties go vertical.
fn single_axis_step(from: Pos, target: Pos) -> Pos {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    if dx.abs() > dy.abs() {
        from.offset(dx.signum(), 0)
    } else if dy != 0 {
        from.offset(0, dy.signum())
    } else {
        from
    }
}
