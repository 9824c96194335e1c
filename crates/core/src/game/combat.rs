//! Bump combat between the player and one enemy.

use super::*;
use crate::player::AutoAttack;

impl Game {
    /// One exchange against `target`, armed or not. Returns true if the enemy died.
    pub(super) fn fight(&mut self, target: EnemyId) -> bool {
        if self.player.has_weapon {
            self.armed_exchange(target)
        } else {
            self.unarmed_exchange(target)
        }
    }

    fn armed_exchange(&mut self, target: EnemyId) -> bool {
        let player_pos = self.player.pos;
        let attack = self.player.attack();
        let Some(enemy) = self.enemies.get_mut(target) else {
            return false;
        };
        enemy.hp -= (attack - enemy.def).max(1);
        let (kind, pos, str, dead) = (enemy.kind, enemy.pos, enemy.str, enemy.is_dead());
        self.fx.start_battle(player_pos, target, kind);
        self.fx.push_hit(pos);

        if dead {
            self.kill(target);
            return true;
        }
        let retaliation = (str - self.player.defense()).max(1);
        self.damage_player(retaliation, DamageSource::Retaliation(kind));
        false
    }

    /// The enemy is untouched; the player eats its full strength.
    fn unarmed_exchange(&mut self, target: EnemyId) -> bool {
        let Some(enemy) = self.enemies.get(target) else {
            return false;
        };
        let (kind, str) = (enemy.kind, enemy.str);
        self.fx.start_battle(self.player.pos, target, kind);
        self.damage_player(str.max(1), DamageSource::Retaliation(kind));
        false
    }

    fn kill(&mut self, target: EnemyId) {
        let Some(enemy) = self.enemies.remove(target) else {
            return;
        };
        if enemy.kind == EnemyKind::Dragon && self.world.clear_all_fire() > 0 {
            self.log.push(LogEvent::FireExtinguished);
        }
        if let Some((kind, pos)) = self.world.spawn_drop(enemy.pos, &mut self.rng) {
            self.log.push(LogEvent::LootDropped { kind, pos });
        }
        self.player.kill_count += 1;
        self.log.push(LogEvent::EnemyKilled { enemy: target, kind: enemy.kind });

        let level_before = self.player.level;
        self.player.gain_exp(enemy.exp_reward);
        for level in level_before + 1..=self.player.level {
            self.log.push(LogEvent::LevelUp { level });
        }
        self.player.auto_attack = AutoAttack::Idle;
    }

    pub(super) fn damage_player(&mut self, amount: i32, source: DamageSource) {
        let taken = self.player.take_damage(amount);
        self.log.push(LogEvent::PlayerDamaged { amount: taken, source });
    }
}
