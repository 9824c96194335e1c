//! Stable snapshot hashing for deterministic verification.
//! Held keys are input-side and stay out of the hash.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::player::{AutoAttack, Equipment, WallCarry};

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.frame_count);
        hasher.write_u8(match self.phase {
            Phase::Player => 0,
            Phase::Enemy => 1,
            Phase::World => 2,
        });
        hasher.write_u8(match self.status {
            RunStatus::InProgress => 0,
            RunStatus::Finished(RunOutcome::Victory) => 1,
            RunStatus::Finished(RunOutcome::Defeat) => 2,
        });
        self.hash_player(&mut hasher);

        hasher.write_u64(self.enemies.turn_count());
        hasher.write_u32(self.enemies.spawn_timer());
        let mut enemies: Vec<_> = self
            .enemies
            .enemies
            .values()
            .map(|enemy| (enemy.pos, enemy.kind, enemy.hp, enemy.immobile))
            .collect();
        enemies.sort();
        for (pos, kind, hp, immobile) in enemies {
            write_pos(&mut hasher, pos);
            hasher.write_u8(kind as u8);
            hasher.write_i32(hp);
            hasher.write_u8(u8::from(immobile));
        }

        let mut items: Vec<_> =
            self.world.items.values().map(|item| (item.pos, item.kind)).collect();
        items.sort();
        for (pos, kind) in items {
            write_pos(&mut hasher, pos);
            hasher.write_u8(kind as u8);
        }
        for &tile in self.world.tiles() {
            hasher.write_u8(tile as u8);
        }
        for &wall in self.world.placed_walls() {
            hasher.write_u8(u8::from(wall));
        }
        hasher.finish()
    }

    fn hash_player(&self, hasher: &mut Xxh3) {
        let player = &self.player;
        write_pos(hasher, player.pos);
        hasher.write_i32(player.hp);
        hasher.write_i32(player.max_hp);
        hasher.write_u32(player.level);
        hasher.write_u32(player.total_exp);
        hasher.write_u32(player.current_exp);
        hasher.write_u32(player.exp_to_next);
        hasher.write_i32(player.base_str);
        hasher.write_u32(player.gold);
        hasher.write_u32(player.kill_count);
        hasher.write_u8(u8::from(player.has_weapon));
        hasher.write_u32(player.move_timer);
        hasher.write_i32(player.facing.0);
        hasher.write_i32(player.facing.1);
        hasher.write_u8(match player.equipment {
            Equipment::Empty => 0,
            Equipment::Worn(gear) => 1 + gear.item_kind() as u8,
        });
        match player.carry {
            WallCarry::Empty => hasher.write_u8(0),
            WallCarry::Carrying { origin } => {
                hasher.write_u8(1);
                write_pos(hasher, origin);
            }
        }
        match player.auto_attack {
            AutoAttack::Idle => hasher.write_u8(0),
            AutoAttack::Latched { dir, target } => {
                hasher.write_u8(1);
                hasher.write_u8(dir as u8);
                if let Some(enemy) = self.enemies.get(target) {
                    write_pos(hasher, enemy.pos);
                }
            }
        }
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}
