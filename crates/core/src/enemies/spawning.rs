//! World-phase tick: weight refresh, grave spawning, turn counter.

use super::{EnemyManager, SpawnProgress};
use crate::config::GameConfig;
use crate::content::ENEMY_TABLE;
use crate::content::spawn::{ATTEMPTS_WITH_SWORD, ATTEMPTS_WITHOUT_SWORD};
use crate::grid::{manhattan, neighbors8};
use crate::player::Player;
use crate::rng::{GameRng, shuffle_in_place};
use crate::types::{EnemyId, Pos};
use crate::world::World;

impl EnemyManager {
    /// Runs one world phase and returns the ids spawned during it.
    pub fn world_phase(
        &mut self,
        world: &World,
        player: &Player,
        config: &GameConfig,
        rng: &mut GameRng,
    ) -> Vec<EnemyId> {
        self.weights.recompute(&SpawnProgress::of(player, self.turn_count));
        let spawned = self.tick_spawner(world, player, config, rng);
        self.turn_count += 1;
        spawned
    }

    fn tick_spawner(
        &mut self,
        world: &World,
        player: &Player,
        config: &GameConfig,
        rng: &mut GameRng,
    ) -> Vec<EnemyId> {
        self.spawn_timer += 1;
        if self.spawn_timer < config.spawn_interval {
            return Vec::new();
        }
        self.spawn_timer = 0;

        let cap = config.enemy_cap(player.has_weapon);
        if self.live_count() >= cap {
            return Vec::new();
        }

        let attempts =
            if player.has_weapon { ATTEMPTS_WITH_SWORD } else { ATTEMPTS_WITHOUT_SWORD };
        let mut graves = world.graves.clone();
        shuffle_in_place(rng, &mut graves);

        let mut spawned = Vec::new();
        for grave in graves {
            if self.live_count() >= cap || spawned.len() >= attempts {
                break;
            }
            let Some(cell) = self.spawn_cell(world, player, grave, config) else {
                continue;
            };
            let index = self.weights.pick(rng);
            spawned.push(self.insert(&ENEMY_TABLE[index], cell, false));
        }
        spawned
    }

    /// First grave neighbour that is free, unoccupied, and far enough from the player.
    fn spawn_cell(
        &self,
        world: &World,
        player: &Player,
        grave: Pos,
        config: &GameConfig,
    ) -> Option<Pos> {
        neighbors8(grave).find(|&cell| {
            world.is_cell_free(cell)
                && !self.is_occupied(cell)
                && manhattan(cell, player.pos) >= config.min_spawn_distance
        })
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::types::{EnemyKind, TileKind};

    fn setup(config: &GameConfig) -> (World, Player, EnemyManager) {
        let mut world = World::new(config.grid_width, config.grid_height);
        for y in [10, 20] {
            for x in [10, 20, 30] {
                world.set_tile(Pos::new(x, y), TileKind::Grave);
            }
        }
        world.collect_graves();
        let player = Player::new(Pos::new(2, 2));
        let mut manager = EnemyManager::new();
        manager.reset(config, &player);
        (world, player, manager)
    }

    fn small_config() -> GameConfig {
        GameConfig { grid_width: 40, grid_height: 30, spawn_interval: 3, ..GameConfig::default() }
    }

    #[test]
    fn spawns_only_when_interval_elapses() {
        let config = small_config();
        let (world, player, mut manager) = setup(&config);
        let mut rng = GameRng::seed_from_u64(8);

        assert!(manager.world_phase(&world, &player, &config, &mut rng).is_empty());
        assert!(manager.world_phase(&world, &player, &config, &mut rng).is_empty());
        let spawned = manager.world_phase(&world, &player, &config, &mut rng);
        assert_eq!(spawned.len(), ATTEMPTS_WITHOUT_SWORD);
        assert_eq!(manager.spawn_timer(), 0);
        assert_eq!(manager.turn_count(), 3);
        for id in spawned {
            assert_eq!(manager.enemies[id].kind, EnemyKind::Bat);
            assert!(!manager.enemies[id].immobile);
        }
    }

    #[test]
    fn spawn_cells_neighbour_a_grave_and_keep_their_distance() {
        let config = GameConfig { spawn_interval: 1, ..small_config() };
        let (world, player, mut manager) = setup(&config);
        let mut rng = GameRng::seed_from_u64(21);
        for _ in 0..10 {
            for id in manager.world_phase(&world, &player, &config, &mut rng) {
                let pos = manager.enemies[id].pos;
                assert!(world.graves.iter().any(|&grave| neighbors8(grave).any(|n| n == pos)));
                assert!(manhattan(pos, player.pos) >= config.min_spawn_distance);
                assert!(world.is_cell_free(pos));
            }
        }
        let mut cells: Vec<Pos> = manager.enemies.values().map(|enemy| enemy.pos).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), manager.live_count());
    }

    #[test]
    fn cap_counts_the_boss() {
        let config = GameConfig { spawn_interval: 1, cap_without_sword: 3, ..small_config() };
        let (world, player, mut manager) = setup(&config);
        let mut rng = GameRng::seed_from_u64(4);
        for _ in 0..20 {
            manager.world_phase(&world, &player, &config, &mut rng);
        }
        assert_eq!(manager.live_count(), 3);
    }

    #[test]
    fn grave_next_to_player_never_spawns() {
        let config = GameConfig { spawn_interval: 1, ..small_config() };
        let mut world = World::new(config.grid_width, config.grid_height);
        world.set_tile(Pos::new(5, 5), TileKind::Grave);
        world.collect_graves();
        let player = Player::new(Pos::new(5, 6));
        let mut manager = EnemyManager::new();
        manager.reset(&config, &player);
        let mut rng = GameRng::seed_from_u64(2);
        for _ in 0..5 {
            assert!(manager.world_phase(&world, &player, &config, &mut rng).is_empty());
        }
    }
}
