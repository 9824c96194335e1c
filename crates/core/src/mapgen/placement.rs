//! Fixed items, random wall overlay, and the unique quest items.

use crate::config::GameConfig;
use crate::content::FIXED_ITEMS;
use crate::grid::manhattan;
use crate::rng::{GameRng, below, unit_f64};
use crate::types::{ItemKind, Pos};
use crate::world::World;

const MIN_SAMPLE_TRIES: usize = 2000;

pub(super) fn place_fixed_items(world: &mut World) {
    for (kind, pos) in FIXED_ITEMS {
        if world.is_cell_free(pos) {
            world.add_item(kind, pos);
        }
    }
}

pub(super) fn scatter_random_walls(world: &mut World, chance: f64, rng: &mut GameRng) {
    let cells: Vec<Pos> = world.interior_cells().collect();
    for pos in cells {
        if world.is_cell_free(pos) && unit_f64(rng) < chance {
            world.set_placed_wall(pos, true);
        }
    }
}

/// Key, shield, and cross, each on a random free cell outside the quest room.
pub(super) fn place_unique_items(world: &mut World, rng: &mut GameRng) {
    for kind in [ItemKind::Key, ItemKind::Shield, ItemKind::Cross] {
        if let Some(pos) = sample_open_cell(world, rng) {
            world.add_item(kind, pos);
        }
    }
}

fn is_open(world: &World, pos: Pos) -> bool {
    world.is_cell_free(pos) && !world.in_quest_rect(pos)
}

/// Rejection sampling over the interior, then the first open cell in raster order.
fn sample_open_cell(world: &World, rng: &mut GameRng) -> Option<Pos> {
    let (width, height) = (world.width(), world.height());
    let tries = MIN_SAMPLE_TRIES.max(width * height * 2);
    for _ in 0..tries {
        let x = 1 + below(rng, width - 2);
        let y = 1 + below(rng, height - 2);
        let pos = Pos::new(x as i32, y as i32);
        if is_open(world, pos) {
            return Some(pos);
        }
    }
    world.interior_cells().find(|&pos| is_open(world, pos))
}

/// Uniform over open cells far enough from home; otherwise the configured
/// fallback cell; otherwise the farthest open cell.
pub(super) fn place_sword(world: &mut World, config: &GameConfig, rng: &mut GameRng) {
    let origin = config.player_origin;
    let candidates: Vec<Pos> = world
        .interior_cells()
        .filter(|&pos| is_open(world, pos) && manhattan(pos, origin) >= config.sword_min_distance)
        .collect();

    let pos = if candidates.is_empty() {
        let fallback = config.sword_fallback;
        if is_open(world, fallback) { Some(fallback) } else { farthest_open_cell(world, origin) }
    } else {
        Some(candidates[below(rng, candidates.len())])
    };
    if let Some(pos) = pos {
        world.add_item(ItemKind::Sword, pos);
    }
}

fn farthest_open_cell(world: &World, origin: Pos) -> Option<Pos> {
    let mut best: Option<(u32, Pos)> = None;
    for pos in world.interior_cells() {
        if !is_open(world, pos) {
            continue;
        }
        let distance = manhattan(pos, origin);
        if best.is_none_or(|(best_distance, _)| distance > best_distance) {
            best = Some((distance, pos));
        }
    }
    best.map(|(_, pos)| pos)
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::grid::Rect;

    #[test]
    fn fixed_items_skip_taken_cells() {
        let mut world = World::new(40, 30);
        world.set_placed_wall(Pos::new(12, 12), true);
        place_fixed_items(&mut world);
        assert!(world.item_at(Pos::new(12, 12)).is_none());
        assert!(world.has_item(Pos::new(16, 22), ItemKind::Ring));
        assert_eq!(world.items.len(), FIXED_ITEMS.len() - 1);
    }

    #[test]
    fn walls_only_land_on_free_cells() {
        let mut world = World::new(20, 20);
        world.add_item(ItemKind::Coin, Pos::new(3, 3));
        let mut rng = GameRng::seed_from_u64(1);
        scatter_random_walls(&mut world, 1.0, &mut rng);
        assert!(!world.has_placed_wall(Pos::new(3, 3)));
        assert!(!world.has_placed_wall(Pos::new(0, 0)));
        assert_eq!(world.placed_wall_count(), 18 * 18 - 1);
    }

    #[test]
    fn sampling_falls_back_to_raster_scan() {
        let mut world = World::new(10, 10);
        let cells: Vec<Pos> = world.interior_cells().collect();
        for pos in cells {
            world.set_placed_wall(pos, true);
        }
        world.set_placed_wall(Pos::new(7, 2), false);
        world.set_placed_wall(Pos::new(2, 7), false);
        let mut rng = GameRng::seed_from_u64(9);
        let found = sample_open_cell(&world, &mut rng);
        assert!(found == Some(Pos::new(7, 2)) || found == Some(Pos::new(2, 7)));
    }

    #[test]
    fn unique_items_are_omitted_when_nothing_is_open() {
        let mut world = World::new(6, 6);
        let cells: Vec<Pos> = world.interior_cells().collect();
        for pos in cells {
            world.set_placed_wall(pos, true);
        }
        let mut rng = GameRng::seed_from_u64(9);
        place_unique_items(&mut world, &mut rng);
        assert!(world.items.is_empty());
    }

    #[test]
    fn sword_uses_fallback_cell_when_nothing_is_far_enough() {
        let config = GameConfig {
            grid_width: 12,
            grid_height: 12,
            player_origin: Pos::new(2, 2),
            sword_fallback: Pos::new(5, 3),
            ..GameConfig::default()
        };
        let mut world = World::new(12, 12);
        let mut rng = GameRng::seed_from_u64(4);
        place_sword(&mut world, &config, &mut rng);
        assert!(world.has_item(Pos::new(5, 3), ItemKind::Sword));
    }

    #[test]
    fn sword_falls_back_to_farthest_open_cell() {
        let config = GameConfig {
            grid_width: 12,
            grid_height: 12,
            player_origin: Pos::new(2, 2),
            sword_fallback: Pos::new(40, 40),
            ..GameConfig::default()
        };
        let mut world = World::new(12, 12);
        world.quest_rect = Some(Rect { x0: 10, y0: 10, x1: 10, y1: 10 });
        let mut rng = GameRng::seed_from_u64(4);
        place_sword(&mut world, &config, &mut rng);
        assert!(world.has_item(Pos::new(10, 9), ItemKind::Sword));
    }
}
