//! Extra starting coins and gems, kept off grave surroundings.

use crate::config::GameConfig;
use crate::grid::manhattan;
use crate::rng::{GameRng, shuffle_in_place};
use crate::types::{ItemKind, Pos};
use crate::world::World;

const GRAVE_CLEARANCE: u32 = 1;

pub(super) fn scatter_starting_loot(world: &mut World, config: &GameConfig, rng: &mut GameRng) {
    for (kind, count) in
        [(ItemKind::Coin, config.extra_start_coins), (ItemKind::Gem, config.extra_start_gems)]
    {
        for pos in pick_loot_cells(world, count, rng) {
            world.add_item(kind, pos);
        }
    }
}

fn pick_loot_cells(world: &World, count: usize, rng: &mut GameRng) -> Vec<Pos> {
    if count == 0 {
        return Vec::new();
    }
    let mut cells: Vec<Pos> = world
        .interior_cells()
        .filter(|&pos| {
            world.is_cell_free(pos)
                && !world.in_quest_rect(pos)
                && !world.graves.iter().any(|&grave| manhattan(pos, grave) <= GRAVE_CLEARANCE)
        })
        .collect();
    shuffle_in_place(rng, &mut cells);
    cells.truncate(count);
    cells
}
