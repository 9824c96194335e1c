//! Procedural world generation, one pass per submodule.

mod placement;
mod quest_room;
mod scatter;
mod terrain;

use crate::config::GameConfig;
use crate::rng::GameRng;
use crate::world::World;

pub struct MapGenerator<'a> {
    config: &'a GameConfig,
}

impl<'a> MapGenerator<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Terrain, fixed items, random walls, quest room, unique items, sword,
    /// graves, then scattered loot. Every later pass only claims free cells.
    pub fn generate(&self, rng: &mut GameRng) -> World {
        let config = self.config;
        let mut world = World::new(config.grid_width, config.grid_height);
        terrain::stamp_terrain(&mut world, config.player_origin);
        placement::place_fixed_items(&mut world);
        placement::scatter_random_walls(&mut world, config.random_wall_chance, rng);
        quest_room::stamp_quest_room(&mut world, config.quest_room_origin());
        placement::place_unique_items(&mut world, rng);
        placement::place_sword(&mut world, config, rng);
        world.collect_graves();
        scatter::scatter_starting_loot(&mut world, config, rng);
        world
    }
}

pub fn generate_world(config: &GameConfig, rng: &mut GameRng) -> World {
    MapGenerator::new(config).generate(rng)
}
