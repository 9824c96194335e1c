//! Base terrain: border wall, home cell, and the grave lattice.

use crate::types::{Pos, TileKind};
use crate::world::World;

const GRAVE_SPACING: i32 = 8;

pub(super) fn stamp_terrain(world: &mut World, origin: Pos) {
    let cells: Vec<Pos> = world.interior_cells().collect();
    for pos in cells {
        let tile = if pos == origin {
            TileKind::Home
        } else if pos.x % GRAVE_SPACING == 0 && pos.y % GRAVE_SPACING == 0 {
            TileKind::Grave
        } else {
            TileKind::Floor
        };
        world.set_tile(pos, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_overrides_grave_lattice() {
        let mut world = World::new(30, 20);
        stamp_terrain(&mut world, Pos::new(8, 8));
        assert_eq!(world.tile_at(Pos::new(8, 8)), TileKind::Home);
        assert_eq!(world.tile_at(Pos::new(16, 8)), TileKind::Grave);
        assert_eq!(world.tile_at(Pos::new(16, 16)), TileKind::Grave);
        assert_eq!(world.tile_at(Pos::new(9, 8)), TileKind::Floor);
        assert_eq!(world.tile_at(Pos::new(0, 8)), TileKind::Wall);
    }
}
