//! Boss room stamp in the bottom-right corner.

use crate::config::{QUEST_ROOM_HEIGHT, QUEST_ROOM_WIDTH};
use crate::grid::Rect;
use crate::types::{ItemKind, Pos, TileKind};
use crate::world::World;

#[derive(Clone, Copy)]
enum Cell {
    Wall,
    Door,
    Fire,
    Boss,
    Crown,
}

const LAYOUT: [[Cell; QUEST_ROOM_WIDTH]; QUEST_ROOM_HEIGHT] = [
    [Cell::Wall, Cell::Door, Cell::Wall],
    [Cell::Wall, Cell::Fire, Cell::Wall],
    [Cell::Wall, Cell::Boss, Cell::Wall],
    [Cell::Wall, Cell::Crown, Cell::Wall],
    [Cell::Wall, Cell::Wall, Cell::Wall],
];

/// Overwrites the footprint at `origin` and records it as the quest rectangle.
/// The boss itself is placed by the enemy roster.
pub(super) fn stamp_quest_room(world: &mut World, origin: Pos) {
    for (dy, row) in LAYOUT.iter().enumerate() {
        for (dx, cell) in row.iter().enumerate() {
            let pos = origin.offset(dx as i32, dy as i32);
            world.set_placed_wall(pos, false);
            if let Some(id) = world.item_at(pos) {
                world.remove_item(id);
            }
            let tile = match cell {
                Cell::Wall => TileKind::Wall,
                Cell::Door => TileKind::Door,
                Cell::Fire => TileKind::Fire,
                Cell::Boss | Cell::Crown => TileKind::Floor,
            };
            world.set_tile(pos, tile);
            if matches!(cell, Cell::Crown) {
                world.add_item(ItemKind::Crown, pos);
            }
        }
    }
    world.quest_rect = Some(Rect {
        x0: origin.x,
        y0: origin.y,
        x1: origin.x + QUEST_ROOM_WIDTH as i32 - 1,
        y1: origin.y + QUEST_ROOM_HEIGHT as i32 - 1,
    });
}
