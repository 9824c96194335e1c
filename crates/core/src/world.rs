//! Tile grid, placed-wall overlay, and ground items.
//! Mutated by generation, the player, and enemy deaths; read-only for renderers.

use slotmap::SlotMap;

use crate::grid::Rect;
use crate::types::{ItemId, ItemKind, Pos, TileKind};

mod drops;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub pos: Pos,
}

#[derive(Clone)]
pub struct World {
    width: usize,
    height: usize,
    base: Vec<TileKind>,
    walls: Vec<bool>,
    pub items: SlotMap<ItemId, Item>,
    pub graves: Vec<Pos>,
    pub quest_rect: Option<Rect>,
}

impl World {
    /// Open floor surrounded by a border wall, with no overlay or items.
    pub fn new(width: usize, height: usize) -> Self {
        let mut base = vec![TileKind::Floor; width * height];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    base[y * width + x] = TileKind::Wall;
                }
            }
        }
        Self {
            width,
            height,
            base,
            walls: vec![false; width * height],
            items: SlotMap::with_key(),
            graves: Vec::new(),
            quest_rect: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Strictly inside the border ring.
    pub fn in_interior(&self, pos: Pos) -> bool {
        pos.x > 0
            && pos.y > 0
            && (pos.x as usize) < self.width - 1
            && (pos.y as usize) < self.height - 1
    }

    /// Out-of-bounds cells read as `Wall`.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.base[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.base[idx] = tile;
    }

    pub fn has_placed_wall(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.walls[self.index(pos)]
    }

    pub fn set_placed_wall(&mut self, pos: Pos, present: bool) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.walls[idx] = present;
    }

    pub fn placed_wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }

    pub fn item_at(&self, pos: Pos) -> Option<ItemId> {
        self.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }

    pub fn has_item(&self, pos: Pos, kind: ItemKind) -> bool {
        self.items.values().any(|item| item.pos == pos && item.kind == kind)
    }

    pub fn add_item(&mut self, kind: ItemKind, pos: Pos) -> ItemId {
        self.items.insert_with_key(|id| Item { id, kind, pos })
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(id)
    }

    /// FLOOR, no placed wall, no item. Enemies are not consulted.
    pub fn is_cell_free(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && self.tile_at(pos) == TileKind::Floor
            && !self.has_placed_wall(pos)
            && self.item_at(pos).is_none()
    }

    /// Terrain obstruction shared by player and enemies (doors handled by callers).
    pub fn tile_blocks(&self, pos: Pos) -> bool {
        matches!(self.tile_at(pos), TileKind::Wall | TileKind::Door) || self.has_placed_wall(pos)
    }

    /// Enemies additionally refuse to step onto a dropped cross.
    pub fn tile_blocks_for_enemy(&self, pos: Pos) -> bool {
        self.tile_blocks(pos) || self.has_item(pos, ItemKind::Cross)
    }

    pub fn clear_all_fire(&mut self) -> usize {
        let mut cleared = 0;
        for tile in &mut self.base {
            if *tile == TileKind::Fire {
                *tile = TileKind::Floor;
                cleared += 1;
            }
        }
        cleared
    }

    pub fn collect_graves(&mut self) {
        self.graves.clear();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos::new(x as i32, y as i32);
                if self.tile_at(pos) == TileKind::Grave {
                    self.graves.push(pos);
                }
            }
        }
    }

    pub fn in_quest_rect(&self, pos: Pos) -> bool {
        self.quest_rect.is_some_and(|rect| rect.contains(pos))
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.base
    }

    pub fn placed_walls(&self) -> &[bool] {
        &self.walls
    }

    /// Interior cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..self.height.saturating_sub(1)).flat_map(move |y| {
            (1..self.width.saturating_sub(1)).map(move |x| Pos::new(x as i32, y as i32))
        })
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
