//! Death-drop lottery and ring placement around the fallen enemy.

use super::World;
use crate::content::DROP_TABLE;
use crate::rng::{GameRng, unit_f64};
use crate::types::{ItemKind, Pos};

const MAX_DROP_RADIUS: i32 = 3;

impl World {
    /// Rolls the drop table and places the result at `origin` or the nearest
    /// free cell on Manhattan rings up to radius 3. Returns the placed item.
    pub fn spawn_drop(&mut self, origin: Pos, rng: &mut GameRng) -> Option<(ItemKind, Pos)> {
        let kind = roll_drop(unit_f64(rng))?;
        let pos = self.drop_cell(origin)?;
        self.add_item(kind, pos);
        Some((kind, pos))
    }

    fn drop_cell(&self, origin: Pos) -> Option<Pos> {
        if self.is_cell_free(origin) {
            return Some(origin);
        }
        for radius in 1..=MAX_DROP_RADIUS {
            for dx in -radius..=radius {
                let dy = radius - dx.abs();
                let below = origin.offset(dx, dy);
                if self.is_cell_free(below) {
                    return Some(below);
                }
                let above = origin.offset(dx, -dy);
                if dy != 0 && self.is_cell_free(above) {
                    return Some(above);
                }
            }
        }
        None
    }
}

fn roll_drop(roll: f64) -> Option<ItemKind> {
    let mut acc = 0.0;
    for entry in &DROP_TABLE {
        acc += entry.prob;
        if roll < acc {
            return entry.kind;
        }
    }
    None
}
