//! Ring-powered lifting and placing of wall blocks.

use std::iter;

use super::*;
use crate::grid::neighbors8;
use crate::player::WallCarry;

/// Probe order after the facing direction.
const LIFT_ORDER: [(i32, i32); 8] =
    [(0, -1), (1, 0), (0, 1), (-1, 0), (-1, -1), (1, -1), (1, 1), (-1, 1)];

impl Game {
    /// Lifts the first adjacent placed wall, trying the facing cell first.
    pub(super) fn pickup_wall(&mut self) -> bool {
        if self.player.is_carrying_wall() {
            return false;
        }
        let origin = self.player.pos;
        let probes = iter::once(self.player.facing).chain(LIFT_ORDER);
        for (dx, dy) in probes {
            let pos = origin.offset(dx, dy);
            if self.world.in_interior(pos) && self.world.has_placed_wall(pos) {
                self.world.set_placed_wall(pos, false);
                self.player.carry = WallCarry::Carrying { origin: pos };
                self.log.push(LogEvent::WallLifted { pos });
                return true;
            }
        }
        false
    }

    /// Sets the carried block on the player's own cell, then steps off it.
    pub(super) fn drop_wall(&mut self) -> bool {
        let pos = self.player.pos;
        if !self.player.is_carrying_wall() || !self.can_place_wall(pos) {
            return false;
        }
        self.world.set_placed_wall(pos, true);
        self.player.carry = WallCarry::Empty;
        self.log.push(LogEvent::WallPlaced { pos });
        self.step_off_block();
        true
    }

    fn can_place_wall(&self, pos: Pos) -> bool {
        self.world.in_interior(pos)
            && self.world.tile_at(pos) == TileKind::Floor
            && !self.world.has_placed_wall(pos)
            && !self.enemies.is_occupied(pos)
            && self.world.item_at(pos).is_none()
    }

    /// Moves to the first passable, enemy-free neighbour. Stays put if boxed in.
    fn step_off_block(&mut self) {
        let exit = neighbors8(self.player.pos).find(|&cell| {
            self.world.in_bounds(cell)
                && !self.world.tile_blocks(cell)
                && !self.enemies.is_occupied(cell)
        });
        if let Some(cell) = exit {
            self.player.pos = cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;
    use crate::player::Gear;

    fn ring_bearer_at(pos: Pos) -> Game {
        let mut game = quiet_game(6);
        game.player.pos = pos;
        game.player.equip(Gear::Ring);
        game
    }

    #[test]
    fn lift_prefers_the_facing_cell() {
        let mut game = ring_bearer_at(Pos::new(12, 12));
        game.world.set_placed_wall(Pos::new(12, 11), true);
        game.world.set_placed_wall(Pos::new(11, 12), true);
        game.player.facing = (-1, 0);

        assert!(game.pickup_wall());
        assert!(!game.world.has_placed_wall(Pos::new(11, 12)));
        assert!(game.world.has_placed_wall(Pos::new(12, 11)));
        assert_eq!(game.player.carry, WallCarry::Carrying { origin: Pos::new(11, 12) });
        assert!(!game.pickup_wall(), "only one block at a time");
    }

    #[test]
    fn lift_ignores_the_border() {
        let mut game = ring_bearer_at(Pos::new(1, 5));
        game.player.facing = (-1, 0);
        game.world.set_placed_wall(Pos::new(0, 5), true);
        assert!(!game.pickup_wall());
    }

    #[test]
    fn drop_places_block_and_nudges_player() {
        let mut game = ring_bearer_at(Pos::new(12, 12));
        game.player.carry = WallCarry::Carrying { origin: Pos::new(3, 3) };

        assert!(game.drop_wall());
        assert!(game.world.has_placed_wall(Pos::new(12, 12)));
        assert_eq!(game.player.pos, Pos::new(11, 11));
        assert!(!game.player.is_carrying_wall());
    }

    #[test]
    fn drop_is_refused_on_items_and_non_floor() {
        let mut game = ring_bearer_at(Pos::new(12, 12));
        game.player.carry = WallCarry::Carrying { origin: Pos::new(3, 3) };
        add_item(&mut game, ItemKind::Coin, Pos::new(12, 12));
        assert!(!game.drop_wall());

        game.player.pos = game.config.player_origin;
        assert!(!game.drop_wall(), "home is not floor");
        assert!(game.player.is_carrying_wall());
    }

    #[test]
    fn boxed_in_player_stays_on_the_block() {
        let mut game = ring_bearer_at(Pos::new(12, 12));
        game.player.carry = WallCarry::Carrying { origin: Pos::new(3, 3) };
        for cell in neighbors8(Pos::new(12, 12)) {
            game.world.set_placed_wall(cell, true);
        }
        assert!(game.drop_wall());
        assert_eq!(game.player.pos, Pos::new(12, 12));
    }

    #[test]
    fn nudge_skips_enemies_and_doors() {
        let mut game = ring_bearer_at(Pos::new(12, 12));
        game.player.carry = WallCarry::Carrying { origin: Pos::new(3, 3) };
        add_enemy(&mut game, EnemyKind::Bat, Pos::new(11, 11));
        game.world.set_tile(Pos::new(12, 11), TileKind::Door);
        assert!(game.drop_wall());
        assert_eq!(game.player.pos, Pos::new(13, 11));
    }
}
