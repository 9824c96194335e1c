//! Action-button dispatch. The first matching rule consumes the press.

use super::*;
use crate::player::{Equipment, Gear};

impl Game {
    /// Returns true if the press changed anything.
    pub(super) fn press_action(&mut self) -> bool {
        let here = self.player.pos;
        let item_here = self.world.item_at(here);

        if let Some(id) = item_here
            && self.world.items[id].kind == ItemKind::Coin
        {
            return self.try_pickup(id);
        }

        if self.player.has_ring() {
            let moved_wall = if self.player.is_carrying_wall() {
                self.drop_wall()
            } else {
                self.pickup_wall()
            };
            if moved_wall {
                return true;
            }
        }

        if self.world.tile_at(here) == TileKind::Home {
            return self.deposit();
        }

        if let Some(id) = item_here {
            return self.try_pickup(id);
        }

        match self.player.equipment {
            Equipment::Empty => false,
            Equipment::Worn(Gear::Ring) => self.take_off_ring(),
            Equipment::Worn(Gear::Cross) => self.take_off_cross(),
            Equipment::Worn(_) => self.drop_item(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;
    use crate::player::WallCarry;

    #[test]
    fn coin_underfoot_takes_precedence_over_home() {
        let mut game = quiet_game(8);
        game.player.hp = 5;
        let home = game.player.pos;
        add_item(&mut game, ItemKind::Coin, home);
        game.frame(action());
        assert_eq!(game.player.gold, 1);
        assert_eq!(game.player.hp, 5);

        game.frame(action());
        assert_eq!(game.player.gold, 0);
        assert_eq!(game.player.hp, 20);
    }

    #[test]
    fn ring_lifts_before_picking_up() {
        let mut game = quiet_game(8);
        let here = Pos::new(12, 12);
        game.player.pos = here;
        game.player.equip(Gear::Ring);
        game.world.set_placed_wall(Pos::new(12, 13), true);
        add_item(&mut game, ItemKind::Gem, here);

        assert!(game.press_action());
        assert!(game.player.is_carrying_wall());
        assert!(game.world.has_item(here, ItemKind::Gem));
    }

    #[test]
    fn failed_wall_drop_falls_through_to_pickup() {
        let mut game = quiet_game(8);
        let here = Pos::new(12, 12);
        game.player.pos = here;
        game.player.equip(Gear::Ring);
        game.player.carry = WallCarry::Carrying { origin: Pos::new(12, 13) };
        add_item(&mut game, ItemKind::Key, here);

        assert!(!game.press_action(), "slot is taken by the ring");
        assert!(game.player.is_carrying_wall());
        assert!(game.world.has_item(here, ItemKind::Key));
    }

    #[test]
    fn empty_handed_press_on_floor_does_nothing() {
        let mut game = quiet_game(8);
        game.player.pos = Pos::new(12, 12);
        assert!(!game.press_action());
    }

    #[test]
    fn press_unequips_by_kind() {
        let mut game = quiet_game(8);
        let here = Pos::new(12, 12);
        game.player.pos = here;
        game.player.equip(Gear::Shield);
        assert!(game.press_action());
        assert!(game.world.has_item(here, ItemKind::Shield));

        game.player.pos = Pos::new(13, 12);
        game.player.equip(Gear::Ring);
        assert!(game.press_action());
        assert!(game.world.has_item(Pos::new(13, 12), ItemKind::Ring));
        assert_eq!(game.player.equipment, Equipment::Empty);
    }

    #[test]
    fn pick_up_then_put_down_round_trips_gear() {
        let mut game = quiet_game(8);
        let here = Pos::new(12, 12);
        game.player.pos = here;
        add_item(&mut game, ItemKind::Cross, here);
        assert!(game.press_action());
        assert!(game.player.has_cross());
        assert!(game.press_action());
        assert!(game.world.has_item(here, ItemKind::Cross));
        assert!(!game.player.has_cross());
    }
}
