//! Ground pickups and putting worn gear back down.

use super::*;
use crate::player::{Equipment, Gear};

impl Game {
    /// Picks up the item underfoot. Coins and the sword always succeed; gear
    /// only fits an empty slot. The item stays on the ground on failure.
    pub(super) fn try_pickup(&mut self, id: ItemId) -> bool {
        let Some(item) = self.world.items.get(id) else {
            return false;
        };
        let kind = item.kind;
        let taken = match kind {
            ItemKind::Coin => {
                self.player.gold += 1;
                true
            }
            ItemKind::Sword => {
                self.player.has_weapon = true;
                true
            }
            _ => Gear::from_item(kind).is_some_and(|gear| self.player.equip(gear)),
        };
        if taken {
            self.world.remove_item(id);
            self.log.push(LogEvent::ItemPickedUp { kind });
        }
        taken
    }

    /// The player's own cell must be free for anything to be set down on it.
    fn can_drop_here(&self) -> bool {
        self.world.is_cell_free(self.player.pos)
    }

    fn put_down(&mut self, gear: Gear) {
        let pos = self.player.pos;
        self.world.add_item(gear.item_kind(), pos);
        self.player.equipment = Equipment::Empty;
        self.log.push(LogEvent::ItemDropped { kind: gear.item_kind(), pos });
    }

    /// Drops worn gear other than the ring and the cross.
    pub(super) fn drop_item(&mut self) -> bool {
        let Equipment::Worn(gear) = self.player.equipment else {
            return false;
        };
        if matches!(gear, Gear::Ring | Gear::Cross) || !self.can_drop_here() {
            return false;
        }
        self.put_down(gear);
        true
    }

    pub(super) fn take_off_cross(&mut self) -> bool {
        if !self.player.has_cross() || !self.can_drop_here() {
            return false;
        }
        self.put_down(Gear::Cross);
        true
    }

    /// Refused while a wall block is carried; the block needs the ring.
    pub(super) fn take_off_ring(&mut self) -> bool {
        if !self.player.has_ring() || self.player.is_carrying_wall() || !self.can_drop_here() {
            return false;
        }
        self.put_down(Gear::Ring);
        true
    }
}
