//! Home altar: gold for healing, gems for strength, the crown for victory.

use super::*;
use crate::player::{Equipment, Gear};

impl Game {
    /// Returns true if anything was exchanged.
    pub(super) fn deposit(&mut self) -> bool {
        let (gold_spent, hp_restored) = self.player.heal_with_gold(self.config.hp_per_gold);
        let mut exchanged = gold_spent > 0;
        if exchanged {
            self.log.push(LogEvent::Deposited { gold_spent, hp_restored });
        }

        if self.player.is_wearing(Gear::Gem) {
            self.player.base_str += 1;
            self.player.equipment = Equipment::Empty;
            self.log.push(LogEvent::GemOffered);
            exchanged = true;
        }

        if self.player.has_crown() {
            self.player.equipment = Equipment::Empty;
            self.log.push(LogEvent::CrownDelivered);
            self.finish(RunOutcome::Victory);
            exchanged = true;
        }
        exchanged
    }
}
