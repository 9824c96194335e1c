//! PLAYER phase: fire damage, auto-attack, then one step or bump.

use super::*;
use crate::player::{AutoAttack, Equipment};

impl Game {
    /// Returns true when the player acted and the phase should advance.
    pub(super) fn update_movement(&mut self) -> bool {
        self.player.move_timer = self.player.move_timer.saturating_sub(1);

        if self.world.tile_at(self.player.pos) == TileKind::Fire && !self.player.has_shield() {
            self.damage_player(self.config.fire_damage, DamageSource::Fire);
            if self.player.is_dead() {
                return false;
            }
        }

        if let AutoAttack::Latched { dir, target } = self.player.auto_attack {
            if self.keys.is_exactly(dir) && self.enemies.is_alive(target) {
                self.fight(target);
                return true;
            }
            self.player.auto_attack = AutoAttack::Idle;
        }

        if self.player.move_timer > 0 {
            return false;
        }
        let Some(dir) = self.keys.priority_direction() else {
            return false;
        };
        let (dx, dy) = dir.delta();
        self.player.facing = (dx, dy);
        let dest = self.player.pos.offset(dx, dy);
        if !self.world.in_bounds(dest) || !self.try_enter(dest) {
            return false;
        }

        if let Some(foe) = self.enemies.enemy_at(dest) {
            if !self.fight(foe) {
                self.player.auto_attack = AutoAttack::Latched { dir, target: foe };
            }
            return true;
        }

        self.player.pos = dest;
        self.player.move_timer = self.config.move_interval;
        true
    }

    /// Passability for the player. A closed door opens if the key is worn,
    /// using up the key.
    fn try_enter(&mut self, dest: Pos) -> bool {
        if self.world.tile_at(dest) == TileKind::Door {
            if !self.player.has_key() {
                return false;
            }
            self.world.set_tile(dest, TileKind::Floor);
            self.player.equipment = Equipment::Empty;
            self.log.push(LogEvent::DoorUnlocked { pos: dest });
            return true;
        }
        !self.world.tile_blocks(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;
    use crate::player::Gear;

    #[test]
    fn priority_direction_wins_and_sets_facing() {
        let mut game = quiet_game(1);
        let keys = InputKeys { up: true, right: true, ..InputKeys::NONE };
        game.frame(FrameInput { keys, ..FrameInput::default() });
        assert_eq!(game.player.pos, Pos::new(9, 8));
        assert_eq!(game.player.facing, (1, 0));
        assert_eq!(game.player.move_timer, game.config.move_interval);
    }

    #[test]
    fn blocked_step_keeps_the_phase_but_updates_facing() {
        let mut game = quiet_game(1);
        game.world.set_placed_wall(Pos::new(8, 7), true);
        game.frame(hold(Direction::Up));
        assert_eq!(game.player.pos, Pos::new(8, 8));
        assert_eq!(game.player.facing, (0, -1));
        assert_eq!(game.phase(), Phase::Player);
    }

    #[test]
    fn door_consumes_the_worn_key() {
        let mut game = quiet_game(1);
        let door = Pos::new(9, 8);
        game.world.set_tile(door, TileKind::Door);
        game.frame(hold(Direction::Right));
        assert_eq!(game.player.pos, Pos::new(8, 8), "no key, no entry");

        game.player.equip(Gear::Key);
        game.frame(hold(Direction::Right));
        assert_eq!(game.player.pos, door);
        assert_eq!(game.world.tile_at(door), TileKind::Floor);
        assert_eq!(game.player.equipment, Equipment::Empty);
        assert!(game.log.contains(&LogEvent::DoorUnlocked { pos: door }));
    }

    #[test]
    fn bump_latches_and_repeats_while_the_key_is_held() {
        let mut game = quiet_game(1);
        game.player.has_weapon = true;
        game.player.hp = 500;
        game.player.max_hp = 500;
        let ogre = add_enemy(&mut game, EnemyKind::Ogre, Pos::new(9, 8));

        game.frame(hold(Direction::Right));
        let latched = AutoAttack::Latched { dir: Direction::Right, target: ogre };
        assert_eq!(game.player.auto_attack, latched);
        let hp_after_first = game.enemies.get(ogre).map(|enemy| enemy.hp);

        game.frame(hold(Direction::Right));
        game.frame(hold(Direction::Right));
        let hp_after_repeat = game.enemies.get(ogre).map(|enemy| enemy.hp);
        assert!(hp_after_repeat < hp_after_first);
        assert_eq!(game.player.pos, Pos::new(8, 8));
        assert_eq!(game.phase(), Phase::Enemy);
    }

    #[test]
    fn changing_keys_cancels_the_latch() {
        let mut game = quiet_game(1);
        game.player.has_weapon = true;
        game.player.hp = 500;
        game.player.max_hp = 500;
        add_enemy(&mut game, EnemyKind::Ogre, Pos::new(9, 8));
        game.frame(hold(Direction::Right));
        game.frame(hold(Direction::Right));
        game.frame(hold(Direction::Up));
        assert_eq!(game.player.auto_attack, AutoAttack::Idle);
        assert_eq!(game.player.pos, Pos::new(8, 7));
    }

    #[test]
    fn latch_drops_when_target_is_gone() {
        let mut game = quiet_game(1);
        game.player.has_weapon = true;
        game.player.hp = 500;
        game.player.max_hp = 500;
        let ogre = add_enemy(&mut game, EnemyKind::Ogre, Pos::new(9, 8));
        game.frame(hold(Direction::Right));
        game.enemies.remove(ogre);
        add_enemy(&mut game, EnemyKind::Bat, Pos::new(20, 20));
        game.phase = Phase::Player;
        game.frame(hold(Direction::Right));
        assert_eq!(game.player.auto_attack, AutoAttack::Idle);
    }

    #[test]
    fn fire_burns_every_player_frame_unless_shielded() {
        let mut game = quiet_game(1);
        game.world.set_tile(game.player.pos, TileKind::Fire);
        game.player.hp = 250;
        game.player.max_hp = 250;
        game.frame(FrameInput::default());
        assert_eq!(game.player.hp, 150);
        game.frame(FrameInput::default());
        assert_eq!(game.player.hp, 50);

        game.player.equip(Gear::Shield);
        game.frame(FrameInput::default());
        assert_eq!(game.player.hp, 50);
    }
}
