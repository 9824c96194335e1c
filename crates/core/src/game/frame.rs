//! Per-frame driver: restart, input, phase sequencer, FX decay, defeat check.

use super::*;

impl Game {
    /// Feeds one frame of input. Returns the run status after the frame.
    pub fn frame(&mut self, input: FrameInput) -> RunStatus {
        self.frame_count += 1;

        if input.restart && self.is_finished() {
            self.restart();
        }
        self.keys = input.keys;
        if input.action && !self.is_finished() {
            self.press_action();
        }
        if self.is_finished() {
            return self.status;
        }

        self.run_phases();
        self.update_fx();
        if self.player.is_dead() {
            self.finish(RunOutcome::Defeat);
        }
        self.status
    }

    /// ENEMY and WORLD each take a frame; the PLAYER phase is retried every
    /// frame until the player acts, including the frame WORLD hands over.
    fn run_phases(&mut self) {
        match self.phase {
            Phase::Enemy => {
                self.enemies.move_all(&self.world, &self.player, &self.config);
                self.phase = Phase::World;
            }
            Phase::World => {
                self.world_phase();
                self.phase = Phase::Player;
            }
            Phase::Player => {}
        }
        if self.phase == Phase::Player && self.update_movement() {
            self.phase = Phase::Enemy;
        }
    }

    fn world_phase(&mut self) {
        let spawned =
            self.enemies.world_phase(&self.world, &self.player, &self.config, &mut self.rng);
        for id in spawned {
            if let Some(enemy) = self.enemies.get(id) {
                let event = LogEvent::EnemySpawned { enemy: id, kind: enemy.kind, pos: enemy.pos };
                self.log.push(event);
            }
        }
    }
}
