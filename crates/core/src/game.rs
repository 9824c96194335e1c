use std::mem;

use rand_chacha::rand_core::SeedableRng;

use crate::config::{ConfigError, GameConfig};
use crate::enemies::EnemyManager;
use crate::mapgen::generate_world;
use crate::player::Player;
use crate::rng::GameRng;
use crate::types::*;
use crate::world::World;

mod actions;
mod combat;
mod frame;
mod fx;
mod hash;
mod home;
mod inventory;
mod player_turn;
mod wall_carry;

#[cfg(test)]
mod test_support;

pub use fx::{BattleFx, EnemyInfoFx, FxState, HitMarker};

/// Owns the world, the player, and the enemy roster for one seeded session.
/// Every mutation goes through `frame` or `restart`.
pub struct Game {
    seed: u64,
    config: GameConfig,
    rng: GameRng,
    frame_count: u64,
    phase: Phase,
    status: RunStatus,
    keys: InputKeys,
    world: World,
    player: Player,
    enemies: EnemyManager,
    fx: FxState,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let config = GameConfig::default();
        let rng = GameRng::seed_from_u64(seed);
        Self::build(seed, config, rng)
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::seed_from_u64(seed);
        Ok(Self::build(seed, config, rng))
    }

    fn build(seed: u64, config: GameConfig, rng: GameRng) -> Self {
        let world = World::new(config.grid_width, config.grid_height);
        let player = Player::new(config.player_origin);
        let mut game = Self {
            seed,
            config,
            rng,
            frame_count: 0,
            phase: Phase::Player,
            status: RunStatus::InProgress,
            keys: InputKeys::NONE,
            world,
            player,
            enemies: EnemyManager::new(),
            fx: FxState::default(),
            log: Vec::new(),
        };
        game.restart();
        game
    }

    /// Regenerates the world, then resets the player, then the enemies.
    /// The random stream carries on, so a restarted run gets a fresh layout.
    pub fn restart(&mut self) {
        self.world = generate_world(&self.config, &mut self.rng);
        self.player.reset(self.config.player_origin);
        let boss = self.enemies.reset(&self.config, &self.player);

        self.phase = Phase::Player;
        self.status = RunStatus::InProgress;
        self.keys = InputKeys::NONE;
        self.fx = FxState::default();

        self.log.push(LogEvent::RunStarted { seed: self.seed });
        if let Some(dragon) = self.enemies.get(boss) {
            self.log.push(LogEvent::EnemySpawned {
                enemy: boss,
                kind: dragon.kind,
                pos: dragon.pos,
            });
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, RunStatus::Finished(_))
    }

    pub fn keys(&self) -> InputKeys {
        self.keys
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &EnemyManager {
        &self.enemies
    }

    pub fn fx(&self) -> &FxState {
        &self.fx
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn drain_log(&mut self) -> Vec<LogEvent> {
        mem::take(&mut self.log)
    }

    fn finish(&mut self, outcome: RunOutcome) {
        if self.is_finished() {
            return;
        }
        self.status = RunStatus::Finished(outcome);
        if outcome == RunOutcome::Defeat {
            self.log.push(LogEvent::PlayerDied);
        }
    }
}
