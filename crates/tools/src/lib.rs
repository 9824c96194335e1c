//! File loaders, a seeded input bot, and run checks shared by the binaries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use game_core::{
    Direction, FrameInput, Game, GameConfig, InputJournal, InputKeys, LogEvent, TileKind,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;

/// Reads a TOML config. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GameConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

pub fn load_journal(path: &Path) -> Result<InputJournal> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    InputJournal::from_json(&text).with_context(|| "Failed to deserialize journal JSON")
}

pub fn save_journal(path: &Path, journal: &InputJournal) -> Result<()> {
    let text = journal.to_json().with_context(|| "Failed to serialize journal")?;
    fs::write(path, text)
        .with_context(|| format!("Failed to write journal file: {}", path.display()))
}

const DIRECTIONS: [Direction; 4] =
    [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

/// Random walker: holds a direction (or nothing) for a stretch of frames,
/// taps action now and then, and restarts finished runs.
pub struct WanderBot {
    rng: ChaCha8Rng,
    keys: InputKeys,
    hold_left: u32,
    max_hold: u32,
}

impl WanderBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            keys: InputKeys::NONE,
            hold_left: 0,
            max_hold: 32,
        }
    }

    pub fn next_input(&mut self, game: &Game) -> FrameInput {
        if self.hold_left == 0 {
            let pick = self.rng.next_u64() as usize % (DIRECTIONS.len() + 1);
            self.keys = DIRECTIONS.get(pick).map_or(InputKeys::NONE, |&dir| InputKeys::only(dir));
            self.hold_left = 1 + (self.rng.next_u64() % u64::from(self.max_hold)) as u32;
        }
        self.hold_left -= 1;
        FrameInput {
            keys: self.keys,
            action: self.rng.next_u64() % 11 == 0,
            restart: game.is_finished(),
        }
    }
}

/// Invariants that must hold after every frame.
pub fn check_invariants(game: &Game) -> Result<()> {
    let player = game.player();
    let world = game.world();
    ensure!(player.hp <= player.max_hp, "player hp {} above max {}", player.hp, player.max_hp);
    ensure!(
        world.in_interior(player.pos) && world.tile_at(player.pos) != TileKind::Wall,
        "player inside a wall at {:?}",
        player.pos
    );
    ensure!(
        !player.is_carrying_wall() || player.has_ring(),
        "carrying a block without the ring"
    );

    let enemies = game.enemies();
    ensure!(enemies.live_count() <= game.config().max_enemies, "enemy cap exceeded");
    for enemy in enemies.enemies.values() {
        ensure!(enemy.pos != player.pos, "{:?} stands on the player", enemy.kind);
        ensure!(world.in_interior(enemy.pos), "{:?} left the interior", enemy.kind);
        ensure!(
            enemies.enemy_at(enemy.pos) == Some(enemy.id),
            "two enemies share {:?}",
            enemy.pos
        );
    }
    for item in world.items.values() {
        ensure!(world.item_at(item.pos) == Some(item.id), "two items share {:?}", item.pos);
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub runs: u32,
    pub spawned: u32,
    pub killed: u32,
    pub level_ups: u32,
    pub damage_taken: i32,
    pub gold_deposited: u32,
    pub gems_offered: u32,
    pub deaths: u32,
    pub victories: u32,
}

impl RunSummary {
    pub fn from_log(log: &[LogEvent]) -> Self {
        let mut summary = Self::default();
        summary.absorb(log);
        summary
    }

    /// Folds in events drained from a running game.
    pub fn absorb(&mut self, log: &[LogEvent]) {
        for event in log {
            match event {
                LogEvent::RunStarted { .. } => self.runs += 1,
                LogEvent::EnemySpawned { .. } => self.spawned += 1,
                LogEvent::EnemyKilled { .. } => self.killed += 1,
                LogEvent::LevelUp { .. } => self.level_ups += 1,
                LogEvent::PlayerDamaged { amount, .. } => self.damage_taken += amount,
                LogEvent::Deposited { gold_spent, .. } => self.gold_deposited += gold_spent,
                LogEvent::GemOffered => self.gems_offered += 1,
                LogEvent::PlayerDied => self.deaths += 1,
                LogEvent::CrownDelivered => self.victories += 1,
                _ => {}
            }
        }
    }
}
