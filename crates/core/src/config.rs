//! Tunable run parameters. Enemy curves and loot odds are fixed content and live in `content`.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Pos;

/// Width and height of the boss room stamp.
pub const QUEST_ROOM_WIDTH: usize = 3;
pub const QUEST_ROOM_HEIGHT: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub player_origin: Pos,
    /// World-phase ticks between spawn cycles.
    pub spawn_interval: u32,
    pub max_enemies: usize,
    pub cap_without_sword: usize,
    /// Frames the player must wait between steps.
    pub move_interval: u32,
    pub hp_per_gold: i32,
    pub random_wall_chance: f64,
    pub extra_start_coins: usize,
    pub extra_start_gems: usize,
    pub sword_min_distance: u32,
    pub sword_fallback: Pos,
    pub fire_damage: i32,
    pub fear_radius: u32,
    pub min_spawn_distance: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 70,
            grid_height: 50,
            player_origin: Pos::new(8, 8),
            spawn_interval: 60,
            max_enemies: 18,
            cap_without_sword: 8,
            move_interval: 8,
            hp_per_gold: 20,
            random_wall_chance: 0.08,
            extra_start_coins: 12,
            extra_start_gems: 4,
            sword_min_distance: 20,
            sword_fallback: Pos::new(32, 6),
            fire_damage: 100,
            fear_radius: 4,
            min_spawn_distance: 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    GridTooSmall { width: usize, height: usize },
    OriginOutsideInterior(Pos),
    OriginInsideQuestRoom(Pos),
    ZeroSpawnInterval,
    ProbabilityOutOfRange(f64),
    NonPositive(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { width, height } => write!(
                f,
                "grid {width}x{height} cannot hold the quest room (need at least {}x{})",
                QUEST_ROOM_WIDTH + 2,
                QUEST_ROOM_HEIGHT + 2
            ),
            Self::OriginOutsideInterior(pos) => {
                write!(f, "player origin ({}, {}) must lie inside the border", pos.x, pos.y)
            }
            Self::OriginInsideQuestRoom(pos) => {
                write!(f, "player origin ({}, {}) overlaps the quest room", pos.x, pos.y)
            }
            Self::ZeroSpawnInterval => write!(f, "spawn interval must be at least 1"),
            Self::ProbabilityOutOfRange(value) => {
                write!(f, "random wall chance {value} is outside [0, 1]")
            }
            Self::NonPositive(field) => write!(f, "{field} must be positive"),
        }
    }
}

impl Error for ConfigError {}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < QUEST_ROOM_WIDTH + 2 || self.grid_height < QUEST_ROOM_HEIGHT + 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        let origin = self.player_origin;
        if origin.x < 1
            || origin.y < 1
            || origin.x as usize >= self.grid_width - 1
            || origin.y as usize >= self.grid_height - 1
        {
            return Err(ConfigError::OriginOutsideInterior(origin));
        }
        if self.quest_room_origin().x <= origin.x && self.quest_room_origin().y <= origin.y {
            return Err(ConfigError::OriginInsideQuestRoom(origin));
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if !(0.0..=1.0).contains(&self.random_wall_chance) {
            return Err(ConfigError::ProbabilityOutOfRange(self.random_wall_chance));
        }
        if self.hp_per_gold <= 0 {
            return Err(ConfigError::NonPositive("hp_per_gold"));
        }
        if self.max_enemies == 0 {
            return Err(ConfigError::NonPositive("max_enemies"));
        }
        Ok(())
    }

    /// Top-left cell of the boss room stamp.
    pub fn quest_room_origin(&self) -> Pos {
        Pos::new(
            (self.grid_width - (QUEST_ROOM_WIDTH + 1)) as i32,
            (self.grid_height - (QUEST_ROOM_HEIGHT + 1)) as i32,
        )
    }

    /// Fixed cell of the immobile boss.
    pub fn boss_pos(&self) -> Pos {
        Pos::new(self.grid_width as i32 - 3, self.grid_height as i32 - 4)
    }

    /// Enemy count that stops spawning, given weapon possession.
    pub fn enemy_cap(&self, has_weapon: bool) -> usize {
        if has_weapon { self.max_enemies } else { self.max_enemies.min(self.cap_without_sword) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn boss_sits_inside_quest_room() {
        let config = GameConfig::default();
        let room = config.quest_room_origin();
        assert_eq!(room, Pos::new(66, 44));
        assert_eq!(config.boss_pos(), Pos::new(room.x + 1, room.y + 2));
    }

    #[test]
    fn rejects_grid_without_room_for_quest_stamp() {
        let config = GameConfig { grid_width: 4, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::GridTooSmall { .. })));
    }

    #[test]
    fn rejects_origin_on_border() {
        let config = GameConfig { player_origin: Pos::new(0, 3), ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::OriginOutsideInterior(Pos::new(0, 3))));
    }

    #[test]
    fn rejects_wall_chance_above_one() {
        let config = GameConfig { random_wall_chance: 1.5, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ProbabilityOutOfRange(1.5)));
    }

    #[test]
    fn cap_is_reduced_until_weapon_found() {
        let config = GameConfig::default();
        assert_eq!(config.enemy_cap(false), 8);
        assert_eq!(config.enemy_cap(true), 18);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"grid_width": 40, "grid_height": 30}"#).unwrap();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.spawn_interval, 60);
        assert_eq!(config.validate(), Ok(()));
    }
}
