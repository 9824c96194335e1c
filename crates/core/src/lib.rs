pub mod config;
pub mod content;
pub mod enemies;
pub mod game;
pub mod grid;
pub mod journal;
pub mod mapgen;
pub mod player;
pub mod replay;
pub mod rng;
pub mod types;
pub mod world;

pub use config::{ConfigError, GameConfig};
pub use enemies::{Enemy, EnemyManager, SpawnWeights};
pub use game::Game;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use player::{AutoAttack, Equipment, Gear, Player, WallCarry};
pub use replay::*;
pub use types::*;
pub use world::{Item, World};
