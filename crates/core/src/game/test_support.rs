//! Shared fixtures for the `game` submodule test suites.

use super::*;
use crate::content::template_for;

/// Fresh game with every ground item and placed wall removed. Terrain, the
/// quest room tiles, and the boss stay in place.
pub(super) fn quiet_game(seed: u64) -> Game {
    let mut game = Game::new(seed);
    game.world.items.clear();
    let cells: Vec<Pos> = game.world.interior_cells().collect();
    for pos in cells {
        game.world.set_placed_wall(pos, false);
    }
    game.log.clear();
    game
}

pub(super) fn add_enemy(game: &mut Game, kind: EnemyKind, pos: Pos) -> EnemyId {
    game.enemies.insert(template_for(kind), pos, false)
}

pub(super) fn add_item(game: &mut Game, kind: ItemKind, pos: Pos) -> ItemId {
    game.world.add_item(kind, pos)
}

pub(super) fn hold(direction: Direction) -> FrameInput {
    FrameInput { keys: InputKeys::only(direction), ..FrameInput::default() }
}

pub(super) fn action() -> FrameInput {
    FrameInput { action: true, ..FrameInput::default() }
}
