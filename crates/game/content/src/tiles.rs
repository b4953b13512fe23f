//! Built-in tile metadata.

use corridor_core::env::TileDefinition;
use corridor_core::registry::Registry;
use corridor_core::state::TileKind;

fn def(glyph: char, walkable: bool, interactable: bool, hint: &str) -> TileDefinition {
    TileDefinition {
        glyph,
        walkable,
        interactable,
        hint: hint.into(),
    }
}

/// The stock tile table, keyed by [`TileKind`] names.
pub fn builtin_tiles() -> Registry<TileDefinition> {
    let mut registry = Registry::new();
    registry.register(TileKind::Floor.as_ref(), def('.', true, false, ""));
    registry.register(TileKind::Wall.as_ref(), def('#', false, false, ""));
    registry.register(
        TileKind::Door.as_ref(),
        def('+', true, true, "Door - press Down to go through"),
    );
    registry.register(
        TileKind::Stairs.as_ref(),
        def('>', true, true, "Stairs - press Down to descend"),
    );
    registry.register(TileKind::Gold.as_ref(), def('$', true, false, ""));
    registry
}

#[cfg(test)]
pub(crate) mod tests_support {
    //! State fixtures shared by the content test modules.

    use std::collections::BTreeMap;

    use corridor_core::config::GameConfig;
    use corridor_core::state::{BehaviorState, Enemy, GameState, Hall, Tile};

    /// One hall covering the whole strip, player at 0 with default stats.
    pub fn hall_state(width: usize) -> GameState {
        let mut state = GameState::new(&GameConfig::default(), 1);
        state.install_level(
            (0..width).map(|_| Tile::Floor { hall: 0 }).collect(),
            vec![Hall::new(0, 0, width - 1)],
            BTreeMap::new(),
            Vec::new(),
            0,
        );
        state
    }

    pub fn slime(pos: usize) -> Enemy {
        Enemy {
            type_id: "slime".into(),
            pos,
            hall: 0,
            hp: 1,
            damage: 1,
            state: BehaviorState::Move,
        }
    }
}
