//! Shared fixtures for unit tests: tiny registries, oracle wiring, and
//! canned dungeon layouts.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::GameConfig;
use crate::env::{
    EnemyDefinition, EnemyOracle, GameEnv, ItemDefinition, ItemEffect, ItemOracle, NoopBehavior,
    OfferingDefinition, OfferingEffect, OfferingOracle, PcgRng, TileDefinition, TileOracle,
};
use crate::event::EventQueue;
use crate::registry::Registry;
use crate::state::{BehaviorState, Enemy, GameState, Hall, HallId, PlayerState, Tile, TileKind};

pub struct EnemyTable(pub Registry<EnemyDefinition>);
pub struct ItemTable(pub Registry<ItemDefinition>);
pub struct TileTable(pub Registry<TileDefinition>);
pub struct OfferingTable(pub Registry<OfferingDefinition>);

impl EnemyOracle for EnemyTable {
    fn definition(&self, id: &str) -> Option<&EnemyDefinition> {
        self.0.get(id)
    }

    fn names(&self) -> Vec<&str> {
        self.0.names().collect()
    }
}

impl ItemOracle for ItemTable {
    fn definition(&self, id: &str) -> Option<&ItemDefinition> {
        self.0.get(id)
    }
}

impl TileOracle for TileTable {
    fn definition(&self, kind: TileKind) -> Option<&TileDefinition> {
        self.0.get(kind.as_ref())
    }
}

impl OfferingOracle for OfferingTable {
    fn definition(&self, id: &str) -> Option<&OfferingDefinition> {
        self.0.get(id)
    }

    fn names(&self) -> Vec<&str> {
        self.0.names().collect()
    }
}

pub struct Oracles {
    pub enemies: EnemyTable,
    pub items: ItemTable,
    pub tiles: TileTable,
    pub offerings: OfferingTable,
    pub rng: PcgRng,
}

impl Oracles {
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::with_all(
            &self.enemies,
            &self.items,
            &self.tiles,
            &self.offerings,
            &self.rng,
        )
    }
}

/// Heals 1 hp, refuses at full health.
struct Snack;

impl ItemEffect for Snack {
    fn apply(&self, state: &mut GameState, _events: &mut EventQueue) -> bool {
        if state.player.hp >= state.player.max_hp {
            return false;
        }
        state.player.hp = (state.player.hp + 1).min(state.player.max_hp);
        true
    }
}

/// Never works.
struct Dud;

impl ItemEffect for Dud {
    fn apply(&self, _state: &mut GameState, _events: &mut EventQueue) -> bool {
        false
    }
}

struct HpUp;

impl OfferingEffect for HpUp {
    fn apply(&self, player: &mut PlayerState) {
        player.max_hp += 1;
        player.hp += 1;
    }
}

struct Trinket;

impl OfferingEffect for Trinket {
    fn apply(&self, _player: &mut PlayerState) {}
}

fn tile_def(glyph: char, walkable: bool) -> TileDefinition {
    TileDefinition {
        glyph,
        walkable,
        interactable: false,
        hint: String::new(),
    }
}

pub fn oracles() -> Oracles {
    let mut enemies = Registry::new();
    enemies.register(
        "slime",
        EnemyDefinition {
            name: "slime".into(),
            glyph: 's',
            hp: 1,
            damage: 1,
            initial_state: BehaviorState::Move,
            gold_drop: (1, 2),
            spawn_weight: 10,
            min_level: 1,
            behavior: Arc::new(NoopBehavior),
        },
    );

    let mut items = Registry::new();
    items.register(
        "snack",
        ItemDefinition {
            name: "Snack".into(),
            glyph: 'n',
            description: "Restore 1 HP".into(),
            effect: Arc::new(Snack),
        },
    );
    items.register(
        "dud",
        ItemDefinition {
            name: "Dud".into(),
            glyph: 'x',
            description: "Does nothing".into(),
            effect: Arc::new(Dud),
        },
    );

    let mut tiles = Registry::new();
    tiles.register("floor", tile_def('.', true));
    tiles.register("wall", tile_def('#', false));
    tiles.register("door", tile_def('+', true));
    tiles.register("stairs", tile_def('>', true));
    tiles.register("gold", tile_def('$', true));

    let mut offerings = Registry::new();
    offerings.register(
        "hp-up",
        OfferingDefinition {
            name: "+1 Max HP".into(),
            glyph: '\u{2665}',
            description: "Increase maximum HP by 1".into(),
            cost: 10,
            effect: Arc::new(HpUp),
        },
    );
    offerings.register(
        "trinket",
        OfferingDefinition {
            name: "Trinket".into(),
            glyph: 'o',
            description: "A shiny nothing".into(),
            cost: 5,
            effect: Arc::new(Trinket),
        },
    );

    Oracles {
        enemies: EnemyTable(enemies),
        items: ItemTable(items),
        tiles: TileTable(tiles),
        offerings: OfferingTable(offerings),
        rng: PcgRng,
    }
}

/// One hall covering the whole strip, player at 0 facing right.
pub fn single_hall(width: usize) -> (GameState, Oracles) {
    let mut state = GameState::new(&GameConfig::default(), 1);
    let dungeon = (0..width).map(|_| Tile::Floor { hall: 0 }).collect();
    state.install_level(
        dungeon,
        vec![Hall::new(0, 0, width - 1)],
        BTreeMap::new(),
        Vec::new(),
        0,
    );
    (state, oracles())
}

/// Two halls of width 2 joined by a door pair at positions 1 and 4.
pub fn two_halls_with_door() -> (GameState, Oracles) {
    let mut state = GameState::new(&GameConfig::default(), 1);
    let dungeon = vec![
        Tile::Floor { hall: 0 },
        Tile::Door { hall: 0, target: 4 },
        Tile::Wall,
        Tile::Floor { hall: 1 },
        Tile::Door { hall: 1, target: 1 },
    ];
    let mut hall0 = Hall::new(0, 0, 1);
    hall0.doors.push(1);
    let mut hall1 = Hall::new(1, 3, 4);
    hall1.doors.push(4);

    let mut doors = BTreeMap::new();
    doors.insert(1, 4);
    doors.insert(4, 1);

    state.install_level(dungeon, vec![hall0, hall1], doors, Vec::new(), 0);
    (state, oracles())
}

pub fn slime_at(pos: usize, hall: HallId) -> Enemy {
    Enemy {
        type_id: "slime".into(),
        pos,
        hall,
        hp: 1,
        damage: 1,
        state: BehaviorState::Move,
    }
}
