//! Game configuration and tunable balance parameters.

/// Tunable parameters for player stats and level generation.
///
/// Constructed once at session start and shared read-only with the level
/// generator and restart path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub level: LevelConfig,
}

/// Starting player stats, restored verbatim on death restart.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerConfig {
    pub max_hp: i32,
    pub starting_hp: i32,
    pub starting_gold: u32,
    pub starting_damage: i32,
}

/// Bounds for the level generator.
///
/// All ranges are inclusive. Hall widths are further widened when a hall owns
/// more doors than `min_hall_width - 2` can host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelConfig {
    pub min_halls: usize,
    pub max_halls: usize,
    pub min_hall_width: usize,
    pub max_hall_width: usize,
    pub extra_doors: (usize, usize),
    pub gold_tiles: (usize, usize),
    pub gold_per_tile: (u32, u32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig {
                max_hp: 3,
                starting_hp: 3,
                starting_gold: 0,
                starting_damage: 1,
            },
            level: LevelConfig {
                min_halls: 8,
                max_halls: 12,
                min_hall_width: 2,
                max_hall_width: 15,
                extra_doors: (0, 1),
                gold_tiles: (2, 5),
                gold_per_tile: (1, 3),
            },
        }
    }
}
