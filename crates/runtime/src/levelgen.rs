//! Random level generation.
//!
//! A level is a strip of halls separated by single wall cells, connected by
//! teleporting door pairs. A spanning tree over the halls guarantees every
//! hall is reachable from the start; a few extra door pairs add loops.
//! Generation is deterministic per seed.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use corridor_core::{
    Enemy, EnemyOracle, EventQueue, GameEvent, Hall, LevelConfig, OracleError, PcgRng, Tile,
    pick_enemy_type, spawn_enemy,
};

/// A freshly generated level, ready for [`corridor_core::GameState::install_level`].
#[derive(Debug)]
pub struct GeneratedLevel {
    pub dungeon: Vec<Tile>,
    pub halls: Vec<Hall>,
    pub door_connections: BTreeMap<usize, usize>,
    pub enemies: Vec<Enemy>,
    /// First cell of hall 0, where the player materializes.
    pub start_pos: usize,
}

/// Generates a level for `level` from `seed`.
///
/// Emits `LevelGenerated` plus one `EnemySpawned` per placed enemy. Fails
/// only when the enemy registry is missing a selected type, which is a
/// registration bug.
pub fn generate_level(
    config: &LevelConfig,
    level: u32,
    seed: u64,
    enemies_oracle: &dyn EnemyOracle,
    events: &mut EventQueue,
) -> Result<GeneratedLevel, OracleError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_halls = rng.gen_range(config.min_halls..=config.max_halls);

    // Plan door connections as hall pairs; positions come later.
    let mut planned: Vec<(usize, usize)> = Vec::new();
    let mut doors_per_hall = vec![0usize; num_halls];

    // Spanning tree for guaranteed connectivity.
    let mut connected = vec![0usize];
    let mut unconnected: Vec<usize> = (1..num_halls).collect();
    while !unconnected.is_empty() {
        let from = connected[rng.gen_range(0..connected.len())];
        let to = unconnected.remove(rng.gen_range(0..unconnected.len()));
        planned.push((from, to));
        doors_per_hall[from] += 1;
        doors_per_hall[to] += 1;
        connected.push(to);
    }

    // Extra door pairs create loops.
    let extra = rng.gen_range(config.extra_doors.0..=config.extra_doors.1);
    for _ in 0..extra {
        let from = rng.gen_range(0..num_halls);
        let mut to = rng.gen_range(0..num_halls);
        if to == from {
            to = (to + 1) % num_halls;
        }
        planned.push((from, to));
        doors_per_hall[from] += 1;
        doors_per_hall[to] += 1;
    }

    // Size halls to fit their doors plus breathing room.
    let mut halls: Vec<Hall> = Vec::with_capacity(num_halls);
    let mut cursor = 0usize;
    for (id, doors) in doors_per_hall.iter().enumerate() {
        let rolled = rng.gen_range(config.min_hall_width..=config.max_hall_width);
        let width = rolled.max(doors + 2);
        halls.push(Hall::new(id, cursor, cursor + width - 1));
        cursor += width + 1;
    }

    // Lay floors with one wall cell between halls.
    let mut dungeon: Vec<Tile> = Vec::with_capacity(cursor);
    for hall in &halls {
        for _ in hall.positions() {
            dungeon.push(Tile::Floor { hall: hall.id });
        }
        if hall.id < num_halls - 1 {
            dungeon.push(Tile::Wall);
        }
    }

    let mut door_connections = BTreeMap::new();
    for (from_hall, to_hall) in planned {
        connect_halls(
            &mut rng,
            &mut dungeon,
            &mut halls,
            &mut door_connections,
            from_hall,
            to_hall,
        );
    }

    // Stairs go in a random non-start hall, on a non-door cell.
    let stairs_hall = rng.gen_range(1..num_halls);
    let hall = &halls[stairs_hall];
    let mut offset = rng.gen_range(0..hall.width());
    for _ in 0..hall.width() {
        if !matches!(dungeon[hall.start + offset], Tile::Door { .. }) {
            break;
        }
        offset = (offset + 1) % hall.width();
    }
    dungeon[hall.start + offset] = Tile::Stairs { hall: stairs_hall };

    // Scatter gold on plain floor cells.
    let gold_tiles = rng.gen_range(config.gold_tiles.0..=config.gold_tiles.1);
    for _ in 0..gold_tiles {
        let floors: Vec<usize> = (0..dungeon.len())
            .filter(|&pos| matches!(dungeon[pos], Tile::Floor { .. }))
            .collect();
        if floors.is_empty() {
            break;
        }
        let pos = floors[rng.gen_range(0..floors.len())];
        let Some(hall) = dungeon[pos].hall_id() else {
            continue;
        };
        let amount = rng.gen_range(config.gold_per_tile.0..=config.gold_per_tile.1);
        dungeon[pos] = Tile::Gold { hall, amount };
    }

    // Populate non-start halls; the stairs hall is skipped half the time.
    let mut enemies: Vec<Enemy> = Vec::new();
    for hall in halls.iter().skip(1) {
        if hall.id == stairs_hall && rng.gen_bool(0.5) {
            continue;
        }
        for _ in 0..rng.gen_range(0..=1usize) {
            let candidates: Vec<usize> = hall
                .positions()
                .filter(|&pos| matches!(dungeon[pos], Tile::Floor { .. }))
                .collect();
            if candidates.is_empty() {
                continue;
            }
            let pos = candidates[rng.gen_range(0..candidates.len())];
            let type_id = pick_enemy_type(enemies_oracle, &PcgRng, rng.r#gen(), level);
            enemies.push(spawn_enemy(enemies_oracle, events, &type_id, pos, hall.id)?);
        }
    }

    events.push(GameEvent::LevelGenerated { level });

    Ok(GeneratedLevel {
        start_pos: halls[0].start,
        dungeon,
        halls,
        door_connections,
        enemies,
    })
}

/// Places one door pair between two halls on random floor cells.
///
/// Hall widths were sized to `doors + 2`, so a free floor cell always
/// exists; the bail-out covers hand-built configurations only.
fn connect_halls(
    rng: &mut StdRng,
    dungeon: &mut [Tile],
    halls: &mut [Hall],
    door_connections: &mut BTreeMap<usize, usize>,
    from_hall: usize,
    to_hall: usize,
) {
    let Some(from_pos) = pick_floor_cell(rng, dungeon, &halls[from_hall]) else {
        return;
    };
    let Some(to_pos) = pick_floor_cell(rng, dungeon, &halls[to_hall]) else {
        return;
    };

    dungeon[from_pos] = Tile::Door {
        hall: from_hall,
        target: to_pos,
    };
    dungeon[to_pos] = Tile::Door {
        hall: to_hall,
        target: from_pos,
    };
    door_connections.insert(from_pos, to_pos);
    door_connections.insert(to_pos, from_pos);
    halls[from_hall].doors.push(from_pos);
    halls[to_hall].doors.push(to_pos);
}

fn pick_floor_cell(rng: &mut StdRng, dungeon: &[Tile], hall: &Hall) -> Option<usize> {
    let floors: Vec<usize> = hall
        .positions()
        .filter(|&pos| matches!(dungeon[pos], Tile::Floor { .. }))
        .collect();
    if floors.is_empty() {
        return None;
    }
    Some(floors[rng.gen_range(0..floors.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::OracleBundle;
    use corridor_core::GameConfig;

    fn generate(seed: u64) -> GeneratedLevel {
        let bundle = OracleBundle::builtin();
        let mut events = EventQueue::new();
        generate_level(
            &GameConfig::default().level,
            1,
            seed,
            bundle.enemies(),
            &mut events,
        )
        .unwrap()
    }

    #[test]
    fn halls_are_separated_by_single_walls() {
        let level = generate(0xDEAD);
        for pair in level.halls.windows(2) {
            assert_eq!(pair[1].start, pair[0].end + 2);
            assert!(level.dungeon[pair[0].end + 1].is_wall());
        }
        assert_eq!(level.start_pos, 0);
    }

    #[test]
    fn hall_widths_fit_their_doors() {
        let level = generate(17);
        for hall in &level.halls {
            assert!(hall.width() >= hall.doors.len() + 2, "hall {}", hall.id);
            for &door in &hall.doors {
                assert!(hall.contains(door));
            }
        }
    }

    #[test]
    fn door_connections_are_symmetric() {
        let level = generate(99);
        assert!(!level.door_connections.is_empty());
        for (&a, &b) in &level.door_connections {
            assert_eq!(level.door_connections.get(&b), Some(&a));
            assert!(matches!(level.dungeon[a], Tile::Door { target, .. } if target == b));
        }
    }

    #[test]
    fn stairs_exist_outside_the_start_hall() {
        for seed in 0..20 {
            let level = generate(seed);
            let stairs: Vec<usize> = (0..level.dungeon.len())
                .filter(|&pos| matches!(level.dungeon[pos], Tile::Stairs { .. }))
                .collect();
            assert_eq!(stairs.len(), 1);
            assert!(!level.halls[0].contains(stairs[0]));
        }
    }

    #[test]
    fn same_seed_same_level() {
        let a = generate(1234);
        let b = generate(1234);
        assert_eq!(a.dungeon, b.dungeon);
        assert_eq!(a.door_connections, b.door_connections);
    }

    #[test]
    fn enemies_spawn_on_floor_in_their_hall() {
        for seed in 0..10 {
            let level = generate(seed);
            for enemy in &level.enemies {
                assert!(enemy.hall != 0);
                assert!(level.halls[enemy.hall].contains(enemy.pos));
                assert!(matches!(level.dungeon[enemy.pos], Tile::Floor { .. }));
            }
        }
    }
}
