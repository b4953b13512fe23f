//! Dungeon tiles and hall geometry.

use strum::{AsRefStr, Display};

/// Stable hall identifier; index into `GameState::halls`.
pub type HallId = usize;

/// One cell of the dungeon strip.
///
/// Every variant except `Wall` carries its owning hall. `Door` additionally
/// carries the paired door position and `Gold` the amount waiting on the
/// floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Floor { hall: HallId },
    Wall,
    Door { hall: HallId, target: usize },
    Stairs { hall: HallId },
    Gold { hall: HallId, amount: u32 },
}

/// Registry key for tile display metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Floor,
    Wall,
    Door,
    Stairs,
    Gold,
}

impl Tile {
    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Floor { .. } => TileKind::Floor,
            Tile::Wall => TileKind::Wall,
            Tile::Door { .. } => TileKind::Door,
            Tile::Stairs { .. } => TileKind::Stairs,
            Tile::Gold { .. } => TileKind::Gold,
        }
    }

    /// The owning hall, absent only for walls.
    pub fn hall_id(&self) -> Option<HallId> {
        match self {
            Tile::Wall => None,
            Tile::Floor { hall }
            | Tile::Door { hall, .. }
            | Tile::Stairs { hall }
            | Tile::Gold { hall, .. } => Some(*hall),
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// A contiguous walkable segment of the dungeon.
///
/// Halls never overlap and adjacent halls are separated by exactly one wall
/// cell. Every hall is at least `doors + 2` cells wide so door placement
/// never exhausts its floor space.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hall {
    pub id: HallId,
    /// First cell of the hall (inclusive).
    pub start: usize,
    /// Last cell of the hall (inclusive).
    pub end: usize,
    /// Door positions this hall owns.
    pub doors: Vec<usize>,
}

impl Hall {
    pub fn new(id: HallId, start: usize, end: usize) -> Self {
        Self {
            id,
            start,
            end,
            doors: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, pos: usize) -> bool {
        (self.start..=self.end).contains(&pos)
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_kebab_case() {
        assert_eq!(TileKind::Floor.as_ref(), "floor");
        assert_eq!(TileKind::Stairs.to_string(), "stairs");
    }

    #[test]
    fn wall_has_no_hall() {
        assert_eq!(Tile::Wall.hall_id(), None);
        assert_eq!(Tile::Gold { hall: 2, amount: 3 }.hall_id(), Some(2));
    }

    #[test]
    fn hall_range_is_inclusive() {
        let hall = Hall::new(0, 4, 7);
        assert_eq!(hall.width(), 4);
        assert!(hall.contains(4));
        assert!(hall.contains(7));
        assert!(!hall.contains(8));
    }
}
