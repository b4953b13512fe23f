//! Player state and facing.

use crate::config::PlayerConfig;

/// The direction the player faces along the corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Position delta of a one-cell step in this direction.
    pub fn delta(self) -> isize {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }

    /// Position one step ahead of `pos` in this direction, if in `0..len`.
    pub fn step_from(self, pos: usize, len: usize) -> Option<usize> {
        let target = pos as isize + self.delta();
        if target < 0 || target as usize >= len {
            None
        } else {
            Some(target as usize)
        }
    }
}

/// Mutable player aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub pos: usize,
    pub facing: Facing,
    pub hp: i32,
    pub max_hp: i32,
    pub gold: u32,
    pub damage: i32,
    /// Item type ids in acquisition order; the front entry is used first.
    pub items: Vec<String>,
}

impl PlayerState {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            pos: 0,
            facing: Facing::Right,
            hp: config.starting_hp,
            max_hp: config.max_hp,
            gold: config.starting_gold,
            damage: config.starting_damage,
            items: Vec::new(),
        }
    }

    /// Restores starting stats on death restart. Position is set by the
    /// level installer, not here.
    pub fn reset(&mut self, config: &PlayerConfig) {
        self.facing = Facing::Right;
        self.hp = config.starting_hp;
        self.max_hp = config.max_hp;
        self.gold = config.starting_gold;
        self.damage = config.starting_damage;
        self.items.clear();
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_from_respects_bounds() {
        assert_eq!(Facing::Left.step_from(0, 10), None);
        assert_eq!(Facing::Right.step_from(9, 10), None);
        assert_eq!(Facing::Right.step_from(3, 10), Some(4));
        assert_eq!(Facing::Left.step_from(3, 10), Some(2));
    }

    #[test]
    fn reset_restores_starting_stats() {
        let config = PlayerConfig {
            max_hp: 3,
            starting_hp: 3,
            starting_gold: 0,
            starting_damage: 1,
        };
        let mut player = PlayerState::new(&config);
        player.hp = -1;
        player.gold = 40;
        player.damage = 4;
        player.items.push("health-potion".into());
        player.facing = Facing::Left;

        player.reset(&config);
        assert_eq!(player.hp, 3);
        assert_eq!(player.gold, 0);
        assert_eq!(player.damage, 1);
        assert_eq!(player.facing, Facing::Right);
        assert!(player.items.is_empty());
    }
}
