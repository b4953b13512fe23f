//! Built-in shop offerings.

use std::sync::Arc;

use corridor_core::env::{OfferingDefinition, OfferingEffect};
use corridor_core::registry::Registry;
use corridor_core::state::PlayerState;

use crate::items::{HEALTH_POTION, THROWING_DAGGER};

struct MaxHpUp;

impl OfferingEffect for MaxHpUp {
    fn apply(&self, player: &mut PlayerState) {
        player.max_hp += 1;
        player.hp += 1;
    }
}

struct DamageUp;

impl OfferingEffect for DamageUp {
    fn apply(&self, player: &mut PlayerState) {
        player.damage += 1;
    }
}

/// Appends a consumable to the inventory; used first-in first-out.
struct GrantItem(&'static str);

impl OfferingEffect for GrantItem {
    fn apply(&self, player: &mut PlayerState) {
        player.items.push(self.0.to_string());
    }
}

/// The stock offering table. The shop lists these in registration order.
pub fn builtin_offerings() -> Registry<OfferingDefinition> {
    let mut registry = Registry::new();
    registry.register(
        "max-hp-up",
        OfferingDefinition {
            name: "+1 Max HP".into(),
            glyph: '\u{2665}',
            description: "Increase maximum HP by 1".into(),
            cost: 10,
            effect: Arc::new(MaxHpUp),
        },
    );
    registry.register(
        "damage-up",
        OfferingDefinition {
            name: "+1 Damage".into(),
            glyph: '\u{2694}',
            description: "Increase attack damage by 1".into(),
            cost: 15,
            effect: Arc::new(DamageUp),
        },
    );
    registry.register(
        HEALTH_POTION,
        OfferingDefinition {
            name: "Potion".into(),
            glyph: 'p',
            description: "Restore 2 HP (consumable)".into(),
            cost: 5,
            effect: Arc::new(GrantItem(HEALTH_POTION)),
        },
    );
    registry.register(
        THROWING_DAGGER,
        OfferingDefinition {
            name: "Dagger".into(),
            glyph: 'd',
            description: "Ranged attack (consumable)".into(),
            cost: 8,
            effect: Arc::new(GrantItem(THROWING_DAGGER)),
        },
    );
    registry
}
