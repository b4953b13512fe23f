//! Between-level shop.
//!
//! Transient session state, never part of [`crate::state::GameState`]: the
//! open/closed flag, the highlighted offer index, and the offer list
//! snapshotted at open time. The cursor range is `0..=offers.len()`, the
//! final position being the "leave" pseudo-option.

use crate::env::{OfferingOracle, OracleError};
use crate::event::{EventQueue, GameEvent};
use crate::state::GameState;

/// One purchasable entry, snapshotted from the offering registry at open
/// time for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfferSnapshot {
    pub id: String,
    pub name: String,
    pub glyph: char,
    pub description: String,
    pub cost: u32,
}

/// Result of a buy attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShopTransaction {
    /// The shop was not open.
    Noop,
    /// The leave pseudo-option was selected; the shop is now closed.
    Leave,
    Bought { item: String },
    CannotAfford { item: String },
}

/// Shop state machine: closed (initial and after leave) or open.
#[derive(Debug, Default)]
pub struct ShopSession {
    open: bool,
    cursor: usize,
    offers: Vec<OfferSnapshot>,
}

impl ShopSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offers(&self) -> &[OfferSnapshot] {
        &self.offers
    }

    /// Whether the cursor rests on the leave pseudo-option.
    pub fn on_leave(&self) -> bool {
        self.cursor == self.offers.len()
    }

    /// Opens the shop with the full registered offer list, cursor at 0.
    pub fn open(&mut self, oracle: &dyn OfferingOracle, events: &mut EventQueue) {
        self.open = true;
        self.cursor = 0;
        self.offers = oracle
            .names()
            .into_iter()
            .filter_map(|id| {
                oracle.definition(id).map(|def| OfferSnapshot {
                    id: id.to_string(),
                    name: def.name.clone(),
                    glyph: def.glyph,
                    description: def.description.clone(),
                    cost: def.cost,
                })
            })
            .collect();
        events.push(GameEvent::ShopOpened);
    }

    /// Moves the cursor by `delta`, clamped into `0..=offers.len()`.
    /// No-op while closed.
    pub fn navigate(&mut self, delta: isize) {
        if !self.open {
            return;
        }
        let max = self.offers.len() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    /// Attempts to buy the highlighted offer.
    ///
    /// The shop stays open after both successful and failed purchases; only
    /// the leave option closes it.
    pub fn buy(
        &mut self,
        state: &mut GameState,
        oracle: &dyn OfferingOracle,
        events: &mut EventQueue,
    ) -> Result<ShopTransaction, OracleError> {
        if !self.open {
            return Ok(ShopTransaction::Noop);
        }
        if self.on_leave() {
            self.close(events);
            return Ok(ShopTransaction::Leave);
        }

        let offer = &self.offers[self.cursor];
        if state.player.gold < offer.cost {
            return Ok(ShopTransaction::CannotAfford {
                item: offer.id.clone(),
            });
        }

        let effect = oracle
            .definition(&offer.id)
            .ok_or_else(|| OracleError::unknown("offering", offer.id.clone()))?
            .effect
            .clone();
        state.player.gold -= offer.cost;
        effect.apply(&mut state.player);
        events.push(GameEvent::ShopPurchase {
            item: offer.id.clone(),
        });
        Ok(ShopTransaction::Bought {
            item: offer.id.clone(),
        })
    }

    fn close(&mut self, events: &mut EventQueue) {
        self.open = false;
        events.push(GameEvent::ShopClosed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn closed_shop_ignores_navigation_and_buys() {
        let (mut state, oracles) = testkit::single_hall(3);
        let mut shop = ShopSession::new();
        let mut events = EventQueue::new();

        shop.navigate(1);
        assert_eq!(shop.cursor(), 0);
        let result = shop
            .buy(&mut state, &oracles.offerings, &mut events)
            .unwrap();
        assert_eq!(result, ShopTransaction::Noop);
        assert!(events.is_empty());
    }

    #[test]
    fn open_snapshots_offers_in_registration_order() {
        let (_, oracles) = testkit::single_hall(3);
        let mut shop = ShopSession::new();
        let mut events = EventQueue::new();
        shop.open(&oracles.offerings, &mut events);

        let ids: Vec<_> = shop.offers().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["hp-up", "trinket"]);
        assert_eq!(shop.cursor(), 0);
        assert_eq!(events.events(), &[GameEvent::ShopOpened]);
    }

    #[test]
    fn cursor_clamps_to_leave_option() {
        let (_, oracles) = testkit::single_hall(3);
        let mut shop = ShopSession::new();
        let mut events = EventQueue::new();
        shop.open(&oracles.offerings, &mut events);

        shop.navigate(-3);
        assert_eq!(shop.cursor(), 0);
        shop.navigate(10);
        assert_eq!(shop.cursor(), 2);
        assert!(shop.on_leave());
    }

    #[test]
    fn immediate_leave_changes_nothing() {
        let (mut state, oracles) = testkit::single_hall(3);
        let before = state.player.clone();
        let mut shop = ShopSession::new();
        let mut events = EventQueue::new();

        shop.open(&oracles.offerings, &mut events);
        shop.navigate(10);
        let result = shop
            .buy(&mut state, &oracles.offerings, &mut events)
            .unwrap();

        assert_eq!(result, ShopTransaction::Leave);
        assert!(!shop.is_open());
        assert_eq!(state.player, before);
    }

    #[test]
    fn purchase_deducts_gold_and_applies_effect() {
        let (mut state, oracles) = testkit::single_hall(3);
        state.player.gold = 12;
        let mut shop = ShopSession::new();
        let mut events = EventQueue::new();
        shop.open(&oracles.offerings, &mut events);

        let result = shop
            .buy(&mut state, &oracles.offerings, &mut events)
            .unwrap();
        assert_eq!(result, ShopTransaction::Bought { item: "hp-up".into() });
        assert_eq!(state.player.gold, 2);
        assert_eq!(state.player.max_hp, 4);
        assert_eq!(state.player.hp, 4);
        // Still open after a purchase.
        assert!(shop.is_open());
    }

    #[test]
    fn insufficient_gold_changes_nothing() {
        let (mut state, oracles) = testkit::single_hall(3);
        state.player.gold = 3;
        let mut shop = ShopSession::new();
        let mut events = EventQueue::new();
        shop.open(&oracles.offerings, &mut events);

        let result = shop
            .buy(&mut state, &oracles.offerings, &mut events)
            .unwrap();
        assert_eq!(
            result,
            ShopTransaction::CannotAfford { item: "hp-up".into() }
        );
        assert_eq!(state.player.gold, 3);
        assert!(shop.is_open());
    }
}
