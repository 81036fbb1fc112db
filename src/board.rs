//! Board state - the single source of truth for card→zone membership.
//!
//! Zones are fixed at startup; cards move between them only through
//! [`Board::place`], which performs the remove-then-insert as one atomic
//! step so a card can never appear in two member lists.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::types::{Card, CardId, CardPlacement, Point, ZoneId};

/// A named container of cards.
///
/// The front of `cards` is the most recently placed card, matching the
/// visual convention that new arrivals appear first.
#[derive(Clone, Debug, Serialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub cards: Vec<CardId>,
}

/// Authoritative card→zone membership plus the per-card layout mode.
///
/// Every card belongs to exactly one zone at all times, including the
/// distinguished holding area, which is treated identically to any other
/// zone. There is no placement legality concept: every zone accepts every
/// card.
#[derive(Clone, Debug)]
pub struct Board {
    zones: Vec<Zone>,
    cards: HashMap<CardId, Card>,
    holding: ZoneId,
}

impl Board {
    /// Creates an empty board whose holding area will carry `holding`.
    ///
    /// The holding zone itself must still be declared via [`Board::add_zone`]
    /// before any card is added.
    pub fn new(holding: ZoneId) -> Self {
        Self {
            zones: Vec::new(),
            cards: HashMap::new(),
            holding,
        }
    }

    /// Declares a zone. Zones are fixed for the board's lifetime; redeclaring
    /// an existing id is ignored.
    pub fn add_zone(&mut self, id: ZoneId, name: impl Into<String>) {
        if self.zone(id).is_some() {
            return;
        }
        self.zones.push(Zone {
            id,
            name: name.into(),
            cards: Vec::new(),
        });
    }

    /// Adds a card at rest in the holding area, behind any card added before
    /// it. Ignored if the holding zone has not been declared or the id is
    /// already taken.
    pub fn add_card(&mut self, id: CardId) {
        if self.cards.contains_key(&id) {
            return;
        }
        let holding = self.holding;
        let Some(zone) = self.zones.iter_mut().find(|z| z.id == holding) else {
            debug!(card = id.0, "card added before holding zone exists, ignored");
            return;
        };
        zone.cards.push(id);
        self.cards.insert(
            id,
            Card {
                id,
                zone: holding,
                placement: CardPlacement::InFlow,
            },
        );
    }

    /// Commits a card into `target`: removes it from its current zone's
    /// member list, inserts it at the front of the target's list, and
    /// returns it to in-flow layout.
    ///
    /// Placing a card into the zone it already occupies re-fronts it.
    /// Unknown cards or zones are absorbed as no-ops; after a successful
    /// return the card is a member of exactly `target` and no other zone.
    pub fn place(&mut self, card_id: CardId, target: ZoneId) {
        let Some(card) = self.cards.get_mut(&card_id) else {
            debug!(card = card_id.0, "place for unknown card ignored");
            return;
        };
        if !self.zones.iter().any(|z| z.id == target) {
            // Membership stays put, but the commit must still return the
            // card to in-flow layout or it is stranded in the overlay.
            card.placement = CardPlacement::InFlow;
            debug!(card = card_id.0, zone = target.0, "place into unknown zone ignored");
            return;
        }

        // Remove-then-insert as one step; the card must never be visible in
        // two member lists.
        for zone in &mut self.zones {
            zone.cards.retain(|c| *c != card_id);
        }
        if let Some(zone) = self.zones.iter_mut().find(|z| z.id == target) {
            zone.cards.insert(0, card_id);
        }

        let from = card.zone;
        card.zone = target;
        card.placement = CardPlacement::InFlow;
        debug!(card = card_id.0, from = from.0, to = target.0, "card placed");
    }

    /// Switches a card to the absolute overlay at `origin` (its top-left
    /// corner) while a touch gesture drags it. Membership is untouched.
    pub fn float_card(&mut self, card_id: CardId, origin: Point) {
        if let Some(card) = self.cards.get_mut(&card_id) {
            card.placement = CardPlacement::Floating(origin);
            trace!(card = card_id.0, x = origin.x, y = origin.y, "card floated");
        }
    }

    /// Returns a card to normal in-flow layout without changing which zone
    /// it belongs to. Used when a gesture ends outside every zone.
    pub fn settle_card(&mut self, card_id: CardId) {
        if let Some(card) = self.cards.get_mut(&card_id) {
            card.placement = CardPlacement::InFlow;
        }
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Zone a card currently belongs to.
    pub fn zone_of(&self, card: CardId) -> Option<ZoneId> {
        self.cards.get(&card).map(|c| c.zone)
    }

    /// Member list of a zone, front (most recently placed) first.
    pub fn cards_in(&self, zone: ZoneId) -> Option<&[CardId]> {
        self.zone(zone).map(|z| z.cards.as_slice())
    }

    /// The distinguished default zone cards start in.
    pub fn holding_zone(&self) -> ZoneId {
        self.holding
    }
}
