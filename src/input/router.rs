//! The three abstract gesture actions shared by both input pipelines.
//!
//! Both the pointer-drag and touch adapters translate their native events
//! into calls against this one interface, so the placement outcome is
//! identical regardless of input device.

use tracing::{debug, trace};

use crate::board::Board;
use crate::spatial_index::HitTester;
use crate::types::{CardId, Element, Point, ZoneId};

use super::state::InputState;

/// A normalized input event: a screen coordinate plus the classified element
/// the platform delivered the event to, when one is known.
#[derive(Debug, Clone, Copy)]
pub struct GestureEvent {
    pub position: Point,
    pub target: Option<Element>,
}

impl GestureEvent {
    pub fn new(position: Point, target: Option<Element>) -> Self {
        Self { position, target }
    }

    /// An event with no delivered target; the hit stack resolves everything.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            target: None,
        }
    }
}

/// Normalizes heterogeneous input into begin/update/commit actions and
/// drives the board's placement operation.
///
/// The router owns only the ephemeral session; authoritative membership
/// lives in the [`Board`] passed to each action. Failure handling is
/// absorption throughout: no action ever signals an error, it only
/// guarantees the session is closed and the board consistent afterwards.
#[derive(Debug, Default)]
pub struct GestureRouter {
    state: InputState,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self {
            state: InputState::Idle,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Opens a session for the card under the gesture.
    ///
    /// The card is taken from the event target when the platform delivered
    /// one, otherwise from the hit stack at the coordinate - the equivalent
    /// of walking ancestors for the nearest element classified as a card.
    /// A gesture starting on anything else is ignored entirely.
    pub fn begin_move(
        &mut self,
        event: &GestureEvent,
        hit: &impl HitTester,
        board: &Board,
        touch_start_zone: Option<ZoneId>,
    ) {
        let card = event
            .target
            .and_then(Element::as_card)
            .or_else(|| hit.card_at(event.position));
        let Some(card) = card else {
            trace!(
                x = event.position.x,
                y = event.position.y,
                "gesture on non-card target ignored"
            );
            return;
        };
        let Some(origin_zone) = board.zone_of(card) else {
            debug!(card = card.0, "gesture on untracked card ignored");
            return;
        };

        debug!(
            card = card.0,
            origin = origin_zone.0,
            touch_start = ?touch_start_zone,
            "gesture began"
        );
        self.state.start_drag(card, origin_zone, touch_start_zone);
    }

    /// Repositions the moving card so its center tracks `pos`.
    ///
    /// Visual only: the card switches to the absolute overlay, membership is
    /// untouched until commit. No-op when no session is open.
    pub fn update_position(&mut self, pos: Point, hit: &impl HitTester, board: &mut Board) {
        let Some(card) = self.state.dragging_card() else {
            return;
        };

        // Center the card under the coordinate when its extent is known;
        // fall back to the raw coordinate otherwise.
        let origin = match hit.bounds_of(Element::Card(card)) {
            Some(bounds) => Point::new(pos.x - bounds.width / 2.0, pos.y - bounds.height / 2.0),
            None => pos,
        };
        board.float_card(card, origin);
    }

    /// Spatial hit-test for the gesture's landing zone: the first element in
    /// the hit stack classified as a zone, holding area included. `None`
    /// when the coordinate is outside every zone.
    pub fn resolve_drop_target(&self, pos: Point, hit: &impl HitTester) -> Option<ZoneId> {
        hit.zone_at(pos)
    }

    /// Ends the gesture.
    ///
    /// With a target zone the move is committed through [`Board::place`];
    /// without one the card stays in its origin zone and merely returns to
    /// in-flow layout. Either way the session is closed, exactly once per
    /// gesture.
    pub fn commit_move(&mut self, target: Option<ZoneId>, board: &mut Board) {
        let Some(card) = self.state.dragging_card() else {
            return;
        };
        let origin = self.state.origin_zone();

        match target {
            Some(zone) => {
                debug!(card = card.0, from = ?origin, to = zone.0, "gesture committed");
                board.place(card, zone);
            }
            None => {
                debug!(card = card.0, from = ?origin, "gesture ended outside every zone");
                board.settle_card(card);
            }
        }
        self.state.reset();
    }

    /// The card currently in motion, if any.
    pub fn moving_card(&self) -> Option<CardId> {
        self.state.dragging_card()
    }
}
