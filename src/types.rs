//! Core types for the dropdeck engine.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: stable identifiers for cards and zones, screen-space geometry, and
//! the classification tags produced by hit testing.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier for a card (a movable token).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

/// Stable identifier for a zone (a named container of cards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u64);

// ============================================================================
// Geometry
// ============================================================================

/// A screen coordinate in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen space: top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

// ============================================================================
// Hit-test classification
// ============================================================================

/// Classification tag for a rendered element, as produced by hit testing.
///
/// The gesture router never holds live UI elements; it only ever sees these
/// tags plus the identifiers they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Card(CardId),
    Zone(ZoneId),
}

impl Element {
    /// The card identifier, if this element is classified as a card.
    pub fn as_card(self) -> Option<CardId> {
        match self {
            Element::Card(id) => Some(id),
            Element::Zone(_) => None,
        }
    }

    /// The zone identifier, if this element is classified as a zone.
    pub fn as_zone(self) -> Option<ZoneId> {
        match self {
            Element::Card(_) => None,
            Element::Zone(id) => Some(id),
        }
    }
}

// ============================================================================
// Card state
// ============================================================================

/// Layout mode of a card.
///
/// `Floating` is the transient absolute-positioned overlay used while a touch
/// gesture drags the card; the stored point is the card's top-left corner in
/// screen space. The presentation layer reads this, the engine writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CardPlacement {
    /// Normal in-flow layout inside the card's current zone.
    #[default]
    InFlow,
    /// Absolutely positioned at the given screen origin while in motion.
    Floating(Point),
}

impl CardPlacement {
    /// Returns true while the card is absolutely positioned mid-gesture.
    pub fn is_floating(&self) -> bool {
        matches!(self, CardPlacement::Floating(_))
    }
}

/// A movable token with one current container.
///
/// `zone` is maintained exclusively by [`crate::board::Board::place`]; it is
/// the lookup-table side of the zone member lists and the two are kept in
/// step as one atomic operation.
#[derive(Clone, Debug)]
pub struct Card {
    pub id: CardId,
    pub zone: ZoneId,
    pub placement: CardPlacement,
}
