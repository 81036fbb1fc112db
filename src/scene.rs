//! Scene loading - the layout the presentation layer supplies at startup.
//!
//! The engine itself owns no geometry. A [`SceneSpec`] declares the fixed
//! set of zones (one of them the holding area), the initial cards, and their
//! on-screen rectangles; loading it yields the [`Board`] plus a populated
//! [`SpatialIndex`] ready for hit testing. All cards start at rest in the
//! holding area.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::constants::{CARD_BASE_Z, ZONE_Z};
use crate::spatial_index::SpatialIndex;
use crate::types::{CardId, Element, Rect, ZoneId};

/// Errors that can occur while loading a scene description.
///
/// This is the crate's only error surface: gesture handling absorbs abnormal
/// input silently, but a malformed layout is a real configuration mistake
/// and is reported to the caller.
#[derive(Error, Debug)]
pub enum SceneError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The same zone id was declared twice
    #[error("duplicate zone id {0:?}")]
    DuplicateZone(ZoneId),

    /// The same card id was declared twice
    #[error("duplicate card id {0:?}")]
    DuplicateCard(CardId),

    /// The declared holding area is not among the zones
    #[error("holding zone {0:?} is not declared")]
    UnknownHoldingZone(ZoneId),
}

/// Result type alias for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Declarative description of a scene's zones and cards.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneSpec {
    /// The distinguished default zone cards start in.
    pub holding: ZoneId,
    pub zones: Vec<ZoneSpec>,
    pub cards: Vec<CardSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneSpec {
    pub id: ZoneId,
    pub name: String,
    pub bounds: Rect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardSpec {
    pub id: CardId,
    pub bounds: Rect,
}

/// A loaded scene: authoritative membership plus the spatial index the
/// gesture router hit-tests against.
#[derive(Debug)]
pub struct Scene {
    board: Board,
    index: SpatialIndex,
    next_z: u32,
}

impl Scene {
    /// Loads a scene from its JSON description.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Builds a scene from an already-parsed spec.
    pub fn new(spec: SceneSpec) -> SceneResult<Self> {
        if !spec.zones.iter().any(|z| z.id == spec.holding) {
            return Err(SceneError::UnknownHoldingZone(spec.holding));
        }

        let mut board = Board::new(spec.holding);
        let mut index = SpatialIndex::new();

        for zone in &spec.zones {
            if board.zone(zone.id).is_some() {
                return Err(SceneError::DuplicateZone(zone.id));
            }
            board.add_zone(zone.id, zone.name.clone());
            index.insert(Element::Zone(zone.id), zone.bounds, ZONE_Z);
        }

        let mut next_z = CARD_BASE_Z;
        for card in &spec.cards {
            if board.card(card.id).is_some() {
                return Err(SceneError::DuplicateCard(card.id));
            }
            board.add_card(card.id);
            index.insert(Element::Card(card.id), card.bounds, next_z);
            next_z += 1;
        }

        debug!(
            zones = spec.zones.len(),
            cards = spec.cards.len(),
            "scene loaded"
        );
        Ok(Self {
            board,
            index,
            next_z,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Re-registers a card's on-screen bounds after the presentation layer
    /// lays it out, bumping it to the top of the stacking order.
    pub fn card_moved(&mut self, card: CardId, bounds: Rect) {
        self.index.update(Element::Card(card), bounds, self.next_z);
        self.next_z += 1;
    }

    /// Splits the scene into the board and the hit tester so the two can be
    /// borrowed independently while driving a gesture.
    pub fn parts_mut(&mut self) -> (&mut Board, &SpatialIndex) {
        (&mut self.board, &self.index)
    }
}
