//! Interaction session state machine.
//!
//! A session is open for the duration of exactly one gesture and tracks the
//! moving card plus the zone it occupied when the move began.
//!
//! ## State Transitions
//!
//! ```text
//! Idle         -> DraggingCard   (begin-move resolves a card)
//! DraggingCard -> DraggingCard   (update-position, visual only)
//! DraggingCard -> Idle           (commit-move - with or without a target)
//! ```
//!
//! A begin-move while a session is already open overwrites it. A single
//! pointer or touch cannot produce two concurrent begins under normal
//! platform event ordering, so no stacking is needed.

use crate::types::{CardId, ZoneId};

/// The open interaction session, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress.
    Idle,

    /// A card is being dragged.
    DraggingCard {
        /// The card in motion.
        card: CardId,
        /// Zone the card occupied when the gesture began.
        origin_zone: ZoneId,
        /// Zone under the initial touch point, recorded by the touch
        /// pipeline only. No placement decision reads it; the commit target
        /// is always resolved fresh at the release coordinate.
        touch_start_zone: Option<ZoneId>,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Returns true if no session is open.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a card is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingCard { .. })
    }

    /// The card in motion, if a session is open.
    pub fn dragging_card(&self) -> Option<CardId> {
        match self {
            Self::DraggingCard { card, .. } => Some(*card),
            Self::Idle => None,
        }
    }

    /// The zone the moving card started in, if a session is open.
    pub fn origin_zone(&self) -> Option<ZoneId> {
        match self {
            Self::DraggingCard { origin_zone, .. } => Some(*origin_zone),
            Self::Idle => None,
        }
    }

    /// The zone under the initial touch point, if one was recorded.
    pub fn touch_start_zone(&self) -> Option<ZoneId> {
        match self {
            Self::DraggingCard {
                touch_start_zone, ..
            } => *touch_start_zone,
            Self::Idle => None,
        }
    }

    /// Open a session for `card`.
    pub fn start_drag(
        &mut self,
        card: CardId,
        origin_zone: ZoneId,
        touch_start_zone: Option<ZoneId>,
    ) {
        *self = Self::DraggingCard {
            card,
            origin_zone,
            touch_start_zone,
        };
    }

    /// Close the session unconditionally.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
