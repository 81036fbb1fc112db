//! Native pointer-drag pipeline - drag start, drag over, drop.
//!
//! The platform draws the drag image itself, so this pipeline never issues
//! position updates; it only opens the session and commits the drop the
//! platform reports.

use crate::board::Board;
use crate::spatial_index::HitTester;
use crate::types::ZoneId;

use super::router::{GestureEvent, GestureRouter};

/// Response to a drag-over event. The embedder must apply `Accept` by
/// suppressing the platform default, otherwise the drop event never fires.
/// `Ignore` leaves the platform default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPermission {
    Accept,
    Ignore,
}

impl GestureRouter {
    /// Drag-start on a card opens the session. Starting on anything else is
    /// ignored and no session opens.
    pub fn handle_drag_start(
        &mut self,
        event: &GestureEvent,
        hit: &impl HitTester,
        board: &Board,
    ) {
        self.begin_move(event, hit, board, None);
    }

    /// Drag-over above a zone.
    ///
    /// While a session is open this always grants the drop - open placement
    /// policy, every zone accepts every card. With no session open the drag
    /// is foreign (a file from the desktop, a drag from another window) and
    /// the platform default is left alone.
    pub fn handle_drag_over(&self, _event: &GestureEvent) -> DropPermission {
        if self.state().is_dragging() {
            DropPermission::Accept
        } else {
            DropPermission::Ignore
        }
    }

    /// Drop delivered by a zone's own drop handler; that zone is the target.
    pub fn handle_drop(&mut self, zone: ZoneId, board: &mut Board) {
        self.commit_move(Some(zone), board);
    }

    /// Native drag-end without a drop: released outside every zone. The
    /// card stays in its origin zone.
    pub fn handle_drag_end(&mut self, board: &mut Board) {
        self.commit_move(None, board);
    }
}
