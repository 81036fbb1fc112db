//! Touch pipeline - touch start, move, end.
//!
//! Unlike the pointer pipeline there is no platform drag image: every
//! touch-move repositions the card under the finger, and the landing zone is
//! resolved fresh by hit-testing the release coordinate.
//!
//! Touch move is a hot path (potentially 60+ events per second during a
//! gesture). Enable profiling with `cargo build --features profiling` to see
//! timing.

use crate::board::Board;
use crate::profile_scope;
use crate::spatial_index::HitTester;

use super::router::{GestureEvent, GestureRouter};

impl GestureRouter {
    /// Touch-start on a card opens the session and records the zone under
    /// the initial touch point for bookkeeping.
    pub fn handle_touch_start(
        &mut self,
        event: &GestureEvent,
        hit: &impl HitTester,
        board: &Board,
    ) {
        let touch_start_zone = hit.zone_at(event.position);
        self.begin_move(event, hit, board, touch_start_zone);
    }

    /// Touch-move repositions the moving card under the finger. Membership
    /// is untouched until the gesture ends.
    pub fn handle_touch_move(&mut self, event: &GestureEvent, hit: &impl HitTester, board: &mut Board) {
        profile_scope!("touch_move");
        self.update_position(event.position, hit, board);
    }

    /// Touch-end commits with a fresh hit-test at the final coordinate.
    ///
    /// Zones attach this handler too, which covers a release over a zone's
    /// empty area; the path is identical either way. A release outside
    /// every zone returns the card to its origin.
    pub fn handle_touch_end(&mut self, event: &GestureEvent, hit: &impl HitTester, board: &mut Board) {
        let target = self.resolve_drop_target(event.position, hit);
        self.commit_move(target, board);
    }
}
