//! Gesture input handling for the board.
//!
//! This module normalizes two native input models - pointer drag and touch -
//! into one sequence of abstract actions (begin-move, update-position,
//! commit-move) so placement behaves identically regardless of input device.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the open interaction session. Exactly one session exists at a time; every
//! abnormal input (gesture on empty space, commit with no session, release
//! outside every zone) is absorbed as a silent no-op and the machine always
//! returns to an at-rest state.
//!
//! ## Modules
//!
//! - `state` - Interaction session state machine and helper methods
//! - `router` - The three abstract actions shared by both pipelines
//! - `pointer` - Native drag pipeline (drag start, drag over, drop)
//! - `touch` - Touch pipeline (touch start, move, end)

mod state;
mod router;
mod pointer;
mod touch;

pub use pointer::DropPermission;
pub use router::{GestureEvent, GestureRouter};
pub use state::InputState;
