//! dropdeck - a drag-and-drop placement engine for cards and zones.
//!
//! Draggable tokens ("cards") move between a fixed set of named container
//! regions ("zones") through either native pointer-drag gestures or touch
//! gestures, unified behind one placement decision. The crate is headless:
//! a presentation layer supplies zone/card geometry and feeds input events
//! in, and reads membership and layout mode back out.
//!
//! ## Architecture
//!
//! - [`board`] - authoritative card→zone membership and the single `place`
//!   operation that commits a move
//! - [`input`] - the gesture router: an explicit interaction state machine
//!   with pointer-drag and touch adapters
//! - [`spatial_index`] - R-tree hit testing behind the `HitTester` seam
//! - [`scene`] - layout description loading (zones, cards, geometry)
//!
//! ## Example
//!
//! ```ignore
//! let mut scene = Scene::from_json(layout_json)?;
//! let mut router = GestureRouter::new();
//!
//! // touch gesture delivered by the platform:
//! let (board, hit) = scene.parts_mut();
//! router.handle_touch_start(&GestureEvent::at(press), hit, board);
//! router.handle_touch_move(&GestureEvent::at(drag), hit, board);
//! router.handle_touch_end(&GestureEvent::at(release), hit, board);
//! ```

pub mod board;
pub mod constants;
pub mod input;
pub mod perf;
pub mod scene;
pub mod spatial_index;
pub mod types;

pub use board::{Board, Zone};
pub use input::{DropPermission, GestureEvent, GestureRouter, InputState};
pub use scene::{CardSpec, Scene, SceneError, SceneSpec, ZoneSpec};
pub use spatial_index::{HitTester, SpatialIndex};
pub use types::{Card, CardId, CardPlacement, Element, Point, Rect, ZoneId};
