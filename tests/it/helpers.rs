//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSceneBuilder` - Builder pattern for creating test scenes
//! - `standard_scene()` - The canonical five-zone, three-card layout
//! - Coordinate helpers for hitting cards and zones by id
//! - One-time tracing initialisation for the whole binary

use dropdeck::{CardId, CardSpec, Point, Rect, Scene, SceneSpec, ZoneId, ZoneSpec};
use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Initialise tracing once for the test binary. Safe to call from any test.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// The holding area id used by all test scenes.
pub const HOLDING: ZoneId = ZoneId(0);

// ============================================================================
// TestSceneBuilder - Builder pattern for creating test scenes
// ============================================================================

/// Builder for creating test scenes with zones and cards.
///
/// # Example
/// ```ignore
/// let scene = TestSceneBuilder::new()
///     .with_zone(ZoneId(0), "holding", Rect::new(0.0, 0.0, 200.0, 600.0))
///     .with_zone(ZoneId(1), "base-1", Rect::new(250.0, 0.0, 200.0, 280.0))
///     .with_card(CardId(1), Rect::new(20.0, 20.0, 160.0, 100.0))
///     .build();
/// ```
pub struct TestSceneBuilder {
    holding: ZoneId,
    zones: Vec<ZoneSpec>,
    cards: Vec<CardSpec>,
}

impl Default for TestSceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSceneBuilder {
    pub fn new() -> Self {
        Self {
            holding: HOLDING,
            zones: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Override which zone id is the holding area.
    pub fn with_holding(mut self, holding: ZoneId) -> Self {
        self.holding = holding;
        self
    }

    pub fn with_zone(mut self, id: ZoneId, name: impl Into<String>, bounds: Rect) -> Self {
        self.zones.push(ZoneSpec {
            id,
            name: name.into(),
            bounds,
        });
        self
    }

    pub fn with_card(mut self, id: CardId, bounds: Rect) -> Self {
        self.cards.push(CardSpec { id, bounds });
        self
    }

    pub fn spec(self) -> SceneSpec {
        SceneSpec {
            holding: self.holding,
            zones: self.zones,
            cards: self.cards,
        }
    }

    pub fn build(self) -> Scene {
        Scene::new(self.spec()).expect("test scene spec is valid")
    }
}

// ============================================================================
// Standard layout - one holding column, four drop zones, three cards
// ============================================================================

/// The canonical test layout:
///
/// - holding (zone 0) on the left at (0, 0)-(200, 600), cards 1-3 stacked
///   inside it at 120px intervals
/// - four drop zones (1-4) in a 2x2 grid to the right
pub fn standard_scene() -> Scene {
    TestSceneBuilder::new()
        .with_zone(HOLDING, "holding", Rect::new(0.0, 0.0, 200.0, 600.0))
        .with_zone(ZoneId(1), "base-1", Rect::new(250.0, 0.0, 200.0, 280.0))
        .with_zone(ZoneId(2), "base-2", Rect::new(250.0, 320.0, 200.0, 280.0))
        .with_zone(ZoneId(3), "base-3", Rect::new(500.0, 0.0, 200.0, 280.0))
        .with_zone(ZoneId(4), "base-4", Rect::new(500.0, 320.0, 200.0, 280.0))
        .with_card(CardId(1), holding_card_bounds(1))
        .with_card(CardId(2), holding_card_bounds(2))
        .with_card(CardId(3), holding_card_bounds(3))
        .build()
}

/// Initial bounds of card `n` (1-based) inside the holding column.
pub fn holding_card_bounds(n: u64) -> Rect {
    Rect::new(20.0, 20.0 + 120.0 * (n - 1) as f32, 160.0, 100.0)
}

/// Center of card `n` at its initial holding-column position.
pub fn holding_card_center(n: u64) -> Point {
    let bounds = holding_card_bounds(n);
    Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0)
}

/// Center of a standard-scene zone.
pub fn zone_center(id: ZoneId) -> Point {
    match id.0 {
        0 => Point::new(100.0, 300.0),
        1 => Point::new(350.0, 140.0),
        2 => Point::new(350.0, 460.0),
        3 => Point::new(600.0, 140.0),
        4 => Point::new(600.0, 460.0),
        other => panic!("zone {other} is not part of the standard scene"),
    }
}

/// A coordinate outside every standard-scene zone.
pub fn outside_point() -> Point {
    Point::new(950.0, 650.0)
}
