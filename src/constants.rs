//! Stacking-order constants shared between the scene loader and the
//! spatial index.

/// Stacking order assigned to every zone. Zones form the bottom layer.
pub const ZONE_Z: u32 = 0;

/// Base stacking order for cards. Cards always sit above zones, so a point
/// query over a card inside a zone reports the card first.
pub const CARD_BASE_Z: u32 = 1;
