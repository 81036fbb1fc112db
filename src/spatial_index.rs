//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing: resolving a
//! screen coordinate to the rendered elements beneath it. This keeps point
//! queries at O(log n) and doubles as the crate's implementation of the
//! [`HitTester`] seam the gesture router depends on.

use std::collections::HashMap;
use std::fmt;

use rstar::{AABB, RTree, RTreeObject};

use crate::profile_scope;
use crate::types::{CardId, Element, Point, Rect, ZoneId};

/// Resolves screen coordinates to classified elements.
///
/// This is the "element at point" collaborator: the gesture router only ever
/// asks which tagged elements sit under a coordinate and how large a tracked
/// element is. Any presentation layer with its own hit testing can implement
/// it; [`SpatialIndex`] is the stock implementation.
pub trait HitTester {
    /// Elements under the point, topmost first.
    fn elements_at(&self, point: Point) -> Vec<Element>;

    /// Bounding box of a tracked element, if known.
    fn bounds_of(&self, element: Element) -> Option<Rect>;

    /// First card in the hit stack: the classification walk that answers
    /// "did this gesture start on a card".
    fn card_at(&self, point: Point) -> Option<CardId> {
        self.elements_at(point).into_iter().find_map(Element::as_card)
    }

    /// First zone in the hit stack, holding area included. `None` when the
    /// coordinate is outside every zone.
    fn zone_at(&self, point: Point) -> Option<ZoneId> {
        self.elements_at(point).into_iter().find_map(Element::as_zone)
    }
}

/// A spatial entry: one rendered element's bounding box plus its stacking
/// order. Higher `z` is closer to the viewer.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element: Element,
    pub z: u32,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(element: Element, bounds: Rect, z: u32) -> Self {
        Self {
            element,
            z,
            min_x: bounds.x,
            min_y: bounds.y,
            max_x: bounds.x + bounds.width,
            max_y: bounds.y + bounds.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.min_x,
            self.min_y,
            self.max_x - self.min_x,
            self.max_y - self.min_y,
        )
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

/// Spatial index over cards and zones using an R-tree.
/// Provides O(log n) point queries ordered by stacking order.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<Element, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from an iterator of elements.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: Iterator<Item = (Element, Rect, u32)>,
    {
        let entries: Vec<SpatialEntry> = elements
            .map(|(element, bounds, z)| SpatialEntry::new(element, bounds, z))
            .collect();

        let entries_map: HashMap<Element, SpatialEntry> =
            entries.iter().map(|e| (e.element, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, element: Element, bounds: Rect, z: u32) {
        if let Some(old_entry) = self.entries.remove(&element) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(element, bounds, z);
        self.tree.insert(entry);
        self.entries.insert(element, entry);
    }

    pub fn remove(&mut self, element: Element) -> bool {
        if let Some(entry) = self.entries.remove(&element) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, element: Element, bounds: Rect, z: u32) {
        self.insert(element, bounds, z);
    }

    /// All elements whose bounds contain the point, topmost first.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<Element> {
        profile_scope!("spatial_query_point");

        let point_envelope = AABB::from_point([x, y]);

        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .collect();

        hits.sort_by(|a, b| b.z.cmp(&a.z));
        hits.into_iter().map(|entry| entry.element).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and reloads from scratch. The presentation layer
    /// calls this when the rendered set of cards or zones changes.
    pub fn rebuild<I>(&mut self, elements: I)
    where
        I: Iterator<Item = (Element, Rect, u32)>,
    {
        let entries: Vec<SpatialEntry> = elements
            .map(|(element, bounds, z)| SpatialEntry::new(element, bounds, z))
            .collect();

        self.entries = entries.iter().map(|e| (e.element, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The R-tree itself carries no information the entry map doesn't.
        f.debug_struct("SpatialIndex")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl HitTester for SpatialIndex {
    fn elements_at(&self, point: Point) -> Vec<Element> {
        self.query_point(point.x, point.y)
    }

    fn bounds_of(&self, element: Element) -> Option<Rect> {
        self.entries.get(&element).map(SpatialEntry::bounds)
    }
}
