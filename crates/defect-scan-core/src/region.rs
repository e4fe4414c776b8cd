use std::collections::{BTreeSet, HashSet};

use crate::classify::{classify, ClassifyParams, DefectClass};
use crate::error::RegionError;
use crate::min_rect::{min_area_rect, RotatedRect};
use crate::point::Point;

/// Geometry and label of a finalized region.
#[derive(Clone, Copy, Debug)]
pub struct RegionGeometry {
    /// Integer-truncated mean of the member coordinates.
    pub centroid: Point,
    /// Minimum-area enclosing rectangle (any rotation).
    pub rect: RotatedRect,
    pub class: DefectClass,
}

/// One connected component of foreground pixels.
///
/// A region accumulates points while its owning [`RegionSet`](crate::RegionSet)
/// is in the accumulating phase; geometry is computed once, by `finalize`,
/// because it is expensive and independent of insertion order. Geometry
/// accessors fail with [`RegionError::NotFinalized`] until then.
#[derive(Clone, Debug)]
pub struct Region {
    id: u64,
    points: HashSet<Point>,
    geometry: Option<RegionGeometry>,
}

impl Region {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            points: HashSet::new(),
            geometry: None,
        }
    }

    /// Unique, stable identifier within one processing run.
    ///
    /// Ids are assigned at creation from a monotonic counter and survive
    /// merges (the surviving region keeps its id); they are never reused.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.insert(point);
    }

    /// Number of member points; exact pixel area on a unit grid.
    pub fn area(&self) -> usize {
        self.points.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Whether an *external* point is 8-adjacent to this region.
    ///
    /// This is the adjacency test the insertion protocol runs against every
    /// live region for each incoming point.
    pub fn touches(&self, point: Point) -> bool {
        point.neighbors8().any(|n| self.points.contains(&n))
    }

    /// Whether a *member* point has at least one neighbor outside the region.
    ///
    /// The complementary direction of [`Region::touches`]: a member failing
    /// this test is strictly interior.
    pub fn is_boundary_point(&self, point: Point) -> bool {
        point.neighbors8().any(|n| !self.points.contains(&n))
    }

    /// Member points with an exposed exterior neighbor, in sorted order.
    pub fn border_points(&self) -> BTreeSet<Point> {
        self.points
            .iter()
            .copied()
            .filter(|&p| self.is_boundary_point(p))
            .collect()
    }

    /// Union the other region's points into this one.
    ///
    /// Idempotent on shared points; geometry stays deferred.
    pub(crate) fn absorb(&mut self, other: Region) {
        log::debug!(
            "region {}: absorbing region {} ({} points)",
            self.id,
            other.id,
            other.points.len()
        );
        self.points.extend(other.points);
    }

    /// Compute centroid, enclosing rectangle and classification.
    pub(crate) fn finalize(&mut self, params: &ClassifyParams) -> Result<(), RegionError> {
        if self.points.is_empty() {
            return Err(RegionError::EmptyRegion { id: self.id });
        }

        let mut sx: i64 = 0;
        let mut sy: i64 = 0;
        for p in &self.points {
            sx += i64::from(p.x);
            sy += i64::from(p.y);
        }
        let n = self.points.len() as i64;
        let centroid = Point::new((sx / n) as i32, (sy / n) as i32);

        let pts: Vec<Point> = self.points.iter().copied().collect();
        let rect = min_area_rect(&pts).ok_or(RegionError::EmptyRegion { id: self.id })?;
        let class = classify(&rect, params);

        self.geometry = Some(RegionGeometry {
            centroid,
            rect,
            class,
        });
        Ok(())
    }

    pub fn geometry(&self) -> Result<&RegionGeometry, RegionError> {
        self.geometry
            .as_ref()
            .ok_or(RegionError::NotFinalized { id: self.id })
    }

    pub fn centroid(&self) -> Result<Point, RegionError> {
        Ok(self.geometry()?.centroid)
    }

    pub fn bounding_rect(&self) -> Result<RotatedRect, RegionError> {
        Ok(self.geometry()?.rect)
    }

    pub fn classification(&self) -> Result<DefectClass, RegionError> {
        Ok(self.geometry()?.class)
    }
}
