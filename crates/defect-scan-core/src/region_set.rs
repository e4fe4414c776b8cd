use std::collections::BTreeSet;

use crate::classify::ClassifyParams;
use crate::error::RegionError;
use crate::point::Point;
use crate::region::Region;

/// Lifecycle phase of a [`RegionSet`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Points may be inserted; geometry queries are invalid.
    Accumulating,
    /// Geometry is computed and the set is read-only.
    Finalized,
}

/// Owner of all live regions and of the online-merge insertion protocol.
///
/// Feeding points one at a time through [`RegionSet::insert`] performs
/// incremental 8-connected component labeling: after every call, the region
/// point sets are pairwise disjoint and no point of one region is 8-adjacent
/// to a point of another. The final partition does not depend on insertion
/// order (which region instance survives a merge does).
///
/// ```
/// use defect_scan_core::{Point, RegionSet};
///
/// # fn main() -> Result<(), defect_scan_core::RegionError> {
/// let mut set = RegionSet::new();
/// set.insert(Point::new(0, 0))?;
/// set.insert(Point::new(1, 1))?; // diagonal neighbor, same region
/// set.insert(Point::new(9, 9))?; // far away, new region
/// set.finalize()?;
/// assert_eq!(set.count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RegionSet {
    regions: Vec<Region>,
    next_id: u64,
    phase: Phase,
    params: ClassifyParams,
}

impl Default for RegionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionSet {
    /// Empty set with default classification thresholds.
    pub fn new() -> Self {
        Self::with_params(ClassifyParams::default())
    }

    pub fn with_params(params: ClassifyParams) -> Self {
        Self {
            regions: Vec::new(),
            next_id: 0,
            phase: Phase::Accumulating,
            params,
        }
    }

    /// Insert one foreground point, merging every region it touches.
    ///
    /// Every existing region that already contains `point` or is 8-adjacent
    /// to it is collected; with none, a fresh region is created, otherwise
    /// all touching regions are merged into the first one found and the rest
    /// are dropped. The point is then added to the surviving region.
    pub fn insert(&mut self, point: Point) -> Result<(), RegionError> {
        if self.phase == Phase::Finalized {
            return Err(RegionError::InsertAfterFinalize);
        }

        // Membership counts as touching: re-inserting a known point must
        // land in its owning region, not open a duplicate one.
        let touching: Vec<usize> = self
            .regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(point) || r.touches(point))
            .map(|(i, _)| i)
            .collect();

        let Some((&keep, losers)) = touching.split_first() else {
            let mut region = Region::new(self.next_id);
            self.next_id += 1;
            region.push(point);
            self.regions.push(region);
            return Ok(());
        };

        if !losers.is_empty() {
            log::debug!(
                "point ({}, {}) bridges {} regions",
                point.x,
                point.y,
                touching.len()
            );
        }

        // Indices are ascending, so removing from the back keeps the
        // remaining ones (and `keep`) valid.
        for &i in losers.iter().rev() {
            let loser = self.regions.swap_remove(i);
            self.regions[keep].absorb(loser);
        }
        self.regions[keep].push(point);
        Ok(())
    }

    /// Compute geometry and classification for every region, exactly once.
    pub fn finalize(&mut self) -> Result<(), RegionError> {
        if self.phase == Phase::Finalized {
            return Err(RegionError::AlreadyFinalized);
        }
        for region in &mut self.regions {
            region.finalize(&self.params)?;
        }
        self.phase = Phase::Finalized;
        log::info!("finalized {} defect region(s)", self.regions.len());
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Number of live regions.
    pub fn count(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// All regions, in storage order (stable between calls).
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Union of every region's border points. Valid in any phase.
    pub fn border_points(&self) -> BTreeSet<Point> {
        let mut out = BTreeSet::new();
        for region in &self.regions {
            out.extend(region.border_points());
        }
        out
    }

    /// One centroid per region, in storage order. Requires finalize.
    pub fn centroids(&self) -> Result<Vec<Point>, RegionError> {
        self.regions.iter().map(|r| r.centroid()).collect()
    }

    pub fn params(&self) -> &ClassifyParams {
        &self.params
    }
}
