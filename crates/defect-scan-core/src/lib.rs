//! Clustering and classification core for binarized surface-inspection images.
//!
//! The crate groups foreground (defect) pixels into 8-connected regions with
//! an online merge protocol, then derives per-region geometry (centroid,
//! minimum-area enclosing rectangle) and a defect label (point / scratch /
//! unfilled zone) in a single deferred finalize pass.
//!
//! It is intentionally free of image-format dependencies: the input boundary
//! is a stream of integer pixel coordinates (or a [`BinaryMask`] for callers
//! that already hold a thresholded raster).

mod classify;
mod error;
mod logger;
mod mask;
mod min_rect;
mod point;
mod region;
mod region_set;
mod report;

pub use classify::{classify, ClassifyParams, DefectClass};
pub use error::RegionError;
pub use logger::init_with_level;
pub use mask::{fill_gaps, BinaryMask, GapFillParams};
pub use min_rect::{convex_hull, min_area_rect, RotatedRect};
pub use point::{Point, NEIGHBOR_OFFSETS_8};
pub use region::{Region, RegionGeometry};
pub use region_set::{Phase, RegionSet};
pub use report::{caption, dimension};
