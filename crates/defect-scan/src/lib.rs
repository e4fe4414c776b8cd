//! High-level facade for the `defect-scan` workspace.
//!
//! This crate provides:
//! - stable re-exports of the clustering-and-classification core
//! - (feature-gated) end-to-end helpers that threshold an `image::GrayImage`
//!   and run the full defect pipeline on it
//! - a small CLI (`defect-scan`, feature `cli`) printing per-region reports.
//!
//! ## Quickstart
//!
//! ```no_run
//! use defect_scan::detect::{detect_defects, ScanParams};
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("surface.png")?.decode()?.to_luma8();
//! let regions = detect_defects(&img, &ScanParams::default())?;
//!
//! for region in regions.regions() {
//!     println!("{:?} at {:?}", region.classification()?, region.centroid()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `defect_scan::core`: points, regions, region sets, rectangles, captions.
//! - `defect_scan::detect` (feature `image`): grayscale image -> region set.

pub use defect_scan_core as core;

pub use defect_scan_core::{
    caption, dimension, BinaryMask, ClassifyParams, DefectClass, GapFillParams, Point, Region,
    RegionError, RegionSet, RotatedRect,
};

#[cfg(feature = "image")]
pub mod detect;
