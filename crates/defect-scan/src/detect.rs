//! End-to-end helpers from `image::GrayImage`.

use serde::{Deserialize, Serialize};

use defect_scan_core::{
    fill_gaps, BinaryMask, ClassifyParams, GapFillParams, Point, RegionError, RegionSet,
};

/// Settings for the grayscale-image pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanParams {
    /// Pixels strictly darker than this are foreground (defects are dark).
    pub threshold: u8,
    /// Gap filling before clustering; `None` skips the pass.
    pub gap_fill: Option<GapFillParams>,
    pub classify: ClassifyParams,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            threshold: 128,
            gap_fill: Some(GapFillParams::default()),
            classify: ClassifyParams::default(),
        }
    }
}

/// Threshold a grayscale image into a foreground mask.
pub fn binarize(img: &::image::GrayImage, threshold: u8) -> BinaryMask {
    BinaryMask::from_fn(img.width() as usize, img.height() as usize, |x, y| {
        img.get_pixel(x as u32, y as u32).0[0] < threshold
    })
}

/// Cluster and classify every foreground pixel of a mask, in raster order.
pub fn scan_mask(mask: &BinaryMask, classify: ClassifyParams) -> Result<RegionSet, RegionError> {
    let mut set = RegionSet::with_params(classify);
    for point in mask.foreground_points() {
        set.insert(point)?;
    }
    set.finalize()?;
    Ok(set)
}

/// Run the full pipeline: threshold, optional gap fill, cluster, classify.
pub fn detect_defects(
    img: &::image::GrayImage,
    params: &ScanParams,
) -> Result<RegionSet, RegionError> {
    let mut mask = binarize(img, params.threshold);
    log::debug!(
        "binarized {}x{} image: {} foreground pixel(s)",
        mask.width(),
        mask.height(),
        mask.foreground_count()
    );
    if let Some(gap) = &params.gap_fill {
        fill_gaps(&mut mask, gap);
    }
    scan_mask(&mask, params.classify)
}

/// Border points of every region as `(x, y)` pairs, for overlay drawing.
pub fn border_overlay(set: &RegionSet) -> Vec<(i32, i32)> {
    set.border_points()
        .into_iter()
        .map(|Point { x, y }| (x, y))
        .collect()
}
