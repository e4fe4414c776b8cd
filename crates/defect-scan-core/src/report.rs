//! Human-readable region captions for the reporting/overlay collaborator.

use crate::classify::DefectClass;
use crate::error::RegionError;
use crate::region::Region;

/// The scalar measure a caption quotes: the longer enclosing-rectangle side.
///
/// A pinpoint defect is named by its larger extent, a scratch by its length.
pub fn dimension(region: &Region) -> Result<f32, RegionError> {
    Ok(region.bounding_rect()?.larger_side())
}

/// Caption for one region, in the style of the inspection overlay.
///
/// `frame` is the inspected image size in pixels; when given, zone captions
/// quote the unfilled fraction of the frame instead of a raw pixel count.
pub fn caption(region: &Region, frame: Option<(usize, usize)>) -> Result<String, RegionError> {
    let class = region.classification()?;
    Ok(match class {
        DefectClass::Point => format!("Point {:.1}", dimension(region)?),
        DefectClass::Scratch => format!("Scratch {:.1}", dimension(region)?),
        DefectClass::Zone => match frame {
            Some((w, h)) if w * h > 0 => {
                let pct = 100.0 * region.area() as f32 / (w * h) as f32;
                format!("Notfilling ({pct:.2}%)")
            }
            _ => format!("Notfilling ({} px)", region.area()),
        },
    })
}
