use serde::{Deserialize, Serialize};

use crate::min_rect::RotatedRect;

/// Defect label derived from a region's enclosing-rectangle dimensions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DefectClass {
    /// Compact pinpoint defect: both rectangle sides are small.
    Point,
    /// Elongated defect: one side narrow, the other long.
    Scratch,
    /// Unfilled zone: everything that is neither a point nor a scratch.
    Zone,
}

/// Classification thresholds, in the same units as point coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifyParams {
    /// Both rectangle sides must stay below this for a pinpoint defect.
    pub point_max: f32,
    /// Upper bound on the narrow side of a scratch.
    pub scratch_max_width: f32,
    /// Lower bound on the long side of a scratch.
    pub scratch_min_length: f32,
}

impl Default for ClassifyParams {
    fn default() -> Self {
        Self {
            point_max: 15.0,
            scratch_max_width: 20.0,
            scratch_min_length: 50.0,
        }
    }
}

/// Classify a bounding rectangle by its unordered side lengths.
///
/// The scratch test is checked in both orientations: a 60x10 region and a
/// 10x60 region are the same defect.
pub fn classify(rect: &RotatedRect, params: &ClassifyParams) -> DefectClass {
    let w = rect.width;
    let h = rect.height;

    if w < params.point_max && h < params.point_max {
        DefectClass::Point
    } else if (h < params.scratch_max_width && w > params.scratch_min_length)
        || (w < params.scratch_max_width && h > params.scratch_min_length)
    {
        DefectClass::Scratch
    } else {
        DefectClass::Zone
    }
}
