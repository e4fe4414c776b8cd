//! Binary raster input boundary.
//!
//! The clustering core itself only consumes points; this module is the thin
//! adapter for callers that hold a thresholded image: a row-major boolean
//! raster, a raster-order foreground iterator, and the window-based gap
//! filling pass that runs before clustering to close pinholes inside defect
//! areas.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Row-major boolean raster; `true` marks a foreground (defect) pixel.
#[derive(Clone, Debug)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

/// Parameters of the gap-filling preprocessing pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapFillParams {
    /// Side length of the square scan window, in pixels.
    pub window: usize,
    /// A window is filled solid once its foreground fraction reaches this.
    pub fill_ratio: f32,
}

impl Default for GapFillParams {
    fn default() -> Self {
        Self {
            window: 4,
            fill_ratio: 0.1,
        }
    }
}

impl BinaryMask {
    /// All-background mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Build a mask by sampling a predicate at every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.bits[y * width + x] = f(x, y);
            }
        }
        mask
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-bounds reads are background.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x < self.width && y < self.height {
            self.bits[y * self.width + x] = value;
        }
    }

    pub fn foreground_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Foreground pixels in raster order (left-to-right, top-to-bottom).
    ///
    /// This is the traversal the clustering caller typically feeds into
    /// [`RegionSet::insert`](crate::RegionSet::insert).
    pub fn foreground_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                self.bits[y * self.width + x].then_some(Point::new(x as i32, y as i32))
            })
        })
    }

    fn count_in_window(&self, x0: usize, y0: usize, size: usize) -> usize {
        let mut count = 0;
        for y in y0..(y0 + size).min(self.height) {
            for x in x0..(x0 + size).min(self.width) {
                if self.bits[y * self.width + x] {
                    count += 1;
                }
            }
        }
        count
    }

    fn fill_window(&mut self, x0: usize, y0: usize, size: usize) {
        for y in y0..(y0 + size).min(self.height) {
            for x in x0..(x0 + size).min(self.width) {
                self.bits[y * self.width + x] = true;
            }
        }
    }
}

/// Close pinholes inside defect areas.
///
/// Slides a non-overlapping `window`x`window` grid over the mask (starting at
/// (1, 1)); any window whose foreground count reaches
/// `floor(window^2 * fill_ratio)` is set solid foreground.
pub fn fill_gaps(mask: &mut BinaryMask, params: &GapFillParams) {
    let size = params.window;
    if size == 0 || mask.height <= size || mask.width <= size {
        return;
    }
    let rate = ((size * size) as f32 * params.fill_ratio) as usize;

    let mut filled = 0usize;
    let mut y = 1;
    while y < mask.height - size {
        let mut x = 1;
        while x < mask.width - size {
            if mask.count_in_window(x, y, size) >= rate {
                mask.fill_window(x, y, size);
                filled += 1;
            }
            x += size;
        }
        y += size;
    }
    log::debug!("gap fill: {filled} window(s) filled solid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreground_points_come_out_in_raster_order() {
        let mask = BinaryMask::from_fn(4, 3, |x, y| (x, y) == (2, 0) || (x, y) == (1, 2));
        let pts: Vec<Point> = mask.foreground_points().collect();
        assert_eq!(pts, vec![Point::new(2, 0), Point::new(1, 2)]);
    }

    #[test]
    fn out_of_bounds_reads_are_background() {
        let mask = BinaryMask::from_fn(2, 2, |_, _| true);
        assert!(!mask.get(2, 0));
        assert!(!mask.get(0, 5));
    }

    #[test]
    fn sparse_window_gets_filled_solid() {
        // 12x12 mask, two foreground pixels inside the window at (1,1)..(5,5)
        // with window=4 and ratio=0.1: rate = floor(16 * 0.1) = 1, so the
        // window fills.
        let mut mask = BinaryMask::new(12, 12);
        mask.set(2, 2, true);
        mask.set(4, 3, true);
        fill_gaps(
            &mut mask,
            &GapFillParams {
                window: 4,
                fill_ratio: 0.1,
            },
        );
        assert!(mask.get(1, 1));
        assert!(mask.get(4, 4));
        assert!(mask.foreground_count() >= 16);
    }

    #[test]
    fn empty_windows_stay_empty_with_a_real_threshold() {
        let mut mask = BinaryMask::new(12, 12);
        mask.set(2, 2, true);
        fill_gaps(
            &mut mask,
            &GapFillParams {
                window: 4,
                fill_ratio: 0.5,
            },
        );
        // One pixel out of 16 is below a 50% fill ratio.
        assert_eq!(mask.foreground_count(), 1);
    }

    #[test]
    fn tiny_masks_are_left_alone() {
        let mut mask = BinaryMask::from_fn(3, 3, |x, y| x == y);
        let before = mask.foreground_count();
        fill_gaps(&mut mask, &GapFillParams::default());
        assert_eq!(mask.foreground_count(), before);
    }
}
