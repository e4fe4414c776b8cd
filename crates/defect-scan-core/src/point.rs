use serde::{Deserialize, Serialize};

/// Integer pixel coordinate. Used as a value and as a set key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The eight king-move offsets around a pixel, row by row.
pub const NEIGHBOR_OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8-adjacent (king-move) neighbors of this point.
    pub fn neighbors8(self) -> impl Iterator<Item = Point> {
        NEIGHBOR_OFFSETS_8
            .iter()
            .map(move |&(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
