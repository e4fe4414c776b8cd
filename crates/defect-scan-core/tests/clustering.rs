//! End-to-end clustering scenarios through the public API.

use defect_scan_core::{
    caption, fill_gaps, BinaryMask, DefectClass, GapFillParams, Point, RegionSet,
};

fn insert_all(set: &mut RegionSet, coords: impl IntoIterator<Item = (i32, i32)>) {
    for (x, y) in coords {
        set.insert(Point::new(x, y)).unwrap();
    }
}

fn block(x0: i32, y0: i32, w: i32, h: i32) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            out.push((x, y));
        }
    }
    out
}

#[test]
fn two_blocks_then_a_bridge() {
    let mut set = RegionSet::new();
    insert_all(&mut set, block(0, 0, 3, 3));
    insert_all(&mut set, block(4, 4, 3, 3));
    assert_eq!(set.count(), 2);

    set.insert(Point::new(3, 3)).unwrap();
    assert_eq!(set.count(), 1);
    assert_eq!(set.regions()[0].area(), 19);
}

#[test]
fn a_diagonal_streak_classifies_as_a_scratch() {
    let mut set = RegionSet::new();
    // Two-pixel-wide diagonal run, clearly longer than 50.
    for i in 0..45 {
        set.insert(Point::new(i, i)).unwrap();
        set.insert(Point::new(i + 1, i)).unwrap();
    }
    set.finalize().unwrap();

    assert_eq!(set.count(), 1);
    let region = &set.regions()[0];
    assert_eq!(region.classification().unwrap(), DefectClass::Scratch);

    let rect = region.bounding_rect().unwrap();
    assert!(rect.larger_side() > 50.0);
    assert!(rect.smaller_side() < 20.0);
}

#[test]
fn a_large_blob_classifies_as_a_zone() {
    let mut set = RegionSet::new();
    insert_all(&mut set, block(10, 10, 60, 30));
    set.finalize().unwrap();

    let region = &set.regions()[0];
    assert_eq!(region.classification().unwrap(), DefectClass::Zone);
    let text = caption(region, Some((200, 200))).unwrap();
    assert!(text.starts_with("Notfilling ("), "got {text}");
}

#[test]
fn isolated_specks_classify_as_points() {
    let mut set = RegionSet::new();
    insert_all(&mut set, block(0, 0, 2, 2));
    insert_all(&mut set, block(50, 50, 3, 3));
    set.finalize().unwrap();

    assert_eq!(set.count(), 2);
    for region in set.regions() {
        assert_eq!(region.classification().unwrap(), DefectClass::Point);
    }
}

#[test]
fn mask_scan_matches_direct_insertion() {
    let mask = BinaryMask::from_fn(40, 40, |x, y| {
        let in_blob = (8..14).contains(&x) && (8..14).contains(&y);
        let on_streak = x >= 20 && x < 38 && y == x - 15;
        in_blob || on_streak
    });

    let mut from_mask = RegionSet::new();
    for p in mask.foreground_points() {
        from_mask.insert(p).unwrap();
    }
    from_mask.finalize().unwrap();
    assert_eq!(from_mask.count(), 2);

    let centroids = from_mask.centroids().unwrap();
    assert_eq!(centroids.len(), 2);
    // The blob centroid sits at the middle of the 8..14 square.
    assert!(centroids.contains(&Point::new(10, 10)));
}

#[test]
fn gap_fill_joins_a_peppered_area_into_one_region() {
    // Foreground pixels on a 3-pixel lattice: individually disconnected,
    // but dense enough that the default gap fill bridges them.
    let mut mask = BinaryMask::from_fn(30, 30, |x, y| {
        x >= 2 && x < 26 && y >= 2 && y < 26 && x % 3 == 0 && y % 3 == 0
    });

    let mut sparse = RegionSet::new();
    for p in mask.foreground_points() {
        sparse.insert(p).unwrap();
    }
    assert!(sparse.count() > 1);

    fill_gaps(&mut mask, &GapFillParams::default());
    let mut filled = RegionSet::new();
    for p in mask.foreground_points() {
        filled.insert(p).unwrap();
    }
    filled.finalize().unwrap();
    assert_eq!(filled.count(), 1);
}

#[test]
fn border_points_trace_the_outline_of_each_region() {
    let mut set = RegionSet::new();
    insert_all(&mut set, block(0, 0, 5, 5));

    let border = set.border_points();
    // 5x5 block: the 3x3 interior is not on the border.
    assert_eq!(border.len(), 25 - 9);
    assert!(border.contains(&Point::new(0, 0)));
    assert!(!border.contains(&Point::new(2, 2)));
}
