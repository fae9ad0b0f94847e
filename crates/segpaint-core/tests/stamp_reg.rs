//! Brush stamp regression test
//!
//! Disk rasterization, clipping and painting.

use segpaint_core::{DiskOffsets, Mask, rasterize_circle};
use segpaint_test::{RegParams, mask_from_ascii};

#[test]
fn stamp_reg() {
    let mut rp = RegParams::new("stamp");

    // --- Test 1: every point lies within the radius and the bounds ---
    for radius in 0..6u32 {
        for &(cx, cy) in &[(0i64, 0i64), (7, 5), (-2, 4), (15, 11), (20, 20)] {
            let stamp = rasterize_circle(radius, 16, 12, cx, cy);
            let r_sq = i64::from(radius * radius);
            let bad = stamp.iter().filter(|&(x, y)| {
                let (dx, dy) = (i64::from(x) - cx, i64::from(y) - cy);
                x >= 16 || y >= 12 || dx * dx + dy * dy > r_sq
            });
            rp.compare_values(0.0, bad.count() as f64, 0.0);
        }
    }

    // --- Test 2: fully inside stamps have the unclipped disk size ---
    for radius in 0..5u32 {
        let full = DiskOffsets::new(radius).len();
        let stamp = rasterize_circle(radius, 16, 12, 8, 6);
        rp.compare_values(full as f64, stamp.len() as f64, 0.0);
    }

    // --- Test 3: a stamp far outside the mask is empty ---
    rp.compare_values(0.0, rasterize_circle(3, 16, 12, 40, -40).len() as f64, 0.0);

    // --- Test 4: radius 2 disk picture ---
    let mut mask = Mask::new(7, 7).unwrap();
    mask.paint_stamp(&rasterize_circle(2, 7, 7, 3, 3), 1);
    let expected = mask_from_ascii(&[
        ".......", //
        "...#...", //
        "..###..", //
        ".#####.", //
        "..###..", //
        "...#...", //
        ".......", //
    ])
    .unwrap();
    rp.compare_masks(&expected, &mask);

    // --- Test 5: clipped at the corner ---
    let mut mask = Mask::new(4, 4).unwrap();
    mask.paint_stamp(&rasterize_circle(2, 4, 4, 0, 0), 3);
    let expected = mask_from_ascii(&["333.", "33..", "3...", "...."]).unwrap();
    rp.compare_masks(&expected, &mask);

    assert!(rp.cleanup(), "stamp regression test failed");
}

#[test]
fn paint_idempotent_reg() {
    let mut rp = RegParams::new("paint_idempotent");

    let offsets = DiskOffsets::new(3);
    let mut once = Mask::new(20, 20).unwrap();
    let mut twice = once.clone();

    for &(cx, cy) in &[(5i64, 5i64), (9, 6), (19, 19), (-1, 10)] {
        let stamp = offsets.place(cx, cy, 20, 20);
        once.paint_stamp(&stamp, 2);
        let first = twice.paint_stamp(&stamp, 2);
        let second = twice.paint_stamp(&stamp, 2);
        rp.compare_values(0.0, second as f64, 0.0);
        rp.compare_values(1.0, if first > 0 { 1.0 } else { 0.0 }, 0.0);
    }
    rp.compare_masks(&once, &twice);

    // Overpainting with another label replaces, never blends.
    let stamp = offsets.place(5, 5, 20, 20);
    twice.paint_stamp(&stamp, 4);
    let fours = stamp.iter().filter(|&(x, y)| twice.get_label(x, y) == Some(4));
    rp.compare_values(stamp.len() as f64, fours.count() as f64, 0.0);

    assert!(rp.cleanup(), "paint_idempotent regression test failed");
}
