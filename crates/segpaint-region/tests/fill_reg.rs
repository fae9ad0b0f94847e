//! Enclosed-region fill regression test
//!
//! Ring fill, gap handling, seed validation and the no-op cases of the
//! fill pipeline.

use segpaint_core::{BACKGROUND, Mask, rasterize_circle};
use segpaint_region::{AbortReason, FillOutcome, FillParams, fill_enclosed_region};
use segpaint_test::{RegParams, mask_from_ascii, ring_mask};

/// 11x11 ring of label 1 around (5, 5): the radius 4 disk minus radius 3.
fn ring() -> Mask {
    ring_mask(11, 11, 5, 5, 4, 1)
}

#[test]
fn fill_ring_reg() {
    let mut rp = RegParams::new("fill_ring");

    let mut mask = ring();
    let outcome = fill_enclosed_region(&mut mask, 5.0, 5.0, &FillParams::new(2, 1));
    rp.compare_values(1.0, if outcome.is_filled() { 1.0 } else { 0.0 }, 0.0);

    let expected = mask_from_ascii(&[
        "...........",
        ".....1.....",
        "...11211...",
        "..1222221..",
        "..1222221..",
        ".122222221.",
        "..1222221..",
        "..1222221..",
        "...11211...",
        ".....1.....",
        "...........",
    ])
    .unwrap();
    rp.compare_masks(&expected, &mask);
    rp.compare_values(29.0, mask.count_label(2) as f64, 0.0);
    rp.compare_values(
        rasterize_circle(3, 11, 11, 5, 5).len() as f64,
        mask.count_label(2) as f64,
        0.0,
    );

    // Filling again is rejected: the seed already carries label 2.
    let before = mask.clone();
    let outcome = fill_enclosed_region(&mut mask, 5.0, 5.0, &FillParams::new(2, 1));
    rp.compare_values(1.0, if outcome == FillOutcome::Rejected { 1.0 } else { 0.0 }, 0.0);
    rp.compare_masks(&before, &mask);

    assert!(rp.cleanup(), "fill_ring regression test failed");
}

#[test]
fn fill_same_label_reg() {
    let mut rp = RegParams::new("fill_same_label");

    // Brush and fill with the same label: the ring becomes a solid disk.
    let mut mask = ring();
    let outcome = fill_enclosed_region(&mut mask, 5.2, 4.8, &FillParams::new(1, 1));
    rp.compare_values(
        1.0,
        if outcome == (FillOutcome::Filled { pixels: 29 }) { 1.0 } else { 0.0 },
        0.0,
    );

    let mut disk = Mask::new(11, 11).unwrap();
    disk.paint_stamp(&rasterize_circle(4, 11, 11, 5, 5), 1);
    rp.compare_masks(&disk, &mask);

    assert!(rp.cleanup(), "fill_same_label regression test failed");
}

#[test]
fn fill_gap_reg() {
    let mut rp = RegParams::new("fill_gap");

    // Two-pixel gap in the upper-right arc.
    let mut mask = ring();
    mask.set_label(6, 2, 0).unwrap();
    mask.set_label(7, 2, 0).unwrap();
    let before = mask.clone();

    let outcome = fill_enclosed_region(&mut mask, 5.0, 5.0, &FillParams::new(2, 1));
    rp.compare_values(
        1.0,
        if outcome == FillOutcome::Aborted(AbortReason::NotConnected) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_masks(&before, &mask);

    // A wider tolerance bridges it, and the fill stays inside.
    let params = FillParams::new(2, 1).with_gap_tolerance(2);
    let outcome = fill_enclosed_region(&mut mask, 5.0, 5.0, &params);
    rp.compare_values(1.0, if outcome.is_filled() { 1.0 } else { 0.0 }, 0.0);
    for (x, y) in [(0, 0), (10, 0), (6, 0), (8, 1), (10, 10)] {
        rp.compare_values(0.0, f64::from(mask.get_label(x, y).unwrap_or(9)), 0.0);
    }
    rp.compare_values(2.0, f64::from(mask.get_label(5, 2).unwrap_or(9)), 0.0);

    assert!(rp.cleanup(), "fill_gap regression test failed");
}

#[test]
fn fill_one_pixel_gap_reg() {
    let mut rp = RegParams::new("fill_one_pixel_gap");

    // Default tolerance closes a single missing pixel; the leak is sealed.
    let mut mask = ring();
    mask.set_label(6, 2, 0).unwrap();
    let outcome = fill_enclosed_region(&mut mask, 5.0, 5.0, &FillParams::new(2, 1));
    rp.compare_values(1.0, if outcome.is_filled() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(30.0, mask.count_label(2) as f64, 0.0);
    rp.compare_values(0.0, f64::from(mask.get_label(0, 0).unwrap_or(9)), 0.0);
    rp.compare_values(0.0, f64::from(mask.get_label(6, 1).unwrap_or(9)), 0.0);

    assert!(rp.cleanup(), "fill_one_pixel_gap regression test failed");
}

#[test]
fn fill_nested_ring_reg() {
    let mut rp = RegParams::new("fill_nested_ring");

    // Radius 4 ring inside a radius 9 ring, both label 1. The inner ring
    // stops the fill; the outer one closes the boundary.
    let mut mask = ring_mask(21, 21, 10, 10, 9, 1);
    mask.paint_stamp(&rasterize_circle(4, 21, 21, 10, 10), 1);
    mask.paint_stamp(&rasterize_circle(3, 21, 21, 10, 10), BACKGROUND);
    let outcome = fill_enclosed_region(&mut mask, 10.0, 10.0, &FillParams::new(2, 1));
    rp.compare_values(
        1.0,
        if outcome == (FillOutcome::Filled { pixels: 29 }) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(2.0, f64::from(mask.get_label(10, 10).unwrap_or(9)), 0.0);
    rp.compare_values(0.0, f64::from(mask.get_label(10, 4).unwrap_or(9)), 0.0);
    rp.compare_values(0.0, f64::from(mask.get_label(16, 10).unwrap_or(9)), 0.0);

    assert!(rp.cleanup(), "fill_nested_ring regression test failed");
}

#[test]
fn fill_around_stroke_reg() {
    let mut rp = RegParams::new("fill_around_stroke");

    // A short stroke of the ring's label inside the ring, right of the seed.
    let mut mask = ring_mask(21, 21, 10, 10, 9, 1);
    for y in 9..=11 {
        mask.set_label(14, y, 1).unwrap();
    }
    let outcome = fill_enclosed_region(&mut mask, 10.0, 10.0, &FillParams::new(2, 1));
    let interior = rasterize_circle(8, 21, 21, 10, 10).len() as u32 - 3;
    rp.compare_values(
        1.0,
        if outcome == (FillOutcome::Filled { pixels: interior }) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(194.0, mask.count_label(2) as f64, 0.0);
    rp.compare_values(1.0, f64::from(mask.get_label(14, 10).unwrap_or(9)), 0.0);
    rp.compare_values(2.0, f64::from(mask.get_label(15, 10).unwrap_or(9)), 0.0);

    assert!(rp.cleanup(), "fill_around_stroke regression test failed");
}

#[test]
fn fill_large_tolerance_reg() {
    let mut rp = RegParams::new("fill_large_tolerance");

    let params = FillParams::new(2, 1).with_gap_tolerance(100_000);
    let mut mask = ring_mask(21, 21, 10, 10, 9, 1);
    let outcome = fill_enclosed_region(&mut mask, 10.0, 10.0, &params);
    rp.compare_values(
        1.0,
        if outcome == (FillOutcome::Filled { pixels: 197 }) { 1.0 } else { 0.0 },
        0.0,
    );

    // The same gap a tolerance of 2 bridges, with the same result.
    let mut gapped = ring();
    gapped.set_label(6, 2, 0).unwrap();
    gapped.set_label(7, 2, 0).unwrap();
    let outcome = fill_enclosed_region(&mut gapped, 5.0, 5.0, &params);
    rp.compare_values(1.0, if outcome.is_filled() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(29.0, gapped.count_label(2) as f64, 0.0);
    rp.compare_values(0.0, f64::from(gapped.get_label(6, 1).unwrap_or(9)), 0.0);

    assert!(rp.cleanup(), "fill_large_tolerance regression test failed");
}

#[test]
fn fill_noop_reg() {
    let mut rp = RegParams::new("fill_noop");
    let params = FillParams::new(2, 1);

    // Seed outside the image.
    let mut mask = ring();
    let before = mask.clone();
    for (x, y) in [(16.0, 5.0), (-0.5, 5.0), (5.0, 11.2), (10.8, 5.0)] {
        let outcome = fill_enclosed_region(&mut mask, x, y, &params);
        rp.compare_values(1.0, if outcome == FillOutcome::Idle { 1.0 } else { 0.0 }, 0.0);
    }
    rp.compare_masks(&before, &mask);

    // Seed on the ring itself.
    let outcome = fill_enclosed_region(&mut mask, 5.0, 1.0, &params);
    rp.compare_values(1.0, if outcome == FillOutcome::Rejected { 1.0 } else { 0.0 }, 0.0);

    // Seed outside the ring: the rays never find the far side.
    let outcome = fill_enclosed_region(&mut mask, 0.0, 5.0, &params);
    rp.compare_values(1.0, if !outcome.is_filled() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_masks(&before, &mask);

    // Brush too large for the region.
    let outcome = fill_enclosed_region(&mut mask, 5.0, 5.0, &FillParams::new(2, 4));
    rp.compare_values(
        1.0,
        if outcome == FillOutcome::Aborted(AbortReason::NotEnclosed) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_masks(&before, &mask);

    // Empty mask.
    let mut empty = Mask::new(11, 11).unwrap();
    let outcome = fill_enclosed_region(&mut empty, 5.0, 5.0, &params);
    rp.compare_values(
        1.0,
        if outcome == FillOutcome::Aborted(AbortReason::NotConnected) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(0.0, empty.count_label(2) as f64, 0.0);

    // A painted disk refilled with its own label.
    let mut disk = Mask::new(15, 15).unwrap();
    disk.paint_stamp(&rasterize_circle(5, 15, 15, 7, 7), 3);
    let painted = disk.clone();
    let outcome = fill_enclosed_region(&mut disk, 7.0, 7.0, &FillParams::new(3, 1));
    rp.compare_values(1.0, if outcome == FillOutcome::Rejected { 1.0 } else { 0.0 }, 0.0);
    rp.compare_masks(&painted, &disk);

    assert!(rp.cleanup(), "fill_noop regression test failed");
}
