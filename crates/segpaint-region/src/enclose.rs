//! Enclosure test
//!
//! A seed is enclosed when a ray cast east from it crosses the boundary an
//! odd number of times. [`is_enclosed`] casts the ray against the closed
//! walk the connector found, so other strokes of the same label, inside or
//! outside that walk, do not count. [`crossing_count`] casts it against
//! every pixel of a label: there a horizontal run on the ray counts as one
//! crossing only when label pixels touch it from the row above and from the
//! row below; a run touched from one side only is a tangent.

use crate::connect::ClosedBoundary;
use segpaint_core::Mask;

/// Count boundary crossings on the eastward ray from `(seed_x, seed_y)`.
fn count_crossings<F>(mask: &Mask, seed_x: u32, seed_y: u32, is_wall: F) -> u32
where
    F: Fn(u32, u32) -> bool,
{
    let (width, height) = mask.dimensions();
    if seed_x >= width || seed_y >= height {
        return 0;
    }

    let touches_row = |row: Option<u32>, x0: u32, x1: u32| {
        row.filter(|&r| r < height)
            .is_some_and(|r| (x0..=x1).any(|x| is_wall(x, r)))
    };

    let mut crossings = 0;
    let mut x = seed_x + 1;
    while x < width {
        if !is_wall(x, seed_y) {
            x += 1;
            continue;
        }

        let run_start = x;
        while x < width && is_wall(x, seed_y) {
            x += 1;
        }
        let lo = run_start.saturating_sub(1);
        let hi = x.min(width - 1);

        let above = touches_row(seed_y.checked_sub(1), lo, hi);
        let below = touches_row(seed_y.checked_add(1), lo, hi);
        if above && below {
            crossings += 1;
        }
    }

    crossings
}

/// Count the edges of the closed walk `path` that cross the eastward ray
/// from `(seed_x, seed_y)`. An edge counts when one end lies on or above the
/// ray's row and the other below it.
fn count_walk_crossings(path: &[(u32, u32)], seed_x: u32, seed_y: u32) -> u32 {
    let (px, py) = (i64::from(seed_x), i64::from(seed_y));
    let mut crossings = 0;

    for (i, &(ax, ay)) in path.iter().enumerate() {
        let (bx, by) = path[(i + 1) % path.len()];
        let (ax, ay, bx, by) = (i64::from(ax), i64::from(ay), i64::from(bx), i64::from(by));
        if (ay > py) == (by > py) {
            continue;
        }

        // px < ax + (bx - ax) * (py - ay) / (by - ay), without dividing
        let dy = by - ay;
        let lhs = (px - ax) * dy;
        let rhs = (bx - ax) * (py - ay);
        if (dy > 0 && lhs < rhs) || (dy < 0 && lhs > rhs) {
            crossings += 1;
        }
    }

    crossings
}

/// Count how often the eastward ray from the seed crosses `label` pixels.
///
/// # Examples
///
/// ```
/// use segpaint_core::Mask;
/// use segpaint_region::crossing_count;
///
/// // A vertical wall at x = 3 crosses the ray once.
/// let mut mask = Mask::new(5, 3).unwrap();
/// for y in 0..3 {
///     mask.set_label(3, y, 1).unwrap();
/// }
/// assert_eq!(crossing_count(&mask, 0, 1, 1), 1);
/// assert_eq!(crossing_count(&mask, 4, 1, 1), 0);
/// ```
pub fn crossing_count(mask: &Mask, seed_x: u32, seed_y: u32, label: u32) -> u32 {
    count_crossings(mask, seed_x, seed_y, |x, y| {
        mask.get_label_unchecked(x, y) == label
    })
}

/// Check that the boundary's seed lies inside it with room for the brush.
///
/// The eastward ray from the seed must cross the boundary's closed walk an
/// odd number of times, bridges included, and the `radius` brush square
/// around the seed must lie strictly inside the traced extents.
///
/// # Panics
///
/// Panics if `boundary` was connected on a mask of different dimensions.
pub fn is_enclosed(mask: &Mask, boundary: &ClosedBoundary, radius: u32) -> bool {
    assert_eq!(
        boundary.dimensions(),
        mask.dimensions(),
        "boundary was connected on a mask of different size"
    );

    let (seed_x, seed_y) = boundary.seed();
    let crossings = count_walk_crossings(boundary.path(), seed_x, seed_y);
    if crossings % 2 == 0 {
        tracing::trace!(crossings, "seed outside boundary");
        return false;
    }

    let extents = boundary.extents();
    let (Some(top), Some(right), Some(bottom), Some(left)) =
        (extents.top, extents.right, extents.bottom, extents.left)
    else {
        return false;
    };

    let (sx, sy, r) = (i64::from(seed_x), i64::from(seed_y), i64::from(radius));
    i64::from(top) < sy - r
        && i64::from(bottom) > sy + r
        && i64::from(left) < sx - r
        && i64::from(right) > sx + r
}
