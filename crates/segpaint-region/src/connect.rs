//! Boundary connection
//!
//! The traced extents give four anchor points on the boundary: straight
//! above, right of, below and left of the seed. The connector checks that
//! consecutive anchors are joined by a chain of boundary pixels inside the
//! quadrant between them. A chain may jump across at most `gap_tolerance`
//! missing pixels; each such jump is a bridge, and the straight line across
//! it is recorded so the filler can treat it as wall.

use crate::extents::BoundaryExtents;
use segpaint_core::Mask;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Inclusive pixel rectangle `[x0, x1] x [y0, y1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Quadrant {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

/// A boundary proven to connect all four extents around a seed
///
/// Only [`connect_boundary`] creates these, so holding one means the
/// connector succeeded for this seed, label and mask size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedBoundary {
    label: u32,
    seed: (u32, u32),
    extents: BoundaryExtents,
    dimensions: (u32, u32),
    /// Closed walk through the four extents, in order
    path: Vec<(u32, u32)>,
    /// Sorted and deduplicated
    bridges: Vec<(u32, u32)>,
}

impl ClosedBoundary {
    /// Label of the boundary pixels.
    pub fn label(&self) -> u32 {
        self.label
    }

    /// Seed the boundary was connected around.
    pub fn seed(&self) -> (u32, u32) {
        self.seed
    }

    /// Extents the boundary was connected through.
    pub fn extents(&self) -> &BoundaryExtents {
        &self.extents
    }

    /// Dimensions of the mask the boundary was traced on.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Boundary pixels visited by the closed walk, starting at the top
    /// extent. The last pixel joins back to the first.
    pub fn path(&self) -> &[(u32, u32)] {
        &self.path
    }

    /// Pixels along the straight lines across bridged gaps.
    pub fn bridges(&self) -> &[(u32, u32)] {
        &self.bridges
    }

    /// Check whether `(x, y)` lies on a bridge line.
    pub fn is_bridge(&self, x: u32, y: u32) -> bool {
        self.bridges.binary_search(&(x, y)).is_ok()
    }

    /// Check whether a pixel with the given label at `(x, y)` is part of
    /// the wall: a boundary pixel or a bridge pixel.
    #[inline]
    pub fn is_wall(&self, x: u32, y: u32, label: u32) -> bool {
        label == self.label || self.is_bridge(x, y)
    }
}

/// Pixels strictly between two points on a Bresenham line.
fn line_between(from: (u32, u32), to: (u32, u32)) -> Vec<(u32, u32)> {
    let (x1, y1) = (i64::from(from.0), i64::from(from.1));
    let (x2, y2) = (i64::from(to.0), i64::from(to.1));

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1 } else { -1 };
    let sy = if y2 > y1 { 1 } else { -1 };
    let steps = dx.max(dy);

    let mut points = Vec::with_capacity(steps.saturating_sub(1) as usize);
    let (mut x, mut y) = (x1, y1);

    if dx >= dy {
        let mut err = dx / 2;
        for _ in 1..steps {
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
            points.push((x as u32, y as u32));
        }
    } else {
        let mut err = dy / 2;
        for _ in 1..steps {
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
            points.push((x as u32, y as u32));
        }
    }

    points
}

/// Walk from `from` to `to` over `label` pixels inside `quad`.
///
/// Steps to a neighbouring pixel are free; a jump of up to `reach` pixels
/// is a bridge. Paths are ranked first by bridge count, then by the summed
/// squared length of their jumps, so a gap is crossed between its nearest
/// ends rather than by a chord across a corner. Returns the pixels of the
/// walk from `from` to `to` inclusive, or `None` if `to` is unreachable.
fn walk_segment(
    mask: &Mask,
    label: u32,
    from: (u32, u32),
    to: (u32, u32),
    quad: Quadrant,
    reach: u32,
) -> Option<Vec<(u32, u32)>> {
    let width = mask.width() as usize;
    let len = width * mask.height() as usize;
    let mut cost = vec![(u32::MAX, u64::MAX); len];
    let mut done = vec![false; len];
    let mut parent = vec![usize::MAX; len];

    let start = mask.index(from.0, from.1);
    let goal = mask.index(to.0, to.1);
    cost[start] = (0, 0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((cost[start], start)));

    while let Some(Reverse((current, idx))) = heap.pop() {
        if done[idx] || current > cost[idx] {
            continue;
        }
        done[idx] = true;
        if idx == goal {
            break;
        }

        let x = (idx % width) as u32;
        let y = (idx / width) as u32;
        let xs = x.saturating_sub(reach).max(quad.x0)..=x.saturating_add(reach).min(quad.x1);
        let ys = y.saturating_sub(reach).max(quad.y0)..=y.saturating_add(reach).min(quad.y1);
        for ny in ys {
            for nx in xs.clone() {
                if (nx, ny) == (x, y) || mask.get_label_unchecked(nx, ny) != label {
                    continue;
                }

                let n = mask.index(nx, ny);
                let (ddx, ddy) = (u64::from(nx.abs_diff(x)), u64::from(ny.abs_diff(y)));
                let next = if ddx.max(ddy) > 1 {
                    (current.0 + 1, current.1 + ddx * ddx + ddy * ddy)
                } else {
                    current
                };
                if done[n] || next >= cost[n] {
                    continue;
                }
                cost[n] = next;
                parent[n] = idx;
                heap.push(Reverse((next, n)));
            }
        }
    }

    if !done[goal] {
        return None;
    }

    let mut path = vec![to];
    let mut idx = goal;
    while idx != start {
        idx = parent[idx];
        path.push(((idx % width) as u32, (idx / width) as u32));
    }
    path.reverse();
    Some(path)
}

/// Connect the four extents of the `label` boundary around a seed.
///
/// Returns `None` if any extent is missing, the seed is outside the mask,
/// or two consecutive extents cannot be joined within `gap_tolerance`.
///
/// # Arguments
///
/// * `mask` - Mask to inspect (not modified)
/// * `seed_x`, `seed_y` - Seed the extents were traced from
/// * `extents` - Result of [`trace_extents`](crate::trace_extents)
/// * `label` - Boundary label
/// * `gap_tolerance` - Largest run of missing boundary pixels to bridge
pub fn connect_boundary(
    mask: &Mask,
    seed_x: u32,
    seed_y: u32,
    extents: &BoundaryExtents,
    label: u32,
    gap_tolerance: u32,
) -> Option<ClosedBoundary> {
    let (top, right, bottom, left) =
        match (extents.top, extents.right, extents.bottom, extents.left) {
            (Some(t), Some(r), Some(b), Some(l)) => (t, r, b, l),
            _ => return None,
        };
    if !mask.contains(i64::from(seed_x), i64::from(seed_y)) {
        return None;
    }

    let (max_x, max_y) = (mask.width() - 1, mask.height() - 1);
    let anchors = [
        (seed_x, top),
        (right, seed_y),
        (seed_x, bottom),
        (left, seed_y),
    ];
    let quadrants = [
        Quadrant {
            x0: seed_x,
            y0: 0,
            x1: max_x,
            y1: seed_y,
        },
        Quadrant {
            x0: seed_x,
            y0: seed_y,
            x1: max_x,
            y1: max_y,
        },
        Quadrant {
            x0: 0,
            y0: seed_y,
            x1: seed_x,
            y1: max_y,
        },
        Quadrant {
            x0: 0,
            y0: 0,
            x1: seed_x,
            y1: seed_y,
        },
    ];
    let reach = gap_tolerance.saturating_add(1);

    let mut path = Vec::new();
    for (i, quad) in quadrants.into_iter().enumerate() {
        let from = anchors[i];
        let to = anchors[(i + 1) % 4];
        let Some(mut segment) = walk_segment(mask, label, from, to, quad, reach) else {
            tracing::trace!(segment = i, ?from, ?to, "boundary segment not connected");
            return None;
        };
        // The next segment starts at `to`
        segment.pop();
        path.append(&mut segment);
    }

    let mut bridges = Vec::new();
    for (i, &a) in path.iter().enumerate() {
        let b = path[(i + 1) % path.len()];
        if a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)) > 1 {
            bridges.extend(line_between(a, b));
        }
    }
    bridges.sort_unstable();
    bridges.dedup();

    Some(ClosedBoundary {
        label,
        seed: (seed_x, seed_y),
        extents: *extents,
        dimensions: mask.dimensions(),
        path,
        bridges,
    })
}

/// Check whether the four extents are connected. See [`connect_boundary`].
pub fn connect(
    mask: &Mask,
    seed_x: u32,
    seed_y: u32,
    extents: &BoundaryExtents,
    label: u32,
    gap_tolerance: u32,
) -> bool {
    connect_boundary(mask, seed_x, seed_y, extents, label, gap_tolerance).is_some()
}
