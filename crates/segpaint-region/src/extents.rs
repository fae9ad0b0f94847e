//! Boundary tracing
//!
//! Four rays are cast from the seed pixel, one per axis direction. Each ray
//! reports the farthest pixel carrying the boundary label before it leaves
//! the mask. The four results bound the region the seed sits in and give
//! the connector its anchor points.

use segpaint_core::{BACKGROUND, Mask};

/// Axis-aligned ray direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ray {
    Up,
    Right,
    Down,
    Left,
}

impl Ray {
    /// All rays in tie-break order.
    pub const ALL: [Ray; 4] = [Ray::Up, Ray::Right, Ray::Down, Ray::Left];

    /// Unit step `(dx, dy)` of this ray.
    #[inline]
    pub fn step(self) -> (i64, i64) {
        match self {
            Ray::Up => (0, -1),
            Ray::Right => (1, 0),
            Ray::Down => (0, 1),
            Ray::Left => (-1, 0),
        }
    }

    /// Whether the ray moves along the x axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Ray::Right | Ray::Left)
    }
}

/// Farthest boundary pixel found on each ray
///
/// `top` and `bottom` are y coordinates on the seed's column; `left` and
/// `right` are x coordinates on the seed's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundaryExtents {
    pub top: Option<u32>,
    pub right: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
}

impl BoundaryExtents {
    /// Get the extent for one ray.
    pub fn get(&self, ray: Ray) -> Option<u32> {
        match ray {
            Ray::Up => self.top,
            Ray::Right => self.right,
            Ray::Down => self.bottom,
            Ray::Left => self.left,
        }
    }

    /// True when every ray found a boundary pixel.
    pub fn is_complete(&self) -> bool {
        Ray::ALL.iter().all(|&r| self.get(r).is_some())
    }

    /// True when no ray found a boundary pixel.
    pub fn is_empty(&self) -> bool {
        Ray::ALL.iter().all(|&r| self.get(r).is_none())
    }

    fn set(&mut self, ray: Ray, value: Option<u32>) {
        match ray {
            Ray::Up => self.top = value,
            Ray::Right => self.right = value,
            Ray::Down => self.bottom = value,
            Ray::Left => self.left = value,
        }
    }
}

/// Pixels on a ray, nearest first, as `(distance, x, y, label)`.
fn walk_ray(
    mask: &Mask,
    seed_x: u32,
    seed_y: u32,
    ray: Ray,
) -> impl Iterator<Item = (u32, u32, u32, u32)> + '_ {
    let (dx, dy) = ray.step();
    let (sx, sy) = (i64::from(seed_x), i64::from(seed_y));

    (1i64..)
        .map(move |d| (d, sx + dx * d, sy + dy * d))
        .take_while(move |&(_, x, y)| mask.contains(x, y))
        .map(move |(d, x, y)| {
            let (x, y) = (x as u32, y as u32);
            (d as u32, x, y, mask.get_label_unchecked(x, y))
        })
}

/// Trace the extents of the `label` boundary around a seed.
///
/// Each ray starts one pixel away from the seed and records the farthest
/// pixel carrying `label`. A seed outside the mask yields empty extents.
///
/// # Examples
///
/// ```
/// use segpaint_core::Mask;
/// use segpaint_region::trace_extents;
///
/// let mut mask = Mask::new(5, 5).unwrap();
/// mask.set_label(2, 0, 1).unwrap();
/// mask.set_label(4, 2, 1).unwrap();
///
/// let extents = trace_extents(&mask, 2, 2, 1);
/// assert_eq!(extents.top, Some(0));
/// assert_eq!(extents.right, Some(4));
/// assert_eq!(extents.bottom, None);
/// assert_eq!(extents.left, None);
/// ```
pub fn trace_extents(mask: &Mask, seed_x: u32, seed_y: u32, label: u32) -> BoundaryExtents {
    let mut extents = BoundaryExtents::default();
    if !mask.contains(i64::from(seed_x), i64::from(seed_y)) {
        return extents;
    }

    for ray in Ray::ALL {
        let farthest = walk_ray(mask, seed_x, seed_y, ray)
            .filter(|&(_, _, _, v)| v == label)
            .last()
            .map(|(_, x, y, _)| if ray.is_horizontal() { x } else { y });
        extents.set(ray, farthest);
    }

    extents
}

/// Pick the label of the boundary surrounding a seed.
///
/// Returns the label of the nearest painted pixel, on any of the four rays,
/// whose label differs from the seed's own. Ties go to the first ray in
/// up, right, down, left order. Falls back to `fill_label` when no ray
/// meets such a pixel or the seed is outside the mask.
pub fn probe_boundary_label(mask: &Mask, seed_x: u32, seed_y: u32, fill_label: u32) -> u32 {
    let Some(seed_label) = mask.get_label(seed_x, seed_y) else {
        return fill_label;
    };

    let mut nearest: Option<(u32, u32)> = None;
    for ray in Ray::ALL {
        let hit = walk_ray(mask, seed_x, seed_y, ray)
            .find(|&(_, _, _, v)| v != BACKGROUND && v != seed_label);
        if let Some((d, _, _, v)) = hit {
            if nearest.is_none_or(|(best, _)| d < best) {
                nearest = Some((d, v));
            }
        }
    }

    nearest.map_or(fill_label, |(_, v)| v)
}
