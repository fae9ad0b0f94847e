//! Circle rasterization
//!
//! A brush is a filled disk. [`DiskOffsets`] holds the integer offsets of a
//! disk for one radius; [`DiskOffsets::place`] turns those offsets into a
//! [`Stamp`] of absolute pixel coordinates, clipped to a surface.
//!
//! The disk test is `dx² + dy² <= r²`, evaluated in integers, so a radius 0
//! disk is the single centre pixel and a radius 1 disk is a plus sign.

/// Largest brush radius. Larger radii are clamped.
pub const MAX_RADIUS: u32 = 1024;

/// Integer offsets of a filled disk, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskOffsets {
    radius: u32,
    offsets: Vec<(i64, i64)>,
}

impl DiskOffsets {
    /// Compute the offsets for a disk of the given radius, clamped to
    /// [`MAX_RADIUS`].
    pub fn new(radius: u32) -> Self {
        let radius = radius.min(MAX_RADIUS);
        let r = i64::from(radius);
        let r_sq = r * r;
        let diameter = 2 * r + 1;
        let capacity = usize::try_from(diameter * diameter).unwrap_or(0);
        let mut offsets = Vec::with_capacity(capacity);

        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    offsets.push((dx, dy));
                }
            }
        }

        Self { radius, offsets }
    }

    /// The radius these offsets were computed for.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of offsets.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check if empty. A disk always has at least its centre.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The `(dx, dy)` offsets.
    pub fn offsets(&self) -> &[(i64, i64)] {
        &self.offsets
    }

    /// Place the disk at `(center_x, center_y)` on a `width` x `height`
    /// surface. Points outside the surface are dropped.
    pub fn place(&self, center_x: i64, center_y: i64, width: u32, height: u32) -> Stamp {
        let w = i64::from(width);
        let h = i64::from(height);
        let mut points = Vec::with_capacity(self.offsets.len());

        for &(dx, dy) in &self.offsets {
            let x = center_x + dx;
            let y = center_y + dy;
            if x >= 0 && x < w && y >= 0 && y < h {
                points.push((x as u32, y as u32));
            }
        }

        Stamp { points }
    }
}

/// Absolute pixel coordinates of a placed disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stamp {
    points: Vec<(u32, u32)>,
}

impl Stamp {
    /// Create an empty stamp.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The stamp's points.
    pub fn points(&self) -> &[(u32, u32)] {
        &self.points
    }

    /// Check whether the stamp covers `(x, y)`.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.points.contains(&(x, y))
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.points.iter().copied()
    }
}

/// Rasterize a filled circle clipped to `[0, bounds_width) x [0, bounds_height)`.
///
/// # Examples
///
/// ```
/// use segpaint_core::rasterize_circle;
///
/// let stamp = rasterize_circle(1, 10, 10, 5, 5);
/// assert_eq!(stamp.len(), 5);
///
/// // Only the in-bounds quarter of a corner stamp survives.
/// let corner = rasterize_circle(1, 10, 10, 0, 0);
/// assert_eq!(corner.len(), 3);
/// ```
pub fn rasterize_circle(
    radius: u32,
    bounds_width: u32,
    bounds_height: u32,
    center_x: i64,
    center_y: i64,
) -> Stamp {
    DiskOffsets::new(radius).place(center_x, center_y, bounds_width, bounds_height)
}
