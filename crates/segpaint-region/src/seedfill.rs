//! Seed fill operations
//!
//! Breadth-first flood fill over a label mask. The fill relabels every
//! pixel reachable from the seed that does not already carry the fill
//! label and is not part of a wall. Walls come from a [`ClosedBoundary`]:
//! its label pixels plus the bridge pixels laid across tolerated gaps.

use crate::connect::ClosedBoundary;
use crate::error::{RegionError, RegionResult};
use segpaint_core::Mask;
use std::collections::VecDeque;

/// Pixel connectivity for filling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (including diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Neighbour offsets for this connectivity.
    pub fn offsets(self) -> &'static [(i64, i64)] {
        const FOUR: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const EIGHT: [(i64, i64); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// Options for flood fill operations
#[derive(Debug, Clone, Copy, Default)]
pub struct FloodFillOptions<'a> {
    /// Connectivity type (4-way or 8-way)
    pub connectivity: ConnectivityType,
    /// Boundary whose label and bridge pixels stop the fill
    pub boundary: Option<&'a ClosedBoundary>,
}

impl<'a> FloodFillOptions<'a> {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            boundary: None,
        }
    }

    /// Stop the fill at the given boundary
    pub fn with_boundary(mut self, boundary: &'a ClosedBoundary) -> Self {
        self.boundary = Some(boundary);
        self
    }
}

/// Flood fill a label mask starting from a seed point
///
/// Relabels the region reachable from the seed to `fill_label` and returns
/// the number of pixels changed. Pixels already carrying `fill_label`, and
/// wall pixels of `options.boundary`, are neither filled nor crossed. A
/// visited bitmap is marked on enqueue, so each pixel is queued at most
/// once.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is outside the mask.
///
/// # Examples
///
/// ```
/// use segpaint_core::Mask;
/// use segpaint_region::{FloodFillOptions, flood_fill};
///
/// let mut mask = Mask::new(4, 4).unwrap();
/// for y in 0..4 {
///     mask.set_label(2, y, 1).unwrap();
/// }
///
/// let filled = flood_fill(&mut mask, 0, 0, 1, &FloodFillOptions::default()).unwrap();
/// assert_eq!(filled, 8);
/// assert_eq!(mask.get_label(3, 0), Some(0));
/// ```
pub fn flood_fill(
    mask: &mut Mask,
    seed_x: u32,
    seed_y: u32,
    fill_label: u32,
    options: &FloodFillOptions<'_>,
) -> RegionResult<u32> {
    let (width, height) = mask.dimensions();
    if seed_x >= width || seed_y >= height {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    }

    if let Some(boundary) = options.boundary
        && boundary.dimensions() != mask.dimensions()
    {
        return Err(RegionError::InvalidParameters(format!(
            "boundary traced on {:?} mask, filling {:?} mask",
            boundary.dimensions(),
            mask.dimensions()
        )));
    }

    let fillable = |x: u32, y: u32, label: u32| {
        label != fill_label && !options.boundary.is_some_and(|b| b.is_wall(x, y, label))
    };

    if !fillable(seed_x, seed_y, mask.get_label_unchecked(seed_x, seed_y)) {
        return Ok(0);
    }

    let mut visited = vec![false; (width as usize) * (height as usize)];
    let mut queue = VecDeque::new();
    visited[mask.index(seed_x, seed_y)] = true;
    queue.push_back((seed_x, seed_y));

    let mut filled_count = 0u32;
    while let Some((x, y)) = queue.pop_front() {
        mask.set_label_unchecked(x, y, fill_label);
        filled_count += 1;

        for &(dx, dy) in options.connectivity.offsets() {
            let (nx, ny) = (i64::from(x) + dx, i64::from(y) + dy);
            if !mask.contains(nx, ny) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let idx = mask.index(nx, ny);
            if visited[idx] || !fillable(nx, ny, mask.get_label_unchecked(nx, ny)) {
                continue;
            }
            visited[idx] = true;
            queue.push_back((nx, ny));
        }
    }

    Ok(filled_count)
}
