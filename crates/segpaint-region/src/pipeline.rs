//! Enclosed-region fill
//!
//! Runs the full sequence behind a double-click fill: round the seed,
//! pick the surrounding boundary label, trace its extents, connect them,
//! check enclosure, then flood fill. Every stage either hands over to the
//! next or ends with a [`FillOutcome`]; only a `Filled` outcome has
//! touched the mask.

use crate::connect::connect_boundary;
use crate::enclose::is_enclosed;
use crate::extents::{probe_boundary_label, trace_extents};
use crate::seedfill::{ConnectivityType, FloodFillOptions, flood_fill};
use segpaint_core::{
    BACKGROUND, BrushConfig, DEFAULT_DRAW_LABEL, DEFAULT_GAP_TOLERANCE, DEFAULT_RADIUS, Mask,
};

/// Parameters for [`fill_enclosed_region`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillParams {
    /// Label written into the filled region
    pub label: u32,
    /// Brush radius; the region must fit the brush around the seed
    pub radius: u32,
    /// Largest boundary gap the connector may bridge
    pub gap_tolerance: u32,
    /// Connectivity of the flood fill
    pub connectivity: ConnectivityType,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            label: DEFAULT_DRAW_LABEL,
            radius: DEFAULT_RADIUS,
            gap_tolerance: DEFAULT_GAP_TOLERANCE,
            connectivity: ConnectivityType::FourWay,
        }
    }
}

impl FillParams {
    /// Create parameters with the default gap tolerance and 4-way fill.
    pub fn new(label: u32, radius: u32) -> Self {
        Self {
            label,
            radius,
            ..Self::default()
        }
    }

    /// Set the gap tolerance
    pub fn with_gap_tolerance(mut self, tolerance: u32) -> Self {
        self.gap_tolerance = tolerance;
        self
    }

    /// Set the fill connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

impl From<&BrushConfig> for FillParams {
    fn from(config: &BrushConfig) -> Self {
        Self::new(config.draw_label, config.radius).with_gap_tolerance(config.gap_tolerance)
    }
}

/// Why a fill stopped before touching the mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbortReason {
    /// The boundary extents could not be joined into a closed loop
    NotConnected,
    /// The seed is outside the loop, or too close to it for the brush
    NotEnclosed,
}

/// Result of [`fill_enclosed_region`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillOutcome {
    /// The seed was outside the image
    Idle,
    /// The seed pixel is already painted
    Rejected,
    /// No enclosed region around the seed
    Aborted(AbortReason),
    /// The region was filled
    Filled { pixels: u32 },
}

impl FillOutcome {
    /// True if the mask was modified.
    pub fn is_filled(&self) -> bool {
        matches!(self, FillOutcome::Filled { pixels } if *pixels > 0)
    }
}

/// Round a pointer coordinate to a pixel inside `[0, limit)`.
///
/// Coordinates outside `[0, limit]`, or that round up to `limit`, are
/// rejected.
fn seed_pixel(coord: f64, limit: u32) -> Option<u32> {
    if !coord.is_finite() || coord < 0.0 || coord > f64::from(limit) {
        return None;
    }
    let rounded = coord.round() as u32;
    (rounded < limit).then_some(rounded)
}

/// Fill the enclosed region around a pointer position.
///
/// # Arguments
///
/// * `mask` - Mask to fill; left untouched unless the outcome is `Filled`
/// * `seed_x`, `seed_y` - Pointer position in image pixel coordinates
/// * `params` - Fill label, brush radius, gap tolerance, connectivity
///
/// # Examples
///
/// ```
/// use segpaint_core::Mask;
/// use segpaint_region::{FillOutcome, FillParams, fill_enclosed_region};
///
/// // 5x5 square outline of label 1
/// let mut mask = Mask::new(5, 5).unwrap();
/// for i in 0..5 {
///     for (x, y) in [(i, 0), (i, 4), (0, i), (4, i)] {
///         mask.set_label(x, y, 1).unwrap();
///     }
/// }
///
/// let outcome = fill_enclosed_region(&mut mask, 2.0, 2.0, &FillParams::new(1, 0));
/// assert_eq!(outcome, FillOutcome::Filled { pixels: 9 });
/// assert_eq!(mask.count_label(1), 25);
/// ```
pub fn fill_enclosed_region(
    mask: &mut Mask,
    seed_x: f64,
    seed_y: f64,
    params: &FillParams,
) -> FillOutcome {
    let (Some(sx), Some(sy)) = (
        seed_pixel(seed_x, mask.width()),
        seed_pixel(seed_y, mask.height()),
    ) else {
        tracing::debug!(seed_x, seed_y, "fill seed outside image");
        return FillOutcome::Idle;
    };

    let seed_label = mask.get_label_unchecked(sx, sy);
    if seed_label == params.label {
        tracing::debug!(x = sx, y = sy, label = params.label, "seed already filled");
        return FillOutcome::Rejected;
    }

    if seed_label != BACKGROUND {
        tracing::debug!(x = sx, y = sy, seed_label, "seed on painted pixel");
        return FillOutcome::Rejected;
    }

    let boundary_label = probe_boundary_label(mask, sx, sy, params.label);

    let extents = trace_extents(mask, sx, sy, boundary_label);
    tracing::trace!(?extents, boundary_label, "traced extents");

    let Some(boundary) =
        connect_boundary(mask, sx, sy, &extents, boundary_label, params.gap_tolerance)
    else {
        tracing::debug!(x = sx, y = sy, boundary_label, "boundary not connected");
        return FillOutcome::Aborted(AbortReason::NotConnected);
    };

    if !is_enclosed(mask, &boundary, params.radius) {
        tracing::debug!(x = sx, y = sy, radius = params.radius, "seed not enclosed");
        return FillOutcome::Aborted(AbortReason::NotEnclosed);
    }

    let options = FloodFillOptions::new(params.connectivity).with_boundary(&boundary);
    match flood_fill(mask, sx, sy, params.label, &options) {
        Ok(pixels) => {
            tracing::debug!(
                x = sx,
                y = sy,
                label = params.label,
                pixels,
                bridges = boundary.bridges().len(),
                "filled enclosed region"
            );
            FillOutcome::Filled { pixels }
        }
        Err(e) => {
            tracing::warn!(error = %e, "flood fill failed");
            FillOutcome::Idle
        }
    }
}
