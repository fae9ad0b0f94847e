//! segpaint-region - Boundary tracing and region filling
//!
//! This crate finds and fills regions enclosed by painted boundaries:
//!
//! - **Boundary tracing** - Farthest boundary pixel on each axis ray
//! - **Boundary connection** - Joining the traced extents, bridging small gaps
//! - **Enclosure test** - Ray-crossing parity and brush clearance
//! - **Seed fill** - Breadth-first flood fill stopped by boundary walls
//! - **Fill pipeline** - The whole sequence behind a fill gesture
//!
//! # Examples
//!
//! ```
//! use segpaint_core::{Mask, rasterize_circle};
//! use segpaint_region::{FillOutcome, FillParams, fill_enclosed_region};
//!
//! // Paint a ring: a radius 6 disk with a radius 5 hole.
//! let mut mask = Mask::new(20, 20).unwrap();
//! mask.paint_stamp(&rasterize_circle(6, 20, 20, 10, 10), 1);
//! mask.paint_stamp(&rasterize_circle(5, 20, 20, 10, 10), 0);
//!
//! let outcome = fill_enclosed_region(&mut mask, 10.0, 10.0, &FillParams::new(2, 1));
//! assert!(outcome.is_filled());
//! assert_eq!(mask.count_label(2), rasterize_circle(5, 20, 20, 10, 10).len());
//! ```

pub mod connect;
pub mod enclose;
pub mod error;
pub mod extents;
pub mod pipeline;
pub mod seedfill;

// Re-export core types
pub use segpaint_core;

pub use connect::{ClosedBoundary, connect, connect_boundary};
pub use enclose::{crossing_count, is_enclosed};
pub use error::{RegionError, RegionResult};
pub use extents::{BoundaryExtents, Ray, probe_boundary_label, trace_extents};
pub use pipeline::{AbortReason, FillOutcome, FillParams, fill_enclosed_region};
pub use seedfill::{ConnectivityType, FloodFillOptions, flood_fill};
