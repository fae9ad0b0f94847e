//! segpaint - Brush painting and region filling for segmentation masks
//!
//! Paint labels into a per-pixel mask with a circular brush, and fill the
//! region enclosed by a painted boundary with a single gesture.
//!
//! # Overview
//!
//! - [`Mask`], [`rasterize_circle`] and [`BrushConfig`] from `segpaint-core`
//! - [`region`] - boundary tracing, gap bridging, enclosure test, flood fill
//! - [`tools`] - the brush tool and mouse/touch adapters
//!
//! # Example
//!
//! ```
//! use segpaint::region::{FillOutcome, FillParams, fill_enclosed_region};
//! use segpaint::{Mask, rasterize_circle};
//!
//! let mut mask = Mask::new(16, 16).unwrap();
//! mask.paint_stamp(&rasterize_circle(5, 16, 16, 8, 8), 1);
//! mask.paint_stamp(&rasterize_circle(4, 16, 16, 8, 8), 0);
//!
//! let outcome = fill_enclosed_region(&mut mask, 8.0, 8.0, &FillParams::new(1, 1));
//! assert!(matches!(outcome, FillOutcome::Filled { .. }));
//! assert_eq!(mask.get_label(8, 8), Some(1));
//! ```

mod logging;

// Re-export core types (primary data structures used everywhere)
pub use segpaint_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use segpaint_region as region;
pub use segpaint_tools as tools;

pub use logging::{LogLevel, LoggingError, init_logging};
