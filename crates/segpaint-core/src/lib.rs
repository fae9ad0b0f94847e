//! segpaint-core - Basic data structures for mask painting
//!
//! This crate provides the data structures shared by the segpaint crates:
//!
//! - [`Mask`] - Flat per-pixel label buffer for one annotation layer
//! - [`DiskOffsets`] / [`Stamp`] - Brush disks, relative and placed
//! - [`BrushConfig`] - Brush label, radius, gap tolerance and overlay colours
//!
//! # Painting
//!
//! ```
//! use segpaint_core::{Mask, rasterize_circle};
//!
//! let mut mask = Mask::new(32, 32).unwrap();
//! let stamp = rasterize_circle(3, mask.width(), mask.height(), 10, 12);
//! mask.paint_stamp(&stamp, 1);
//!
//! assert_eq!(mask.get_label(10, 12), Some(1));
//! assert_eq!(mask.count_label(1), stamp.len());
//! ```

pub mod config;
pub mod error;
pub mod mask;
pub mod stamp;

pub use config::{BrushConfig, DEFAULT_DRAW_LABEL, DEFAULT_GAP_TOLERANCE, DEFAULT_RADIUS};
pub use error::{Error, Result};
pub use mask::{BACKGROUND, Mask};
pub use stamp::{DiskOffsets, MAX_RADIUS, Stamp, rasterize_circle};
