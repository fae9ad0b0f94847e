//! segpaint-test - Regression test framework for segpaint
//!
//! This crate provides the helpers shared by the `tests/*_reg.rs` suites:
//!
//! - [`RegParams`] records numbered comparisons and reports every failure
//!   at the end instead of stopping at the first one
//! - [`mask_from_ascii`] / [`mask_to_ascii`] turn small masks into
//!   readable pictures and back
//!
//! # Usage
//!
//! ```
//! use segpaint_test::{RegParams, mask_from_ascii};
//!
//! let mask = mask_from_ascii(&[".#.", "###", ".#."]).unwrap();
//!
//! let mut rp = RegParams::new("plus");
//! rp.compare_values(5.0, mask.count_label(1) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixture;
mod params;

pub use error::{TestError, TestResult};
pub use fixture::{mask_from_ascii, mask_to_ascii};
pub use params::RegParams;

use segpaint_core::{Mask, rasterize_circle};

/// Build a `width` x `height` mask holding a one-pixel-thick ring of
/// `label` around `(cx, cy)`: the radius `r` disk minus the radius `r - 1`
/// disk.
pub fn ring_mask(width: u32, height: u32, cx: i64, cy: i64, radius: u32, label: u32) -> Mask {
    let mut mask = match Mask::new(width, height) {
        Ok(m) => m,
        Err(e) => panic!("invalid ring fixture: {}", e),
    };
    mask.paint_stamp(&rasterize_circle(radius, width, height, cx, cy), label);
    if radius > 0 {
        mask.paint_stamp(
            &rasterize_circle(radius - 1, width, height, cx, cy),
            segpaint_core::BACKGROUND,
        );
    }
    mask
}
