//! Mask - per-pixel label buffer for one annotation layer
//!
//! A `Mask` stores one `u32` label per pixel in a flat, row-major buffer.
//! Label 0 is the background; painted regions carry positive labels.
//!
//! # Pixel layout
//!
//! - `index = y * width + x`
//! - Dimensions are fixed at creation and never change
//!
//! # Ownership model
//!
//! A mask is owned by exactly one annotation layer and mutated in place
//! through `&mut Mask`. There is no shared-ownership variant: painting and
//! filling happen inside a single host callback, and rendering reads the
//! mask only after that callback returns.

mod access;
mod paint;

use crate::error::{Error, Result};

/// Label used for unpainted pixels.
pub const BACKGROUND: u32 = 0;

/// Label mask
///
/// # Examples
///
/// ```
/// use segpaint_core::Mask;
///
/// let mut mask = Mask::new(64, 48).unwrap();
/// assert_eq!(mask.width(), 64);
/// assert_eq!(mask.height(), 48);
///
/// mask.set_label(3, 4, 7).unwrap();
/// assert_eq!(mask.get_label(3, 4), Some(7));
/// assert_eq!(mask.get_label(64, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// One label per pixel, row-major
    labels: Vec<u32>,
}

impl Mask {
    /// Create a new mask with every pixel set to [`BACKGROUND`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            labels: vec![BACKGROUND; len],
        })
    }

    /// Create a mask from an existing row-major label buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::DimensionMismatch`] if `labels.len() != width * height`.
    pub fn from_labels(width: u32, height: u32, labels: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if labels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: labels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            labels,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether a signed coordinate lies inside the mask.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Buffer index of `(x, y)`. The caller guarantees the point is in bounds.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Read-only view of the label buffer.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Count the pixels carrying `label`.
    pub fn count_label(&self, label: u32) -> usize {
        self.labels.iter().filter(|&&v| v == label).count()
    }

    /// Reset every pixel to [`BACKGROUND`].
    pub fn clear(&mut self) {
        self.labels.fill(BACKGROUND);
    }

    /// Consume the mask and return its label buffer.
    pub fn into_labels(self) -> Vec<u32> {
        self.labels
    }
}
