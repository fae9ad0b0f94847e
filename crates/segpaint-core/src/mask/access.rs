//! Label access functions
//!
//! Checked accessors return `Option` / `Result`; the unchecked variants are
//! for inner loops that have already validated their coordinates.

use super::Mask;
use crate::error::{Error, Result};

impl Mask {
    /// Get the label at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_label(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[self.index(x, y)])
    }

    /// Get the label at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the buffer.
    #[inline]
    pub fn get_label_unchecked(&self, x: u32, y: u32) -> u32 {
        self.labels[self.index(x, y)]
    }

    /// Get the label at a signed coordinate, `None` outside the mask.
    #[inline]
    pub fn get_label_signed(&self, x: i64, y: i64) -> Option<u32> {
        if self.contains(x, y) {
            Some(self.get_label_unchecked(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Set the label at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_label(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.labels[idx] = label;
        Ok(())
    }

    /// Set the label at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the buffer.
    #[inline]
    pub fn set_label_unchecked(&mut self, x: u32, y: u32, label: u32) {
        let idx = self.index(x, y);
        self.labels[idx] = label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut mask = Mask::new(8, 8).unwrap();
        mask.set_label(7, 7, 42).unwrap();
        assert_eq!(mask.get_label(7, 7), Some(42));
        assert_eq!(mask.get_label_unchecked(7, 7), 42);
        assert_eq!(mask.labels()[63], 42);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut mask = Mask::new(8, 8).unwrap();
        let err = mask.set_label(8, 0, 1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { x: 8, y: 0, .. }));
        assert_eq!(mask.count_label(1), 0);
    }

    #[test]
    fn test_get_label_signed() {
        let mut mask = Mask::new(3, 3).unwrap();
        mask.set_label_unchecked(0, 2, 5);
        assert_eq!(mask.get_label_signed(0, 2), Some(5));
        assert_eq!(mask.get_label_signed(-1, 2), None);
        assert_eq!(mask.get_label_signed(0, 3), None);
    }
}
