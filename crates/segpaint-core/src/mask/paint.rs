//! Brush painting
//!
//! Applies a precomputed [`Stamp`] to a mask. This is the direct-paint path
//! used on pointer-down and drag.

use super::Mask;
use crate::stamp::Stamp;

impl Mask {
    /// Set `label` at every point of `stamp`.
    ///
    /// Stamps are clipped when they are built, but a stamp built for a
    /// larger mask is still accepted: its out-of-range points are skipped.
    /// Painting is idempotent, so applying the same stamp twice leaves the
    /// mask as it was after the first call.
    ///
    /// Returns the number of pixels whose label changed.
    pub fn paint_stamp(&mut self, stamp: &Stamp, label: u32) -> usize {
        let mut changed = 0;

        for &(x, y) in stamp.points() {
            if x >= self.width || y >= self.height {
                continue;
            }
            let idx = self.index(x, y);
            if self.labels[idx] != label {
                self.labels[idx] = label;
                changed += 1;
            }
        }

        tracing::trace!(points = stamp.len(), changed, label, "painted stamp");
        changed
    }
}

#[cfg(test)]
mod tests {
    use crate::stamp::rasterize_circle;
    use crate::{BACKGROUND, Mask};

    #[test]
    fn test_paint_disk() {
        let mut mask = Mask::new(9, 9).unwrap();
        let stamp = rasterize_circle(2, 9, 9, 4, 4);
        let changed = mask.paint_stamp(&stamp, 3);

        assert_eq!(changed, stamp.len());
        assert_eq!(mask.count_label(3), stamp.len());
        assert_eq!(mask.get_label(4, 4), Some(3));
        assert_eq!(mask.get_label(4, 2), Some(3));
        assert_eq!(mask.get_label(2, 2), Some(BACKGROUND));
    }

    #[test]
    fn test_paint_is_idempotent() {
        let mut mask = Mask::new(12, 12).unwrap();
        let stamp = rasterize_circle(3, 12, 12, 5, 6);

        mask.paint_stamp(&stamp, 1);
        let once = mask.clone();
        let changed = mask.paint_stamp(&stamp, 1);

        assert_eq!(changed, 0);
        assert_eq!(mask, once);
    }

    #[test]
    fn test_paint_skips_foreign_points() {
        let mut mask = Mask::new(4, 4).unwrap();
        // Built for a bigger surface than the mask it is applied to.
        let stamp = rasterize_circle(1, 10, 10, 3, 3);
        assert_eq!(stamp.len(), 5);
        let changed = mask.paint_stamp(&stamp, 2);

        // (4, 3) and (3, 4) fall outside the 4x4 mask.
        assert_eq!(changed, 3);
        assert_eq!(mask.get_label(3, 3), Some(2));
        assert_eq!(mask.get_label(0, 0), Some(BACKGROUND));
    }
}
