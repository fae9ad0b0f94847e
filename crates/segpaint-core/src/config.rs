//! Brush configuration
//!
//! Only `draw_label`, `radius` and `gap_tolerance` affect painting and
//! filling. The colour strings are passed through to the host's overlay
//! renderer untouched.

use crate::error::{Error, Result};
use crate::stamp::MAX_RADIUS;
use serde::{Deserialize, Serialize};

/// Default label written by the brush.
pub const DEFAULT_DRAW_LABEL: u32 = 1;

/// Default brush radius in image pixels.
pub const DEFAULT_RADIUS: u32 = 3;

/// Default number of missing boundary pixels the fill connector may bridge.
pub const DEFAULT_GAP_TOLERANCE: u32 = 1;

/// Brush tool configuration
///
/// # Examples
///
/// ```
/// use segpaint_core::BrushConfig;
///
/// let config = BrushConfig::from_json(r#"{ "radius": 5 }"#).unwrap();
/// assert_eq!(config.radius, 5);
/// assert_eq!(config.draw_label, 1);
/// assert_eq!(config.hover_color, "green");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Label painted into the mask (must be non-zero)
    pub draw_label: u32,
    /// Brush radius in image pixels
    pub radius: u32,
    /// Overlay colour while hovering
    pub hover_color: String,
    /// Overlay colour while dragging
    pub drag_color: String,
    /// Largest boundary gap, in pixels, that a fill may bridge
    pub gap_tolerance: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            draw_label: DEFAULT_DRAW_LABEL,
            radius: DEFAULT_RADIUS,
            hover_color: "green".to_string(),
            drag_color: "yellow".to_string(),
            gap_tolerance: DEFAULT_GAP_TOLERANCE,
        }
    }
}

impl BrushConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label painted into the mask
    pub fn with_draw_label(mut self, label: u32) -> Self {
        self.draw_label = label;
        self
    }

    /// Set the brush radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the hover and drag overlay colours
    pub fn with_colors(mut self, hover: impl Into<String>, drag: impl Into<String>) -> Self {
        self.hover_color = hover.into();
        self.drag_color = drag.into();
        self
    }

    /// Set the fill gap tolerance
    pub fn with_gap_tolerance(mut self, tolerance: u32) -> Self {
        self.gap_tolerance = tolerance;
        self
    }

    /// Check that the configuration can be used for painting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `draw_label` is the background
    /// label or `radius` exceeds [`MAX_RADIUS`].
    pub fn validate(&self) -> Result<()> {
        if self.draw_label == crate::BACKGROUND {
            return Err(Error::InvalidParameter(
                "draw_label must differ from the background label".to_string(),
            ));
        }
        if self.radius > MAX_RADIUS {
            return Err(Error::InvalidParameter(format!(
                "radius {} exceeds the maximum of {}",
                self.radius, MAX_RADIUS
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing fields take
    /// their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BrushConfig::default();
        assert_eq!(config.draw_label, 1);
        assert_eq!(config.radius, 3);
        assert_eq!(config.hover_color, "green");
        assert_eq!(config.drag_color, "yellow");
        assert_eq!(config.gap_tolerance, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BrushConfig::new()
            .with_draw_label(4)
            .with_radius(0)
            .with_colors("cyan", "red")
            .with_gap_tolerance(3);
        assert_eq!(config.draw_label, 4);
        assert_eq!(config.radius, 0);
        assert_eq!(config.hover_color, "cyan");
        assert_eq!(config.drag_color, "red");
        assert_eq!(config.gap_tolerance, 3);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BrushConfig::new().with_radius(7).with_draw_label(2);
        let json = config.to_json().unwrap();
        assert_eq!(BrushConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_rejects_background_label() {
        let err = BrushConfig::from_json(r#"{ "draw_label": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_json_rejects_oversized_radius() {
        let err = BrushConfig::from_json(r#"{ "radius": 4000000000 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(BrushConfig::new().with_radius(MAX_RADIUS).validate().is_ok());
        assert!(BrushConfig::new().with_radius(MAX_RADIUS + 1).validate().is_err());
    }

    #[test]
    fn test_json_rejects_malformed() {
        let err = BrushConfig::from_json(r#"{ "radius": -1 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
