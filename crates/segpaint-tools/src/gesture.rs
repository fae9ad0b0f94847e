//! Pointer gestures
//!
//! Mouse and touch input are reduced to one [`PointerEvent`] shape and one
//! [`PointerGesture`] trait; see [`crate::input`] for the adapters.

use crate::error::ToolResult;
use crate::store::{ElementId, ToolStateStore};

/// Pointer position in image pixel coordinates, with the image size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub element: ElementId,
    pub x: f64,
    pub y: f64,
    /// Image height in pixels
    pub rows: u32,
    /// Image width in pixels
    pub columns: u32,
}

impl PointerEvent {
    pub fn new(element: ElementId, x: f64, y: f64, rows: u32, columns: u32) -> Self {
        Self {
            element,
            x,
            y,
            rows,
            columns,
        }
    }

    /// Whether the pointer lies within `[0, columns] x [0, rows]`.
    pub fn is_inside_image(&self) -> bool {
        is_inside(self.x, self.y, self.rows, self.columns)
    }
}

pub(crate) fn is_inside(x: f64, y: f64, rows: u32, columns: u32) -> bool {
    x >= 0.0 && x <= f64::from(columns) && y >= 0.0 && y <= f64::from(rows)
}

/// Host display services
pub trait Viewport {
    /// Ask the host to redraw an element.
    fn request_redraw(&mut self, element: ElementId);

    /// Convert image pixel coordinates to canvas coordinates.
    fn pixel_to_canvas(&self, element: ElementId, x: f64, y: f64) -> (f64, f64);
}

/// Everything a gesture handler may touch
pub struct ToolContext<'a> {
    pub store: &'a mut ToolStateStore,
    pub viewport: &'a mut dyn Viewport,
}

impl<'a> ToolContext<'a> {
    pub fn new(store: &'a mut ToolStateStore, viewport: &'a mut dyn Viewport) -> Self {
        Self { store, viewport }
    }
}

/// A tool driven by pointer gestures
pub trait PointerGesture {
    /// Pointer pressed.
    fn on_start(&mut self, event: &PointerEvent, ctx: &mut ToolContext<'_>) -> ToolResult<()>;

    /// Pointer moved, pressed or not.
    fn on_move(&mut self, event: &PointerEvent, ctx: &mut ToolContext<'_>) -> ToolResult<()>;

    /// Pointer released.
    fn on_end(&mut self, event: &PointerEvent, ctx: &mut ToolContext<'_>) -> ToolResult<()>;

    /// Double click or double tap.
    fn on_double_click(
        &mut self,
        _event: &PointerEvent,
        _ctx: &mut ToolContext<'_>,
    ) -> ToolResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_image_is_inclusive() {
        let el = ElementId(0);
        assert!(PointerEvent::new(el, 0.0, 0.0, 10, 20).is_inside_image());
        assert!(PointerEvent::new(el, 20.0, 10.0, 10, 20).is_inside_image());
        assert!(!PointerEvent::new(el, 20.5, 3.0, 10, 20).is_inside_image());
        assert!(!PointerEvent::new(el, 3.0, -0.5, 10, 20).is_inside_image());
    }
}
